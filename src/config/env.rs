//! Environment variable handling

/// Environment variables for server configuration
#[derive(Debug, Default, Clone)]
pub struct EnvVars {
    pub port: Option<u16>,
    pub interface: Option<String>,
    pub asset_dir: Option<String>,
}

/// Load configuration from environment variables
pub fn load_env_vars() -> EnvVars {
    let mut env = EnvVars::default();

    // Web server settings
    if let Ok(value) = std::env::var("CAPTION_PORT") {
        if let Ok(port) = value.parse() {
            env.port = Some(port);
        }
    }

    if let Ok(value) = std::env::var("CAPTION_INTERFACE") {
        env.interface = Some(value);
    }

    // Asset lookup
    if let Ok(value) = std::env::var("CAPTION_ASSET_DIR") {
        env.asset_dir = Some(value);
    }

    env
}
