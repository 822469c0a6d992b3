//! Configuration module that handles all application settings

mod cli;
mod env;
mod server;

pub use cli::CliArgs;
pub use env::{load_env_vars, EnvVars};
pub use server::ServerConfig;

/// Initialize configuration from all sources (CLI, environment, etc.)
pub fn init_config() -> ServerConfig {
    // Parse CLI args first
    let cli_args = CliArgs::parse();

    // Load environment variables
    let env_vars = load_env_vars();

    // Create ServerConfig by combining CLI args and environment variables
    ServerConfig::new(cli_args, env_vars)
}
