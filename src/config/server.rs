//! Server configuration structure and methods

use super::{CliArgs, EnvVars};
use std::path::PathBuf;

/// Configuration structure that stores all server settings
#[derive(Clone, Debug)]
pub struct ServerConfig {
    // Web server configuration
    pub port: u16,
    pub interface: String,

    // Asset lookup
    pub asset_dir: PathBuf,
}

impl ServerConfig {
    /// Create a new configuration by combining CLI arguments and environment variables
    pub fn new(cli_args: CliArgs, env_vars: EnvVars) -> Self {
        // Apply settings from CLI args, then override with environment variables if present
        let port = env_vars.port.unwrap_or(cli_args.port);

        let interface = env_vars
            .interface
            .unwrap_or_else(|| cli_args.interface)
            .to_lowercase();

        let interface = if interface == "localhost" {
            "127.0.0.1".to_string()
        } else {
            interface
        };

        let asset_dir = PathBuf::from(env_vars.asset_dir.unwrap_or_else(|| cli_args.asset_dir));

        ServerConfig {
            port,
            interface,
            asset_dir,
        }
    }

    /// Validate the configuration, collecting all problems at once
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !self.asset_dir.is_dir() {
            errors.push(format!(
                "Asset directory does not exist: {}",
                self.asset_dir.display()
            ));
        }

        if self.interface.parse::<std::net::IpAddr>().is_err() {
            errors.push(format!(
                "Invalid network interface address: {}",
                self.interface
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_defaults() -> CliArgs {
        CliArgs {
            port: 3000,
            interface: "0.0.0.0".to_string(),
            asset_dir: "assets".to_string(),
        }
    }

    #[test]
    fn env_vars_override_cli_args() {
        let env = EnvVars {
            port: Some(8080),
            interface: Some("127.0.0.1".to_string()),
            asset_dir: Some("/srv/captions".to_string()),
        };
        let config = ServerConfig::new(cli_defaults(), env);

        assert_eq!(config.port, 8080);
        assert_eq!(config.interface, "127.0.0.1");
        assert_eq!(config.asset_dir, PathBuf::from("/srv/captions"));
    }

    #[test]
    fn localhost_maps_to_loopback_address() {
        let env = EnvVars {
            interface: Some("LocalHost".to_string()),
            ..EnvVars::default()
        };
        let config = ServerConfig::new(cli_defaults(), env);

        assert_eq!(config.interface, "127.0.0.1");
    }

    #[test]
    fn missing_asset_dir_fails_validation() {
        let env = EnvVars {
            asset_dir: Some("/definitely/not/a/real/dir".to_string()),
            ..EnvVars::default()
        };
        let config = ServerConfig::new(cli_defaults(), env);

        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("/definitely/not/a/real/dir")));
    }
}
