//! Command-line argument parsing

/// Command-line arguments for the Caption Overlay Server
#[derive(argh::FromArgs, Debug, Clone)]
/// Caption Overlay Server
///
/// Serves numbered JPEG assets with a dialogue caption composited on top.
pub struct CliArgs {
    #[argh(option, short = 'p', default = "3000")]
    /// port for the HTTP server. Default: 3000
    pub port: u16,

    #[argh(option, short = 'i', default = "String::from(\"0.0.0.0\")")]
    /// network interface to bind to. Default: 0.0.0.0
    pub interface: String,

    #[argh(option, short = 'a', default = "String::from(\"assets\")")]
    /// directory containing the numbered JPEG assets (<id>.jpg). Default: assets
    pub asset_dir: String,
}

impl CliArgs {
    /// Parse CLI arguments
    pub fn parse() -> Self {
        // Use argh to parse args from environment
        argh::from_env()
    }
}
