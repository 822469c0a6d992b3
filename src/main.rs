use axum::{routing::get, Router};
use caption_overlay_server::assets::AssetStore;
use caption_overlay_server::config::init_config;
use caption_overlay_server::render::load_fontdb;
use caption_overlay_server::web::api::render::render_image;
use caption_overlay_server::web::api::RenderContext;
use chrono::Local;
use colored::*;
use env_logger::Builder;
use log::{error, info, LevelFilter};
use std::io::Write;
use std::{net::SocketAddr, sync::Arc};

#[tokio::main]
async fn main() {
    // Initialize the logger with a custom format that includes timestamps and colors
    Builder::new()
        .format(|buf, record| {
            // Color based on log level
            let level = match record.level() {
                log::Level::Error => record.level().to_string().red().bold(),
                log::Level::Warn => record.level().to_string().yellow().bold(),
                log::Level::Info => record.level().to_string().green(),
                log::Level::Debug => record.level().to_string().blue(),
                log::Level::Trace => record.level().to_string().purple(),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                level,
                record.args()
            )
        })
        .filter(None, LevelFilter::Info) // Set default log level to Info
        .parse_env("RUST_LOG") // Allow overriding with RUST_LOG environment variable
        .init();

    info!("Starting Caption Overlay Server");

    // Initialize configuration
    let config = init_config();

    // Validate configuration
    if let Err(errors) = config.validate() {
        for error in errors {
            error!("{}", error);
        }
        std::process::exit(1);
    }

    // System fonts are loaded once and shared by all requests
    let fontdb = load_fontdb();
    info!("Loaded {} font faces for caption text", fontdb.faces().count());

    let state = Arc::new(RenderContext {
        assets: AssetStore::new(config.asset_dir.clone()),
        fontdb,
    });

    let app = Router::new()
        .route("/image", get(render_image))
        .with_state(state);

    let ip_addr = config
        .interface
        .parse::<std::net::IpAddr>()
        .expect("Invalid network interface address");

    let addr = SocketAddr::from((ip_addr, config.port));

    info!("Server running on http://{}/image", addr);

    if let Err(e) = axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .unwrap_or_else(|e| {
                error!("Failed to bind to address {}: {}", addr, e);
                std::process::exit(1);
            }),
        app,
    )
    .await
    {
        error!("Server error: {}", e);
    }
}
