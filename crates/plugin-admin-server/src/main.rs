//! Plugin Admin Server - HTTP backend for the admin plugins page.
//!
//! Serves the `admin/extend/plugins` view built from a plugin catalog file
//! and a deployment config file.

mod handlers;
mod render;
mod server;

use anyhow::Result;
use clap::Parser;
use plugin_admin::{
    CatalogFile, ConfigFile, PluginViewModelBuilder, ServerConfig, TrendingFailurePolicy,
};
use render::JsonViewRenderer;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "plugin-admin-server")]
#[command(about = "HTTP server for the plugin admin panel")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value = "0")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = ServerConfig::DEFAULT_HOST)]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Deployment config file (version, pinned plugins, usage reporting)
    #[arg(long)]
    config: PathBuf,

    /// Plugin catalog file (compatible, all and trending listings)
    #[arg(long)]
    catalog: PathBuf,

    /// Render without trending plugins when the trending source fails
    #[arg(long)]
    degrade_trending: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting {}", ServerConfig::APP_NAME);
    info!("Plugin catalog: {}", args.catalog.display());
    info!("Config file: {}", args.config.display());

    let catalog = Arc::new(CatalogFile::new(&args.catalog));
    let policy = if args.degrade_trending {
        TrendingFailurePolicy::Degrade
    } else {
        TrendingFailurePolicy::Propagate
    };
    let view_builder = PluginViewModelBuilder::new(
        catalog.clone(),
        catalog,
        Arc::new(ConfigFile::new(&args.config)),
    )
    .trending_policy(policy);

    let addr =
        server::start_server(view_builder, Arc::new(JsonViewRenderer), &args.host, args.port)
            .await?;

    // Announce the bound port on stdout for whoever spawned us
    println!("{}{}", ServerConfig::PORT_ANNOUNCE_PREFIX, addr.port());

    info!("Admin server running on {}", addr);

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
