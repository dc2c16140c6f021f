#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use ecoguard_core::{ApiClient, ApiConfig, DEFAULT_BASE_URL};
use tracing_subscriber::EnvFilter;

/// Защитник природы - environmental incident reporting
#[derive(Parser, Debug)]
#[command(name = "ecoguard-desktop")]
#[command(about = "Защитник природы - report pollution, follow statistics, contact the team")]
struct Args {
    /// Backend base URL
    #[arg(long, env = "ECOGUARD_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Message the backend returns on successful login (dev backends only)
    #[arg(long)]
    login_success_message: Option<String>,

    /// Log filter directive, e.g. "ecoguard_core=debug" (defaults to RUST_LOG, then "info")
    #[arg(long)]
    log_filter: Option<String>,
}

fn init_tracing(directive: Option<&str>) {
    let filter = match directive {
        Some(d) => EnvFilter::new(d),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_filter.as_deref());

    let mut config = ApiConfig::new(args.api_url);
    if let Some(marker) = args.login_success_message {
        config = config.with_login_marker(marker);
    }

    let client = ApiClient::new(config).context("invalid --api-url")?;
    tracing::info!("Starting Ecoguard against {}", client.config().base_url);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Защитник природы")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 820.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(client)
        .launch(app::App);

    Ok(())
}
