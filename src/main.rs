use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use typhoon_dashboard::{
    config::{GlobeSettings, ServerConfig},
    web::{self, WebServerConfig},
    Dashboard, Dataset,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Global typhoon dashboard server")]
struct Cli {
    /// Address to bind the web UI to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for the web UI
    #[arg(long, default_value_t = 8501)]
    port: u16,

    /// Multiplier applied to ln(1 + wind speed) for globe marker sizes
    #[arg(long, default_value_t = 25.0)]
    marker_scale: f64,

    /// Tracing filter directive (falls back to RUST_LOG, then "info")
    #[arg(long)]
    log_filter: Option<String>,
}

fn init_tracing(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter.as_deref());

    let server = ServerConfig {
        host: cli.host,
        port: cli.port,
    };
    let addr = server.socket_addr()?;

    let settings = GlobeSettings::default().with_marker_scale(cli.marker_scale);
    settings.validate()?;

    let dataset = Dataset::builtin().context("embedded typhoon table is invalid")?;
    let dashboard = Dashboard::new(dataset, settings);

    web::run(WebServerConfig { dashboard, addr }).await
}
