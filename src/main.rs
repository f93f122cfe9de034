use clap::Parser;

use football_stats::logging::setup_logging;
use football_stats::servers::{WebUiConfig, WebUiServer};
use football_stats::store::{CsvBackend, PlayerBackend};

#[derive(Parser, Debug)]
#[command(name = "football_stats", version, about)]
struct Config {
    /// CSV file holding the player database
    #[arg(short = 'd', long, default_value = "database/players.csv")]
    data: String,

    /// Address the web server binds to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port for the web server
    #[arg(short = 'p', long, default_value_t = 8000)]
    port: u16,

    /// Players shown per page on the listing page
    #[arg(long, default_value_t = 5)]
    per_page: usize,

    /// Directory served under /static
    #[arg(long, default_value = "static")]
    static_dir: String,

    /// Write rotating log files to this directory instead of stderr
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logger = setup_logging(&config.log_level, config.log_dir.as_deref())?;

    let backend = CsvBackend::new(&config.data);
    if !backend.path().exists() {
        log::warn!(
            "⚠️ Player database {} not found; pages will report it as unavailable",
            backend.path().display()
        );
    } else {
        match backend.load() {
            Ok(players) => log::info!("📋 {} players in {}", players.len(), backend.path().display()),
            Err(e) => log::error!("❌ Could not read {}: {}", backend.path().display(), e),
        }
    }

    let web_config = WebUiConfig {
        port: config.port,
        host: config.host,
        per_page: config.per_page.max(1),
        static_dir: config.static_dir,
    };

    WebUiServer::new(web_config, backend).start().await
}
