use clap::Parser;
use product_catalog::{
    ProductClient,
    app::{self, Command},
    config::AppConfig,
};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "product-catalog")]
#[command(about = "Manage product records on a remote catalog backend")]
#[command(
    after_help = "Environment:\n  PRODUCT_API_URL   Backend base URL (default http://localhost:3000)\n  LOG_LEVEL         Log verbosity (default info)"
)]
struct Cli {
    /// Backend base URL, overriding PRODUCT_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

fn init_tracing(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::from_env(cli.api_url.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing(Level::INFO);
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(if cli.verbose {
        Level::DEBUG
    } else {
        config.logging.level
    });

    tracing::debug!("Using backend at {}", config.api.base_url);

    let client = ProductClient::new(&config.api);

    if !app::run(client, cli.command).await {
        std::process::exit(1);
    }
}
