use anyhow::Context;
use clap::{Parser, Subcommand};
use nearby_services::catalog::CategoryCatalog;
use nearby_services::config::Config;
use nearby_services::normalize::{self, CategorySummary};
use nearby_services::server::{start_server, AppState};
use nearby_services::{build_lookup_service, logging};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "nearby_services")]
#[command(about = "Family services, schools and early learning listings with outage fallback")]
#[command(version)]
struct Cli {
    /// Path to the TOML config file (defaults to ./config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for rotated JSON log files
    #[arg(long, global = true, default_value = "logs")]
    log_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the read API
    Serve {
        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the registered categories
    Categories,
    /// Look up one category and print its listings as JSON
    Lookup {
        category: String,
        /// Print the raw catalog rows instead of shaped listings
        #[arg(long)]
        raw: bool,
        /// Keep the fallback cache in memory instead of the configured SQLite file
        #[arg(long)]
        in_memory_cache: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let _log_guard = logging::init_logging(&cli.log_dir)
        .with_context(|| format!("creating log directory {}", cli.log_dir.display()))?;

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { port } => {
            if let Err(e) = nearby_services::observability::metrics::init() {
                warn!("Metrics disabled: {}", e);
            }
            let lookup = build_lookup_service(&config, false)?;
            let port = port.unwrap_or(config.server.port);
            info!("Starting read API on port {}", port);
            start_server(AppState { lookup: Arc::new(lookup) }, port).await?;
        }
        Commands::Categories => {
            let catalog = CategoryCatalog::standard(&config.resources)?;
            let summaries: Vec<CategorySummary> = catalog
                .list_categories()
                .iter()
                .map(CategorySummary::from)
                .collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        Commands::Lookup {
            category,
            raw,
            in_memory_cache,
        } => {
            let lookup = build_lookup_service(&config, in_memory_cache)?;
            let source_type = lookup.catalog.get_category(&category)?.source_type();
            let records = lookup.get_for_category(&category).await?;
            let output = if raw {
                serde_json::to_string_pretty(&records)?
            } else {
                serde_json::to_string_pretty(&normalize::shape(source_type, records))?
            };
            println!("{output}");
        }
    }

    Ok(())
}
