mod catalog;
mod seed;

use std::path::PathBuf;

use areaseed_core::AppConfig;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "areaseed")]
#[command(about = "Seed delivery-area pricing into the store backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create one delivery area per catalog entry (the default command)
    Seed(SeedArgs),
    /// Validate and print the catalog without contacting the API
    Catalog {
        /// Catalog file to read instead of `AREASEED_CATALOG_PATH`
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Debug, Default, Args)]
struct SeedArgs {
    /// Catalog file to read instead of `AREASEED_CATALOG_PATH`
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Delivery company to create every area under
    #[arg(long)]
    company: Option<String>,
    /// Store to create every area under
    #[arg(long)]
    store: Option<String>,
    /// Print the payloads that would be sent and exit
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Catalog { catalog }) => {
            init_tracing(&areaseed_core::log_level_from_env())?;
            let path = catalog.unwrap_or_else(areaseed_core::catalog_path_from_env);
            catalog::run_catalog(&path, &mut std::io::stdout())?;
        }
        Some(Commands::Seed(args)) => run_seed_command(args).await?,
        None => run_seed_command(SeedArgs::default()).await?,
    }

    Ok(())
}

async fn run_seed_command(args: SeedArgs) -> anyhow::Result<()> {
    let mut config = areaseed_core::load_app_config_from_env()?;
    init_tracing(&config.log_level)?;

    apply_overrides(&mut config, &args);
    tracing::debug!(?config, "loaded configuration");

    let catalog = areaseed_core::load_catalog(&config.catalog_path)?;
    let mut out = std::io::stdout();

    if args.dry_run {
        seed::write_dry_run(&config.tenant, &catalog.areas, &mut out)?;
        return Ok(());
    }

    let client = areaseed_client::DeliveryAreaClient::new(
        &config.endpoint,
        &config.api_token,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    let summary = seed::run_seed(&client, &config.tenant, &catalog.areas, &mut out).await?;
    tracing::info!(
        attempted = summary.attempted,
        created = summary.created,
        rejected = summary.rejected,
        "seed run finished"
    );

    Ok(())
}

/// Command-line flags win over the environment; absent flags leave the
/// configured value in place.
fn apply_overrides(config: &mut AppConfig, args: &SeedArgs) {
    if let Some(path) = &args.catalog {
        config.catalog_path.clone_from(path);
    }
    if let Some(company) = &args.company {
        config.tenant.delivery_company.clone_from(company);
    }
    if let Some(store) = &args.store {
        config.tenant.store.clone_from(store);
    }
}

/// Logs go to stderr so stdout carries only per-record status lines.
fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
