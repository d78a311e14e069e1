use library_catalog::{
    adapters::{
        file::FileActivityLog,
        memory::{InMemoryCatalog, InMemoryDirectory},
    },
    application::lending::ServiceDependencies,
    cli::{self, Console},
    config::Config,
};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing (stderr, so the menu on stdout stays readable)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_catalog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    tracing::info!("Activity log: {}", config.log_path.display());

    // Initialize adapters
    let catalog = Arc::new(InMemoryCatalog::new());
    let directory = Arc::new(InMemoryDirectory::new());
    let activity_log = Arc::new(FileActivityLog::new(config.log_path));

    // Create service dependencies
    let deps = ServiceDependencies {
        catalog,
        directory,
        activity_log,
    };

    // Start menu loop
    let mut console = Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    cli::run(&mut console, &deps).await
}
