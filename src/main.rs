use clap::Parser;
use dotenvy::dotenv;
use tirelire::cli::Cli;
use tirelire::errors::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Parse and run the requested command
    let cli = Cli::parse();
    tirelire::cli::run(cli).await
}
