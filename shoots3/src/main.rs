use clap::Parser;
use shoots3::cli::{run, Cli};
use shoots3::logging::init_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment
    dotenvy::dotenv().ok();

    init_tracing();
    tracing::info!("CLI application startup: tracing initialised, environment loaded");

    let cli = Cli::parse();
    tracing::info!("CLI arguments parsed, invoking run");
    match run(cli).await {
        Ok(()) => {
            tracing::info!("CLI completed successfully");
        }
        Err(e) => {
            tracing::error!(error = %e, "CLI exited with error");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
