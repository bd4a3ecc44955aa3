use clap::Parser;
use dealscope::application::analyze::AnalysisRequest;
use dealscope::cli::commands::{Cli, Commands};
use dealscope::DealScope;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let ds = match DealScope::new() {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("Error initializing DealScope: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Analyze => ds.analyze().await,
        Commands::Upload { path } => ds.analyze_upload(&path),
        Commands::Request { file, live } => {
            ds.analyze_request(&AnalysisRequest {
                uploaded_file: file,
                allow_live: live,
            })
            .await
        }
    };

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    if result.is_error() {
        std::process::exit(2);
    }
}
