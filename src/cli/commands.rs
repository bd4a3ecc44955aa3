use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dealscope", about = "Trade history statistics from a live terminal or an exported report")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze the live terminal, falling back to the configured report file
    Analyze,
    /// Analyze an uploaded report file (no live terminal access)
    Upload {
        /// Path to the HTML report export
        path: String,
    },
    /// Resolve a dashboard request: stored upload first, then live if allowed
    Request {
        /// Stored upload name under the upload directory
        #[arg(long)]
        file: Option<String>,
        /// Allow reading the live terminal when no upload exists
        #[arg(long)]
        live: bool,
    },
}
