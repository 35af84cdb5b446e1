use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "narrify",
    about = "Summarize YouTube videos with AI",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// YouTube video URL (reads one URL per line from stdin if omitted)
    pub url: Option<String>,

    /// Summarization endpoint (overrides config file)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Output format: text or json (default from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Give up on a request after this many seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Show endpoint and submission status on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
