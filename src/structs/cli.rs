use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "code-sentinel")]
#[clap(about = "AI-powered security vulnerability scanner", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    /// Analysis service URL, overrides the environment and the config file
    #[clap(long, global = true)]
    pub endpoint_url: Option<String>,

    #[clap(short, long, global = true)]
    pub verbose: bool,
}
