use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Scan source code read from a file or stdin
    Analyze {
        #[clap(short, long)]
        file: Option<PathBuf>,
        /// Copy the suggested secure code to the clipboard
        #[clap(short, long)]
        copy: bool,
        /// Print the raw result as JSON
        #[clap(long)]
        json: bool,
    },
    /// Serve the interactive report page
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(long)]
        no_browser: bool,
    },
    Validate,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Analyze { .. } => "analyze",
            Self::Serve { .. } => "serve",
            Self::Validate => "validate",
        }
    }
}
