use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vtu-sgpa")]
#[command(about = "Upload a VTU grade card PDF and show the SGPA results", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Parse service base URL (overrides the config file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a grade card to the parse service and print the results
    Parse {
        /// Grade card PDF
        #[arg(required = true)]
        pdf: PathBuf,

        /// Gemini API key forwarded to the service (optional)
        #[arg(short = 'k', long, conflicts_with = "prompt_key")]
        api_key: Option<String>,

        /// Ask for the API key without echoing it
        #[arg(long)]
        prompt_key: bool,

        /// Save the results as JSON (default: vtu_results_{scheme}_{branch}.json)
        #[arg(short, long, num_args = 0..=1, value_name = "PATH")]
        export: Option<Option<PathBuf>>,

        /// Print the share text
        #[arg(long)]
        share: bool,

        /// Print the raw result payload as JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Check that the parse service is up
    Health,

    /// Show or change settings
    Config {
        /// Show current settings
        #[arg(long)]
        show: bool,

        /// Set the parse service base URL
        #[arg(long)]
        set_endpoint: Option<String>,

        /// Store an API key
        #[arg(long, conflicts_with = "clear_api_key")]
        set_api_key: Option<String>,

        /// Forget the stored API key
        #[arg(long)]
        clear_api_key: bool,
    },
}
