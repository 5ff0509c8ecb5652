use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A personal portfolio for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Load the catalog from a TOML file instead of the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive portfolio (default)")]
    View,

    #[command(about = "List projects, optionally filtered by category")]
    Projects {
        /// Category token, e.g. "Data Analysis" or "Web Dev". Unknown
        /// tokens match nothing and print an empty list.
        #[arg(long)]
        category: Option<String>,
    },

    #[command(about = "List skill badges")]
    Skills,

    #[command(about = "Show the experience timeline")]
    Experience,

    #[command(about = "Show contact links")]
    Contact,

    #[command(about = "Dump the active catalog as JSON")]
    Catalog {
        #[arg(long)]
        dump: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
