use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "binz", version)]
#[command(about = "Command-line client for hosted JSON bins", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a bin from a JSON file
    #[command(alias = "c")]
    Create {
        /// Path to the JSON file to upload
        file: PathBuf,

        /// Name for the new bin
        #[arg(short, long)]
        name: String,
    },

    /// Replace a bin's content from a JSON file
    #[command(alias = "u")]
    Update {
        /// Path to the JSON file to upload
        file: PathBuf,

        /// Id of the bin to update
        #[arg(long)]
        id: String,
    },

    /// Delete a bin
    #[command(alias = "rm")]
    Delete {
        /// Id of the bin to delete
        id: String,
    },

    /// Fetch a bin and print its content
    #[command(alias = "g")]
    Get {
        /// Id of the bin to fetch
        id: String,
    },

    /// List bins from the local index
    #[command(alias = "ls")]
    List,
}
