//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// FinRAG: routed retrieval-augmented answers over financial documents
#[derive(Debug, Parser)]
#[command(name = "finrag", version, about)]
pub struct Cli {
    /// Path to a config file (default: ~/.config/finrag/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer a question through the routing pipeline
    Ask {
        /// The question to answer
        question: String,

        /// Print the routed answer as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check reachability of the vector store and the chat provider
    Health,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration with credentials redacted
    Show,
}
