use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use journal_core::VERSION;

/// Journal - a small, password-gated personal journal served over HTTP
#[derive(Parser)]
#[command(name = "journal")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "JOURNAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the SQLite database file
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Address to listen on (e.g. 127.0.0.1:5000)
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,

    /// Log filter (e.g. "info", "journal_web=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server (default)
    Serve,

    /// Create the database schema and exit
    InitDb,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
