//! Docport CLI Library
//!
//! Command line layer, turns parsed arguments into Core library calls.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::AppState;

mod config;
mod handlers;
mod protocol;
mod state;

pub use config::load_config;

#[derive(Parser, Debug)]
#[command(name = "docport")]
#[command(about = "Browse project documentation stored as JSON documents")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./docport.yaml when present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the project documents
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every project in the data directory
    Projects,
    /// Print the page hierarchy of a project
    Tree {
        /// Project slug
        project: String,
    },
    /// Show one page; without segments, the project's first page
    Show {
        /// Project slug
        project: String,
        /// Page path, as `intro/setup` or `intro setup`
        segments: Vec<String>,
    },
}

pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.catalog.data_dir = data_dir;
    }

    let state = AppState::new(config);
    match cli.command {
        Command::Projects => handlers::handle_projects(&state, cli.json, out),
        Command::Tree { project } => handlers::handle_tree(&state, &project, cli.json, out),
        Command::Show { project, segments } => {
            handlers::handle_show(&state, &project, &segments, cli.json, out)
        }
    }
}
