pub mod app;
pub mod command;
pub mod error;
pub mod parser;
pub mod persistence;
pub mod task;
pub mod todolist;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI shared between main and tests
#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "A small line-oriented task tracker")]
pub struct Cli {
    /// Optional override for the data file
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Keep everything in memory: nothing is loaded or saved
    #[arg(long)]
    pub no_save: bool,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Start the interactive shell (the default)
    Shell,
    /// Print all saved tasks to stdout
    List,
    /// Run a single shell command, e.g. `exec "todo read book"`
    Exec { line: String },
}
