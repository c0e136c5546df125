// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "costar", version, about = "How are two actors connected through shared films?")]
pub struct Cli {
    /// First actor name (prompted for when omitted)
    pub actor1: Option<String>,

    /// Second actor name (prompted for when omitted)
    pub actor2: Option<String>,

    /// Cast index JSON file (overrides costar.toml)
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Ratings CSV file (overrides costar.toml)
    #[arg(long, value_name = "FILE")]
    pub ratings: Option<PathBuf>,

    /// Print the path's films sorted by rating without asking
    #[arg(long, short)]
    pub ranked: bool,

    /// Enable loader diagnostics
    #[arg(long, short)]
    pub verbose: bool,
}
