pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// tmx - Load and check TMX tile maps
#[derive(Parser, Debug)]
#[command(name = "tmx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Loader limits (YAML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load each map and report whether it is valid
    Validate(validate::ValidateArgs),
}
