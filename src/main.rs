use clap::Parser;
use miette::Result;
use tmx::cli::{Cli, Commands};
use tmx::output::Printer;
use tmx::LoadOptions;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let printer = Printer::new();

    let options = match &cli.config {
        Some(path) => LoadOptions::load(path)?,
        None => LoadOptions::default(),
    };

    match cli.command {
        Commands::Validate(args) => tmx::cli::validate::run(args, &options, &printer)?,
    }

    Ok(())
}
