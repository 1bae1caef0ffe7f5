//! Validate command implementation.
//!
//! Loads every file with the full parser and reports one status line per
//! file.

use std::path::PathBuf;

use clap::Args;

use crate::config::LoadOptions;
use crate::load::load_with;
use crate::output::{plural, Printer};

/// Load each map and report whether it is valid
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Map files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs, options: &LoadOptions, printer: &Printer) -> miette::Result<()> {
    let mut failed = 0;

    for file in &args.files {
        match load_with(file, options) {
            Ok(map) => printer.checked(file, &map),
            Err(e) => {
                failed += 1;
                printer.failed(file, &e);
            }
        }
    }

    if failed > 0 {
        return Err(miette::miette!(
            "{} of {} failed to load",
            failed,
            plural(args.files.len(), "map", "maps")
        ));
    }

    printer.finished(args.files.len());
    Ok(())
}
