//! Status lines for `tmx validate`.
//!
//! Each checked map gets one line on stderr: a right-aligned verb
//! (`Checked`, `Failed`, `Finished`) followed by the map path and a dimmed
//! summary or error kind. Colour is used only when stderr is a terminal.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::error::TmxError;
use crate::types::Map;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

const VERB_WIDTH: usize = 12;

/// Reports validation results, one map per line.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// e.g. "     Checked levels/intro.tmx (orthogonal 40x30, 1 tileset, 2 layers)"
    pub fn checked(&self, path: &Path, map: &Map) {
        let summary = format!(
            "({} {}x{}, {}, {})",
            map.orientation,
            map.width,
            map.height,
            plural(map.tilesets.len(), "tileset", "tilesets"),
            plural(map.layers.len(), "layer", "layers"),
        );
        self.emit(GREEN, "Checked", &format!("{} {}", display_path(path), self.dim(&summary)));
    }

    /// e.g. "      Failed broken.tmx [missing attribute] missing 'x' attribute ..."
    pub fn failed(&self, path: &Path, err: &TmxError) {
        let kind = format!("[{}]", err.kind());
        self.emit(
            RED,
            "Failed",
            &format!("{} {} {}", display_path(path), self.dim(&kind), err),
        );
    }

    pub fn finished(&self, maps: usize) {
        self.emit(CYAN, "Finished", &plural(maps, "map", "maps"));
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn emit(&self, color: &str, verb: &str, message: &str) {
        let line = status_line(self.color.then_some(color), verb, message);
        let _ = writeln!(io::stderr().lock(), "{line}");
    }
}

/// A verb right-aligned in its column, then the message.
fn status_line(color: Option<&str>, verb: &str, message: &str) -> String {
    match color {
        Some(color) => format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"),
        None => format!("{verb:>VERB_WIDTH$} {message}"),
    }
}

/// `plural(1, "map", "maps")` is "1 map".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// The path relative to the working directory when it lies below it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(|p| p.display().to_string()));

    match relative {
        Some(s) if s.is_empty() => ".".to_string(),
        Some(s) => s,
        None => path.display().to_string(),
    }
}
