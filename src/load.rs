//! Format detection and the `load` entry point.
//!
//! The file extension decides first (`.tmx`/`.xml` are XML, `.json` is the
//! not yet supported JSON encoding). Files with any other extension, or
//! none, are opened and sniffed: the first significant byte is `<` for XML
//! and `{` for JSON.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::config::LoadOptions;
use crate::error::{Result, TmxError};
use crate::parser::parse_reader;
use crate::types::Map;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Serialized encodings of a map document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Xml,
    Json,
}

impl Format {
    /// Format implied by a file extension, if any.
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("tmx") | Some("xml") => Some(Format::Xml),
            Some("json") => Some(Format::Json),
            _ => None,
        }
    }

    /// Format implied by the first significant byte of a document.
    pub fn from_first_byte(byte: u8) -> Option<Self> {
        match byte {
            b'<' => Some(Format::Xml),
            b'{' => Some(Format::Json),
            _ => None,
        }
    }
}

/// Load a map with default options.
pub fn load(path: impl AsRef<Path>) -> Result<Map> {
    load_with(path, &LoadOptions::default())
}

/// Load a map, detecting its format from the extension or its content.
pub fn load_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Map> {
    let path = path.as_ref();

    let map = match Format::from_extension(path) {
        Some(Format::Xml) => parse_reader(open(path)?, options)?,
        Some(Format::Json) => return Err(json_unsupported(path)),
        None => {
            let mut source = open(path)?;
            let first = sniff(&mut source).map_err(|e| TmxError::Unknown {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

            match first.and_then(Format::from_first_byte) {
                Some(Format::Xml) => parse_reader(source, options)?,
                Some(Format::Json) => return Err(json_unsupported(path)),
                None => {
                    return Err(TmxError::UnsupportedFormat {
                        message: format!("'{}' is not a TMX document", path.display()),
                        help: Some("TMX maps are XML documents starting with '<'".to_string()),
                    });
                }
            }
        }
    };

    info!(
        "loaded {} ({}x{}, {} layers)",
        path.display(),
        map.width,
        map.height,
        map.layers.len()
    );
    Ok(map)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| TmxError::from_open(path.to_path_buf(), e))
}

fn json_unsupported(path: &Path) -> TmxError {
    TmxError::unsupported(
        format!("JSON map '{}'", path.display()),
        Some("Only the TMX (XML) map format can be loaded; export the map as .tmx"),
    )
}

/// Consume a UTF-8 byte order mark and leading ASCII whitespace, then peek
/// at the first significant byte without consuming it.
fn sniff<R: BufRead>(source: &mut R) -> io::Result<Option<u8>> {
    let mut at_start = true;

    loop {
        let buf = source.fill_buf()?;
        let Some(&first) = buf.first() else {
            return Ok(None);
        };

        if at_start && buf.starts_with(UTF8_BOM) {
            source.consume(UTF8_BOM.len());
            at_start = false;
            continue;
        }
        at_start = false;

        let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
        if skip == 0 {
            return Ok(Some(first));
        }
        source.consume(skip);
    }
}
