//! Base64 + zlib/gzip tile id decoding.

use std::fmt;
use std::io::Read;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::{GzDecoder, ZlibDecoder};

use super::{reserve, DecodeError};

/// Compression applied to a base64 tile payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Zlib,
    Gzip,
}

impl Compression {
    /// Look up the compression named by a `compression` attribute.
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "zlib" => Some(Compression::Zlib),
            "gzip" => Some(Compression::Gzip),
            _ => None,
        }
    }

    /// Inflate `compressed` into exactly `expected` bytes.
    ///
    /// At most `expected + 1` bytes are inflated, so an overlong stream is
    /// rejected without being expanded in full.
    pub fn inflate(self, compressed: &[u8], expected: usize) -> Result<Vec<u8>, DecodeError> {
        let mut raw = Vec::new();
        raw.try_reserve_exact(expected)
            .map_err(|_| DecodeError::Allocation { count: expected / 4 })?;

        let limit = expected as u64 + 1;
        match self {
            Compression::Zlib => ZlibDecoder::new(compressed).take(limit).read_to_end(&mut raw)?,
            Compression::Gzip => GzDecoder::new(compressed).take(limit).read_to_end(&mut raw)?,
        };

        if raw.len() > expected {
            return Err(DecodeError::Overlong { expected });
        }
        if raw.len() < expected {
            return Err(DecodeError::Truncated {
                expected,
                actual: raw.len(),
            });
        }
        Ok(raw)
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compression::Zlib => write!(f, "zlib"),
            Compression::Gzip => write!(f, "gzip"),
        }
    }
}

/// Decode a base64, compressed payload of `count` little-endian u32 tile ids.
pub fn decode_compressed(
    text: &str,
    compression: Compression,
    count: usize,
) -> Result<Vec<u32>, DecodeError> {
    let expected = count
        .checked_mul(4)
        .ok_or(DecodeError::Allocation { count })?;

    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let compressed = STANDARD.decode(compact)?;
    let bytes = compression.inflate(&compressed, expected)?;

    let mut gids = reserve(count)?;
    gids.extend(
        bytes
            .chunks_exact(4)
            .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]])),
    );
    Ok(gids)
}
