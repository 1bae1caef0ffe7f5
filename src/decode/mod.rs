//! Tile payload decoders.
//!
//! These turn the text content of a layer's `data` element into a flat
//! buffer of global tile ids. They know nothing about the document model:
//! the caller supplies the expected tile count and gets back exactly that
//! many ids, or a [`DecodeError`].

mod compressed;
mod csv;

use thiserror::Error;

pub use compressed::{decode_compressed, Compression};
pub use csv::decode_csv;

/// Failure while decoding a tile payload.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("expected tile #{index} but the list ended")]
    MissingValue { index: usize },

    #[error("invalid tile id '{value}' at tile #{index}")]
    InvalidValue { index: usize, value: String },

    #[error("unexpected value at tile #{index}")]
    TrailingValues { index: usize },

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decompression failed: {0}")]
    Inflate(#[from] std::io::Error),

    #[error("decompressed payload is {actual} bytes, expected {expected}")]
    Truncated { expected: usize, actual: usize },

    #[error("decompressed payload is longer than the expected {expected} bytes")]
    Overlong { expected: usize },

    #[error("cannot reserve room for {count} tile ids")]
    Allocation { count: usize },
}

/// Reserve an empty buffer with room for exactly `count` tile ids.
fn reserve(count: usize) -> Result<Vec<u32>, DecodeError> {
    let mut gids = Vec::new();
    gids.try_reserve_exact(count)
        .map_err(|_| DecodeError::Allocation { count })?;
    Ok(gids)
}
