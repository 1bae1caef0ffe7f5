//! Comma-separated tile id decoding.

use super::{reserve, DecodeError};

/// Decode `count` comma-separated tile ids.
///
/// Surrounding whitespace (including the newlines editors put between rows)
/// is ignored. A single trailing comma after the last value is accepted;
/// anything else after the `count`-th value is an error.
pub fn decode_csv(text: &str, count: usize) -> Result<Vec<u32>, DecodeError> {
    let mut gids = reserve(count)?;
    let mut fields = text.trim().split(',');

    for index in 0..count {
        let field = fields
            .next()
            .ok_or(DecodeError::MissingValue { index })?
            .trim();
        let gid = Some(field)
            .filter(|f| f.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|f| f.parse::<u32>().ok())
            .ok_or_else(|| DecodeError::InvalidValue {
                index,
                value: field.to_string(),
            })?;
        gids.push(gid);
    }

    match fields.next() {
        None => {}
        Some(rest) if rest.trim().is_empty() && fields.next().is_none() => {}
        Some(_) => return Err(DecodeError::TrailingValues { index: count }),
    }

    Ok(gids)
}
