//! Radix-36 token encoding for record identifiers.
//!
//! Tokens are the textual form of a record id in base 36 (`0-9` then `a-z`).
//! They are never stored: a token is always re-derived from the id and decodes
//! back to exactly that id.

use thiserror::Error;

/// Radix used for all tokens.
pub const RADIX: u32 = 36;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Errors produced when a token cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is empty")]
    Empty,

    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("token value does not fit in 64 bits")]
    Overflow,
}

/// Encodes an identifier as a lower-case radix-36 token.
///
/// # Examples
///
/// ```
/// use radix_shortener::utils::token::encode;
///
/// assert_eq!(encode(1), "1");
/// assert_eq!(encode(35), "z");
/// assert_eq!(encode(36), "10");
/// ```
pub fn encode(id: u64) -> String {
    if id == 0 {
        return "0".to_string();
    }

    // u64::MAX needs 13 base-36 digits
    let mut buf = [0u8; 13];
    let mut pos = buf.len();
    let mut n = id;

    while n > 0 {
        pos -= 1;
        buf[pos] = ALPHABET[(n % RADIX as u64) as usize];
        n /= RADIX as u64;
    }

    buf[pos..].iter().map(|&b| b as char).collect()
}

/// Decodes a radix-36 token back into an identifier.
///
/// Letters are accepted in either case. Any character outside `[0-9a-zA-Z]`
/// rejects the whole token instead of parsing the valid prefix.
///
/// # Errors
///
/// - [`TokenError::Empty`] for an empty token
/// - [`TokenError::InvalidCharacter`] for a character outside the alphabet
/// - [`TokenError::Overflow`] if the value exceeds `u64::MAX`
///
/// # Examples
///
/// ```
/// use radix_shortener::utils::token::{decode, TokenError};
///
/// assert_eq!(decode("Z"), Ok(35));
/// assert!(matches!(decode("12!"), Err(TokenError::InvalidCharacter { .. })));
/// ```
pub fn decode(token: &str) -> Result<u64, TokenError> {
    if token.is_empty() {
        return Err(TokenError::Empty);
    }

    token
        .chars()
        .enumerate()
        .try_fold(0u64, |acc, (position, ch)| {
            let digit = ch
                .to_digit(RADIX)
                .ok_or(TokenError::InvalidCharacter { ch, position })?;

            acc.checked_mul(RADIX as u64)
                .and_then(|v| v.checked_add(digit as u64))
                .ok_or(TokenError::Overflow)
        })
}
