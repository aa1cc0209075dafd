//! Text decoding for provider responses.
//!
//! The vandstand servlet serves ISO-8859-1. Every byte of that encoding is
//! the code point of the same value, so decoding can never fail.

pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
