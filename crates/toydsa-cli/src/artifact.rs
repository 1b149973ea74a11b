//! Signed-artifact conventions
//!
//! A signed file is the original text followed by one final line holding
//! `r` and `s` as decimal integers separated by a single space. The core
//! engine never sees this format; splitting and appending happen here.

use num_bigint::BigUint;
use std::str::FromStr;

/// Append the signature line to message content.
pub fn append_signature(content: &str, r: &BigUint, s: &BigUint) -> String {
    format!("{content}\n{r} {s}")
}

/// Split a text into everything before the last line break and the last
/// line, handling `\n`, `\r` and `\r\n` breaks. A text with no break at
/// all consists solely of its last line.
pub fn split_last_line(text: &str) -> (&str, &str) {
    let bytes = text.as_bytes();
    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b'\n' => {
                let start = if i > 0 && bytes[i - 1] == b'\r' { i - 1 } else { i };
                return (&text[..start], &text[i + 1..]);
            }
            b'\r' => return (&text[..i], &text[i + 1..]),
            _ => {}
        }
    }
    ("", text)
}

/// Take a signed artifact apart into `(message, r, s)`.
///
/// Returns `None` when the last line is not exactly two decimal
/// integers, which callers report as "the file carries no signature".
pub fn parse_signed(text: &str) -> Option<(&str, BigUint, BigUint)> {
    let (message, signature_line) = split_last_line(text);
    let mut parts = signature_line.split(' ');
    let r = BigUint::from_str(parts.next()?).ok()?;
    let s = BigUint::from_str(parts.next()?).ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((message, r, s))
}
