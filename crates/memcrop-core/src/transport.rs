//! Binary-to-text transport encoding.
//!
//! Encoded images cross text-only boundaries (JSON request bodies, document
//! database fields) as standard, padded base64. Decoding is slightly more
//! forgiving than encoding: it accepts a `data:<mime>;base64,` URI prefix
//! and ignores surrounding whitespace, since that is what browser clients
//! commonly send.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Errors from decoding transport text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The text is not valid standard base64.
    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(String),

    /// A `data:` URI that does not declare base64 encoding.
    #[error("Data URI is not base64-encoded")]
    NotBase64DataUri,
}

/// Encode bytes as standard padded base64.
pub fn encode_text(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard base64 text (optionally a base64 `data:` URI) into bytes.
pub fn decode_text(text: &str) -> Result<Vec<u8>, TransportError> {
    let payload = strip_data_uri(text.trim())?;
    STANDARD
        .decode(payload)
        .map_err(|e| TransportError::InvalidBase64(e.to_string()))
}

/// Wrap encoded bytes as a `data:` URI, e.g. for direct use in an `<img>` tag.
pub fn to_data_uri(bytes: &[u8], mime_type: &str) -> String {
    format!("data:{};base64,{}", mime_type, encode_text(bytes))
}

fn strip_data_uri(text: &str) -> Result<&str, TransportError> {
    let Some(rest) = text.strip_prefix("data:") else {
        return Ok(text);
    };
    match rest.split_once(',') {
        Some((header, payload)) if header.ends_with(";base64") => Ok(payload),
        _ => Err(TransportError::NotBase64DataUri),
    }
}

/// First `limit` characters of a string, for log previews.
pub(crate) fn preview(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_value() {
        assert_eq!(encode_text(b"crop"), "Y3JvcA==");
        assert_eq!(encode_text(&[]), "");
    }

    #[test]
    fn test_decode_known_value() {
        assert_eq!(decode_text("Y3JvcA==").unwrap(), b"crop");
    }

    #[test]
    fn test_decode_trims_whitespace() {
        assert_eq!(decode_text("  Y3JvcA==\n").unwrap(), b"crop");
    }

    #[test]
    fn test_decode_data_uri() {
        let uri = to_data_uri(b"\x89PNG", "image/png");
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(decode_text(&uri).unwrap(), b"\x89PNG");
    }

    #[test]
    fn test_decode_rejects_plain_data_uri() {
        let result = decode_text("data:text/plain,hello");
        assert_eq!(result, Err(TransportError::NotBase64DataUri));
    }

    #[test]
    fn test_decode_invalid() {
        let result = decode_text("not*base64!");
        assert!(matches!(result, Err(TransportError::InvalidBase64(_))));
    }

    #[test]
    fn test_decode_rejects_missing_padding() {
        let result = decode_text("Y3JvcA");
        assert!(matches!(result, Err(TransportError::InvalidBase64(_))));
    }

    #[test]
    fn test_binary_survives_transport() {
        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(decode_text(&encode_text(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("abcdef", 3), "abc");
        assert_eq!(preview("ab", 3), "ab");
        assert_eq!(preview("", 3), "");
    }
}
