//! Text decoding ahead of CSV parsing.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// Decode raw file bytes to UTF-8.
///
/// A byte-order mark selects UTF-8 or UTF-16 and is stripped. Without a BOM,
/// valid UTF-8 passes through unchanged and anything else is read as
/// Windows-1252, the usual encoding of spreadsheet exports.
///
/// Returns the UTF-8 bytes and the name of the source encoding.
pub fn decode_to_utf8(bytes: &[u8]) -> (Cow<'_, [u8]>, &'static str) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let body = bytes.get(bom_len..).unwrap_or_default();
        if encoding == UTF_8 {
            return (Cow::Borrowed(body), encoding.name());
        }
        let (text, _had_errors) = encoding.decode_without_bom_handling(body);
        return (Cow::Owned(text.into_owned().into_bytes()), encoding.name());
    }
    if std::str::from_utf8(bytes).is_ok() {
        return (Cow::Borrowed(bytes), UTF_8.name());
    }
    let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    (Cow::Owned(text.into_owned().into_bytes()), WINDOWS_1252.name())
}
