//! Removal of terminal escape sequences
//!
//! File sinks persist plain text, while the same message rendered for a
//! terminal carries colour codes and `\r` overwrites. The filters here strip
//! both 7-bit (`ESC`-prefixed) and 8-bit C1 sequences, working either on text
//! or on raw bytes.

use once_cell::sync::Lazy;
use regex::bytes::Regex as BytesRegex;
use regex::Regex;
use std::borrow::Cow;

// ESC Fe (non-CSI) | single 8-bit Fe | CSI params intermediates final
static ANSI_ESCAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        \x1B[@-Z\\-_]
        | [\x{80}-\x{9A}\x{9C}-\x{9F}]
        | (?:\x1B\[|\x{9B}) [0-?]* [\x20-/]* [@-~]
        ",
    )
    .expect("ANSI escape pattern is valid")
});

static ANSI_ESCAPE_BYTES: Lazy<BytesRegex> = Lazy::new(|| {
    BytesRegex::new(
        r"(?x-u)
        \x1B[@-Z\\-_]
        | [\x80-\x9A\x9C-\x9F]
        | (?:\x1B\[|\x9B) [0-?]* [\x20-/]* [@-~]
        ",
    )
    .expect("ANSI escape byte pattern is valid")
});

/// Strip every escape sequence from `text`.
///
/// Removing one sequence can splice its neighbours into a new one, so the
/// filter runs until nothing matches; the result is a fixed point.
pub fn filter_ansi(text: &str) -> Cow<'_, str> {
    if !ANSI_ESCAPE.is_match(text) {
        return Cow::Borrowed(text);
    }
    let mut current = ANSI_ESCAPE.replace_all(text, "").into_owned();
    while ANSI_ESCAPE.is_match(&current) {
        current = ANSI_ESCAPE.replace_all(&current, "").into_owned();
    }
    Cow::Owned(current)
}

/// Byte-oriented variant of [`filter_ansi`] for text of unknown encoding
pub fn filter_ansi_bytes(bytes: &[u8]) -> Cow<'_, [u8]> {
    if !ANSI_ESCAPE_BYTES.is_match(bytes) {
        return Cow::Borrowed(bytes);
    }
    let mut current = ANSI_ESCAPE_BYTES.replace_all(bytes, &b""[..]).into_owned();
    while ANSI_ESCAPE_BYTES.is_match(&current) {
        current = ANSI_ESCAPE_BYTES.replace_all(&current, &b""[..]).into_owned();
    }
    Cow::Owned(current)
}

/// Turn progress-style `\r` overwrites into line breaks
pub fn normalize_carriage_returns(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Plain-text form of `text` as written to persisted sinks
pub fn sanitize_for_file(text: &str) -> String {
    normalize_carriage_returns(&filter_ansi(text)).into_owned()
}
