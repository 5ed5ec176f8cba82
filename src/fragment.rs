//! Title and payload inside a URL fragment.
//!
//! A fragment is `<title-segment>/<payload-segment>`. The title is percent-encoded, so it never
//! holds a raw `/`, which means splitting on the *first* `/` is always unambiguous. Anything after
//! that first `/` belongs to the payload, even further slashes; those will fail the payload's
//! alphabet check later on rather than silently shifting the split.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

use crate::error::DecodeError;

/// Most characters of a title carried in the fragment.
pub const MAX_TITLE_CHARS: usize = 50;

/// Characters escaped in the title segment. Everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, the
/// same set `encodeURIComponent` leaves alone, so titles encode identically to existing links.
const TITLE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Truncate a title to its first [`MAX_TITLE_CHARS`] characters.
pub fn truncate_title(title: &str) -> &str {
    match title.char_indices().nth(MAX_TITLE_CHARS) {
        Some((end, _)) => &title[..end],
        None => title,
    }
}

/// Truncate then percent-encode a title for the fragment.
pub fn encode_title(title: &str) -> String {
    utf8_percent_encode(truncate_title(title), TITLE_ENCODE_SET).to_string()
}

/// Percent-decode a title segment. Returns `None` if there's a malformed escape or the decoded
/// bytes aren't UTF-8.
pub fn decode_title(segment: &str) -> Option<Cow<'_, str>> {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    percent_decode_str(segment).decode_utf8().ok()
}

/// Get the fragment out of a full URL, or pass a bare fragment through. The fragment starts after
/// the first `#`.
pub fn fragment_of(input: &str) -> &str {
    match input.split_once('#') {
        Some((_, fragment)) => fragment,
        None => input,
    }
}

/// A fragment split into its two segments. Neither is decoded yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Percent-encoded title.
    pub title: &'a str,
    /// Transport text of the compressed document.
    pub payload: &'a str,
}

impl<'a> Fragment<'a> {
    /// Split a fragment on its first `/`.
    pub fn split(fragment: &'a str) -> Result<Self, DecodeError> {
        let (title, payload) = fragment
            .split_once('/')
            .ok_or(DecodeError::MissingSeparator)?;
        if payload.is_empty() {
            return Err(DecodeError::EmptyPayload);
        }
        Ok(Self { title, payload })
    }

    /// Best-effort title. A segment that won't percent-decode is returned as-is.
    pub fn title(&self) -> Cow<'a, str> {
        match decode_title(self.title) {
            Some(title) => title,
            None => {
                tracing::debug!(
                    segment = self.title,
                    "title segment didn't percent-decode, using it verbatim"
                );
                Cow::Borrowed(self.title)
            }
        }
    }

    /// Build a fragment from a raw title and transport text.
    pub fn assemble(title: &str, transport_text: &str) -> String {
        let title = encode_title(title);
        let mut out = String::with_capacity(title.len() + 1 + transport_text.len());
        out.push_str(&title);
        out.push('/');
        out.push_str(transport_text);
        out
    }
}
