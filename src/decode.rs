//! Shareable URL back to document.

use serde::{Deserialize, Serialize};

use crate::{
    compress::decompress,
    error::DecodeError,
    fragment::{fragment_of, Fragment},
    transport::from_transport_text,
};

/// A document recovered from a URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    /// The title, percent-decoded when possible and verbatim otherwise.
    pub title: String,
    /// The original document, byte for byte.
    pub document: String,
}

/// Recover the document and title from a full URL or a bare fragment.
///
/// Everything after the first `#` is taken as the fragment; input without a `#` is treated as the
/// fragment itself. The title never causes a failure. The payload must be intact base64url
/// holding a complete zlib stream of UTF-8 text, and any problem there is returned as a
/// [`DecodeError`].
pub fn decode(input: &str) -> Result<Decoded, DecodeError> {
    let fragment = Fragment::split(fragment_of(input))?;
    let document = decode_payload(fragment.payload)?;
    Ok(Decoded {
        title: fragment.title().into_owned(),
        document,
    })
}

/// Decode only the payload segment: base64url, then inflate, then UTF-8 validation.
pub fn decode_payload(payload: &str) -> Result<String, DecodeError> {
    let compressed = from_transport_text(payload)?;
    let raw = decompress(&compressed)?;
    let document = String::from_utf8(raw).map_err(|e| DecodeError::NotUtf8(e.utf8_error()))?;
    tracing::trace!(
        compressed_size = compressed.len(),
        raw_size = document.len(),
        "decoded payload"
    );
    Ok(document)
}
