//! itty-codec shares a document as a single, self-contained URL. There's no server and no
//! database: the URL fragment carries the whole document, compressed, and any page that knows the
//! format can rebuild it.
//!
//! A URL looks like this:
//!
//! ```text
//! https://how.bitty.site/#My%20Post/eJyzyTC088i00QdSABKGAwc
//! ```
//!
//! The part after `#` is a percent-encoded title, a `/`, and the document as a zlib stream in
//! unpadded base64url. See the [`format`] module for the full description.
//!
//! The crate provides:
//!
//! - [`Encoder`], which turns a document and title into a URL, along with size statistics and an
//! 	optional [`CompressionAdvisory`] when the URL may be too long to share comfortably
//! - [`decode`], which turns a URL (or a bare fragment) back into the title and document
//! - Size governance. Documents above 32 KiB are refused outright, and compressed payloads above
//! 	4000 bytes are flagged without failing
//! - The [`commit`] module, for posts published through `[itty:...]` commit messages
//!
//! Nothing here performs I/O, logs in place of returning an error, or keeps state between calls.
//! Encoding and decoding are safe to run from any number of threads at once.
//!
//! ```
//! let enc = itty_codec::encode("<h1>Hi</h1>", "T").unwrap();
//! assert_eq!(enc.raw_size, 11);
//! assert!(enc.advisory.is_none());
//!
//! let dec = itty_codec::decode(&enc.url).unwrap();
//! assert_eq!(dec.title, "T");
//! assert_eq!(dec.document, "<h1>Hi</h1>");
//! ```

pub mod commit;
pub mod compress;
pub mod config;
mod decode;
mod encode;
mod error;
pub mod format;
pub mod fragment;
pub mod governor;
pub mod transport;

pub use self::config::EncodeConfig;
pub use self::decode::{decode, decode_payload, Decoded};
pub use self::encode::{Encoded, Encoder};
pub use self::error::{DecodeError, Error, Result};
pub use self::governor::{CompressionAdvisory, SizeLimits, ADVISORY_COMPRESSED_SIZE, MAX_RAW_SIZE};

/// The largest document a decoder will inflate, 1 MiB. This is well above [`MAX_RAW_SIZE`] so
/// URLs built by other encoders still load, but it stops a crafted payload from inflating without
/// bound.
pub const MAX_DECODED_SIZE: usize = 1usize << 20; // 1 MiB

/// Encode a document with the default configuration.
///
/// # Errors
///
/// Fails with [`Error::SizeExceeded`] if the document is over [`MAX_RAW_SIZE`] bytes.
pub fn encode(document: &str, title: &str) -> Result<Encoded> {
    Encoder::default().encode(document, title)
}
