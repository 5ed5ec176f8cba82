//! Size policy for shareable documents.
//!
//! Two limits apply. The hard ceiling bounds the raw document and is checked before anything is
//! compressed; crossing it is an error. The soft ceiling bounds the compressed payload, which is
//! what ends up in the URL. Crossing that one only produces a [`CompressionAdvisory`], since the
//! URL still works, it just might get cut off by a sharing surface that truncates long links.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Largest raw document that can be encoded, in bytes.
pub const MAX_RAW_SIZE: usize = 32 * 1024;

/// Compressed size beyond which a URL may not survive social sharing, in bytes.
pub const ADVISORY_COMPRESSED_SIZE: usize = 4000;

/// Compressed payload was larger than the soft ceiling. The URL is still valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionAdvisory {
    /// Size of the compressed payload, in bytes.
    pub compressed_size: usize,
    /// The soft ceiling that was exceeded.
    pub threshold: usize,
}

impl fmt::Display for CompressionAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Compressed size: {} bytes. May not be shareable on social media (optimal: {} bytes or less)",
            self.compressed_size, self.threshold
        )
    }
}

/// The pair of limits enforced on every encode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SizeLimits {
    /// Hard ceiling on the raw document, in bytes.
    pub max_raw: usize,
    /// Soft ceiling on the compressed payload, in bytes.
    pub advisory_compressed: usize,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            max_raw: MAX_RAW_SIZE,
            advisory_compressed: ADVISORY_COMPRESSED_SIZE,
        }
    }
}

impl SizeLimits {
    /// Fail if the raw document is over the hard ceiling. A document exactly at the ceiling is
    /// accepted.
    pub fn check_raw(&self, raw_size: usize) -> Result<()> {
        if raw_size > self.max_raw {
            Err(Error::SizeExceeded {
                max: self.max_raw,
                actual: raw_size,
            })
        } else {
            Ok(())
        }
    }

    /// Produce an advisory if the compressed payload is over the soft ceiling.
    pub fn assess_compressed(&self, compressed_size: usize) -> Option<CompressionAdvisory> {
        (compressed_size > self.advisory_compressed).then_some(CompressionAdvisory {
            compressed_size,
            threshold: self.advisory_compressed,
        })
    }
}

/// `(1 - compressed/raw) * 100`, rounded to one decimal place. An empty document has nothing to
/// reduce, so its ratio is zero.
pub fn compression_ratio(raw_size: usize, compressed_size: usize) -> f64 {
    if raw_size == 0 {
        return 0.0;
    }
    let ratio = (1.0 - compressed_size as f64 / raw_size as f64) * 100.0;
    (ratio * 10.0).round() / 10.0
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hard_ceiling_boundary() {
        let limits = SizeLimits::default();
        limits.check_raw(0).unwrap();
        limits.check_raw(32768).unwrap();
        match limits.check_raw(32769) {
            Err(Error::SizeExceeded { max, actual }) => {
                assert_eq!(max, 32768);
                assert_eq!(actual, 32769);
            }
            other => panic!("expected SizeExceeded, got {:?}", other),
        }
    }

    #[test]
    fn soft_ceiling_boundary() {
        let limits = SizeLimits::default();
        assert_eq!(limits.assess_compressed(4000), None);
        assert_eq!(
            limits.assess_compressed(4001),
            Some(CompressionAdvisory {
                compressed_size: 4001,
                threshold: 4000
            })
        );
    }

    #[test]
    fn advisory_message() {
        let advisory = SizeLimits::default().assess_compressed(5123).unwrap();
        let msg = advisory.to_string();
        assert!(msg.contains("5123"));
        assert!(msg.contains("4000"));
    }

    #[test]
    fn ratio_rounding() {
        assert_eq!(compression_ratio(1000, 250), 75.0);
        assert_eq!(compression_ratio(3, 1), 66.7);
        assert_eq!(compression_ratio(11, 19), -72.7);
        assert_eq!(compression_ratio(0, 8), 0.0);
    }

    #[test]
    fn limits_from_partial_config() {
        let limits: SizeLimits = serde_json::from_str(r#"{"advisory_compressed": 2000}"#).unwrap();
        assert_eq!(limits.max_raw, MAX_RAW_SIZE);
        assert_eq!(limits.advisory_compressed, 2000);
        assert!(serde_json::from_str::<SizeLimits>(r#"{"bogus": 1}"#).is_err());
    }
}
