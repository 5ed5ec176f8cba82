//! Settings for the encode entry point.
//!
//! Every default the encoder falls back on is named here instead of being buried at a call site.
//! The whole struct can be loaded from any serde format; missing fields take their defaults and
//! unknown fields are rejected.

use serde::{Deserialize, Serialize};

use crate::compress::Compress;
use crate::governor::SizeLimits;

/// Where shared URLs point when no other decoder is configured.
pub const DEFAULT_BASE_URL: &str = "https://how.bitty.site/";

/// Title used by [`Encoder::encode_untitled`][crate::Encoder::encode_untitled] unless configured
/// otherwise.
pub const DEFAULT_TITLE: &str = "";

/// Title for a document piped in without any name of its own.
pub const STDIN_TITLE: &str = "Blog Post";

/// Title for a commit message that carries a payload but no `Title:` field.
pub const UNTITLED: &str = "Untitled";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EncodeConfig {
    /// Everything in the URL before the `#`. This is the decoder page that will reconstruct the
    /// document.
    pub base_url: String,
    /// Title used when the caller doesn't supply one.
    pub default_title: String,
    /// Title given to commit-message posts with no `Title:` field.
    pub untitled: String,
    /// Size ceilings.
    pub limits: SizeLimits,
    /// DEFLATE effort.
    pub compress: Compress,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            default_title: DEFAULT_TITLE.into(),
            untitled: UNTITLED.into(),
            limits: SizeLimits::default(),
            compress: Compress::default(),
        }
    }
}

impl EncodeConfig {
    /// Default settings, pointing at a different decoder page.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Join the base URL and a fragment. Any fragment already on the base URL is dropped, since a
    /// URL only has one.
    pub fn url_for(&self, fragment: &str) -> String {
        let base = match self.base_url.split_once('#') {
            Some((base, _)) => base,
            None => &self.base_url,
        };
        let mut url = String::with_capacity(base.len() + 1 + fragment.len());
        url.push_str(base);
        url.push('#');
        url.push_str(fragment);
        url
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::governor::{ADVISORY_COMPRESSED_SIZE, MAX_RAW_SIZE};

    #[test]
    fn defaults() {
        let config = EncodeConfig::default();
        assert_eq!(config.base_url, "https://how.bitty.site/");
        assert_eq!(config.default_title, "");
        assert_eq!(config.untitled, "Untitled");
        assert_eq!(config.limits.max_raw, MAX_RAW_SIZE);
        assert_eq!(config.limits.advisory_compressed, ADVISORY_COMPRESSED_SIZE);
        assert_eq!(config.compress, Compress::default());
    }

    #[test]
    fn url_joining() {
        let config = EncodeConfig::default();
        assert_eq!(config.url_for("T/abc"), "https://how.bitty.site/#T/abc");
        let config = EncodeConfig::with_base_url("https://example.github.io/decoder.html#");
        assert_eq!(
            config.url_for("T/abc"),
            "https://example.github.io/decoder.html#T/abc"
        );
    }

    #[test]
    fn partial_deserialize() {
        let config: EncodeConfig = serde_json::from_str(
            r#"{
                "base_url": "https://example.github.io/decoder.html",
                "default_title": "Blog Post",
                "compress": { "level": 9 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://example.github.io/decoder.html");
        assert_eq!(config.default_title, STDIN_TITLE);
        assert_eq!(config.compress.level, 9);
        assert_eq!(config.limits, SizeLimits::default());
        assert_eq!(config.untitled, UNTITLED);
    }

    #[test]
    fn unknown_fields_rejected() {
        let res = serde_json::from_str::<EncodeConfig>(r#"{ "base": "https://x/" }"#);
        assert!(res.is_err());
    }
}
