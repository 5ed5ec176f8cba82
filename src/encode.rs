//! Document to shareable URL.

use serde::{Deserialize, Serialize};

use crate::{
    config::EncodeConfig,
    error::Result,
    fragment::Fragment,
    governor::{compression_ratio, CompressionAdvisory},
    transport::to_transport_text,
};

/// A successfully encoded document.
///
/// `advisory` is set when the compressed payload is over the soft ceiling. The URL is still valid
/// in that case; whether to warn anyone is up to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encoded {
    /// The complete shareable URL.
    pub url: String,
    /// Size of the UTF-8 document, in bytes.
    pub raw_size: usize,
    /// Size of the compressed payload before base64url, in bytes.
    pub compressed_size: usize,
    /// Percentage of size removed by compression, to one decimal place.
    pub compression_ratio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory: Option<CompressionAdvisory>,
}

impl Encoded {
    /// The fragment part of the URL.
    pub fn fragment(&self) -> &str {
        crate::fragment::fragment_of(&self.url)
    }
}

/// Turns documents into URLs using one set of [`EncodeConfig`] settings.
///
/// An `Encoder` holds no state besides its configuration and can be shared freely between threads.
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    config: EncodeConfig,
}

impl Encoder {
    pub fn new(config: EncodeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncodeConfig {
        &self.config
    }

    /// Encode a document under the given title.
    ///
    /// # Errors
    ///
    /// Fails with [`SizeExceeded`][crate::Error::SizeExceeded] if the document is larger than the
    /// configured hard ceiling. Nothing is compressed in that case.
    pub fn encode(&self, document: &str, title: &str) -> Result<Encoded> {
        let limits = &self.config.limits;
        let raw_size = document.len();
        limits.check_raw(raw_size)?;

        let compressed = self.config.compress.compress(document.as_bytes())?;
        let compressed_size = compressed.len();
        let compression_ratio = compression_ratio(raw_size, compressed_size);
        let advisory = limits.assess_compressed(compressed_size);

        let transport = to_transport_text(&compressed);
        let url = self.config.url_for(&Fragment::assemble(title, &transport));

        tracing::debug!(
            raw_size,
            compressed_size,
            compression_ratio,
            advisory = advisory.is_some(),
            "encoded document"
        );

        Ok(Encoded {
            url,
            raw_size,
            compressed_size,
            compression_ratio,
            advisory,
        })
    }

    /// Encode a document under the configured default title.
    pub fn encode_untitled(&self, document: &str) -> Result<Encoded> {
        self.encode(document, &self.config.default_title)
    }
}
