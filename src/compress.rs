use flate2::{write::ZlibEncoder, Compression, Decompress, FlushDecompress, Status};
use serde::{Deserialize, Serialize};
use std::{fmt, io::Write};

use crate::MAX_DECODED_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompressionError {
    ExceededSize { max: usize, actual: usize },
    Deflate(String),
}

impl fmt::Display for CompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionError::ExceededSize { max, actual } => write!(
                f,
                "Decompressed size is at least {} bytes, larger than max of {} kiB",
                actual,
                (max + 1) >> 10
            ),
            CompressionError::Deflate(s) => write!(f, "deflate failure: {}", s),
        }
    }
}

impl std::error::Error for CompressionError {}

impl From<std::io::Error> for CompressionError {
    fn from(e: std::io::Error) -> Self {
        CompressionError::Deflate(e.to_string())
    }
}

impl From<flate2::DecompressError> for CompressionError {
    fn from(e: flate2::DecompressError) -> Self {
        CompressionError::Deflate(e.to_string())
    }
}

const INFLATE_CHUNK: usize = 8192;

/// The zlib default level. This is what `zlib.deflateSync` uses when given no options, so URLs
/// built here compress the same way as the ones already in circulation.
pub const DEFAULT_LEVEL: u32 = 6;

/// Compression settings for the encoder.
///
/// The stream format is fixed: zlib framing around DEFLATE data. Only the effort spent
/// compressing can change, and any level produces a stream every decoder can read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Compress {
    /// The compression level, 0 through 9.
    pub level: u32,
}

impl Compress {
    /// Create a new compression setting. Levels above 9 are clamped to 9.
    pub fn new(level: u32) -> Self {
        Self {
            level: level.min(9),
        }
    }

    /// Compress the UTF-8 bytes of a document.
    pub fn compress(&self, src: &[u8]) -> Result<Vec<u8>, CompressionError> {
        deflate(src, self.level)
    }
}

impl Default for Compress {
    fn default() -> Self {
        Compress {
            level: DEFAULT_LEVEL,
        }
    }
}

/// Compress `src` into a zlib stream at the given level.
pub fn deflate(src: &[u8], level: u32) -> Result<Vec<u8>, CompressionError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level.min(9)));
    encoder.write_all(src)?;
    Ok(encoder.finish()?)
}

/// Inflate a zlib stream. Fails if the stream is invalid or truncated, or if the output would be
/// larger than `max_size`.
pub fn inflate(src: &[u8], max_size: usize) -> Result<Vec<u8>, CompressionError> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(src.len().saturating_mul(4).min(max_size.saturating_add(1)));
    loop {
        if out.len() == out.capacity() {
            out.reserve(INFLATE_CHUNK);
        }
        let before_in = inflater.total_in();
        let before_out = inflater.total_out();
        let status =
            inflater.decompress_vec(&src[before_in as usize..], &mut out, FlushDecompress::None)?;
        if out.len() > max_size {
            return Err(CompressionError::ExceededSize {
                max: max_size,
                actual: out.len(),
            });
        }
        if status == Status::StreamEnd {
            return Ok(out);
        }
        // No progress with output space left means the input ran out before the stream ended.
        let stalled = inflater.total_in() == before_in && inflater.total_out() == before_out;
        if stalled && out.len() < out.capacity() {
            return Err(CompressionError::Deflate(
                "zlib stream ended before its final block".into(),
            ));
        }
    }
}

/// Inflate a zlib stream with the crate-wide decode limit.
pub fn decompress(src: &[u8]) -> Result<Vec<u8>, CompressionError> {
    inflate(src, MAX_DECODED_SIZE)
}
