use itty_codec::{decode, EncodeConfig, Encoder};
use tracing_subscriber::EnvFilter;

const POST: &str = "# Welcome to Itty-Bitty Blog

This is a **test post** demonstrating the compression capability.

## Features

- Shareable URLs
- No database required
- GitHub Pages compatible
- Programmatic creation

That's all for now!
";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let encoder = Encoder::new(EncodeConfig::default());
    let enc = match encoder.encode(POST, "Test Post") {
        Ok(enc) => enc,
        Err(e) => {
            tracing::error!(err = %e, "couldn't encode post");
            std::process::exit(1);
        }
    };

    // The encoder only flags the advisory; deciding to warn is up to us.
    if let Some(advisory) = &enc.advisory {
        tracing::warn!("{}", advisory);
    }
    tracing::info!(
        raw_size = enc.raw_size,
        compressed_size = enc.compressed_size,
        ratio = %format!("{:.1}%", enc.compression_ratio),
        "encoded"
    );
    println!("{}", enc.url);

    match decode(&enc.url) {
        Ok(dec) if dec.document == POST => {
            tracing::info!(title = %dec.title, "decoded back intact")
        }
        Ok(_) => tracing::error!("decoded document differs from the original"),
        Err(e) => tracing::error!(err = %e, "couldn't decode our own URL"),
    }
}
