//! Shared helpers for the example binaries.
use anyhow::Context;
use block_paint::prelude::*;
use image::{ImageBuffer, Rgba};
use tracing_subscriber::EnvFilter;

/// Block hashes of three real mainnet blocks, for variation across demos.
pub const DEMO_HASHES: [&str; 3] = [
    "0xe3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    "0x4e3b0c44298fc1c1d51e1f8a7c3b2a1908f7e6d5c4b3a29181706f5e4d3c2b1a",
    "0x00000000000000ff9afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
];

/// Installs a fmt subscriber honoring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

/// Writes a rendered surface to `path` as a PNG.
pub fn save_pixmap_png(pixmap: &Pixmap, path: &str) -> anyhow::Result<()> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width, height, pixmap.as_bytes().to_vec())
            .context("pixmap byte length does not match its dimensions")?;
    img.save(path).with_context(|| format!("writing {path}"))?;
    tracing::info!(path, width, height, "wrote png");
    Ok(())
}
