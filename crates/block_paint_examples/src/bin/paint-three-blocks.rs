use block_paint::prelude::*;
use block_paint_examples::{init_tracing, save_pixmap_png, DEMO_HASHES};

/// Renders three different blocks with an identical preset: every visual
/// difference between the outputs comes from the block hashes alone.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let background = Rgb::from_hex("#101018")?;

    for (i, hash) in DEMO_HASHES.iter().enumerate() {
        // Vary the transaction count deterministically per demo block.
        let block = Block::with_transaction_count(*hash, 80 + 40 * i);

        let config = RenderConfig::from_options(800, 800, &StyleOptions::default())
            .with_background(background);

        let mut surface = Pixmap::new(800, 800)?;
        let report = render_block(&block, config, &mut surface)?;
        tracing::info!(block = i, shapes = report.shapes_painted, "painted");

        let out = format!("paint-three-blocks-{i}.png");
        save_pixmap_png(&surface, &out)?;
    }

    Ok(())
}
