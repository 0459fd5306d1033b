use block_paint::prelude::*;
use block_paint_examples::{init_tracing, save_pixmap_png, DEMO_HASHES};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A synthetic block: only the hash and the transaction count matter.
    let block = Block::with_transaction_count(DEMO_HASHES[0], 150);

    // Render with the style's declared default preset.
    let preset = descriptor();
    let config = RenderConfig::from_options(1000, 1000, &preset.options);

    let mut surface = Pixmap::new(1000, 1000)?;
    let report = render_block(&block, config, &mut surface)?;
    tracing::info!(
        shapes = report.shapes_painted,
        draws = report.draws_consumed,
        "painted"
    );

    save_pixmap_png(&surface, "paint-basic.png")?;
    Ok(())
}
