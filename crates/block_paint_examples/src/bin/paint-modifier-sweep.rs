use block_paint::prelude::*;
use block_paint_examples::{init_tracing, save_pixmap_png, DEMO_HASHES};

/// Renders the same block at increasing modifier values: mod1 stretches the
/// rectangles horizontally, mod2 vertically, while positions and colors stay
/// fixed by the hash.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let block = Block::with_transaction_count(DEMO_HASHES[1], 120);

    for (i, (mod1, mod2)) in [(0.1, 0.1), (0.4, 0.1), (0.9, 0.5)].into_iter().enumerate() {
        let config = RenderConfig::from_options(800, 800, &StyleOptions::default())
            .with_modifiers(mod1, mod2, 0.4);

        let mut surface = Pixmap::new(800, 800)?;
        render_block(&block, config, &mut surface)?;

        let out = format!("paint-modifier-sweep-{i}.png");
        save_pixmap_png(&surface, &out)?;
    }

    Ok(())
}
