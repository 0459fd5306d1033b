#![forbid(unsafe_code)]
//! block_paint: deterministic block-seeded generative art.
//!
//! Given an immutable block record (hash + ordered transactions) and a small
//! set of numeric/color parameters, paints a reproducible 2D raster: same
//! inputs, pixel-identical output, on every platform and every run.
//!
//! Modules:
//! - seed: block hash to generator seed
//! - bag: the seeded, bit-reproducible shuffle bag (reference MT19937)
//! - synth: per-transaction color and shape synthesis
//! - render: caller-owned surface and the orchestrating renderer
//! - style: descriptor and option presets consumed by a hosting gallery
pub mod bag;
pub mod block;
pub mod error;
pub mod render;
pub mod seed;
pub mod style;
pub mod synth;

/// Convenient re-exports for common types. Import with `use block_paint::prelude::*;`.
pub mod prelude {
    pub use crate::bag::ShuffleBag;
    pub use crate::block::{Block, Transaction};
    pub use crate::error::{Error, Result};
    pub use crate::render::{render_block, Pixmap, RenderConfig, RenderReport, StyleRenderer};
    pub use crate::seed::{derive_seed, Seed, SEED_HEX_LEN};
    pub use crate::style::{descriptor, Rgb, StyleDescriptor, StyleOptions};
    pub use crate::synth::{next_color, next_shape, synthesize, Shape, Synthesized};
}
