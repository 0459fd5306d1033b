//! Per-transaction color and shape synthesis.
//!
//! Each transaction consumes exactly five draws from the shared bag: three
//! for the color (R, G, B), then two for the shape position (x, y). The
//! order is part of the determinism contract — reordering draws changes
//! every subsequent value in the sequence.
use crate::bag::ShuffleBag;
use crate::style::Rgb;

pub mod color;
pub mod shape;

pub use color::next_color;
pub use shape::{next_shape, Shape};

/// One transaction's worth of synthesized output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Synthesized {
    pub color: Rgb,
    pub shape: Shape,
}

/// Synthesizes the color and shape for one transaction.
///
/// Pure with respect to everything but the bag, which advances by exactly
/// five draws. Calling this once per transaction, in transaction order,
/// reproduces the full visual sequence for the block.
pub fn synthesize(
    bag: &mut ShuffleBag,
    surface_width: u32,
    surface_height: u32,
    mod1: f64,
    mod2: f64,
) -> Synthesized {
    let color = next_color(bag);
    let shape = next_shape(bag, surface_width, surface_height, mod1, mod2);
    Synthesized { color, shape }
}
