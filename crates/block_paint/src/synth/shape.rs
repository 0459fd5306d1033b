//! Shape synthesis from bag draws.
use crate::bag::ShuffleBag;

/// Base rectangle width before modifier scaling, in pixels.
pub const BASE_WIDTH: f64 = 100.0;
/// Base rectangle height before modifier scaling, in pixels.
pub const BASE_HEIGHT: f64 = 50.0;

/// A synthesized rectangle. Transient; not retained after painting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// Top-left corner x, in surface pixels.
    pub x: f64,
    /// Top-left corner y, in surface pixels.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Draws the next synthesized shape from the bag.
///
/// Consumes exactly two draws, in order x then y, scaled by the surface
/// dimensions to place the top-left corner. Size is `BASE_WIDTH * mod1` by
/// `BASE_HEIGHT * mod2`; callers validate the modifiers as non-negative and
/// finite before reaching this point (see `RenderConfig::validate`).
pub fn next_shape(
    bag: &mut ShuffleBag,
    surface_width: u32,
    surface_height: u32,
    mod1: f64,
    mod2: f64,
) -> Shape {
    let x = f64::from(surface_width) * bag.next_f64();
    let y = f64::from(surface_height) * bag.next_f64();
    Shape {
        x,
        y,
        width: BASE_WIDTH * mod1,
        height: BASE_HEIGHT * mod2,
    }
}
