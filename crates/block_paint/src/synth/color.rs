//! Color synthesis from bag draws.
use crate::bag::ShuffleBag;
use crate::style::Rgb;

/// Draws the next synthesized color from the bag.
///
/// Consumes exactly three draws, in order R, G, B, each mapped via
/// `floor(255 * draw)`. Channels land in [0, 255].
pub fn next_color(bag: &mut ShuffleBag) -> Rgb {
    let mut channel = || (255.0 * bag.next_f64()).floor() as u8;
    Rgb {
        r: channel(),
        g: channel(),
        b: channel(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumes_exactly_three_draws() {
        let mut bag = ShuffleBag::new(1);
        next_color(&mut bag);
        assert_eq!(bag.draws_consumed(), 3);
    }

    #[test]
    fn channels_match_floored_draws() {
        let mut reference = ShuffleBag::new(123);
        let r = (255.0 * reference.next_f64()).floor() as u8;
        let g = (255.0 * reference.next_f64()).floor() as u8;
        let b = (255.0 * reference.next_f64()).floor() as u8;

        let mut bag = ShuffleBag::new(123);
        assert_eq!(next_color(&mut bag), Rgb { r, g, b });
    }

    #[test]
    fn seed_255_yields_reference_color() {
        let mut bag = ShuffleBag::new(255);
        assert_eq!(next_color(&mut bag), Rgb::new(118, 86, 56));
    }

    #[test]
    fn same_seed_same_color_stream() {
        let mut a = ShuffleBag::new(31337);
        let mut b = ShuffleBag::new(31337);
        for _ in 0..100 {
            assert_eq!(next_color(&mut a), next_color(&mut b));
        }
    }
}
