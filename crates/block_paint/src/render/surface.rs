//! The output surface: a fixed-size RGBA8 raster owned by the caller.
use crate::error::{Error, Result};
use crate::style::Rgb;
use crate::synth::Shape;

/// A fixed-size RGBA8 pixel raster.
///
/// Cleared at the start of each render and mutated exclusively by the single
/// in-flight render invocation. Rows are stored top-to-bottom, pixels
/// left-to-right, 4 bytes per pixel, alpha always 255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Creates a surface cleared to opaque black.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] when either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let len = width as usize * height as usize * 4;
        let mut data = vec![0; len];
        for px in data.chunks_exact_mut(4) {
            px[3] = 0xff;
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the surface, returning its raw RGBA bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Reads the pixel at `(x, y)`. Returns `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some(Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Fills the whole surface with `color`.
    pub fn clear(&mut self, color: Rgb) {
        for px in self.data.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = 0xff;
        }
    }

    /// Paints `shape` with `color`, clipped to the surface.
    ///
    /// Fractional rectangles cover the pixel span
    /// `[floor(x), ceil(x + width)) x [floor(y), ceil(y + height))`; the
    /// rounding is fixed so that identical shapes always touch identical
    /// pixels.
    pub fn fill_rect(&mut self, shape: &Shape, color: Rgb) {
        if shape.width <= 0.0 || shape.height <= 0.0 {
            return;
        }
        let x0 = shape.x.floor().max(0.0) as usize;
        let y0 = shape.y.floor().max(0.0) as usize;
        let x1 = ((shape.x + shape.width).ceil().max(0.0) as usize).min(self.width as usize);
        let y1 = ((shape.y + shape.height).ceil().max(0.0) as usize).min(self.height as usize);

        for y in y0..y1 {
            let row = y * self.width as usize;
            for x in x0..x1 {
                let i = (row + x) * 4;
                self.data[i] = color.r;
                self.data[i + 1] = color.g;
                self.data[i + 2] = color.b;
                self.data[i + 3] = 0xff;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, width: f64, height: f64) -> Shape {
        Shape {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            Pixmap::new(0, 100),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Pixmap::new(100, 0),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn new_surface_is_opaque_black() {
        let pm = Pixmap::new(4, 4).unwrap();
        assert_eq!(pm.as_bytes().len(), 4 * 4 * 4);
        assert_eq!(pm.pixel(0, 0), Some(Rgb::BLACK));
        assert_eq!(pm.as_bytes()[3], 0xff);
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut pm = Pixmap::new(3, 2).unwrap();
        let c = Rgb::new(10, 20, 30);
        pm.clear(c);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(pm.pixel(x, y), Some(c));
            }
        }
    }

    #[test]
    fn fill_rect_covers_expected_span() {
        let mut pm = Pixmap::new(10, 10).unwrap();
        let c = Rgb::new(200, 0, 0);
        pm.fill_rect(&rect(2.0, 3.0, 4.0, 2.0), c);

        assert_eq!(pm.pixel(2, 3), Some(c));
        assert_eq!(pm.pixel(5, 4), Some(c));
        // outside the span
        assert_eq!(pm.pixel(1, 3), Some(Rgb::BLACK));
        assert_eq!(pm.pixel(6, 3), Some(Rgb::BLACK));
        assert_eq!(pm.pixel(2, 5), Some(Rgb::BLACK));
    }

    #[test]
    fn fractional_rects_round_outward() {
        let mut pm = Pixmap::new(10, 10).unwrap();
        let c = Rgb::new(0, 200, 0);
        pm.fill_rect(&rect(1.5, 1.5, 1.0, 1.0), c);

        // floor(1.5)=1 through ceil(2.5)=3 exclusive
        assert_eq!(pm.pixel(1, 1), Some(c));
        assert_eq!(pm.pixel(2, 2), Some(c));
        assert_eq!(pm.pixel(3, 3), Some(Rgb::BLACK));
    }

    #[test]
    fn rects_clip_at_surface_edges() {
        let mut pm = Pixmap::new(8, 8).unwrap();
        let c = Rgb::new(0, 0, 200);
        pm.fill_rect(&rect(6.0, 6.0, 100.0, 100.0), c);
        pm.fill_rect(&rect(-5.0, -5.0, 7.0, 7.0), c);

        assert_eq!(pm.pixel(7, 7), Some(c));
        assert_eq!(pm.pixel(0, 0), Some(c));
        assert_eq!(pm.pixel(1, 1), Some(c));
        assert_eq!(pm.pixel(3, 3), Some(Rgb::BLACK));
    }

    #[test]
    fn degenerate_rects_paint_nothing() {
        let mut pm = Pixmap::new(8, 8).unwrap();
        let before = pm.clone();
        pm.fill_rect(&rect(2.0, 2.0, 0.0, 5.0), Rgb::new(9, 9, 9));
        pm.fill_rect(&rect(2.0, 2.0, 5.0, 0.0), Rgb::new(9, 9, 9));
        assert_eq!(pm, before);
    }

    #[test]
    fn fully_offscreen_rects_paint_nothing() {
        let mut pm = Pixmap::new(8, 8).unwrap();
        let before = pm.clone();
        pm.fill_rect(&rect(20.0, 20.0, 5.0, 5.0), Rgb::new(9, 9, 9));
        pm.fill_rect(&rect(-20.0, -20.0, 5.0, 5.0), Rgb::new(9, 9, 9));
        assert_eq!(pm, before);
    }
}
