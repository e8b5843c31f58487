//! Decoded video frame and overlay drawing.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect as PixelRect;

use crate::error::{Error, Result};
use crate::tracker::rect::Rect;

/// RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const BLACK: Color = Color([0, 0, 0]);
    pub const WHITE: Color = Color([255, 255, 255]);
    pub const RED: Color = Color([255, 0, 0]);
    pub const GREEN: Color = Color([0, 255, 0]);
    pub const BLUE: Color = Color([0, 0, 255]);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color([r, g, b])
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb(color.0)
    }
}

/// A single decoded frame in RGB channel order.
///
/// Pixels are packed row-major, three bytes each, the same memory order an
/// 8-bit 3-channel OpenCV `Mat` uses.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    image: RgbImage,
}

impl Frame {
    /// Create a black frame.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            image: RgbImage::new(width as u32, height as u32),
        }
    }

    /// Create a frame filled with a uniform color.
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width as u32, height as u32, color.into()),
        }
    }

    /// Wrap a packed RGB buffer of `width * height * 3` bytes.
    pub fn from_rgb_bytes(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self> {
        let expected = width * height * 3;
        let actual = bytes.len();
        if actual != expected {
            return Err(Error::FrameSize {
                width,
                height,
                expected,
                actual,
            });
        }
        let image = RgbImage::from_raw(width as u32, height as u32, bytes).ok_or(
            Error::FrameSize {
                width,
                height,
                expected,
                actual,
            },
        )?;
        Ok(Self { image })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.image.width() as usize
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.image.height() as usize
    }

    /// Full-frame region, useful for bounds checks.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width() as f32, self.height() as f32)
    }

    /// Color at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(Color(self.image.get_pixel(x as u32, y as u32).0))
    }

    /// Packed row-major RGB bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Number of pixels that have exactly `color`.
    pub fn count_pixels(&self, color: Color) -> usize {
        self.image.pixels().filter(|px| px.0 == color.0).count()
    }

    /// Fill the interior of `rect` with `color`, clipped to the frame.
    pub fn fill_rect(&mut self, rect: &Rect, color: Color) {
        let (x, y, w, h) = rect.round();
        if w <= 0 || h <= 0 {
            return;
        }
        let area = PixelRect::at(x, y).of_size(w as u32, h as u32);
        draw_filled_rect_mut(&mut self.image, area, color.into());
    }

    /// Draw the outline of `rect` from `(x, y)` to `(x + w, y + h)` inclusive.
    ///
    /// Extra thickness is drawn as nested outlines growing outward. Anything
    /// outside the frame is clipped.
    pub fn draw_rect(&mut self, rect: &Rect, color: Color, thickness: i32) {
        let (x, y, w, h) = rect.round();
        if w < 0 || h < 0 {
            return;
        }

        for offset in 0..thickness.max(1) {
            let outline = PixelRect::at(x - offset, y - offset)
                .of_size((w + 1 + 2 * offset) as u32, (h + 1 + 2 * offset) as u32);
            draw_hollow_rect_mut(&mut self.image, outline, color.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_frame() {
        let frame = Frame::filled(8, 4, Color::BLUE);
        assert_eq!(frame.width(), 8);
        assert_eq!(frame.height(), 4);
        assert_eq!(frame.pixel(7, 3), Some(Color::BLUE));
        assert_eq!(frame.pixel(8, 0), None);
        assert_eq!(frame.count_pixels(Color::BLUE), 32);
    }

    #[test]
    fn test_from_rgb_bytes() {
        let bytes = vec![1, 2, 3, 4, 5, 6];
        let frame = Frame::from_rgb_bytes(2, 1, bytes.clone()).unwrap();
        assert_eq!(frame.pixel(1, 0), Some(Color::rgb(4, 5, 6)));
        assert_eq!(frame.as_bytes(), bytes.as_slice());

        assert!(matches!(
            Frame::from_rgb_bytes(2, 2, bytes),
            Err(Error::FrameSize { expected: 12, actual: 6, .. })
        ));
    }

    #[test]
    fn test_fill_rect() {
        let mut frame = Frame::new(10, 10);
        frame.fill_rect(&Rect::new(2.0, 3.0, 4.0, 2.0), Color::WHITE);
        assert_eq!(frame.count_pixels(Color::WHITE), 8);
        assert_eq!(frame.pixel(2, 3), Some(Color::WHITE));
        assert_eq!(frame.pixel(6, 3), Some(Color::BLACK));
    }

    #[test]
    fn test_draw_rect_outline() {
        let mut frame = Frame::new(20, 20);
        frame.draw_rect(&Rect::new(5.0, 5.0, 4.0, 4.0), Color::GREEN, 1);

        // 5x5 pixel square outline
        assert_eq!(frame.count_pixels(Color::GREEN), 16);
        assert_eq!(frame.pixel(5, 5), Some(Color::GREEN));
        assert_eq!(frame.pixel(9, 9), Some(Color::GREEN));
        assert_eq!(frame.pixel(7, 7), Some(Color::BLACK));
    }

    #[test]
    fn test_draw_rect_thickness() {
        let mut frame = Frame::new(20, 20);
        frame.draw_rect(&Rect::new(5.0, 5.0, 4.0, 4.0), Color::RED, 2);

        // 5x5 outline plus the 7x7 ring around it
        assert_eq!(frame.count_pixels(Color::RED), 16 + 24);
        assert_eq!(frame.pixel(4, 4), Some(Color::RED));
        assert_eq!(frame.pixel(6, 6), Some(Color::BLACK));
    }

    #[test]
    fn test_draw_rect_clipped() {
        let mut frame = Frame::new(10, 10);
        frame.draw_rect(&Rect::new(-5.0, -5.0, 30.0, 8.0), Color::WHITE, 3);
        assert!(frame.count_pixels(Color::WHITE) > 0);
        assert_eq!(frame.pixel(9, 9), Some(Color::BLACK));
    }

    #[test]
    fn test_fill_rect_degenerate() {
        let mut frame = Frame::new(10, 10);
        frame.fill_rect(&Rect::new(1.0, 1.0, 0.0, 5.0), Color::RED);
        frame.fill_rect(&Rect::new(1.0, 1.0, 5.0, -2.0), Color::RED);
        assert_eq!(frame.count_pixels(Color::RED), 0);
    }
}
