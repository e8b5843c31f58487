//! Deterministic synthetic clip: a flat-colored rectangle sliding over a
//! uniform background.

use crate::error::Result;
use crate::tracker::{Color, Frame, Rect};

use super::FrameSource;

/// Generates `len` frames with a target moving at constant velocity.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    width: usize,
    height: usize,
    background: Color,
    target_color: Color,
    start: Rect,
    velocity: (f32, f32),
    len: usize,
    next: usize,
}

impl SyntheticSource {
    /// A `width` x `height` clip of `len` frames with a white target starting
    /// at `start` on black, standing still until [`with_velocity`] is set.
    ///
    /// [`with_velocity`]: SyntheticSource::with_velocity
    pub fn new(width: usize, height: usize, start: Rect, len: usize) -> Self {
        Self {
            width,
            height,
            background: Color::BLACK,
            target_color: Color::WHITE,
            start,
            velocity: (0.0, 0.0),
            len,
            next: 0,
        }
    }

    /// Pixels the target moves per frame along x and y.
    pub fn with_velocity(mut self, dx: f32, dy: f32) -> Self {
        self.velocity = (dx, dy);
        self
    }

    pub fn with_colors(mut self, background: Color, target: Color) -> Self {
        self.background = background;
        self.target_color = target;
        self
    }

    /// Where the target is drawn on frame `index` (0-based).
    pub fn target_at(&self, index: usize) -> Rect {
        let steps = index as f32;
        self.start
            .translate(self.velocity.0 * steps, self.velocity.1 * steps)
    }

    /// Render frame `index` without advancing the stream.
    pub fn render(&self, index: usize) -> Frame {
        let mut frame = Frame::filled(self.width, self.height, self.background);
        frame.fill_rect(&self.target_at(index), self.target_color);
        frame
    }

    /// Frames not yet produced.
    pub fn remaining(&self) -> usize {
        self.len - self.next
    }

    /// Rewind to the first frame.
    pub fn rewind(&mut self) {
        self.next = 0;
    }
}

impl FrameSource for SyntheticSource {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        if self.next >= self.len {
            return Ok(None);
        }
        let frame = self.render(self.next);
        self.next += 1;
        Ok(Some(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_motion() {
        let mut source =
            SyntheticSource::new(64, 48, Rect::new(4.0, 10.0, 8.0, 6.0), 3).with_velocity(5.0, 1.0);

        assert_eq!(source.target_at(2), Rect::new(14.0, 12.0, 8.0, 6.0));

        let first = source.next_frame().unwrap().unwrap();
        assert_eq!(first.count_pixels(Color::WHITE), 48);
        assert_eq!(first.pixel(4, 10), Some(Color::WHITE));
        assert_eq!(first.pixel(3, 10), Some(Color::BLACK));

        let second = source.next_frame().unwrap().unwrap();
        assert_eq!(second.pixel(9, 11), Some(Color::WHITE));
        assert_eq!(second.pixel(4, 10), Some(Color::BLACK));

        assert_eq!(source.remaining(), 1);
        assert!(source.next_frame().unwrap().is_some());
        assert!(source.next_frame().unwrap().is_none());

        source.rewind();
        assert_eq!(source.next_frame().unwrap().unwrap(), first);
    }

    #[test]
    fn test_synthetic_colors() {
        let source = SyntheticSource::new(8, 8, Rect::new(0.0, 0.0, 2.0, 2.0), 1)
            .with_colors(Color::BLUE, Color::RED);
        let frame = source.render(0);
        assert_eq!(frame.count_pixels(Color::RED), 4);
        assert_eq!(frame.count_pixels(Color::BLUE), 60);
    }
}
