use std::str::FromStr;

use crate::error::Error;

/// Axis-aligned region of interest.
///
/// Stored as top-left corner plus size (TLWH). Seeds are usually written as
/// two corners instead, see [`Rect::from_tlbr`] and the [`FromStr`] impl.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Top-left x coordinate
    pub x: f32,
    /// Top-left y coordinate
    pub y: f32,
    /// Width of the region
    pub width: f32,
    /// Height of the region
    pub height: f32,
}

impl Rect {
    /// Create a new Rect from top-left coordinates and dimensions (TLWH format).
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a Rect from TLBR format (top-left x, top-left y, bottom-right x, bottom-right y).
    #[inline]
    pub fn from_tlbr(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        }
    }

    /// Convert to TLWH format: (x, y, width, height).
    #[inline]
    pub fn to_tlwh(&self) -> [f32; 4] {
        [self.x, self.y, self.width, self.height]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Whether the region is non-empty and lies entirely inside a
    /// `width` x `height` frame.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        !self.is_empty()
            && self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.width <= width as f32
            && self.y + self.height <= height as f32
    }

    /// Round to whole pixels: `(x, y, width, height)`.
    pub fn round(&self) -> (i32, i32, i32, i32) {
        (
            self.x.round() as i32,
            self.y.round() as i32,
            self.width.round() as i32,
            self.height.round() as i32,
        )
    }

    /// Shift the region by `(dx, dy)`.
    #[inline]
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Parses a corner list `"x1,y1,x2,y2"`.
impl FromStr for Rect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Error::invalid_rect(s, e.to_string()))?;

        let &[x1, y1, x2, y2] = values.as_slice() else {
            return Err(Error::invalid_rect(
                s,
                format!("expected 4 comma-separated values, got {}", values.len()),
            ));
        };

        if x2 <= x1 || y2 <= y1 {
            return Err(Error::invalid_rect(
                s,
                "bottom-right corner must lie below and right of top-left",
            ));
        }

        Ok(Self::from_tlbr(x1, y1, x2, y2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_conversions() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);

        assert_eq!(rect.to_tlwh(), [10.0, 20.0, 30.0, 40.0]);
        assert_eq!(rect.translate(-10.0, 5.0).to_tlwh(), [0.0, 25.0, 30.0, 40.0]);
    }

    #[test]
    fn test_from_tlbr() {
        let rect = Rect::from_tlbr(665.0, 270.0, 760.0, 340.0);
        assert_eq!(rect.to_tlwh(), [665.0, 270.0, 95.0, 70.0]);
    }

    #[test]
    fn test_parse_corners() {
        let rect: Rect = "10, 70, 100, 200".parse().unwrap();
        assert_eq!(rect, Rect::new(10.0, 70.0, 90.0, 130.0));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("10,70,100".parse::<Rect>().is_err());
        assert!("10,70,100,abc".parse::<Rect>().is_err());
        assert!("100,70,10,200".parse::<Rect>().is_err());
        assert!(matches!(
            "1,2,3,4,5".parse::<Rect>(),
            Err(Error::InvalidRect { .. })
        ));
    }

    #[test]
    fn test_fits_within() {
        assert!(Rect::new(0.0, 0.0, 64.0, 48.0).fits_within(64, 48));
        assert!(!Rect::new(1.0, 0.0, 64.0, 48.0).fits_within(64, 48));
        assert!(!Rect::new(-1.0, 0.0, 10.0, 10.0).fits_within(64, 48));
        assert!(!Rect::new(5.0, 5.0, 0.0, 10.0).fits_within(64, 48));
    }

    #[test]
    fn test_round() {
        let rect = Rect::new(10.4, 20.6, 30.5, 39.49);
        assert_eq!(rect.round(), (10, 21, 31, 39));
    }
}
