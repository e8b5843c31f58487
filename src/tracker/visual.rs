//! Trait for single-object visual tracking algorithms.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::tracker::frame::{Color, Frame};
use crate::tracker::rect::Rect;

/// A stateful single-object tracker.
///
/// The estimation itself is opaque: implementations wrap an external
/// algorithm (OpenCV's KCF or CSRT, see the `opencv-backend` feature) or,
/// in tests, a scripted stand-in.
///
/// # Example
///
/// ```ignore
/// use trackbench::{Frame, Rect, Result, VisualTracker};
///
/// struct StandStill {
///     region: Rect,
/// }
///
/// impl VisualTracker for StandStill {
///     fn init(&mut self, _frame: &Frame, seed: Rect) -> Result<()> {
///         self.region = seed;
///         Ok(())
///     }
///
///     fn update(&mut self, _frame: &Frame) -> Result<Option<Rect>> {
///         Ok(Some(self.region))
///     }
/// }
/// ```
pub trait VisualTracker {
    /// Initialize the tracker on the seed frame with the seed region.
    fn init(&mut self, frame: &Frame, seed: Rect) -> Result<()>;

    /// Re-estimate the region on the next frame.
    ///
    /// Returns `Ok(None)` when the tracker considers itself lost on this
    /// frame. That is not an error; later frames may still succeed.
    fn update(&mut self, frame: &Frame) -> Result<Option<Rect>>;
}

impl<T: VisualTracker + ?Sized> VisualTracker for Box<T> {
    fn init(&mut self, frame: &Frame, seed: Rect) -> Result<()> {
        (**self).init(frame, seed)
    }

    fn update(&mut self, frame: &Frame) -> Result<Option<Rect>> {
        (**self).update(frame)
    }
}

/// The tracking algorithms available from the OpenCV backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackerKind {
    /// Kernelized correlation filter: fast, loses targets that change scale.
    Kcf,
    /// Discriminative correlation filter with channel and spatial
    /// reliability: slower, handles scale changes.
    Csrt,
}

impl TrackerKind {
    pub const ALL: [TrackerKind; 2] = [TrackerKind::Kcf, TrackerKind::Csrt];

    pub fn name(&self) -> &'static str {
        match self {
            TrackerKind::Kcf => "KCF",
            TrackerKind::Csrt => "CSRT",
        }
    }

    /// Overlay color used when drawing this tracker's estimate.
    pub fn overlay_color(&self) -> Color {
        match self {
            TrackerKind::Kcf => Color::GREEN,
            TrackerKind::Csrt => Color::RED,
        }
    }
}

impl fmt::Display for TrackerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrackerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kcf" => Ok(TrackerKind::Kcf),
            "csrt" => Ok(TrackerKind::Csrt),
            _ => Err(Error::UnknownTracker(s.to_string())),
        }
    }
}
