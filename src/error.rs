//! Error types for trackbench.

use thiserror::Error;

use crate::tracker::Rect;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while setting up or running a tracker comparison.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid rectangle {input:?}: {reason}")]
    InvalidRect { input: String, reason: String },

    #[error("unknown tracker {0:?} (expected kcf or csrt)")]
    UnknownTracker(String),

    #[error("frame buffer of {actual} bytes does not match {width}x{height} RGB ({expected} bytes)")]
    FrameSize {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("no seed region was given")]
    MissingSeed,

    #[error("at least one tracker is required")]
    NoTrackers,

    #[error("stream ended after {frames_read} frames, before the seed frame")]
    StreamEndedBeforeSeed { frames_read: usize },

    #[error("seed region {seed:?} lies outside the {width}x{height} seed frame")]
    SeedOutOfBounds { seed: Rect, width: usize, height: usize },

    #[error("tracker {name} failed: {message}")]
    Tracker { name: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "opencv-backend")]
impl From<opencv::Error> for Error {
    fn from(err: opencv::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

impl Error {
    pub fn invalid_rect<S: Into<String>, R: Into<String>>(input: S, reason: R) -> Self {
        Self::InvalidRect {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn tracker<S: Into<String>, M: Into<String>>(name: S, message: M) -> Self {
        Self::Tracker {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
