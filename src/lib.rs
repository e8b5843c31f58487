//! Side-by-side comparison of single-object visual trackers.
//!
//! A [`TrackerComparison`] reads frames from a [`FrameSource`], feeds every
//! frame to each configured [`VisualTracker`] in turn, accumulates the
//! wall-clock time spent inside each tracker's update, draws the successful
//! estimates over the frame and hands it to a [`FrameSink`]. The tracking
//! algorithms themselves (KCF, CSRT) come from OpenCV when the
//! `opencv-backend` feature is enabled.

pub mod error;
pub mod integration;
pub mod tracker;

pub use error::{Error, Result};
pub use integration::{
    ComparisonBuilder, ComparisonConfig, ComparisonReport, FrameList, FrameReport, FrameSink,
    FrameSource, LaneReport, NullSink, StopReason, SyntheticSource, TrackerComparison,
    frame_file_name, relay,
};
pub use tracker::{
    Color, ComparisonState, Frame, LaneUpdate, Rect, TrackerKind, TrackerLane, VisualTracker,
};
