//! Integration module for driving trackers from a frame stream.
//!
//! This module provides the frame source and display traits, the comparison
//! loop that runs several trackers side by side, and (behind the
//! `opencv-backend` feature) the OpenCV implementations of all of them.

mod builder;
mod pipeline;
mod relay;
mod report;
mod sink;
mod source;
mod synthetic;

pub use builder::ComparisonBuilder;
pub use pipeline::{ComparisonConfig, TrackerComparison};
pub use relay::{frame_file_name, relay};
pub use report::{ComparisonReport, FrameReport, LaneReport, StopReason};
pub use sink::{FrameSink, NullSink};
pub use source::{FrameList, FrameSource, IMAGE_EXTENSIONS, list_images};
pub use synthetic::SyntheticSource;

#[cfg(feature = "opencv-backend")]
mod opencv_backend;

#[cfg(feature = "opencv-backend")]
pub use opencv_backend::{FrameDirWriter, HighGuiWindow, ImageDirSource, OpenCvTracker, VideoFileSource};
