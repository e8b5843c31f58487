//! Per-frame and end-of-stream reports.

use std::fmt;
use std::time::Duration;

use crate::tracker::{LaneUpdate, TrackerLane};

/// Result of processing one frame after the seed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// 1-based index of the frame after the seed frame
    pub index: usize,
    /// One entry per lane, in lane order
    pub lanes: Vec<LaneUpdate>,
}

impl FrameReport {
    /// Success pattern of this frame, in lane order.
    pub fn successes(&self) -> Vec<bool> {
        self.lanes.iter().map(LaneUpdate::success).collect()
    }
}

/// Accumulated figures for one tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneReport {
    pub name: String,
    /// Total wall-clock time spent inside update calls
    pub elapsed: Duration,
    pub successes: usize,
    pub failures: usize,
}

impl From<&TrackerLane> for LaneReport {
    fn from(lane: &TrackerLane) -> Self {
        Self {
            name: lane.name().to_string(),
            elapsed: lane.elapsed(),
            successes: lane.successes(),
            failures: lane.failures(),
        }
    }
}

/// Why a comparison run stopped reading frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The source ran out of frames
    EndOfStream,
    /// `max_frames` frames were processed before the source ran out
    FrameLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::EndOfStream => f.write_str("EOF reached"),
            StopReason::FrameLimit => f.write_str("frame limit reached"),
        }
    }
}

/// Summary of a complete comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    /// Frames processed after the seed frame
    pub frames_processed: usize,
    /// `None` for a snapshot taken mid-run
    pub stopped_by: Option<StopReason>,
    pub lanes: Vec<LaneReport>,
}

impl ComparisonReport {
    pub fn lane(&self, name: &str) -> Option<&LaneReport> {
        self.lanes.iter().find(|lane| lane.name == name)
    }

    /// How many times more update time lane `slower` used than lane `faster`.
    ///
    /// `None` if either lane is unknown or `faster` accumulated no time.
    pub fn relative_cost(&self, slower: &str, faster: &str) -> Option<f64> {
        let slower = self.lane(slower)?.elapsed.as_secs_f64();
        let faster = self.lane(faster)?.elapsed.as_secs_f64();
        (faster > 0.0).then(|| slower / faster)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lane in &self.lanes {
            writeln!(
                f,
                "{} time: {:.6} s ({} tracked, {} lost)",
                lane.name,
                lane.elapsed.as_secs_f64(),
                lane.successes,
                lane.failures
            )?;
        }
        write!(f, "frames processed: {}", self.frames_processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ComparisonReport {
        ComparisonReport {
            frames_processed: 12,
            stopped_by: Some(StopReason::EndOfStream),
            lanes: vec![
                LaneReport {
                    name: "KCF".to_string(),
                    elapsed: Duration::from_millis(500),
                    successes: 10,
                    failures: 2,
                },
                LaneReport {
                    name: "CSRT".to_string(),
                    elapsed: Duration::from_millis(4000),
                    successes: 12,
                    failures: 0,
                },
            ],
        }
    }

    #[test]
    fn test_relative_cost() {
        let report = report();
        let ratio = report.relative_cost("CSRT", "KCF").unwrap();
        assert!((ratio - 8.0).abs() < 1e-9);
        assert!(report.relative_cost("MOSSE", "KCF").is_none());
    }

    #[test]
    fn test_display() {
        let text = report().to_string();
        assert!(text.contains("KCF time: 0.500000 s (10 tracked, 2 lost)"));
        assert!(text.contains("CSRT time: 4.000000 s"));
        assert!(text.ends_with("frames processed: 12"));
    }

    #[test]
    fn test_stop_reason_display() {
        assert_eq!(StopReason::EndOfStream.to_string(), "EOF reached");
        assert_eq!(StopReason::FrameLimit.to_string(), "frame limit reached");
    }
}
