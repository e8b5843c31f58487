//! TrackerComparison: the per-frame loop that runs every tracker side by side.

use std::time::Duration;

use crate::error::Result;
use crate::tracker::{Color, ComparisonState, Frame, LaneUpdate, TrackerLane};

use super::{ComparisonReport, FrameReport, FrameSink, FrameSource, LaneReport, StopReason};

/// Configuration for a comparison run.
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    /// Frames discarded before the seed frame
    pub skip_frames: usize,
    /// Color of the seed rectangle drawn on the seed frame
    pub seed_color: Color,
    pub seed_thickness: i32,
    /// Line thickness of per-frame tracker overlays
    pub overlay_thickness: i32,
    /// How long the seed frame stays on screen before tracking starts
    pub seed_hold: Duration,
    /// Pause after each rendered frame
    pub frame_hold: Duration,
    /// Reject seeds that do not fit inside the seed frame
    pub validate_seed: bool,
    /// Stop after this many frames past the seed frame
    pub max_frames: Option<usize>,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            skip_frames: 0,
            seed_color: Color::GREEN,
            seed_thickness: 3,
            overlay_thickness: 2,
            seed_hold: Duration::from_millis(1500),
            frame_hold: Duration::from_millis(10),
            validate_seed: false,
            max_frames: None,
        }
    }
}

/// Runs several initialized trackers over the same frame stream.
///
/// Built by [`ComparisonBuilder`](super::ComparisonBuilder), which consumes
/// the seed frame and initializes every lane.
pub struct TrackerComparison<S: FrameSource, K: FrameSink> {
    source: S,
    sink: K,
    lanes: Vec<TrackerLane>,
    config: ComparisonConfig,
    state: ComparisonState,
    stopped_by: Option<StopReason>,
    frames_processed: usize,
}

impl<S: FrameSource, K: FrameSink> TrackerComparison<S, K> {
    pub(crate) fn new(source: S, sink: K, lanes: Vec<TrackerLane>, config: ComparisonConfig) -> Self {
        Self {
            source,
            sink,
            lanes,
            config,
            state: ComparisonState::Initialized,
            stopped_by: None,
            frames_processed: 0,
        }
    }

    /// Process the next frame.
    ///
    /// Every lane is updated in order and timed on its own; successful
    /// estimates are drawn in the lane color, lost ones are skipped. Returns
    /// `Ok(None)` once the stream is exhausted (or the frame limit is hit),
    /// and on every call after that without touching the source again.
    pub fn step(&mut self) -> Result<Option<FrameReport>> {
        if self.state.is_terminal() {
            return Ok(None);
        }

        if self
            .config
            .max_frames
            .is_some_and(|limit| self.frames_processed >= limit)
        {
            log::info!("frame limit of {} reached", self.frames_processed);
            self.stop(StopReason::FrameLimit);
            return Ok(None);
        }

        let Some(mut frame) = self.source.next_frame()? else {
            log::info!("EOF reached after {} frames", self.frames_processed);
            self.stop(StopReason::EndOfStream);
            return Ok(None);
        };

        self.state = ComparisonState::Running;
        self.frames_processed += 1;
        let index = self.frames_processed;

        let mut updates = Vec::with_capacity(self.lanes.len());
        for lane in &mut self.lanes {
            let update = lane.update(&frame)?;
            if !update.success() {
                log::debug!("frame {}: {} lost the target", index, lane.name());
            }
            updates.push(update);
        }

        self.render(&mut frame, &updates)?;

        Ok(Some(FrameReport {
            index,
            lanes: updates,
        }))
    }

    /// Run until the stream is exhausted.
    pub fn run(self) -> Result<ComparisonReport> {
        self.run_with(|_| {})
    }

    /// Run until the stream is exhausted, calling `observer` after every frame.
    pub fn run_with<F>(mut self, mut observer: F) -> Result<ComparisonReport>
    where
        F: FnMut(&FrameReport),
    {
        while let Some(report) = self.step()? {
            observer(&report);
        }

        let report = self.report();
        for lane in &report.lanes {
            log::info!(
                "{}: {:.6}s over {} frames ({} lost)",
                lane.name,
                lane.elapsed.as_secs_f64(),
                report.frames_processed,
                lane.failures
            );
        }
        Ok(report)
    }

    /// Snapshot of the accumulated figures so far.
    pub fn report(&self) -> ComparisonReport {
        ComparisonReport {
            frames_processed: self.frames_processed,
            stopped_by: self.stopped_by,
            lanes: self.lanes.iter().map(LaneReport::from).collect(),
        }
    }

    pub fn state(&self) -> ComparisonState {
        self.state
    }

    pub fn lanes(&self) -> &[TrackerLane] {
        &self.lanes
    }

    pub fn frames_processed(&self) -> usize {
        self.frames_processed
    }

    /// Why the run ended, `None` while frames are still being read.
    pub fn stopped_by(&self) -> Option<StopReason> {
        self.stopped_by
    }

    fn stop(&mut self, reason: StopReason) {
        self.state = ComparisonState::Exhausted;
        self.stopped_by = Some(reason);
    }

    fn render(&mut self, frame: &mut Frame, updates: &[LaneUpdate]) -> Result<()> {
        for (lane, update) in self.lanes.iter().zip(updates) {
            if let Some(region) = &update.region {
                frame.draw_rect(region, lane.color(), self.config.overlay_thickness);
            }
        }
        self.sink.show(frame)?;
        self.sink.hold(self.config.frame_hold)
    }
}
