//! One tracker under comparison, with its timing accumulator.

use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::tracker::frame::{Color, Frame};
use crate::tracker::rect::Rect;
use crate::tracker::visual::VisualTracker;

/// Outcome of a single timed tracker update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneUpdate {
    /// Region reported by the tracker, `None` if it lost the target
    pub region: Option<Rect>,
    /// Wall-clock time spent inside the update call
    pub elapsed: Duration,
}

impl LaneUpdate {
    #[inline]
    pub fn success(&self) -> bool {
        self.region.is_some()
    }
}

/// A tracker instance together with its name, overlay color and
/// accumulated update time.
pub struct TrackerLane {
    name: String,
    color: Color,
    tracker: Box<dyn VisualTracker>,
    region: Rect,
    elapsed: Duration,
    successes: usize,
    failures: usize,
}

impl TrackerLane {
    /// Initialize `tracker` on the seed frame.
    ///
    /// Initialization time is not counted towards [`TrackerLane::elapsed`].
    pub fn initialize(
        name: impl Into<String>,
        color: Color,
        mut tracker: Box<dyn VisualTracker>,
        seed_frame: &Frame,
        seed: Rect,
    ) -> Result<Self> {
        let name = name.into();
        tracker
            .init(seed_frame, seed)
            .map_err(|e| Error::tracker(&name, e.to_string()))?;
        log::debug!("{} initialized at {:?}", name, seed.to_tlwh());

        Ok(Self {
            name,
            color,
            tracker,
            region: seed,
            elapsed: Duration::ZERO,
            successes: 0,
            failures: 0,
        })
    }

    /// Run one timed update on `frame`.
    pub fn update(&mut self, frame: &Frame) -> Result<LaneUpdate> {
        let start = Instant::now();
        let region = self.tracker.update(frame);
        let elapsed = start.elapsed();
        let region = region.map_err(|e| Error::tracker(&self.name, e.to_string()))?;

        self.elapsed += elapsed;
        match region {
            Some(region) => {
                self.region = region;
                self.successes += 1;
            }
            None => self.failures += 1,
        }

        Ok(LaneUpdate { region, elapsed })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Last successfully estimated region (the seed until the first
    /// successful update).
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Total time spent inside update calls.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn successes(&self) -> usize {
        self.successes
    }

    pub fn failures(&self) -> usize {
        self.failures
    }
}

impl std::fmt::Debug for TrackerLane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerLane")
            .field("name", &self.name)
            .field("color", &self.color)
            .field("region", &self.region)
            .field("elapsed", &self.elapsed)
            .field("successes", &self.successes)
            .field("failures", &self.failures)
            .finish_non_exhaustive()
    }
}
