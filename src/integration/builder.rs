//! Builder that reads the seed frame and initializes every tracker.

use crate::error::{Error, Result};
use crate::tracker::{Color, Rect, TrackerLane, VisualTracker};

use super::{ComparisonConfig, FrameSink, FrameSource, NullSink, TrackerComparison};

struct PendingTracker {
    name: String,
    color: Color,
    tracker: Box<dyn VisualTracker>,
}

/// Builder for [`TrackerComparison`].
///
/// ```ignore
/// let comparison = ComparisonBuilder::new(source)
///     .seed("665,270,760,340".parse()?)
///     .tracker("KCF", Color::GREEN, Box::new(kcf))
///     .tracker("CSRT", Color::RED, Box::new(csrt))
///     .sink(window)
///     .build()?;
/// let report = comparison.run()?;
/// ```
pub struct ComparisonBuilder<S: FrameSource, K: FrameSink = NullSink> {
    source: S,
    sink: K,
    seed: Option<Rect>,
    trackers: Vec<PendingTracker>,
    config: ComparisonConfig,
}

impl<S: FrameSource> ComparisonBuilder<S, NullSink> {
    /// Create a new builder reading from `source`, rendering nowhere.
    pub fn new(source: S) -> Self {
        Self {
            source,
            sink: NullSink,
            seed: None,
            trackers: Vec::new(),
            config: ComparisonConfig::default(),
        }
    }
}

impl<S: FrameSource, K: FrameSink> ComparisonBuilder<S, K> {
    /// Set the seed region, in seed frame coordinates.
    pub fn seed(mut self, seed: Rect) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add a tracker. Lanes are updated and drawn in insertion order.
    pub fn tracker(
        mut self,
        name: impl Into<String>,
        color: Color,
        tracker: Box<dyn VisualTracker>,
    ) -> Self {
        self.trackers.push(PendingTracker {
            name: name.into(),
            color,
            tracker,
        });
        self
    }

    pub fn config(mut self, config: ComparisonConfig) -> Self {
        self.config = config;
        self
    }

    /// Render to `sink` instead of discarding frames.
    pub fn sink<K2: FrameSink>(self, sink: K2) -> ComparisonBuilder<S, K2> {
        ComparisonBuilder {
            source: self.source,
            sink,
            seed: self.seed,
            trackers: self.trackers,
            config: self.config,
        }
    }

    /// Read up to the seed frame, initialize every tracker on it and show it
    /// with the seed rectangle drawn.
    pub fn build(mut self) -> Result<TrackerComparison<S, K>> {
        let seed = self.seed.ok_or(Error::MissingSeed)?;
        if self.trackers.is_empty() {
            return Err(Error::NoTrackers);
        }

        let mut frames_read = 0;
        let mut seed_frame = None;
        while frames_read <= self.config.skip_frames {
            match self.source.next_frame()? {
                Some(frame) => seed_frame = Some(frame),
                None => return Err(Error::StreamEndedBeforeSeed { frames_read }),
            }
            frames_read += 1;
        }
        let Some(mut seed_frame) = seed_frame else {
            return Err(Error::StreamEndedBeforeSeed { frames_read });
        };

        let (width, height) = (seed_frame.width(), seed_frame.height());
        if !seed.fits_within(width, height) {
            if self.config.validate_seed {
                return Err(Error::SeedOutOfBounds {
                    seed,
                    width,
                    height,
                });
            }
            log::warn!(
                "seed {:?} does not fit the {}x{} seed frame, passing it to the trackers as is",
                seed.to_tlwh(),
                width,
                height
            );
        }

        log::info!(
            "seed frame {} ({}x{}), seed {:?}",
            frames_read,
            width,
            height,
            seed.to_tlwh()
        );

        let lanes = self
            .trackers
            .into_iter()
            .map(|pending| {
                TrackerLane::initialize(
                    pending.name,
                    pending.color,
                    pending.tracker,
                    &seed_frame,
                    seed,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        seed_frame.draw_rect(&seed, self.config.seed_color, self.config.seed_thickness);
        self.sink.show(&seed_frame)?;
        self.sink.hold(self.config.seed_hold)?;

        Ok(TrackerComparison::new(
            self.source,
            self.sink,
            lanes,
            self.config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::FrameList;
    use crate::tracker::Frame;

    struct Fixed;

    impl VisualTracker for Fixed {
        fn init(&mut self, _frame: &Frame, _seed: Rect) -> Result<()> {
            Ok(())
        }

        fn update(&mut self, _frame: &Frame) -> Result<Option<Rect>> {
            Ok(None)
        }
    }

    fn frames(n: usize) -> FrameList {
        FrameList::new((0..n).map(|_| Frame::new(32, 32)))
    }

    #[test]
    fn test_build_requires_seed_and_trackers() {
        let err = ComparisonBuilder::new(frames(3))
            .tracker("KCF", Color::GREEN, Box::new(Fixed))
            .build()
            .err();
        assert!(matches!(err, Some(Error::MissingSeed)));

        let err = ComparisonBuilder::new(frames(3))
            .seed(Rect::new(1.0, 1.0, 4.0, 4.0))
            .build()
            .err();
        assert!(matches!(err, Some(Error::NoTrackers)));
    }

    #[test]
    fn test_build_skips_frames() {
        let mut source = frames(6);
        let comparison = ComparisonBuilder::new(&mut source)
            .seed(Rect::new(1.0, 1.0, 4.0, 4.0))
            .tracker("KCF", Color::GREEN, Box::new(Fixed))
            .config(ComparisonConfig {
                skip_frames: 4,
                ..Default::default()
            })
            .build()
            .unwrap();
        drop(comparison);

        // four skipped plus the seed frame
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn test_build_stream_too_short() {
        let err = ComparisonBuilder::new(frames(2))
            .seed(Rect::new(1.0, 1.0, 4.0, 4.0))
            .tracker("KCF", Color::GREEN, Box::new(Fixed))
            .config(ComparisonConfig {
                skip_frames: 4,
                ..Default::default()
            })
            .build()
            .err();
        assert!(matches!(
            err,
            Some(Error::StreamEndedBeforeSeed { frames_read: 2 })
        ));
    }

    #[test]
    fn test_seed_validation_is_opt_in() {
        let outside = Rect::new(30.0, 30.0, 10.0, 10.0);

        let lenient = ComparisonBuilder::new(frames(2))
            .seed(outside)
            .tracker("KCF", Color::GREEN, Box::new(Fixed))
            .build();
        assert!(lenient.is_ok());

        let strict = ComparisonBuilder::new(frames(2))
            .seed(outside)
            .tracker("KCF", Color::GREEN, Box::new(Fixed))
            .config(ComparisonConfig {
                validate_seed: true,
                ..Default::default()
            })
            .build()
            .err();
        assert!(matches!(strict, Some(Error::SeedOutOfBounds { .. })));
    }
}
