//! Plain frame copying, without tracking: dumping a video to numbered
//! images and playing an image folder back.

use std::time::Duration;

use crate::error::Result;

use super::{FrameSink, FrameSource};

/// File name for the `index`-th captured frame: `frame_000.jpg`, `frame_001.jpg`, ...
pub fn frame_file_name(index: usize) -> String {
    format!("frame_{index:03}.jpg")
}

/// Copy frames from `source` to `sink` until the source is exhausted or
/// `limit` frames have been copied, holding each for `hold`.
///
/// Returns the number of frames copied.
pub fn relay<S, K>(mut source: S, mut sink: K, hold: Duration, limit: Option<usize>) -> Result<usize>
where
    S: FrameSource,
    K: FrameSink,
{
    let mut copied = 0;
    while limit.is_none_or(|limit| copied < limit) {
        let Some(frame) = source.next_frame()? else {
            log::info!("EOF reached after {} frames", copied);
            break;
        };
        sink.show(&frame)?;
        sink.hold(hold)?;
        copied += 1;
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::SyntheticSource;
    use crate::tracker::{Frame, Rect};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Frame>,
        held: Duration,
    }

    impl FrameSink for Recorder {
        fn show(&mut self, frame: &Frame) -> Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }

        fn hold(&mut self, duration: Duration) -> Result<()> {
            self.held += duration;
            Ok(())
        }
    }

    fn clip(len: usize) -> SyntheticSource {
        SyntheticSource::new(16, 16, Rect::new(2.0, 2.0, 4.0, 4.0), len).with_velocity(1.0, 0.0)
    }

    #[test]
    fn test_frame_file_name() {
        assert_eq!(frame_file_name(0), "frame_000.jpg");
        assert_eq!(frame_file_name(42), "frame_042.jpg");
        assert_eq!(frame_file_name(1234), "frame_1234.jpg");
    }

    #[test]
    fn test_relay_copies_everything() {
        let mut recorder = Recorder::default();
        let copied = relay(clip(5), &mut recorder, Duration::from_millis(100), None).unwrap();

        assert_eq!(copied, 5);
        assert_eq!(recorder.frames.len(), 5);
        assert_eq!(recorder.frames[3], clip(5).render(3));
        assert_eq!(recorder.held, Duration::from_millis(500));
    }

    #[test]
    fn test_relay_respects_limit() {
        let mut recorder = Recorder::default();
        let copied = relay(clip(5), &mut recorder, Duration::ZERO, Some(2)).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(recorder.frames.len(), 2);
    }
}
