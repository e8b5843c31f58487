//! Trait for frame consumers: display windows, frame dumps.

use std::time::Duration;

use crate::error::Result;
use crate::tracker::Frame;

/// Receives rendered frames.
pub trait FrameSink {
    /// Present or store one frame.
    fn show(&mut self, frame: &Frame) -> Result<()>;

    /// Keep the last frame on screen for `duration`.
    ///
    /// Sinks without a screen ignore this.
    fn hold(&mut self, _duration: Duration) -> Result<()> {
        Ok(())
    }
}

impl<K: FrameSink + ?Sized> FrameSink for &mut K {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        (**self).show(frame)
    }

    fn hold(&mut self, duration: Duration) -> Result<()> {
        (**self).hold(duration)
    }
}

impl<K: FrameSink + ?Sized> FrameSink for Box<K> {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        (**self).show(frame)
    }

    fn hold(&mut self, duration: Duration) -> Result<()> {
        (**self).hold(duration)
    }
}

/// Discards every frame. Used for headless timing runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn show(&mut self, _frame: &Frame) -> Result<()> {
        Ok(())
    }
}
