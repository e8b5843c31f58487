/// Lifecycle of a tracker comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonState {
    /// Trackers initialized on the seed frame, no frame processed yet
    #[default]
    Initialized,
    /// At least one frame processed, stream still open
    Running,
    /// Stream exhausted or frame limit reached; terminal
    Exhausted,
}

impl ComparisonState {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, ComparisonState::Exhausted)
    }
}
