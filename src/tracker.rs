mod frame;
mod lane;
mod rect;
mod track_state;
mod visual;

pub use frame::{Color, Frame};
pub use lane::{LaneUpdate, TrackerLane};
pub use rect::Rect;
pub use track_state::ComparisonState;
pub use visual::{TrackerKind, VisualTracker};
