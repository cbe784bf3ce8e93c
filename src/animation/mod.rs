pub mod easing;
pub mod growth;
pub mod tween;

pub use easing::{ease_in, ease_out, progress, EasingType};
pub use growth::{split_durations, Growth};
pub use tween::Tween;
