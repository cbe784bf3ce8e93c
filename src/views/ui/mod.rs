// src/views/ui/mod.rs

pub mod button;
pub mod panel;
pub mod text_field;

pub use button::{Button, ButtonConfig};
pub use panel::{GrowthPanel, TweenPanel};
pub use text_field::{TextField, TextFieldConfig};
