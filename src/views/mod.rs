// src/views/mod.rs

pub mod shape;
pub mod ui;

pub use shape::{shape_from_config, AnimatedBody, DrawStyle, Drawable, EllipseShape, RectShape};
pub use ui::{Button, ButtonConfig, GrowthPanel, TextField, TextFieldConfig, TweenPanel};
