pub mod input;
pub mod osc;

pub use input::{
    parse_field, parse_growth_fields, parse_tween_fields, InputError, Scene, SketchCommand,
};
pub use osc::{OscController, OscSender};
