// src/controllers/input.rs
//
// Turns raw trigger parameters (text-field strings, OSC args) into
// sketch commands. Bad numbers are rejected here, before any tween is
// built, so they can never leak into the interpolation math.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Tween,
    Growth,
}

impl Scene {
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Scene::Tween),
            1 => Some(Scene::Growth),
            _ => None,
        }
    }

    pub fn index(&self) -> i32 {
        match self {
            Scene::Tween => 0,
            Scene::Growth => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SketchCommand {
    StartTween { x: f32, y: f32, duration: f32 },
    StartGrowth { max_scale: f32, duration: f32 },
    SelectScene { scene: Scene },
    ResetShape,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    InvalidNumber { field: &'static str, raw: String },
    NonFinite { field: &'static str },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidNumber { field, raw } => {
                write!(f, "{} is not a number: {:?}", field, raw)
            }
            InputError::NonFinite { field } => {
                write!(f, "{} must be a finite number", field)
            }
        }
    }
}

impl std::error::Error for InputError {}

pub fn parse_field(field: &'static str, raw: &str) -> Result<f32, InputError> {
    let value: f32 = raw.trim().parse().map_err(|_| InputError::InvalidNumber {
        field,
        raw: raw.to_string(),
    })?;

    // "nan" and "inf" parse successfully, catch them here
    if !value.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    Ok(value)
}

pub fn parse_tween_fields(x: &str, y: &str, duration: &str) -> Result<SketchCommand, InputError> {
    Ok(SketchCommand::StartTween {
        x: parse_field("target x", x)?,
        y: parse_field("target y", y)?,
        duration: parse_field("duration", duration)?,
    })
}

pub fn parse_growth_fields(max_scale: &str, duration: &str) -> Result<SketchCommand, InputError> {
    Ok(SketchCommand::StartGrowth {
        max_scale: parse_field("max scale", max_scale)?,
        duration: parse_field("duration", duration)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tween_fields() {
        let command = parse_tween_fields("200", "300.5", "1.0").unwrap();
        assert_eq!(
            command,
            SketchCommand::StartTween {
                x: 200.0,
                y: 300.5,
                duration: 1.0,
            }
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_field("x", " 42.5 ").unwrap(), 42.5);
    }

    #[test]
    fn test_unparseable_text_is_rejected() {
        match parse_field("target x", "12abc") {
            Err(InputError::InvalidNumber { field, raw }) => {
                assert_eq!(field, "target x");
                assert_eq!(raw, "12abc");
            }
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
        assert!(parse_field("target x", "").is_err());
    }

    #[test]
    fn test_nan_and_inf_are_rejected() {
        assert_eq!(
            parse_field("duration", "NaN"),
            Err(InputError::NonFinite { field: "duration" })
        );
        assert_eq!(
            parse_field("duration", "inf"),
            Err(InputError::NonFinite { field: "duration" })
        );
    }

    #[test]
    fn test_bad_field_aborts_whole_trigger() {
        assert!(parse_growth_fields("1.5", "x").is_err());
        assert!(parse_tween_fields("1", "oops", "2").is_err());
    }

    #[test]
    fn test_scene_index_round_trip() {
        assert_eq!(Scene::from_index(0), Some(Scene::Tween));
        assert_eq!(Scene::from_index(1), Some(Scene::Growth));
        assert_eq!(Scene::from_index(7), None);
        assert_eq!(Scene::Growth.index(), 1);
    }
}
