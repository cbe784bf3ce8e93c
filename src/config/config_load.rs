// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;

use super::config_types::*;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub shape: ShapeConfig,
    pub animation: AnimationConfig,
    pub osc: OscConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [window]
        width = 900
        height = 600

        [style]
        background_color = [0.03, 0.03, 0.05]
        shape_color = [0.96, 0.55, 0.26, 1.0]
        default_stroke_weight = 2.0

        [shape]
        kind = "ellipse"
        x = 0.0
        y = 60.0
        width = 90.0
        height = 90.0

        [animation.tween]
        target_x = 250.0
        target_y = 150.0
        duration = 1.5

        [animation.growth]
        max_scale = 1.6
        duration = 2.0

        [osc]
        rx_port = 8010
    "#;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.window.width, 900);
        assert_eq!(config.shape.kind, "ellipse");
        assert_eq!(config.shape.width, 90.0);
        assert_eq!(config.animation.tween.target_x, 250.0);
        assert_eq!(config.animation.growth.max_scale, 1.6);
        assert_eq!(config.osc.rx_port, 8010);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let broken = "[window]\nwidth = 900\nheight = 600\n";
        assert!(toml::from_str::<Config>(broken).is_err());
    }
}
