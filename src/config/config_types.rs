// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub background_color: [f32; 3],
    pub shape_color: [f32; 4],
    pub default_stroke_weight: f32,
}

#[derive(Debug, Deserialize)]
pub struct ShapeConfig {
    pub kind: String, // "ellipse" or "rect"
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Deserialize)]
pub struct OscConfig {
    pub rx_port: u16,
}

/************************* Animation Configs ********************/

#[derive(Debug, Deserialize)]
pub struct AnimationConfig {
    pub tween: TweenDefaults,
    pub growth: GrowthDefaults,
}

// Seed values for the tween scene's text fields and keyboard trigger
#[derive(Debug, Deserialize, Clone)]
pub struct TweenDefaults {
    pub target_x: f32,
    pub target_y: f32,
    pub duration: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GrowthDefaults {
    pub max_scale: f32,
    pub duration: f32,
}
