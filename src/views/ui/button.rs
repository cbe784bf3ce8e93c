// src/views/ui/button.rs
//
// Minimal rectangular push button: hit-test on mouse press, flat fill,
// centered label.

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct ButtonConfig {
    pub label: String,
    pub position: Point2, // center
    pub size: Vec2,
    pub fill: Rgba,
    pub selected_fill: Rgba,
    pub label_color: Rgba,
    pub font_size: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            position: pt2(0.0, 0.0),
            size: vec2(110.0, 30.0),
            fill: rgba(0.16, 0.17, 0.22, 1.0),
            selected_fill: rgba(0.27, 0.33, 0.5, 1.0),
            label_color: rgba(0.92, 0.92, 0.92, 1.0),
            font_size: 14,
        }
    }
}

pub struct Button {
    pub config: ButtonConfig,
    pub is_selected: bool,
}

impl Button {
    pub fn new(config: ButtonConfig) -> Self {
        Self {
            config,
            is_selected: false,
        }
    }

    pub fn contains(&self, point: Point2) -> bool {
        let half = self.config.size / 2.0;
        let delta = point - self.config.position;
        delta.x.abs() <= half.x && delta.y.abs() <= half.y
    }

    pub fn draw(&self, draw: &Draw) {
        let fill = if self.is_selected {
            self.config.selected_fill
        } else {
            self.config.fill
        };

        draw.rect()
            .xy(self.config.position)
            .wh(self.config.size)
            .color(fill);

        draw.text(&self.config.label)
            .xy(self.config.position)
            .color(self.config.label_color)
            .font_size(self.config.font_size);
    }
}
