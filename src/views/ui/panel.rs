// src/views/ui/panel.rs
//
// Per-scene control panels: a row of numeric fields plus a trigger
// button. The panels own focus handling; parsing and command dispatch
// stay in main.

use nannou::prelude::*;

use crate::config::{GrowthDefaults, TweenDefaults};

use super::button::{Button, ButtonConfig};
use super::text_field::{TextField, TextFieldConfig};

const FIELD_SPACING: f32 = 110.0;

fn field_at(label: &str, text: String, position: Point2) -> TextField {
    TextField::new(TextFieldConfig {
        label: label.to_string(),
        text,
        position,
        ..Default::default()
    })
}

fn go_button_at(position: Point2) -> Button {
    Button::new(ButtonConfig {
        label: "go".to_string(),
        position,
        size: vec2(70.0, 28.0),
        ..Default::default()
    })
}

pub struct TweenPanel {
    pub x_field: TextField,
    pub y_field: TextField,
    pub duration_field: TextField,
    pub go_button: Button,
}

impl TweenPanel {
    pub fn new(origin: Point2, defaults: &TweenDefaults) -> Self {
        Self {
            x_field: field_at("target x", defaults.target_x.to_string(), origin),
            y_field: field_at(
                "target y",
                defaults.target_y.to_string(),
                origin + vec2(FIELD_SPACING, 0.0),
            ),
            duration_field: field_at(
                "duration s",
                defaults.duration.to_string(),
                origin + vec2(2.0 * FIELD_SPACING, 0.0),
            ),
            go_button: go_button_at(origin + vec2(3.0 * FIELD_SPACING, 0.0)),
        }
    }

    // Routes a mouse press: focuses the hit field (and only it),
    // returns true when the go button was hit.
    pub fn handle_press(&mut self, position: Point2) -> bool {
        let on_x = self.x_field.contains(position);
        let on_y = self.y_field.contains(position);
        let on_duration = self.duration_field.contains(position);

        self.x_field.set_focus(on_x);
        self.y_field.set_focus(on_y);
        self.duration_field.set_focus(on_duration);

        self.go_button.contains(position)
    }

    pub fn handle_key(&mut self, key: Key) -> bool {
        self.x_field.handle_key(key)
            || self.y_field.handle_key(key)
            || self.duration_field.handle_key(key)
    }

    pub fn clear_focus(&mut self) {
        self.x_field.set_focus(false);
        self.y_field.set_focus(false);
        self.duration_field.set_focus(false);
    }

    pub fn draw(&self, draw: &Draw) {
        self.x_field.draw(draw);
        self.y_field.draw(draw);
        self.duration_field.draw(draw);
        self.go_button.draw(draw);
    }
}

pub struct GrowthPanel {
    pub scale_field: TextField,
    pub duration_field: TextField,
    pub go_button: Button,
}

impl GrowthPanel {
    pub fn new(origin: Point2, defaults: &GrowthDefaults) -> Self {
        Self {
            scale_field: field_at("max scale", defaults.max_scale.to_string(), origin),
            duration_field: field_at(
                "duration s",
                defaults.duration.to_string(),
                origin + vec2(FIELD_SPACING, 0.0),
            ),
            go_button: go_button_at(origin + vec2(2.0 * FIELD_SPACING, 0.0)),
        }
    }

    pub fn handle_press(&mut self, position: Point2) -> bool {
        let on_scale = self.scale_field.contains(position);
        let on_duration = self.duration_field.contains(position);

        self.scale_field.set_focus(on_scale);
        self.duration_field.set_focus(on_duration);

        self.go_button.contains(position)
    }

    pub fn handle_key(&mut self, key: Key) -> bool {
        self.scale_field.handle_key(key) || self.duration_field.handle_key(key)
    }

    pub fn clear_focus(&mut self) {
        self.scale_field.set_focus(false);
        self.duration_field.set_focus(false);
    }

    pub fn draw(&self, draw: &Draw) {
        self.scale_field.draw(draw);
        self.duration_field.draw(draw);
        self.go_button.draw(draw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tween_panel() -> TweenPanel {
        let defaults = TweenDefaults {
            target_x: 250.0,
            target_y: 150.0,
            duration: 1.5,
        };
        TweenPanel::new(pt2(0.0, 0.0), &defaults)
    }

    #[test]
    fn test_fields_seeded_from_defaults() {
        let panel = tween_panel();
        assert_eq!(panel.x_field.value(), "250");
        assert_eq!(panel.duration_field.value(), "1.5");
    }

    #[test]
    fn test_press_moves_focus_to_hit_field() {
        let mut panel = tween_panel();

        let go = panel.handle_press(panel.y_field.config.position);
        assert!(!go);
        assert!(panel.y_field.is_focused());
        assert!(!panel.x_field.is_focused());

        // clicking another field steals focus
        panel.handle_press(panel.x_field.config.position);
        assert!(panel.x_field.is_focused());
        assert!(!panel.y_field.is_focused());
    }

    #[test]
    fn test_press_outside_clears_focus() {
        let mut panel = tween_panel();
        panel.handle_press(panel.x_field.config.position);
        panel.handle_press(pt2(5000.0, 5000.0));
        assert!(!panel.x_field.is_focused());
    }

    #[test]
    fn test_go_button_press_reported() {
        let mut panel = tween_panel();
        assert!(panel.handle_press(panel.go_button.config.position));
    }

    #[test]
    fn test_keys_edit_only_the_focused_field() {
        let mut panel = tween_panel();
        panel.handle_press(panel.duration_field.config.position);

        assert!(panel.handle_key(Key::Key2));
        assert_eq!(panel.duration_field.value(), "1.52");
        assert_eq!(panel.x_field.value(), "250");

        panel.clear_focus();
        assert!(!panel.handle_key(Key::Key9));
    }
}
