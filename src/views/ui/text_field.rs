// src/views/ui/text_field.rs
//
// Numeric text field: click to focus, edit with digit/sign/decimal
// keys and backspace. Keeps only characters that could belong to a
// number; whether the result actually parses is the trigger parser's
// call, not the widget's.

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct TextFieldConfig {
    pub label: String,
    pub position: Point2, // center of the input box
    pub size: Vec2,
    pub text: String, // initial value
    pub fill: Rgba,
    pub text_color: Rgba,
    pub focus_color: Rgba,
    pub font_size: u32,
    pub max_chars: usize,
}

impl Default for TextFieldConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            position: pt2(0.0, 0.0),
            size: vec2(90.0, 26.0),
            text: String::new(),
            fill: rgba(0.1, 0.1, 0.13, 1.0),
            text_color: rgba(0.92, 0.92, 0.92, 1.0),
            focus_color: rgba(0.95, 0.65, 0.3, 1.0),
            font_size: 14,
            max_chars: 10,
        }
    }
}

pub struct TextField {
    pub config: TextFieldConfig,
    value: String,
    is_focused: bool,
}

impl TextField {
    pub fn new(config: TextFieldConfig) -> Self {
        let value = config.text.clone();
        Self {
            config,
            value,
            is_focused: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    pub fn contains(&self, point: Point2) -> bool {
        let half = self.config.size / 2.0;
        let delta = point - self.config.position;
        delta.x.abs() <= half.x && delta.y.abs() <= half.y
    }

    // Returns true when the keystroke was consumed. A focused field
    // swallows every key so app shortcuts stay quiet while typing.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.is_focused {
            return false;
        }

        match key {
            Key::Back => {
                self.value.pop();
            }
            Key::Return | Key::NumpadEnter => {
                self.is_focused = false;
            }
            other => {
                if let Some(c) = key_to_char(other) {
                    self.push_char(c);
                }
            }
        }
        true
    }

    fn push_char(&mut self, c: char) {
        if self.value.len() >= self.config.max_chars {
            return;
        }
        match c {
            '-' if !self.value.is_empty() => return,
            '.' if self.value.contains('.') => return,
            _ => self.value.push(c),
        }
    }

    pub fn draw(&self, draw: &Draw) {
        let rect = draw
            .rect()
            .xy(self.config.position)
            .wh(self.config.size)
            .color(self.config.fill);

        if self.is_focused {
            rect.stroke(self.config.focus_color).stroke_weight(2.0);
        }

        draw.text(&self.value)
            .xy(self.config.position)
            .color(self.config.text_color)
            .font_size(self.config.font_size);

        // label above the box
        let label_position = self.config.position + vec2(0.0, self.config.size.y / 2.0 + 12.0);
        draw.text(&self.config.label)
            .xy(label_position)
            .color(self.config.text_color)
            .font_size(self.config.font_size.saturating_sub(2));
    }
}

fn key_to_char(key: Key) -> Option<char> {
    match key {
        Key::Key0 | Key::Numpad0 => Some('0'),
        Key::Key1 | Key::Numpad1 => Some('1'),
        Key::Key2 | Key::Numpad2 => Some('2'),
        Key::Key3 | Key::Numpad3 => Some('3'),
        Key::Key4 | Key::Numpad4 => Some('4'),
        Key::Key5 | Key::Numpad5 => Some('5'),
        Key::Key6 | Key::Numpad6 => Some('6'),
        Key::Key7 | Key::Numpad7 => Some('7'),
        Key::Key8 | Key::Numpad8 => Some('8'),
        Key::Key9 | Key::Numpad9 => Some('9'),
        Key::Period | Key::NumpadDecimal => Some('.'),
        Key::Minus | Key::NumpadSubtract => Some('-'),
        _ => None,
    }
}
