// src/views/shape.rs
//
// The animated shape, the main updating entity of the sketch.
//
// AnimatedBody holds the current geometry plus the two animation slots
// and advances them once per frame from the polled clock. The drawable
// variants compose a body and only add their own geometry on top.

use nannou::prelude::*;

use crate::animation::{EasingType, Growth, Tween};
use crate::config::{ShapeConfig, StyleConfig};

#[derive(Debug, Clone)]
pub struct DrawStyle {
    pub color: Rgba,
    pub stroke_weight: f32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            color: rgba(1.0, 1.0, 1.0, 1.0),
            stroke_weight: 2.0,
        }
    }
}

impl DrawStyle {
    pub fn from_config(style: &StyleConfig) -> Self {
        let [r, g, b, a] = style.shape_color;
        Self {
            color: rgba(r, g, b, a),
            stroke_weight: style.default_stroke_weight,
        }
    }
}

pub struct AnimatedBody {
    // geometry at spawn, the anchor for growth and reset
    pub spawn_position: Point2,
    pub base_size: Vec2,

    // geometry this frame
    pub position: Point2,
    pub size: Vec2,

    pub style: DrawStyle,

    active_tween: Option<Tween>,
    growth: Growth,
}

impl AnimatedBody {
    pub fn new(position: Point2, size: Vec2, style: DrawStyle) -> Self {
        Self {
            spawn_position: position,
            base_size: size,
            position,
            size,
            style,
            active_tween: None,
            growth: Growth::Idle,
        }
    }

    /************************** Triggers **********************************/

    // Starts from the shape's current position, not its spawn position,
    // so re-triggering mid-flight continues without a jump.
    pub fn start_tween(&mut self, target: Point2, duration: f32, now_ms: f64) {
        self.active_tween = Some(Tween::new(
            self.position,
            target,
            duration,
            EasingType::EaseOut,
            now_ms,
        ));
    }

    // The growth effect always stretches relative to the spawn-time base
    // size; re-triggering mid-growth cannot compound the scale.
    pub fn start_growth(&mut self, max_scale: f32, duration: f32, now_ms: f64) {
        self.growth = Growth::start(self.base_size, max_scale, duration, now_ms);
    }

    pub fn reset(&mut self) {
        self.position = self.spawn_position;
        self.size = self.base_size;
        self.active_tween = None;
        self.growth = Growth::Idle;
    }

    /************************** Per-frame update **************************/

    // Slots advance in a fixed order: position first, then size.
    pub fn update(&mut self, now_ms: f64) {
        if let Some(tween) = &self.active_tween {
            self.position = tween.sample(now_ms);
            if tween.is_finished(now_ms) {
                self.active_tween = None;
            }
        }

        if let Some(size) = self.growth.update(now_ms) {
            self.size = size;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.active_tween.is_some() || self.growth.is_active()
    }

    pub fn active_tween(&self) -> Option<&Tween> {
        self.active_tween.as_ref()
    }
}

/************************** Drawable variants *****************************/

pub trait Drawable {
    fn body(&self) -> &AnimatedBody;
    fn body_mut(&mut self) -> &mut AnimatedBody;
    fn draw(&self, draw: &Draw);
}

pub struct EllipseShape {
    pub body: AnimatedBody,
}

impl Drawable for EllipseShape {
    fn body(&self) -> &AnimatedBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut AnimatedBody {
        &mut self.body
    }

    fn draw(&self, draw: &Draw) {
        draw.ellipse()
            .xy(self.body.position)
            .wh(self.body.size)
            .color(self.body.style.color)
            .stroke(rgba(1.0, 1.0, 1.0, 0.35))
            .stroke_weight(self.body.style.stroke_weight);
    }
}

pub struct RectShape {
    pub body: AnimatedBody,
}

impl Drawable for RectShape {
    fn body(&self) -> &AnimatedBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut AnimatedBody {
        &mut self.body
    }

    fn draw(&self, draw: &Draw) {
        draw.rect()
            .xy(self.body.position)
            .wh(self.body.size)
            .color(self.body.style.color)
            .stroke(rgba(1.0, 1.0, 1.0, 0.35))
            .stroke_weight(self.body.style.stroke_weight);
    }
}

pub fn shape_from_config(shape: &ShapeConfig, style: DrawStyle) -> Box<dyn Drawable> {
    let body = AnimatedBody::new(
        pt2(shape.x, shape.y),
        vec2(shape.width, shape.height),
        style,
    );

    match shape.kind.as_str() {
        "rect" => Box::new(RectShape { body }),
        "ellipse" => Box::new(EllipseShape { body }),
        other => {
            println!("Unknown shape kind {:?}, falling back to ellipse", other);
            Box::new(EllipseShape { body })
        }
    }
}
