// src/animation/tween.rs
//
// A single timed interpolation between two value pairs.
// The pair is agnostic about meaning: it is an (x, y) position for
// movement and a (width, height) size for the growth effect.

use nannou::prelude::*;

use super::easing::{progress, EasingType};

#[derive(Debug, Clone)]
pub struct Tween {
    duration: f32,   // seconds
    start_time: f64, // milliseconds, from the app clock
    start: Vec2,
    destination: Vec2,
    distance: Vec2, // destination - start, fixed at construction
    easing: EasingType,
}

impl Tween {
    pub fn new(
        start: Vec2,
        destination: Vec2,
        duration: f32,
        easing: EasingType,
        now_ms: f64,
    ) -> Self {
        Self {
            duration,
            start_time: now_ms,
            start,
            destination,
            distance: destination - start,
            easing,
        }
    }

    // Re-stamp the start time without touching the value pairs.
    // Used to defer the shrink phase until the stretch phase hands off.
    pub fn restart(&mut self, now_ms: f64) {
        self.start_time = now_ms;
    }

    pub fn sample(&self, now_ms: f64) -> Vec2 {
        let t = self.easing.apply(progress(self.elapsed(now_ms), self.duration));
        self.start + self.distance * t
    }

    // Completion accepts the exact boundary frame; combined with the
    // progress clamp the final sample lands exactly on the destination.
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.elapsed(now_ms) >= self.duration
    }

    fn elapsed(&self, now_ms: f64) -> f32 {
        ((now_ms - self.start_time) / 1000.0) as f32
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn destination(&self) -> Vec2 {
        self.destination
    }

    pub fn distance(&self) -> Vec2 {
        self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_precomputed() {
        let tween = Tween::new(
            vec2(100.0, 100.0),
            vec2(200.0, 300.0),
            1.0,
            EasingType::EaseOut,
            0.0,
        );
        assert_eq!(tween.distance(), vec2(100.0, 200.0));
    }

    #[test]
    fn test_sample_at_start() {
        let tween = Tween::new(
            vec2(100.0, 100.0),
            vec2(200.0, 300.0),
            1.0,
            EasingType::EaseOut,
            500.0,
        );
        assert_eq!(tween.sample(500.0), vec2(100.0, 100.0));
        assert!(!tween.is_finished(500.0));
    }

    #[test]
    fn test_sample_midway_stays_between_endpoints() {
        let tween = Tween::new(
            vec2(100.0, 100.0),
            vec2(200.0, 300.0),
            1.0,
            EasingType::EaseOut,
            0.0,
        );
        let value = tween.sample(500.0);
        assert!(value.x > 100.0 && value.x < 200.0);
        assert!(value.y > 100.0 && value.y < 300.0);
    }

    #[test]
    fn test_sample_past_duration_is_exact_destination() {
        let tween = Tween::new(
            vec2(100.0, 100.0),
            vec2(200.0, 300.0),
            1.0,
            EasingType::EaseOut,
            0.0,
        );
        assert_eq!(tween.sample(1100.0), vec2(200.0, 300.0));
        assert!(tween.is_finished(1100.0));
    }

    #[test]
    fn test_boundary_frame_is_finished() {
        let tween = Tween::new(
            vec2(0.0, 0.0),
            vec2(10.0, 10.0),
            1.0,
            EasingType::EaseOut,
            0.0,
        );
        assert!(tween.is_finished(1000.0));
        assert_eq!(tween.sample(1000.0), vec2(10.0, 10.0));
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let tween = Tween::new(
            vec2(0.0, 0.0),
            vec2(50.0, 50.0),
            0.0,
            EasingType::EaseOut,
            100.0,
        );
        assert!(tween.is_finished(100.0));
        assert_eq!(tween.sample(100.0), vec2(50.0, 50.0));
    }

    #[test]
    fn test_restart_restamps_clock() {
        let mut tween = Tween::new(
            vec2(0.0, 0.0),
            vec2(10.0, 0.0),
            1.0,
            EasingType::EaseIn,
            0.0,
        );
        assert!(tween.is_finished(2000.0));

        tween.restart(2000.0);
        assert!(!tween.is_finished(2000.0));
        assert_eq!(tween.sample(2000.0), vec2(0.0, 0.0));
        assert_eq!(tween.start(), vec2(0.0, 0.0));
        assert_eq!(tween.destination(), vec2(10.0, 0.0));
    }

    #[test]
    fn test_ease_in_midpoint_value() {
        // p = 0.5 under ease-in gives 0.25 of the distance
        let tween = Tween::new(
            vec2(150.0, 150.0),
            vec2(100.0, 100.0),
            1.0,
            EasingType::EaseIn,
            0.0,
        );
        let value = tween.sample(500.0);
        assert!((value.x - 137.5).abs() < 1e-4);
        assert!((value.y - 137.5).abs() < 1e-4);
    }
}
