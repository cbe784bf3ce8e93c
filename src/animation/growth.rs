// src/animation/growth.rs
//
// Two-phase size effect: stretch out from zero to a scaled peak
// (ease-out), then shrink back down to the base size (ease-in).
// The phase is an explicit state so the hand-off can never leave both
// halves running, or neither, mid-sequence.

use nannou::prelude::*;

use super::easing::EasingType;
use super::tween::Tween;

#[derive(Debug, Clone)]
pub enum Growth {
    Idle,
    Stretching { stretch: Tween, shrink: Tween },
    Shrinking { shrink: Tween },
}

// Weight the stretch phase's share of the total time by its relative
// scale factor, so larger stretches get more of the outward motion.
pub fn split_durations(max_scale: f32, duration: f32) -> (f32, f32) {
    let stretch = max_scale / (2.0 * max_scale - 1.0) * duration;
    (stretch, duration - stretch)
}

impl Growth {
    pub fn start(base_size: Vec2, max_scale: f32, duration: f32, now_ms: f64) -> Self {
        // scales below 1 would invert the stretch into a shrink-first
        let max_scale = max_scale.max(1.0);
        let (stretch_duration, shrink_duration) = split_durations(max_scale, duration);
        let peak = base_size * max_scale;

        let stretch = Tween::new(
            Vec2::ZERO,
            peak,
            stretch_duration,
            EasingType::EaseOut,
            now_ms,
        );
        // built up front, but its clock is re-stamped at the hand-off
        let shrink = Tween::new(peak, base_size, shrink_duration, EasingType::EaseIn, now_ms);

        Growth::Stretching { stretch, shrink }
    }

    // Advance one frame. Returns the current size while a phase is
    // active, None once idle.
    pub fn update(&mut self, now_ms: f64) -> Option<Vec2> {
        match self {
            Growth::Idle => None,
            Growth::Stretching { stretch, shrink } => {
                let size = stretch.sample(now_ms);
                if stretch.is_finished(now_ms) {
                    let mut shrink = shrink.clone();
                    shrink.restart(now_ms);
                    *self = Growth::Shrinking { shrink };
                }
                Some(size)
            }
            Growth::Shrinking { shrink } => {
                let size = shrink.sample(now_ms);
                if shrink.is_finished(now_ms) {
                    *self = Growth::Idle;
                }
                Some(size)
            }
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Growth::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_split() {
        let (stretch, shrink) = split_durations(1.5, 1.0);
        assert!((stretch - 0.75).abs() < 1e-6);
        assert!((shrink - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_duration_split_at_unit_scale() {
        // the whole duration goes to the stretch phase
        let (stretch, shrink) = split_durations(1.0, 2.0);
        assert!((stretch - 2.0).abs() < 1e-6);
        assert!(shrink.abs() < 1e-6);
    }

    #[test]
    fn test_stretch_starts_from_zero_size() {
        let mut growth = Growth::start(vec2(100.0, 100.0), 1.5, 1.0, 0.0);
        let size = growth.update(0.0).unwrap();
        assert_eq!(size, vec2(0.0, 0.0));
        assert!(matches!(growth, Growth::Stretching { .. }));
    }

    #[test]
    fn test_hand_off_after_stretch_duration() {
        let mut growth = Growth::start(vec2(100.0, 100.0), 1.5, 1.0, 0.0);
        growth.update(100.0);
        assert!(matches!(growth, Growth::Stretching { .. }));

        // stretch phase takes 750ms of the 1s total
        let size = growth.update(760.0).unwrap();
        assert_eq!(size, vec2(150.0, 150.0));
        assert!(matches!(growth, Growth::Shrinking { .. }));
    }

    #[test]
    fn test_shrink_clock_restamped_at_hand_off() {
        let mut growth = Growth::start(vec2(100.0, 100.0), 1.5, 1.0, 0.0);
        growth.update(760.0);

        // halfway through the 250ms shrink, measured from the hand-off:
        // ease-in covers a quarter of the distance back to base
        let size = growth.update(760.0 + 125.0).unwrap();
        assert!((size.x - 137.5).abs() < 1e-3);
        assert!((size.y - 137.5).abs() < 1e-3);
    }

    #[test]
    fn test_terminal_frame_lands_on_base_size() {
        let mut growth = Growth::start(vec2(100.0, 100.0), 1.5, 1.0, 0.0);
        growth.update(760.0);

        let size = growth.update(760.0 + 260.0).unwrap();
        assert_eq!(size, vec2(100.0, 100.0));
        assert!(!growth.is_active());
        assert_eq!(growth.update(2000.0), None);
    }

    #[test]
    fn test_scale_below_one_is_clamped() {
        let mut growth = Growth::start(vec2(100.0, 100.0), 0.5, 1.0, 0.0);

        // no stretch beyond the base size ever happens
        match &growth {
            Growth::Stretching { stretch, .. } => {
                assert_eq!(stretch.destination(), vec2(100.0, 100.0));
                assert!((stretch.duration() - 1.0).abs() < 1e-6);
            }
            _ => panic!("Expected Stretching"),
        }

        let size = growth.update(1100.0).unwrap();
        assert_eq!(size, vec2(100.0, 100.0));
    }

    #[test]
    fn test_zero_duration_collapses_in_two_frames() {
        let mut growth = Growth::start(vec2(80.0, 60.0), 2.0, 0.0, 500.0);
        assert_eq!(growth.update(500.0), Some(vec2(160.0, 120.0)));
        assert_eq!(growth.update(500.0), Some(vec2(80.0, 60.0)));
        assert!(!growth.is_active());
    }
}
