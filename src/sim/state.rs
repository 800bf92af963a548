//! Simulation state: the ball and the frame clock

use std::time::{Duration, Instant};

use glam::DVec2;

use crate::consts::BALL_RADIUS;
use crate::{screen_center, screen_extent};

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Center point in logical pixels
    pub pos: DVec2,
    /// Pixels per nanosecond
    pub vel: DVec2,
    /// Acceleration applied on the most recent update (never carried over)
    pub accel: DVec2,
    pub radius: f64,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    /// Ball at rest in the center of the screen
    pub fn new() -> Self {
        Self {
            pos: screen_center(),
            vel: DVec2::ZERO,
            accel: DVec2::ZERO,
            radius: BALL_RADIUS,
        }
    }

    /// Lowest allowed center coordinate on each axis
    pub fn min_pos(&self) -> DVec2 {
        DVec2::splat(self.radius)
    }

    /// Highest allowed center coordinate on each axis
    pub fn max_pos(&self) -> DVec2 {
        screen_extent() - DVec2::splat(self.radius)
    }

    /// Whether the center lies inside the wall bounds (inclusive).
    ///
    /// Holds after every `advance`; callers driving the simulation can use it
    /// to check that containment.
    pub fn in_bounds(&self) -> bool {
        let (lo, hi) = (self.min_pos(), self.max_pos());
        self.pos.cmpge(lo).all() && self.pos.cmple(hi).all()
    }
}

/// Remembers when the previous update ran
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    prev: Instant,
}

impl FrameClock {
    pub fn new(start: Instant) -> Self {
        Self { prev: start }
    }

    /// Time since the previous tick; `now` becomes the previous tick.
    ///
    /// Returns zero if `now` is earlier than the previous tick.
    pub fn tick(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.prev);
        self.prev = now;
        elapsed
    }

    pub fn previous(&self) -> Instant {
        self.prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_starts_centered_at_rest() {
        let ball = Ball::new();
        assert_eq!(ball.pos, DVec2::new(150.0, 150.0));
        assert_eq!(ball.vel, DVec2::ZERO);
        assert_eq!(ball.accel, DVec2::ZERO);
        assert_eq!(ball.radius, 15.0);
        assert!(ball.in_bounds());
    }

    #[test]
    fn test_ball_bounds() {
        let mut ball = Ball::new();
        assert_eq!(ball.min_pos(), DVec2::splat(15.0));
        assert_eq!(ball.max_pos(), DVec2::splat(285.0));

        ball.pos = DVec2::new(285.0, 15.0);
        assert!(ball.in_bounds());

        ball.pos.x = 285.5;
        assert!(!ball.in_bounds());
    }

    #[test]
    fn test_clock_tick() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);

        let later = start + Duration::from_millis(16);
        assert_eq!(clock.tick(later), Duration::from_millis(16));
        assert_eq!(clock.previous(), later);

        // Same instant again: nothing elapsed
        assert_eq!(clock.tick(later), Duration::ZERO);
    }

    #[test]
    fn test_clock_backwards_saturates() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::new(start);
        let earlier = start - Duration::from_millis(5);
        assert_eq!(clock.tick(earlier), Duration::ZERO);
        assert_eq!(clock.previous(), earlier);
    }
}
