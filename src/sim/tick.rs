//! Per-frame physics update

use std::time::{Duration, Instant};

use glam::DVec2;

use super::input::{HeldKeys, Key};
use super::state::{Ball, FrameClock};
use crate::consts::*;

/// Acceleration requested by the held keys for a single frame.
///
/// Direction keys are applied in `Key::DIRECTIONS` order and each one
/// overwrites its axis, so with opposing keys held the later one wins.
/// An axis with no held key gets exactly zero.
pub fn acceleration_for(keys: &HeldKeys) -> DVec2 {
    let mut magnitude = BALL_ACCELERATION;
    if keys.contains(Key::Boost) {
        magnitude *= BALL_SPEED_UP_MULTIPLIER;
    }

    let mut accel = DVec2::ZERO;
    for key in Key::DIRECTIONS {
        if !keys.contains(key) {
            continue;
        }
        match key {
            Key::Down => accel.y = magnitude,
            Key::Up => accel.y = -magnitude,
            Key::Right => accel.x = magnitude,
            Key::Left => accel.x = -magnitude,
            Key::Boost => {}
        }
    }
    accel
}

/// Advance the ball by one frame.
///
/// Velocity changes by a fixed amount per frame regardless of `elapsed`;
/// only the position step is scaled by the frame duration. Frame rate
/// therefore affects top speed, which is how the game is meant to feel.
pub fn advance(ball: &mut Ball, keys: &HeldKeys, elapsed: Duration) {
    let dt = elapsed.as_nanos() as f64;

    ball.accel = acceleration_for(keys);

    ball.vel += ball.accel;
    ball.vel *= BALL_RESISTANCE;

    ball.pos += ball.vel * dt;

    let (lo, hi) = (ball.min_pos(), ball.max_pos());
    reflect_axis(&mut ball.pos.x, &mut ball.vel.x, lo.x, hi.x);
    reflect_axis(&mut ball.pos.y, &mut ball.vel.y, lo.y, hi.y);
}

/// Measure the time since the previous frame and advance the ball by it.
///
/// Returns the elapsed time that was used.
pub fn step(ball: &mut Ball, clock: &mut FrameClock, keys: &HeldKeys, now: Instant) -> Duration {
    let elapsed = clock.tick(now);
    advance(ball, keys, elapsed);
    elapsed
}

/// Clamp onto the wall that was touched or crossed and bounce
fn reflect_axis(pos: &mut f64, vel: &mut f64, lo: f64, hi: f64) {
    if *pos <= lo {
        *pos = lo;
        *vel = -*vel;
    } else if *pos >= hi {
        *pos = hi;
        *vel = -*vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_no_keys_no_acceleration() {
        assert_eq!(acceleration_for(&HeldKeys::empty()), DVec2::ZERO);
        // Boost alone has no direction to scale
        assert_eq!(acceleration_for(&HeldKeys::from([Key::Boost])), DVec2::ZERO);
    }

    #[test]
    fn test_single_directions() {
        let a = BALL_ACCELERATION;
        assert_eq!(acceleration_for(&HeldKeys::from([Key::Down])), DVec2::new(0.0, a));
        assert_eq!(acceleration_for(&HeldKeys::from([Key::Up])), DVec2::new(0.0, -a));
        assert_eq!(acceleration_for(&HeldKeys::from([Key::Right])), DVec2::new(a, 0.0));
        assert_eq!(acceleration_for(&HeldKeys::from([Key::Left])), DVec2::new(-a, 0.0));
    }

    #[test]
    fn test_diagonal() {
        let keys = HeldKeys::from([Key::Up, Key::Left]);
        assert_eq!(
            acceleration_for(&keys),
            DVec2::new(-BALL_ACCELERATION, -BALL_ACCELERATION)
        );
    }

    #[test]
    fn test_boost_applies_once() {
        let boosted = BALL_ACCELERATION * BALL_SPEED_UP_MULTIPLIER;
        let keys = HeldKeys::from([Key::Boost, Key::Down, Key::Right]);
        assert_eq!(acceleration_for(&keys), DVec2::new(boosted, boosted));
    }

    #[test]
    fn test_opposing_keys_last_wins() {
        let horizontal = acceleration_for(&HeldKeys::from([Key::Left, Key::Right]));
        assert_eq!(horizontal.x, BALL_ACCELERATION);
        assert_eq!(horizontal.y, 0.0);

        let vertical = acceleration_for(&HeldKeys::from([Key::Down, Key::Up]));
        assert_eq!(vertical.y, -BALL_ACCELERATION);
        assert_eq!(vertical.x, 0.0);
    }

    #[test]
    fn test_boost_down_from_rest() {
        let mut ball = Ball::new();
        advance(&mut ball, &HeldKeys::from([Key::Boost, Key::Down]), FRAME);

        let dt = FRAME.as_nanos() as f64;
        let am = BALL_ACCELERATION * BALL_SPEED_UP_MULTIPLIER;
        assert_eq!(ball.accel.y, am);
        assert!(approx_eq(ball.vel.y, am * BALL_RESISTANCE));
        assert!(approx_eq(ball.pos.y, 150.0 + am * BALL_RESISTANCE * dt));
        assert_eq!(ball.pos.x, 150.0);
        assert_eq!(ball.vel.x, 0.0);
    }

    #[test]
    fn test_acceleration_not_carried_over() {
        let mut ball = Ball::new();
        advance(&mut ball, &HeldKeys::from([Key::Right]), FRAME);
        assert_eq!(ball.accel.x, BALL_ACCELERATION);

        advance(&mut ball, &HeldKeys::empty(), FRAME);
        assert_eq!(ball.accel, DVec2::ZERO);
    }

    #[test]
    fn test_velocity_ignores_frame_duration() {
        let keys = HeldKeys::from([Key::Right]);
        let mut short = Ball::new();
        let mut long = Ball::new();
        advance(&mut short, &keys, Duration::from_millis(1));
        advance(&mut long, &keys, Duration::from_millis(30));

        assert_eq!(short.vel, long.vel);
        assert!(long.pos.x > short.pos.x);
    }

    #[test]
    fn test_zero_input_decays() {
        let mut ball = Ball::new();
        ball.vel = DVec2::new(3e-7, -2e-7);

        for _ in 0..200 {
            let before = ball.vel.length();
            advance(&mut ball, &HeldKeys::empty(), FRAME);
            let after = ball.vel.length();
            assert!(after < before);
            assert!(approx_eq(after, before * BALL_RESISTANCE));
            assert!(ball.in_bounds());
        }
    }

    #[test]
    fn test_zero_elapsed_keeps_position() {
        let mut ball = Ball::new();
        ball.vel = DVec2::new(1e-7, 1e-7);
        advance(&mut ball, &HeldKeys::from([Key::Up]), Duration::ZERO);
        assert_eq!(ball.pos, DVec2::new(150.0, 150.0));
    }

    #[test]
    fn test_reflect_right_wall() {
        let mut ball = Ball::new();
        let hi = ball.max_pos().x;
        ball.pos.x = hi;
        ball.vel.x = 2e-7;

        advance(&mut ball, &HeldKeys::empty(), FRAME);

        assert!(ball.vel.x < 0.0);
        assert_eq!(ball.pos.x, hi);
    }

    #[test]
    fn test_reflect_left_wall_overshoot() {
        let mut ball = Ball::new();
        ball.pos.x = 16.0;
        ball.vel.x = -1e-6;

        advance(&mut ball, &HeldKeys::empty(), FRAME);

        assert_eq!(ball.pos.x, 15.0);
        assert!(approx_eq(ball.vel.x, 1e-6 * BALL_RESISTANCE));
    }

    #[test]
    fn test_corner_reflection() {
        let mut ball = Ball::new();
        let hi = ball.max_pos();
        ball.pos = hi;
        ball.vel = DVec2::new(1e-7, 2e-7);

        advance(&mut ball, &HeldKeys::empty(), FRAME);

        assert!(ball.vel.x < 0.0);
        assert!(ball.vel.y < 0.0);
        assert_eq!(ball.pos, hi);
    }

    #[test]
    fn test_step_uses_clock() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        let mut ball = Ball::new();

        let now = start + FRAME;
        let elapsed = step(&mut ball, &mut clock, &HeldKeys::from([Key::Down]), now);

        assert_eq!(elapsed, FRAME);
        assert_eq!(clock.previous(), now);

        let mut expected = Ball::new();
        advance(&mut expected, &HeldKeys::from([Key::Down]), FRAME);
        assert_eq!(ball, expected);
    }
}
