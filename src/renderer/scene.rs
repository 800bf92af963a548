//! Builds the vertex list for one frame
//!
//! The renderer only reads the ball's position and radius. Everything else
//! drawn here is fixed decoration.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::Ball;

/// Decorative square, top-left corner (logical pixels)
pub const SQUARE_MIN: Vec2 = Vec2::new(100.0, 100.0);
/// Decorative square, bottom-right corner (logical pixels)
pub const SQUARE_MAX: Vec2 = Vec2::new(200.0, 200.0);

/// Vertices in logical screen coordinates, back to front
pub fn frame_vertices(ball: &Ball, circle_segments: u32) -> Vec<Vertex> {
    let mut vertices = shapes::rect(SQUARE_MIN, SQUARE_MAX, colors::SQUARE);
    vertices.extend(shapes::circle(
        ball.pos.as_vec2(),
        ball.radius as f32,
        colors::BALL,
        circle_segments,
    ));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_square_drawn_before_ball() {
        let ball = Ball::new();
        let verts = frame_vertices(&ball, 32);
        assert_eq!(verts.len(), 6 + 32 * 3);
        assert!(verts[..6].iter().all(|v| v.color == colors::SQUARE));
        assert!(verts[6..].iter().all(|v| v.color == colors::BALL));
    }

    #[test]
    fn test_ball_follows_position() {
        let mut ball = Ball::new();
        ball.pos = DVec2::new(40.0, 250.0);
        let verts = frame_vertices(&ball, 8);
        assert_eq!(verts[6].position, [40.0, 250.0]);
    }

    #[test]
    fn test_square_ignores_ball() {
        let mut ball = Ball::new();
        let before = frame_vertices(&ball, 8);
        ball.pos = DVec2::new(15.0, 15.0);
        let after = frame_vertices(&ball, 8);
        assert_eq!(before[..6], after[..6]);
    }
}
