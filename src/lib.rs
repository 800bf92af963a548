//! Bouncy Ball - a single ball bouncing inside a fixed window
//!
//! Core modules:
//! - `sim`: Ball physics (input to acceleration, integration, wall reflection)
//! - `renderer`: wgpu rendering of the ball and the decorative square
//! - `platform`: winit window, keyboard sampling and the frame loop
//! - `settings`: Presentation settings loaded from JSON

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Logical screen dimensions (the ball's world)
    pub const SCREEN_WIDTH: f64 = 300.0;
    pub const SCREEN_HEIGHT: f64 = 300.0;

    /// Window is opened at this multiple of the logical screen size
    pub const WINDOW_SCALE: f64 = 2.0;

    /// Ball radius in logical pixels
    pub const BALL_RADIUS: f64 = 15.0;

    /// Per-frame velocity increment from a held direction key (pixels/ns)
    pub const BALL_ACCELERATION: f64 = 0.000000015;
    /// Applied once to the acceleration while the boost key is held
    pub const BALL_SPEED_UP_MULTIPLIER: f64 = 2.0;
    /// Velocity is multiplied by this every frame
    pub const BALL_RESISTANCE: f64 = 0.975;
}

/// Logical screen size as a vector
#[inline]
pub fn screen_extent() -> DVec2 {
    DVec2::new(consts::SCREEN_WIDTH, consts::SCREEN_HEIGHT)
}

/// Center of the logical screen, where the ball starts
#[inline]
pub fn screen_center() -> DVec2 {
    screen_extent() / 2.0
}
