//! Ball simulation module
//!
//! All physics lives here. This module must stay free of windowing and
//! rendering dependencies:
//! - Input arrives as a `HeldKeys` snapshot
//! - Time arrives as a `Duration` or an `Instant`
//! - Nothing in here can fail

pub mod input;
pub mod state;
pub mod tick;

pub use input::{HeldKeys, Key};
pub use state::{Ball, FrameClock};
pub use tick::{acceleration_for, advance, step};
