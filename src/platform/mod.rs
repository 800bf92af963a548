//! Platform layer
//!
//! Everything that touches the OS window:
//! - Keyboard events to per-frame key snapshots
//! - Frame timing statistics
//! - The winit event loop that schedules frames

pub mod app;
pub mod frame_stats;
pub mod keyboard;

pub use app::{App, run};
pub use frame_stats::FrameStats;
pub use keyboard::{InputSampler, map_key};
