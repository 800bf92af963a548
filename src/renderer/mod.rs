//! wgpu rendering module
//!
//! Flat-colored triangles only: the scene is tessellated on the CPU each
//! frame and drawn with a passthrough shader.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, game_to_ndc};
pub use vertex::Vertex;
