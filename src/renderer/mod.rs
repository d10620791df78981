//! WebGPU rendering module
//!
//! The simulation owns the data; this layer turns a `GameState` into
//! colored triangles each frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::{Palette, Vertex};
