//! WebGPU rendering module
//!
//! Triangle-list rendering: every frame rebuilds the scene vertex list from
//! site state and streams it through one colored-vertex pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::site_scene;
