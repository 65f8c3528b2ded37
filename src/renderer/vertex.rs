//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(pos: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: pos.to_array(),
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for site elements (linear RGB, matched to the CSS soil palette)
pub mod colors {
    /// Sunlit topsoil at the gradient center (#D2691E)
    pub const SOIL_LIGHT: [f32; 4] = [0.65, 0.14, 0.012, 1.0];
    /// Mid-depth soil (#A0522D)
    pub const SOIL_MID: [f32; 4] = [0.36, 0.082, 0.022, 1.0];
    /// Deep soil toward the surface edge (#8B4513)
    pub const SOIL_DARK: [f32; 4] = [0.26, 0.056, 0.004, 1.0];
    /// Excavated ground (#654321)
    pub const EXCAVATED: [f32; 4] = [0.13, 0.053, 0.012, 1.0];
    /// Discovery frame and sparkles (#FFD700)
    pub const GOLD: [f32; 4] = [1.0, 0.69, 0.0, 1.0];
}
