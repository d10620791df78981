//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
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

/// Colors for game elements
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub clear: [f32; 4],
    pub field: [f32; 4],
    pub border: [f32; 4],
    pub player: [f32; 4],
    pub player_grabbed: [f32; 4],
    pub apple: [f32; 4],
    pub apple_leaf: [f32; 4],
    pub game_over_veil: [f32; 4],
}

impl Palette {
    pub const NORMAL: Palette = Palette {
        clear: [0.02, 0.02, 0.05, 1.0],
        field: [0.55, 0.78, 0.95, 1.0],
        border: [0.3, 0.3, 0.4, 1.0],
        player: [0.2, 0.5, 0.9, 1.0],
        player_grabbed: [0.1, 0.35, 0.75, 1.0],
        apple: [0.85, 0.1, 0.1, 1.0],
        apple_leaf: [0.2, 0.6, 0.2, 1.0],
        game_over_veil: [0.0, 0.0, 0.0, 0.5],
    };

    pub const HIGH_CONTRAST: Palette = Palette {
        clear: [0.0, 0.0, 0.0, 1.0],
        field: [0.0, 0.0, 0.0, 1.0],
        border: [1.0, 1.0, 1.0, 1.0],
        player: [1.0, 1.0, 0.0, 1.0],
        player_grabbed: [0.0, 1.0, 1.0, 1.0],
        apple: [1.0, 0.0, 1.0, 1.0],
        apple_leaf: [1.0, 1.0, 1.0, 1.0],
        game_over_veil: [0.0, 0.0, 0.0, 0.7],
    };

    pub fn for_settings(settings: &crate::Settings) -> Self {
        if settings.high_contrast() {
            Self::HIGH_CONTRAST
        } else {
            Self::NORMAL
        }
    }
}
