//! Canonical `wgpu::VertexBufferLayout` for [`PlanetVertex`] buffers.
//!
//! | Location | Offset | Format    | Field    |
//! |----------|--------|-----------|----------|
//! | 0        | 0      | Float32x3 | position |
//! | 1        | 12     | Float32x3 | normal   |

use std::mem;

use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::mesh_data::PlanetVertex;

/// Vertex attributes for the planet mesh format.
pub const PLANET_VERTEX_ATTRIBUTES: [VertexAttribute; 2] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
];

/// The vertex buffer layout matching [`PlanetVertex`].
pub const PLANET_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<PlanetVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &PLANET_VERTEX_ATTRIBUTES,
};

/// Return the planet vertex buffer layout as an owned value.
pub fn planet_vertex_buffer_layout() -> VertexBufferLayout<'static> {
    PLANET_VERTEX_LAYOUT
}

const _: () = assert!(
    mem::size_of::<PlanetVertex>() == 24,
    "PlanetVertex size changed, update PLANET_VERTEX_LAYOUT"
);
const _: () = assert!(PLANET_VERTEX_ATTRIBUTES[1].offset == mem::offset_of!(PlanetVertex, normal) as u64);
