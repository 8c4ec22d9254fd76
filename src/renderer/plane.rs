//! Shared subdivided plane mesh.
//!
//! All cards draw the same vertex/index buffer; subdivision gives the card
//! shader enough vertices to bend the plane onto the helix radius smoothly.

use bytemuck::{Pod, Zeroable};

/// Vertex format for card geometry: position, normal, UV.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    /// Object-space position (plane lies in the XY plane, facing +Z).
    pub position: [f32; 3],
    /// Surface normal (constant +Z before shader deformation).
    pub normal: [f32; 3],
    /// Texture coordinate, (0, 0) at the top-left corner.
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x2,
    ];

    /// Vertex buffer layout matching the card shader's inputs.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// CPU-side subdivided plane, ready for buffer upload.
pub struct PlaneMesh {
    /// Grid vertices, row-major from the top-left corner.
    pub vertices: Vec<Vertex>,
    /// Triangle list indices.
    pub indices: Vec<u32>,
}

impl PlaneMesh {
    /// Build a `width` x `height` plane centered at the origin with
    /// `segments` subdivisions along each axis.
    #[must_use]
    pub fn new(width: f32, height: f32, segments: u32) -> Self {
        let segments = segments.max(1);
        let cols = segments + 1;

        let mut vertices =
            Vec::with_capacity((cols * cols) as usize);
        for row in 0..cols {
            let v = row as f32 / segments as f32;
            let y = height / 2.0 - v * height;
            for col in 0..cols {
                let u = col as f32 / segments as f32;
                let x = -width / 2.0 + u * width;
                vertices.push(Vertex {
                    position: [x, y, 0.0],
                    normal: [0.0, 0.0, 1.0],
                    uv: [u, v],
                });
            }
        }

        let mut indices =
            Vec::with_capacity((segments * segments * 6) as usize);
        for row in 0..segments {
            for col in 0..segments {
                let top_left = row * cols + col;
                let top_right = top_left + 1;
                let bottom_left = top_left + cols;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self { vertices, indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_and_index_counts() {
        let mesh = PlaneMesh::new(1.3, 1.0, 30);
        assert_eq!(mesh.vertices.len(), 31 * 31);
        assert_eq!(mesh.indices.len(), 30 * 30 * 6);
    }

    #[test]
    fn indices_stay_in_bounds() {
        let mesh = PlaneMesh::new(1.3, 1.0, 30);
        let count = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn corners_and_uvs() {
        let mesh = PlaneMesh::new(2.0, 1.0, 4);
        let first = &mesh.vertices[0];
        assert_eq!(first.position, [-1.0, 0.5, 0.0]);
        assert_eq!(first.uv, [0.0, 0.0]);

        let last = mesh.vertices.last().unwrap();
        assert_eq!(last.position, [1.0, -0.5, 0.0]);
        assert_eq!(last.uv, [1.0, 1.0]);
    }

    #[test]
    fn degenerate_segment_count_is_clamped() {
        let mesh = PlaneMesh::new(1.0, 1.0, 0);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
    }
}
