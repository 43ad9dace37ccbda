//! Geometry for the demo
//!
//! A textured quad, thin paddle rectangles and a ball fan, all in NDC.

use glam::Vec2;
use wgpu::*;

/// Vertex of the textured quad
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl TexturedVertex {
    pub const ATTRIBUTES: [VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub fn layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<TexturedVertex>() as u64,
            step_mode: VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Position-only vertex for paddles and the ball
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const ATTRIBUTES: [VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: [x, y, 0.0],
        }
    }

    pub fn layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// The textured quad: a unit square with per-corner colours
pub fn create_quad() -> (Vec<TexturedVertex>, Vec<u16>) {
    #[rustfmt::skip]
    let vertices = vec![
        TexturedVertex { position: [ 0.5,  0.5, 0.0], color: [1.0, 0.0, 0.0], tex_coords: [1.0, 1.0] }, // top right
        TexturedVertex { position: [ 0.5, -0.5, 0.0], color: [0.0, 1.0, 0.0], tex_coords: [1.0, 0.0] }, // bottom right
        TexturedVertex { position: [-0.5, -0.5, 0.0], color: [0.0, 0.0, 1.0], tex_coords: [0.0, 0.0] }, // bottom left
        TexturedVertex { position: [-0.5,  0.5, 0.0], color: [1.0, 1.0, 0.0], tex_coords: [0.0, 1.0] }, // top left
    ];

    let indices = vec![
        0, 1, 3, // first triangle
        1, 2, 3, // second triangle
    ];

    (vertices, indices)
}

/// A paddle segment from (x, -half_length) to (x, half_length), widened to `thickness`
///
/// Lines wider than one pixel are not portable, so the segment becomes a rectangle.
pub fn create_paddle(x: f32, half_length: f32, thickness: f32) -> (Vec<Vertex>, Vec<u16>) {
    let half_width = thickness / 2.0;
    let vertices = vec![
        Vertex::new(x - half_width, -half_length),
        Vertex::new(x + half_width, -half_length),
        Vertex::new(x + half_width, half_length),
        Vertex::new(x - half_width, half_length),
    ];
    let indices = vec![0, 1, 2, 2, 3, 0];

    (vertices, indices)
}

/// Triangle fan around `center` through the `rim` points, as a triangle list
///
/// Rim points past what u16 indices can reach (after the centre) are dropped.
pub fn create_fan(center: Vec2, rim: &[Vec2]) -> (Vec<Vertex>, Vec<u16>) {
    let rim = &rim[..rim.len().min(u16::MAX as usize - 1)];
    let mut vertices = Vec::with_capacity(rim.len() + 1);
    vertices.push(Vertex::new(center.x, center.y));
    vertices.extend(rim.iter().map(|p| Vertex::new(p.x, p.y)));

    let count = u16::try_from(rim.len()).unwrap_or(u16::MAX - 1);
    let mut indices = Vec::with_capacity(rim.len() * 3);
    for i in 0..count {
        indices.push(0);
        indices.push(i + 1);
        indices.push((i + 1) % count + 1);
    }

    (vertices, indices)
}

/// Mesh data with GPU buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn new<V: bytemuck::Pod>(
        device: &Device,
        queue: &Queue,
        label: &str,
        vertices: &[V],
        indices: &[u16],
    ) -> Self {
        let vertex_buffer = device.create_buffer(&BufferDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            size: std::mem::size_of_val(vertices) as u64,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&vertex_buffer, 0, bytemuck::cast_slice(vertices));

        // Copies must be a multiple of 4 bytes
        let mut padded: Vec<u16> = indices.to_vec();
        if padded.len() % 2 == 1 {
            padded.push(0);
        }
        let index_buffer = device.create_buffer(&BufferDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            size: std::mem::size_of_val(padded.as_slice()) as u64,
            usage: BufferUsages::INDEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&index_buffer, 0, bytemuck::cast_slice(&padded));

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }

    /// Release the GPU memory now rather than when the handles drop.
    pub fn destroy(&self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
    }
}
