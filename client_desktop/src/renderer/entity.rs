//! Per-entity renderers
//!
//! Each renderer owns its vertex, index and uniform buffers. They are created
//! in `new` and released in `Drop`.

use game_core::{Ball, Side};
use wgpu::*;

use super::resources::PaddleUniforms;
use crate::mesh::{create_fan, create_paddle, Mesh};
use crate::shader::{ShaderProgram, UniformBuffer};

fn draw_mesh(pass: &mut RenderPass<'_>, mesh: &Mesh) {
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..mesh.index_count, 0, 0..1);
}

pub struct PlayerRenderer {
    side: Side,
    color: [f32; 4],
    mesh: Mesh,
    uniforms: UniformBuffer<PaddleUniforms>,
}

impl PlayerRenderer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        device: &Device,
        queue: &Queue,
        layout: &BindGroupLayout,
        side: Side,
        x: f32,
        half_length: f32,
        thickness: f32,
        color: [f32; 4],
    ) -> Self {
        let label = format!("{side:?} Paddle");
        let (vertices, indices) = create_paddle(x, half_length, thickness);
        let mesh = Mesh::new(device, queue, &label, &vertices, &indices);
        let uniforms = UniformBuffer::new(
            device,
            &format!("{label} Uniforms"),
            layout,
            &PaddleUniforms::new(color, 0.0),
        );

        Self {
            side,
            color,
            mesh,
            uniforms,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Upload the paddle's vertical position
    pub fn update(&self, queue: &Queue, position: f32) {
        self.uniforms
            .set(queue, &PaddleUniforms::new(self.color, position));
    }

    pub fn draw(&self, pass: &mut RenderPass<'_>, program: &ShaderProgram) {
        program.bind(pass, &[self.uniforms.bind_group()]);
        draw_mesh(pass, &self.mesh);
    }
}

impl Drop for PlayerRenderer {
    fn drop(&mut self) {
        self.mesh.destroy();
        self.uniforms.destroy();
        tracing::debug!(side = ?self.side, "released paddle buffers");
    }
}

pub struct BallRenderer {
    mesh: Mesh,
    uniforms: UniformBuffer<PaddleUniforms>,
}

impl BallRenderer {
    /// Vertices are placed at the ball's position, so the offset stays zero.
    pub fn new(
        device: &Device,
        queue: &Queue,
        layout: &BindGroupLayout,
        ball: &Ball,
        segments: u32,
        color: [f32; 4],
    ) -> Self {
        let rim = ball.outline(segments);
        let (vertices, indices) = create_fan(ball.pos, &rim);
        let mesh = Mesh::new(device, queue, "Ball", &vertices, &indices);
        let uniforms = UniformBuffer::new(
            device,
            "Ball Uniforms",
            layout,
            &PaddleUniforms::new(color, 0.0),
        );

        Self { mesh, uniforms }
    }

    pub fn draw(&self, pass: &mut RenderPass<'_>, program: &ShaderProgram) {
        program.bind(pass, &[self.uniforms.bind_group()]);
        draw_mesh(pass, &self.mesh);
    }
}

impl Drop for BallRenderer {
    fn drop(&mut self) {
        self.mesh.destroy();
        self.uniforms.destroy();
        tracing::debug!("released ball buffers");
    }
}
