pub mod draw;
pub mod entity;
pub mod init;
pub mod resources;

use std::sync::Arc;

use game_core::{Ball, Config, Side};
use wgpu::*;
use winit::window::Window;

use crate::config::ClientConfig;
use crate::error::SetupError;
use crate::mesh::{create_quad, Mesh, TexturedVertex, Vertex};
use crate::shader::{uniform_layout, ProgramDescriptor, ShaderProgram, UniformBuffer};
use crate::simulation::FrameSnapshot;
use crate::texture::Texture;
use entity::{BallRenderer, PlayerRenderer};
use resources::QuadUniforms;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub clear_color: Color,

    // Programs
    pub quad_program: ShaderProgram,
    pub paddle_program: ShaderProgram,

    // Quad
    pub quad_mesh: Mesh,
    pub quad_uniforms: UniformBuffer<QuadUniforms>,
    pub texture_bind_group: BindGroup,

    // Entities
    pub players: Vec<PlayerRenderer>,
    pub ball: Option<BallRenderer>,
}

impl Renderer {
    pub fn new(
        window: Arc<Window>,
        client: &ClientConfig,
        game: &Config,
        ball: Option<&Ball>,
    ) -> Result<Self, SetupError> {
        let ctx = init::init_wgpu(window)?;
        let device = ctx.device;
        let queue = ctx.queue;
        let format = ctx.config.format;

        // Layouts
        let quad_uniform_layout =
            uniform_layout(&device, "Quad Uniform Layout", ShaderStages::VERTEX_FRAGMENT);
        let paddle_uniform_layout =
            uniform_layout(&device, "Paddle Uniform Layout", ShaderStages::VERTEX_FRAGMENT);
        let texture_layout = resources::quad_texture_layout(&device);

        // Programs
        let quad_program = ShaderProgram::from_files(
            &device,
            &client.quad_shader.vertex,
            &client.quad_shader.fragment,
            &ProgramDescriptor {
                label: "Quad Program",
                vertex_layouts: &[TexturedVertex::layout()],
                bind_group_layouts: &[&quad_uniform_layout, &texture_layout],
                format,
                blend: BlendState::REPLACE,
            },
        )?;
        let paddle_program = ShaderProgram::from_files(
            &device,
            &client.paddle_shader.vertex,
            &client.paddle_shader.fragment,
            &ProgramDescriptor {
                label: "Paddle Program",
                vertex_layouts: &[Vertex::layout()],
                bind_group_layouts: &[&paddle_uniform_layout],
                format,
                blend: BlendState::ALPHA_BLENDING,
            },
        )?;
        tracing::info!(
            "linked {} and {}",
            quad_program.label(),
            paddle_program.label()
        );

        // Quad geometry and textures
        let (quad_vertices, quad_indices) = create_quad();
        let quad_mesh = Mesh::new(&device, &queue, "Quad", &quad_vertices, &quad_indices);
        let quad_uniforms = UniformBuffer::new(
            &device,
            "Quad Uniforms",
            &quad_uniform_layout,
            &QuadUniforms::new(game.oscillation_start, 0.0, game.mix_alpha),
        );
        let textures = [
            Texture::from_file(&device, &queue, &client.textures[0]),
            Texture::from_file(&device, &queue, &client.textures[1]),
        ];
        let texture_bind_group =
            resources::quad_texture_bind_group(&device, &texture_layout, &textures);

        // One renderer per paddle
        let players = [Side::Left, Side::Right]
            .into_iter()
            .map(|side| {
                PlayerRenderer::new(
                    &device,
                    &queue,
                    &paddle_uniform_layout,
                    side,
                    game.paddle_x(side),
                    game.paddle_margin,
                    client.paddle_thickness,
                    client.paddle_color,
                )
            })
            .collect();

        let ball = ball.map(|ball| {
            BallRenderer::new(
                &device,
                &queue,
                &paddle_uniform_layout,
                ball,
                game.ball_segments,
                client.ball_color,
            )
        });

        Ok(Self {
            device,
            queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            clear_color: client.clear_color,
            quad_program,
            paddle_program,
            quad_mesh,
            quad_uniforms,
            texture_bind_group,
            players,
            ball,
        })
    }

    /// Match the surface to the new window size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface_config.width = width.max(1);
        self.surface_config.height = height.max(1);
        self.reconfigure();
    }

    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, snapshot: &FrameSnapshot) -> Result<(), SurfaceError> {
        draw::draw_frame(self, snapshot)
    }
}
