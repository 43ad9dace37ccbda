use wgpu::*;

use super::resources::QuadUniforms;
use super::Renderer;
use crate::simulation::FrameSnapshot;

pub fn draw_frame(renderer: &mut Renderer, snapshot: &FrameSnapshot) -> Result<(), SurfaceError> {
    let output = renderer.surface.get_current_texture()?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_uniforms(renderer, snapshot);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(renderer.clear_color),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_uniforms(renderer: &Renderer, snapshot: &FrameSnapshot) {
    renderer.quad_uniforms.set(
        &renderer.queue,
        &QuadUniforms::new(snapshot.quad_offset, snapshot.rotation, snapshot.alpha),
    );

    for player in &renderer.players {
        if let Some(paddle) = snapshot.paddles.iter().find(|p| p.side == player.side()) {
            player.update(&renderer.queue, paddle.position);
        }
    }
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>) {
    // Quad
    renderer.quad_program.bind(
        pass,
        &[
            renderer.quad_uniforms.bind_group(),
            &renderer.texture_bind_group,
        ],
    );
    let quad = &renderer.quad_mesh;
    pass.set_vertex_buffer(0, quad.vertex_buffer.slice(..));
    pass.set_index_buffer(quad.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..quad.index_count, 0, 0..1);

    // Paddles
    for player in &renderer.players {
        player.draw(pass, &renderer.paddle_program);
    }

    // Ball
    if let Some(ball) = &renderer.ball {
        ball.draw(pass, &renderer.paddle_program);
    }
}
