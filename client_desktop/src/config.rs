//! Client-side settings: window, clear colour and asset paths

use std::path::PathBuf;

/// Window width in physical pixels
pub const SCR_WIDTH: u32 = 800;
/// Window height in physical pixels
pub const SCR_HEIGHT: u32 = 600;

/// A texture file and whether its rows are flipped on load
#[derive(Debug, Clone)]
pub struct TextureSpec {
    pub path: PathBuf,
    pub flip_vertically: bool,
}

/// Vertex/fragment source pair
#[derive(Debug, Clone)]
pub struct ShaderSpec {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: wgpu::Color,
    pub quad_shader: ShaderSpec,
    pub paddle_shader: ShaderSpec,
    pub textures: [TextureSpec; 2],
    pub paddle_thickness: f32, // NDC width of a paddle
    pub paddle_color: [f32; 4],
    pub ball_color: [f32; 4],
}

fn asset(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            title: "LearnOpenGL".to_string(),
            width: SCR_WIDTH,
            height: SCR_HEIGHT,
            clear_color: wgpu::Color {
                r: 0.2,
                g: 0.3,
                b: 0.3,
                a: 1.0,
            },
            quad_shader: ShaderSpec {
                vertex: asset("shaders/quad.vert.wgsl"),
                fragment: asset("shaders/quad.frag.wgsl"),
            },
            paddle_shader: ShaderSpec {
                vertex: asset("shaders/paddle.vert.wgsl"),
                fragment: asset("shaders/solid.frag.wgsl"),
            },
            // The wall is uploaded as stored, the face is flipped. Kept as found.
            textures: [
                TextureSpec {
                    path: asset("textures/wall.jpg"),
                    flip_vertically: false,
                },
                TextureSpec {
                    path: asset("textures/awesomeface.png"),
                    flip_vertically: true,
                },
            ],
            // ~10px at the default width
            paddle_thickness: 0.025,
            paddle_color: [1.0, 1.0, 1.0, 1.0],
            ball_color: [1.0, 0.5, 0.2, 1.0],
        }
    }
}
