use glam::{Mat4, Vec3};
use wgpu::*;

use crate::texture::Texture;

/// Uniform block of the quad program (matches `QuadUniforms` in the WGSL)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadUniforms {
    pub transform: [[f32; 4]; 4],
    pub alpha: f32,
    pub _padding: [f32; 3], // struct size rounds up to 16 bytes
}

impl QuadUniforms {
    pub fn new(offset: f32, rotation: f32, alpha: f32) -> Self {
        Self {
            transform: quad_transform(offset, rotation).to_cols_array_2d(),
            alpha,
            _padding: [0.0; 3],
        }
    }
}

/// Uniform block of the paddle program (matches `PaddleUniforms` in the WGSL)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PaddleUniforms {
    pub color: [f32; 4],
    pub offset: f32, // added to every vertex's y
    pub _padding: [f32; 3],
}

impl PaddleUniforms {
    pub fn new(color: [f32; 4], offset: f32) -> Self {
        Self {
            color,
            offset,
            _padding: [0.0; 3],
        }
    }
}

/// Slide along x by `offset`, then spin about z by `rotation` radians
pub fn quad_transform(offset: f32, rotation: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(offset, 0.0, 0.0)) * Mat4::from_rotation_z(rotation)
}

/// Two texture + sampler pairs for the quad's fragment stage
pub fn quad_texture_layout(device: &Device) -> BindGroupLayout {
    let texture_entry = |binding| BindGroupLayoutEntry {
        binding,
        visibility: ShaderStages::FRAGMENT,
        ty: BindingType::Texture {
            multisampled: false,
            view_dimension: TextureViewDimension::D2,
            sample_type: TextureSampleType::Float { filterable: true },
        },
        count: None,
    };
    let sampler_entry = |binding| BindGroupLayoutEntry {
        binding,
        visibility: ShaderStages::FRAGMENT,
        ty: BindingType::Sampler(SamplerBindingType::Filtering),
        count: None,
    };

    device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("Quad Texture Bind Group Layout"),
        entries: &[
            texture_entry(0),
            sampler_entry(1),
            texture_entry(2),
            sampler_entry(3),
        ],
    })
}

pub fn quad_texture_bind_group(
    device: &Device,
    layout: &BindGroupLayout,
    textures: &[Texture; 2],
) -> BindGroup {
    device.create_bind_group(&BindGroupDescriptor {
        label: Some("Quad Texture Bind Group"),
        layout,
        entries: &[
            BindGroupEntry {
                binding: 0,
                resource: BindingResource::TextureView(&textures[0].view),
            },
            BindGroupEntry {
                binding: 1,
                resource: BindingResource::Sampler(&textures[0].sampler),
            },
            BindGroupEntry {
                binding: 2,
                resource: BindingResource::TextureView(&textures[1].view),
            },
            BindGroupEntry {
                binding: 3,
                resource: BindingResource::Sampler(&textures[1].sampler),
            },
        ],
    })
}
