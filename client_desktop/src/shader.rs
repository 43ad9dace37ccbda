//! Shader programs loaded from WGSL files, plus typed uniform blocks

use std::marker::PhantomData;
use std::path::Path;

use wgpu::util::DeviceExt;
use wgpu::*;

use crate::error::ShaderError;

/// How a program's pipeline is assembled
pub struct ProgramDescriptor<'a> {
    pub label: &'a str,
    pub vertex_layouts: &'a [VertexBufferLayout<'a>],
    pub bind_group_layouts: &'a [&'a BindGroupLayout],
    pub format: TextureFormat,
    pub blend: BlendState,
}

/// A linked vertex + fragment pair
pub struct ShaderProgram {
    label: String,
    pipeline: RenderPipeline,
}

fn read_source(path: &Path) -> Result<String, ShaderError> {
    std::fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl ShaderProgram {
    /// Read, compile and link the two stages.
    ///
    /// The vertex file must define `vs_main`, the fragment file `fs_main`.
    pub fn from_files(
        device: &Device,
        vertex_path: &Path,
        fragment_path: &Path,
        desc: &ProgramDescriptor<'_>,
    ) -> Result<Self, ShaderError> {
        let vertex_source = read_source(vertex_path)?;
        let fragment_source = read_source(fragment_path)?;
        tracing::debug!(
            vertex = %vertex_path.display(),
            fragment = %fragment_path.display(),
            "compiling {}",
            desc.label
        );
        Self::from_sources(device, &vertex_source, &fragment_source, desc)
    }

    pub fn from_sources(
        device: &Device,
        vertex_source: &str,
        fragment_source: &str,
        desc: &ProgramDescriptor<'_>,
    ) -> Result<Self, ShaderError> {
        // Validation errors would otherwise go to the uncaptured-error handler and panic
        device.push_error_scope(ErrorFilter::Validation);

        let vertex = device.create_shader_module(ShaderModuleDescriptor {
            label: Some(&format!("{} Vertex", desc.label)),
            source: ShaderSource::Wgsl(vertex_source.into()),
        });
        let fragment = device.create_shader_module(ShaderModuleDescriptor {
            label: Some(&format!("{} Fragment", desc.label)),
            source: ShaderSource::Wgsl(fragment_source.into()),
        });

        let layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some(&format!("{} Layout", desc.label)),
            bind_group_layouts: desc.bind_group_layouts,
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some(desc.label),
            layout: Some(&layout),
            vertex: VertexState {
                module: &vertex,
                entry_point: Some("vs_main"),
                buffers: desc.vertex_layouts,
                compilation_options: Default::default(),
            },
            fragment: Some(FragmentState {
                module: &fragment,
                entry_point: Some("fs_main"),
                targets: &[Some(ColorTargetState {
                    format: desc.format,
                    blend: Some(desc.blend),
                    write_mask: ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(ShaderError::Compile {
                label: desc.label.to_string(),
                message: error.to_string(),
            });
        }

        Ok(Self {
            label: desc.label.to_string(),
            pipeline,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Make this program current for the following draws on `pass`.
    pub fn bind(&self, pass: &mut RenderPass<'_>, bind_groups: &[&BindGroup]) {
        pass.set_pipeline(&self.pipeline);
        for (index, group) in bind_groups.iter().enumerate() {
            pass.set_bind_group(index as u32, *group, &[]);
        }
    }
}

/// Bind group layout holding a single uniform block at binding 0
pub fn uniform_layout(device: &Device, label: &str, visibility: ShaderStages) -> BindGroupLayout {
    device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: BindingType::Buffer {
                ty: BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

/// A uniform block of type `T` and the bind group exposing it
pub struct UniformBuffer<T> {
    buffer: Buffer,
    bind_group: BindGroup,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> UniformBuffer<T> {
    pub fn new(device: &Device, label: &str, layout: &BindGroupLayout, initial: &T) -> Self {
        let buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(initial),
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&BindGroupDescriptor {
            label: Some(&format!("{label} Bind Group")),
            layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            buffer,
            bind_group,
            _marker: PhantomData,
        }
    }

    /// Upload new values. Takes effect at the next queue submission.
    pub fn set(&self, queue: &Queue, value: &T) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(value));
    }

    pub fn bind_group(&self) -> &BindGroup {
        &self.bind_group
    }

    pub fn destroy(&self) {
        self.buffer.destroy();
    }
}
