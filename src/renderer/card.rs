//! The card render pass.
//!
//! One pipeline draws every card: a shared subdivided plane mesh, a camera
//! uniform at group 0, and a per-card bind group at group 1 holding that
//! card's exclusively-owned uniform buffer plus its texture. Cards render
//! double-sided against a depth buffer.

use wgpu::util::DeviceExt;

use crate::camera::{Camera, CameraUniform};
use crate::carousel::Formation;
use crate::gpu::{ImageTexture, RenderContext};
use crate::renderer::plane::{PlaneMesh, Vertex};

/// Per-card uniform data: model transform, cover-fit UV scale, the shared
/// speed residual, and the helix radius the shader bends the plane onto.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CardUniform {
    model: [[f32; 4]; 4],
    uv_scale: [f32; 2],
    speed: f32,
    radius: f32,
}

/// GPU state owned by a single card.
struct CardSlot {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Renders the whole formation in a single pass.
pub struct CardRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    slots: Vec<CardSlot>,
    depth_view: wgpu::TextureView,
    helix_radius: f32,
}

impl CardRenderer {
    /// Build the pipeline, upload the shared plane mesh, and create one
    /// uniform buffer + bind group per card.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        mesh: &PlaneMesh,
        textures: &[ImageTexture],
        formation: &Formation,
        helix_radius: f32,
    ) -> Self {
        let device = &context.device;

        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Card Vertex Buffer"),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Card Index Buffer"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::bytes_of(&CameraUniform::new()),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let camera_bind_group_layout = device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );
        let camera_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &camera_bind_group_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                }],
            });

        let card_bind_group_layout = device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Card Bind Group Layout"),
                entries: &[
                    // binding 0: per-card uniform
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    // binding 1: card texture
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float {
                                filterable: true,
                            },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    // binding 2: sampler
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(
                            wgpu::SamplerBindingType::Filtering,
                        ),
                        count: None,
                    },
                ],
            },
        );

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Card Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let slots = formation
            .cards()
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let uniform_buffer = device.create_buffer_init(
                    &wgpu::util::BufferInitDescriptor {
                        label: Some(&format!("Card Uniform {i}")),
                        contents: bytemuck::bytes_of(&CardUniform {
                            model: formation
                                .card_model(card)
                                .to_cols_array_2d(),
                            uv_scale: card.uv_scale.to_array(),
                            speed: 0.0,
                            radius: helix_radius,
                        }),
                        usage: wgpu::BufferUsages::UNIFORM
                            | wgpu::BufferUsages::COPY_DST,
                    },
                );
                let texture = &textures[card.texture_index];
                let bind_group =
                    device.create_bind_group(&wgpu::BindGroupDescriptor {
                        label: Some(&format!("Card Bind Group {i}")),
                        layout: &card_bind_group_layout,
                        entries: &[
                            wgpu::BindGroupEntry {
                                binding: 0,
                                resource: uniform_buffer.as_entire_binding(),
                            },
                            wgpu::BindGroupEntry {
                                binding: 1,
                                resource: wgpu::BindingResource::TextureView(
                                    &texture.view,
                                ),
                            },
                            wgpu::BindGroupEntry {
                                binding: 2,
                                resource: wgpu::BindingResource::Sampler(
                                    &sampler,
                                ),
                            },
                        ],
                    });
                CardSlot {
                    uniform_buffer,
                    bind_group,
                }
            })
            .collect();

        let shader =
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Card Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../assets/shaders/card.wgsl").into(),
                ),
            });

        let pipeline_layout = device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Card Pipeline Layout"),
                bind_group_layouts: &[
                    &camera_bind_group_layout,
                    &card_bind_group_layout,
                ],
                push_constant_ranges: &[],
            },
        );

        let pipeline = device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Card Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    // Cards are visible from both sides of the helix.
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: wgpu::TextureFormat::Depth32Float,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        );

        let depth_view = Self::create_depth_view(context);

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            camera_buffer,
            camera_bind_group,
            slots,
            depth_view,
            helix_radius,
        }
    }

    fn create_depth_view(context: &RenderContext) -> wgpu::TextureView {
        let texture =
            context.device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Card Depth Texture"),
                size: wgpu::Extent3d {
                    width: context.config.width.max(1),
                    height: context.config.height.max(1),
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Depth32Float,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    /// Upload this frame's camera and per-card uniforms.
    pub fn prepare(
        &self,
        context: &RenderContext,
        camera: &Camera,
        formation: &Formation,
    ) {
        let mut camera_uniform = CameraUniform::new();
        camera_uniform.update_view_proj(camera);
        context.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&camera_uniform),
        );

        let speed = formation.speed();
        for (slot, card) in self.slots.iter().zip(formation.cards()) {
            let uniform = CardUniform {
                model: formation.card_model(card).to_cols_array_2d(),
                uv_scale: card.uv_scale.to_array(),
                speed,
                radius: self.helix_radius,
            };
            context.queue.write_buffer(
                &slot.uniform_buffer,
                0,
                bytemuck::bytes_of(&uniform),
            );
        }
    }

    /// Encode the card pass into `encoder`, clearing to `background`.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        background: wgpu::Color,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Card Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(background),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(
                wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                },
            ),
            ..Default::default()
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.camera_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        for slot in &self.slots {
            pass.set_bind_group(1, &slot.bind_group, &[]);
            pass.draw_indexed(0..self.index_count, 0, 0..1);
        }
    }

    /// Recreate resolution-dependent resources after a surface resize.
    pub fn resize(&mut self, context: &RenderContext) {
        self.depth_view = Self::create_depth_view(context);
    }
}
