//! Rendering system with wgpu pipelines for the skybox and wave passes.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use thiserror::Error;
use wgpu::util::DeviceExt;

use crate::camera::{strip_translation, CameraState};
use crate::mesh::{Mesh, Vertex};
use crate::params::ShadingParams;
use crate::sky::CubemapFaces;
use crate::waves::{WaveBank, WAVE_COUNT};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Clear color shared by both passes (the skybox overdraws it anyway)
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.2,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};

/// Unit cube for the skybox, seen from the inside
const SKYBOX_VERTICES: [[f32; 3]; 8] = [
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
];

#[rustfmt::skip]
const SKYBOX_INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, // front
    5, 4, 6, 5, 6, 7, // back
    5, 0, 3, 5, 3, 7, // top
    1, 4, 6, 1, 6, 2, // bottom
    5, 4, 1, 5, 1, 0, // left
    3, 2, 6, 3, 6, 7, // right
];

/// One wave packed for the uniform buffer: (amplitude, frequency, phase, 0)
/// plus the direction padded to a vec4.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct WaveUniform {
    pub params: [f32; 4],
    pub direction: [f32; 4],
}

/// Uniform buffer for the wave shader. Field order mirrors the WGSL struct
/// exactly; the trailing pad keeps the wave array 16-byte aligned.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct WaveUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub light_pos: [f32; 3],
    pub time: f32,
    pub camera_pos: [f32; 3],
    pub mie_coefficient: f32,
    pub horizon_blur_strength: f32,
    pub horizon_height: f32,
    pub _padding: [f32; 2],
    pub waves: [WaveUniform; WAVE_COUNT],
}

/// Uniform buffer for the skybox shader (translation-stripped view +
/// projection)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SkyboxUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

/// How the displaced surface is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Lit triangle mesh with cubemap reflections
    Surface,
    /// Height-colored point cloud (combined shader pair, no lighting)
    Points,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to request device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

/// Rendering system managing the wgpu device, both pipelines, and buffers
pub struct RenderSystem {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    wave_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,
    wave_vertex_buffer: wgpu::Buffer,
    wave_index_buffer: wgpu::Buffer,
    wave_index_count: u32,
    wave_vertex_count: u32,
    wave_uniform_buffer: wgpu::Buffer,
    wave_bind_group: wgpu::BindGroup,
    mode: RenderMode,

    skybox_pipeline: wgpu::RenderPipeline,
    skybox_vertex_buffer: wgpu::Buffer,
    skybox_index_buffer: wgpu::Buffer,
    skybox_uniform_buffer: wgpu::Buffer,
    skybox_bind_group: wgpu::BindGroup,

    base_uniforms: WaveUniforms,
}

impl RenderSystem {
    /// Create the rendering system: device setup, cubemap upload, both
    /// pipelines. Runs once during initialization; no draw happens until it
    /// returns.
    pub async fn new(
        window: std::sync::Arc<winit::window::Window>,
        mesh: &Mesh,
        bank: &WaveBank,
        shading: &ShadingParams,
        cubemap: &CubemapFaces,
        mode: RenderMode,
    ) -> Result<Self, RenderError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        // Validation failures (bad shader edits, oversized buffers) land
        // here; the frame loop keeps running with the affected pass skipped.
        device.on_uncaptured_error(Box::new(|error| {
            log::error!("wgpu error: {error}");
        }));

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_view = create_depth_texture(&device, config.width, config.height);

        let (cubemap_view, cubemap_sampler) = cubemap.create_texture(&device, &queue);

        // Shaders
        let wave_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Wave Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("waves.wgsl").into()),
        });

        let skybox_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Skybox Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("skybox.wgsl").into()),
        });

        let point_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Point Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("points.wgsl").into()),
        });

        // Wave mesh buffers (static for the process lifetime)
        let wave_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Wave Vertex Buffer"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let wave_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Wave Index Buffer"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        // Wave uniforms: the bank and shading constants are baked in once;
        // only matrices, time, and camera position change per frame.
        let base_uniforms = WaveUniforms {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            light_pos: shading.light_pos_m,
            time: 0.0,
            camera_pos: [0.0; 3],
            mie_coefficient: shading.mie_coefficient,
            horizon_blur_strength: shading.horizon_blur_strength,
            horizon_height: shading.horizon_height_m,
            _padding: [0.0; 2],
            waves: pack_wave_bank(bank),
        };

        let wave_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Wave Uniform Buffer"),
            contents: bytemuck::cast_slice(&[base_uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Pass Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::Cube,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let wave_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Wave Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wave_uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&cubemap_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&cubemap_sampler),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Pass Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let wave_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Wave Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &wave_shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 0,
                            format: wgpu::VertexFormat::Float32x3,
                        },
                        wgpu::VertexAttribute {
                            offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                            shader_location: 1,
                            format: wgpu::VertexFormat::Float32x3,
                        },
                    ],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &wave_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let point_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Point Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &point_shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 0,
                            format: wgpu::VertexFormat::Float32x3,
                        },
                        wgpu::VertexAttribute {
                            offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                            shader_location: 1,
                            format: wgpu::VertexFormat::Float32x3,
                        },
                    ],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &point_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::PointList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        // Skybox buffers
        let skybox_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Skybox Vertex Buffer"),
            contents: bytemuck::cast_slice(&SKYBOX_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let skybox_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Skybox Index Buffer"),
            contents: bytemuck::cast_slice(&SKYBOX_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        let skybox_uniforms = SkyboxUniforms {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
        };

        let skybox_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Skybox Uniform Buffer"),
            contents: bytemuck::cast_slice(&[skybox_uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let skybox_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Skybox Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: skybox_uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&cubemap_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&cubemap_sampler),
                },
            ],
        });

        // The skybox compares at LessEqual so its forced depth of 1.0
        // survives the unit-depth clear; the wave pipeline restores Less.
        let skybox_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Skybox Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &skybox_shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[wgpu::VertexAttribute {
                        offset: 0,
                        shader_location: 0,
                        format: wgpu::VertexFormat::Float32x3,
                    }],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &skybox_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            wave_pipeline,
            point_pipeline,
            wave_vertex_buffer,
            wave_index_buffer,
            wave_index_count: mesh.indices.len() as u32,
            wave_vertex_count: mesh.vertices.len() as u32,
            wave_uniform_buffer,
            wave_bind_group,
            mode,
            skybox_pipeline,
            skybox_vertex_buffer,
            skybox_index_buffer,
            skybox_uniform_buffer,
            skybox_bind_group,
            base_uniforms,
        })
    }

    /// Reconfigure the surface and depth buffer after a resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_texture(&self.device, self.config.width, self.config.height);
    }

    /// Push this frame's camera state and time into both uniform buffers
    pub fn update_uniforms(&self, camera: &CameraState, time: f32) {
        let mut uniforms = self.base_uniforms;
        uniforms.model = camera.model.to_cols_array_2d();
        uniforms.view = camera.view.to_cols_array_2d();
        uniforms.projection = camera.projection.to_cols_array_2d();
        uniforms.light_pos = camera.light_pos.to_array();
        uniforms.time = time;
        uniforms.camera_pos = camera.position.to_array();

        self.queue.write_buffer(
            &self.wave_uniform_buffer,
            0,
            bytemuck::cast_slice(&[uniforms]),
        );

        let skybox_uniforms = SkyboxUniforms {
            view: strip_translation(camera.view).to_cols_array_2d(),
            projection: camera.projection.to_cols_array_2d(),
        };
        self.queue.write_buffer(
            &self.skybox_uniform_buffer,
            0,
            bytemuck::cast_slice(&[skybox_uniforms]),
        );
    }

    /// Render one frame: clear, skybox, wave surface, present
    pub fn render(&self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Skybox first, at forced depth 1.0
            render_pass.set_pipeline(&self.skybox_pipeline);
            render_pass.set_bind_group(0, &self.skybox_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.skybox_vertex_buffer.slice(..));
            render_pass
                .set_index_buffer(self.skybox_index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..SKYBOX_INDICES.len() as u32, 0, 0..1);

            // Wave surface
            match self.mode {
                RenderMode::Surface => {
                    render_pass.set_pipeline(&self.wave_pipeline);
                    render_pass.set_bind_group(0, &self.wave_bind_group, &[]);
                    render_pass.set_vertex_buffer(0, self.wave_vertex_buffer.slice(..));
                    render_pass.set_index_buffer(
                        self.wave_index_buffer.slice(..),
                        wgpu::IndexFormat::Uint32,
                    );
                    render_pass.draw_indexed(0..self.wave_index_count, 0, 0..1);
                }
                RenderMode::Points => {
                    render_pass.set_pipeline(&self.point_pipeline);
                    render_pass.set_bind_group(0, &self.wave_bind_group, &[]);
                    render_pass.set_vertex_buffer(0, self.wave_vertex_buffer.slice(..));
                    render_pass.draw(0..self.wave_vertex_count, 0..1);
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

/// Pack the wave bank into its GPU layout
pub fn pack_wave_bank(bank: &WaveBank) -> [WaveUniform; WAVE_COUNT] {
    std::array::from_fn(|i| {
        let wave = bank.waves()[i];
        WaveUniform {
            params: [wave.amplitude, wave.frequency, wave.phase, 0.0],
            direction: [wave.direction.x, wave.direction.y, 0.0, 0.0],
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_layout_matches_wgsl() {
        // Sizes must agree with the struct declarations in waves.wgsl and
        // skybox.wgsl, including the 16-byte array alignment.
        assert_eq!(std::mem::size_of::<WaveUniform>(), 32);
        assert_eq!(
            std::mem::size_of::<WaveUniforms>(),
            3 * 64 + 48 + WAVE_COUNT * 32
        );
        assert_eq!(std::mem::size_of::<WaveUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<SkyboxUniforms>(), 128);
    }

    #[test]
    fn test_wave_bank_packing() {
        let bank = WaveBank::generate(42);
        let packed = pack_wave_bank(&bank);

        assert_eq!(packed.len(), WAVE_COUNT);
        for (uniform, wave) in packed.iter().zip(bank.waves()) {
            assert_eq!(uniform.params[0], wave.amplitude);
            assert_eq!(uniform.params[1], wave.frequency);
            assert_eq!(uniform.params[2], wave.phase);
            assert_eq!(uniform.direction[0], wave.direction.x);
            assert_eq!(uniform.direction[1], wave.direction.y);
        }
    }

    #[test]
    fn test_skybox_cube_shape() {
        assert_eq!(SKYBOX_VERTICES.len(), 8);
        assert_eq!(SKYBOX_INDICES.len(), 36);
        assert!(SKYBOX_INDICES.iter().all(|&i| (i as usize) < 8));
        assert!(SKYBOX_VERTICES
            .iter()
            .all(|v| v.iter().all(|c| c.abs() == 1.0)));
    }
}
