//! Wavescape - an animated ocean surface beneath a cubemap skybox
//!
//! A fixed two-pass renderer: skybox cube first, then a plane mesh displaced
//! by a bank of 32 superposed sine waves, viewed through a mouse-driven
//! orbit camera.

mod camera;
mod cli;
mod mesh;
mod params;
mod rendering;
mod sky;
mod waves;

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use camera::CameraRig;
use cli::Args;
use mesh::Mesh;
use params::{OrbitParams, RenderConfig, ShadingParams, SurfaceParams};
use rendering::{RenderMode, RenderSystem};
use sky::CubemapFaces;
use waves::WaveBank;

/// Main application state
///
/// `render_system` doubles as the init gate: `None` means resources are
/// still loading and no frame is drawn.
struct App {
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    rig: CameraRig,
    mesh: Mesh,
    bank: WaveBank,

    surface_params: SurfaceParams,
    render_config: RenderConfig,
    shading: ShadingParams,
    render_mode: RenderMode,
    skybox_path: Option<std::path::PathBuf>,

    /// Last cursor position, for turning absolute motion into drag deltas
    last_cursor: Option<(f64, f64)>,
    start_time: Instant,
}

impl App {
    fn new(args: &Args) -> Self {
        let surface_params = args.surface_params();
        let render_config = args.render_config();
        let shading = ShadingParams::default();

        let mesh = Mesh::plane(surface_params.resolution, surface_params.size_m);
        let bank = WaveBank::generate(surface_params.wave_seed);
        let rig = CameraRig::new(OrbitParams::default(), Vec3::from_array(shading.light_pos_m));

        log::info!(
            "surface: {} quads/side over {} m, {} wave components",
            surface_params.resolution,
            surface_params.size_m,
            waves::WAVE_COUNT
        );

        Self {
            window: None,
            render_system: None,
            rig,
            mesh,
            bank,
            surface_params,
            render_config,
            shading,
            render_mode: args.render_mode(),
            skybox_path: args.skybox.clone(),
            last_cursor: None,
            start_time: Instant::now(),
        }
    }

    fn load_cubemap(&self) -> CubemapFaces {
        if let Some(path) = &self.skybox_path {
            match CubemapFaces::load(path) {
                Ok(faces) => return faces,
                Err(e) => {
                    log::warn!("skybox {}: {e}; using procedural sky", path.display());
                }
            }
        }
        CubemapFaces::from_cross(&sky::procedural_cross(256))
            .expect("procedural cross has valid layout")
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Wavescape")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let cubemap = self.load_cubemap();

        // Initializing -> Running happens exactly once, here. Shader modules
        // and the cubemap upload complete before the first redraw draws.
        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.mesh,
            &self.bank,
            &self.shading,
            &cubemap,
            self.render_mode,
        ));

        match render_system {
            Ok(render_system) => {
                log::info!("render system ready (seed {})", self.surface_params.wave_seed);
                self.window = Some(window);
                self.render_system = Some(render_system);
            }
            Err(e) => {
                log::error!("failed to initialize rendering: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.render_config.window_width = size.width;
                self.render_config.window_height = size.height;
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.rig.set_dragging(state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some((last_x, last_y)) = self.last_cursor {
                    let dx = (position.x - last_x) as f32;
                    let dy = (position.y - last_y) as f32;
                    self.rig.drag(dx, dy);
                }
                self.last_cursor = Some((position.x, position.y));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    // One wheel line scrolls about as far as 20 px
                    MouseScrollDelta::LineDelta(_, y) => y * 20.0,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                self.rig.zoom(dy);
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
            }
            _ => {}
        }
    }
}

impl App {
    /// Render a single frame: camera update, uniforms, both passes
    fn render_frame(&mut self) {
        let Some(render_system) = &self.render_system else {
            return; // Still initializing
        };

        let time_s = self.start_time.elapsed().as_secs_f32();
        let camera = self.rig.update(
            self.render_config.window_width,
            self.render_config.window_height,
            &self.render_config,
        );

        render_system.update_uniforms(&camera, time_s);

        match render_system.render() {
            Ok(()) => {}
            // A lost surface comes back on the next reconfigure; either way
            // the frame is skipped, never the loop.
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(
                        self.render_config.window_width,
                        self.render_config.window_height,
                    );
                }
            }
            Err(e) => log::error!("render error: {e}"),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut app = App::new(&args);

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("event loop error: {e}");
    }
}
