use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use glam::DVec2;
use winit::window::Window;

pub mod model;
pub mod renderer;
pub mod scene;
pub mod view;

use renderer::{GpuResources, Renderer};
use scene::{CameraUniform, SceneRenderer};
use view::{Camera, ViewAction, ViewController, ViewKey};

/// Startup settings, usually filled from the command line.
#[derive(Debug, Clone)]
pub struct ViewerOptions {
    pub width: u32,
    pub height: u32,
    pub texture_dir: PathBuf,
    /// Initial vertical field of view in degrees.
    pub fov: f32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            texture_dir: PathBuf::from("textures"),
            fov: view::DEFAULT_ZOOM,
        }
    }
}

pub struct State {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    config: wgpu::SurfaceConfiguration,
    controller: ViewController,
    scene: SceneRenderer<GpuResources>,
    renderer: Renderer,
    started: Instant,
    /// Accumulated pointer position while the cursor is captured.
    cursor: DVec2,
}

impl State {
    pub fn new(window: Window, options: &ViewerOptions) -> anyhow::Result<Self> {
        let window = Arc::new(window);
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("Failed to find an appropriate adapter")?;

        let info = adapter.get_info();
        log::info!("Using adapter: {} ({:?})", info.name, info.backend);

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Primary Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("Failed to create device")?;
        let device = Arc::new(device);
        let queue = Arc::new(queue);

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("Surface reports no supported formats")?;
        let present_mode = surface_caps
            .present_modes
            .first()
            .copied()
            .unwrap_or(wgpu::PresentMode::Fifo);
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        log::info!("Surface format {:?}, present mode {:?}", surface_format, present_mode);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let resources = GpuResources::new(device.clone(), queue.clone());
        let renderer = Renderer::new(device.clone(), queue, &config, resources.texture_layout());

        let mut scene = SceneRenderer::new(resources, &options.texture_dir);
        scene.prepare_scene().context("Failed to prepare scene")?;
        if let Some(lights) = scene.lights() {
            renderer.update_lights(lights);
        }

        let controller = ViewController::new(Camera::new(
            view::DEFAULT_POSITION,
            view::DEFAULT_LOOK_DIRECTION,
            options.fov,
            view::DEFAULT_MOVEMENT_SPEED,
        ));

        Ok(Self {
            window,
            surface,
            device,
            config,
            controller,
            scene,
            renderer,
            started: Instant::now(),
            cursor: DVec2::ZERO,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    pub fn size(&self) -> winit::dpi::PhysicalSize<u32> {
        winit::dpi::PhysicalSize::new(self.config.width, self.config.height)
    }

    fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height as f32
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.renderer.resize(&self.config);
        }
    }

    pub fn process_keyboard(&mut self, key: ViewKey, pressed: bool) {
        self.controller.process_keyboard(key, pressed);
    }

    /// Called when the cursor is captured; the next motion only seeds the position.
    pub fn capture_pointer(&mut self) {
        self.controller.reset_pointer();
    }

    pub fn process_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.cursor += DVec2::new(dx, dy);
        self.controller.handle_pointer_move(self.cursor.x, self.cursor.y);
    }

    pub fn process_scroll(&mut self, amount: f32) {
        self.controller.handle_scroll(amount);
    }

    pub fn update(&mut self) -> ViewAction {
        let now = self.started.elapsed().as_secs_f64();
        self.controller.update(now)
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let camera = CameraUniform::new(
            self.controller.view_matrix(),
            self.controller.projection_matrix(self.aspect()),
            self.controller.camera().position,
        );
        self.renderer.update_camera(&camera);

        match self.scene.render_frame() {
            Ok(_) => self.renderer.render(&view, self.scene.backend(), self.scene.draws()),
            Err(err) => log::error!("Skipping frame: {}", err),
        }

        output.present();
        Ok(())
    }
}

impl Drop for State {
    fn drop(&mut self) {
        self.scene.release();
    }
}
