//! Bedroom scene viewer.
//!
//! Controls:
//! - W / S / A / D: move forward / backward / left / right
//! - E / R: move up / down
//! - X / C: pitch up / down, Y / V: yaw left / right, Z / Q: roll left / right
//! - Mouse: look around, wheel: zoom
//! - G: start / stop the ceiling fan
//! - F: toggle the orbiting overview camera
//! - Escape: quit

use std::num::NonZeroU32;
use std::panic::{ self, AssertUnwindSafe };
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{ anyhow, Context, Result };
use glutin::config::{ Config, ConfigTemplateBuilder };
use glutin::context::{ ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version };
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{ Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface };
use glutin_winit::DisplayBuilder;
use log::{ error, info, warn };
use raw_window_handle::HasWindowHandle;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ ActiveEventLoop, EventLoop };
use winit::keyboard::PhysicalKey;
use winit::window::{ Window, WindowId };

use bedroom_scene::{ AppConfig, RenderSystem, Scene };

/// Window, GL context and renderer; created once the event loop is running.
struct Graphics {
    window: Window,
    gl_context: PossiblyCurrentContext,
    gl_surface: Surface<WindowSurface>,
    renderer: RenderSystem,
}

impl Graphics {
    fn new(event_loop: &ActiveEventLoop, config: &AppConfig) -> Result<Self> {
        let attributes = Window::default_attributes()
            .with_title(config.window.title.as_str())
            .with_inner_size(LogicalSize::new(config.window.width, config.window.height));

        let template = ConfigTemplateBuilder::new().with_depth_size(24);
        let display_builder = DisplayBuilder::new().with_window_attributes(Some(attributes));
        // the picker has no error path, an empty config list unwinds out of it
        let built = panic::catch_unwind(
            AssertUnwindSafe(|| display_builder.build(event_loop, template, gl_config_picker))
        ).map_err(|_| anyhow!("Failed to create window: no matching OpenGL config"))?;
        let (window, gl_config) = built.map_err(|e| anyhow!("Failed to create window: {e}"))?;
        let window = window.ok_or_else(|| anyhow!("Failed to create window"))?;

        let raw_window_handle = window
            .window_handle()
            .map_err(|e| anyhow!("Failed to create window: {e}"))?
            .as_raw();

        let display = gl_config.display();
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(raw_window_handle));
        let not_current = unsafe {
            display
                .create_context(&gl_config, &context_attributes)
                .context("Failed to create OpenGL 3.3 core context")?
        };

        let size = window.inner_size();
        let surface_attributes = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            non_zero(size.width),
            non_zero(size.height)
        );
        let gl_surface = unsafe {
            display
                .create_window_surface(&gl_config, &surface_attributes)
                .context("Failed to create OpenGL window surface")?
        };
        let gl_context = not_current
            .make_current(&gl_surface)
            .context("Failed to make OpenGL context current")?;

        if let Err(e) = gl_surface.set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN)) {
            warn!("Could not enable vsync: {e}");
        }

        if display.get_proc_address(c"glGetString").is_null() {
            return Err(anyhow!("Failed to initialize OpenGL function loader"));
        }
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol| display.get_proc_address(symbol))
        };

        let renderer = RenderSystem::new(gl, config).context("Failed to set up scene renderer")?;

        Ok(Self {
            window,
            gl_context,
            gl_surface,
            renderer,
        })
    }

    fn resize(&self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.gl_surface.resize(&self.gl_context, non_zero(width), non_zero(height));
    }
}

/// Prefer the config with the most multisample buffers.
fn gl_config_picker(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, config| if config.num_samples() > best.num_samples() { config } else { best })
        .expect("display offered no OpenGL configs")
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

struct App {
    config: AppConfig,
    graphics: Option<Graphics>,
    scene: Scene,
    last_frame_time: Option<Instant>,
    exit_code: ExitCode,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let scene = Scene::new(&config);
        Self {
            config,
            graphics: None,
            scene,
            last_frame_time: None,
            exit_code: ExitCode::SUCCESS,
        }
    }

    fn redraw(&mut self) {
        let Some(graphics) = &self.graphics else {
            return;
        };

        let now = Instant::now();
        let delta_time = self.last_frame_time
            .map(|last| (now - last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame_time = Some(now);

        self.scene.update(delta_time);

        let size = graphics.window.inner_size();
        let frame = self.scene.frame(size.width, size.height);
        graphics.renderer.render(size.width, size.height, &frame);

        if let Err(e) = graphics.gl_surface.swap_buffers(&graphics.gl_context) {
            error!("Failed to swap buffers: {e}");
        }
        graphics.window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        match Graphics::new(event_loop, &self.config) {
            Ok(graphics) => {
                info!("Scene ready, press Escape to quit");
                graphics.window.request_redraw();
                self.graphics = Some(graphics);
                self.last_frame_time = Some(Instant::now());
            }
            Err(e) => {
                error!("{e:#}");
                self.exit_code = ExitCode::FAILURE;
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::Resized(size) => {
                if let Some(graphics) = &self.graphics {
                    graphics.resize(size.width, size.height);
                    graphics.window.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if self.scene.handle_key(key_code, event.state) {
                        event_loop.exit();
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.scene.handle_cursor(position.x, position.y);
            }

            WindowEvent::MouseWheel { delta, .. } => self.scene.handle_scroll(delta),

            WindowEvent::Focused(false) => self.scene.handle_focus_lost(),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(graphics) = &self.graphics {
            graphics.renderer.cleanup();
        }
    }
}

fn run() -> Result<ExitCode> {
    let config = AppConfig::load()?;
    let event_loop = EventLoop::new().context("Failed to create event loop")?;

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(app.exit_code)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
