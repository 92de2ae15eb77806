//! Scene Switcher Demo
//!
//! Opens a window with three switchable scenes: a card-dealing animation,
//! a line of random words and emoji, and a particle emitter.
//!
//! Run with: `cargo run --bin scene_demo`
//!
//! Controls:
//! - Click a menu label, or press 1 / 2 / 3: Switch scene
//! - ESC: Exit

use std::sync::Arc;

use anyhow::Context;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use scene_switcher_engine::game::{Canvas, DemoConfig, FpsCounter, SceneHost, SceneKind, SceneMenu, Viewport};
use scene_switcher_engine::render::{
    BackgroundPass, FrameClock, FrameContext, GpuContext, RenderContext, RenderError,
    RenderPassManager, ShapeRenderPass,
};

/// Outcome of one attempted frame
enum FrameStatus {
    Presented,
    Skipped,
    /// The surface cannot recover; the app must exit with this error
    Fatal(anyhow::Error),
}

impl FrameStatus {
    fn into_fatal(self) -> Option<anyhow::Error> {
        match self {
            FrameStatus::Fatal(err) => Some(err),
            FrameStatus::Presented | FrameStatus::Skipped => None,
        }
    }
}

struct DemoApp {
    config: DemoConfig,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    passes: RenderPassManager,
    clock: FrameClock,
    host: SceneHost,
    menu: SceneMenu,
    fps: FpsCounter,
    canvas: Canvas,
    cursor: (f32, f32),
    /// First fatal error raised inside the event loop
    error: Option<anyhow::Error>,
}

impl DemoApp {
    fn new(config: DemoConfig) -> Self {
        let width = config.window_width as f32;
        let height = config.window_height as f32;
        let host = SceneHost::new(Viewport::new(width, height), config.scene_rng());

        Self {
            config,
            window: None,
            gpu: None,
            passes: RenderPassManager::new(),
            clock: FrameClock::new(),
            host,
            menu: SceneMenu::new(),
            fps: FpsCounter::new(),
            canvas: Canvas::new(width, height),
            cursor: (0.0, 0.0),
            error: None,
        }
    }

    fn initialize(&mut self, window: Arc<Window>) -> Result<(), RenderError> {
        let gpu = GpuContext::new(Arc::clone(&window), self.config.gpu.clone())?;
        let (width, height) = gpu.dimensions();

        let mut passes = RenderPassManager::new();
        passes.add_pass(Box::new(BackgroundPass::from_hex(self.config.background_color)));
        passes.add_pass(Box::new(ShapeRenderPass::new()));
        passes.initialize(&render_context(&gpu));
        for (name, enabled) in passes.list_passes() {
            log::debug!("Render pass {name} (enabled: {enabled})");
        }

        self.passes = passes;
        self.gpu = Some(gpu);
        self.window = Some(window);

        // Scenes are laid out for the real surface size, not the requested one
        self.host.on_resize(width as f32, height as f32);
        self.host.switch(self.config.initial_scene);
        self.clock = FrameClock::new();
        Ok(())
    }

    /// Keep the first fatal error; `main` returns it once the loop exits
    fn record_fatal(&mut self, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error.get_or_insert(err);
    }

    /// Mount a fresh scene; re-selecting the active one restarts it
    fn select(&mut self, kind: SceneKind) {
        self.host.switch(kind);
    }

    fn handle_key(&mut self, key: KeyCode) {
        let index = match key {
            KeyCode::Digit1 | KeyCode::Numpad1 => 0,
            KeyCode::Digit2 | KeyCode::Numpad2 => 1,
            KeyCode::Digit3 | KeyCode::Numpad3 => 2,
            _ => return,
        };
        if let Some(kind) = SceneKind::from_index(index) {
            self.select(kind);
        }
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        // Minimized windows report zero; keep the last usable size
        if size.width == 0 || size.height == 0 {
            return;
        }
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize(size.width, size.height);
        }
        self.host.on_resize(size.width as f32, size.height as f32);
    }

    /// Advance the active scene and rebuild this frame's geometry
    fn update(&mut self) {
        let delta = self.clock.tick();
        self.fps.set(self.clock.fps());
        self.host.tick(delta);

        let viewport = self.host.viewport();
        self.canvas.reset(viewport.width, viewport.height);
        self.host.draw(&mut self.canvas);
        self.menu.draw(&mut self.canvas, self.host.active_kind());
        self.fps.draw(&mut self.canvas);
    }

    fn render(&mut self) -> FrameStatus {
        let Some(gpu) = self.gpu.as_ref() else {
            return FrameStatus::Skipped;
        };

        let output = match gpu.get_current_texture() {
            Ok(texture) => texture,
            Err(RenderError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                gpu.reconfigure();
                return FrameStatus::Skipped;
            }
            Err(err @ RenderError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                return FrameStatus::Fatal(anyhow::Error::new(err).context("surface out of memory"));
            }
            Err(err) => {
                log::warn!("Skipping frame: {err}");
                return FrameStatus::Skipped;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let ctx = render_context(gpu);

        self.passes.prepare(&ctx, self.canvas.mesh());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Demo Encoder"),
            });
        {
            let mut frame = FrameContext {
                encoder: &mut encoder,
                color_view: &view,
            };
            self.passes.render(&ctx, &mut frame);
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        FrameStatus::Presented
    }
}

fn render_context(gpu: &GpuContext) -> RenderContext<'_> {
    let (width, height) = gpu.dimensions();
    RenderContext {
        device: &gpu.device,
        queue: &gpu.queue,
        surface_format: gpu.format(),
        width,
        height,
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.window_title.clone())
            .with_inner_size(PhysicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        let result = event_loop
            .create_window(attrs)
            .context("failed to create window")
            .and_then(|window| {
                self.initialize(Arc::new(window))
                    .context("failed to initialize GPU")
            });

        if let Err(err) = result {
            self.record_fatal(err);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    if key == KeyCode::Escape {
                        event_loop.exit();
                        return;
                    }
                    self.handle_key(key);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.cursor;
                if let Some(kind) = self.menu.button_at(x, y) {
                    self.select(kind);
                }
            }
            WindowEvent::Resized(new_size) => self.resize(new_size),
            WindowEvent::RedrawRequested => {
                self.update();
                if let Some(err) = self.render().into_fatal() {
                    self.record_fatal(err);
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::from_env();
    log::info!(
        "Starting {} ({}x{}), press 1/2/3 or click a label to switch scenes",
        config.window_title,
        config.window_width,
        config.window_height
    );

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new(config);
    event_loop.run_app(&mut app).context("event loop terminated")?;

    exit_result(app.error.take())
}

/// Process result after the event loop has returned
fn exit_result(error: Option<anyhow::Error>) -> anyhow::Result<()> {
    match error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> DemoApp {
        DemoApp::new(DemoConfig::default().with_seed_override(Some("3")))
    }

    #[test]
    fn test_only_fatal_frames_carry_errors() {
        assert!(FrameStatus::Presented.into_fatal().is_none());
        assert!(FrameStatus::Skipped.into_fatal().is_none());
        assert!(FrameStatus::Fatal(anyhow::anyhow!("gone")).into_fatal().is_some());
    }

    #[test]
    fn test_out_of_memory_makes_exit_fail() {
        let mut app = app();
        let err = anyhow::Error::new(RenderError::Surface(wgpu::SurfaceError::OutOfMemory));
        app.record_fatal(err);

        let result = exit_result(app.error.take());
        let err = result.expect_err("fatal surface error must fail the process");
        assert!(matches!(
            err.downcast_ref::<RenderError>(),
            Some(RenderError::Surface(wgpu::SurfaceError::OutOfMemory))
        ));
    }

    #[test]
    fn test_first_fatal_error_wins() {
        let mut app = app();
        app.record_fatal(anyhow::anyhow!("first"));
        app.record_fatal(anyhow::anyhow!("second"));
        assert_eq!(app.error.map(|e| e.to_string()), Some("first".to_string()));
    }

    #[test]
    fn test_clean_exit_is_ok() {
        let mut app = app();
        assert!(exit_result(app.error.take()).is_ok());
    }

    #[test]
    fn test_number_keys_select_scenes() {
        let mut app = app();
        app.handle_key(KeyCode::Digit2);
        assert_eq!(app.host.active_kind(), Some(SceneKind::Text));
        app.handle_key(KeyCode::Numpad3);
        assert_eq!(app.host.active_kind(), Some(SceneKind::Particles));
        app.handle_key(KeyCode::KeyQ);
        assert_eq!(app.host.active_kind(), Some(SceneKind::Particles));
    }
}
