//! winit application: owns the window, the ball and the frame loop
//!
//! Each redraw runs one frame in strict order: sample keys, step the
//! simulation, render. Nothing overlaps between frames.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use super::frame_stats::FrameStats;
use super::keyboard::InputSampler;
use crate::Settings;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE};
use crate::renderer::{RenderState, scene};
use crate::sim::{Ball, FrameClock, step};

/// Application state driven by the winit event loop
pub struct App {
    settings: Settings,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    ball: Ball,
    clock: FrameClock,
    input: InputSampler,
    stats: FrameStats,
    /// Startup failure to report once the event loop returns
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            window: None,
            render_state: None,
            ball: Ball::new(),
            clock: FrameClock::new(Instant::now()),
            input: InputSampler::new(),
            stats: FrameStats::new(),
            error: None,
        }
    }

    /// Startup error raised inside the event loop, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.settings.window_title(0))
            .with_inner_size(LogicalSize::new(
                SCREEN_WIDTH * WINDOW_SCALE,
                SCREEN_HEIGHT * WINDOW_SCALE,
            ))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("Failed to create window")?,
        );

        let render_state = pollster::block_on(RenderState::new(window.clone(), self.settings.vsync))
            .context("Failed to initialize renderer")?;

        log::info!(
            "Window ready ({}x{} px)",
            render_state.size.0,
            render_state.size.1
        );

        self.window = Some(window);
        self.render_state = Some(render_state);
        // Setup time is not simulation time
        self.clock = FrameClock::new(Instant::now());
        Ok(())
    }

    /// Sample input, advance the ball, draw
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let keys = *self.input.sample();
        step(&mut self.ball, &mut self.clock, &keys, now);

        if self.stats.record(now) {
            log::debug!("{} FPS", self.stats.fps());
            if self.settings.show_fps {
                if let Some(window) = &self.window {
                    window.set_title(&self.settings.window_title(self.stats.fps()));
                }
            }
        }

        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        let vertices = scene::frame_vertices(&self.ball, self.settings.circle_segments);
        match render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.input.release_all(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.input.handle_key(code, event.state);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Open the window and run until it is closed
pub fn run(settings: Settings) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop
        .run_app(&mut app)
        .context("Event loop terminated abnormally")?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
