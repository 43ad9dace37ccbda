//! Window, event handling and the frame loop

use std::sync::Arc;
use std::time::Instant;

use game_core::{Config, InputState};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::config::ClientConfig;
use crate::error::SetupError;
use crate::input;
use crate::renderer::Renderer;
use crate::simulation::Simulation;

pub struct App {
    config: ClientConfig,
    simulation: Simulation,
    input: InputState,
    started: Instant,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    error: Option<SetupError>,
}

impl App {
    pub fn new(config: ClientConfig, game: Config) -> Self {
        Self {
            config,
            simulation: Simulation::new(game),
            input: InputState::new(),
            started: Instant::now(),
            window: None,
            renderer: None,
            error: None,
        }
    }

    /// The setup failure that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<SetupError> {
        self.error.take()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SetupError> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.as_str())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
            .with_resizable(true);
        let window = Arc::new(event_loop.create_window(attrs)?);

        let ball = self.simulation.snapshot().ball;
        let renderer = Renderer::new(
            window.clone(),
            &self.config,
            &self.simulation.config,
            ball.as_ref(),
        )?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.started = Instant::now();
        Ok(())
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.started.elapsed().as_secs_f32();
        let snapshot = self.simulation.step(&self.input, now);

        if snapshot.exit_requested {
            tracing::info!("escape pressed, closing");
            event_loop.exit();
            return;
        }

        let Some(renderer) = &mut self.renderer else {
            return;
        };

        match renderer.draw(&snapshot) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                tracing::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => tracing::warn!("surface error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            tracing::error!("{e}");
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => {
                input::handle_key(&mut self.input, code, state);
            }
            WindowEvent::Focused(false) => {
                self.input.clear();
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
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
