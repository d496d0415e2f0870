pub mod audio;
pub mod core;
pub mod gui;
pub mod renderer;
pub mod resources;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use glam::Vec2;
use wgpu::SurfaceError;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::game::{CatchGame, Feedback};
use crate::game::states::Phase;
use crate::ui::Rect;
use audio::AudioEngine;
use core::{EngineConfig, FixedTimestep};
use gui::{Gui, GuiAction};
use renderer::Renderer;
use resources::ResourceManager;

pub fn run(config: EngineConfig, game: CatchGame) -> Result<()> {
    tracing::info!(target: "engine", app = %config.app_name, "engine starting");

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, game);
    event_loop.run_app(&mut app).map_err(|err| anyhow!(err))?;

    tracing::info!(target: "engine", "engine shutdown complete");
    Ok(())
}

struct App {
    config: EngineConfig,
    game: CatchGame,
    audio: AudioEngine,
    tick: FixedTimestep,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    gui: Option<Gui>,
    cursor: Vec2,
    last_frame: Instant,
}

impl App {
    fn new(config: EngineConfig, game: CatchGame) -> Self {
        let audio = AudioEngine::new(&config.hit_sound_path, &config.end_sound_path);
        let tick = FixedTimestep::every(config.tick_interval);
        Self {
            config,
            game,
            audio,
            tick,
            window: None,
            renderer: None,
            gui: None,
            cursor: Vec2::ZERO,
            last_frame: Instant::now(),
        }
    }

    /// Window rectangle minus the HUD strip, in logical points.
    fn playable_bounds(&self, window: &Window) -> Rect {
        let scale = window.scale_factor() as f32;
        let size = window.inner_size();
        let width = size.width as f32 / scale;
        let height = size.height as f32 / scale;
        let margin = self.config.hud_margin.min(height);
        Rect::new(0.0, margin, width, height - margin)
    }

    fn apply_feedback(&self, feedback: Option<Feedback>) {
        match feedback {
            Some(Feedback::Hit) => self.audio.play_hit(),
            Some(Feedback::RoundEnd) => self.audio.play_round_end(),
            None => {}
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(renderer), Some(gui)) = (
            self.window.clone(),
            self.renderer.as_mut(),
            self.gui.as_mut(),
        ) else {
            return;
        };

        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.game.phase == Phase::Playing {
            self.tick.accumulate(delta);
            while self.tick.should_step() {
                if self.game.handle_tick() == Some(Feedback::RoundEnd) {
                    self.audio.play_round_end();
                    // Tick source stops with the round; leftover time must
                    // not count against the next one.
                    self.tick.reset();
                    break;
                }
            }
        }

        let frame = gui.run_frame(&window, renderer.size, &self.game);
        match frame.action {
            Some(GuiAction::Restart) => {
                self.game.restart();
                self.tick.reset();
            }
            Some(GuiAction::Quit) => {
                tracing::info!("player chose quit");
                event_loop.exit();
                return;
            }
            None => {}
        }

        for (id, image_delta) in &frame.textures_delta.set {
            gui.renderer
                .update_texture(renderer.device(), renderer.queue(), *id, image_delta);
        }

        let result = renderer.render(
            window.scale_factor() as f32,
            self.game.target,
            self.game.radius(),
            &mut gui.renderer,
            &frame.primitives,
            &frame.screen_descriptor,
        );

        for id in &frame.textures_delta.free {
            gui.renderer.free_texture(id);
        }

        match result {
            Ok(()) => {}
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                renderer.resize(window.inner_size());
            }
            Err(SurfaceError::OutOfMemory) => {
                tracing::error!("GPU out of memory, shutting down");
                event_loop.exit();
            }
            Err(err) => {
                tracing::warn!(%err, "surface error, retrying next frame");
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.config.app_name.clone())
            .with_resizable(false)
            .with_inner_size(LogicalSize::new(
                self.config.window_width as f64,
                self.config.window_height as f64,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                tracing::error!(%err, "failed to create window");
                event_loop.exit();
                return;
            }
        };

        let resources = ResourceManager::load(&self.config.background_path);
        let renderer =
            match pollster::block_on(Renderer::new(window.clone(), resources.background())) {
                Ok(renderer) => renderer,
                Err(err) => {
                    tracing::error!(%err, "failed to initialize renderer");
                    event_loop.exit();
                    return;
                }
            };
        tracing::info!("renderer initialized");

        let gui = Gui::new(&window, renderer.device(), renderer.surface_format());

        self.game.set_bounds(self.playable_bounds(&window));
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.gui = Some(gui);
        self.last_frame = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        if let Some(gui) = self.gui.as_mut() {
            gui.on_window_event(&window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size);
                }
                let bounds = self.playable_bounds(&window);
                self.game.set_bounds(bounds);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(window.scale_factor());
                self.cursor = Vec2::new(logical.x, logical.y);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let gui_claims_pointer = self.gui.as_ref().is_some_and(Gui::wants_pointer);
                if !gui_claims_pointer {
                    let feedback = self.game.handle_click(self.cursor);
                    self.apply_feedback(feedback);
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}
