use egui_wgpu::Renderer as EguiRenderer;
use egui_winit::State as EguiState;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::game::CatchGame;
use crate::game::states::Phase;

/// What the player chose on the round-over dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiAction {
    Restart,
    Quit,
}

pub struct GuiFrame {
    pub primitives: Vec<egui::ClippedPrimitive>,
    pub screen_descriptor: egui_wgpu::ScreenDescriptor,
    pub textures_delta: egui::TexturesDelta,
    pub action: Option<GuiAction>,
}

/// HUD text and the round-over dialog, drawn with egui over the scene pass.
pub struct Gui {
    ctx: egui::Context,
    state: EguiState,
    pub renderer: EguiRenderer,
}

impl Gui {
    pub fn new(window: &Window, device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let ctx = egui::Context::default();
        let state = EguiState::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            Some(2048),
        );
        let renderer = EguiRenderer::new(device, format, egui_wgpu::RendererOptions::default());
        Self {
            ctx,
            state,
            renderer,
        }
    }

    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) {
        let _ = self.state.on_window_event(window, event);
    }

    pub fn wants_pointer(&self) -> bool {
        self.ctx.wants_pointer_input()
    }

    pub fn run_frame(
        &mut self,
        window: &Window,
        size: winit::dpi::PhysicalSize<u32>,
        game: &CatchGame,
    ) -> GuiFrame {
        let mut action = None;
        let raw_input = self.state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, |ctx| {
            Self::hud(ctx, game);
            if game.phase == Phase::Over {
                action = Self::game_over_dialog(ctx, game);
            }
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);
        let primitives = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        GuiFrame {
            primitives,
            screen_descriptor,
            textures_delta: full_output.textures_delta,
            action,
        }
    }

    fn hud(ctx: &egui::Context, game: &CatchGame) {
        let label = |text: String| {
            egui::RichText::new(text)
                .color(egui::Color32::WHITE)
                .strong()
                .size(18.0)
        };
        egui::Area::new(egui::Id::new("hud-score"))
            .fixed_pos(egui::pos2(20.0, 12.0))
            .show(ctx, |ui| {
                ui.label(label(format!("Score: {}", game.score)));
            });
        egui::Area::new(egui::Id::new("hud-best"))
            .fixed_pos(egui::pos2(230.0, 12.0))
            .show(ctx, |ui| {
                ui.label(label(format!("High Score: {}", game.best_score)));
            });
        egui::Area::new(egui::Id::new("hud-time"))
            .fixed_pos(egui::pos2(450.0, 12.0))
            .show(ctx, |ui| {
                ui.label(label(format!("Time Left: {}s", game.time_left)));
            });
    }

    fn game_over_dialog(ctx: &egui::Context, game: &CatchGame) -> Option<GuiAction> {
        egui::Area::new(egui::Id::new("game-over-banner"))
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, -100.0))
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("Game Over!")
                        .color(egui::Color32::YELLOW)
                        .strong()
                        .size(32.0),
                );
            });

        let mut action = None;
        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 20.0))
            .show(ctx, |ui| {
                if game.new_best {
                    ui.label(
                        egui::RichText::new("NEW HIGH SCORE!")
                            .color(egui::Color32::GOLD)
                            .strong(),
                    );
                }
                ui.label(format!(
                    "{}, your score is: {}",
                    game.player_name, game.score
                ));
                ui.label("Play again?");
                ui.horizontal(|ui| {
                    if ui.button("Play again").clicked() {
                        action = Some(GuiAction::Restart);
                    }
                    if ui.button("Quit").clicked() {
                        action = Some(GuiAction::Quit);
                    }
                });
            });
        action
    }
}
