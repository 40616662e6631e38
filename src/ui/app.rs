//! Main application for the GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::warn;

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::{GameConfig, Outcome};

/// Which screen is showing
enum Screen {
    /// Size field and first-move checkbox
    Start {
        size_input: String,
        human_first: bool,
        error: Option<String>,
    },
    Playing(Box<GameState>),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Start {
            size_input: "3".to_string(),
            human_first: true,
            error: None,
        }
    }
}

/// Main application
#[derive(Default)]
pub struct MnkApp {
    screen: Screen,
    board_view: BoardView,
    show_debug: bool,
}

impl MnkApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the start screen; returns a game to begin, if requested
    fn render_start_screen(
        ctx: &Context,
        size_input: &mut String,
        human_first: &mut bool,
        error: &mut Option<String>,
    ) -> Option<GameState> {
        let mut started = None;
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("M,N,K").size(28.0).strong());
                ui.label(
                    RichText::new("Get k in a row on an n×n board")
                        .size(12.0)
                        .color(TEXT_MUTED),
                );
                ui.add_space(24.0);

                ui.horizontal(|ui| {
                    ui.label("Board size:");
                    ui.text_edit_singleline(size_input);
                });
                ui.checkbox(human_first, "I move first (X)");
                ui.add_space(12.0);

                if ui.button("Start").clicked() {
                    match GameConfig::from_input(size_input, *human_first) {
                        Ok(config) => match GameState::new(config) {
                            Ok(state) => {
                                *error = None;
                                started = Some(state);
                            }
                            Err(e) => *error = Some(e.to_string()),
                        },
                        Err(e) => {
                            warn!(input = %size_input, error = %e, "rejected board size");
                            *error = Some(e.to_string());
                        }
                    }
                }

                if let Some(msg) = error {
                    ui.add_space(8.0);
                    ui.label(RichText::new(msg.as_str()).color(STATUS_ERROR));
                }
            });
        });
        started
    }

    /// Render the top menu bar; returns true when a new game was requested
    fn render_menu_bar(ctx: &Context, show_debug: &mut bool) -> bool {
        let mut new_game = false;
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        new_game = true;
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(show_debug, "Debug Panel (D)");
                });
            });
        });
        new_game
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(ctx: &Context, state: &GameState, show_debug: bool) -> bool {
        let mut new_game = false;
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                Self::render_turn_card(ui, state);
                ui.add_space(10.0);
                Self::render_settings_card(ui, state);

                if show_debug {
                    ui.add_space(10.0);
                    Self::render_debug_card(ui, state);
                }

                if state.is_game_over() {
                    ui.add_space(10.0);
                    new_game = Self::render_game_over_card(ui, state);
                }

                if let Some(msg) = &state.message {
                    ui.add_space(10.0);
                    ui.label(RichText::new(msg.as_str()).size(11.0).color(STATUS_ERROR));
                }
            });
        new_game
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render turn indicator card
    fn render_turn_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            let mark = state.current_turn;
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(mark.symbol())
                        .size(32.0)
                        .strong()
                        .color(mark_color(mark).unwrap_or(TEXT_PRIMARY)),
                );
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    let who = if mark == state.human_mark() { "YOU" } else { "ENGINE" };
                    ui.label(RichText::new(who).size(16.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if state.is_ai_thinking() {
                        let secs = state.ai_thinking_elapsed().map_or(0.0, |d| d.as_secs_f32());
                        (format!("Thinking... {secs:.1}s"), STATUS_BUSY)
                    } else if state.is_game_over() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else {
                        ("Your turn".to_string(), STATUS_READY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    /// Render game settings card
    fn render_settings_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("GAME").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            let c = &state.config;
            let rules = format!("{0}×{0} board, {1} in a row", c.size, c.run);
            ui.label(RichText::new(rules).size(12.0).color(TEXT_PRIMARY));
            let depth = format!("Search: {}", c.depth);
            ui.label(RichText::new(depth).size(11.0).color(TEXT_SECONDARY));
            let moves = format!("Move #{}", state.move_count);
            ui.label(RichText::new(moves).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Render debug card
    fn render_debug_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ENGINE DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(result) = &state.last_ai_result {
                let small = |text: String| RichText::new(text).size(10.0).color(TEXT_SECONDARY);
                ui.label(small(format!("Score: {}", result.score)));
                ui.label(small(format!("{} nodes", result.nodes)));
                if let Some(time) = state.ai_thinking_time {
                    ui.label(small(format!("{:.3}s", time.as_secs_f32())));
                }
                if let Some(pos) = result.best_move {
                    ui.label(
                        RichText::new(format!("→ {pos}"))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
            } else {
                ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
            }
            let eval = format!("Eval: {}", state.engine.evaluate());
            ui.label(RichText::new(eval).size(10.0).color(TEXT_SECONDARY));
        });
    }

    /// Render game over card; returns true when "New Game" is clicked
    fn render_game_over_card(ui: &mut egui::Ui, state: &GameState) -> bool {
        let (header, text) = match state.outcome {
            Outcome::Draw => ("Keep calm...", "It's a Draw!"),
            outcome if outcome.winner() == Some(state.human_mark()) => {
                ("Congratulations!", "You Win!")
            }
            _ => ("The game you just can't win.", "You Lose!"),
        };

        let mut clicked = false;
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(header).size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(text).size(20.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        clicked = true;
                    }
                });
            });
        clicked
    }

    /// Render the main board
    fn render_board(ctx: &Context, board_view: &mut BoardView, state: &mut GameState) {
        CentralPanel::default().show(ctx, |ui| {
            let accept_input =
                state.is_human_turn() && !state.is_ai_thinking() && !state.is_game_over();

            let clicked = board_view.show(
                ui,
                state.engine.board(),
                state.last_move,
                state.winning_line.as_deref(),
                accept_input,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = state.try_place_mark(pos) {
                    warn!(%pos, %msg, "move rejected");
                    state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, new_game) =
            ctx.input(|i| (i.key_pressed(egui::Key::D), i.key_pressed(egui::Key::N)));
        // Shortcuts only apply in game; the start screen has a text field
        if let Screen::Playing(_) = self.screen {
            if toggle_debug {
                self.show_debug = !self.show_debug;
            }
            if new_game {
                self.screen = Screen::default();
            }
        }
    }
}

impl eframe::App for MnkApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let Self { screen, board_view, show_debug } = self;
        let next = match screen {
            Screen::Start { size_input, human_first, error } => {
                Self::render_start_screen(ctx, size_input, human_first, error)
                    .map(|state| Screen::Playing(Box::new(state)))
            }
            Screen::Playing(state) => {
                let mut new_game = Self::render_menu_bar(ctx, show_debug);

                state.check_ai_result();
                if state.is_ai_turn() && !state.is_ai_thinking() && !state.is_game_over() {
                    state.start_ai_thinking();
                }

                new_game |= Self::render_side_panel(ctx, state, *show_debug);
                Self::render_board(ctx, board_view, state);

                if state.is_ai_thinking() {
                    ctx.request_repaint();
                }

                new_game.then(Screen::default)
            }
        };

        if let Some(next) = next {
            self.screen = next;
        }
    }
}
