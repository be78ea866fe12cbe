//! Main application for the Pentaroll GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use std::time::Instant;

use crate::board::{Direction, Marble, Pos};
use crate::game::{GameController, GameEvent, GameMode, GameOutcome, Phase};
use crate::rules::find_winning_line;

use super::board_view::BoardView;
use super::theme::*;

/// Main Pentaroll application
pub struct PentarollApp {
    controller: GameController,
    board_view: BoardView,
    /// Corner marble awaiting a push direction
    pending_choice: Option<(Pos, Vec<Direction>)>,
    /// Latest rejected-move message, cleared on the next accepted move
    message: Option<String>,
    show_debug: bool,
}

impl Default for PentarollApp {
    fn default() -> Self {
        Self {
            controller: GameController::new(GameMode::PvC),
            board_view: BoardView::default(),
            pending_choice: None,
            message: None,
            show_debug: true,
        }
    }
}

impl PentarollApp {
    /// Create a new app with the default mode
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self, mode: GameMode) {
        self.controller.reset(mode);
        self.pending_choice = None;
        self.message = None;
    }

    /// Apply pending controller events to the view state
    fn drain_events(&mut self) {
        while let Some(event) = self.controller.poll_event() {
            match event {
                GameEvent::BoardChanged(_) => {
                    self.pending_choice = None;
                    self.message = None;
                }
                GameEvent::TurnChanged(_) => {}
                GameEvent::GameOver(_) => {
                    self.pending_choice = None;
                }
                GameEvent::DirectionChoiceNeeded { pos, directions } => {
                    self.pending_choice = Some((pos, directions));
                }
            }
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs CPU)").clicked() {
                        self.new_game(GameMode::PvC);
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.controller.mode() {
                        GameMode::PvC => "vs CPU - You: Red",
                        GameMode::PvP => "PvP - Hotseat",
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_moves_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.controller.outcome() {
                    if self.controller.is_over() {
                        ui.add_space(10.0);
                        self.render_game_over_card(ui, outcome);
                    }
                }

                if let Some((pos, _)) = &self.pending_choice {
                    ui.add_space(10.0);
                    let msg = format!(
                        "Pick a push direction for the marble at {}{}",
                        (b'A' + pos.col) as char,
                        pos.row + 1
                    );
                    self.render_message_card(ui, &msg);
                } else if let Some(msg) = self.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●").size(20.0).color(RED_MARBLE));
            ui.label(RichText::new("●").size(20.0).color(GREEN_MARBLE));
            ui.add_space(4.0);
            ui.label(RichText::new("PENTAROLL").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("place, push, five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_red = self.controller.current_player() == Marble::Red;
            let (color_name, accent) = if is_red {
                ("RED", RED_MARBLE)
            } else {
                ("GREEN", GREEN_MARBLE)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, accent);

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.controller.is_over() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if matches!(self.controller.phase(), Phase::AiThinking { .. }) {
                        ("CPU is thinking...", STATUS_WAIT)
                    } else if matches!(self.controller.phase(), Phase::Resolving { .. }) {
                        ("Moving...", STATUS_WAIT)
                    } else if self.controller.is_ai_turn() {
                        ("CPU's turn", STATUS_WAIT)
                    } else {
                        ("Your turn", STATUS_GOOD)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render move counter card
    fn render_moves_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("{}", self.controller.move_count()))
                    .size(24.0)
                    .color(TEXT_PRIMARY),
            );
        });
    }

    /// Render debug card with the last CPU search
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("CPU DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = self.controller.last_ai_result() {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{:?}", result.search_type))
                                    .size(11.0)
                                    .strong()
                                    .color(STATUS_GOOD),
                            );
                            ui.label(
                                RichText::new(format!("Score: {}", result.score))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(format!("{}ms", result.time_ms))
                                        .size(10.0)
                                        .color(TEXT_SECONDARY),
                                );
                                ui.label(
                                    RichText::new(format!("{} candidates", result.candidates))
                                        .size(10.0)
                                        .color(TEXT_MUTED),
                                );
                            });
                        });
                    });

                    if let Some(mv) = result.best_move {
                        let pos = mv.pos();
                        let cell = format!("{}{}", (b'A' + pos.col) as char, pos.row + 1);
                        let text = match mv {
                            crate::rules::Move::Place(_) => format!("→ place {}", cell),
                            crate::rules::Move::Push(_, dir) => {
                                format!("→ push {} {}", cell, dir.arrow())
                            }
                        };
                        ui.add_space(4.0);
                        ui.label(RichText::new(text).size(12.0).strong().color(WIN_HIGHLIGHT));
                    }
                } else {
                    ui.label(RichText::new("No CPU move yet").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let (headline, accent) = match outcome {
            GameOutcome::Winner(Marble::Red) => ("RED WINS!", RED_MARBLE),
            GameOutcome::Winner(_) => ("GREEN WINS!", GREEN_MARBLE),
            GameOutcome::Draw => ("DRAW", TEXT_SECONDARY),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(20.0).strong().color(accent));

                    if outcome == GameOutcome::Draw {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new("every edge cell is full")
                                .size(11.0)
                                .color(TEXT_SECONDARY),
                        );
                    }

                    ui.add_space(12.0);

                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        let mode = self.controller.mode();
                        self.new_game(mode);
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let winning_line = if self.controller.is_over() {
                find_winning_line(self.controller.board()).map(|(_, line)| line)
            } else {
                None
            };

            let pending = self
                .pending_choice
                .as_ref()
                .map(|(pos, dirs)| (*pos, dirs.as_slice()));

            let response = self.board_view.show(
                ui,
                self.controller.board(),
                self.controller.current_player(),
                self.controller.last_move().map(|mv| mv.pos()),
                pending,
                winning_line,
                self.controller.accepting_input(),
            );

            if let Some(dir) = response.clicked_direction {
                if let Some((pos, _)) = self.pending_choice.take() {
                    if let Err(msg) = self.controller.submit_push(pos, dir) {
                        self.message = Some(msg);
                    }
                }
            } else if let Some(pos) = response.clicked_cell {
                if self.pending_choice.take().is_none() {
                    if let Err(msg) = self.controller.select_cell(pos) {
                        self.message = Some(msg);
                    }
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // N - New game in the current mode
            if i.key_pressed(egui::Key::N) {
                let mode = self.controller.mode();
                self.new_game(mode);
            }

            // Escape - cancel a pending direction choice
            if i.key_pressed(egui::Key::Escape) {
                self.pending_choice = None;
            }
        });
    }
}

impl eframe::App for PentarollApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Keyboard input
        self.handle_input(ctx);

        // Advance the turn machine and pick up its notifications
        self.controller.tick(Instant::now());
        self.drain_events();

        // Render UI
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep animating while a move resolves or the CPU is thinking
        if matches!(
            self.controller.phase(),
            Phase::Resolving { .. } | Phase::AiThinking { .. }
        ) {
            ctx.request_repaint();
        }
    }
}
