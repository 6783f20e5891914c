//! Main application for the Reversi GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::config::AppConfig;
use crate::{Outcome, Stone};

/// Main Reversi application
pub struct ReversiApp {
    state: GameState,
    board_view: BoardView,
}

impl ReversiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (play Black)").clicked() {
                        self.state.restart_as(Stone::Black);
                        ui.close_menu();
                    }
                    if ui.button("New Game (play White)").clicked() {
                        self.state.restart_as(Stone::White);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.board_view.show_legal_moves, "Legal Moves (L)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("You: {}", self.state.human_color()));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);

                if let Some(outcome) = self.state.game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &outcome);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("REVERSI").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();
            let (fill, ink) = match turn {
                Stone::White => (WHITE_STONE, BLACK_STONE),
                _ => (BLACK_STONE, WHITE_STONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, fill);
                ui.painter().circle_stroke(rect.center(), 20.0, egui::Stroke::new(1.0, ink));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(turn.name().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let (status, color) = if self.state.game_over().is_some() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        (format!("AI thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_THINKING)
                    } else if self.state.is_human_turn() {
                        let waited = self.state.move_timer.elapsed().as_secs_f32();
                        (format!("Your turn {waited:.0}s"), STATUS_YOUR_TURN)
                    } else {
                        ("Waiting".to_string(), TEXT_MUTED)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    /// Stone counts for both colors
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STONES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let board = self.state.board();
            for stone in [Stone::Black, Stone::White] {
                let who = if stone == self.state.human_color() { "You" } else { "AI" };
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("{stone} ({who})")).size(13.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(board.count(stone).to_string())
                                .size(16.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                    });
                });
            }

            if let Some(last) = self.state.move_timer.last_move_duration {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last move: {} ms", last.as_millis()))
                        .size(11.0)
                        .color(TEXT_MUTED),
                );
            }
            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI move: {} ms", ai_time.as_millis()))
                        .size(11.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: &Outcome) {
        Self::card_frame().show(ui, |ui| {
            let headline = match outcome.winner() {
                Some(color) if color == self.state.human_color() => "YOU WIN",
                Some(_) => "AI WINS",
                None => "DRAW",
            };
            ui.label(RichText::new(headline).size(20.0).strong().color(WIN_HIGHLIGHT));
            ui.label(RichText::new(outcome.to_string()).size(12.0).color(TEXT_SECONDARY));
            ui.add_space(8.0);

            if ui.button(RichText::new("New Game").size(14.0)).clicked() {
                self.state.reset();
            }
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board and forward clicks to the session
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let clicked = self.board_view.show(ui, &self.state);

            if let Some(pos) = clicked {
                if let Err(err) = self.state.attempt_move(pos.row as usize, pos.col as usize) {
                    log::debug!("move at {pos} rejected: {err}");
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // L - Toggle legal move dots
            if i.key_pressed(egui::Key::L) {
                self.board_view.show_legal_moves = !self.board_view.show_legal_moves;
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for ReversiApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Collect a finished AI move and schedule the next one
        self.state.tick();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling while the AI thinks
        if self.state.is_ai_thinking() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else if self.state.is_human_turn() {
            // Turn clock in the side panel
            ctx.request_repaint_after(Duration::from_millis(500));
        }
    }
}
