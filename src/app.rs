//! The egui front-end.
//!
//! Renders the latest [`GameState`] snapshot and forwards user intents (cell
//! clicks, new-game, reset, VIP activation) into the engine. The app owns no
//! game logic; every event handler replaces `self.game` with whatever the
//! engine transition returns.

use eframe::{App, Frame, egui};
use egui::{Color32, RichText};
use std::time::Duration;

use crate::clock::{SessionClock, format_time};
use crate::game::{GameState, Player};

/// Timer display turns red at or below this many seconds
const TIMER_WARN_SECS: u32 = 60;

const AMBER: Color32 = Color32::from_rgb(253, 187, 45);
const X_COLOR: Color32 = Color32::from_rgb(231, 76, 60);
const O_COLOR: Color32 = Color32::from_rgb(52, 152, 219);
const BANNER_RED: Color32 = Color32::from_rgb(192, 57, 43);

/// The main eframe app struct
pub struct TicTacVipApp {
    /// Latest engine snapshot; replaced on every accepted intent or tick
    pub game: GameState,
    /// Contents of the VIP code text field
    pub vip_code_input: String,
    // Drives one engine tick per elapsed wall-clock second
    clock: SessionClock,
}

impl Default for TicTacVipApp {
    fn default() -> Self {
        Self {
            game: GameState::new(),
            vip_code_input: String::new(),
            clock: SessionClock::new(),
        }
    }
}

impl App for TicTacVipApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        for _ in 0..self.clock.due_ticks() {
            self.game = self.game.tick();
        }
        // Keep ticking even while no input events arrive
        ctx.request_repaint_after(Duration::from_millis(250));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    self.show_header(ui);
                    ui.add_space(14.0);
                    self.show_timer_section(ui);
                    ui.add_space(14.0);
                    self.show_vip_section(ui);
                    ui.add_space(14.0);
                    ui.label(RichText::new(&self.game.status).size(20.0).strong());
                    ui.add_space(14.0);
                    self.show_board(ui);
                    ui.add_space(14.0);
                    self.show_controls(ui);
                    if self.game.locked {
                        ui.add_space(14.0);
                        self.show_locked_banner(ui);
                    }
                });
            });
        });
    }
}

impl TicTacVipApp {
    fn show_header(&self, ui: &mut egui::Ui) {
        ui.heading(RichText::new("Tic Tac Toe").size(28.0).strong());
        ui.label("VIP Edition - Play without limits!");
    }

    fn show_timer_section(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Game Timer").size(20.0).strong());
        let color = if self.game.time_left <= TIMER_WARN_SECS {
            Color32::RED
        } else {
            AMBER
        };
        ui.label(
            RichText::new(format_time(self.game.time_left))
                .monospace()
                .size(40.0)
                .strong()
                .color(color),
        );
        ui.label("Time remaining in your session");
    }

    fn show_vip_section(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("VIP Access").size(18.0).strong());
        ui.label("Enter your VIP code to unlock unlimited play");
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.vip_code_input)
                    .hint_text("Enter VIP code"),
            );
            if ui.button("Activate VIP").clicked() {
                self.game = self.game.activate_vip(&self.vip_code_input);
                self.vip_code_input.clear();
            }
        });
        if !self.game.vip_status.is_empty() {
            ui.label(RichText::new(&self.game.vip_status).strong().color(AMBER));
        }
    }

    fn show_board(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("game_board")
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for row in 0..3 {
                    for col in 0..3 {
                        let index = row * 3 + col;
                        let (mark, color) = match self.game.board[index] {
                            Some(Player::X) => ("X", X_COLOR),
                            Some(Player::O) => ("O", O_COLOR),
                            None => ("", Color32::WHITE),
                        };
                        let cell = egui::Button::new(
                            RichText::new(mark).size(36.0).strong().color(color),
                        )
                        .min_size(egui::vec2(72.0, 72.0));
                        if ui.add(cell).clicked() {
                            self.game = self.game.make_move(index);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button(RichText::new("New Game").size(16.0)).clicked() {
                self.game = self.game.new_game();
            }
            if ui.button(RichText::new("Reset Game").size(16.0)).clicked() {
                self.game = self.game.reset_game();
            }
        });
    }

    fn show_locked_banner(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(BANNER_RED)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Game Locked!")
                            .size(18.0)
                            .strong()
                            .color(Color32::WHITE),
                    );
                    ui.label(
                        RichText::new(
                            "Your free session has ended. Please enter a VIP code to \
                             continue playing.",
                        )
                        .color(Color32::WHITE),
                    );
                });
            });
    }
}
