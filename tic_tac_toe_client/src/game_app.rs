use crate::config::ClientConfig;
use crate::presenter::{Confetti, Screen, Status, ViewState};

use eframe::egui;
use tic_tac_toe_engine::{GameEngine, Mark, BOARD_SIZE};
use tracing::debug;

const CELL_SIZE: f32 = 100.0;
const X_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 99, 71);
const O_COLOR: egui::Color32 = egui::Color32::from_rgb(34, 139, 34);
const WIN_FILL: egui::Color32 = egui::Color32::from_rgb(70, 60, 20);
const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(245, 158, 11);

fn mark_color(mark: Mark) -> egui::Color32 {
    match mark {
        Mark::X => X_COLOR,
        Mark::O => O_COLOR,
    }
}

pub struct GameApp {
    engine: GameEngine,
    view: ViewState,
    confetti: Confetti,
    confetti_particles: usize,
    input_name_x: String,
    input_name_o: String,
}

impl GameApp {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            engine: GameEngine::default(),
            view: ViewState::default(),
            confetti: Confetti::default(),
            confetti_particles: config.confetti_particles,
            input_name_x: config.player_x.clone(),
            input_name_o: config.player_o.clone(),
        }
    }

    /// Feeds queued engine notifications into the view. Returns whether
    /// anything changed.
    fn drain_events(&mut self, ctx: &egui::Context) -> bool {
        let events: Vec<_> = self.engine.sink_mut().drain(..).collect();
        for event in &events {
            debug!("Applying {:?}", event);
            self.view.apply(event);
        }

        if self.view.take_celebration() {
            let screen = ctx.screen_rect();
            let origin = egui::pos2(screen.center().x, screen.top() + screen.height() * 0.6);
            self.confetti
                .burst(origin, self.confetti_particles, &mut rand::thread_rng());
            debug!("Confetti burst: {} particles live", self.confetti.len());
        }

        !events.is_empty()
    }

    fn render_name_entry(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.group(|ui| {
                ui.set_width(360.0);

                ui.heading("Tic-Tac-Toe");
                ui.add_space(10.0);

                ui.label("Player X:");
                ui.add_space(3.0);
                ui.text_edit_singleline(&mut self.input_name_x);
                ui.add_space(10.0);

                ui.label("Player O:");
                ui.add_space(3.0);
                ui.text_edit_singleline(&mut self.input_name_o);
                ui.add_space(10.0);

                if ui
                    .add(egui::Button::new("Start Game").min_size(egui::vec2(100.0, 30.0)))
                    .clicked()
                {
                    self.engine
                        .start_session(&self.input_name_x, &self.input_name_o);
                }
            });
        });
    }

    fn render_game(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            self.render_scoreboard(ui);
            ui.add_space(10.0);

            if let Some(text) = self.view.status_text() {
                let color = match self.view.status {
                    Some(Status::Won { .. }) => egui::Color32::from_rgb(255, 215, 0),
                    Some(Status::Draw) => egui::Color32::LIGHT_GRAY,
                    _ => egui::Color32::from_rgb(0, 191, 255),
                };
                ui.label(egui::RichText::new(text).size(26.0).color(color));
            }
            ui.add_space(10.0);

            self.render_board(ui);
            ui.add_space(15.0);

            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - 230.0).max(0.0) / 2.0);
                if ui
                    .add(egui::Button::new("🔄 Restart Round").min_size(egui::vec2(110.0, 30.0)))
                    .clicked()
                {
                    self.engine.start_round();
                }
                if ui
                    .add(egui::Button::new("New Game").min_size(egui::vec2(110.0, 30.0)))
                    .clicked()
                {
                    self.engine.end_session();
                }
            });
        });
    }

    fn render_scoreboard(&self, ui: &mut egui::Ui) {
        let active = self.view.active_turn();

        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - 320.0).max(0.0) / 2.0);
            for mark in [Mark::X, Mark::O] {
                let text = format!("{} ({})  {}", self.view.name(mark), mark, self.view.score(mark));
                let mut label = egui::RichText::new(text).size(22.0).color(mark_color(mark));
                if active == Some(mark) {
                    label = label.strong().underline();
                }
                ui.label(label);
                ui.add_space(30.0);
            }
        });
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let board = *self.engine.board();
        let round_active = self.engine.is_round_active();
        let winning_line = self.view.winning_line;
        let mut cell_rects = [egui::Rect::NOTHING; BOARD_SIZE];

        for row in 0..3 {
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - 3.0 * CELL_SIZE).max(0.0) / 2.0);
                for col in 0..3 {
                    let index = row * 3 + col;
                    let cell = board.get(index);
                    let can_move = round_active && cell.is_none();

                    let text = match cell {
                        Some(mark) => egui::RichText::new(mark.symbol())
                            .size(50.0)
                            .color(mark_color(mark)),
                        None => egui::RichText::new(" ").size(50.0),
                    };
                    let mut button =
                        egui::Button::new(text).min_size(egui::vec2(CELL_SIZE, CELL_SIZE));
                    if winning_line.is_some_and(|line| line.contains(index)) {
                        button = button.fill(WIN_FILL);
                    }

                    let response = ui.add_enabled(can_move, button);
                    cell_rects[index] = response.rect;

                    if response.clicked() {
                        if let Err(e) = self.engine.place_mark(index) {
                            debug!("Ignored click on cell {}: {}", index, e);
                        }
                    }
                }
            });
        }

        if let Some(line) = winning_line {
            let start = cell_rects[line.start()].center();
            let end = cell_rects[line.end()].center();
            ui.painter()
                .line_segment([start, end], egui::Stroke::new(6.0, LINE_COLOR));
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| match self.view.screen {
            Screen::NameEntry => self.render_name_entry(ui),
            Screen::Game => self.render_game(ui),
        });

        if self.drain_events(ctx) {
            ctx.request_repaint();
        }

        if self.confetti.is_active() {
            let dt = ctx.input(|i| i.stable_dt).min(0.1);
            self.confetti.step(dt);
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("confetti"),
            ));
            self.confetti.paint(&painter);
            ctx.request_repaint();
        }
    }
}
