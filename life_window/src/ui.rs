// ui.rs - Draws published snapshots and forwards clicks and keys to the tick loop

use eframe::egui;
use egui::{Color32, Rect, Vec2};
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, watch};

use life_sim::config::BACKGROUND_RGB;
use life_sim::{Input, RunState, SimConfig, Snapshot};

pub struct LifeWindow {
    config: SimConfig,
    inputs: mpsc::UnboundedSender<Input>,
    snapshots: watch::Receiver<Snapshot>,
    live_color: Color32,
    dead_color: Color32,
    background: Color32,
    _runtime: Runtime,    // Owns the tick loop task; dropped with the window
}

impl LifeWindow {
    pub fn new(
        config: SimConfig,
        inputs: mpsc::UnboundedSender<Input>,
        snapshots: watch::Receiver<Snapshot>,
        runtime: Runtime,
    ) -> Self {
        let [r, g, b] = BACKGROUND_RGB;
        Self {
            config,
            inputs,
            snapshots,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            background: Color32::from_rgb(r, g, b),
            _runtime: runtime,
        }
    }

    /// Forwards one input and asks for a frame so the change shows up
    /// without waiting for the next tick.
    fn send(&self, ctx: &egui::Context, input: Input) {
        if self.inputs.send(input).is_err() {
            log::debug!("Tick loop has stopped, dropping {:?}", input);
            return;
        }
        ctx.request_repaint();
    }
}

impl eframe::App for LifeWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (toggle_pause, reset) = ctx.input(|i| {
            (i.key_pressed(egui::Key::Space), i.key_pressed(egui::Key::R))
        });
        if toggle_pause {
            self.send(ctx, Input::TogglePause);
        }
        if reset {
            self.send(ctx, Input::Reset);
        }

        let snapshot = self.snapshots.borrow_and_update().clone();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", snapshot.generation));
                ui.separator();
                ui.label(format!("Live cells: {}", snapshot.grid.population()));
                ui.separator();
                ui.label(match snapshot.state {
                    RunState::Paused => "⏸ Paused (Space to run, R to clear)",
                    RunState::Running => "▶ Running",
                });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.background))
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| {
                    let total_size = Vec2::splat(self.config.canvas_extent());
                    let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
                    let origin = response.rect.min;
                    let visible = painter.clip_rect();

                    for cell in snapshot.grid.cells() {
                        let (x, y) = self.config.cell_origin(cell.x, cell.y);
                        let rect = Rect::from_min_size(
                            origin + Vec2::new(x, y),
                            Vec2::splat(self.config.cell_size),
                        );
                        if !visible.intersects(rect) {
                            continue;
                        }

                        let cell_color = if cell.alive { self.live_color } else { self.dead_color };
                        painter.rect_filled(rect, 0.0, cell_color);
                    }

                    if response.clicked() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            let local = pos - origin;
                            if let Some((x, y)) = self.config.cell_at(local.x, local.y) {
                                self.send(ctx, Input::Click { x, y });
                            }
                        }
                    }
                });
            });

        // Snapshots arrive from another thread; poll at the tick rate
        ctx.request_repaint_after(self.config.tick_interval);
    }
}
