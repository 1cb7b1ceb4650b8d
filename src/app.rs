//! eframe application shell: button wiring, status labels, and the per-frame
//! glue between the refresh controller, the fetch pipeline and the map view.

use std::sync::mpsc::{Receiver, Sender};
use std::time::Instant;

use egui::Color32;

use crate::controller::{CycleId, RefreshController, ServerStatus};
use crate::fetch::{self, CycleOutcome};
use crate::map_view::MapView;
use crate::points::{PointStore, ScreenOrigin};

pub struct GridMapApp {
    store: PointStore,
    view: MapView,
    controller: RefreshController,
    status: ServerStatus,
    outcome_tx: Sender<CycleOutcome>,
    outcome_rx: Receiver<CycleOutcome>,
    /// Canvas size from the previous frame; the origin handed to the next
    /// fetch cycle derives from it.
    canvas_size: egui::Vec2,
    show_about: bool,
}

impl GridMapApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let (outcome_tx, outcome_rx) = std::sync::mpsc::channel();
        Self {
            store: PointStore::new(),
            view: MapView::new(),
            // Auto mode on, with the startup fetch due immediately.
            controller: RefreshController::new(Instant::now()),
            status: ServerStatus::Idle,
            outcome_tx,
            outcome_rx,
            canvas_size: egui::Vec2::ZERO,
            show_about: false,
        }
    }

    /// Kick off one background fetch cycle. The "communicating" status is
    /// set here, before any I/O happens.
    fn start_cycle(&mut self, ctx: &egui::Context, cycle: CycleId) {
        self.status = ServerStatus::Communicating;
        let origin = ScreenOrigin::from_canvas_size(self.canvas_size.x, self.canvas_size.y);
        fetch::spawn_fetch(cycle, origin, self.outcome_tx.clone(), ctx.clone());
    }

    /// Apply finished cycles. Only the latest started cycle may touch the
    /// store; stale outcomes (superseded by a manual trigger or toggle) are
    /// dropped. Parse failures follow the same path as network failures:
    /// the previous point set stays on screen and the timer still re-arms.
    fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            if !self.controller.cycle_complete(outcome.cycle, Instant::now()) {
                log::debug!("dropping stale fetch cycle {}", outcome.cycle);
                continue;
            }
            match outcome.result {
                Ok(points) => {
                    log::info!(
                        "fetch cycle {} delivered {} points",
                        outcome.cycle,
                        points.len()
                    );
                    self.store.replace(points, outcome.origin);
                    self.status = ServerStatus::Idle;
                }
                Err(err) => {
                    log::warn!("fetch cycle {} failed: {err}", outcome.cycle);
                    self.status = ServerStatus::Trouble;
                }
            }
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Always enabled: a manual trigger supersedes any in-flight
                // cycle (the stale result is dropped by the sequence guard),
                // so a slow fetch can never lock out a refresh.
                if ui.button("Fetch Coordinates").clicked() {
                    let cycle = self.controller.manual_trigger();
                    self.start_cycle(ctx, cycle);
                }
                if ui.button("Toggle Auto Fetch").clicked() {
                    if let Some(cycle) = self.controller.toggle_auto() {
                        self.start_cycle(ctx, cycle);
                    }
                }
                ui.label(if self.controller.auto_enabled() {
                    "ON"
                } else {
                    "OFF"
                });
                ui.separator();
                ui.colored_label(Color32::RED, self.status.text());
            });
        });
    }

    fn bottom_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("About").clicked() {
                    self.show_about = true;
                }
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }

    fn about_window(&mut self, ctx: &egui::Context) {
        egui::Window::new("About")
            .open(&mut self.show_about)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("GridMap");
                ui.label(
                    "Fetches named coordinates from a remote endpoint every 30 seconds \
                     and plots them over a world map. Hover a dot for its name and \
                     original coordinates.",
                );
            });
    }
}

impl eframe::App for GridMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.drain_outcomes();

        // Fire the auto-refresh timer if it is due.
        if let Some(cycle) = self.controller.poll_timer(now) {
            self.start_cycle(ctx, cycle);
        }

        self.top_bar(ctx);
        self.bottom_bar(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = self.view.show(ui, &mut self.store);
                self.canvas_size = rect.size();
            });

        self.about_window(ctx);

        // Wake up when the pending timer expires, even without user input.
        if let Some(deadline) = self.controller.deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}
