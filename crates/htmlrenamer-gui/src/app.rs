/// Main `eframe::App` implementation for HtmlRenamer.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::panels;
use crate::state::{AppPhase, AppState};
use crate::theme::HtmlRenamerTheme;
use crate::widgets;

/// Pre-built application state.
///
/// Construct this before calling `eframe::run_native` so the window opens
/// with the options already applied.
pub struct HtmlRenamerState {
    pub(crate) inner: AppState,
}

impl HtmlRenamerState {
    /// Build the initial state; `add_index` pre-ticks the index option.
    pub fn build(add_index: bool) -> Self {
        let mut state = AppState::new();
        state.add_index = add_index;
        Self { inner: state }
    }
}

/// The HtmlRenamer application.
pub struct HtmlRenamerApp {
    state: AppState,
}

impl HtmlRenamerApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: HtmlRenamerState) -> Self {
        HtmlRenamerTheme::for_dark_mode(state.inner.dark_mode)
            .apply(&cc.egui_ctx, state.inner.dark_mode);
        Self { state: state.inner }
    }
}

impl eframe::App for HtmlRenamerApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        if ctx.style().visuals.dark_mode != self.state.dark_mode {
            HtmlRenamerTheme::for_dark_mode(self.state.dark_mode).apply(ctx, self.state.dark_mode);
        }

        // ── Process background messages ───────────────────────────────────
        let _data_changed = self.state.process_run_messages();

        if self.state.phase == AppPhase::Running {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── Confirmation dialog ───────────────────────────────────────────
        if self.state.phase == AppPhase::Confirming {
            confirmation_dialog(ctx, &mut self.state);
        }

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About HtmlRenamer")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();
                let strong = ui.visuals().strong_text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("📝 HtmlRenamer")
                            .size(24.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "Renames saved HTML pages after their panel heading,\n\
                             oldest first, with optional index prefixes.",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("Developed by Swatto")
                            .size(13.0)
                            .strong()
                            .color(strong),
                    );
                    ui.add_space(4.0);
                    ui.hyperlink_to(
                        "github.com/Swatto86/HtmlRenamer",
                        "https://github.com/Swatto86/HtmlRenamer",
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("MIT License - (c) 2026 Swatto")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Left sidebar ──────────────────────────────────────────────────
        egui::SidePanel::left("run_panel")
            .default_width(280.0)
            .min_width(200.0)
            .max_width(480.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    panels::run_panel::run_panel(ui, &self.state);
                });
            });

        // ── Central panel (results) ───────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::results_panel::results_panel(ui, &mut self.state);
        });
    }
}

/// Modal-style Yes/No prompt shown before any file is touched.
fn confirmation_dialog(ctx: &egui::Context, state: &mut AppState) {
    let message = state.confirmation_message();
    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new("Confirm Rename")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([420.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label(egui::RichText::new(message).size(13.0));
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui
                    .add(egui::Button::new("Yes").min_size(egui::vec2(80.0, 28.0)))
                    .clicked()
                {
                    confirmed = true;
                }
                if ui
                    .add(egui::Button::new("No").min_size(egui::vec2(80.0, 28.0)))
                    .clicked()
                {
                    cancelled = true;
                }
            });
            ui.add_space(4.0);
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        cancelled = true;
    }

    if confirmed {
        state.confirm_run();
    } else if cancelled {
        state.cancel_confirmation();
    }
}
