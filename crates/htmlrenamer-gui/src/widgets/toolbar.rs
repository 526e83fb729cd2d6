/// Top action bar -- directory picker, index option, export, theme toggle
/// and branding.
use crate::state::{AppPhase, AppState};
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // App title -- uses the egui accent/hyperlink colour so it adapts to
        // dark and light mode automatically.
        ui.label(
            egui::RichText::new("📝 HtmlRenamer")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        let idle = !matches!(state.phase, AppPhase::Running | AppPhase::Confirming);
        let select_btn = ui
            .add_enabled(
                idle,
                egui::Button::new("📂 Select Directory").min_size(egui::vec2(140.0, 28.0)),
            )
            .on_hover_text("Pick a folder of .html files to rename");
        if select_btn.clicked() {
            pick_directory(state);
        }

        ui.add_enabled_ui(idle, |ui| {
            ui.checkbox(&mut state.add_index, "Add index prefix")
                .on_hover_text("Prefix each new name with \"1. \", \"2. \", ... by creation date");
        });

        ui.separator();

        let can_export = state.report.is_some() && state.phase == AppPhase::Results;
        if ui
            .add_enabled(can_export, egui::Button::new("📤 Export"))
            .on_hover_text(if can_export {
                "Export results to CSV or JSON"
            } else {
                "Run a rename first to enable export"
            })
            .clicked()
        {
            export_dialog(state);
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About HtmlRenamer").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }
        });
    });
}

/// Native folder picker. A cancelled dialog leaves the state untouched.
fn pick_directory(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new().set_title("Select a directory of HTML files");
    if let Some(dir) = &state.selected_directory {
        dialog = dialog.set_directory(dir);
    }
    match dialog.pick_folder() {
        Some(dir) => state.request_run(dir),
        None => tracing::debug!("Directory selection cancelled"),
    }
}

fn export_dialog(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Export rename report")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .set_file_name("rename_report.csv")
        .save_file()
    else {
        return;
    };
    if let Err(e) = state.export_report(&path) {
        tracing::error!("Export failed: {e:#}");
    }
}
