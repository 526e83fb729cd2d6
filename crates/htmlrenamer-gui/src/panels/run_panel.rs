/// Left sidebar: the selected directory, run summary and problems list.
use crate::state::{AppPhase, AppState};
use crate::theme::HtmlRenamerTheme;
use egui::Ui;

/// Draw the run panel.
pub fn run_panel(ui: &mut Ui, state: &AppState) {
    let theme = HtmlRenamerTheme::of(ui);

    ui.heading("Directory");
    ui.add_space(4.0);
    match &state.selected_directory {
        Some(dir) => {
            ui.label(
                egui::RichText::new(dir.display().to_string())
                    .monospace()
                    .color(theme.text_primary),
            );
        }
        None => {
            ui.label(
                egui::RichText::new("No directory selected")
                    .italics()
                    .color(theme.text_muted),
            );
        }
    }

    ui.add_space(12.0);
    ui.separator();
    ui.add_space(4.0);
    ui.heading("Summary");
    ui.add_space(4.0);

    if state.phase == AppPhase::Idle && state.report.is_none() {
        ui.label(egui::RichText::new("Nothing run yet").color(theme.text_muted));
        return;
    }

    egui::Grid::new("run_summary")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("Files found");
            ui.label(state.run_total.to_string());
            ui.end_row();

            ui.label("Renamed");
            ui.label(egui::RichText::new(state.renamed_count().to_string()).color(theme.success));
            ui.end_row();

            ui.label("Skipped");
            let skipped = state.skipped_count();
            let color = if skipped > 0 {
                theme.warning
            } else {
                theme.text_secondary
            };
            ui.label(egui::RichText::new(skipped.to_string()).color(color));
            ui.end_row();

            if let Some(report) = &state.report {
                ui.label("Index prefix");
                ui.label(if report.add_index { "on" } else { "off" });
                ui.end_row();

                ui.label("Started");
                ui.label(report.started_at.format("%Y-%m-%d %H:%M:%S").to_string());
                ui.end_row();
            }
        });

    if let Some(err) = &state.run_error {
        ui.add_space(8.0);
        ui.label(egui::RichText::new(err).color(theme.error));
    }

    if !state.run_problems.is_empty() {
        ui.add_space(8.0);
        egui::CollapsingHeader::new(format!("Problems ({})", state.run_problems.len()))
            .default_open(false)
            .show(ui, |ui| {
                for line in &state.run_problems {
                    ui.label(egui::RichText::new(line).size(11.0).color(theme.warning));
                }
            });
    }
}
