/// Results table: one row per processed file, in processing order.
use crate::state::AppState;
use crate::theme::HtmlRenamerTheme;
use egui::Ui;
use egui_extras::{Column, TableBuilder};
use htmlrenamer_core::model::RenameOutcome;

const ROW_HEIGHT: f32 = 20.0;

/// Draw the outcome table for the rows passing the current filter.
pub fn outcome_table(ui: &mut Ui, state: &AppState) {
    let theme = HtmlRenamerTheme::of(ui);
    let rows = state.visible_outcomes();

    if rows.is_empty() {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("No files to show")
                    .size(13.0)
                    .color(theme.text_muted),
            );
        });
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(44.0))
        .column(Column::initial(240.0).at_least(100.0).clip(true))
        .column(Column::initial(80.0).at_least(60.0))
        .column(Column::remainder().at_least(120.0).clip(true))
        .header(ROW_HEIGHT + 2.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("Original");
            });
            header.col(|ui| {
                ui.strong("Status");
            });
            header.col(|ui| {
                ui.strong("New name / reason");
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let (position, outcome) = rows[row.index()];
                row.col(|ui| {
                    ui.label(
                        egui::RichText::new(position.to_string())
                            .monospace()
                            .color(theme.text_muted),
                    );
                });
                row.col(|ui| {
                    ui.label(outcome.original()).on_hover_text(outcome.original());
                });
                match outcome {
                    RenameOutcome::Renamed(r) => {
                        row.col(|ui| {
                            ui.label(egui::RichText::new("renamed").color(theme.success));
                        });
                        row.col(|ui| {
                            ui.label(r.new_name.as_str())
                                .on_hover_text(r.new_name.as_str());
                        });
                    }
                    RenameOutcome::Skipped(s) => {
                        row.col(|ui| {
                            ui.label(egui::RichText::new("skipped").color(theme.warning));
                        });
                        row.col(|ui| {
                            ui.label(
                                egui::RichText::new(s.reason.to_string())
                                    .color(theme.text_secondary),
                            );
                        });
                    }
                }
            });
        });
}
