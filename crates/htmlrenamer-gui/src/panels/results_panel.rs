/// Central panel: filter tabs and the outcome table.
use crate::state::{AppPhase, AppState, OutcomeFilter};
use crate::widgets::outcome_table::outcome_table;
use egui::Ui;

/// Draw the results panel.
pub fn results_panel(ui: &mut Ui, state: &mut AppState) {
    if state.phase == AppPhase::Idle {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new(
                    "Select a directory to rename its .html files after their headings",
                )
                .size(14.0)
                .color(ui.visuals().weak_text_color()),
            );
        });
        return;
    }

    ui.horizontal(|ui| {
        let all = state.outcomes.len();
        let renamed = state.renamed_count();
        let skipped = all - renamed;
        ui.selectable_value(&mut state.filter, OutcomeFilter::All, format!("All ({all})"));
        ui.selectable_value(
            &mut state.filter,
            OutcomeFilter::Renamed,
            format!("Renamed ({renamed})"),
        );
        ui.selectable_value(
            &mut state.filter,
            OutcomeFilter::Skipped,
            format!("Skipped ({skipped})"),
        );
    });
    ui.separator();

    outcome_table(ui, state);
}
