/// Bottom status bar: run progress and the last run's summary.
use crate::state::{AppPhase, AppState};
use crate::theme::HtmlRenamerTheme;
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    let theme = HtmlRenamerTheme::of(ui);
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();

    ui.horizontal(|ui| {
        match state.phase {
            AppPhase::Idle => {
                ui.label(
                    egui::RichText::new("Ready. Select a directory to begin")
                        .size(12.0)
                        .color(color_weak),
                );
            }
            AppPhase::Confirming => {
                ui.label(
                    egui::RichText::new("Waiting for confirmation...")
                        .size(12.0)
                        .color(color_weak),
                );
            }
            AppPhase::Running => {
                ui.spinner();
                ui.add(
                    egui::ProgressBar::new(state.progress_fraction())
                        .desired_width(220.0)
                        .show_percentage(),
                );
                ui.separator();
                ui.label(
                    egui::RichText::new(format!(
                        "{} / {} files",
                        state.run_processed, state.run_total
                    ))
                    .size(12.0)
                    .color(color_normal),
                );
            }
            AppPhase::Results => {
                if let Some(err) = &state.run_error {
                    ui.label(
                        egui::RichText::new(format!("✖ Run failed: {err}"))
                            .size(12.0)
                            .color(theme.error),
                    );
                } else {
                    ui.label(
                        egui::RichText::new("✓ Rename complete")
                            .size(12.0)
                            .color(theme.success),
                    );
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{} renamed", state.renamed_count()))
                            .size(12.0)
                            .color(color_normal),
                    );
                    let skipped = state.skipped_count();
                    if skipped > 0 {
                        ui.separator();
                        ui.label(
                            egui::RichText::new(format!("{skipped} skipped"))
                                .size(12.0)
                                .color(theme.warning),
                        );
                    }
                    if let Some(duration) = state.run_duration {
                        ui.separator();
                        ui.label(
                            egui::RichText::new(format!("{:.1}s", duration.as_secs_f64()))
                                .size(12.0)
                                .color(color_weak),
                        );
                    }
                }
            }
        }

        if let Some(message) = &state.export_message {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (text, color) = match message {
                    Ok(text) => (text.as_str(), color_weak),
                    Err(text) => (text.as_str(), theme.error),
                };
                ui.label(egui::RichText::new(truncate_middle(text, 70)).size(11.0).color(color));
            });
        }
    });
}

/// Shorten `text` to at most `max_chars` characters, replacing the middle
/// with "..." if needed.
fn truncate_middle(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    let half = (max_chars - 3) / 2;
    let head: String = text.chars().take(half).collect();
    let tail: String = text.chars().skip(count - half).collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::truncate_middle;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_middle("Exported", 70), "Exported");
    }

    #[test]
    fn truncate_is_char_safe() {
        let long = "é".repeat(100);
        let out = truncate_middle(&long, 11);
        assert_eq!(out, "éééé...éééé");
    }
}
