/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes.
/// The rename worker communicates via a channel; state updates happen
/// in `process_run_messages()` which runs once per frame.
use anyhow::Context;
use crossbeam_channel::TryRecvError;
use htmlrenamer_core::export::{export_report, ExportFormat};
use htmlrenamer_core::model::{RenameOutcome, RunReport};
use htmlrenamer_core::report::RunEvent;
use htmlrenamer_core::runner::progress::RunProgress;
use htmlrenamer_core::runner::{start_run, RunHandle};
use htmlrenamer_core::{confirmation_prompt, RenameOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// No run in progress and nothing selected yet.
    Idle,
    /// A directory was picked and the confirmation dialog is open.
    Confirming,
    /// The worker is renaming files.
    Running,
    /// The run finished (or failed); results are shown.
    Results,
}

/// Which outcomes the results table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeFilter {
    All,
    Renamed,
    Skipped,
}

impl OutcomeFilter {
    pub fn accepts(self, outcome: &RenameOutcome) -> bool {
        match self {
            Self::All => true,
            Self::Renamed => outcome.is_renamed(),
            Self::Skipped => !outcome.is_renamed(),
        }
    }
}

/// Maximum number of run-progress messages drained from the channel per frame.
///
/// Keeps a large directory from blocking the render thread while its backlog
/// is processed.
const MAX_MESSAGES_PER_FRAME: usize = 300;

/// Maximum problems kept for the problems list.
const MAX_RUN_PROBLEMS: usize = 1_000;

/// All application state.
pub struct AppState {
    // ── Options ────────────────────────────────────────
    pub add_index: bool,
    /// Directory picked by the user; set while confirming and after a run.
    pub selected_directory: Option<PathBuf>,

    // ── Run ────────────────────────────────────────────
    pub phase: AppPhase,
    pub run_handle: Option<RunHandle>,
    pub run_total: usize,
    pub run_processed: usize,
    /// Outcomes in processing order (oldest file first).
    pub outcomes: Vec<RenameOutcome>,
    /// Warnings and errors raised during the run, as log-style lines.
    pub run_problems: Vec<String>,
    pub report: Option<RunReport>,
    pub run_duration: Option<Duration>,
    /// Set when the whole run failed (e.g. directory unreadable).
    pub run_error: Option<String>,

    // ── UI state ───────────────────────────────────────
    pub filter: OutcomeFilter,
    pub show_about: bool,
    /// Result of the last export, shown in the status bar.
    pub export_message: Option<Result<String, String>>,
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create initial application state.
    pub fn new() -> Self {
        Self {
            add_index: false,
            selected_directory: None,
            phase: AppPhase::Idle,
            run_handle: None,
            run_total: 0,
            run_processed: 0,
            outcomes: Vec::new(),
            run_problems: Vec::new(),
            report: None,
            run_duration: None,
            run_error: None,
            filter: OutcomeFilter::All,
            show_about: false,
            export_message: None,
            dark_mode: true,
        }
    }

    /// The user picked `directory`; ask for confirmation before touching it.
    pub fn request_run(&mut self, directory: PathBuf) {
        if self.phase == AppPhase::Running {
            return;
        }
        self.selected_directory = Some(directory);
        self.phase = AppPhase::Confirming;
    }

    fn run_options(&self) -> RenameOptions {
        RenameOptions::default().with_index(self.add_index)
    }

    /// Text of the confirmation prompt for the selected directory.
    pub fn confirmation_message(&self) -> String {
        let dir = self.selected_directory.as_deref().unwrap_or(Path::new(""));
        confirmation_prompt(dir, &self.run_options())
    }

    /// The user declined; nothing is renamed.
    pub fn cancel_confirmation(&mut self) {
        if self.phase != AppPhase::Confirming {
            return;
        }
        self.phase = if self.report.is_some() || self.run_error.is_some() {
            AppPhase::Results
        } else {
            AppPhase::Idle
        };
        tracing::info!("Rename cancelled by user");
    }

    /// The user confirmed; start the worker on the selected directory.
    pub fn confirm_run(&mut self) {
        if self.phase != AppPhase::Confirming {
            return;
        }
        let Some(directory) = self.selected_directory.clone() else {
            self.phase = AppPhase::Idle;
            return;
        };
        self.start_run(directory);
    }

    /// Start a run of `directory` with the current options.
    pub fn start_run(&mut self, directory: PathBuf) {
        self.phase = AppPhase::Running;
        self.selected_directory = Some(directory.clone());
        self.run_total = 0;
        self.run_processed = 0;
        self.outcomes.clear();
        self.run_problems.clear();
        self.report = None;
        self.run_duration = None;
        self.run_error = None;
        self.export_message = None;

        match start_run(directory, self.run_options()) {
            Ok(handle) => self.run_handle = Some(handle),
            Err(e) => {
                tracing::error!("Could not start rename worker: {e}");
                self.run_error = Some(e.to_string());
                self.phase = AppPhase::Results;
            }
        }
    }

    /// Process pending run progress messages. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint (new data arrived).
    pub fn process_run_messages(&mut self) -> bool {
        let Some(handle) = &self.run_handle else {
            return false;
        };

        let mut messages = Vec::new();
        let mut disconnected = false;
        while messages.len() < MAX_MESSAGES_PER_FRAME {
            match handle.progress_rx.try_recv() {
                Ok(m) => messages.push(m),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        let repaint = !messages.is_empty() || disconnected;
        for msg in messages {
            self.apply_progress(msg);
        }

        // Worker went away without a final message.
        if disconnected && self.phase == AppPhase::Running {
            self.run_error = Some("rename worker stopped unexpectedly".to_string());
            self.phase = AppPhase::Results;
            self.run_handle = None;
        }
        repaint
    }

    fn apply_progress(&mut self, msg: RunProgress) {
        match msg {
            RunProgress::Event(event) => self.apply_event(event),
            RunProgress::Complete { report, duration } => {
                self.run_total = report.total();
                self.run_processed = report.total();
                self.report = Some(report);
                self.run_duration = Some(duration);
                self.phase = AppPhase::Results;
                self.run_handle = None;
            }
            RunProgress::Failed { message } => {
                self.run_error = Some(message);
                self.phase = AppPhase::Results;
                self.run_handle = None;
            }
        }
    }

    fn apply_event(&mut self, event: RunEvent) {
        match event {
            RunEvent::Started { total, .. } => self.run_total = total,
            RunEvent::FileProcessed {
                position,
                total,
                outcome,
            } => {
                self.run_processed = position;
                self.run_total = total;
                self.outcomes.push(outcome);
            }
            RunEvent::EntryUnreadable { path, error } => {
                self.push_problem(format!("Error accessing {}: {}", path.display(), error));
            }
            RunEvent::NotAFile { path } => {
                self.push_problem(format!("{}: not a regular file", file_label(&path)));
            }
            RunEvent::NameExhausted { path, title } => {
                self.push_problem(format!(
                    "{}: no free filename for title '{title}'",
                    file_label(&path)
                ));
            }
            RunEvent::TitleMissing { path, cause } => {
                self.push_problem(format!("{}: {}", file_label(&path), cause));
            }
            RunEvent::RenameFailed {
                original,
                target,
                error,
            } => {
                self.push_problem(format!("Error renaming {original} to {target}: {error}"));
            }
            RunEvent::Finished { .. } => {}
        }
    }

    fn push_problem(&mut self, line: String) {
        if self.run_problems.len() < MAX_RUN_PROBLEMS {
            self.run_problems.push(line);
        }
    }

    /// Fraction of files processed, for the progress bar.
    pub fn progress_fraction(&self) -> f32 {
        if self.run_total == 0 {
            return if self.phase == AppPhase::Results { 1.0 } else { 0.0 };
        }
        (self.run_processed as f32 / self.run_total as f32).clamp(0.0, 1.0)
    }

    pub fn renamed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_renamed()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.renamed_count()
    }

    /// Outcomes passing the current filter with their 1-based processing
    /// position, oldest file first.
    pub fn visible_outcomes(&self) -> Vec<(usize, &RenameOutcome)> {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| self.filter.accepts(o))
            .map(|(i, o)| (i + 1, o))
            .collect()
    }

    /// Write the finished report to `path`; the format follows its extension.
    pub fn export_report(&mut self, path: &Path) -> anyhow::Result<()> {
        let result = self
            .report
            .as_ref()
            .context("no finished run to export")
            .and_then(|report| {
                export_report(report, path, ExportFormat::from_path(path))
                    .with_context(|| format!("failed to export to {}", path.display()))
            });
        self.export_message = Some(match &result {
            Ok(()) => Ok(format!("Exported to {}", path.display())),
            Err(e) => Err(format!("{e:#}")),
        });
        result
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
