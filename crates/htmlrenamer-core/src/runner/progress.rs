/// Run progress messages: sent from the worker thread to the UI thread via
/// a crossbeam channel.
use crate::model::RunReport;
use crate::report::{log_event, Reporter, RunEvent};
use crossbeam_channel::Sender;
use std::time::Duration;

/// Messages from a background run to whoever holds the `RunHandle`.
#[derive(Debug)]
pub enum RunProgress {
    /// A pipeline event, already written to the log.
    Event(RunEvent),
    /// The run finished; every file has an outcome in `report`.
    Complete {
        report: RunReport,
        duration: Duration,
    },
    /// The run could not start (e.g. the directory vanished).
    Failed { message: String },
}

/// Reporter that logs each event and forwards it over a channel.
///
/// A disconnected receiver (UI closed mid-run) is ignored; the run still
/// completes so no file is left half-processed.
pub struct ChannelReporter {
    tx: Sender<RunProgress>,
}

impl ChannelReporter {
    pub fn new(tx: Sender<RunProgress>) -> Self {
        Self { tx }
    }
}

impl Reporter for ChannelReporter {
    fn report(&self, event: RunEvent) {
        log_event(&event);
        let _ = self.tx.send(RunProgress::Event(event));
    }
}
