/// HtmlRenamer Core: scanning, title extraction, and collision-safe renaming.
///
/// This crate contains all business logic with zero UI dependencies.
/// The GUI and the headless CLI both drive it through
/// [`pipeline::rename_directory`] or [`runner::start_run`].
///
/// # Modules
///
/// - [`model`]: `FileEntry`, per-file outcomes, and the run report.
/// - [`scanner`]: Lists matching files and orders them by creation time.
/// - [`extract`]: Reads the panel heading out of a page.
/// - [`sanitize`]: Turns heading text into a safe filename stem.
/// - [`resolve`]: Picks a unique filename and applies the index prefix.
/// - [`rename`]: Performs the rename through a replaceable filesystem seam.
/// - [`pipeline`]: Ties the steps together for one directory.
/// - [`report`]: Run events and the reporters that receive them.
/// - [`runner`]: Runs the pipeline on a background thread with progress.
/// - [`export`]: Saves a run report as CSV or JSON.
pub mod error;
pub mod export;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod rename;
pub mod report;
pub mod resolve;
pub mod runner;
pub mod sanitize;
pub mod scanner;

pub use error::{RenameError, Result};
pub use pipeline::{confirmation_prompt, rename_directory, RenameOptions};
