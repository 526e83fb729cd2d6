//! HtmlRenamer: renames saved HTML pages after their panel heading.
//!
//! Thin binary entry point. All logic lives in the `htmlrenamer-core`
//! and `htmlrenamer-gui` crates. Without a directory argument the window
//! opens; with one, the run happens headless in the terminal.

// Built as a console application on every platform: headless runs read
// their confirmation from stdin, so a release GUI launch on Windows also
// opens a console window.

mod cli;
mod headless;
mod logging;

use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_file);
    tracing::info!("HtmlRenamer {} starting", env!("CARGO_PKG_VERSION"));

    match cli.directory {
        Some(ref directory) => headless::run(directory, &cli),
        None => run_gui(cli.index),
    }
}

fn run_gui(add_index: bool) -> anyhow::Result<()> {
    let icon = htmlrenamer_gui::icon::generate_icon(64);
    let state = htmlrenamer_gui::HtmlRenamerState::build(add_index);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("HtmlRenamer")
            .with_inner_size([1024.0, 680.0])
            .with_min_inner_size([640.0, 400.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "HtmlRenamer",
        options,
        Box::new(|cc| {
            Ok(Box::new(htmlrenamer_gui::HtmlRenamerApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
