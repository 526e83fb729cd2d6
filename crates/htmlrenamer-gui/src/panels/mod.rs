/// UI panels for HtmlRenamer.
pub mod results_panel;
pub mod run_panel;
