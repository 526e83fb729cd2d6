/// UI widgets for HtmlRenamer.
pub mod outcome_table;
pub mod status_bar;
pub mod toolbar;
