/// Report export: writes a finished run to CSV or JSON.
use crate::error::Result;
use crate::model::RunReport;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Output format of an exported report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Pick the format from a file extension; anything but `.json` is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// One CSV line.
#[derive(Serialize)]
struct ExportRow<'a> {
    original: &'a str,
    new_name: &'a str,
    status: &'static str,
    reason: String,
}

/// Write `report` as CSV: renamed files first, then skipped ones.
pub fn write_csv<W: Write>(report: &RunReport, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for r in &report.renamed {
        csv.serialize(ExportRow {
            original: &r.original,
            new_name: &r.new_name,
            status: "renamed",
            reason: String::new(),
        })?;
    }
    for s in &report.skipped {
        csv.serialize(ExportRow {
            original: &s.original,
            new_name: "",
            status: "skipped",
            reason: s.reason.to_string(),
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// Write `report` as pretty-printed JSON.
pub fn write_json<W: Write>(report: &RunReport, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// Export `report` to `path` in `format`.
pub fn export_report(report: &RunReport, path: &Path, format: ExportFormat) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Csv => write_csv(report, &mut writer)?,
        ExportFormat::Json => write_json(report, &mut writer)?,
    }
    writer.flush()?;
    info!("Exported report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RenameOutcome, SkipReason};
    use std::path::PathBuf;

    fn sample() -> RunReport {
        let mut report = RunReport::new(PathBuf::from("pages"), true);
        report.push(RenameOutcome::renamed("a.html", "1. Intro.html"));
        report.push(RenameOutcome::skipped("b.html", SkipReason::NoTitleFound));
        report
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("r.json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("r.JSON")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("r.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("report")), ExportFormat::Csv);
    }

    #[test]
    fn csv_has_header_and_one_row_per_file() {
        let mut buf = Vec::new();
        write_csv(&sample(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "original,new_name,status,reason");
        assert_eq!(lines[1], "a.html,1. Intro.html,renamed,");
        assert_eq!(lines[2], "b.html,,skipped,no qualifying heading found");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn json_contains_both_sequences() {
        let mut buf = Vec::new();
        write_json(&sample(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["add_index"], true);
        assert_eq!(value["renamed"][0]["new_name"], "1. Intro.html");
        assert_eq!(value["skipped"][0]["reason"]["kind"], "NoTitleFound");
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.csv");
        export_report(&sample(), &path, ExportFormat::Csv).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("original,new_name,status,reason"));
    }
}
