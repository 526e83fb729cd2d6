/// Headless mode: confirm on stdin, run, print the summary.
use crate::cli::Cli;
use anyhow::Context;
use htmlrenamer_core::export::{export_report, ExportFormat};
use htmlrenamer_core::model::RunReport;
use htmlrenamer_core::report::TracingReporter;
use htmlrenamer_core::{confirmation_prompt, rename_directory, RenameOptions};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Rename the files in `directory` according to the CLI flags.
pub fn run(directory: &Path, cli: &Cli) -> anyhow::Result<()> {
    let options = RenameOptions::default().with_index(cli.index);

    if !cli.yes {
        let stdin = io::stdin();
        let confirmed = ask(
            &confirmation_prompt(directory, &options),
            &mut stdin.lock(),
            &mut io::stdout(),
        )?;
        if !confirmed {
            tracing::info!("Rename cancelled by user");
            println!("Cancelled. No files were renamed.");
            return Ok(());
        }
    }

    let report = rename_directory(directory, &options, &TracingReporter)
        .with_context(|| format!("rename failed in {}", directory.display()))?;
    print_report(&report, &mut io::stdout())?;

    if let Some(path) = &cli.export {
        export_report(&report, path, ExportFormat::from_path(path))
            .with_context(|| format!("failed to export to {}", path.display()))?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

/// Print `prompt` and read a yes/no answer. Anything but `y`/`yes` declines.
fn ask(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    write!(output, "{prompt}\n[y/N] ")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

fn print_report(report: &RunReport, out: &mut impl Write) -> io::Result<()> {
    for r in &report.renamed {
        writeln!(out, "  renamed  {} -> {}", r.original, r.new_name)?;
    }
    for s in &report.skipped {
        writeln!(out, "  skipped  {} ({})", s.original, s.reason)?;
    }
    writeln!(out, "{}", report.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use htmlrenamer_core::model::{RenameOutcome, SkipReason};
    use std::path::PathBuf;

    #[test]
    fn only_yes_confirms() {
        for (answer, expected) in [
            ("y\n", true),
            ("YES\n", true),
            ("n\n", false),
            ("\n", false),
            ("", false),
            ("yep\n", false),
        ] {
            let mut out = Vec::new();
            let got = ask("Proceed?", &mut answer.as_bytes(), &mut out).unwrap();
            assert_eq!(got, expected, "answer {answer:?}");
            assert!(String::from_utf8(out).unwrap().starts_with("Proceed?"));
        }
    }

    #[test]
    fn report_lists_every_file_then_summary() {
        let mut report = RunReport::new(PathBuf::from("pages"), false);
        report.push(RenameOutcome::renamed("a.html", "Intro.html"));
        report.push(RenameOutcome::skipped("b.html", SkipReason::NoTitleFound));

        let mut out = Vec::new();
        print_report(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "  renamed  a.html -> Intro.html");
        assert_eq!(lines[1], "  skipped  b.html (no qualifying heading found)");
        assert_eq!(lines[2], "1 renamed, 1 skipped");
    }
}
