use crate::cli::{OutputFormat, ReportArgs};
use crate::error::{CliError, Result, ResultExt};
use crate::progress::ProgressTracker;
use crate::ui;
use issues::{
    IssueTally, JsonRenderer, RecordReader, ReportRenderer, ReportView, ScanStats, TextRenderer,
};
use std::fs;

pub fn execute(args: ReportArgs, view: ReportView) -> Result<()> {
    if args.value_limit == 0 {
        return Err(CliError::Other("--value-limit must be at least 1".to_string()));
    }

    let config = args.classifier_config();
    let mut progress = ProgressTracker::new("Inspection Issue Analysis", args.verbose).with_steps(vec![
        "Opening activity export".to_string(),
        "Classifying inspection records".to_string(),
        "Rendering report".to_string(),
    ]);

    progress.start_step();
    let reader = RecordReader::from_path(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    progress.complete_step();

    progress.start_step();
    let (tally, stats) = issues::analyze(reader, config)?;
    progress.complete_step();
    report_diagnostics(&tally, &stats, args.verbose);

    progress.start_step();
    let report = render(&args, view, &tally);
    progress.complete_step();

    match &args.output {
        Some(path) => {
            fs::write(path, &report)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            ui::success_message(&format!("Report written to {}", path.display()));
        }
        None => print!("{report}"),
    }

    progress.complete();
    Ok(())
}

fn render(args: &ReportArgs, view: ReportView, tally: &IssueTally) -> String {
    let renderer: Box<dyn ReportRenderer> = match args.format {
        OutputFormat::Text => {
            Box::new(TextRenderer::new(view).with_inspection_type(args.inspection_type.clone()))
        }
        OutputFormat::Json if args.compact => Box::new(JsonRenderer::compact()),
        OutputFormat::Json => Box::new(JsonRenderer::new()),
    };

    let mut report = renderer.render(tally);
    if !report.ends_with('\n') {
        report.push('\n');
    }
    report
}

fn report_diagnostics(tally: &IssueTally, stats: &ScanStats, verbose: bool) {
    for skipped in tally.skipped_records() {
        let id = if skipped.activity_id.is_empty() {
            "<no id>"
        } else {
            skipped.activity_id.as_str()
        };
        ui::warning_message(&format!(
            "Error parsing JSON for activity {id}: {}",
            skipped.reason
        ));
    }

    if stats.rows_unreadable > 0 {
        ui::warning_message(&format!(
            "{} of {} rows could not be read and were skipped",
            stats.rows_unreadable, stats.rows_read
        ));
    }

    if verbose {
        ui::info_message(&format!(
            "Read {} rows, {} inspection records",
            stats.rows_read, tally.total_inspections
        ));
    }
}
