use crate::adapters::export::{export_csv, export_summary};
use crate::adapters::{FileDisplay, NoDisplay, TerminalDisplay};
use crate::config::cli::LocalStorage;
use crate::config::{DisplayMode, Settings};
use crate::core::analyzer::{AnalysisReport, ScoreAnalyzer};
use crate::core::{ChartDisplay, ConfigProvider};
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: AnalysisReport,
    pub written_files: Vec<String>,
}

fn build_display(settings: &Settings, storage: &LocalStorage) -> Box<dyn ChartDisplay> {
    match settings.display {
        DisplayMode::File => Box::new(FileDisplay::new(
            storage.clone(),
            settings.chart_filename(),
            settings.format,
            settings.chart_size(),
        )),
        DisplayMode::Terminal => Box::new(TerminalDisplay::new()),
        DisplayMode::Headless => Box::new(NoDisplay),
    }
}

/// Runs the demo analysis once with `settings`, writing the report lines to `out`.
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<RunOutcome> {
    let storage = LocalStorage::new(settings.output_path().to_string());
    let analyzer = ScoreAnalyzer::new(build_display(settings, &storage));

    let report = analyzer.analyze(out)?;

    let mut written_files = Vec::new();
    if settings.display == DisplayMode::File {
        written_files.push(settings.chart_filename().to_string());
    }
    if settings.export_csv() {
        written_files.extend(export_csv(&storage, analyzer.table(), &report)?);
    }
    if settings.summary_json() {
        written_files.push(export_summary(&storage, &report)?);
    }

    for file in &written_files {
        tracing::debug!("📁 Wrote {}/{}", settings.output_path(), file);
    }

    Ok(RunOutcome {
        report,
        written_files,
    })
}
