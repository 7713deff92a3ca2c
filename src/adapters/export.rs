use crate::core::analyzer::AnalysisReport;
use crate::core::{ScoreTable, Storage};
use crate::utils::error::{AnalysisError, Result};
use serde::Serialize;

pub const SCORES_CSV: &str = "scores.csv";
pub const HISTOGRAM_CSV: &str = "histogram.csv";
pub const SUMMARY_JSON: &str = "summary.json";

fn to_csv<T: Serialize>(rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.into_inner().map_err(|e| AnalysisError::IoError(e.into_error()))
}

/// Writes `scores.csv` and `histogram.csv`, returning the written file names.
pub fn export_csv<S: Storage>(
    storage: &S,
    table: &ScoreTable,
    report: &AnalysisReport,
) -> Result<Vec<String>> {
    let scores = to_csv(table.records())?;
    storage.write_file(SCORES_CSV, &scores)?;

    let bins = to_csv(report.histogram.bins())?;
    storage.write_file(HISTOGRAM_CSV, &bins)?;

    tracing::debug!(
        "Exported {} records and {} bins",
        table.len(),
        report.histogram.bins().len()
    );
    Ok(vec![SCORES_CSV.to_string(), HISTOGRAM_CSV.to_string()])
}

pub fn export_summary<S: Storage>(storage: &S, report: &AnalysisReport) -> Result<String> {
    let json = serde_json::to_vec_pretty(report)?;
    storage.write_file(SUMMARY_JSON, &json)?;
    Ok(SUMMARY_JSON.to_string())
}
