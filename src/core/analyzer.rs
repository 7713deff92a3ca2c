use crate::core::stats::{mean, Histogram};
use crate::domain::model::ScoreTable;
use crate::domain::ports::{ChartDisplay, ChartSpec};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

pub const HISTOGRAM_BINS: usize = 5;
pub const CHART_TITLE: &str = "Score Distribution";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub average: f64,
    pub count: usize,
    pub min: u32,
    pub max: u32,
    pub histogram: Histogram,
}

impl AnalysisReport {
    pub fn average_line(&self) -> String {
        format!("Average Class Score: {:.2}", self.average)
    }
}

pub struct ScoreAnalyzer<D: ChartDisplay> {
    table: ScoreTable,
    display: D,
}

impl<D: ChartDisplay> ScoreAnalyzer<D> {
    /// Analyzer over the built-in demo roster.
    pub fn new(display: D) -> Self {
        Self::with_table(ScoreTable::demo(), display)
    }

    pub fn with_table(table: ScoreTable, display: D) -> Self {
        Self { table, display }
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    /// Prints the class average and a status line to `out`, then hands a
    /// 5-bin histogram of the scores to the display surface.
    ///
    /// Display failures are returned as-is; nothing is retried.
    pub fn analyze<W: Write>(&self, out: &mut W) -> Result<AnalysisReport> {
        let scores = self.table.scores();
        tracing::debug!("Analyzing {} score records", scores.len());

        let average = mean(&scores)?;
        let values: Vec<f64> = scores.iter().map(|&s| f64::from(s)).collect();
        let histogram = Histogram::from_values(&values, HISTOGRAM_BINS)?;

        let report = AnalysisReport {
            average,
            count: scores.len(),
            min: scores.iter().copied().min().unwrap_or_default(),
            max: scores.iter().copied().max().unwrap_or_default(),
            histogram,
        };

        writeln!(out, "{}", report.average_line())?;
        writeln!(out, "Generating histogram...")?;
        out.flush()?;

        let chart = ChartSpec {
            title: CHART_TITLE.to_string(),
            x_label: "Score".to_string(),
            y_label: "Students".to_string(),
            histogram: report.histogram.clone(),
        };
        tracing::debug!(
            "Showing '{}' with {} bins over {:?}",
            chart.title,
            chart.histogram.bins().len(),
            chart.histogram.range()
        );
        self.display.show(&chart)?;

        Ok(report)
    }
}
