//! Histogram rendering with [`plotters`].
//!
//! PNG output goes through the bitmap backend straight to a file; SVG output
//! is rendered into a string and written through [`Storage`].

use crate::core::{ChartDisplay, ChartSpec, Storage};
use crate::utils::error::{AnalysisError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
        }
    }

    pub fn default_filename(self) -> String {
        format!("score_distribution.{}", self.extension())
    }
}

/// Writes the chart to a file in the output storage.
pub struct FileDisplay<S: Storage> {
    storage: S,
    filename: String,
    format: ChartFormat,
    size: (u32, u32),
}

impl<S: Storage> FileDisplay<S> {
    pub fn new(storage: S, filename: impl Into<String>, format: ChartFormat, size: (u32, u32)) -> Self {
        Self {
            storage,
            filename: filename.into(),
            format,
            size,
        }
    }
}

impl<S: Storage> ChartDisplay for FileDisplay<S> {
    fn show(&self, chart: &ChartSpec) -> Result<()> {
        match self.format {
            ChartFormat::Png => {
                let path = self.storage.resolve(&self.filename)?;
                let root = BitMapBackend::new(&path, self.size).into_drawing_area();
                draw_histogram(&root, chart)?;
                root.present()
                    .map_err(|e| AnalysisError::render(e.to_string()))?;
                tracing::info!("📊 Histogram saved to {}", path.display());
            }
            ChartFormat::Svg => {
                let mut svg = String::new();
                {
                    let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
                    draw_histogram(&root, chart)?;
                    root.present()
                        .map_err(|e| AnalysisError::render(e.to_string()))?;
                }
                self.storage.write_file(&self.filename, svg.as_bytes())?;
                tracing::info!("📊 Histogram saved to {}", self.filename);
            }
        }
        Ok(())
    }
}

pub fn draw_histogram<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartSpec,
) -> Result<()> {
    let (x_min, x_max) = chart.histogram.range();
    let y_max = chart.histogram.max_count() + 1;

    root.fill(&WHITE)
        .map_err(|e| AnalysisError::render(e.to_string()))?;

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, ("sans-serif", 30))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, 0u64..y_max)
        .map_err(|e| AnalysisError::render(e.to_string()))?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .x_labels(chart.histogram.bins().len() + 1)
        .x_label_formatter(&|v| format!("{:.1}", v))
        .draw()
        .map_err(|e| AnalysisError::render(e.to_string()))?;

    ctx.draw_series(chart.histogram.bins().iter().map(|bin| {
        Rectangle::new(
            [(bin.bin_start, 0), (bin.bin_end, bin.count)],
            BLUE.mix(0.6).filled(),
        )
    }))
    .map_err(|e| AnalysisError::render(e.to_string()))?;

    ctx.draw_series(chart.histogram.bins().iter().map(|bin| {
        Rectangle::new([(bin.bin_start, 0), (bin.bin_end, bin.count)], BLACK.stroke_width(1))
    }))
    .map_err(|e| AnalysisError::render(e.to_string()))?;

    Ok(())
}
