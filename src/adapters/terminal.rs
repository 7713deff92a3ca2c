use crate::core::{ChartDisplay, ChartSpec};
use crate::utils::error::Result;
use std::io::Write;

const DEFAULT_BAR_WIDTH: usize = 40;

/// Draws the histogram as horizontal text bars on stderr.
pub struct TerminalDisplay {
    bar_width: usize,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    pub fn with_bar_width(bar_width: usize) -> Self {
        Self {
            bar_width: bar_width.max(1),
        }
    }

    pub fn render(&self, chart: &ChartSpec) -> String {
        let max = chart.histogram.max_count().max(1);
        let mut lines = vec![chart.title.clone(), "=".repeat(chart.title.len())];

        for bin in chart.histogram.bins() {
            let filled = (bin.count as usize * self.bar_width).div_ceil(max as usize);
            lines.push(format!(
                "{:>6.1} - {:>6.1} | {:<width$} {}",
                bin.bin_start,
                bin.bin_end,
                "#".repeat(filled),
                bin.count,
                width = self.bar_width
            ));
        }
        lines.push(format!("{} per bin, {} total", chart.y_label, chart.histogram.total()));
        lines.join("\n")
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartDisplay for TerminalDisplay {
    fn show(&self, chart: &ChartSpec) -> Result<()> {
        let mut err = std::io::stderr().lock();
        writeln!(err, "{}", self.render(chart))?;
        err.flush()?;
        Ok(())
    }
}

/// Headless surface: the chart is built but not shown anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDisplay;

impl ChartDisplay for NoDisplay {
    fn show(&self, chart: &ChartSpec) -> Result<()> {
        tracing::debug!("Display disabled, skipping '{}'", chart.title);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::Histogram;

    fn demo_chart() -> ChartSpec {
        ChartSpec {
            title: "Score Distribution".to_string(),
            x_label: "Score".to_string(),
            y_label: "Students".to_string(),
            histogram: Histogram::from_values(&[85.0, 92.0, 78.0, 90.0], 5).unwrap(),
        }
    }

    #[test]
    fn test_render_scales_bars_to_largest_bin() {
        let text = TerminalDisplay::with_bar_width(10).render(&demo_chart());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Score Distribution");
        assert_eq!(lines.len(), 2 + 5 + 1);
        assert!(lines[2].starts_with("  78.0 -   80.8 | #####"));
        assert!(lines[3].contains("|            0"));
        assert!(lines[6].contains("##########"));
        assert!(lines[7].ends_with("4 total"));
    }

    #[test]
    fn test_no_display_is_silent() {
        assert!(NoDisplay.show(&demo_chart()).is_ok());
    }
}
