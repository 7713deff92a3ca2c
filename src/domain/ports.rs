use crate::core::stats::Histogram;
use crate::utils::error::Result;
use std::path::PathBuf;

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    /// Full location of `path` inside the storage, for writers that need a real file path.
    fn resolve(&self, path: &str) -> Result<PathBuf>;
}

pub trait ConfigProvider {
    fn output_path(&self) -> &str;
    fn chart_filename(&self) -> &str;
    fn chart_size(&self) -> (u32, u32);
    fn export_csv(&self) -> bool;
    fn summary_json(&self) -> bool;
}

/// Everything a display surface needs to draw the histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub histogram: Histogram,
}

pub trait ChartDisplay {
    fn show(&self, chart: &ChartSpec) -> Result<()>;
}

impl<D: ChartDisplay + ?Sized> ChartDisplay for Box<D> {
    fn show(&self, chart: &ChartSpec) -> Result<()> {
        (**self).show(chart)
    }
}
