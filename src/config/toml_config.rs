use crate::adapters::ChartFormat;
use crate::config::{DisplayMode, Settings};
use crate::utils::error::{AnalysisError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub chart: Option<ChartConfig>,
    pub output: Option<OutputConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    pub format: Option<ChartFormat>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub export_csv: Option<bool>,
    pub summary_json: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub mode: Option<DisplayMode>,
}

impl TomlConfig {
    /// Loads a config file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AnalysisError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses config text, expanding `${VAR}` references first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AnalysisError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AnalysisError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Missing keys fall back to [`Settings::default`]; the chart filename
    /// follows the chosen format unless set explicitly.
    pub fn into_settings(self) -> Settings {
        let defaults = Settings::default();
        let chart = self.chart.unwrap_or_default();
        let output = self.output.unwrap_or_default();
        let format = chart.format.unwrap_or(defaults.format);

        Settings {
            output_path: output.path.unwrap_or(defaults.output_path),
            display: self
                .display
                .and_then(|d| d.mode)
                .unwrap_or(defaults.display),
            format,
            chart_filename: chart
                .filename
                .unwrap_or_else(|| format.default_filename()),
            width: chart.width.unwrap_or(defaults.width),
            height: chart.height.unwrap_or(defaults.height),
            export_csv: output.export_csv.unwrap_or(defaults.export_csv),
            summary_json: output.summary_json.unwrap_or(defaults.summary_json),
        }
    }
}
