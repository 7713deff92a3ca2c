pub mod cli;
pub mod toml_config;

use crate::adapters::ChartFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_range, Validate,
};
use serde::{Deserialize, Serialize};

pub const MIN_CHART_SIDE: u32 = 200;
pub const MAX_CHART_SIDE: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Render the chart into the output directory
    #[default]
    File,
    /// Draw text bars on stderr
    Terminal,
    /// Build the chart without showing it
    #[serde(rename = "none")]
    #[cfg_attr(feature = "cli", value(name = "none"))]
    Headless,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, clap::Parser)]
#[command(name = "score-analyzer")]
#[command(about = "Prints the class average and a histogram of the demo scores")]
pub struct CliConfig {
    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, default_value = ".")]
    pub output_dir: String,

    #[arg(
        long,
        value_enum,
        default_value_t = DisplayMode::File,
        help = "Where to show the histogram; `file` writes score_distribution.<format> into --output-dir (the current directory by default)"
    )]
    pub display: DisplayMode,

    #[arg(long, value_enum, default_value_t = ChartFormat::Png)]
    pub format: ChartFormat,

    #[arg(long, default_value = "800")]
    pub width: u32,

    #[arg(long, default_value = "600")]
    pub height: u32,

    #[arg(long, help = "Also write scores.csv and histogram.csv")]
    pub export_csv: bool,

    #[arg(long, help = "Also write summary.json")]
    pub summary_json: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Resolves the effective settings: the TOML file when `--config` is
    /// given, the flags otherwise.
    pub fn settings(&self) -> Result<Settings> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                Ok(toml_config::TomlConfig::from_file(path)?.into_settings())
            }
            None => Ok(Settings {
                output_path: self.output_dir.clone(),
                display: self.display,
                format: self.format,
                chart_filename: self.format.default_filename(),
                width: self.width,
                height: self.height,
                export_csv: self.export_csv,
                summary_json: self.summary_json,
            }),
        }
    }
}

/// Effective run settings, whatever their source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub output_path: String,
    pub display: DisplayMode,
    pub format: ChartFormat,
    pub chart_filename: String,
    pub width: u32,
    pub height: u32,
    pub export_csv: bool,
    pub summary_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_path: ".".to_string(),
            display: DisplayMode::File,
            format: ChartFormat::Png,
            chart_filename: ChartFormat::Png.default_filename(),
            width: 800,
            height: 600,
            export_csv: false,
            summary_json: false,
        }
    }
}

impl ConfigProvider for Settings {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn chart_filename(&self) -> &str {
        &self.chart_filename
    }

    fn chart_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn export_csv(&self) -> bool {
        self.export_csv
    }

    fn summary_json(&self) -> bool {
        self.summary_json
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("output.path", &self.output_path)?;
        validate_range("chart.width", self.width, MIN_CHART_SIDE, MAX_CHART_SIDE)?;
        validate_range("chart.height", self.height, MIN_CHART_SIDE, MAX_CHART_SIDE)?;
        if self.display == DisplayMode::File {
            validate_non_empty_string("chart.filename", &self.chart_filename)?;
            validate_file_extension(
                "chart.filename",
                &self.chart_filename,
                &[self.format.extension()],
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.chart_size(), (800, 600));
        assert_eq!(settings.chart_filename(), "score_distribution.png");
    }

    #[test]
    fn test_filename_must_match_format() {
        let settings = Settings {
            format: ChartFormat::Svg,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_filename_ignored_without_file_display() {
        let settings = Settings {
            display: DisplayMode::Terminal,
            chart_filename: String::new(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_chart_size_bounds() {
        let settings = Settings {
            height: 10_000,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_no_arguments_uses_defaults() {
        use clap::Parser;

        let cli = CliConfig::parse_from(["score-analyzer"]);
        assert_eq!(cli.settings().unwrap(), Settings::default());
        assert!(!cli.verbose);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_display_help_names_the_chart_file() {
        use clap::CommandFactory;

        let command = CliConfig::command();
        let help = command
            .get_arguments()
            .find(|arg| arg.get_id() == "display")
            .and_then(|arg| arg.get_help())
            .unwrap()
            .to_string();
        assert!(help.contains("score_distribution.<format>"));
        assert!(help.contains("--output-dir"));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_svg_flag_switches_filename() {
        use clap::Parser;

        let cli = CliConfig::parse_from(["score-analyzer", "--format", "svg", "--display", "terminal"]);
        let settings = cli.settings().unwrap();
        assert_eq!(settings.chart_filename, "score_distribution.svg");
        assert_eq!(settings.display, DisplayMode::Terminal);
    }
}
