#![cfg(feature = "cli")]

use clap::Parser;
use score_analyzer::adapters::ChartFormat;
use score_analyzer::utils::validation::Validate;
use score_analyzer::{CliConfig, DisplayMode};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_config_file_overrides_flags() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[chart]
format = "svg"
width = 1024

[output]
path = "./reports"
summary_json = true

[display]
mode = "none"
"#
    )
    .unwrap();

    let cli = CliConfig::parse_from([
        "score-analyzer",
        "--config",
        temp_file.path().to_str().unwrap(),
        "--width",
        "300",
    ]);
    let settings = cli.settings().unwrap();

    assert_eq!(settings.format, ChartFormat::Svg);
    assert_eq!(settings.width, 1024);
    assert_eq!(settings.height, 600);
    assert_eq!(settings.output_path, "./reports");
    assert!(settings.summary_json);
    assert_eq!(settings.display, DisplayMode::Headless);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_missing_config_file_is_io_error() {
    let cli = CliConfig::parse_from(["score-analyzer", "--config", "/nonexistent/score.toml"]);
    let err = cli.settings().unwrap_err();
    assert_eq!(err.severity().exit_code(), 2);
}

#[test]
fn test_out_of_range_width_flag_fails_validation() {
    let cli = CliConfig::parse_from(["score-analyzer", "--width", "50"]);
    let err = cli.settings().unwrap().validate().unwrap_err();
    assert!(err.to_string().contains("chart.width"));
    assert_eq!(err.severity().exit_code(), 1);
}

#[test]
fn test_unknown_display_mode_is_rejected_by_clap() {
    assert!(CliConfig::try_parse_from(["score-analyzer", "--display", "window"]).is_err());
}
