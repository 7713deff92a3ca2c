pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{run, RunOutcome};
pub use config::{cli::LocalStorage, DisplayMode, Settings};
pub use core::analyzer::{AnalysisReport, ScoreAnalyzer};
pub use domain::model::{Record, ScoreTable};
pub use utils::error::{AnalysisError, Result};
