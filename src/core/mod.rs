pub mod analyzer;
pub mod stats;

pub use crate::domain::model::{Record, ScoreTable};
pub use crate::domain::ports::{ChartDisplay, ChartSpec, ConfigProvider, Storage};
pub use crate::utils::error::Result;
