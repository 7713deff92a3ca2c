// Adapters: concrete display surfaces and file exports behind the domain ports.

pub mod chart;
pub mod export;
pub mod terminal;

pub use chart::{ChartFormat, FileDisplay};
pub use terminal::{NoDisplay, TerminalDisplay};
