// Export our modules for use in the binary and tests
pub mod analytics;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod event;
pub mod logging;
pub mod report;
pub mod terminal;
pub mod ui;

pub use domain::{City, DataLayer, FocusArea, RiskLevel, TimeRange};
