//! Synthetic urban analytics: lookup tables, closed-form series and the
//! derived views built on top of them. Nothing here performs I/O.

pub mod aggregator;
pub mod alerts;
pub mod catalog;
pub mod generator;
pub mod insights;
pub mod profiles;
pub mod solutions;
pub mod trends;
pub mod zones;

pub use aggregator::{CityMetrics, PeriodSnapshot, UrbanAnalyzer};
pub use generator::{SatelliteDataFetcher, TemperatureNoise};
pub use profiles::{CityProfile, RangeProfile};
