use super::aggregator::CityMetrics;
use super::profiles::CityProfile;
use crate::domain::City;
use serde::Serialize;

const TRANSIT_BASELINE: f64 = 45.0;
const TRANSIT_YEARLY_GAIN: f64 = 2.5;
/// Population is multiplied by this to share an axis with built-up area.
const POPULATION_INDEX_SCALE: f64 = 10.0;

/// Groundwater index starting at 100 and falling by the range decline rate.
pub fn groundwater_index(metrics: &CityMetrics) -> Vec<f64> {
    let decline = metrics.water.groundwater_decline;
    (0..metrics.growth.years.len())
        .map(|i| decline.mul_add(-(i as f64), 100.0))
        .collect()
}

pub fn transit_coverage(metrics: &CityMetrics) -> Vec<f64> {
    (0..metrics.growth.years.len())
        .map(|i| TRANSIT_YEARLY_GAIN.mul_add(i as f64, TRANSIT_BASELINE))
        .collect()
}

pub fn population_index(metrics: &CityMetrics) -> Vec<f64> {
    metrics
        .growth
        .population
        .iter()
        .map(|population| population * POPULATION_INDEX_SCALE)
        .collect()
}

/// Pairs a series with its years for charting.
pub fn with_years(years: &[i32], values: &[f64]) -> Vec<(f64, f64)> {
    years
        .iter()
        .zip(values)
        .map(|(year, value)| (f64::from(*year), *value))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityAirQuality {
    pub city: &'static str,
    pub aqi: u32,
    pub pm25: u32,
    pub outlook: &'static str,
}

/// AQI for every known city, for the comparative chart.
pub fn comparative_air_quality() -> Vec<CityAirQuality> {
    City::ALL
        .iter()
        .map(|city| {
            let profile = CityProfile::of(*city);
            CityAirQuality {
                city: city.short_label(),
                aqi: profile.aqi,
                pm25: profile.pm25,
                outlook: profile.aqi_outlook.label(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterIndicator {
    pub label: &'static str,
    pub value: f64,
    pub status: &'static str,
}

pub fn water_indicators(metrics: &CityMetrics) -> Vec<WaterIndicator> {
    vec![
        WaterIndicator {
            label: "Current Stress Level",
            value: f64::from(metrics.water.stress_level),
            status: "Critical",
        },
        WaterIndicator {
            label: "Groundwater Decline",
            value: metrics.water.groundwater_decline,
            status: "High",
        },
        WaterIndicator {
            label: "Reservoir Levels",
            value: 65.0,
            status: "Medium",
        },
        WaterIndicator {
            label: "Consumption Rate",
            value: 78.0,
            status: "High",
        },
    ]
}
