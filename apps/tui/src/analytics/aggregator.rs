//! Picks the headline metric and risk label for a focus area.

use super::generator::{
    AirQuality, GrowthSeries, SatelliteDataFetcher, TemperatureNoise, TemperatureSeries,
    WaterStress,
};
use super::profiles::{CityProfile, RangeProfile};
use crate::domain::{City, FocusArea, RiskLevel, TimeRange};
use serde::Serialize;
use tracing::debug;

/// Housing focus turns high above this annualised growth rate.
pub const HOUSING_GROWTH_THRESHOLD: f64 = 4.5;
/// Heat focus turns high above this intensity, °C/yr.
pub const HEAT_INTENSITY_THRESHOLD: f64 = 0.12;
/// Water focus turns high above this stress level, percent.
pub const WATER_STRESS_THRESHOLD: u32 = 70;
/// Green-space focus turns high when the final vegetation change is below this.
pub const VEGETATION_LOSS_THRESHOLD: f64 = -15.0;
/// Transit coverage is a fixed figure.
pub const TRANSIT_COVERAGE: f64 = 65.0;

#[derive(Debug, Clone, Serialize)]
pub struct CityMetrics {
    pub city: String,
    pub focus_area: FocusArea,
    pub time_range: String,
    pub period: TimeRange,
    pub primary_metric: f64,
    pub metric_label: &'static str,
    pub risk_level: RiskLevel,
    pub growth: GrowthSeries,
    pub temperature: TemperatureSeries,
    pub air_quality: AirQuality,
    pub water: WaterStress,
    /// Final-year population, millions.
    pub population: f64,
    pub growth_rate: f64,
}

/// One row of the cross-period comparison.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodSnapshot {
    pub period: TimeRange,
    pub growth_rate: f64,
    pub heat_intensity: f64,
    pub water_stress: u32,
    pub population: f64,
}

#[derive(Debug, Clone, Default)]
pub struct UrbanAnalyzer {
    fetcher: SatelliteDataFetcher,
}

impl UrbanAnalyzer {
    pub const fn new(noise: TemperatureNoise) -> Self {
        Self {
            fetcher: SatelliteDataFetcher::new(noise),
        }
    }

    pub const fn fetcher(&self) -> &SatelliteDataFetcher {
        &self.fetcher
    }

    pub fn city_metrics(&self, city: City, focus: FocusArea, range: TimeRange) -> CityMetrics {
        self.build(
            CityProfile::of(city),
            city.label(),
            focus,
            RangeProfile::of(range),
            range.label(),
        )
    }

    /// String entry point. Unknown names never fail: the city falls back to
    /// the default profile, the range to the recent decade and the focus to
    /// green spaces.
    pub fn city_metrics_by_label(&self, city: &str, focus: &str, range: &str) -> CityMetrics {
        let focus_area = FocusArea::from_label(focus).unwrap_or(FocusArea::GreenSpaces);
        self.build(
            CityProfile::lookup(city),
            city,
            focus_area,
            RangeProfile::lookup(range),
            range,
        )
    }

    pub fn period_comparison(&self, city: &str, focus: &str) -> Vec<PeriodSnapshot> {
        TimeRange::ALL
            .iter()
            .map(|range| {
                let metrics = self.city_metrics_by_label(city, focus, range.label());
                PeriodSnapshot {
                    period: *range,
                    growth_rate: metrics.growth_rate,
                    heat_intensity: metrics.temperature.heat_island_intensity,
                    water_stress: metrics.water.stress_level,
                    population: metrics.population,
                }
            })
            .collect()
    }

    fn build(
        &self,
        city: &CityProfile,
        city_label: &str,
        focus_area: FocusArea,
        range: &RangeProfile,
        range_label: &str,
    ) -> CityMetrics {
        let growth = self.fetcher.urban_growth(city, range);
        let temperature = self.fetcher.temperature(city, range);
        let air_quality = self.fetcher.air_quality(city, range);
        let water = self.fetcher.water_stress(city, range);

        let (primary_metric, metric_label, risk_level) =
            select_primary(focus_area, &growth, &temperature, &water);

        debug!(
            city = city_label,
            focus = focus_area.label(),
            range = range_label,
            primary_metric,
            risk = risk_level.as_str(),
            "computed city metrics"
        );

        CityMetrics {
            city: city_label.to_string(),
            focus_area,
            time_range: range_label.to_string(),
            period: range.range,
            primary_metric,
            metric_label,
            risk_level,
            population: growth.population.last().copied().unwrap_or_default(),
            growth_rate: growth.growth_rate,
            growth,
            temperature,
            air_quality,
            water,
        }
    }
}

fn select_primary(
    focus: FocusArea,
    growth: &GrowthSeries,
    temperature: &TemperatureSeries,
    water: &WaterStress,
) -> (f64, &'static str, RiskLevel) {
    match focus {
        FocusArea::HousingUrbanGrowth => (
            growth.built_up_area.last().copied().unwrap_or_default(),
            "Built-up Area (km²)",
            housing_risk(growth.growth_rate),
        ),
        FocusArea::PublicHealthHeat => (
            temperature.heat_island_intensity,
            "Heat Island Intensity (°C/yr)",
            heat_risk(temperature.heat_island_intensity),
        ),
        FocusArea::WaterResources => (
            f64::from(water.stress_level),
            "Water Stress Level (%)",
            water_risk(water.stress_level),
        ),
        FocusArea::Transportation => {
            (TRANSIT_COVERAGE, "Transit Coverage (%)", RiskLevel::Medium)
        }
        FocusArea::GreenSpaces => {
            let last_loss = growth.vegetation_loss.last().copied().unwrap_or_default();
            (-last_loss, "Vegetation Index", green_space_risk(last_loss))
        }
    }
}

pub fn housing_risk(growth_rate: f64) -> RiskLevel {
    if growth_rate > HOUSING_GROWTH_THRESHOLD {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}

pub fn heat_risk(intensity: f64) -> RiskLevel {
    if intensity > HEAT_INTENSITY_THRESHOLD {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}

pub const fn water_risk(stress_level: u32) -> RiskLevel {
    if stress_level > WATER_STRESS_THRESHOLD {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}

pub fn green_space_risk(final_vegetation_change: f64) -> RiskLevel {
    if final_vegetation_change < VEGETATION_LOSS_THRESHOLD {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}
