use super::aggregator::CityMetrics;
use serde::Serialize;

/// An external data service the dashboard names but never calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub name: &'static str,
    pub url: &'static str,
}

pub const DECLARED_ENDPOINTS: [Endpoint; 3] = [
    Endpoint {
        name: "worldview",
        url: "https://wvs.earthdata.nasa.gov/api/v1/snapshot",
    },
    Endpoint {
        name: "fires",
        url: "https://firms.modaps.eosdis.nasa.gov/api/area/csv/",
    },
    Endpoint {
        name: "air_quality",
        url: "https://airquality.googleapis.com/v1/currentConditions:lookup",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SensorStatus {
    Active,
    Degraded,
}

impl SensorStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Degraded => "Degraded",
        }
    }

    /// Readiness gauge value in percent.
    pub const fn readiness(self) -> u16 {
        match self {
            Self::Active => 90,
            Self::Degraded => 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Satellite {
    pub name: &'static str,
    pub status: SensorStatus,
    pub resolution: &'static str,
    pub coverage: &'static str,
    pub primary_use: &'static str,
}

pub const SATELLITES: [Satellite; 5] = [
    Satellite {
        name: "Landsat 8/9",
        status: SensorStatus::Active,
        resolution: "30m",
        coverage: "Global",
        primary_use: "Land Use Analysis",
    },
    Satellite {
        name: "MODIS (Terra/Aqua)",
        status: SensorStatus::Active,
        resolution: "250m-1km",
        coverage: "Global",
        primary_use: "Temperature & Air Quality",
    },
    Satellite {
        name: "VIIRS (Suomi NPP)",
        status: SensorStatus::Active,
        resolution: "375m",
        coverage: "Global",
        primary_use: "Nighttime Lights & Urban Growth",
    },
    Satellite {
        name: "GRACE-FO",
        status: SensorStatus::Active,
        resolution: "N/A",
        coverage: "Global",
        primary_use: "Water Resources & Gravity",
    },
    Satellite {
        name: "Sentinel-2",
        status: SensorStatus::Active,
        resolution: "10m",
        coverage: "Global",
        primary_use: "High-res Urban Monitoring",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataPortal {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

pub const DATA_PORTALS: [DataPortal; 4] = [
    DataPortal {
        name: "NASA Earthdata",
        url: "https://earthdata.nasa.gov/",
        description: "Historical satellite data archive",
    },
    DataPortal {
        name: "Worldview",
        url: "https://worldview.earthdata.nasa.gov/",
        description: "Time-series imagery",
    },
    DataPortal {
        name: "GIBS",
        url: "https://earthdata.nasa.gov/eosdis/science-system-description/eosdis-components/gibs",
        description: "Historical web mapping",
    },
    DataPortal {
        name: "FIRMS",
        url: "https://firms.modaps.eosdis.nasa.gov/",
        description: "Long-term fire and thermal data",
    },
];

/// Sensor archives and the year their record starts.
pub const ARCHIVES: [(&str, &str); 4] = [
    ("Landsat archive", "1984-Present"),
    ("MODIS", "2000-Present"),
    ("VIIRS", "2012-Present"),
    ("GRACE", "2002-Present"),
];

pub const UPDATE_FREQUENCY: &str = "Daily (MODIS/VIIRS), 16 days (Landsat)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub label: &'static str,
    pub value: String,
}

/// Headline indicators for the satellite view, formatted for display.
pub fn indicators(metrics: &CityMetrics) -> Vec<Indicator> {
    vec![
        Indicator {
            label: "Urban Expansion Rate",
            value: format!("{:.1}%", metrics.growth.growth_rate),
        },
        Indicator {
            label: "Heat Island Intensity",
            value: format!("+{}°C/yr", metrics.temperature.heat_island_intensity),
        },
        Indicator {
            label: "Water Stress Level",
            value: format!("{}%", metrics.water.stress_level),
        },
        Indicator {
            label: "Air Quality Index",
            value: metrics.air_quality.aqi.to_string(),
        },
        Indicator {
            label: "Analysis Period",
            value: metrics.time_range.clone(),
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataCoverage {
    pub first_year: i32,
    pub last_year: i32,
    pub years_analysed: usize,
}

pub fn data_coverage(metrics: &CityMetrics) -> DataCoverage {
    let years = &metrics.growth.years;
    DataCoverage {
        first_year: years.first().copied().unwrap_or_default(),
        last_year: years.last().copied().unwrap_or_default(),
        years_analysed: years.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::aggregator::UrbanAnalyzer;
    use crate::domain::{City, FocusArea, TimeRange};

    #[test]
    fn indicators_format_current_metrics() {
        let metrics = UrbanAnalyzer::default().city_metrics(
            City::Delhi,
            FocusArea::WaterResources,
            TimeRange::RecentDecade,
        );
        let indicators = indicators(&metrics);
        assert_eq!(indicators.len(), 5);
        assert_eq!(indicators[0].value, "4.1%");
        assert_eq!(indicators[1].value, "+0.14°C/yr");
        assert_eq!(indicators[2].value, "78%");
        assert_eq!(indicators[3].value, "285");
        assert_eq!(indicators[4].value, "2014-2024 (Recent Decade)");
    }

    #[test]
    fn coverage_spans_selected_window() {
        let metrics = UrbanAnalyzer::default().city_metrics(
            City::Mumbai,
            FocusArea::Transportation,
            TimeRange::LongTerm,
        );
        let coverage = data_coverage(&metrics);
        assert_eq!(coverage.first_year, 2000);
        assert_eq!(coverage.last_year, 2024);
        assert_eq!(coverage.years_analysed, 25);
    }

    #[test]
    fn every_sensor_is_active() {
        assert!(SATELLITES
            .iter()
            .all(|satellite| satellite.status.readiness() == 90));
    }
}
