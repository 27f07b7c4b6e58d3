//! Static lookup tables behind every generated figure.
//!
//! Lookups by name never fail: an unknown city resolves to
//! [`CityProfile::DEFAULT`] and an unknown time-range label resolves to the
//! recent-decade profile.

use crate::domain::{City, TimeRange};

/// Qualitative air-quality direction shown on the comparative AQI chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum AqiOutlook {
    Improving,
    Stable,
    Worsening,
}

impl AqiOutlook {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Improving => "Improving",
            Self::Stable => "Stable",
            Self::Worsening => "Worsening",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityProfile {
    pub name: &'static str,
    /// Annual growth rate in percent.
    pub growth_rate: f64,
    /// Built-up area added per year, km².
    pub built_up_increase: f64,
    pub base_temperature: f64,
    pub aqi: u32,
    pub pm25: u32,
    pub water_stress: u32,
    pub aqi_outlook: AqiOutlook,
    pub latitude: f64,
    pub longitude: f64,
    /// Base population in millions, indexed by [`TimeRange::index`].
    base_population: [f64; 3],
}

static CITY_PROFILES: [CityProfile; 5] = [
    CityProfile {
        name: "Bangalore, India",
        growth_rate: 5.2,
        built_up_increase: 28.0,
        base_temperature: 23.5,
        aqi: 145,
        pm25: 65,
        water_stress: 65,
        aqi_outlook: AqiOutlook::Stable,
        latitude: 12.9716,
        longitude: 77.5946,
        base_population: [8.5, 5.0, 10.0],
    },
    CityProfile {
        name: "Mumbai, India",
        growth_rate: 3.8,
        built_up_increase: 22.0,
        base_temperature: 26.0,
        aqi: 168,
        pm25: 78,
        water_stress: 72,
        aqi_outlook: AqiOutlook::Worsening,
        latitude: 19.0760,
        longitude: 72.8777,
        base_population: [12.5, 8.5, 14.0],
    },
    CityProfile {
        name: "Delhi, India",
        growth_rate: 4.1,
        built_up_increase: 25.0,
        base_temperature: 25.0,
        aqi: 285,
        pm25: 125,
        water_stress: 78,
        aqi_outlook: AqiOutlook::Improving,
        latitude: 28.7041,
        longitude: 77.1025,
        base_population: [11.2, 7.2, 12.5],
    },
    CityProfile {
        name: "Chennai, India",
        growth_rate: 3.5,
        built_up_increase: 20.0,
        base_temperature: 28.0,
        aqi: 132,
        pm25: 58,
        water_stress: 82,
        aqi_outlook: AqiOutlook::Stable,
        latitude: 13.0827,
        longitude: 80.2707,
        base_population: [6.8, 4.2, 7.5],
    },
    CityProfile {
        name: "Hyderabad, India",
        growth_rate: 4.8,
        built_up_increase: 26.0,
        base_temperature: 27.0,
        aqi: 156,
        pm25: 72,
        water_stress: 58,
        aqi_outlook: AqiOutlook::Worsening,
        latitude: 17.3850,
        longitude: 78.4867,
        base_population: [5.8, 3.5, 6.5],
    },
];

impl CityProfile {
    /// Fallback used for any name outside the five known cities.
    pub const DEFAULT: Self = Self {
        name: "Unknown city",
        growth_rate: 4.0,
        built_up_increase: 23.0,
        base_temperature: 25.0,
        aqi: 150,
        pm25: 68,
        water_stress: 65,
        aqi_outlook: AqiOutlook::Stable,
        latitude: 12.9716,
        longitude: 77.5946,
        base_population: [7.0, 7.0, 7.0],
    };

    pub fn of(city: City) -> &'static Self {
        &CITY_PROFILES[city.index()]
    }

    pub fn lookup(name: &str) -> &'static Self {
        static DEFAULT: CityProfile = CityProfile::DEFAULT;
        City::from_label(name).map_or(&DEFAULT, Self::of)
    }

    pub const fn base_population(&self, range: TimeRange) -> f64 {
        self.base_population[range.index()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeProfile {
    pub range: TimeRange,
    pub start_year: i32,
    pub end_year: i32,
    /// Multiplier applied to the per-city growth constants.
    pub growth_factor: f64,
    pub built_up_base: f64,
    /// Linear warming per year, °C.
    pub temperature_increase: f64,
    /// Divisor applied to the first-to-last temperature delta.
    pub heat_divisor: f64,
    pub air_trend: &'static str,
    pub water_trend: &'static str,
    pub groundwater_decline: f64,
    pub heat_alert_threshold: f64,
    pub growth_alert_threshold: f64,
    pub zone_growth_factor: f64,
    pub zone_heat_factor: f64,
    pub cost_factor: f64,
    pub context: &'static str,
    pub time_context: &'static str,
    pub trend_context: &'static str,
}

static RANGE_PROFILES: [RangeProfile; 3] = [
    RangeProfile {
        range: TimeRange::RecentDecade,
        start_year: 2014,
        end_year: 2024,
        growth_factor: 1.0,
        built_up_base: 100.0,
        temperature_increase: 0.15,
        heat_divisor: 11.0,
        air_trend: "moderate improvement",
        water_trend: "consistent pressure",
        groundwater_decline: 2.1,
        heat_alert_threshold: 0.12,
        growth_alert_threshold: 4.5,
        zone_growth_factor: 1.0,
        zone_heat_factor: 1.0,
        cost_factor: 1.0,
        context: "Decadal trends show consistent urban expansion patterns with moderate climate impacts.",
        time_context: "Decadal",
        trend_context: "Decadal trend",
    },
    RangeProfile {
        range: TimeRange::LongTerm,
        start_year: 2000,
        end_year: 2024,
        // (end - start) / 10, normalising the longer window
        growth_factor: 2.4,
        built_up_base: 50.0,
        temperature_increase: 0.12,
        // the long window divides by its year count rather than a fixed span
        heat_divisor: 25.0,
        air_trend: "significant improvement since 2000",
        water_trend: "gradual worsening over decades",
        groundwater_decline: 1.2,
        heat_alert_threshold: 0.10,
        growth_alert_threshold: 3.5,
        zone_growth_factor: 0.8,
        zone_heat_factor: 1.0,
        cost_factor: 1.2,
        context: "Long-term analysis reveals significant transformation from rapid urbanization over two decades.",
        time_context: "Long-term",
        trend_context: "Long-term trend",
    },
    RangeProfile {
        range: TimeRange::RecentYears,
        start_year: 2019,
        end_year: 2024,
        growth_factor: 1.5,
        built_up_base: 180.0,
        temperature_increase: 0.25,
        heat_divisor: 6.0,
        air_trend: "recent stabilization",
        water_trend: "rapid recent decline",
        groundwater_decline: 3.5,
        heat_alert_threshold: 0.20,
        growth_alert_threshold: 6.0,
        zone_growth_factor: 1.5,
        zone_heat_factor: 1.3,
        cost_factor: 0.9,
        context: "Recent data shows accelerated trends, likely influenced by economic and climate factors.",
        time_context: "Recent",
        trend_context: "Recent acceleration",
    },
];

impl RangeProfile {
    pub fn of(range: TimeRange) -> &'static Self {
        &RANGE_PROFILES[range.index()]
    }

    pub fn lookup(label: &str) -> &'static Self {
        Self::of(TimeRange::from_label(label).unwrap_or(TimeRange::RecentDecade))
    }

    pub fn years(&self) -> Vec<i32> {
        (self.start_year..=self.end_year).collect()
    }

    pub const fn year_count(&self) -> usize {
        (self.end_year - self.start_year + 1).unsigned_abs() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_key_on_exact_labels() {
        assert_eq!(CityProfile::lookup("Delhi, India"), CityProfile::of(City::Delhi));
        assert_eq!(CityProfile::lookup("delhi"), &CityProfile::DEFAULT);
        assert_eq!(CityProfile::lookup("delhi, india"), &CityProfile::DEFAULT);
        assert_eq!(
            RangeProfile::lookup("long-term").range,
            TimeRange::RecentDecade
        );
    }

    #[test]
    fn unknown_city_uses_default_profile() {
        let profile = CityProfile::lookup("Atlantis");
        assert_eq!(profile, &CityProfile::DEFAULT);
        assert!((profile.base_population(TimeRange::LongTerm) - 7.0).abs() < f64::EPSILON);
        assert!((profile.growth_rate - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn city_table_is_ordered_like_the_enum() {
        for city in City::ALL {
            assert_eq!(CityProfile::of(city).name, city.label());
        }
    }

    #[test]
    fn range_table_is_ordered_like_the_enum() {
        for range in TimeRange::ALL {
            let profile = RangeProfile::of(range);
            assert_eq!(profile.range, range);
            assert_eq!(profile.years().len(), profile.year_count());
        }
    }

    #[test]
    fn unknown_range_label_falls_back_to_recent_decade() {
        let profile = RangeProfile::lookup("1900-1950 (Ancient)");
        assert_eq!(profile.range, TimeRange::RecentDecade);
        assert_eq!(profile.start_year, 2014);
    }

    #[test]
    fn long_term_growth_factor_matches_window_length() {
        let profile = RangeProfile::of(TimeRange::LongTerm);
        let expected = f64::from(profile.end_year - profile.start_year) / 10.0;
        assert!((profile.growth_factor - expected).abs() < 1e-12);
        assert!((profile.heat_divisor - profile.year_count() as f64).abs() < f64::EPSILON);
    }
}
