//! Closed-form metric generation for a (city, time range) pair.

use super::catalog::{Endpoint, DECLARED_ENDPOINTS};
use super::profiles::{CityProfile, RangeProfile};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::f64::consts::PI;

/// Standard deviation of the optional temperature noise, °C.
const NOISE_STD_DEV: f64 = 0.3;

/// Share of the yearly built-up increase that shows up as vegetation loss.
const VEGETATION_LOSS_RATIO: f64 = 0.3;

#[derive(Debug, Clone, Serialize)]
pub struct GrowthSeries {
    pub years: Vec<i32>,
    /// Millions of residents.
    pub population: Vec<f64>,
    /// km².
    pub built_up_area: Vec<f64>,
    pub vegetation_loss: Vec<f64>,
    /// Annualised growth rate in percent, scaled by the range growth factor.
    pub growth_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemperatureSeries {
    pub years: Vec<i32>,
    pub temperatures: Vec<f64>,
    pub trend: &'static str,
    /// °C per year, rounded to two decimals.
    pub heat_island_intensity: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirQuality {
    pub aqi: u32,
    pub pm25: u32,
    pub trend: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterStress {
    /// Percent.
    pub stress_level: u32,
    pub groundwater_decline: f64,
    pub trend: &'static str,
}

/// Controls the jitter added to generated temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureNoise {
    /// Pure linear trend; every render of the same selection is identical.
    #[default]
    None,
    /// Gaussian jitter from a ChaCha stream derived from the seed and the
    /// (city, range) pair, so identical selections still render identically.
    Seeded(u64),
}

/// Produces every series the dashboard shows. No network access happens
/// here; the endpoints are carried for display only.
#[derive(Debug, Clone, Default)]
pub struct SatelliteDataFetcher {
    noise: TemperatureNoise,
}

impl SatelliteDataFetcher {
    pub const fn new(noise: TemperatureNoise) -> Self {
        Self { noise }
    }

    pub const fn noise(&self) -> TemperatureNoise {
        self.noise
    }

    pub const fn endpoints(&self) -> &'static [Endpoint] {
        &DECLARED_ENDPOINTS
    }

    pub fn urban_growth(&self, city: &CityProfile, range: &RangeProfile) -> GrowthSeries {
        let years = range.years();
        let factor = range.growth_factor;
        let base_population = city.base_population(range.range);
        let yearly_multiplier = 1.0 + city.growth_rate / 100.0 * factor;
        let built_up_step = city.built_up_increase * factor;
        let vegetation_step = -(city.built_up_increase * VEGETATION_LOSS_RATIO * factor);

        let steps = || (0..years.len()).map(|i| i as f64);

        GrowthSeries {
            population: steps()
                .map(|i| base_population * yearly_multiplier.powf(i))
                .collect(),
            built_up_area: steps()
                .map(|i| built_up_step.mul_add(i, range.built_up_base))
                .collect(),
            vegetation_loss: steps().map(|i| vegetation_step * i).collect(),
            growth_rate: city.growth_rate * factor,
            years,
        }
    }

    pub fn temperature(&self, city: &CityProfile, range: &RangeProfile) -> TemperatureSeries {
        let years = range.years();
        let mut jitter = self.jitter_source(city, range);

        let temperatures: Vec<f64> = (0..years.len())
            .map(|i| {
                range
                    .temperature_increase
                    .mul_add(i as f64, city.base_temperature)
                    + jitter.as_mut().map_or(0.0, sample_noise)
            })
            .collect();

        let delta = match (temperatures.first(), temperatures.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        };

        TemperatureSeries {
            years,
            trend: "increasing",
            heat_island_intensity: round2(delta / range.heat_divisor),
            temperatures,
        }
    }

    pub fn air_quality(&self, city: &CityProfile, range: &RangeProfile) -> AirQuality {
        AirQuality {
            aqi: city.aqi,
            pm25: city.pm25,
            trend: range.air_trend,
        }
    }

    pub fn water_stress(&self, city: &CityProfile, range: &RangeProfile) -> WaterStress {
        WaterStress {
            stress_level: city.water_stress,
            groundwater_decline: range.groundwater_decline,
            trend: range.water_trend,
        }
    }

    /// Label-keyed variants. Unknown cities take the default profile and
    /// unknown ranges the recent decade.
    pub fn urban_growth_by_label(&self, city: &str, range: &str) -> GrowthSeries {
        self.urban_growth(CityProfile::lookup(city), RangeProfile::lookup(range))
    }

    pub fn temperature_by_label(&self, city: &str, range: &str) -> TemperatureSeries {
        self.temperature(CityProfile::lookup(city), RangeProfile::lookup(range))
    }

    pub fn air_quality_by_label(&self, city: &str, range: &str) -> AirQuality {
        self.air_quality(CityProfile::lookup(city), RangeProfile::lookup(range))
    }

    pub fn water_stress_by_label(&self, city: &str, range: &str) -> WaterStress {
        self.water_stress(CityProfile::lookup(city), RangeProfile::lookup(range))
    }

    fn jitter_source(&self, city: &CityProfile, range: &RangeProfile) -> Option<ChaCha8Rng> {
        match self.noise {
            TemperatureNoise::None => None,
            TemperatureNoise::Seeded(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                rng.set_stream(noise_stream(city, range));
                Some(rng)
            }
        }
    }
}

fn noise_stream(city: &CityProfile, range: &RangeProfile) -> u64 {
    city.name
        .bytes()
        .fold(u64::from(range.start_year.unsigned_abs()), |acc, byte| {
            acc.wrapping_mul(31).wrapping_add(u64::from(byte))
        })
}

// Box-Muller over the ChaCha stream.
fn sample_noise(rng: &mut ChaCha8Rng) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos() * NOISE_STD_DEV
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{City, TimeRange};

    fn fetcher() -> SatelliteDataFetcher {
        SatelliteDataFetcher::default()
    }

    #[test]
    fn years_cover_the_whole_window() {
        for range in TimeRange::ALL {
            let profile = RangeProfile::of(range);
            for city in City::ALL {
                let growth = fetcher().urban_growth(CityProfile::of(city), profile);
                let expected = usize::try_from(profile.end_year - profile.start_year + 1)
                    .unwrap_or_default();
                assert_eq!(growth.years.len(), expected);
                assert_eq!(growth.years.first(), Some(&profile.start_year));
                assert!(growth.years.windows(2).all(|pair| pair[1] == pair[0] + 1));
                assert_eq!(growth.population.len(), expected);
                assert_eq!(growth.built_up_area.len(), expected);
                assert_eq!(growth.vegetation_loss.len(), expected);
            }
        }
    }

    #[test]
    fn population_grows_every_year() {
        for range in TimeRange::ALL {
            for city in City::ALL {
                let growth = fetcher().urban_growth(CityProfile::of(city), RangeProfile::of(range));
                assert!(growth.population.windows(2).all(|pair| pair[1] > pair[0]));
            }
        }
    }

    #[test]
    fn growth_series_follow_closed_forms() {
        let city = CityProfile::of(City::Bangalore);
        let range = RangeProfile::of(TimeRange::LongTerm);
        let growth = fetcher().urban_growth(city, range);

        assert!((growth.growth_rate - 5.2 * 2.4).abs() < 1e-9);
        assert!((growth.population[0] - 5.0).abs() < 1e-12);
        let expected_last = 5.0 * (1.0 + 0.052 * 2.4_f64).powi(24);
        assert!((growth.population[24] - expected_last).abs() < 1e-9);
        assert!((growth.built_up_area[24] - (50.0 + 28.0 * 2.4 * 24.0)).abs() < 1e-9);
        assert!((growth.vegetation_loss[24] + 28.0 * 0.3 * 2.4 * 24.0).abs() < 1e-9);
    }

    #[test]
    fn noiseless_temperature_delta_is_linear() {
        for range in TimeRange::ALL {
            let profile = RangeProfile::of(range);
            let series = fetcher().temperature(CityProfile::of(City::Delhi), profile);
            let n = series.temperatures.len();
            let delta = series.temperatures[n - 1] - series.temperatures[0];
            assert!((delta - profile.temperature_increase * (n - 1) as f64).abs() < 1e-9);
            assert!(
                (series.heat_island_intensity - round2(delta / profile.heat_divisor)).abs()
                    < f64::EPSILON
            );
        }
    }

    #[test]
    fn heat_intensity_per_range() {
        let city = CityProfile::of(City::Mumbai);
        let intensity =
            |range| fetcher().temperature(city, RangeProfile::of(range)).heat_island_intensity;
        assert!((intensity(TimeRange::RecentDecade) - 0.14).abs() < 1e-9);
        assert!((intensity(TimeRange::LongTerm) - 0.12).abs() < 1e-9);
        assert!((intensity(TimeRange::RecentYears) - 0.21).abs() < 1e-9);
    }

    #[test]
    fn seeded_noise_is_reproducible() {
        let noisy = SatelliteDataFetcher::new(TemperatureNoise::Seeded(7));
        let city = CityProfile::of(City::Chennai);
        let range = RangeProfile::of(TimeRange::RecentDecade);

        let first = noisy.temperature(city, range);
        let second = noisy.temperature(city, range);
        assert_eq!(first.temperatures, second.temperatures);

        let clean = fetcher().temperature(city, range);
        assert_ne!(first.temperatures, clean.temperatures);
        for (jittered, linear) in first.temperatures.iter().zip(&clean.temperatures) {
            assert!((jittered - linear).abs() < 2.0);
        }
    }

    #[test]
    fn seeded_noise_differs_between_cities() {
        let noisy = SatelliteDataFetcher::new(TemperatureNoise::Seeded(7));
        let range = RangeProfile::of(TimeRange::RecentDecade);
        let delhi = noisy.temperature(CityProfile::of(City::Delhi), range);
        let mumbai = noisy.temperature(CityProfile::of(City::Mumbai), range);
        let offsets = |series: &TemperatureSeries, base: f64| -> Vec<f64> {
            series.temperatures.iter().map(|t| t - base).collect()
        };
        assert_ne!(offsets(&delhi, 25.0), offsets(&mumbai, 26.0));
    }

    #[test]
    fn air_and_water_records_use_range_trends() {
        let city = CityProfile::of(City::Delhi);
        let range = RangeProfile::of(TimeRange::RecentYears);
        let air = fetcher().air_quality(city, range);
        assert_eq!(air.aqi, 285);
        assert_eq!(air.pm25, 125);
        assert_eq!(air.trend, "recent stabilization");

        let water = fetcher().water_stress(city, range);
        assert_eq!(water.stress_level, 78);
        assert!((water.groundwater_decline - 3.5).abs() < f64::EPSILON);
        assert_eq!(water.trend, "rapid recent decline");
    }

    #[test]
    fn unknown_labels_fall_back_silently() {
        let growth = fetcher().urban_growth_by_label("Atlantis", "someday");
        assert_eq!(growth.years.first(), Some(&2014));
        assert_eq!(growth.years.len(), 11);
        assert!((growth.population[0] - 7.0).abs() < f64::EPSILON);
        assert!((growth.growth_rate - 4.0).abs() < f64::EPSILON);

        let water = fetcher().water_stress_by_label("Delhi, India", "2000-2024 (Long-term)");
        assert_eq!(water.stress_level, 78);
        assert_eq!(fetcher().air_quality_by_label("Atlantis", "").aqi, 150);
        assert_eq!(
            fetcher().temperature_by_label("Mumbai, India", "").temperatures.len(),
            11
        );
    }
}
