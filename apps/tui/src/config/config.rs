use crate::analytics::TemperatureNoise;
use crate::domain::{City, DataLayer, FocusArea, Selection, TimeRange};
use dotenv::dotenv;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::cmp::Reverse;
use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

pub const CITY_VAR: &str = "URBANPULSE_CITY";
pub const FOCUS_VAR: &str = "URBANPULSE_FOCUS";
pub const PERIOD_VAR: &str = "URBANPULSE_PERIOD";
pub const LAYERS_VAR: &str = "URBANPULSE_LAYERS";
pub const NOISE_SEED_VAR: &str = "URBANPULSE_NOISE_SEED";
pub const LOG_FILE_VAR: &str = "URBANPULSE_LOG_FILE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an unsigned integer, got `{value}`")]
    InvalidSeed {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Start-up selection and runtime options, resolved from `.env`, the process
/// environment and CLI overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Canonical labels, or the raw input when nothing matched.
    pub selection: Selection,
    pub noise: TemperatureNoise,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Builds the configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Selection::default();

        let city = non_blank(lookup(CITY_VAR)).map_or(defaults.city, |value| {
            resolve_selector(&value, &City::labels())
        });
        let focus = non_blank(lookup(FOCUS_VAR)).map_or(defaults.focus, |value| {
            resolve_selector(&value, &FocusArea::labels())
        });
        let period = non_blank(lookup(PERIOD_VAR)).map_or(defaults.period, |value| {
            resolve_selector(&value, &TimeRange::labels())
        });
        let layers =
            non_blank(lookup(LAYERS_VAR)).map_or(defaults.layers, |value| parse_layers(&value));

        let noise = match non_blank(lookup(NOISE_SEED_VAR)) {
            Some(value) => {
                let seed = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidSeed {
                        var: NOISE_SEED_VAR,
                        value: value.clone(),
                        source,
                    })?;
                TemperatureNoise::Seeded(seed)
            }
            None => TemperatureNoise::None,
        };

        let log_file = non_blank(lookup(LOG_FILE_VAR)).map(PathBuf::from);

        Ok(Self {
            selection: Selection {
                city,
                focus,
                period,
                layers,
            },
            noise,
            log_file,
        })
    }
}

/// Initializes the application configuration from `.env` and the environment.
pub fn init_app_config() -> Result<AppConfig, ConfigError> {
    // A missing .env file is fine
    dotenv().ok();
    AppConfig::from_lookup(|key| env::var(key).ok())
}

/// Resolves user input against a fixed set of labels: exact matches first,
/// then the best-scoring label that contains the input. Input that no label
/// contains is returned as-is so the analytics fall back to their defaults.
pub fn resolve_selector(input: &str, labels: &[&'static str]) -> String {
    let query = input.trim();
    if query.is_empty() {
        return String::new();
    }

    if let Some(exact) = labels
        .iter()
        .find(|label| label.eq_ignore_ascii_case(query))
    {
        return (*exact).to_string();
    }

    let needle = query.to_lowercase();
    let matcher = SkimMatcherV2::default().ignore_case();
    labels
        .iter()
        .enumerate()
        .filter(|(_, label)| label.to_lowercase().contains(&needle))
        .filter_map(|(index, label)| {
            matcher
                .fuzzy_match(label, query)
                .map(|score| (score, index, *label))
        })
        // Ties go to the earlier label
        .min_by_key(|(score, index, _)| (Reverse(*score), *index))
        .map_or_else(|| query.to_string(), |(_, _, label)| label.to_string())
}

/// Blank values count as unset.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_layers(value: &str) -> Vec<DataLayer> {
    let labels = DataLayer::labels();
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .filter_map(|item| {
            let resolved = resolve_selector(item, &labels);
            let layer = DataLayer::parse(&resolved);
            if layer.is_none() {
                warn!(layer = item, "ignoring unknown data layer");
            }
            layer
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]), Ok(AppConfig::default()));
    }

    #[test]
    fn selectors_resolve_fuzzily() {
        let config = config_from(&[
            (CITY_VAR, "delhi"),
            (FOCUS_VAR, "water"),
            (PERIOD_VAR, "long-term"),
        ]);
        let config = config.unwrap_or_default();
        assert_eq!(config.selection.city, "Delhi, India");
        assert_eq!(config.selection.focus, "Water & Resources");
        assert_eq!(config.selection.period, "2000-2024 (Long-term)");
    }

    #[test]
    fn unmatched_city_passes_through() {
        let config = config_from(&[(CITY_VAR, "Atlantis")]).unwrap_or_default();
        assert_eq!(config.selection.city, "Atlantis");
    }

    #[test]
    fn real_but_unlisted_city_keeps_its_name() {
        let labels = City::labels();
        for city in ["Agra", "Goa", "Noida", "Paris"] {
            assert_eq!(resolve_selector(city, &labels), city);
        }

        let config = config_from(&[(CITY_VAR, "Agra")]).unwrap_or_default();
        assert_eq!(config.selection.city, "Agra");
        let profile = crate::analytics::CityProfile::lookup(&config.selection.city);
        assert!((profile.growth_rate - 4.0).abs() < f64::EPSILON);
        assert!((profile.base_population(TimeRange::RecentDecade) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let config = config_from(&[
            (CITY_VAR, ""),
            (FOCUS_VAR, "   "),
            (PERIOD_VAR, ""),
            (NOISE_SEED_VAR, " "),
        ]);
        assert_eq!(config, Ok(AppConfig::default()));
        assert_eq!(resolve_selector("", &City::labels()), "");
    }

    #[test]
    fn partial_names_pick_the_containing_label() {
        assert_eq!(resolve_selector("hyder", &City::labels()), "Hyderabad, India");
        assert_eq!(
            resolve_selector("long", &TimeRange::labels()),
            "2000-2024 (Long-term)"
        );
    }

    #[test]
    fn layers_are_comma_separated() {
        let config = config_from(&[(LAYERS_VAR, "grace, viirs, ,nonsense-xyz")]).unwrap_or_default();
        assert_eq!(
            config.selection.layers,
            vec![DataLayer::GraceWater, DataLayer::ViirsNighttimeLights]
        );
    }

    #[test]
    fn seed_enables_noise() {
        let config = config_from(&[(NOISE_SEED_VAR, " 42 ")]).unwrap_or_default();
        assert_eq!(config.noise, TemperatureNoise::Seeded(42));
    }

    #[test]
    fn bad_seed_is_an_error() {
        let result = config_from(&[(NOISE_SEED_VAR, "forty-two")]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSeed { ref value, .. }) if value == "forty-two"
        ));
    }

    #[test]
    fn exact_labels_win_over_fuzzy_scores() {
        let labels = TimeRange::labels();
        assert_eq!(
            resolve_selector("2019-2024 (recent years)", &labels),
            "2019-2024 (Recent Years)"
        );
    }
}
