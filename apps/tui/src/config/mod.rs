#[allow(clippy::module_inception)]
mod config;

pub use config::{
    init_app_config, resolve_selector, AppConfig, ConfigError, CITY_VAR, FOCUS_VAR,
    LAYERS_VAR, LOG_FILE_VAR, NOISE_SEED_VAR, PERIOD_VAR,
};
