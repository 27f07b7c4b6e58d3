use crate::config::{CITY_VAR, FOCUS_VAR, LAYERS_VAR, LOG_FILE_VAR, NOISE_SEED_VAR, PERIOD_VAR};
use clap::{CommandFactory, Parser};

#[derive(Debug, Default, Parser)]
#[command(name = "urbanpulse", version, about = "Urban analytics dashboard")]
pub struct CliArgs {
    /// Print the dashboard report and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// City to analyse, e.g. "delhi"
    #[arg(long, value_name = "NAME")]
    pub city: Option<String>,

    /// Focus area, e.g. "water"
    #[arg(long, value_name = "NAME")]
    pub focus: Option<String>,

    /// Time range, e.g. "long-term"
    #[arg(long, value_name = "NAME")]
    pub period: Option<String>,

    /// Data layer badge to show (repeatable)
    #[arg(long = "layer", value_name = "NAME")]
    pub layers: Vec<String>,

    /// Seed for reproducible temperature noise
    #[arg(long = "noise-seed", value_name = "SEED")]
    pub noise_seed: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    /// Flags win over `.env` and the environment. Must run before any other
    /// thread is spawned.
    pub fn apply_env_overrides(&self) {
        for (var, value) in self.overrides() {
            std::env::set_var(var, value);
        }
    }

    fn overrides(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(city) = &self.city {
            pairs.push((CITY_VAR, city.clone()));
        }
        if let Some(focus) = &self.focus {
            pairs.push((FOCUS_VAR, focus.clone()));
        }
        if let Some(period) = &self.period {
            pairs.push((PERIOD_VAR, period.clone()));
        }
        if !self.layers.is_empty() {
            pairs.push((LAYERS_VAR, self.layers.join(",")));
        }
        if let Some(seed) = &self.noise_seed {
            pairs.push((NOISE_SEED_VAR, seed.clone()));
        }
        if let Some(path) = &self.log_file {
            pairs.push((LOG_FILE_VAR, path.clone()));
        }
        pairs
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selectors_and_repeated_layers() {
        let args = CliArgs::parse_from([
            "urbanpulse",
            "--headless",
            "--city",
            "delhi",
            "--layer",
            "grace",
            "--layer",
            "viirs",
            "--noise-seed",
            "9",
        ]);
        assert!(args.headless);
        assert!(!args.json);
        assert_eq!(args.city.as_deref(), Some("delhi"));
        assert_eq!(args.layers, vec!["grace", "viirs"]);

        let overrides = args.overrides();
        assert!(overrides.contains(&(CITY_VAR, "delhi".to_string())));
        assert!(overrides.contains(&(LAYERS_VAR, "grace,viirs".to_string())));
        assert!(overrides.contains(&(NOISE_SEED_VAR, "9".to_string())));
    }

    #[test]
    fn no_flags_means_no_overrides() {
        assert!(CliArgs::default().overrides().is_empty());
    }

    #[test]
    fn help_lists_selector_flags() {
        let help = CliArgs::help_text();
        assert!(help.contains("--city"));
        assert!(help.contains("--noise-seed"));
    }
}
