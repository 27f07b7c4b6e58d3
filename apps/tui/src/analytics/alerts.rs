use super::aggregator::{CityMetrics, WATER_STRESS_THRESHOLD};
use super::profiles::RangeProfile;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertKind {
    Heat,
    WaterStress,
    RapidGrowth,
}

impl AlertKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Heat => "Heat Alert",
            Self::WaterStress => "Water Stress Alert",
            Self::RapidGrowth => "Rapid Growth Alert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertPriority {
    High,
    Medium,
}

impl AlertPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub priority: AlertPriority,
    pub message: String,
}

/// Alerts use thresholds that tighten or relax with the selected window,
/// except water stress which is fixed.
pub fn evaluate_alerts(metrics: &CityMetrics) -> Vec<Alert> {
    let range = RangeProfile::of(metrics.period);
    let period = &metrics.time_range;
    let mut alerts = Vec::new();

    let intensity = metrics.temperature.heat_island_intensity;
    if intensity > range.heat_alert_threshold {
        alerts.push(Alert {
            kind: AlertKind::Heat,
            priority: AlertPriority::High,
            message: format!(
                "High urban heat island intensity detected: +{intensity}°C/year ({period})"
            ),
        });
    }

    let stress = metrics.water.stress_level;
    if stress > WATER_STRESS_THRESHOLD {
        alerts.push(Alert {
            kind: AlertKind::WaterStress,
            priority: AlertPriority::High,
            message: format!("Critical water stress level: {stress}% ({period})"),
        });
    }

    let growth_rate = metrics.growth.growth_rate;
    if growth_rate > range.growth_alert_threshold {
        alerts.push(Alert {
            kind: AlertKind::RapidGrowth,
            priority: AlertPriority::Medium,
            message: format!("Very high urban growth rate: {growth_rate:.1}% annually ({period})"),
        });
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::aggregator::UrbanAnalyzer;
    use crate::domain::{City, FocusArea, TimeRange};

    fn alerts_for(city: City, range: TimeRange) -> Vec<Alert> {
        let metrics = UrbanAnalyzer::default().city_metrics(city, FocusArea::PublicHealthHeat, range);
        evaluate_alerts(&metrics)
    }

    #[test]
    fn delhi_recent_decade_raises_heat_and_water() {
        let alerts = alerts_for(City::Delhi, TimeRange::RecentDecade);
        let kinds: Vec<_> = alerts.iter().map(|alert| alert.kind).collect();
        assert_eq!(kinds, vec![AlertKind::Heat, AlertKind::WaterStress]);
        assert_eq!(
            alerts[0].message,
            "High urban heat island intensity detected: +0.14°C/year (2014-2024 (Recent Decade))"
        );
        assert_eq!(
            alerts[1].message,
            "Critical water stress level: 78% (2014-2024 (Recent Decade))"
        );
    }

    #[test]
    fn bangalore_recent_decade_flags_heat_and_growth() {
        let alerts = alerts_for(City::Bangalore, TimeRange::RecentDecade);
        let kinds: Vec<_> = alerts.iter().map(|alert| alert.kind).collect();
        assert_eq!(kinds, vec![AlertKind::Heat, AlertKind::RapidGrowth]);
        assert_eq!(alerts[1].priority, AlertPriority::Medium);
        assert!(alerts[1].message.contains("5.2% annually"));
    }

    #[test]
    fn long_term_window_uses_relaxed_thresholds() {
        // 0.12 > 0.10 and 3.8 * 2.4 > 3.5
        let alerts = alerts_for(City::Mumbai, TimeRange::LongTerm);
        let kinds: Vec<_> = alerts.iter().map(|alert| alert.kind).collect();
        assert_eq!(
            kinds,
            vec![AlertKind::Heat, AlertKind::WaterStress, AlertKind::RapidGrowth]
        );
    }

    #[test]
    fn hyderabad_recent_years_has_only_heat_and_growth_checks() {
        // intensity 0.21 > 0.20, growth 7.2 > 6.0, stress 58 is fine
        let alerts = alerts_for(City::Hyderabad, TimeRange::RecentYears);
        let kinds: Vec<_> = alerts.iter().map(|alert| alert.kind).collect();
        assert_eq!(kinds, vec![AlertKind::Heat, AlertKind::RapidGrowth]);
    }
}
