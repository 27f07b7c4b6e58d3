//! Snapshot of everything the dashboard shows for one selection, used by the
//! headless text and JSON output.

use crate::analytics::alerts::{evaluate_alerts, Alert};
use crate::analytics::catalog::{data_coverage, indicators, DataCoverage, Indicator};
use crate::analytics::insights::{context_note, cost_benefit, insights, CostBenefit, Insight};
use crate::analytics::solutions::{CostParseError, ImpactCalculator, ImpactSummary};
use crate::analytics::zones::{zone_table, ZoneTable};
use crate::analytics::{CityMetrics, PeriodSnapshot, RangeProfile, UrbanAnalyzer};
use crate::domain::Selection;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub generated_at: String,
    pub selection: Selection,
    pub context: &'static str,
    pub metrics: CityMetrics,
    pub indicators: Vec<Indicator>,
    pub coverage: DataCoverage,
    pub alerts: Vec<Alert>,
    pub zones: ZoneTable,
    pub priority_distribution: Vec<(&'static str, usize)>,
    pub insights: Vec<Insight>,
    pub cost_benefit: Vec<CostBenefit>,
    pub period_comparison: Vec<PeriodSnapshot>,
    pub solutions: Option<ImpactSummary>,
}

pub fn build_report(
    analyzer: &UrbanAnalyzer,
    selection: &Selection,
    calculator: &ImpactCalculator,
    generated_at: DateTime<Utc>,
) -> Result<DashboardReport, CostParseError> {
    let metrics =
        analyzer.city_metrics_by_label(&selection.city, &selection.focus, &selection.period);
    let range = RangeProfile::of(metrics.period);
    let zones = zone_table(metrics.focus_area, range);

    Ok(DashboardReport {
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        selection: selection.clone(),
        context: context_note(&selection.period),
        indicators: indicators(&metrics),
        coverage: data_coverage(&metrics),
        alerts: evaluate_alerts(&metrics),
        priority_distribution: zones.priority_distribution(),
        zones,
        insights: insights(&metrics),
        cost_benefit: cost_benefit(range),
        period_comparison: analyzer.period_comparison(&selection.city, &selection.focus),
        solutions: calculator.summary()?,
        metrics,
    })
}

pub fn render_json(report: &DashboardReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn render_text(report: &DashboardReport) -> String {
    let metrics = &report.metrics;
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "\nUrbanPulse Report");
    let _ = writeln!(out, "=================");
    let _ = writeln!(out, "Generated: {}", report.generated_at);
    let _ = writeln!(out, "City: {}", metrics.city);
    let _ = writeln!(out, "Focus: {}", metrics.focus_area.label());
    let _ = writeln!(out, "Period: {}", metrics.time_range);
    let layers: Vec<&str> = report.selection.layers.iter().map(|l| l.badge()).collect();
    let _ = writeln!(out, "Layers: {}", layers.join(", "));
    let _ = writeln!(out, "{}", report.context);

    let _ = writeln!(out, "\nKey Metrics:");
    let _ = writeln!(
        out,
        "- {}: {:.2} [{}]",
        metrics.metric_label,
        metrics.primary_metric,
        metrics.risk_level.badge()
    );
    let _ = writeln!(out, "- Population: {:.1}M", metrics.population);
    let _ = writeln!(out, "- Growth rate: {:.1}%/yr", metrics.growth_rate);
    for indicator in &report.indicators {
        let _ = writeln!(out, "- {}: {}", indicator.label, indicator.value);
    }

    let _ = writeln!(out, "\nAlerts:");
    if report.alerts.is_empty() {
        let _ = writeln!(out, "- none");
    }
    for alert in &report.alerts {
        let _ = writeln!(
            out,
            "- [{}] {}: {}",
            alert.priority.label(),
            alert.kind.title(),
            alert.message
        );
    }

    let _ = writeln!(out, "\nZones:");
    for row in &report.zones.rows {
        let values: Vec<String> = report
            .zones
            .columns
            .iter()
            .zip(&row.values)
            .map(|(column, value)| format!("{column} {}", value.display()))
            .collect();
        let _ = writeln!(
            out,
            "- {} | {} | {}",
            row.zone,
            values.join(" | "),
            row.priority
        );
    }

    let _ = writeln!(out, "\nInsights:");
    for insight in &report.insights {
        let _ = writeln!(
            out,
            "- {} (impact {}%, feasibility {}%, {}): {}",
            insight.title,
            insight.impact,
            insight.feasibility(),
            insight.implementation,
            insight.description
        );
    }

    let _ = writeln!(out, "\nPeriod Comparison:");
    for snapshot in &report.period_comparison {
        let _ = writeln!(
            out,
            "- {} | growth {:.1}% | heat {:.2}°C/yr | water {}% | population {:.1}M",
            snapshot.period.label(),
            snapshot.growth_rate,
            snapshot.heat_intensity,
            snapshot.water_stress,
            snapshot.population
        );
    }

    let _ = writeln!(out, "\nClimate Solutions:");
    match &report.solutions {
        Some(summary) => {
            let _ = writeln!(out, "- Selected: {}", summary.selected.join(", "));
            let _ = writeln!(out, "- Total investment: ${:.1}M", summary.total_cost);
            let _ = writeln!(out, "- Combined impact: {}%", summary.combined_impact);
        }
        None => {
            let _ = writeln!(out, "- none selected");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn report_for(city: &str, focus: &str, period: &str) -> DashboardReport {
        let selection = Selection {
            city: city.to_string(),
            focus: focus.to_string(),
            period: period.to_string(),
            ..Selection::default()
        };
        let at = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .unwrap_or_default();
        build_report(
            &UrbanAnalyzer::default(),
            &selection,
            &ImpactCalculator::default(),
            at,
        )
        .expect("catalog costs parse")
    }

    #[test]
    fn report_collects_every_view() {
        let report = report_for("Delhi, India", "Water & Resources", "2014-2024 (Recent Decade)");
        assert_eq!(report.generated_at, "2024-05-01T12:00:00Z");
        assert!((report.metrics.primary_metric - 78.0).abs() < f64::EPSILON);
        assert_eq!(report.alerts.len(), 2);
        assert_eq!(report.period_comparison.len(), 3);
        assert_eq!(report.zones.rows.len(), 5);
        assert_eq!(report.coverage.years_analysed, 11);
        assert_eq!(report.solutions.as_ref().map(|s| s.combined_impact), Some(50));
    }

    #[test]
    fn text_report_lists_headline_and_alerts() {
        let report = report_for("Delhi, India", "Water & Resources", "2014-2024 (Recent Decade)");
        let text = render_text(&report);
        assert!(text.contains("City: Delhi, India"));
        assert!(text.contains("- Water Stress Level (%): 78.00 [HIGH]"));
        assert!(text.contains("[High] Water Stress Alert: Critical water stress level: 78%"));
        assert!(text.contains("Layers: Landsat, MODIS"));
        assert!(text.contains("- Total investment: $10.5M"));
    }

    #[test]
    fn json_report_is_machine_readable() {
        let report = report_for("Atlantis", "nonsense", "someday");
        let json = render_json(&report).expect("report serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["metrics"]["city"], "Atlantis");
        assert_eq!(value["metrics"]["metric_label"], "Vegetation Index");
        assert_eq!(value["metrics"]["risk_level"], "high");
        assert_eq!(value["context"], "Historical urban development analysis.");
        assert_eq!(value["selection"]["layers"][0], "landsat_urban_expansion");
    }
}
