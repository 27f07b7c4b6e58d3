use crate::analytics::solutions::{CostParseError, ImpactCalculator, SOLUTIONS};
use crate::analytics::{CityMetrics, UrbanAnalyzer};
use crate::config::AppConfig;
use crate::domain::{DataLayer, Selection};
use crate::report::{build_report, DashboardReport};
use chrono::Utc;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Urban,
    Trends,
    Zones,
    Insights,
    Satellite,
    Solutions,
}

impl DashboardTab {
    pub const ALL: [Self; 6] = [
        Self::Urban,
        Self::Trends,
        Self::Zones,
        Self::Insights,
        Self::Satellite,
        Self::Solutions,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Urban),
            1 => Some(Self::Trends),
            2 => Some(Self::Zones),
            3 => Some(Self::Insights),
            4 => Some(Self::Satellite),
            5 => Some(Self::Solutions),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Urban => "Urban Dashboard",
            Self::Trends => "Trends",
            Self::Zones => "Zone Analytics",
            Self::Insights => "Smart Insights",
            Self::Satellite => "Live Satellite",
            Self::Solutions => "Climate Solutions",
        }
    }
}

/// Sidebar selector that receives Left/Right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarControl {
    #[default]
    Focus,
    City,
    Period,
    Layers,
}

impl SidebarControl {
    pub const ALL: [Self; 4] = [Self::Focus, Self::City, Self::Period, Self::Layers];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Focus),
            1 => Some(Self::City),
            2 => Some(Self::Period),
            3 => Some(Self::Layers),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Focus => "Focus Area",
            Self::City => "City",
            Self::Period => "Time Period",
            Self::Layers => "Data Layers",
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub selection: Selection,
    pub tab: DashboardTab,
    pub sidebar_control: SidebarControl,
    pub layer_cursor: usize,
    pub solution_cursor: usize,
    pub show_help: bool,
    pub animation_paused: bool,
    pub animation_counter: f64,
    pub last_frame: Instant,
    pub status_message: String,
    pub analyzer: UrbanAnalyzer,
    pub metrics: CityMetrics,
    pub calculator: ImpactCalculator,
}

impl App {
    pub fn new(selection: Selection, analyzer: UrbanAnalyzer) -> Self {
        let metrics =
            analyzer.city_metrics_by_label(&selection.city, &selection.focus, &selection.period);
        Self {
            running: true,
            selection,
            tab: DashboardTab::default(),
            sidebar_control: SidebarControl::default(),
            layer_cursor: 0,
            solution_cursor: 0,
            show_help: false,
            animation_paused: false,
            animation_counter: 0.0,
            last_frame: Instant::now(),
            status_message: String::new(),
            analyzer,
            metrics,
            calculator: ImpactCalculator::default(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.selection.clone(), UrbanAnalyzer::new(config.noise))
    }

    /// Recomputes the metrics after any selector change.
    pub fn refresh(&mut self) {
        self.metrics = self.analyzer.city_metrics_by_label(
            &self.selection.city,
            &self.selection.focus,
            &self.selection.period,
        );
        self.status_message = format!(
            "{} | {} | {}",
            self.metrics.city,
            self.metrics.focus_area.label(),
            self.metrics.time_range
        );
        debug!(status = %self.status_message, "selection changed");
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.animation_paused {
            return;
        }

        // Cycles between 0 and 2*PI
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }
    }

    pub fn toggle_animation_pause(&mut self) {
        self.animation_paused = !self.animation_paused;
        self.status_message = if self.animation_paused {
            "Animation paused".to_string()
        } else {
            "Animation resumed".to_string()
        };
    }

    pub fn toggle_layer_at_cursor(&mut self) {
        if let Some(layer) = DataLayer::from_index(self.layer_cursor) {
            self.selection.toggle_layer(layer);
            let state = if self.selection.has_layer(layer) {
                "enabled"
            } else {
                "disabled"
            };
            self.status_message = format!("{} layer {state}", layer.badge());
        }
    }

    pub fn toggle_solution_at_cursor(&mut self) {
        self.calculator.toggle(self.solution_cursor);
        if let Some(solution) = SOLUTIONS.get(self.solution_cursor) {
            self.status_message = format!(
                "{} solution(s) selected, last toggled: {}",
                self.calculator.selected_count(),
                solution.name
            );
        }
    }

    pub fn report(&self) -> Result<DashboardReport, CostParseError> {
        build_report(&self.analyzer, &self.selection, &self.calculator, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{City, FocusArea, RiskLevel};

    #[test]
    fn refresh_follows_selection() {
        let mut app = App::new(Selection::default(), UrbanAnalyzer::default());
        assert_eq!(app.metrics.city, "Bangalore, India");

        app.selection.city = City::Delhi.label().to_string();
        app.selection.focus = FocusArea::WaterResources.label().to_string();
        app.refresh();
        assert_eq!(app.metrics.risk_level, RiskLevel::High);
        assert!(app.status_message.starts_with("Delhi, India | Water & Resources"));
    }

    #[test]
    fn paused_animation_does_not_advance() {
        let mut app = App::new(Selection::default(), UrbanAnalyzer::default());
        app.toggle_animation_pause();
        app.update();
        assert!(app.animation_counter.abs() < f64::EPSILON);
        assert_eq!(app.status_message, "Animation paused");
    }

    #[test]
    fn layer_toggle_uses_cursor() {
        let mut app = App::new(Selection::default(), UrbanAnalyzer::default());
        app.layer_cursor = 3;
        app.toggle_layer_at_cursor();
        assert!(app.selection.has_layer(DataLayer::GraceWater));
        assert_eq!(app.status_message, "GRACE layer enabled");
    }

    #[test]
    fn tabs_round_trip_through_index() {
        for tab in DashboardTab::ALL {
            assert_eq!(DashboardTab::from_index(tab.index()), Some(tab));
        }
        assert_eq!(DashboardTab::from_index(6), None);
    }
}
