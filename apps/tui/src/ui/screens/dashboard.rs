use crate::analytics::alerts::{evaluate_alerts, AlertPriority};
use crate::analytics::trends::{groundwater_index, population_index, transit_coverage, with_years};
use crate::analytics::{CityMetrics, RangeProfile};
use crate::app::App;
use crate::domain::{FocusArea, RiskLevel};
use crate::ui::widgets::cards::{render_card_row, risk_color, MetricCard};
use crate::ui::widgets::charts::{
    axis_bounds, bar_chart, bar_value, line_chart, line_dataset, AxisSpec,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>, area: Rect) {
    let metrics = &app.metrics;
    let range = RangeProfile::of(metrics.period);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Period banner
            Constraint::Length(5), // Metric cards
            Constraint::Min(8),    // Focus chart
            Constraint::Length(7), // Context and alerts
        ])
        .split(area);

    f.render_widget(period_banner(metrics), chunks[0]);
    render_card_row(f, chunks[1], &metric_cards(metrics, range));
    render_focus_chart(metrics, f, chunks[2]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[3]);
    render_context(metrics, range, f, bottom[0]);
    render_alerts(metrics, f, bottom[1]);
}

fn period_banner(metrics: &CityMetrics) -> Paragraph<'static> {
    let years = &metrics.growth.years;
    let first = years.first().copied().unwrap_or_default();
    let last = years.last().copied().unwrap_or_default();
    Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Analysis Period: ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "{} - Showing data from {first} to {last}",
            metrics.time_range
        )),
    ]))
}

/// Small values such as heat intensity keep two decimals.
pub fn format_primary(value: f64) -> String {
    if value.abs() < 10.0 {
        format!("{value:.2}")
    } else {
        format!("{value:.0}")
    }
}

fn metric_cards(metrics: &CityMetrics, range: &RangeProfile) -> [MetricCard; 4] {
    [
        MetricCard::new(
            format!(
                " {} [{}] ",
                metrics.focus_area.short_label(),
                metrics.risk_level.badge()
            ),
            format_primary(metrics.primary_metric),
            metrics.metric_label,
            risk_color(metrics.risk_level),
        ),
        MetricCard::new(
            " Urban Population ",
            format!("{:.1}M", metrics.population),
            format!(
                "{} growth, {:.1}% annual",
                range.time_context, metrics.growth_rate
            ),
            risk_color(RiskLevel::Medium),
        ),
        MetricCard::new(
            " Heat Island ",
            format!("+{}°C", metrics.temperature.heat_island_intensity),
            format!("Per year, {}", range.trend_context),
            Color::Blue,
        ),
        MetricCard::new(
            " Water Stress ",
            format!("{}%", metrics.water.stress_level),
            metrics.water.trend,
            risk_color(RiskLevel::Low),
        ),
    ]
}

fn render_focus_chart(metrics: &CityMetrics, f: &mut Frame<'_>, area: Rect) {
    let years = &metrics.growth.years;
    let year_bounds = axis_bounds(years.iter().map(|year| f64::from(*year)));
    let x = AxisSpec {
        title: "Year",
        bounds: year_bounds,
        precision: 0,
    };
    let title = format!(
        "{} - {} Analysis",
        metrics.focus_area.label(),
        metrics.time_range
    );

    match metrics.focus_area {
        FocusArea::HousingUrbanGrowth => {
            let built_up = with_years(years, &metrics.growth.built_up_area);
            let population = with_years(years, &population_index(metrics));
            let y = AxisSpec {
                title: "Index",
                bounds: axis_bounds(built_up.iter().chain(&population).map(|point| point.1)),
                precision: 0,
            };
            let datasets = vec![
                line_dataset("Built-up Area (km²)", Color::Red, &built_up),
                line_dataset("Population (x0.1M)", Color::Blue, &population),
            ];
            f.render_widget(line_chart(&title, datasets, &x, &y), area);
        }
        FocusArea::PublicHealthHeat => {
            let temperatures = with_years(years, &metrics.temperature.temperatures);
            let y = AxisSpec {
                title: "Temperature (°C)",
                bounds: axis_bounds(temperatures.iter().map(|point| point.1)),
                precision: 1,
            };
            let datasets = vec![line_dataset("Temperature", Color::LightRed, &temperatures)];
            f.render_widget(line_chart(&title, datasets, &x, &y), area);
        }
        FocusArea::WaterResources => {
            let groundwater = with_years(years, &groundwater_index(metrics));
            let y = AxisSpec {
                title: "Groundwater Index",
                bounds: axis_bounds(groundwater.iter().map(|point| point.1)),
                precision: 0,
            };
            let datasets = vec![line_dataset("Groundwater", Color::LightBlue, &groundwater)];
            f.render_widget(line_chart(&title, datasets, &x, &y), area);
        }
        FocusArea::GreenSpaces => {
            let vegetation = with_years(years, &metrics.growth.vegetation_loss);
            let y = AxisSpec {
                title: "Vegetation Index Change",
                bounds: axis_bounds(vegetation.iter().map(|point| point.1)),
                precision: 0,
            };
            let datasets = vec![line_dataset("Vegetation", Color::Green, &vegetation)];
            f.render_widget(line_chart(&title, datasets, &x, &y), area);
        }
        FocusArea::Transportation => {
            let bars: Vec<(String, u64, Color)> = years
                .iter()
                .zip(transit_coverage(metrics))
                .map(|(year, coverage)| {
                    (format!("'{:02}", year % 100), bar_value(coverage, 1.0), Color::Cyan)
                })
                .collect();
            f.render_widget(bar_chart(&title, &bars, 3), area);
        }
    }
}

fn render_context(metrics: &CityMetrics, range: &RangeProfile, f: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        TextLine::from(Span::styled(
            format!("{} Context", metrics.time_range),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(range.context),
    ];
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" Time-based Insights ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_alerts(metrics: &CityMetrics, f: &mut Frame<'_>, area: Rect) {
    let alerts = evaluate_alerts(metrics);
    let lines: Vec<TextLine<'static>> = if alerts.is_empty() {
        vec![TextLine::from(Span::styled(
            "No alerts for the current selection",
            Style::default().fg(Color::Green),
        ))]
    } else {
        alerts
            .iter()
            .map(|alert| {
                let color = match alert.priority {
                    AlertPriority::High => Color::Red,
                    AlertPriority::Medium => Color::Yellow,
                };
                TextLine::from(vec![
                    Span::styled(
                        format!("{}: ", alert.kind.title()),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(alert.message.clone()),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" Time-based Data Alerts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
