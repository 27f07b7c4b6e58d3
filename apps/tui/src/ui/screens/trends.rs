use crate::analytics::trends::{
    comparative_air_quality, population_index, water_indicators, with_years,
};
use crate::app::App;
use crate::ui::widgets::charts::{
    axis_bounds, bar_chart, bar_value, line_chart, line_dataset, AxisSpec,
};
use crate::ui::widgets::tables::data_table;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Cell, Paragraph, Row};
use ratatui::Frame;

pub fn render_trends(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(16),
            Constraint::Length(6),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(TextLine::from(vec![
            Span::styled(
                "Trend Analysis Period: ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "{} - Comparing urban development patterns across time",
                app.metrics.time_range
            )),
        ])),
        chunks[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[1]);

    render_expansion(app, f, left[0]);
    render_air_quality(app, f, left[1]);
    render_temperature(app, f, right[0]);
    render_water(app, f, right[1]);
    render_period_comparison(app, f, chunks[2]);
}

fn year_axis(years: &[i32]) -> AxisSpec<'static> {
    AxisSpec {
        title: "Year",
        bounds: axis_bounds(years.iter().map(|year| f64::from(*year))),
        precision: 0,
    }
}

fn render_expansion(app: &App, f: &mut Frame<'_>, area: Rect) {
    let metrics = &app.metrics;
    let years = &metrics.growth.years;
    let built_up = with_years(years, &metrics.growth.built_up_area);
    let population = with_years(years, &population_index(metrics));
    let y = AxisSpec {
        title: "Index Value",
        bounds: axis_bounds(built_up.iter().chain(&population).map(|point| point.1)),
        precision: 0,
    };
    let title = format!("Urban Development Trend ({})", metrics.time_range);
    let datasets = vec![
        line_dataset("Built_up_Area", Color::Red, &built_up),
        line_dataset("Population", Color::Blue, &population),
    ];
    f.render_widget(line_chart(&title, datasets, &year_axis(years), &y), area);
}

fn outlook_color(outlook: &str) -> Color {
    match outlook {
        "Improving" => Color::Green,
        "Worsening" => Color::Red,
        _ => Color::Yellow,
    }
}

fn render_air_quality(app: &App, f: &mut Frame<'_>, area: Rect) {
    let bars: Vec<(String, u64, Color)> = comparative_air_quality()
        .into_iter()
        .map(|row| {
            (
                row.city.to_string(),
                u64::from(row.aqi),
                outlook_color(row.outlook),
            )
        })
        .collect();
    let title = format!("Comparative Air Quality ({})", app.metrics.time_range);
    f.render_widget(bar_chart(&title, &bars, 9), area);
}

fn render_temperature(app: &App, f: &mut Frame<'_>, area: Rect) {
    let metrics = &app.metrics;
    let temperatures = with_years(&metrics.temperature.years, &metrics.temperature.temperatures);
    let y = AxisSpec {
        title: "Temperature (°C)",
        bounds: axis_bounds(temperatures.iter().map(|point| point.1)),
        precision: 1,
    };
    let title = format!("Surface Temperature Trend ({})", metrics.time_range);
    let datasets = vec![line_dataset("Temperature", Color::Red, &temperatures)];
    f.render_widget(
        line_chart(&title, datasets, &year_axis(&metrics.temperature.years), &y),
        area,
    );
}

fn status_color(status: &str) -> Color {
    match status {
        "Critical" => Color::Red,
        "High" => Color::LightRed,
        _ => Color::Yellow,
    }
}

fn render_water(app: &App, f: &mut Frame<'_>, area: Rect) {
    let bars: Vec<(String, u64, Color)> = water_indicators(&app.metrics)
        .into_iter()
        .map(|indicator| {
            // Decline rates are small fractions, so show them in tenths
            let (label, value) = if indicator.value < 10.0 {
                (
                    format!("{} x10", indicator.label),
                    bar_value(indicator.value, 10.0),
                )
            } else {
                (indicator.label.to_string(), bar_value(indicator.value, 1.0))
            };
            (label, value, status_color(indicator.status))
        })
        .collect();
    let title = format!("Water Resource Indicators ({})", app.metrics.time_range);
    f.render_widget(bar_chart(&title, &bars, 12), area);
}

fn render_period_comparison(app: &App, f: &mut Frame<'_>, area: Rect) {
    let snapshots = app
        .analyzer
        .period_comparison(&app.selection.city, &app.selection.focus);

    let rows: Vec<Row<'static>> = snapshots
        .iter()
        .map(|snapshot| {
            let style = if snapshot.period == app.metrics.period {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                Cell::from(snapshot.period.label()),
                Cell::from(format!("{:.1}%", snapshot.growth_rate)),
                Cell::from(format!("{:.2}°C/yr", snapshot.heat_intensity)),
                Cell::from(format!("{}%", snapshot.water_stress)),
                Cell::from(format!("{:.1}M", snapshot.population)),
            ])
            .style(style)
        })
        .collect();

    let table = data_table(
        "Historical Trend Comparison",
        &["Period", "Growth Rate", "Heat Intensity", "Water Stress", "Population"],
        rows,
        vec![
            Constraint::Length(26),
            Constraint::Length(12),
            Constraint::Length(15),
            Constraint::Length(13),
            Constraint::Length(11),
        ],
    );
    f.render_widget(table, area);
}
