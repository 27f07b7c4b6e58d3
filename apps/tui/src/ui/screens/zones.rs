use crate::analytics::zones::{zone_markers, zone_table, ZoneColor, ZoneTable};
use crate::analytics::{CityProfile, RangeProfile};
use crate::app::App;
use crate::ui::widgets::charts::{bar_chart, bar_value, empty_panel};
use crate::ui::widgets::tables::data_table;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::{Block, Borders, Cell, Row};
use ratatui::Frame;

/// Degrees of latitude per metre, close enough for a decorative map.
const DEGREES_PER_METRE: f64 = 1.0 / 111_000.0;
const MAP_SPAN: f64 = 0.1;

const fn marker_color(color: ZoneColor) -> Color {
    match color {
        ZoneColor::Red => Color::Red,
        ZoneColor::Blue => Color::Blue,
        ZoneColor::Orange => Color::LightRed,
        ZoneColor::Green => Color::Green,
    }
}

pub fn priority_color(priority: &str) -> Color {
    match priority {
        "Critical" | "Immediate" => Color::Red,
        "High" => Color::LightRed,
        "Medium" => Color::Yellow,
        _ => Color::Green,
    }
}

pub fn render_zones(app: &App, f: &mut Frame<'_>, area: Rect) {
    let range = RangeProfile::of(app.metrics.period);
    let table = zone_table(app.metrics.focus_area, range);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_map(app, f, top[0]);
    render_zone_table(app, &table, f, top[1]);
    render_priority_distribution(app, &table, f, bottom[0]);
    render_zone_scores(app, &table, f, bottom[1]);
}

fn render_map(app: &App, f: &mut Frame<'_>, area: Rect) {
    let city = CityProfile::lookup(&app.selection.city);
    let markers = zone_markers(city);
    // Circles breathe with the animation clock
    let pulse = 0.1_f64.mul_add(app.animation_counter.sin(), 1.0);
    let title = format!("Urban Infrastructure Heatmap ({})", app.metrics.time_range);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .marker(Marker::Braille)
        .x_bounds([city.longitude - MAP_SPAN, city.longitude + MAP_SPAN])
        .y_bounds([city.latitude - MAP_SPAN, city.latitude + MAP_SPAN])
        .paint(move |ctx| {
            for marker in &markers {
                ctx.draw(&Circle {
                    x: marker.longitude,
                    y: marker.latitude,
                    radius: marker.radius_m * DEGREES_PER_METRE * pulse,
                    color: marker_color(marker.color),
                });
            }
            ctx.layer();
            for marker in &markers {
                ctx.print(marker.longitude, marker.latitude, marker.name);
            }
        });

    f.render_widget(canvas, area);
}

fn render_zone_table(app: &App, table: &ZoneTable, f: &mut Frame<'_>, area: Rect) {
    let mut header = vec!["Zone"];
    header.extend(table.columns.iter().copied());
    header.push("Priority");

    let rows: Vec<Row<'static>> = table
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![Cell::from(row.zone)];
            cells.extend(row.values.iter().map(|value| Cell::from(value.display())));
            cells.push(
                Cell::from(row.priority).style(Style::default().fg(priority_color(row.priority))),
            );
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(18)];
    widths.extend(table.columns.iter().map(|_| Constraint::Min(10)));
    widths.push(Constraint::Length(10));

    let title = format!(
        "{} - Zone-wise Analysis ({})",
        app.metrics.focus_area.label(),
        app.metrics.time_range
    );
    f.render_widget(data_table(&title, &header, rows, widths), area);
}

fn render_priority_distribution(app: &App, table: &ZoneTable, f: &mut Frame<'_>, area: Rect) {
    let bars: Vec<(String, u64, Color)> = table
        .priority_distribution()
        .into_iter()
        .map(|(priority, count)| {
            (
                priority.to_string(),
                u64::try_from(count).unwrap_or(u64::MAX),
                priority_color(priority),
            )
        })
        .collect();
    let title = format!("Zone Priority Distribution ({})", app.metrics.time_range);
    f.render_widget(bar_chart(&title, &bars, 9), area);
}

fn render_zone_scores(app: &App, table: &ZoneTable, f: &mut Frame<'_>, area: Rect) {
    let Some(column) = table.score_column() else {
        f.render_widget(
            empty_panel(" Zone Scores ", "No numeric column for this focus area"),
            area,
        );
        return;
    };
    let name = table.columns.get(column).copied().unwrap_or("Score");
    let values = table.column_values(column);
    // Fractional growth rates read better in tenths
    let scale = if values.iter().any(|(_, value)| value.fract().abs() > f64::EPSILON) {
        10.0
    } else {
        1.0
    };

    let bars: Vec<(String, u64, Color)> = values
        .into_iter()
        .map(|(zone, value)| (zone.to_string(), bar_value(value, scale), Color::Cyan))
        .collect();

    let suffix = if scale > 1.0 { " x10" } else { "" };
    let title = format!("Zone {name}{suffix} ({})", app.metrics.time_range);
    f.render_widget(bar_chart(&title, &bars, 8), area);
}
