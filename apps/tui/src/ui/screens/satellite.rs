use crate::analytics::catalog::{
    data_coverage, indicators, ARCHIVES, DATA_PORTALS, SATELLITES, UPDATE_FREQUENCY,
};
use crate::app::App;
use crate::ui::widgets::tables::data_table;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Wrap};
use ratatui::Frame;

pub fn render_satellite(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(9),
        ])
        .split(area);

    f.render_widget(live_banner(app), chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    render_sensors(app, f, columns[0]);
    render_indicators(app, f, columns[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);
    render_portals(app, f, bottom[0]);
    render_endpoints(app, f, bottom[1]);
}

fn live_banner(app: &App) -> Paragraph<'static> {
    // Blink the marker on the upper half of the animation cycle
    let live_style = if app.animation_counter.sin() >= 0.0 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Paragraph::new(TextLine::from(vec![
        Span::styled("● LIVE ", live_style),
        Span::styled(
            "Satellite Data Context: ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "{} - Historical satellite imagery analysis",
            app.metrics.time_range
        )),
    ]))
}

fn render_sensors(app: &App, f: &mut Frame<'_>, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .split(area);

    let rows: Vec<Row<'static>> = SATELLITES
        .iter()
        .map(|satellite| {
            Row::new(vec![
                Cell::from(satellite.name),
                Cell::from(satellite.status.label())
                    .style(Style::default().fg(Color::Green)),
                Cell::from(satellite.resolution),
                Cell::from(satellite.coverage),
                Cell::from(satellite.primary_use),
            ])
        })
        .collect();
    let title = format!("Active Satellite Sensors ({})", app.metrics.time_range);
    let table = data_table(
        &title,
        &["Sensor", "Status", "Resolution", "Coverage", "Primary Use"],
        rows,
        vec![
            Constraint::Length(19),
            Constraint::Length(8),
            Constraint::Length(11),
            Constraint::Length(9),
            Constraint::Min(20),
        ],
    );
    f.render_widget(table, parts[0]);

    let block = Block::default()
        .title(" Sensor Readiness ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(parts[1]);
    f.render_widget(block, parts[1]);

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(SATELLITES.iter().map(|_| Constraint::Length(1)))
        .split(inner);
    for (satellite, slot) in SATELLITES.iter().zip(slots.iter()) {
        let readiness = satellite.status.readiness();
        f.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(Color::Green))
                .percent(readiness)
                .label(format!("{} {readiness}%", satellite.name)),
            *slot,
        );
    }
}

fn render_indicators(app: &App, f: &mut Frame<'_>, area: Rect) {
    let coverage = data_coverage(&app.metrics);
    let mut lines: Vec<TextLine<'static>> = indicators(&app.metrics)
        .into_iter()
        .map(|indicator| {
            TextLine::from(vec![
                Span::styled(
                    format!("{}: ", indicator.label),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    indicator.value,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "Data Coverage",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(TextLine::from(format!(
        "Data Range: {} - {}",
        coverage.first_year, coverage.last_year
    )));
    lines.push(TextLine::from(format!(
        "Update Frequency: {UPDATE_FREQUENCY}"
    )));
    lines.push(TextLine::from(format!(
        "Historical Context: {} years of urban analysis",
        coverage.years_analysed
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" Time-based Urban Indicators ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_portals(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut lines: Vec<TextLine<'static>> = DATA_PORTALS
        .iter()
        .map(|portal| {
            TextLine::from(vec![
                Span::styled(
                    format!("{}: ", portal.name),
                    Style::default().fg(Color::LightBlue),
                ),
                Span::raw(portal.description),
            ])
        })
        .collect();
    lines.push(TextLine::from(Span::styled(
        "Time-series archives",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    let archives: Vec<String> = ARCHIVES
        .iter()
        .map(|(name, span)| format!("{name} {span}"))
        .collect();
    lines.push(TextLine::from(archives.join(", ")));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(format!(
                    " NASA Data Portals for {} ",
                    app.metrics.time_range
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_endpoints(app: &App, f: &mut Frame<'_>, area: Rect) {
    let rows: Vec<Row<'static>> = app
        .analyzer
        .fetcher()
        .endpoints()
        .iter()
        .map(|endpoint| Row::new(vec![Cell::from(endpoint.name), Cell::from(endpoint.url)]))
        .collect();
    let table = data_table(
        "Declared Endpoints (offline)",
        &["Service", "URL"],
        rows,
        vec![Constraint::Length(12), Constraint::Min(20)],
    );
    f.render_widget(table, area);
}
