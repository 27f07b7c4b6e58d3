use crate::analytics::solutions::{
    readiness, Projection, CLIMATE_PROJECTIONS, NEXT_STEPS, SOLUTIONS, VULNERABLE_POPULATIONS,
};
use crate::app::App;
use crate::ui::widgets::tables::{data_table, scroll_offset};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Wrap};
use ratatui::Frame;

pub fn render_solutions(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(10)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(chunks[0]);
    for (projection, slot) in CLIMATE_PROJECTIONS.iter().zip(top.iter()) {
        render_projection(projection, f, *slot);
    }
    render_vulnerable(f, top[2]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    render_catalog(app, f, bottom[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(6)])
        .split(bottom[1]);
    render_calculator(app, f, side[0]);
    render_next_steps(f, side[1]);
}

fn render_projection(projection: &Projection, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", projection.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(1)])
        .split(inner);
    f.render_widget(
        Paragraph::new(Text::from(vec![
            TextLine::from(vec![
                Span::styled(
                    format!("{}: ", projection.metric),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    projection.value,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]),
            TextLine::from(Span::styled(
                projection.delta,
                Style::default().fg(Color::LightRed),
            )),
        ])),
        parts[0],
    );
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Red))
            .percent(projection.severity)
            .label(format!("Severity {}%", projection.severity)),
        parts[1],
    );
}

fn render_vulnerable(f: &mut Frame<'_>, area: Rect) {
    let lines: Vec<TextLine<'static>> = VULNERABLE_POPULATIONS
        .iter()
        .map(|(label, value)| {
            TextLine::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
                Span::styled(*value, Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();
    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .title(" Vulnerable Populations ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(paragraph, area);
}

fn render_catalog(app: &App, f: &mut Frame<'_>, area: Rect) {
    // Borders and header take three rows
    let max_visible = usize::from(area.height.saturating_sub(3)).max(1);
    let offset = scroll_offset(SOLUTIONS.len(), max_visible, app.solution_cursor);

    let rows: Vec<Row<'static>> = SOLUTIONS
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible)
        .map(|(index, solution)| {
            let mark = if app.calculator.is_selected(index) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if index == app.solution_cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                Cell::from(mark),
                Cell::from(solution.name),
                Cell::from(solution.cost),
                Cell::from(solution.impact),
                Cell::from(solution.timeline),
                Cell::from(format!("{}%", readiness(index))),
            ])
            .style(style)
        })
        .collect();

    let table = data_table(
        "Climate Resilience Solutions (j/k move, x select)",
        &["", "Solution", "Cost", "Impact", "Timeline", "Ready"],
        rows,
        vec![
            Constraint::Length(3),
            Constraint::Min(22),
            Constraint::Length(7),
            Constraint::Min(18),
            Constraint::Length(10),
            Constraint::Length(5),
        ],
    );
    f.render_widget(table, area);
}

fn render_calculator(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut lines: Vec<TextLine<'static>> = Vec::new();

    if let Some(solution) = SOLUTIONS.get(app.solution_cursor) {
        lines.push(TextLine::from(Span::styled(
            solution.description,
            Style::default().fg(Color::Gray),
        )));
        lines.push(TextLine::from(format!("Data source: {}", solution.data_source)));
        lines.push(TextLine::from(""));
    }

    match app.calculator.summary() {
        Ok(Some(summary)) => {
            lines.push(TextLine::from(vec![
                Span::styled("Total Investment: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("${:.1}M", summary.total_cost),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(TextLine::from(vec![
                Span::styled("Combined Impact: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{}% improvement", summary.combined_impact),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(TextLine::from(format!(
                "Solutions Selected: {}",
                summary.selected.len()
            )));
        }
        Ok(None) => lines.push(TextLine::from(Span::styled(
            "No solutions selected",
            Style::default().fg(Color::Yellow),
        ))),
        Err(err) => lines.push(TextLine::from(Span::styled(
            format!("Cost data unavailable: {err}"),
            Style::default().fg(Color::Red),
        ))),
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" Impact Calculator ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_next_steps(f: &mut Frame<'_>, area: Rect) {
    let lines: Vec<TextLine<'static>> = NEXT_STEPS
        .iter()
        .enumerate()
        .map(|(index, step)| TextLine::from(format!("{}. {step}", index + 1)))
        .collect();
    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .title(" Next Steps ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}
