use crate::analytics::insights::{cost_benefit, insights, Insight};
use crate::analytics::RangeProfile;
use crate::app::App;
use crate::ui::widgets::charts::bar_chart;
use crate::ui::widgets::tables::data_table;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Wrap};
use ratatui::Frame;

pub fn render_insights(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_recommendations(app, f, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(6)])
        .split(columns[1]);
    render_cost_benefit(app, f, right[0]);
    render_roi(app, f, right[1]);
}

fn render_recommendations(app: &App, f: &mut Frame<'_>, area: Rect) {
    let cards = insights(&app.metrics);
    let outer = Block::default()
        .title(format!(
            " {} - Smart Recommendations ({}) ",
            app.metrics.focus_area.label(),
            app.metrics.time_range
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let count = u32::try_from(cards.len()).unwrap_or(1).max(1);
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(cards.iter().map(|_| Constraint::Ratio(1, count)))
        .split(inner);

    for (card, slot) in cards.iter().zip(slots.iter()) {
        render_insight(card, f, *slot);
    }
}

fn render_insight(insight: &Insight, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(insight.title.clone())
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let text = Text::from(vec![
        TextLine::from(insight.description.clone()),
        TextLine::from(vec![
            Span::styled("Data sources: ", Style::default().fg(Color::Gray)),
            Span::raw(insight.data_sources.join(", ")),
        ]),
        TextLine::from(vec![
            Span::styled("Implementation: ", Style::default().fg(Color::Gray)),
            Span::raw(insight.implementation),
            Span::styled("  Context: ", Style::default().fg(Color::Gray)),
            Span::raw(insight.time_context.clone()),
        ]),
    ]);
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), parts[0]);

    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Green))
            .percent(u16::from(insight.impact))
            .label(format!("Projected impact {}%", insight.impact)),
        parts[1],
    );
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Blue))
            .percent(u16::from(insight.feasibility()))
            .label(format!("Feasibility {}%", insight.feasibility())),
        parts[2],
    );
}

fn render_cost_benefit(app: &App, f: &mut Frame<'_>, area: Rect) {
    let rows: Vec<Row<'static>> = cost_benefit(RangeProfile::of(app.metrics.period))
        .into_iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.initiative),
                Cell::from(format!("${:.0}M", row.estimated_cost)),
                Cell::from(format!("${:.0}M", row.expected_benefit)),
                Cell::from(format!("{}%", row.roi_percentage)),
            ])
        })
        .collect();

    let title = format!("Cost-Benefit Analysis ({})", app.metrics.time_range);
    let table = data_table(
        &title,
        &["Initiative", "Cost", "Benefit", "ROI"],
        rows,
        vec![
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(5),
        ],
    );
    f.render_widget(table, area);
}

fn render_roi(app: &App, f: &mut Frame<'_>, area: Rect) {
    let bars: Vec<(String, u64, Color)> = cost_benefit(RangeProfile::of(app.metrics.period))
        .into_iter()
        .map(|row| {
            let label = row
                .initiative
                .split_whitespace()
                .next()
                .unwrap_or(row.initiative)
                .to_string();
            (label, u64::from(row.roi_percentage), Color::Magenta)
        })
        .collect();
    let title = format!("Investment ROI by Initiative ({})", app.metrics.time_range);
    f.render_widget(bar_chart(&title, &bars, 10), area);
}
