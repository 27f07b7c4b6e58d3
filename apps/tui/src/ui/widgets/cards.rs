use crate::domain::RiskLevel;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub const fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::High => Color::Red,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::Low => Color::Green,
    }
}

pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub detail: String,
    pub color: Color,
}

impl MetricCard {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        detail: impl Into<String>,
        color: Color,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            detail: detail.into(),
            color,
        }
    }

    fn paragraph(&self) -> Paragraph<'static> {
        let lines = vec![
            TextLine::from(Span::styled(
                self.value.clone(),
                Style::default()
                    .fg(self.color)
                    .add_modifier(Modifier::BOLD),
            )),
            TextLine::from(Span::styled(
                self.detail.clone(),
                Style::default().fg(Color::Gray),
            )),
        ];

        Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(self.title.clone())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.color)),
            )
    }
}

/// Lays the cards out side by side with equal widths.
pub fn render_card_row(f: &mut Frame<'_>, area: Rect, cards: &[MetricCard]) {
    if cards.is_empty() {
        return;
    }

    let count = u32::try_from(cards.len()).unwrap_or(1);
    let columns = Layout::horizontal(cards.iter().map(|_| Constraint::Ratio(1, count))).split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        f.render_widget(card.paragraph(), *column);
    }
}
