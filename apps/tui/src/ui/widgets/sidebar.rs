use crate::app::{App, SidebarControl};
use crate::domain::DataLayer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_sidebar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Controls ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let mut lines = Vec::new();
    for control in SidebarControl::ALL {
        let active = control == app.sidebar_control;
        lines.push(control_heading(control.label(), active));

        match control {
            SidebarControl::Focus => lines.push(value_line(&app.selection.focus, active)),
            SidebarControl::City => lines.push(value_line(&app.selection.city, active)),
            SidebarControl::Period => lines.push(value_line(&app.selection.period, active)),
            SidebarControl::Layers => lines.extend(layer_lines(app, active)),
        }
        lines.push(TextLine::from(""));
    }

    let badges: Vec<Span<'static>> = app
        .selection
        .layers
        .iter()
        .map(|layer| {
            Span::styled(
                format!(" {} ", layer.badge()),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            )
        })
        .collect();
    if badges.is_empty() {
        lines.push(TextLine::from(Span::styled(
            "No layers selected",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(TextLine::from(badges));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn control_heading(label: &'static str, active: bool) -> TextLine<'static> {
    let style = if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if active { "> " } else { "  " };
    TextLine::from(Span::styled(format!("{marker}{label}"), style))
}

fn value_line(value: &str, active: bool) -> TextLine<'static> {
    let text = if active {
        format!("  < {value} >")
    } else {
        format!("    {value}")
    };
    TextLine::from(Span::styled(text, Style::default().fg(Color::White)))
}

fn layer_lines(app: &App, active: bool) -> Vec<TextLine<'static>> {
    DataLayer::ALL
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            let check = if app.selection.has_layer(*layer) {
                "[x]"
            } else {
                "[ ]"
            };
            let under_cursor = active && index == app.layer_cursor;
            let style = if under_cursor {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            TextLine::from(Span::styled(format!("  {check} {}", layer.label()), style))
        })
        .collect()
}
