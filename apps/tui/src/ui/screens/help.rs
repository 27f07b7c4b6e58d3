use crate::ui::widgets::popup::render_popup;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::Frame;

const KEY_BINDINGS: [(&str, &str); 12] = [
    ("?, F1", "Toggle this help popup"),
    ("Esc", "Close the help popup"),
    ("Space", "Pause/resume animations"),
    ("Tab, Shift+Tab", "Next / previous tab"),
    ("1-6", "Jump to a tab"),
    ("Up, Down", "Select a sidebar control"),
    ("Left, Right", "Change the selected control's value"),
    ("Enter", "Toggle the highlighted data layer"),
    ("j, k", "Move through the solution catalog"),
    ("x", "Select or drop a solution in the impact calculator"),
    ("q", "Quit application"),
    ("--headless", "Print the report instead of starting the dashboard"),
];

fn key_line(key: &str, description: &str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" - {description}")),
    ])
}

pub fn help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "UrbanPulse",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Satellite-informed urban analytics for five Indian cities across three analysis periods.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(
        KEY_BINDINGS
            .iter()
            .map(|(key, description)| key_line(key, description)),
    );

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "CLI Options:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}

pub fn render_help(f: &mut Frame<'_>, area: Rect) {
    render_popup(f, area, "Help & Keyboard Shortcuts", help_lines());
}
