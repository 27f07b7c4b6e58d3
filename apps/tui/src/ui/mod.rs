// UI module for urbanpulse
// Frame layout: title and tabs, sidebar plus active tab, status, shortcuts

pub mod screens;
pub mod widgets;

use crate::app::{App, DashboardTab};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

const SIDEBAR_WIDTH: u16 = 34;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and tabs
            Constraint::Min(10),   // Sidebar and tab content
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area());

    render_tabs(app, f, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
        .split(chunks[1]);
    widgets::sidebar::render_sidebar(app, f, body[0]);
    render_tab_content(app, f, body[1]);

    render_status(app, f, chunks[2]);
    f.render_widget(
        Paragraph::new(shortcuts_line()).alignment(Alignment::Center),
        chunks[3],
    );

    if app.show_help {
        let area = f.area();
        screens::help::render_help(f, area);
    }
}

fn render_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles: Vec<TextLine<'static>> = DashboardTab::ALL
        .iter()
        .map(|tab| TextLine::from(format!("{} {}", tab.index() + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title("== UrbanPulse ==")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .select(app.tab.index());
    f.render_widget(tabs, area);
}

fn render_tab_content(app: &App, f: &mut Frame<'_>, area: Rect) {
    match app.tab {
        DashboardTab::Urban => screens::dashboard::render_dashboard(app, f, area),
        DashboardTab::Trends => screens::trends::render_trends(app, f, area),
        DashboardTab::Zones => screens::zones::render_zones(app, f, area),
        DashboardTab::Insights => screens::insights::render_insights(app, f, area),
        DashboardTab::Satellite => screens::satellite::render_satellite(app, f, area),
        DashboardTab::Solutions => screens::solutions::render_solutions(app, f, area),
    }
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if app.status_message.is_empty() {
        Text::from(Span::styled(
            if app.animation_paused {
                "Animation paused"
            } else {
                ""
            },
            Style::default().fg(Color::Gray),
        ))
    } else {
        Text::from(Span::styled(
            app.status_message.clone(),
            Style::default().fg(Color::Green),
        ))
    };

    let status = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status, area);
}

fn shortcut(key: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(
            key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(action, Style::default().fg(Color::Gray)),
    ]
}

fn shortcuts_line() -> TextLine<'static> {
    let spans: Vec<Span<'static>> = [
        shortcut("Tab/1-6", ": Switch tab | "),
        shortcut("↑/↓", ": Control | "),
        shortcut("←/→", ": Change | "),
        shortcut("Enter", ": Layer | "),
        shortcut("Space", ": Pause | "),
        shortcut("?", ": Help | "),
        shortcut("q", ": Quit"),
    ]
    .into_iter()
    .flatten()
    .collect();
    TextLine::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::UrbanAnalyzer;
    use crate::domain::{City, FocusArea, Selection};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(app: &App) -> String {
        let backend = TestBackend::new(180, 55);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(app, f)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app_for(city: City, focus: FocusArea) -> App {
        let selection = Selection {
            city: city.label().to_string(),
            focus: focus.label().to_string(),
            ..Selection::default()
        };
        App::new(selection, UrbanAnalyzer::default())
    }

    #[test]
    fn every_tab_renders() {
        let mut app = app_for(City::Delhi, FocusArea::WaterResources);
        for tab in DashboardTab::ALL {
            app.tab = tab;
            let text = rendered(&app);
            assert!(text.contains("UrbanPulse"), "title missing on {tab:?}");
            assert!(text.contains("Controls"), "sidebar missing on {tab:?}");
        }
    }

    #[test]
    fn dashboard_shows_selected_city_and_cards() {
        let app = app_for(City::Delhi, FocusArea::WaterResources);
        let text = rendered(&app);
        assert!(text.contains("Delhi"));
        assert!(text.contains("Water Stress"));
        assert!(text.contains("Analysis Period"));
    }

    #[test]
    fn help_popup_overlays_the_dashboard() {
        let mut app = app_for(City::Mumbai, FocusArea::GreenSpaces);
        app.show_help = true;
        let text = rendered(&app);
        assert!(text.contains("Help & Keyboard Shortcuts"));
    }

    #[test]
    fn paused_animation_is_reported() {
        let mut app = app_for(City::Mumbai, FocusArea::GreenSpaces);
        app.animation_paused = true;
        app.status_message.clear();
        assert!(rendered(&app).contains("Animation paused"));
    }
}
