use crate::app::state::{App, DashboardTab};
use crossterm::event::KeyCode;

use crate::app::input::helpers::{wrap_decrement, wrap_increment};

mod help;
mod sidebar;
mod solutions;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if help::handle_animation_toggle(app, key) {
        return;
    }

    if handle_global_input(app, key) {
        return;
    }

    if app.tab == DashboardTab::Solutions && solutions::handle_solutions_input(app, key) {
        return;
    }

    sidebar::handle_sidebar_input(app, key);
}

fn handle_global_input(app: &mut App, key: KeyCode) -> bool {
    let tab_count = DashboardTab::ALL.len();
    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Tab => {
            let next = wrap_increment(app.tab.index(), tab_count);
            app.tab = DashboardTab::from_index(next).unwrap_or_default();
        }
        KeyCode::BackTab => {
            let previous = wrap_decrement(app.tab.index(), tab_count);
            app.tab = DashboardTab::from_index(previous).unwrap_or_default();
        }
        KeyCode::Char(digit @ '1'..='6') => {
            let index = (digit as usize).saturating_sub('1' as usize);
            if let Some(tab) = DashboardTab::from_index(index) {
                app.tab = tab;
            }
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::UrbanAnalyzer;
    use crate::domain::{City, DataLayer, Selection};

    fn app() -> App {
        App::new(Selection::default(), UrbanAnalyzer::default())
    }

    #[test]
    fn q_quits_unless_help_is_open() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::F(1));
        dispatch_input(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert!(!app.show_help);

        dispatch_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn tabs_cycle_and_jump() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::BackTab);
        assert_eq!(app.tab, DashboardTab::Solutions);
        dispatch_input(&mut app, KeyCode::Tab);
        assert_eq!(app.tab, DashboardTab::Urban);
        dispatch_input(&mut app, KeyCode::Char('3'));
        assert_eq!(app.tab, DashboardTab::Zones);
    }

    #[test]
    fn sidebar_cycles_city_and_refreshes() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::Down);
        dispatch_input(&mut app, KeyCode::Right);
        dispatch_input(&mut app, KeyCode::Right);
        assert_eq!(app.selection.city(), Some(City::Delhi));
        assert_eq!(app.metrics.city, "Delhi, India");

        dispatch_input(&mut app, KeyCode::Left);
        assert_eq!(app.selection.city(), Some(City::Mumbai));
    }

    #[test]
    fn layers_toggle_with_enter() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::Up);
        dispatch_input(&mut app, KeyCode::Right);
        dispatch_input(&mut app, KeyCode::Enter);
        assert_eq!(app.selection.layers, vec![DataLayer::LandsatUrbanExpansion]);
    }

    #[test]
    fn solutions_tab_toggles_selection() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::Char('6'));
        dispatch_input(&mut app, KeyCode::Char('j'));
        dispatch_input(&mut app, KeyCode::Char('j'));
        dispatch_input(&mut app, KeyCode::Char('x'));
        assert!(app.calculator.is_selected(2));
        assert_eq!(app.calculator.selected_count(), 3);
    }
}
