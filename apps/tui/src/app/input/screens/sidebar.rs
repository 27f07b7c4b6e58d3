use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, SidebarControl};
use crate::domain::{City, DataLayer, FocusArea, TimeRange};
use crossterm::event::KeyCode;

pub fn handle_sidebar_input(app: &mut App, key: KeyCode) {
    let control_count = SidebarControl::ALL.len();
    match key {
        KeyCode::Up => {
            let index = wrap_decrement(app.sidebar_control.index(), control_count);
            app.sidebar_control = SidebarControl::from_index(index).unwrap_or_default();
        }
        KeyCode::Down => {
            let index = wrap_increment(app.sidebar_control.index(), control_count);
            app.sidebar_control = SidebarControl::from_index(index).unwrap_or_default();
        }
        KeyCode::Left => cycle(app, false),
        KeyCode::Right => cycle(app, true),
        KeyCode::Enter if app.sidebar_control == SidebarControl::Layers => {
            app.toggle_layer_at_cursor();
        }
        _ => {}
    }
}

const fn step(index: usize, len: usize, forward: bool) -> usize {
    if forward {
        wrap_increment(index, len)
    } else {
        wrap_decrement(index, len)
    }
}

fn cycle(app: &mut App, forward: bool) {
    let selection = &mut app.selection;
    match app.sidebar_control {
        SidebarControl::Focus => {
            // Unmatched labels restart at either end of the list
            let current = selection.focus().map_or(usize::MAX, FocusArea::index);
            let next = step(current, FocusArea::ALL.len(), forward);
            let focus = FocusArea::from_index(next).unwrap_or_default();
            selection.focus = focus.label().to_string();
        }
        SidebarControl::City => {
            let current = selection.city().map_or(usize::MAX, City::index);
            let next = step(current, City::ALL.len(), forward);
            let city = City::from_index(next).unwrap_or_default();
            selection.city = city.label().to_string();
        }
        SidebarControl::Period => {
            let current = selection.period().map_or(usize::MAX, TimeRange::index);
            let next = step(current, TimeRange::ALL.len(), forward);
            let period = TimeRange::from_index(next).unwrap_or_default();
            selection.period = period.label().to_string();
        }
        SidebarControl::Layers => {
            app.layer_cursor = step(app.layer_cursor, DataLayer::ALL.len(), forward);
            return;
        }
    }
    app.refresh();
}
