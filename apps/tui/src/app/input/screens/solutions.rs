use crate::analytics::solutions::SOLUTIONS;
use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_solutions_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('k') => {
            app.solution_cursor = wrap_decrement(app.solution_cursor, SOLUTIONS.len());
        }
        KeyCode::Char('j') => {
            app.solution_cursor = wrap_increment(app.solution_cursor, SOLUTIONS.len());
        }
        KeyCode::Char('x') => app.toggle_solution_at_cursor(),
        _ => return false,
    }
    true
}
