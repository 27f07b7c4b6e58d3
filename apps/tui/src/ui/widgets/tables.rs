use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

pub fn header_row(titles: &[&str]) -> Row<'static> {
    Row::new(
        titles
            .iter()
            .map(|title| Cell::from((*title).to_string()))
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

/// Cyan-bordered table with a yellow header, the dashboard's standard grid.
pub fn data_table<'a>(
    title: &'a str,
    header: &[&str],
    rows: Vec<Row<'a>>,
    widths: Vec<Constraint>,
) -> Table<'a> {
    Table::new(rows, widths)
        .header(header_row(header))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .column_spacing(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_keeps_selection_visible() {
        assert_eq!(scroll_offset(4, 10, 3), 0);
        assert_eq!(scroll_offset(10, 4, 2), 0);
        assert_eq!(scroll_offset(10, 4, 4), 1);
        assert_eq!(scroll_offset(10, 4, 9), 6);
    }
}
