use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph,
};

/// Padded `[min, max]` for an axis; a flat series still gets a visible span.
pub fn axis_bounds(values: impl IntoIterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), value| {
            (lo.min(value), hi.max(value))
        });

    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }

    let span = max - min;
    if span < f64::EPSILON {
        let pad = (min.abs() * 0.05).max(1.0);
        return [min - pad, max + pad];
    }

    let pad = span * 0.05;
    [min - pad, max + pad]
}

pub fn axis_labels(bounds: [f64; 2], precision: usize) -> Vec<Span<'static>> {
    let [low, high] = bounds;
    let mid = (low + high) / 2.0;
    [low, mid, high]
        .iter()
        .map(|value| Span::raw(format!("{value:.precision$}")))
        .collect()
}

pub fn line_dataset<'a>(name: &'a str, color: Color, data: &'a [(f64, f64)]) -> Dataset<'a> {
    Dataset::default()
        .name(name)
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(data)
}

pub struct AxisSpec<'a> {
    pub title: &'a str,
    pub bounds: [f64; 2],
    pub precision: usize,
}

pub fn line_chart<'a>(
    title: &'a str,
    datasets: Vec<Dataset<'a>>,
    x: &AxisSpec<'a>,
    y: &AxisSpec<'a>,
) -> Chart<'a> {
    Chart::new(datasets)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .title(x.title)
                .style(Style::default().fg(Color::Gray))
                .bounds(x.bounds)
                .labels(axis_labels(x.bounds, x.precision)),
        )
        .y_axis(
            Axis::default()
                .title(y.title)
                .style(Style::default().fg(Color::Gray))
                .bounds(y.bounds)
                .labels(axis_labels(y.bounds, y.precision)),
        )
}

/// Bars hold integers; fractional values are scaled by `scale` first.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn bar_value(value: f64, scale: f64) -> u64 {
    (value * scale).round().max(0.0) as u64
}

pub fn bar_chart(title: &str, bars: &[(String, u64, Color)], bar_width: u16) -> BarChart<'static> {
    let max_value = bars.iter().map(|(_, value, _)| *value).max().unwrap_or(0).max(1);

    let bars: Vec<Bar<'static>> = bars
        .iter()
        .map(|(label, value, color)| {
            Bar::default()
                .value(*value)
                .label(TextLine::from(label.clone()))
                .style(Style::default().fg(*color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(*color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    BarChart::default()
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(1)
        .bar_width(bar_width)
}

pub fn empty_panel(title: &str, message: &str) -> Paragraph<'static> {
    Paragraph::new(message.to_string())
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_pad_the_range() {
        let [low, high] = axis_bounds([10.0, 20.0]);
        assert!((low - 9.5).abs() < 1e-9);
        assert!((high - 20.5).abs() < 1e-9);
    }

    #[test]
    fn flat_and_empty_series_still_have_a_span() {
        let [low, high] = axis_bounds([65.0, 65.0]);
        assert!(high > low);
        assert_eq!(axis_bounds(std::iter::empty()), [0.0, 1.0]);
    }

    #[test]
    fn labels_span_the_bounds() {
        let labels = axis_labels([0.0, 10.0], 1);
        let text: Vec<String> = labels.iter().map(|span| span.content.to_string()).collect();
        assert_eq!(text, vec!["0.0", "5.0", "10.0"]);
    }

    #[test]
    fn bar_values_round_and_clamp() {
        assert_eq!(bar_value(0.14, 100.0), 14);
        assert_eq!(bar_value(-3.0, 1.0), 0);
    }
}
