use ratatui::{
    prelude::Rect,
    widgets::{Block, Borders, BorderType, Table, Row, Cell, TableState},
    style::{Modifier, Style},
    layout::Constraint,
};

use crate::model::VideoFormat;
use super::widgets::truncate_str;
use super::theme::{THEME_ACCENT, THEME_BORDER, THEME_HIGHLIGHT, THEME_FG, THEME_MUTED};

pub fn render_format_selection(
    f: &mut ratatui::Frame,
    selected_index: Option<usize>,
    formats: &[VideoFormat],
    state: &mut TableState,
    area: Rect,
) {
    let block = Block::default()
        .title(" Select Quality ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME_BORDER));

    if formats.is_empty() {
        let p = ratatui::widgets::Paragraph::new(" No downloadable formats.")
            .style(Style::default().fg(THEME_MUTED))
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let header_style = Style::default()
        .fg(THEME_ACCENT)
        .add_modifier(Modifier::BOLD);

    let header = Row::new(vec![
        Cell::from(" QUALITY"),
        Cell::from("FORMAT"),
        Cell::from("SIZE"),
        Cell::from("FPS"),
        Cell::from("CODEC"),
    ])
    .style(header_style)
    .height(1)
    .bottom_margin(1);

    let rows: Vec<Row> = formats
        .iter()
        .map(|fmt| {
            let quality = if fmt.needs_merge {
                format!(" {} +audio", fmt.resolution)
            } else {
                format!(" {}", fmt.resolution)
            };
            Row::new(vec![
                Cell::from(quality),
                Cell::from(fmt.ext.to_uppercase()),
                Cell::from(fmt.size_label()),
                Cell::from(fmt.fps_label().unwrap_or_default()),
                Cell::from(truncate_str(&fmt.vcodec, 16)),
            ])
            .style(Style::default().fg(THEME_FG))
            .height(1)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(12),
            Constraint::Percentage(20),
            Constraint::Percentage(15),
            Constraint::Percentage(28),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(
        Style::default()
            .bg(THEME_HIGHLIGHT)
            .fg(THEME_FG)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("┃ ");

    state.select(selected_index);
    f.render_stateful_widget(table, area, state);
}
