use ratatui::{
    prelude::Rect,
    widgets::{Block, Borders, BorderType, Paragraph},
    style::{Modifier, Style},
};

use crate::app::{App, InputMode};
use super::theme::{THEME_ACCENT, THEME_BORDER, THEME_FG, THEME_MUTED};

pub fn render_url_bar(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let width = (area.width as usize).saturating_sub(2);
    let scroll = app.cursor_position.saturating_sub(width.saturating_sub(1));
    let display_url: String = app.session.url.chars().skip(scroll).take(width).collect();

    let placeholder = app.session.url.is_empty() && app.input_mode != InputMode::Editing;
    let text = if placeholder {
        "https://www.youtube.com/watch?v=...".to_string()
    } else {
        display_url
    };

    let style = if placeholder || app.session.is_fetching() {
        Style::default().fg(THEME_MUTED)
    } else if app.input_mode == InputMode::Editing {
        Style::default().fg(THEME_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(THEME_FG)
    };

    let title = if app.session.is_fetching() {
        " Video URL (Loading...) "
    } else {
        " Video URL "
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if app.input_mode == InputMode::Editing {
                THEME_ACCENT
            } else {
                THEME_BORDER
            }))
            .title(title),
    );
    f.render_widget(input, area);

    if app.input_mode == InputMode::Editing && !app.session.is_fetching() {
        f.set_cursor_position((
            area.x + (app.cursor_position.saturating_sub(scroll)) as u16 + 1,
            area.y + 1,
        ));
    }
}
