use ratatui::{
    prelude::Rect,
    widgets::{Block, Borders, BorderType, Paragraph, Wrap},
    style::Style,
};

use super::theme::THEME_HIGHLIGHT;

pub fn render_error_banner(f: &mut ratatui::Frame, message: &str, area: Rect) {
    let p = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(THEME_HIGHLIGHT))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME_HIGHLIGHT))
                .title(" Error "),
        );
    f.render_widget(p, area);
}
