use ratatui::{
    prelude::Rect,
    widgets::{Block, Borders, BorderType, Paragraph},
    style::Style,
};

use crate::app::{App, InputMode, Phase};
use super::theme::{THEME_ACCENT, THEME_BORDER};

pub fn render_status_bar(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let mode_str = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::Editing => "EDITING",
    };

    let key_hints = match (app.input_mode, app.session.phase) {
        (_, Phase::FetchingInfo) => "Loading... | q: Quit",
        (InputMode::Editing, _) => "Enter: Get Info | Esc: Normal Mode",
        (InputMode::Normal, Phase::Downloading) => "Downloading... | j/k: Nav | q: Quit",
        (InputMode::Normal, Phase::InfoLoaded) => {
            "j/k: Quality | Enter/d: Download | /: Edit URL | o: Browser | x: Clear | q: Quit"
        }
        (InputMode::Normal, Phase::Idle) => "/: Edit URL | p: Paste & Fetch | q: Quit",
    };

    let status_msg = app.status_message.as_deref().unwrap_or("");
    let text = if status_msg.is_empty() {
        format!(" [{}] {} ", mode_str, key_hints)
    } else {
        format!(" [{}] {} | {} ", mode_str, key_hints, status_msg)
    };

    let p = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME_BORDER))
                .title(format!(" {} ", app.api_base_url)),
        )
        .style(Style::default().fg(THEME_ACCENT));
    f.render_widget(p, area);
}
