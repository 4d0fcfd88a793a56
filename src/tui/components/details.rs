use ratatui::{
    prelude::Rect,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, BorderType, Paragraph, Wrap},
    style::{Modifier, Style},
    text::{Line, Span},
};
use ratatui_image::picker::Picker;

use crate::app::App;
use super::theme::{THEME_BG, THEME_BORDER, THEME_FG, THEME_MUTED, THEME_SUCCESS};
use super::widgets::label_line;

pub fn render_details(f: &mut ratatui::Frame, app: &mut App, area: Rect, picker: &mut Picker) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME_BORDER))
        .title(" Details ");
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let Some(info) = app.session.video_info.as_ref() else {
        return;
    };

    let mut text_area = inner_area;
    if let Some(img) = &app.thumbnail {
        let mut image_height = if img.width() > 0 {
            ((img.height() as f64 / img.width() as f64) * inner_area.width as f64 * 0.5).round() as u16
        } else {
            0
        };
        image_height = image_height.clamp(2, 18);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(image_height),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner_area);

        let protocol = app
            .thumbnail_protocol
            .get_or_insert_with(|| picker.new_resize_protocol(img.clone()));
        let image = ratatui_image::StatefulImage::new();
        f.render_stateful_widget(image, layout[0], protocol);
        text_area = layout[2];
    }

    let download_button = if app.session.is_downloading() {
        Span::styled(
            " Downloading... ",
            Style::default().fg(THEME_BG).bg(THEME_MUTED).add_modifier(Modifier::BOLD),
        )
    } else if app.session.selected_format_id.is_some() {
        Span::styled(
            " [d] Download Video ",
            Style::default().fg(THEME_BG).bg(THEME_SUCCESS).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" No format selected ", Style::default().fg(THEME_MUTED))
    };

    let mut lines = vec![
        Line::from(Span::styled(
            info.title.clone(),
            Style::default().fg(THEME_FG).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        label_line("Uploader: ", info.uploader.clone()),
        label_line("Duration: ", info.duration_string()),
    ];
    if let Some(fmt) = app
        .session
        .selected_format_id
        .as_deref()
        .and_then(|id| info.format(id))
    {
        lines.push(label_line("Selected: ", format!("{} {}", fmt.resolution, fmt.ext)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(download_button));

    let p = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(p, text_area);
}
