pub mod components;

use crate::app::{App, Phase};
use components::details::render_details;
use components::error_banner::render_error_banner;
use components::format_selection::render_format_selection;
use components::status_bar::render_status_bar;
use components::theme::{THEME_ACCENT, THEME_BG, THEME_BORDER, THEME_FG, THEME_HIGHLIGHT};
use components::url_bar::render_url_bar;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::*,
};
use ratatui_image::picker::Picker;

pub fn ui(f: &mut Frame, app: &mut App, picker: &mut Picker) {
    let mut constraints = vec![
        Constraint::Length(3), // URL bar
    ];
    if app.session.error_message.is_some() {
        constraints.push(Constraint::Length(3)); // Error banner
    }
    constraints.push(Constraint::Min(1)); // Main content
    constraints.push(Constraint::Length(3)); // Status bar

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(f.area());

    f.render_widget(
        Block::default().style(Style::default().bg(THEME_BG)),
        f.area(),
    );

    let mut idx = 0;
    render_url_bar(f, app, main_layout[idx]);
    idx += 1;

    if let Some(message) = &app.session.error_message {
        render_error_banner(f, message, main_layout[idx]);
        idx += 1;
    }

    render_main_area(f, app, main_layout[idx], picker);
    render_status_bar(f, app, main_layout[idx + 1]);
}

fn render_main_area(f: &mut Frame, app: &mut App, area: Rect, picker: &mut Picker) {
    if app.session.video_info.is_none() {
        render_greeting_section(f, app, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_details(f, app, chunks[0], picker);

    let selected = app.session.selected_format_index();
    if let Some(info) = &app.session.video_info {
        render_format_selection(
            f,
            selected,
            &info.formats,
            &mut app.format_table_state,
            chunks[1],
        );
    }
}

fn render_greeting_section(f: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str| {
        Span::styled(
            k,
            Style::default()
                .fg(THEME_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
    };
    let dim = |s: &'static str| Span::styled(s, Style::default().fg(Color::DarkGray));

    let mut text = vec![
        Line::from(vec![
            Span::styled(
                "tube",
                Style::default()
                    .fg(THEME_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "fetch",
                Style::default().fg(THEME_FG).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    if app.session.phase == Phase::FetchingInfo {
        text.push(Line::from(Span::styled(
            "Loading video information...",
            Style::default().fg(THEME_ACCENT),
        )));
    } else {
        text.push(Line::from(Span::styled(
            "Enter a video URL to see available download options.",
            Style::default().fg(THEME_ACCENT),
        )));
        text.push(Line::from(""));
        text.push(Line::from(vec![dim("Press "), key("Enter"), dim(" to get info.")]));
        text.push(Line::from(vec![dim("Press "), key("p"), dim(" to paste from clipboard.")]));
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            format!("Downloads are saved to {}", app.download_dir.display()),
            Style::default().fg(Color::DarkGray),
        )));
    }
    text.push(Line::from(""));
    text.push(Line::from(dim(
        "Note: Please respect copyright laws and terms of service.",
    )));

    let p = Paragraph::new(text)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME_BORDER)),
        );
    f.render_widget(p, area);
}
