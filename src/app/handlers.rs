use super::{actions, App, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }

    match app.input_mode {
        InputMode::Editing => handle_editing_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => actions::request_video_info(app),
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Char(c) => {
            // The URL box is disabled while its request is in flight.
            if app.session.is_fetching() {
                return;
            }
            let at = byte_index(&app.session.url, app.cursor_position);
            app.session.url.insert(at, c);
            app.cursor_position += 1;
        }
        KeyCode::Backspace => {
            if app.session.is_fetching() || app.cursor_position == 0 {
                return;
            }
            let at = byte_index(&app.session.url, app.cursor_position - 1);
            app.session.url.remove(at);
            app.cursor_position -= 1;
        }
        KeyCode::Delete => {
            if app.session.is_fetching() || app.cursor_position >= app.session.url.chars().count() {
                return;
            }
            let at = byte_index(&app.session.url, app.cursor_position);
            app.session.url.remove(at);
        }
        KeyCode::Left => app.cursor_position = app.cursor_position.saturating_sub(1),
        KeyCode::Right => {
            if app.cursor_position < app.session.url.chars().count() {
                app.cursor_position += 1;
            }
        }
        KeyCode::Home => app.cursor_position = 0,
        KeyCode::End => app.cursor_position = app.session.url.chars().count(),
        _ => {}
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('/') | KeyCode::Char('e') | KeyCode::Char('i') | KeyCode::Esc => {
            app.input_mode = InputMode::Editing;
            app.cursor_position = app.session.url.chars().count();
        }
        KeyCode::Down | KeyCode::Char('j') => app.session.move_format_selection(1),
        KeyCode::Up | KeyCode::Char('k') => app.session.move_format_selection(-1),
        KeyCode::Enter | KeyCode::Char('d') => actions::request_download(app),
        KeyCode::Char('r') => actions::request_video_info(app),
        KeyCode::Char('p') => actions::paste_from_clipboard(app),
        KeyCode::Char('o') => actions::open_in_browser(app),
        KeyCode::Char('x') => actions::reset_form(app),
        _ => {}
    }
}

pub fn handle_paste(app: &mut App, text: String) {
    if app.session.is_fetching() {
        return;
    }
    let text: String = text.chars().filter(|c| !c.is_control()).collect();
    let at = byte_index(&app.session.url, app.cursor_position);
    app.session.url.insert_str(at, &text);
    app.cursor_position += text.chars().count();
    app.input_mode = InputMode::Editing;
}

fn byte_index(s: &str, char_pos: usize) -> usize {
    s.char_indices().nth(char_pos).map(|(i, _)| i).unwrap_or(s.len())
}
