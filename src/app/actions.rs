use super::{App, InputMode};
use crate::sys::error::ClientError;

pub fn request_video_info(app: &mut App) {
    if app.session.is_fetching() {
        return;
    }

    match app.session.begin_info_request() {
        Ok(ticket) => {
            app.clear_thumbnail();
            log::info!("Video info request #{} for {}", ticket.seq, ticket.url);
            app.status_message = Some(format!("Fetching info for '{}'...", ticket.url));
            app.input_mode = InputMode::Normal;
            if let Err(e) = app.info_tx.send(ticket) {
                log::error!("Info worker is gone, request #{} dropped", e.0.seq);
                app.session.apply_info_result(e.0.seq, Err(ClientError::WorkerStopped));
                app.status_message = None;
            }
        }
        Err(e) => {
            log::debug!("Rejected info request: {}", e);
            app.status_message = None;
        }
    }
}

pub fn request_download(app: &mut App) {
    if app.session.is_downloading() {
        return;
    }

    if let Some(ticket) = app.session.begin_download() {
        log::info!(
            "Download request #{} for {} (format {})",
            ticket.seq,
            ticket.url,
            ticket.format_id
        );
        app.status_message = Some("Downloading... this can take a few minutes.".to_string());
        if let Err(e) = app.download_tx.send(ticket) {
            log::error!("Download worker is gone, request #{} dropped", e.0.seq);
            app.session.apply_download_result(e.0.seq, Err(ClientError::WorkerStopped));
            app.status_message = None;
        }
    }
}

pub fn paste_from_clipboard(app: &mut App) {
    let text = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text());
    match text {
        Ok(text) if !text.trim().is_empty() => {
            set_url(app, text.trim().to_string());
            request_video_info(app);
        }
        Ok(_) => app.status_message = Some("Clipboard is empty.".to_string()),
        Err(e) => {
            log::warn!("Clipboard read failed: {}", e);
            app.status_message = Some("Clipboard not available.".to_string());
        }
    }
}

pub fn open_in_browser(app: &mut App) {
    let url = app.session.url.trim();
    if url.is_empty() {
        return;
    }
    if webbrowser::open(url).is_ok() {
        app.status_message = Some("Opening in browser...".to_string());
    } else {
        app.status_message = Some("Failed to open browser.".to_string());
    }
}

pub fn reset_form(app: &mut App) {
    app.session.reset();
    app.clear_thumbnail();
    app.cursor_position = 0;
    app.format_table_state = Default::default();
    app.status_message = Some("Form cleared.".to_string());
    app.input_mode = InputMode::Editing;
}

pub fn set_url(app: &mut App, url: String) {
    app.cursor_position = url.chars().count();
    app.session.url = url;
}
