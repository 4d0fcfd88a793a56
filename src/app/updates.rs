use super::App;

pub fn on_tick(app: &mut App) {
    // Metadata results
    while let Ok((seq, result)) = app.info_rx.try_recv() {
        let succeeded = result.is_ok();
        if !app.session.apply_info_result(seq, result) {
            continue;
        }
        app.format_table_state = Default::default();

        if !succeeded {
            app.status_message = None;
            continue;
        }
        let Some(info) = &app.session.video_info else {
            continue;
        };
        app.status_message = Some(format!("{} formats available.", info.formats.len()));
        if let Some(url) = info.thumbnail.clone().filter(|u| !u.is_empty()) {
            app.thumbnail_seq = Some(seq);
            let _ = app.image_tx.send((seq, url));
        }
    }

    // Download results
    while let Ok((seq, result)) = app.download_rx.try_recv() {
        let saved = result.as_ref().ok().cloned();
        if !app.session.apply_download_result(seq, result) {
            continue;
        }
        app.status_message = saved.map(|path| format!("Saved to {}", path.display()));
    }

    // Thumbnails
    while let Ok((seq, img)) = app.image_rx.try_recv() {
        if app.thumbnail_seq == Some(seq) {
            app.thumbnail = Some(img);
            app.thumbnail_protocol = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions;
    use crate::sys::api::ApiClient;
    use image::DynamicImage;
    use tokio::sync::mpsc;

    fn thumbnail_feed(app: &mut App) -> mpsc::UnboundedSender<(u64, DynamicImage)> {
        let (tx, rx) = mpsc::unbounded_channel();
        app.image_rx = rx;
        tx
    }

    #[tokio::test]
    async fn only_the_current_thumbnail_is_shown() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(ApiClient::new("http://127.0.0.1:9"), dir.path().to_path_buf());
        let feed = thumbnail_feed(&mut app);
        app.thumbnail_seq = Some(2);

        feed.send((1, DynamicImage::new_rgb8(1, 1))).unwrap();
        app.on_tick();
        assert!(app.thumbnail.is_none());

        feed.send((2, DynamicImage::new_rgb8(2, 2))).unwrap();
        app.on_tick();
        assert_eq!(app.thumbnail.as_ref().map(|img| img.width()), Some(2));
    }

    #[tokio::test]
    async fn thumbnail_arriving_after_refetch_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(ApiClient::new("http://127.0.0.1:9"), dir.path().to_path_buf());
        let feed = thumbnail_feed(&mut app);
        app.thumbnail_seq = Some(1);

        actions::set_url(&mut app, "https://youtu.be/abc".to_string());
        actions::request_video_info(&mut app);
        assert_eq!(app.thumbnail_seq, None);

        feed.send((1, DynamicImage::new_rgb8(1, 1))).unwrap();
        app.on_tick();
        assert!(app.thumbnail.is_none());
    }
}
