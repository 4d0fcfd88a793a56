use crate::model::VideoInfo;
use crate::sys::api::ApiClient;
use crate::sys::error::ClientError;
use crate::sys::{image as sys_image, save};
use image::DynamicImage;
use ratatui::widgets::TableState;
use ratatui_image::protocol::StatefulProtocol;
use std::path::PathBuf;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::{DownloadTicket, InfoTicket, InputMode, Session};

pub struct App {
    pub running: bool,
    pub input_mode: InputMode,
    pub session: Session,
    pub cursor_position: usize, // in chars
    pub status_message: Option<String>,
    pub api_base_url: String,
    pub download_dir: PathBuf,
    // Metadata
    pub info_tx: UnboundedSender<InfoTicket>,
    pub info_rx: UnboundedReceiver<(u64, Result<VideoInfo, ClientError>)>,
    // Download
    pub download_tx: UnboundedSender<DownloadTicket>,
    pub download_rx: UnboundedReceiver<(u64, Result<PathBuf, ClientError>)>,
    // Thumbnail, tagged with the info request it belongs to
    pub image_tx: UnboundedSender<(u64, String)>,
    pub image_rx: UnboundedReceiver<(u64, DynamicImage)>,
    pub thumbnail_seq: Option<u64>,
    pub thumbnail: Option<DynamicImage>,
    pub thumbnail_protocol: Option<StatefulProtocol>,
    // Render state
    pub format_table_state: TableState,
}

impl App {
    pub fn new(client: ApiClient, download_dir: PathBuf) -> Self {
        let api_base_url = client.base_url().to_string();

        let (info_tx, mut info_req_rx) = mpsc::unbounded_channel::<InfoTicket>();
        let (info_res_tx, info_rx) = mpsc::unbounded_channel();

        let info_client = client.clone();
        tokio::spawn(async move {
            while let Some(ticket) = info_req_rx.recv().await {
                // Overlapping requests run side by side; the session keeps the latest.
                let client = info_client.clone();
                let tx = info_res_tx.clone();
                tokio::spawn(async move {
                    let result = client.fetch_video_info(&ticket.url).await;
                    let _ = tx.send((ticket.seq, result));
                });
            }
        });

        let (download_tx, mut download_req_rx) = mpsc::unbounded_channel::<DownloadTicket>();
        let (download_res_tx, download_rx) = mpsc::unbounded_channel();

        let download_client = client.clone();
        let dir = download_dir.clone();
        tokio::spawn(async move {
            while let Some(ticket) = download_req_rx.recv().await {
                let client = download_client.clone();
                let tx = download_res_tx.clone();
                let dir = dir.clone();
                tokio::spawn(async move {
                    let result = download_and_save(&client, &ticket, dir).await;
                    let _ = tx.send((ticket.seq, result));
                });
            }
        });

        let (image_tx, mut image_cmd_rx) = mpsc::unbounded_channel::<(u64, String)>();
        let (image_res_tx, image_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let http = reqwest::Client::new();
            while let Some((seq, url)) = image_cmd_rx.recv().await {
                match sys_image::download_thumbnail(&http, &url).await {
                    Ok(img) => {
                        let _ = image_res_tx.send((seq, img));
                    }
                    Err(e) => log::warn!("Thumbnail {} unavailable: {}", url, e),
                }
            }
        });

        Self {
            running: true,
            input_mode: InputMode::Editing,
            session: Session::new(),
            cursor_position: 0,
            status_message: None,
            api_base_url,
            download_dir,
            info_tx,
            info_rx,
            download_tx,
            download_rx,
            image_tx,
            image_rx,
            thumbnail_seq: None,
            thumbnail: None,
            thumbnail_protocol: None,
            format_table_state: TableState::default(),
        }
    }

    pub fn clear_thumbnail(&mut self) {
        self.thumbnail_seq = None;
        self.thumbnail = None;
        self.thumbnail_protocol = None;
    }
}

async fn download_and_save(
    client: &ApiClient,
    ticket: &DownloadTicket,
    dir: PathBuf,
) -> Result<PathBuf, ClientError> {
    let payload = client.download(&ticket.url, &ticket.format_id).await?;
    let saved = tokio::task::spawn_blocking(move || save::save_payload(&dir, payload))
        .await
        .map_err(std::io::Error::other)??;
    Ok(saved)
}
