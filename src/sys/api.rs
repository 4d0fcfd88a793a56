use std::time::Duration;

use reqwest::header::CONTENT_DISPOSITION;
use reqwest::{Client, Response};
use serde::Serialize;

use crate::model::VideoInfo;
use crate::sys::error::{ClientError, ErrorBody};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Serialize)]
struct InfoRequest<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct DownloadRequest<'a> {
    url: &'a str,
    format_id: &'a str,
}

/// Raw media returned by `/api/download`.
#[derive(Debug)]
pub struct DownloadPayload {
    pub bytes: Vec<u8>,
    pub content_disposition: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    download_timeout: Duration,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            download_timeout: DOWNLOAD_TIMEOUT,
        }
    }

    pub fn with_download_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch_video_info(&self, url: &str) -> Result<VideoInfo, ClientError> {
        log::info!("Fetching video info for {}", url);
        let response = self
            .http
            .post(self.endpoint("/api/video-info"))
            .json(&InfoRequest { url })
            .send()
            .await?;
        let response = reject_unless_success(response).await?;

        let bytes = response.bytes().await?;
        let info: VideoInfo = serde_json::from_slice(&bytes)?;
        log::info!("Got {} formats for '{}'", info.formats.len(), info.title);
        Ok(info)
    }

    pub async fn download(&self, url: &str, format_id: &str) -> Result<DownloadPayload, ClientError> {
        log::info!("Requesting download of {} (format {})", url, format_id);
        let response = self
            .http
            .post(self.endpoint("/api/download"))
            .json(&DownloadRequest { url, format_id })
            .timeout(self.download_timeout)
            .send()
            .await
            .map_err(log_timeout)?;
        let response = reject_unless_success(response).await?;

        let content_disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await.map_err(log_timeout)?.to_vec();
        log::debug!(
            "Download body: {} bytes, disposition {:?}",
            bytes.len(),
            content_disposition
        );

        Ok(DownloadPayload {
            bytes,
            content_disposition,
        })
    }
}

async fn reject_unless_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let bytes = response.bytes().await.unwrap_or_default();
    let body = ErrorBody::parse(&bytes);
    log::warn!("Backend rejected request with {}: {:?}", status, body);
    Err(ClientError::Rejected { status, body })
}

fn log_timeout(e: reqwest::Error) -> reqwest::Error {
    if e.is_timeout() {
        log::error!("Download timed out: {}", e);
    }
    e
}
