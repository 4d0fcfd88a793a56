use std::path::PathBuf;

use thiserror::Error;

use crate::model::VideoInfo;
use crate::sys::error::ClientError;

pub const INFO_FALLBACK: &str = "Failed to fetch video information";
pub const DOWNLOAD_FALLBACK: &str = "Failed to download video";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Phase {
    #[default]
    Idle,
    FetchingInfo,
    InfoLoaded,
    Downloading,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter a URL")]
    EmptyUrl,
}

/// A metadata request handed to the background worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoTicket {
    pub seq: u64,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTicket {
    pub seq: u64,
    pub url: String,
    pub format_id: String,
}

/// Form state for one session. Results only land if their sequence number
/// is the latest one issued for that kind of request.
///
/// A download stays in flight across later info fetches; `pending_download`
/// tracks it independently of `phase`.
#[derive(Debug, Default)]
pub struct Session {
    pub url: String,
    pub phase: Phase,
    pub error_message: Option<String>,
    pub selected_format_id: Option<String>,
    pub video_info: Option<VideoInfo>,
    pub last_saved: Option<PathBuf>,
    info_seq: u64,
    download_seq: u64,
    pending_download: Option<u64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fetching(&self) -> bool {
        self.phase == Phase::FetchingInfo
    }

    pub fn is_downloading(&self) -> bool {
        self.pending_download.is_some()
    }

    /// Clears every field. In-flight requests become stale.
    pub fn reset(&mut self) {
        *self = Self {
            info_seq: self.info_seq + 1,
            download_seq: self.download_seq + 1,
            ..Self::default()
        };
    }

    pub fn begin_info_request(&mut self) -> Result<InfoTicket, FormError> {
        let url = self.url.trim();
        if url.is_empty() {
            self.error_message = Some(FormError::EmptyUrl.to_string());
            return Err(FormError::EmptyUrl);
        }
        let url = url.to_string();

        self.error_message = None;
        self.video_info = None;
        self.selected_format_id = None;
        self.phase = Phase::FetchingInfo;
        self.info_seq += 1;

        Ok(InfoTicket {
            seq: self.info_seq,
            url,
        })
    }

    /// Returns false when the result belongs to a superseded request.
    pub fn apply_info_result(&mut self, seq: u64, result: Result<VideoInfo, ClientError>) -> bool {
        if seq != self.info_seq {
            log::debug!("Discarding stale video info #{} (latest #{})", seq, self.info_seq);
            return false;
        }

        match result {
            Ok(info) => {
                self.selected_format_id = info.formats.first().map(|f| f.format_id.clone());
                self.video_info = Some(info);
                self.phase = if self.is_downloading() {
                    Phase::Downloading
                } else {
                    Phase::InfoLoaded
                };
            }
            Err(e) => {
                log::warn!("Video info request #{} failed: {}", seq, e);
                self.error_message = Some(e.user_message(INFO_FALLBACK));
                self.video_info = None;
                self.phase = Phase::Idle;
            }
        }
        true
    }

    /// `None` when there is nothing to download yet or a download is already
    /// in flight; the form stays untouched.
    pub fn begin_download(&mut self) -> Option<DownloadTicket> {
        if self.is_downloading() {
            return None;
        }
        let url = self.url.trim();
        if url.is_empty() {
            return None;
        }
        let format_id = self.selected_format_id.clone()?;
        let url = url.to_string();

        self.error_message = None;
        self.phase = Phase::Downloading;
        self.download_seq += 1;
        self.pending_download = Some(self.download_seq);

        Some(DownloadTicket {
            seq: self.download_seq,
            url,
            format_id,
        })
    }

    pub fn apply_download_result(&mut self, seq: u64, result: Result<PathBuf, ClientError>) -> bool {
        if seq != self.download_seq {
            log::debug!("Discarding stale download #{} (latest #{})", seq, self.download_seq);
            return false;
        }
        self.pending_download = None;

        match result {
            Ok(path) => self.last_saved = Some(path),
            Err(e) => {
                log::warn!("Download #{} failed: {}", seq, e);
                self.error_message = Some(e.user_message(DOWNLOAD_FALLBACK));
            }
        }

        if self.phase == Phase::Downloading {
            self.phase = if self.video_info.is_some() {
                Phase::InfoLoaded
            } else {
                Phase::Idle
            };
        }
        true
    }

    pub fn selected_format_index(&self) -> Option<usize> {
        let info = self.video_info.as_ref()?;
        info.format_index(self.selected_format_id.as_deref()?)
    }

    pub fn move_format_selection(&mut self, delta: i32) {
        let Some(info) = &self.video_info else {
            return;
        };
        if info.formats.is_empty() {
            return;
        }

        let len = info.formats.len();
        let current = self.selected_format_index().unwrap_or(0);
        let new_index = if delta > 0 {
            (current + delta as usize).min(len - 1)
        } else {
            current.saturating_sub(delta.unsigned_abs() as usize)
        };
        self.selected_format_id = Some(info.formats[new_index].format_id.clone());
    }
}
