use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::sys::api::DownloadPayload;
use crate::sys::disposition;

pub const MEDIA_TYPE: &str = "video/mp4";

/// Payload written to a temporary file inside the download directory,
/// waiting to be moved to its final name.
pub struct StagedDownload {
    file: NamedTempFile,
    filename: String,
    len: usize,
}

impl StagedDownload {
    pub fn stage(dir: &Path, payload: DownloadPayload) -> std::io::Result<Self> {
        std::fs::create_dir_all(dir)?;
        let filename = disposition::save_name(payload.content_disposition.as_deref());

        let mut file = tempfile::Builder::new()
            .prefix(".tubefetch-")
            .suffix(".part")
            .tempfile_in(dir)?;
        file.write_all(&payload.bytes)?;
        file.flush()?;

        Ok(Self {
            file,
            filename,
            len: payload.bytes.len(),
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Moves the staged file to a free name next to it. Consumes the stage,
    /// so the temporary is released exactly once.
    pub fn save(self) -> std::io::Result<PathBuf> {
        let dir = self
            .file
            .path()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let target = unique_path(&dir, &self.filename);
        self.file.persist_noclobber(&target).map_err(|e| e.error)?;
        log::info!("Saved {} bytes ({}) to {}", self.len, MEDIA_TYPE, target.display());
        Ok(target)
    }
}

pub fn save_payload(dir: &Path, payload: DownloadPayload) -> std::io::Result<PathBuf> {
    let staged = StagedDownload::stage(dir, payload)?;
    log::debug!("Staged {} in {}", staged.filename(), dir.display());
    staged.save()
}

// "clip.mp4" -> "clip (1).mp4" -> "clip (2).mp4", the way browsers avoid overwrites.
fn unique_path(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (filename, None),
    };
    let mut n = 1;
    loop {
        let name = match ext {
            Some(ext) => format!("{} ({}).{}", stem, n, ext),
            None => format!("{} ({})", stem, n),
        };
        let candidate = dir.join(name);
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}
