use serde::{Deserialize, Deserializer, Serialize};

/// Metadata returned by the backend's `/api/video-info` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    // yt-dlp reports null for live streams and fractional seconds for some extractors
    #[serde(default, deserialize_with = "deserialize_seconds")]
    pub duration: u64,
    pub uploader: String,
    #[serde(default)]
    pub formats: Vec<VideoFormat>,
}

impl VideoInfo {
    pub fn duration_string(&self) -> String {
        format_duration(self.duration)
    }

    pub fn format(&self, format_id: &str) -> Option<&VideoFormat> {
        self.formats.iter().find(|f| f.format_id == format_id)
    }

    pub fn format_index(&self, format_id: &str) -> Option<usize> {
        self.formats.iter().position(|f| f.format_id == format_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoFormat {
    pub format_id: String,
    pub resolution: String, // e.g. "720p"
    pub ext: String,
    #[serde(default)]
    pub filesize: Option<u64>,
    #[serde(default)]
    pub filesize_mb: Option<f64>,
    #[serde(default)]
    pub fps: Option<f64>,
    #[serde(default = "default_vcodec")]
    pub vcodec: String,
    // Video-only streams get muxed with the best audio by the backend
    #[serde(default)]
    pub needs_merge: bool,
}

fn default_vcodec() -> String {
    "unknown".to_string()
}

impl VideoFormat {
    pub fn size_label(&self) -> String {
        match self.filesize_mb {
            Some(mb) if mb > 0.0 => format!("{} MB", mb),
            _ => "Size unknown".to_string(),
        }
    }

    pub fn fps_label(&self) -> Option<String> {
        match self.fps {
            Some(fps) if fps > 0.0 => Some(format!("{} fps", fps)),
            _ => None,
        }
    }
}

/// Renders a second count as `M:SS`, or `H:MM:SS` once it reaches an hour.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

fn deserialize_seconds<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(match value {
        Some(v) if v.is_finite() && v > 0.0 => v.trunc() as u64,
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(60), "1:00");
        assert_eq!(format_duration(125), "2:05");
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(3661), "1:01:01");
        assert_eq!(format_duration(36000 + 59), "10:00:59");
    }

    #[test]
    fn parses_backend_payload() {
        let json = r#"{
            "title": "T",
            "thumbnail": "x",
            "duration": 125,
            "uploader": "U",
            "formats": [{
                "format_id": "f1",
                "resolution": "720p",
                "ext": "mp4",
                "filesize": 1000000,
                "filesize_mb": 0.95,
                "fps": 30,
                "vcodec": "h264"
            }]
        }"#;
        let info: VideoInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.title, "T");
        assert_eq!(info.thumbnail.as_deref(), Some("x"));
        assert_eq!(info.duration_string(), "2:05");
        assert_eq!(info.formats.len(), 1);

        let f = &info.formats[0];
        assert_eq!(f.format_id, "f1");
        assert_eq!(f.filesize, Some(1_000_000));
        assert!(!f.needs_merge);
        assert_eq!(f.size_label(), "0.95 MB");
        assert_eq!(f.fps_label().as_deref(), Some("30 fps"));
    }

    #[test]
    fn tolerates_nulls_from_backend() {
        let json = r#"{
            "title": "Live",
            "thumbnail": null,
            "duration": null,
            "uploader": "Unknown",
            "formats": [{
                "format_id": "137",
                "resolution": "1080p",
                "ext": "mp4",
                "filesize": 0,
                "filesize_mb": null,
                "fps": null,
                "vcodec": "avc1.640028",
                "needs_merge": true
            }]
        }"#;
        let info: VideoInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.thumbnail, None);
        assert_eq!(info.duration, 0);

        let f = &info.formats[0];
        assert!(f.needs_merge);
        assert_eq!(f.size_label(), "Size unknown");
        assert_eq!(f.fps_label(), None);
    }

    #[test]
    fn fractional_duration_is_truncated() {
        let json = r#"{"title":"T","duration":61.9,"uploader":"U","formats":[]}"#;
        let info: VideoInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.duration, 61);
        assert_eq!(info.thumbnail, None);
    }

    #[test]
    fn looks_up_formats_by_id() {
        let json = r#"{"title":"T","duration":1,"uploader":"U","formats":[
            {"format_id":"a","resolution":"1080p","ext":"mp4","vcodec":"vp9"},
            {"format_id":"b","resolution":"720p","ext":"webm","vcodec":"vp9","fps":29.97}
        ]}"#;
        let info: VideoInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.format_index("b"), Some(1));
        assert_eq!(info.format("a").map(|f| f.resolution.as_str()), Some("1080p"));
        assert_eq!(info.format("zzz"), None);
        assert_eq!(info.formats[1].fps_label().as_deref(), Some("29.97 fps"));
    }
}
