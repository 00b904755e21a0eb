//! Uploaded video metadata, as handed over by the file picker

use serde::{Deserialize, Serialize};

/// Largest accepted upload: 100 MiB, inclusive
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

/// Accepted video container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoFormat {
    Mp4,
    Mov,
    Avi,
    Quicktime,
}

impl VideoFormat {
    /// Parse a MIME type such as `video/mp4`. Anything else is unsupported.
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        match mime_type {
            "video/mp4" => Some(VideoFormat::Mp4),
            "video/mov" => Some(VideoFormat::Mov),
            "video/avi" => Some(VideoFormat::Avi),
            "video/quicktime" => Some(VideoFormat::Quicktime),
            _ => None,
        }
    }
}

/// A file selected for one upload slot. Contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// File name as shown by the picker
    pub name: String,

    /// Size in bytes
    pub size: u64,

    /// MIME type reported by the picker
    pub mime_type: String,
}

impl FileRef {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        FileRef {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// The recognised video format, if any
    pub fn format(&self) -> Option<VideoFormat> {
        VideoFormat::from_mime(&self.mime_type)
    }
}

/// Human readable size: `0 Bytes`, `512 Bytes`, `1.5 KB`, `10 MB`, ...
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    // {} on f64 drops a trailing ".0", matching "10 MB" rather than "10.0 MB"
    format!("{} {}", rounded, UNITS[unit])
}
