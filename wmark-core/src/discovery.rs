//! File discovery module for finding watermarkable media files.
//!
//! Scans the top level of the input directory for files with a supported
//! image or video extension (case-insensitive). Subdirectories are not
//! searched.

use crate::error::CoreResult;

use std::fmt;
use std::path::{Path, PathBuf};

/// Video container extensions handled by the overlay pipeline.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv"];

/// Still image extensions handled by the overlay pipeline.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// How a discovered file is processed: one composited frame for images,
/// a full-duration composite with audio pass-through for videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classifies a path by its extension, case-insensitively.
    ///
    /// Returns `None` for unsupported extensions and extension-less paths.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)) {
            Some(MediaKind::Image)
        } else if VIDEO_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// Finds media files eligible for watermarking in the specified directory.
///
/// Entries are returned in directory-listing order. An empty result is not
/// an error (the caller reports it and exits cleanly); a missing or
/// unreadable directory is.
///
/// # Arguments
///
/// * `input_dir` - The directory to search for media files
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths of the discovered image and video files
/// * `Err(CoreError::Io)` - If the directory cannot be read
pub fn find_processable_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();

            if !path.is_file() {
                return None;
            }

            MediaKind::from_path(&path).map(|_| path)
        })
        .collect();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_classification() {
        assert_eq!(MediaKind::from_path(Path::new("a.jpg")), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_path(Path::new("a.JPEG")), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_path(Path::new("a.png")), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_path(Path::new("b.mp4")), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_path(Path::new("b.MOV")), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_path(Path::new("b.Mkv")), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_path(Path::new("b.avi")), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_path(Path::new("readme.txt")), None);
        assert_eq!(MediaKind::from_path(Path::new("noext")), None);
    }
}
