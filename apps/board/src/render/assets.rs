use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("{} not found!", .0.display())]
    Missing(PathBuf),

    #[error("Cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A background image inlined into the page as a data URL.
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    mime: &'static str,
    base64: String,
}

impl BackgroundImage {
    /// Reads and encodes the image. A missing file is reported separately so
    /// startup can tell the user exactly which asset is absent.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        if !path.is_file() {
            return Err(AssetError::Missing(path.to_path_buf()));
        }
        let bytes = std::fs::read(path).map_err(|source| AssetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_bytes(mime_for(path), &bytes))
    }

    pub fn from_bytes(mime: &'static str, bytes: &[u8]) -> Self {
        Self {
            mime,
            base64: STANDARD.encode(bytes),
        }
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_image_is_reported_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("background.jpg");

        let err = BackgroundImage::load(&path).unwrap_err();
        assert!(matches!(err, AssetError::Missing(_)));
        assert!(err.to_string().ends_with("background.jpg not found!"));
    }

    #[test]
    fn test_loads_as_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Background.JPG");
        std::fs::write(&path, b"abc").unwrap();

        let image = BackgroundImage::load(&path).unwrap();
        assert_eq!(image.data_url(), "data:image/jpeg;base64,YWJj");
    }

    #[test]
    fn test_unknown_extension_defaults_to_png() {
        assert_eq!(mime_for(Path::new("bg")), "image/png");
        assert_eq!(mime_for(Path::new("bg.png")), "image/png");
    }
}
