//! Image references.
//!
//! Images are stored inline as `data:<mime>;base64,<payload>` strings so a
//! collection file carries everything it needs.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{StudioError, StudioResult};

pub fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Read an image file into a data URL.
pub fn encode_image(path: &Path) -> StudioResult<String> {
    let mime =
        mime_for(path).ok_or_else(|| StudioError::UnsupportedImage(path.display().to_string()))?;
    let bytes = std::fs::read(path)?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

pub fn encode_images(paths: &[PathBuf]) -> StudioResult<Vec<String>> {
    paths.iter().map(|p| encode_image(p)).collect()
}

pub fn is_data_url(reference: &str) -> bool {
    reference.starts_with("data:")
}

/// Stock photo URL used as a cover when a record is added without images.
/// `seed` varies the picture between records.
pub fn placeholder_image(width: u32, height: u32, seed: i64) -> String {
    format!("https://picsum.photos/{}/{}?random={}", width, height, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_sized_and_seeded() {
        assert_eq!(
            placeholder_image(300, 200, 1718000000000),
            "https://picsum.photos/300/200?random=1718000000000"
        );
        assert!(!is_data_url(&placeholder_image(200, 200, 1)));
    }

    #[test]
    fn mime_from_extension() {
        assert_eq!(mime_for(Path::new("a/cover.JPG")), Some("image/jpeg"));
        assert_eq!(mime_for(Path::new("b.webp")), Some("image/webp"));
        assert_eq!(mime_for(Path::new("notes.txt")), None);
        assert_eq!(mime_for(Path::new("no_extension")), None);
    }

    #[test]
    fn encodes_file_as_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        std::fs::write(&path, b"abc").unwrap();

        let url = encode_image(&path).unwrap();
        assert_eq!(url, "data:image/png;base64,YWJj");
        assert!(is_data_url(&url));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        std::fs::write(&path, b"%PDF").unwrap();

        assert!(matches!(encode_image(&path), Err(StudioError::UnsupportedImage(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![dir.path().join("gone.jpg")];

        assert!(matches!(encode_images(&paths), Err(StudioError::Io(_))));
    }
}
