/// Candidate file loading and media-type detection
///
/// A browser hands its upload widget a ready-made MIME type; a desktop
/// client has to derive one. The extension is authoritative when it maps to
/// a known image format, with magic-byte sniffing as the fallback for
/// extensionless files. Anything unrecognized is reported as a generic
/// binary type so validation rejects it downstream.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::state::workflow::SelectedFile;

/// Media type reported when neither extension nor content is recognized
const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Read a picked or dropped file into a selection candidate
///
/// # Arguments
/// * `path` - Path delivered by the file dialog or the drop gesture
///
/// # Returns
/// * `Ok(SelectedFile)` - Bytes plus derived media type, ready for validation
/// * `Err(String)` - Error message if the file could not be read
pub async fn load_candidate(path: PathBuf) -> Result<SelectedFile, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let filename = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let media_type = media_type_of(&path, &bytes);

    println!(
        "📷 Candidate loaded: {} ({} bytes, {})",
        filename,
        bytes.len(),
        media_type
    );

    Ok(SelectedFile {
        filename,
        media_type,
        bytes,
    })
}

/// Derive the declared media type for a candidate file
///
/// The extension wins when it names a known image format (case-insensitive,
/// so "photo.PNG" works). Files without a usable extension are sniffed by
/// their magic bytes.
pub fn media_type_of(path: &Path, bytes: &[u8]) -> String {
    if let Some(extension) = path.extension() {
        let ext = extension.to_string_lossy().to_lowercase();
        if let Some(format) = ImageFormat::from_extension(&ext) {
            return format.to_mime_type().to_string();
        }
    }

    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type().to_string();
    }

    UNKNOWN_MEDIA_TYPE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions_map_to_mime() {
        assert_eq!(media_type_of(Path::new("a.png"), &[]), "image/png");
        assert_eq!(media_type_of(Path::new("a.jpg"), &[]), "image/jpeg");
        assert_eq!(media_type_of(Path::new("a.jpeg"), &[]), "image/jpeg");
        assert_eq!(media_type_of(Path::new("a.gif"), &[]), "image/gif");
        assert_eq!(media_type_of(Path::new("a.webp"), &[]), "image/webp");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(media_type_of(Path::new("PHOTO.PNG"), &[]), "image/png");
    }

    #[test]
    fn test_extensionless_file_is_sniffed() {
        let png_magic = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(media_type_of(Path::new("download"), &png_magic), "image/png");

        let gif_magic = b"GIF89a";
        assert_eq!(media_type_of(Path::new("download"), gif_magic), "image/gif");
    }

    #[test]
    fn test_unrecognized_content_is_not_an_image() {
        let media_type = media_type_of(Path::new("notes"), b"hello world");
        assert!(!media_type.starts_with("image/"));
    }

    #[tokio::test]
    async fn test_load_candidate_missing_file() {
        let result = load_candidate(PathBuf::from("/nonexistent/photo.png")).await;
        assert!(result.is_err());
    }
}
