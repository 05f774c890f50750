/// Preview rendering for accepted images
///
/// The accepted bytes are decoded off the UI thread and downscaled to a
/// bounded working size for display. The analysis upload always uses the
/// original bytes, never the downscaled preview.

use iced::widget::image::Handle;
use image::imageops::FilterType;
use tokio::task;

/// Longest edge of the displayed preview in pixels
const PREVIEW_MAX_DIM: u32 = 1280;

/// Decode image bytes into a displayable preview handle
///
/// # Arguments
/// * `bytes` - The accepted file contents
///
/// # Returns
/// * `Ok(Handle)` - Decoded (and possibly downscaled) preview
/// * `Err(String)` - Error message if the bytes do not decode as an image
pub async fn render_preview(bytes: Vec<u8>) -> Result<Handle, String> {
    // Spawn blocking because decoding is CPU-intensive
    task::spawn_blocking(move || render_preview_blocking(bytes))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

/// Blocking implementation of preview decoding
fn render_preview_blocking(bytes: Vec<u8>) -> Result<Handle, String> {
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| format!("Failed to decode image: {}", e))?;

    let (width, height) = (decoded.width(), decoded.height());

    let preview = if width.max(height) > PREVIEW_MAX_DIM {
        decoded.resize(PREVIEW_MAX_DIM, PREVIEW_MAX_DIM, FilterType::Lanczos3)
    } else {
        decoded
    };

    println!(
        "📸 Preview ready: {}x{} displayed at {}x{}",
        width,
        height,
        preview.width(),
        preview.height()
    );

    let rgba = preview.to_rgba8();
    let (preview_width, preview_height) = rgba.dimensions();

    Ok(Handle::from_rgba(
        preview_width,
        preview_height,
        rgba.into_raw(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Encode a tiny solid-color PNG in memory
    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 40, 40, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[tokio::test]
    async fn test_render_preview_decodes_valid_png() {
        let result = render_preview(tiny_png()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_render_preview_rejects_garbage() {
        let result = render_preview(vec![0u8; 64]).await;
        assert!(result.is_err());
    }
}
