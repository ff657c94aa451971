//! Avatar image decoding.

use image::imageops::FilterType;

/// Width avatars are scaled to, in pixels.
pub const AVATAR_WIDTH: u32 = 128;

/// Error type for avatar decoding.
#[derive(Debug, thiserror::Error)]
pub enum AvatarError {
    /// The bytes are not a supported image.
    #[error("failed to decode avatar: {0}")]
    Decode(#[from] image::ImageError),

    /// The image has no pixels.
    #[error("avatar has zero size")]
    Empty,
}

/// Decoded RGBA pixels ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 pixel data.
    pub rgba: Vec<u8>,
}

/// Decodes PNG or JPEG bytes and scales the result to [`AVATAR_WIDTH`],
/// keeping the aspect ratio.
///
/// # Errors
///
/// Returns an error if the bytes cannot be decoded or the image is empty.
pub fn decode_avatar(bytes: &[u8]) -> Result<AvatarImage, AvatarError> {
    let decoded = image::load_from_memory(bytes)?;
    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 {
        return Err(AvatarError::Empty);
    }

    let scaled = if width == AVATAR_WIDTH {
        decoded
    } else {
        let scaled_height = u64::from(height) * u64::from(AVATAR_WIDTH) / u64::from(width);
        let scaled_height = u32::try_from(scaled_height.max(1)).unwrap_or(u32::MAX);
        decoded.resize_exact(AVATAR_WIDTH, scaled_height, FilterType::Triangle)
    };

    let rgba = scaled.to_rgba8();
    Ok(AvatarImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}
