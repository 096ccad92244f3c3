//! Image decoding
//!
//! Bytes are handed to an ordered list of format handlers. The cheap
//! magic-byte sniffing handler runs first, the WebP handler only when
//! sniffing does not recognise the data.

use imageproc::image::{self, DynamicImage, GenericImageView, ImageFormat};

use crate::error::DecodeError;

/// A single "try to decode these bytes" capability.
pub trait DecodeHandler: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns `None` when the handler does not understand the data.
    fn decode(&self, data: &[u8]) -> Option<DynamicImage>;
}

/// PNG, JPEG and GIF, picked by sniffing the leading bytes.
pub struct AutoDetect;

impl AutoDetect {
    const FORMATS: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Gif];
}

impl DecodeHandler for AutoDetect {
    fn name(&self) -> &'static str {
        "auto-detect"
    }

    fn decode(&self, data: &[u8]) -> Option<DynamicImage> {
        let format = image::guess_format(data).ok()?;
        if !Self::FORMATS.contains(&format) {
            return None;
        }

        image::load_from_memory_with_format(data, format)
            .map_err(|e| log::debug!("{format:?} decode failed: {e}"))
            .ok()
    }
}

pub struct WebP;

impl DecodeHandler for WebP {
    fn name(&self) -> &'static str {
        "webp"
    }

    fn decode(&self, data: &[u8]) -> Option<DynamicImage> {
        let decoded = webp::Decoder::new(data).decode()?;
        Some(decoded.to_image())
    }
}

static DEFAULT_CHAIN: [&dyn DecodeHandler; 2] = [&AutoDetect, &WebP];

/// The ordered set of handlers tried by [`decode`].
pub fn default_chain() -> &'static [&'static dyn DecodeHandler] {
    &DEFAULT_CHAIN
}

/// Decode image from memory using the default handler chain
pub fn decode(data: &[u8]) -> Result<DynamicImage, DecodeError> {
    decode_with(default_chain(), data)
}

/// Try each handler in order; the first non-empty image wins.
pub fn decode_with(
    handlers: &[&dyn DecodeHandler],
    data: &[u8],
) -> Result<DynamicImage, DecodeError> {
    for handler in handlers {
        let Some(img) = handler.decode(data) else {
            continue;
        };

        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            log::debug!("{} produced an empty {width}x{height} image", handler.name());
            continue;
        }

        log::debug!("Decoded {width}x{height} image with {}", handler.name());
        return Ok(img);
    }

    log::warn!("No decoder accepted {} bytes", data.len());
    Err(DecodeError::UnsupportedFormat)
}
