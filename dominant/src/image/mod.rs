//! Decoding and downsampling of fetched images

mod decode;
#[cfg(test)]
pub(crate) mod encode;
mod transform;

pub use decode::{decode, decode_with, default_chain, AutoDetect, DecodeHandler, WebP};
pub use transform::{resize, ResizeTarget, DEFAULT_WIDTH};

use imageproc::image::{DynamicImage, RgbImage};

/// Normalise any decoded image to 8-bit RGB, dropping alpha.
///
/// 16-bit and float sources are scaled down to 8 bits per channel.
pub fn to_grid(img: DynamicImage) -> RgbImage {
    img.into_rgb8()
}
