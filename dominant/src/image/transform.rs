//! Downsampling ahead of histogram analysis

use fast_image_resize as fr;
use fr::images::Image as FrImage;
use imageproc::image::RgbImage;

use crate::error::ProcessingError;

/// Width the pipeline shrinks every image to before counting colors.
pub const DEFAULT_WIDTH: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeTarget {
    pub width: u32,
    /// `None` derives the height from the source aspect ratio. The pipeline
    /// always leaves this `None`; an explicit height is for direct callers.
    pub height: Option<u32>,
}

impl ResizeTarget {
    pub fn width(width: u32) -> Self {
        Self {
            width,
            height: None,
        }
    }

    /// Final output size for a `width`x`height` source.
    pub fn dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        match self.height {
            Some(target_height) => (self.width.max(1), target_height.max(1)),
            None if self.width >= width => (width, height),
            None => {
                let ratio = self.width as f64 / width as f64;
                let new_height = (height as f64 * ratio).round().max(1.0) as u32;
                (self.width.max(1), new_height)
            }
        }
    }
}

/// Resize to `target` with a Lanczos3 filter, never upscaling when only a width is given.
///
/// The input is left untouched; a new buffer is always returned.
pub fn resize(img: &RgbImage, target: ResizeTarget) -> Result<RgbImage, ProcessingError> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(ProcessingError::EmptyImage);
    }

    let (new_width, new_height) = target.dimensions(width, height);
    if (new_width, new_height) == (width, height) {
        log::debug!("Skipping resize, {width}x{height} already fits");
        return Ok(img.clone());
    }

    let src_image = FrImage::from_vec_u8(width, height, img.as_raw().clone(), fr::PixelType::U8x3)
        .map_err(|e| ProcessingError::Resize(e.to_string()))?;
    let mut dst_image = FrImage::new(new_width, new_height, fr::PixelType::U8x3);

    let options =
        fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3));
    fr::Resizer::new()
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| ProcessingError::Resize(e.to_string()))?;

    log::debug!("Resized {width}x{height} to {new_width}x{new_height}");

    RgbImage::from_raw(new_width, new_height, dst_image.into_vec())
        .ok_or_else(|| ProcessingError::Resize("resized buffer has the wrong length".into()))
}
