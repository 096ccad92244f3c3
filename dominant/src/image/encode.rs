//! In-memory encoders for building test fixtures: PNG, JPEG, GIF, WebP

use std::io::Cursor;

use imageproc::image::codecs::gif::GifEncoder;
use imageproc::image::codecs::jpeg::JpegEncoder;
use imageproc::image::{DynamicImage, Frame, ImageFormat, RgbImage};

pub fn png(img: &RgbImage) -> Vec<u8> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("Writing to vec should never fail");
    buffer
}

pub fn jpeg(img: &RgbImage) -> Vec<u8> {
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, 90)
        .encode_image(img)
        .expect("Writing to vec should never fail");
    buffer
}

pub fn gif(img: &RgbImage) -> Vec<u8> {
    let rgba = DynamicImage::ImageRgb8(img.clone()).to_rgba8();
    let mut buffer = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut buffer);
        encoder
            .encode_frame(Frame::new(rgba))
            .expect("Writing to vec should never fail");
    }
    buffer
}

pub fn webp_lossless(img: &RgbImage) -> Vec<u8> {
    let encoder = webp::Encoder::from_rgb(img.as_raw(), img.width(), img.height());
    encoder.encode_lossless().to_vec()
}
