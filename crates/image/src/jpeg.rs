use {
    crate::*,
    base::Vec2,
    crates_image::ImageEncoder,
};

pub fn rgb_to_jpeg(size: Vec2<usize>, data: &[u8], quality: u8) -> Result<Vec<u8>, ImageError> {
    let mut buffer = Vec::new();
    let encoder = crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(
            data,
            size.x as u32,
            size.y as u32,
            crates_image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Compress any image to JPEG. Images that already are JPEG pass through.
pub fn image_to_jpeg(image: &Image, quality: u8) -> Result<Vec<u8>, ImageError> {
    if image.format == PixelFormat::Jpeg {
        return Ok(image.data.clone());
    }
    let rgb = image.to_rgb()?;
    rgb_to_jpeg(rgb.size, &rgb.data, quality)
}
