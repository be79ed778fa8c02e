use {crate::*, base::Vec2};

/// Expand packed YUYV 4:2:2 to RGB8. Each 4-byte group carries two pixels
/// that share one chroma pair.
pub fn yuyv_to_rgb(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    data.chunks_exact(4)
        .take(size.area() / 2)
        .flat_map(|group| {
            let (y0, u, y1, v) = (group[0], group[1], group[2], group[3]);
            let (r0, g0, b0) = yuv_to_rgb(y0, u, v);
            let (r1, g1, b1) = yuv_to_rgb(y1, u, v);
            [r0, g0, b0, r1, g1, b1]
        })
        .collect()
}

/// Drop the alpha byte of packed ARGB8.
pub fn argb_to_rgb(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    data.chunks_exact(4)
        .take(size.area())
        .flat_map(|pixel| [pixel[1], pixel[2], pixel[3]])
        .collect()
}

pub fn jpeg_to_rgb(image: &Image) -> Result<Image, ImageError> {
    image.format.check(PixelFormat::Jpeg)?;
    let decoded =
        crates_image::load_from_memory_with_format(&image.data, crates_image::ImageFormat::Jpeg)?
            .into_rgb8();
    let size = Vec2::new(decoded.width() as usize, decoded.height() as usize);
    Ok(Image::new(size, decoded.into_raw(), PixelFormat::Rgb8))
}
