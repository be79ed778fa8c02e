use base::Vec2;
use image::{EncodedFrame, Image, PixelFormat};

fn gradient(size: Vec2<usize>) -> Image {
    let data: Vec<u8> = (0..size.x * size.y * 3).map(|v| (v % 256) as u8).collect();
    Image::new(size, data, PixelFormat::Rgb8)
}

#[test]
fn test_rgb_to_jpeg_has_soi_marker() {
    let size = Vec2::new(4, 4);
    let data: Vec<u8> = (0..48).collect();

    let jpeg = image::rgb_to_jpeg(size, &data, 90).unwrap();

    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
}

#[test]
fn test_rgb_to_jpeg_quality_affects_size() {
    let image = gradient(Vec2::new(8, 8));

    let low_quality = image::rgb_to_jpeg(image.size, &image.data, 10).unwrap();
    let high_quality = image::rgb_to_jpeg(image.size, &image.data, 100).unwrap();

    assert!(low_quality.len() < high_quality.len());
}

#[test]
fn test_jpeg_passes_through_unchanged() {
    let jpeg = image::rgb_to_jpeg(Vec2::new(4, 4), &[0u8; 48], 80).unwrap();
    let image = Image::new(Vec2::new(4, 4), jpeg.clone(), PixelFormat::Jpeg);
    assert_eq!(image::image_to_jpeg(&image, 10).unwrap(), jpeg);
}

#[test]
fn test_encode_data_url_prefix() {
    let frame = image::encode_data_url(&gradient(Vec2::new(16, 8)), 92).unwrap();
    assert!(frame.as_str().starts_with("data:image/jpeg;base64,"));
    assert!(!frame.is_empty());
}

#[test]
fn test_data_url_decodes_to_same_dimensions() {
    let size = Vec2::new(16, 8);
    let frame = image::encode_data_url(&gradient(size), 92).unwrap();

    let jpeg = frame.decode().unwrap();
    let decoded = image::jpeg_to_rgb(&Image::new(size, jpeg, PixelFormat::Jpeg)).unwrap();

    assert_eq!(decoded.size, size);
    assert_eq!(decoded.data.len(), 16 * 8 * 3);
}

#[test]
fn test_encode_rejects_inconsistent_raster() {
    let image = Image::new(Vec2::new(4, 4), vec![0u8; 5], PixelFormat::Rgb8);
    assert!(image::encode_data_url(&image, 92).is_err());
}

#[test]
fn test_data_url_recovers_jpeg_bytes() {
    let jpeg = image::rgb_to_jpeg(Vec2::new(2, 2), &[0u8; 12], 50).unwrap();
    let frame = EncodedFrame::from_jpeg(&jpeg);
    assert_eq!(frame.decode().unwrap(), jpeg);
}

#[test]
fn test_debug_hides_payload() {
    let frame = EncodedFrame::from_jpeg(&[1, 2, 3]);
    let text = format!("{:?}", frame);
    assert!(text.starts_with("EncodedFrame("));
    assert!(!text.contains("base64"));
}
