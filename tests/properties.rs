use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use majority_color_wasm::{
    ExtractError, ExtractorConfig, ImageDecoder, MajorityColorExtractor, PixelBuffer,
    extract_majority_color, majority_color_bytes,
};
use std::io::Cursor;

fn flatten(pixels: &[[u8; 4]]) -> Vec<u8> {
    pixels.iter().flatten().copied().collect()
}

fn extract_hex(width: u32, height: u32, pixels: &[[u8; 4]]) -> Result<String, ExtractError> {
    let data = flatten(pixels);
    let buf = PixelBuffer::new(width, height, &data)?;
    extract_majority_color(&buf)
}

fn png(img: RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn repeated_calls_agree() {
    let mut pixels = Vec::new();
    for i in 0..64u8 {
        pixels.push([i * 3, 255 - i, i % 7 * 30, 128 + i]);
    }
    let first = extract_hex(8, 8, &pixels).ok();
    for _ in 0..5 {
        assert_eq!(extract_hex(8, 8, &pixels).ok(), first);
    }
}

#[test]
fn fully_transparent_image_has_no_color() {
    let pixels = vec![[12, 34, 56, 0]; 100];
    let err = extract_hex(10, 10, &pixels).unwrap_err();
    assert!(matches!(err, ExtractError::NoSignificantColor));
}

#[test]
fn white_and_light_gray_have_no_color() {
    let white = vec![[255, 255, 255, 255]; 16];
    assert!(extract_hex(4, 4, &white).unwrap_err().is_no_color());

    let light_gray = vec![[250, 250, 250, 255]; 16];
    assert!(extract_hex(4, 4, &light_gray).unwrap_err().is_no_color());
}

#[test]
fn white_is_excluded_from_the_total() {
    let mut pixels = vec![[30, 60, 90, 255]; 10];
    pixels.extend(vec![[255, 255, 255, 255]; 90]);

    let data = flatten(&pixels);
    let buf = PixelBuffer::new(10, 10, &data).unwrap();
    let m = MajorityColorExtractor::default().extract(&buf).unwrap();
    assert_eq!(m.hex(), "#1e3c5a");
    assert_eq!((m.count, m.total), (10, 10));
}

#[test]
fn exactly_ten_percent_is_not_enough() {
    // ten distinct colors, ten pixels each: the leader holds 10/100
    let mut pixels = Vec::new();
    for c in 0..10u8 {
        pixels.extend(vec![[c * 20, 0, 0, 255]; 10]);
    }
    assert!(extract_hex(10, 10, &pixels).unwrap_err().is_no_color());

    // one more pixel of the first color tips it over: 11/101
    pixels.push([0, 0, 0, 255]);
    assert_eq!(extract_hex(101, 1, &pixels).unwrap(), "#000000");
}

#[test]
fn opaque_pixel_is_not_blended() {
    assert_eq!(extract_hex(1, 1, &[[10, 20, 30, 255]]).unwrap(), "#0a141e");
}

#[test]
fn half_transparent_black_composites_to_gray() {
    let hex = extract_hex(1, 1, &[[0, 0, 0, 128]]).unwrap();
    assert_eq!(hex, "#7f7f7f");
}

#[test]
fn tie_break_follows_scan_order() {
    let a = [200, 0, 0, 255];
    let b = [0, 0, 200, 255];

    // b reaches two occurrences before a does
    assert_eq!(extract_hex(4, 1, &[a, b, b, a]).unwrap(), "#0000c8");
    // a reaches two occurrences first
    assert_eq!(extract_hex(4, 1, &[a, b, a, b]).unwrap(), "#c80000");
}

#[test]
fn formatter_round_trips_all_channel_values() {
    use majority_color_wasm::format::{parse_hex, to_hex, to_rgba};
    use palette::Srgb;

    for v in 0..=255u8 {
        let color = Srgb::new(v, v, v);
        assert_eq!(parse_hex(&to_hex(color)).unwrap(), color);
        assert_eq!(to_rgba(&to_hex(color), 1.0).unwrap(), format!("rgba({v}, {v}, {v}, 1)"));
    }
}

#[test]
fn malformed_buffer_is_rejected() {
    let data = vec![0u8; 10];
    assert!(matches!(
        PixelBuffer::new(1, 1, &data),
        Err(ExtractError::InvalidImageData { len: 10, .. })
    ));

    let data = vec![0u8; 8];
    assert!(matches!(
        PixelBuffer::new(3, 3, &data),
        Err(ExtractError::InvalidImageData { .. })
    ));
}

#[test]
fn encoded_png_goes_through_decoder() {
    let mut img = RgbaImage::from_pixel(20, 20, Rgba([255, 255, 255, 255]));
    for x in 0..20 {
        for y in 0..5 {
            img.put_pixel(x, y, Rgba([0, 128, 255, 255]));
        }
    }
    let bytes = png(img);

    let m = majority_color_bytes(&bytes, &ExtractorConfig::default()).unwrap();
    assert_eq!(m.hex(), "#0080ff");
    assert_eq!((m.count, m.total), (100, 100));

    let extractor = MajorityColorExtractor::default();
    let m = extractor.extract_image(&ImageDecoder::new(Some(10)), &bytes).unwrap();
    assert_eq!(m.hex(), "#0080ff");
    assert!(m.total < 100);
}

#[test]
fn undecodable_bytes_fail() {
    let err = majority_color_bytes(b"\x89PNG broken", &ExtractorConfig::default()).unwrap_err();
    assert!(matches!(err, ExtractError::Decode(_)));
}

#[test]
fn extractions_run_in_parallel() {
    let data = flatten(&vec![[5, 10, 15, 255]; 256]);
    let extractor = MajorityColorExtractor::default();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    let buf = PixelBuffer::new(16, 16, &data).unwrap();
                    extractor.extract(&buf).unwrap().hex()
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), "#050a0f");
        }
    });
}
