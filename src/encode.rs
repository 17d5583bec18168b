use crate::error::StitchError;

use image::{
    buffer::ConvertBuffer,
    codecs::jpeg::JpegEncoder,
    ImageFormat,
    ImageResult,
    RgbImage,
    RgbaImage,
};

use std::{
    fs::File,
    io::{ Cursor, Write },
    path::Path,
};

pub const JPEG_QUALITY: u8 = 100;

/// JPEG unless `out` asks for PNG by extension.
pub fn output_format(out: &Path) -> ImageFormat{
    match out.extension().and_then(|ext| ext.to_str()) {
        Some("png") => ImageFormat::Png,
        _ => ImageFormat::Jpeg,
    }
}

/// Writes `canvas` to `out`, replacing whatever was there.
/// JPEG has no alpha channel, so uncovered pixels come out black.
///
/// The image is encoded in memory first; `out` is only touched once encoding
/// succeeded, so a failed run leaves any previous file as it was.
pub fn write_image(canvas: &RgbaImage, out: &Path, quality: u8) -> Result<(), StitchError>{
    let bytes = encode_image(canvas, output_format(out), quality)
        .map_err(|source| StitchError::Encode{ path: out.to_path_buf(), source })?;

    let mut file = File::create(out)
        .map_err(|source| StitchError::Create{ path: out.to_path_buf(), source })?;
    file.write_all(&bytes)
        .and_then(|_| file.flush())
        .map_err(|source| StitchError::Write{ path: out.to_path_buf(), source })
}

fn encode_image(canvas: &RgbaImage, format: ImageFormat, quality: u8) -> ImageResult<Vec<u8>>{
    let mut buf = Cursor::new(Vec::new());
    match format {
        ImageFormat::Png => {
            canvas.write_to(&mut buf, ImageFormat::Png)?;
        },
        _ => {
            let rgb: RgbImage = canvas.convert();
            JpegEncoder::new_with_quality(&mut buf, quality).encode_image(&rgb)?;
        },
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::Rgba;

    fn scratch(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("stitchimg-encode-{tag}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn picks_format_from_extension() {
        assert_eq!(output_format(Path::new("x.png")), ImageFormat::Png);
        assert_eq!(output_format(Path::new("x.jpg")), ImageFormat::Jpeg);
        assert_eq!(output_format(Path::new("x.webp")), ImageFormat::Jpeg);
        assert_eq!(output_format(Path::new("noext")), ImageFormat::Jpeg);
    }

    #[test]
    fn png_output_is_lossless() {
        let dir = scratch("png");
        let out = dir.join("out.png");
        let canvas = RgbaImage::from_fn(5, 4, |x, y| Rgba([x as u8 * 40, y as u8 * 50, 7, 200]));
        write_image(&canvas, &out, JPEG_QUALITY).unwrap();
        let back = image::open(&out).unwrap().to_rgba8();
        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(back, canvas);
    }

    #[test]
    fn jpeg_output_overwrites_existing_file() {
        let dir = scratch("jpg");
        let out = dir.join("out.jpg");
        std::fs::write(&out, vec![0xAB; 1 << 16]).unwrap();
        let canvas = RgbaImage::from_pixel(8, 8, Rgba([200, 100, 50, 255]));
        write_image(&canvas, &out, JPEG_QUALITY).unwrap();
        let back = image::open(&out).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!((back.width(), back.height()), (8, 8));
    }

    #[test]
    fn failed_encode_keeps_previous_output() {
        let dir = scratch("tall");
        let out = dir.join("out.jpg");
        std::fs::write(&out, "previous good output").unwrap();
        // JPEG stores dimensions in 16 bits.
        let canvas = RgbaImage::from_pixel(1, 80_000, Rgba([10, 20, 30, 255]));
        let err = write_image(&canvas, &out, JPEG_QUALITY).unwrap_err();
        let kept = std::fs::read_to_string(&out).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert!(matches!(err, StitchError::Encode{ .. }));
        assert_eq!(kept, "previous good output");
    }

    #[test]
    fn failed_encode_creates_nothing() {
        let dir = scratch("tall-new");
        let out = dir.join("out.jpg");
        let canvas = RgbaImage::from_pixel(1, 80_000, Rgba([0, 0, 0, 255]));
        assert!(write_image(&canvas, &out, JPEG_QUALITY).is_err());
        let exists = out.exists();
        std::fs::remove_dir_all(&dir).unwrap();
        assert!(!exists);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_write_is_write_error() {
        // Opens fine, every write fails with ENOSPC.
        let out = Path::new("/dev/full");
        let canvas = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));
        let err = write_image(&canvas, out, JPEG_QUALITY).unwrap_err();
        assert!(matches!(err, StitchError::Write{ .. }));
        assert!(err.to_string().starts_with("could not write"));
    }

    #[test]
    fn uncreatable_output_is_create_error() {
        let dir = scratch("missing");
        let out = dir.join("no-such-dir").join("out.jpg");
        let canvas = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0]));
        let err = write_image(&canvas, &out, JPEG_QUALITY).unwrap_err();
        std::fs::remove_dir_all(&dir).unwrap();
        assert!(matches!(err, StitchError::Create{ .. }));
    }
}
