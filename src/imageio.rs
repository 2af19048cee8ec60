// Load/save boundary over the `image` crate. The core only ever sees the
// packed 0x00RRGGBB FrameBuffer; decoding and encoding stay here.

use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::types::{pack, unpack, FrameBuffer};

/// Decode an image file into a packed frame buffer.
pub fn load_image(path: &Path) -> Result<FrameBuffer, Error> {
    let rgb = image::ImageReader::open(path)
        .map_err(|e| Error::Load { path: path.to_owned(), source: image::ImageError::IoError(e) })?
        .decode()
        .map_err(|e| Error::Load { path: path.to_owned(), source: e })?
        .to_rgb8();

    let (w, h) = rgb.dimensions();
    let mut pixels = Vec::with_capacity(w as usize * h as usize);
    for px in rgb.pixels() {
        pixels.push(pack(px[0], px[1], px[2]));
    }
    Ok(FrameBuffer { width: w as usize, height: h as usize, pixels })
}

/// Encode a frame buffer to disk; the format follows the file extension.
pub fn save_image(path: &Path, fb: &FrameBuffer) -> Result<(), Error> {
    let mut img = image::RgbImage::new(fb.width as u32, fb.height as u32);
    for (x, y, px) in img.enumerate_pixels_mut() {
        let (r, g, b) = unpack(fb.pixels[y as usize * fb.width + x as usize]);
        *px = image::Rgb([r, g, b]);
    }
    img.save(path)
        .map_err(|e| Error::Save { path: path.to_owned(), source: e })
}

/// Where the result goes: the input file name with `prefix` prepended, in the
/// same directory.
pub fn output_path(input: &Path, prefix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.png".to_string());
    input.with_file_name(format!("{prefix}{name}"))
}
