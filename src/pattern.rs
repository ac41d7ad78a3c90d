// Builds the test pattern every run copies: gray = (x ^ y) & 0xFF.
// Visual: a grid of diagonal gray bands, identical on every machine.

use crate::error::Error;
use crate::types::{Dimensions, PixelBuffer};
use image::{ImageBuffer, Rgb};
use std::path::Path;

/// Packed 0x00GGGGGG value for pixel (x, y).
#[inline]
pub fn pattern_value(x: usize, y: usize) -> u32 {
    let g = ((x ^ y) & 0xFF) as u32;
    (g << 16) | (g << 8) | g
}

/// Allocate the buffer and write every pixel once.
/// Allocation failure is returned instead of aborting so `main` can report it.
pub fn fill_pattern(dims: Dimensions) -> Result<PixelBuffer, Error> {
    if dims.checked_frame_bytes().is_none() {
        return Err(Error::BufferAlloc(format!(
            "{}x{}: frame size overflows usize",
            dims.width, dims.height
        )));
    }
    let len = dims.pixel_count();
    let mut pixels: Vec<u32> = Vec::new();
    pixels
        .try_reserve_exact(len)
        .map_err(|e| Error::BufferAlloc(format!("{}x{}: {e}", dims.width, dims.height)))?;

    for y in 0..dims.height {
        for x in 0..dims.width {
            pixels.push(pattern_value(x, y));
        }
    }

    Ok(PixelBuffer::from_pixels(dims, pixels))
}

/// Write the pattern as an RGB PNG so it can be checked by eye.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<(), Error> {
    let dims = buffer.dims();
    let (w, h) = match (u32::try_from(dims.width), u32::try_from(dims.height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(Error::PatternExport(format!(
                "{}x{} is too large for a PNG",
                dims.width, dims.height
            )));
        }
    };

    // Unpack 0x00RRGGBB back into bytes; the high byte is dropped.
    let img = ImageBuffer::from_fn(w, h, |x, y| {
        let p = buffer.pixel(x as usize, y as usize);
        Rgb([(p >> 16) as u8, (p >> 8) as u8, p as u8])
    });

    img.save(path)
        .map_err(|e| Error::PatternExport(format!("{}: {e}", path.display())))
}
