// Core types shared by the pattern, the timed loop and the report.

/// Clock ticks as returned by a `Clock`; divide by its frequency for seconds.
pub type Ticks = u64;

/// Fixed frame size for the whole run. Surface and buffer both use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
    pub bytes_per_pixel: usize, // always 4: 0x00RRGGBB
}

impl Dimensions {
    pub const BYTES_PER_PIXEL: usize = 4;

    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, bytes_per_pixel: Self::BYTES_PER_PIXEL }
    }

    /// `None` when width * height doesn't fit in `usize`.
    pub fn checked_pixel_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    pub fn checked_frame_bytes(&self) -> Option<usize> {
        self.checked_pixel_count()?.checked_mul(self.bytes_per_pixel)
    }

    // Only called once a buffer of this size exists, so the products fit.
    pub fn pixel_count(&self) -> usize {
        self.checked_pixel_count().unwrap_or(usize::MAX)
    }

    /// Bytes moved by one full-frame blit.
    pub fn frame_bytes(&self) -> usize {
        self.checked_frame_bytes().unwrap_or(usize::MAX)
    }
}

/// Top-down, row-major, 32 bits per pixel, no row padding.
/// Filled once by `pattern::fill_pattern` and read-only afterwards.
pub struct PixelBuffer {
    dims: Dimensions,
    pixels: Vec<u32>, // each entry is 0x00RRGGBB for minifb
}

impl PixelBuffer {
    /// Wraps already-populated pixels. Length must match `dims`.
    pub(crate) fn from_pixels(dims: Dimensions, pixels: Vec<u32>) -> Self {
        debug_assert_eq!(pixels.len(), dims.pixel_count());
        Self { dims, pixels }
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Packed value at (x, y). Panics when out of bounds, like slice indexing.
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.dims.width + x]
    }
}
