// Core pixel types shared by every module.

/// An RGB raster with one `u32` per pixel, packed as 0x00RRGGBB for minifb.
#[derive(Clone, PartialEq, Debug)]
pub struct FrameBuffer {
    pub width: usize,      // pixels per row
    pub height: usize,     // number of rows
    pub pixels: Vec<u32>,  // length = width * height
}

impl FrameBuffer {
    /// All-black buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

/// Split 0x00RRGGBB into channels.
#[inline]
pub fn unpack(px: u32) -> (u8, u8, u8) {
    (((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8)
}

/// Pack channels back into 0x00RRGGBB.
#[inline]
pub fn pack(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}
