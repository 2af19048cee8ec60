// The selection bitmap: one byte per image pixel, 0 (unselected) or 255 (selected).

pub const MASK_SET: u8 = 255;

/// Single-channel selection mask with the same dimensions as the image.
/// Coordinates are clamped to the image bounds on write, so painting near an
/// edge lands on the edge instead of being dropped.
pub struct SelectionMask {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl SelectionMask {
    /// All-zero mask of the given size. Both dimensions must be non-zero;
    /// clamping on write has no edge cell to land on otherwise.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "mask dimensions must be non-zero");
        Self { width, height, cells: vec![0u8; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn clamped_index(&self, x: i32, y: i32) -> usize {
        let x = (x.max(0) as usize).min(self.width - 1);
        let y = (y.max(0) as usize).min(self.height - 1);
        y * self.width + x
    }

    /// Mark one cell selected. Out-of-bounds coordinates clamp to the nearest
    /// edge cell.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32) {
        let idx = self.clamped_index(x, y);
        self.cells[idx] = MASK_SET;
    }

    /// Whether a cell is selected. Out-of-bounds reads return false.
    #[inline]
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y * self.width + x] == MASK_SET
    }

    /// Reset every cell to unselected.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Number of selected cells.
    pub fn set_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c == MASK_SET).count()
    }

    /// Selected fraction of the whole image, in [0, 1].
    pub fn fraction_set(&self) -> f32 {
        self.set_cells() as f32 / self.cells.len() as f32
    }
}
