// Brush state and stroke rasterization.
//
// Pointer-move events arrive at a finite rate, so a fast drag leaves large
// gaps between samples. We close them by stamping discs along the segment
// between the previous and current sample, which fills the swept capsule.

use crate::mask::SelectionMask;

pub const MIN_RADIUS: i32 = 1;
pub const MAX_RADIUS: i32 = 50;
pub const RADIUS_STEP: i32 = 2;

/// Current brush radius and cursor position. The radius can never leave
/// [MIN_RADIUS, MAX_RADIUS], so a zero or negative radius never reaches the
/// rasterizer below.
pub struct BrushState {
    radius: i32,
    pub cursor: (i32, i32),
}

impl BrushState {
    pub fn new(radius: i32) -> Self {
        Self { radius: radius.clamp(MIN_RADIUS, MAX_RADIUS), cursor: (0, 0) }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn grow(&mut self) {
        self.radius = (self.radius + RADIUS_STEP).min(MAX_RADIUS);
    }

    pub fn shrink(&mut self) {
        self.radius = (self.radius - RADIUS_STEP).max(MIN_RADIUS);
    }
}

/// Stamp a filled disc of radius `r` centered at (cx, cy).
/// Scans just the bounding box; the mask clamps edge writes itself, but we
/// still skip cells outside the disc so clamping cannot smear the shape.
pub fn stamp_disc(mask: &mut SelectionMask, cx: i32, cy: i32, r: i32) {
    let r2 = r * r;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r2 {
                let x = cx + dx;
                let y = cy + dy;
                if x >= 0 && y >= 0 && (x as usize) < mask.width() && (y as usize) < mask.height() {
                    mask.set(x, y);
                }
            }
        }
    }
}

/// Rasterize one stroke segment from `p0` to `p1` with brush radius `r`:
/// stamp a disc at evenly spaced points along the segment so the whole
/// capsule between the endpoints ends up selected, with no gaps.
pub fn stroke_segment(mask: &mut SelectionMask, p0: (i32, i32), p1: (i32, i32), r: i32) {
    let dx = (p1.0 - p0.0) as f32;
    let dy = (p1.1 - p0.1) as f32;
    let len = (dx * dx + dy * dy).sqrt();

    if len == 0.0 {
        stamp_disc(mask, p1.0, p1.1, r);
        return;
    }

    // Step must stay <= r to keep consecutive discs overlapping; r/3 matches
    // the brush feel of dense sampling without stamping every subpixel.
    let step = (r as f32 / 3.0).max(1.0);
    let n = (len / step).ceil() as i32;
    for i in 0..=n {
        let t = i as f32 / n as f32;
        let x = (p0.0 as f32 + t * dx).round() as i32;
        let y = (p0.1 as f32 + t * dy).round() as i32;
        stamp_disc(mask, x, y, r);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_clamps_at_both_ends() {
        let mut brush = BrushState::new(10);
        for _ in 0..100 {
            brush.grow();
        }
        assert_eq!(brush.radius(), MAX_RADIUS);
        for _ in 0..100 {
            brush.shrink();
        }
        assert_eq!(brush.radius(), MIN_RADIUS);
    }

    #[test]
    fn construction_clamps_wild_radii() {
        assert_eq!(BrushState::new(-3).radius(), MIN_RADIUS);
        assert_eq!(BrushState::new(9999).radius(), MAX_RADIUS);
    }

    #[test]
    fn disc_covers_exactly_the_circle() {
        let mut mask = SelectionMask::new(32, 32);
        stamp_disc(&mut mask, 16, 16, 5);
        for y in 0..32 {
            for x in 0..32 {
                let d2 = (x - 16) * (x - 16) + (y - 16) * (y - 16);
                if d2 <= 25 {
                    assert!(mask.is_set(x, y), "({x}, {y}) inside disc but unset");
                } else {
                    assert!(!mask.is_set(x, y), "({x}, {y}) outside disc but set");
                }
            }
        }
    }

    #[test]
    fn disc_near_edge_stays_in_bounds() {
        let mut mask = SelectionMask::new(10, 10);
        stamp_disc(&mut mask, 0, 0, 4);
        assert!(mask.is_set(0, 0));
        assert!(mask.is_set(4, 0));
        // Nothing below/right of the clipped quarter disc.
        assert!(!mask.is_set(9, 9));
    }

    /// Distance from a cell center to the segment p0-p1.
    fn dist_to_segment(c: (i32, i32), p0: (i32, i32), p1: (i32, i32)) -> f32 {
        let (px, py) = (c.0 as f32, c.1 as f32);
        let (ax, ay) = (p0.0 as f32, p0.1 as f32);
        let (bx, by) = (p1.0 as f32, p1.1 as f32);
        let (abx, aby) = (bx - ax, by - ay);
        let ab2 = abx * abx + aby * aby;
        let t = if ab2 == 0.0 {
            0.0
        } else {
            (((px - ax) * abx + (py - ay) * aby) / ab2).clamp(0.0, 1.0)
        };
        let (ex, ey) = (ax + t * abx - px, ay + t * aby - py);
        (ex * ex + ey * ey).sqrt()
    }

    #[test]
    fn fast_drag_leaves_no_gaps_in_the_capsule() {
        let mut mask = SelectionMask::new(40, 24);
        let a = (4, 4);
        let b = (34, 17);
        let r = 4;
        stroke_segment(&mut mask, a, b, r);

        // Full discs at both endpoints.
        for y in 0..24 {
            for x in 0..40 {
                let da = (x - a.0) * (x - a.0) + (y - a.1) * (y - a.1);
                let db = (x - b.0) * (x - b.0) + (y - b.1) * (y - b.1);
                if da <= r * r || db <= r * r {
                    assert!(mask.is_set(x, y), "endpoint disc cell ({x}, {y}) unset");
                }
            }
        }
        // Interior of the swept capsule is solid (one-cell tolerance at the
        // rim for integer stamp centers).
        for y in 0..24 {
            for x in 0..40 {
                if dist_to_segment((x, y), a, b) <= (r - 1) as f32 {
                    assert!(mask.is_set(x, y), "capsule cell ({x}, {y}) unset");
                }
            }
        }
    }

    #[test]
    fn zero_length_segment_is_a_single_disc() {
        let mut mask = SelectionMask::new(16, 16);
        stroke_segment(&mut mask, (8, 8), (8, 8), 3);
        assert!(mask.is_set(8, 8));
        assert!(mask.is_set(11, 8));
        assert!(!mask.is_set(12, 8));
    }
}
