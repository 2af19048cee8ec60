// Marching-ants boundary: trace the contour(s) of the selected region and
// animate a dash pattern along them. Contours are retraced every tick from
// the current mask; only the dash phase persists between frames.

use crate::mask::SelectionMask;

pub const DASH_LEN: u32 = 4;
pub const GAP_LEN: u32 = 4;
pub const PHASE_STEP: u32 = 1;

/// Free-running dash-phase counter, advanced once per rendered frame.
pub struct AntsPhase {
    phase: u32,
}

impl AntsPhase {
    pub fn new() -> Self {
        Self { phase: 0 }
    }

    /// Advance the dash offset by one step. Never resets; the pattern just
    /// keeps crawling for the lifetime of the process.
    pub fn tick(&mut self) {
        self.phase = self.phase.wrapping_add(PHASE_STEP);
    }

    /// Whether the contour pixel at arc position `arc_index` falls on a dash
    /// (as opposed to a gap) at the current phase.
    #[inline]
    pub fn dash_visible(&self, arc_index: usize) -> bool {
        (arc_index as u32).wrapping_add(self.phase) % (DASH_LEN + GAP_LEN) < DASH_LEN
    }
}

// 8 neighbors in clockwise order, y growing downward:
// E, SE, S, SW, W, NW, N, NE.
const NEIGHBORS: [(i32, i32); 8] =
    [(1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1)];

/// Trace the closed contour(s) of the set region by Moore-neighbor boundary
/// following. Each disjoint region yields one ordered contour; an empty mask
/// yields none. Pixels are 8-connected.
pub fn trace_contours(mask: &SelectionMask) -> Vec<Vec<(i32, i32)>> {
    let w = mask.width();
    let h = mask.height();
    let mut on_contour = vec![false; w * h];
    let mut contours = Vec::new();

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            // A fresh boundary start: set cell entered from an unset cell in
            // raster order, not already part of a traced contour.
            if mask.is_set(x, y)
                && !mask.is_set(x - 1, y)
                && !on_contour[y as usize * w + x as usize]
            {
                contours.push(follow_boundary(mask, (x, y), &mut on_contour));
            }
        }
    }
    contours
}

/// Walk the boundary starting at `start`, whose west neighbor is known to be
/// unset. Terminates when the walk is about to repeat its first move from the
/// start pixel (Jacob's stopping criterion), or immediately for an isolated
/// pixel.
fn follow_boundary(
    mask: &SelectionMask,
    start: (i32, i32),
    on_contour: &mut [bool],
) -> Vec<(i32, i32)> {
    let w = mask.width();
    let mut contour = vec![start];
    on_contour[start.1 as usize * w + start.0 as usize] = true;

    let mut p = start;
    let mut back = 4; // direction from p toward the cell we came from (west)
    let mut first_move: Option<usize> = None;
    // A boundary pixel is visited at most once per incoming direction.
    let budget = 8 * w * mask.height();

    for _ in 0..budget {
        let mut next = None;
        for i in 1..=8 {
            let d = (back + i) % 8;
            let q = (p.0 + NEIGHBORS[d].0, p.1 + NEIGHBORS[d].1);
            if mask.is_set(q.0, q.1) {
                next = Some((q, d));
                break;
            }
        }
        let Some((q, d)) = next else {
            break; // isolated pixel, contour is just the start
        };

        match first_move {
            None => first_move = Some(d),
            Some(d0) => {
                if p == start && d == d0 {
                    break; // back at the start, about to retrace
                }
            }
        }

        contour.push(q);
        on_contour[q.1 as usize * w + q.0 as usize] = true;
        back = (d + 4) % 8;
        p = q;
    }

    // The walk re-enters the start before terminating; drop the duplicate.
    if contour.len() > 1 && contour.last() == Some(&start) {
        contour.pop();
    }
    contour
}
