// Compositors: the live preview shown every tick and the final output image.

use crate::ants::AntsPhase;
use crate::draw::{draw_circle, put_pixel};
use crate::mask::SelectionMask;
use crate::types::{pack, unpack, FrameBuffer};

/// Dashed contour color (green, the classic selection feedback color).
pub const ANT_COLOR: u32 = 0x00_00_FF_00;
/// Brush cursor outline color.
pub const CURSOR_COLOR: u32 = 0x00_FF_CC_33;

/// Rec.601 luma from 8-bit channels, rounded.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32 + 500) / 1000) as u8
}

/// Build the per-tick display buffer: the source image with inverted colors
/// inside the selection, the animated dashed contour on top, and the brush
/// cursor outline at the pointer. `frame` must match the image dimensions.
pub fn render_preview(
    frame: &mut FrameBuffer,
    image: &FrameBuffer,
    mask: &SelectionMask,
    contours: &[Vec<(i32, i32)>],
    phase: &AntsPhase,
    cursor: (i32, i32),
    radius: i32,
) {
    frame.pixels.copy_from_slice(&image.pixels);

    // Inversion highlight inside the selection. This is preview-only feedback;
    // the saved result grays out the *unselected* side instead.
    for y in 0..frame.height as i32 {
        for x in 0..frame.width as i32 {
            if mask.is_set(x, y) {
                let idx = y as usize * frame.width + x as usize;
                frame.pixels[idx] = !frame.pixels[idx] & 0x00FF_FFFF;
            }
        }
    }

    // Marching ants: dash segments keyed on arc position plus phase.
    for contour in contours {
        for (arc_index, &(x, y)) in contour.iter().enumerate() {
            if phase.dash_visible(arc_index) {
                put_pixel(frame, x, y, ANT_COLOR);
            }
        }
    }

    draw_circle(frame, cursor.0, cursor.1, radius, CURSOR_COLOR);
}

/// Build the final image: original color where selected, luma grayscale
/// everywhere else. Pure function of the image and the mask.
pub fn render_output(image: &FrameBuffer, mask: &SelectionMask) -> FrameBuffer {
    let mut out = FrameBuffer::new(image.width, image.height);
    for y in 0..image.height {
        for x in 0..image.width {
            let idx = y * image.width + x;
            let px = image.pixels[idx];
            out.pixels[idx] = if mask.is_set(x as i32, y as i32) {
                px
            } else {
                let (r, g, b) = unpack(px);
                let v = luma(r, g, b);
                pack(v, v, v)
            };
        }
    }
    out
}

/// Raw black/white rendering of the mask itself, with no overlays.
pub fn render_mask_view(frame: &mut FrameBuffer, mask: &SelectionMask) {
    for y in 0..frame.height {
        for x in 0..frame.width {
            frame.pixels[y * frame.width + x] =
                if mask.is_set(x as i32, y as i32) { 0x00FF_FFFF } else { 0 };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker_image(w: usize, h: usize) -> FrameBuffer {
        let mut img = FrameBuffer::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.pixels[y * w + x] = if (x + y) % 2 == 0 { 0x00C3_5A10 } else { 0x0012_88EF };
            }
        }
        img
    }

    #[test]
    fn selected_pixels_keep_their_color() {
        let img = checker_image(6, 6);
        let mut mask = SelectionMask::new(6, 6);
        mask.set(1, 2);
        mask.set(4, 4);
        let out = render_output(&img, &mask);
        assert_eq!(out.pixels[2 * 6 + 1], img.pixels[2 * 6 + 1]);
        assert_eq!(out.pixels[4 * 6 + 4], img.pixels[4 * 6 + 4]);
    }

    #[test]
    fn unselected_pixels_are_true_grayscale() {
        let img = checker_image(6, 6);
        let mask = SelectionMask::new(6, 6);
        let out = render_output(&img, &mask);
        for &px in &out.pixels {
            let (r, g, b) = unpack(px);
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn full_mask_is_the_identity() {
        let img = checker_image(5, 4);
        let mut mask = SelectionMask::new(5, 4);
        for y in 0..4 {
            for x in 0..5 {
                mask.set(x, y);
            }
        }
        let out = render_output(&img, &mask);
        assert_eq!(out.pixels, img.pixels);
    }

    #[test]
    fn red_image_grays_to_the_luma_of_red() {
        // Solid red 4x4, empty mask: every output pixel is the grayscale
        // weighting of (255, 0, 0).
        let mut img = FrameBuffer::new(4, 4);
        img.pixels.fill(0x00FF_0000);
        let mask = SelectionMask::new(4, 4);
        let out = render_output(&img, &mask);
        let v = luma(255, 0, 0);
        assert_eq!(v, 76);
        for &px in &out.pixels {
            assert_eq!(px, pack(v, v, v));
        }

        // Selecting one cell leaves exactly that cell pure red.
        let mut mask = SelectionMask::new(4, 4);
        mask.set(2, 2);
        let out = render_output(&img, &mask);
        for y in 0..4usize {
            for x in 0..4usize {
                let expect = if (x, y) == (2, 2) { 0x00FF_0000 } else { pack(v, v, v) };
                assert_eq!(out.pixels[y * 4 + x], expect, "({x}, {y})");
            }
        }
    }

    #[test]
    fn preview_inverts_the_selection_interior() {
        let img = checker_image(9, 9);
        let mut mask = SelectionMask::new(9, 9);
        for y in 2..7 {
            for x in 2..7 {
                mask.set(x, y);
            }
        }
        let contours = crate::ants::trace_contours(&mask);
        let phase = AntsPhase::new();
        let mut frame = FrameBuffer::new(9, 9);
        // Cursor parked in a corner with radius 1 so it cannot reach the
        // pixels we check.
        render_preview(&mut frame, &img, &mask, &contours, &phase, (0, 0), 1);

        // Interior of the selection: inverted.
        let center = 4 * 9 + 4;
        assert_eq!(frame.pixels[center], !img.pixels[center] & 0x00FF_FFFF);
        // Far outside selection and cursor: untouched.
        let outside = 8 * 9 + 8;
        assert_eq!(frame.pixels[outside], img.pixels[outside]);
    }

    #[test]
    fn preview_draws_dashes_on_the_contour() {
        let img = checker_image(9, 9);
        let mut mask = SelectionMask::new(9, 9);
        for y in 2..7 {
            for x in 2..7 {
                mask.set(x, y);
            }
        }
        let contours = crate::ants::trace_contours(&mask);
        let phase = AntsPhase::new();
        let mut frame = FrameBuffer::new(9, 9);
        render_preview(&mut frame, &img, &mask, &contours, &phase, (0, 0), 1);

        // At phase zero the first contour pixels fall on a dash.
        let (x, y) = contours[0][0];
        assert_eq!(frame.pixels[y as usize * 9 + x as usize], ANT_COLOR);
    }

    #[test]
    fn mask_view_is_plain_black_and_white() {
        let mut mask = SelectionMask::new(4, 4);
        mask.set(1, 1);
        let mut frame = FrameBuffer::new(4, 4);
        render_mask_view(&mut frame, &mask);
        assert_eq!(frame.pixels[1 * 4 + 1], 0x00FF_FFFF);
        assert_eq!(frame.pixels[0], 0);
    }
}
