// Window + software drawing utilities: a minifb window sized to the image,
// pixel and circle primitives, and a tiny 5x7 bitmap font for the HUD.

use crate::controller::Command;
use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

/// Frame pacing target; also the cadence of the marching-ants animation.
const TARGET_FPS: usize = 30;

const KEY_COMMANDS: &[(Key, Command)] = &[
    (Key::C, Command::Clear),
    (Key::P, Command::Process),
    (Key::S, Command::Save),
    (Key::M, Command::ToggleMaskView),
    (Key::T, Command::Stats),
    (Key::Equal, Command::BrushGrow),
    (Key::NumPadPlus, Command::BrushGrow),
    (Key::Minus, Command::BrushShrink),
    (Key::NumPadMinus, Command::BrushShrink),
    (Key::Escape, Command::Quit),
];

pub struct Drawer {
    window: Window,
}

impl Drawer {
    /// Open a window sized to the image.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(TARGET_FPS);
        Ok(Self { window })
    }

    /// Push this frame's pixels to the screen. This call also pumps the
    /// window's input state, so it must run once per loop iteration.
    pub fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&frame.pixels, frame.width, frame.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// False once the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Mouse position in image pixel coordinates. minifb clamps coordinates
    /// to the window for us, which is exactly the clamp-not-reject policy we
    /// want at the input boundary.
    pub fn mouse_pos(&self) -> Option<(i32, i32)> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x.max(0.0) as i32, y.max(0.0) as i32))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Commands for keys that went down since the last frame, edge-triggered.
    pub fn pressed_commands(&self) -> Vec<Command> {
        KEY_COMMANDS
            .iter()
            .filter(|(key, _)| self.window.is_key_pressed(*key, KeyRepeat::No))
            .map(|&(_, cmd)| cmd)
            .collect()
    }
}

/* ---------- Software drawing: pixels and circles ---------- */

/// Put a pixel if (x, y) is inside the buffer.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    fb.pixels[y * fb.width + x] = color;
}

/// Midpoint circle outline of `radius` around (cx, cy). Only the outline
/// pixels are touched; this is the brush cursor.
pub fn draw_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    if radius <= 0 {
        put_pixel(fb, cx, cy, color);
        return;
    }
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;
    while x >= y {
        // One pixel per octant.
        put_pixel(fb, cx + x, cy + y, color);
        put_pixel(fb, cx + y, cy + x, color);
        put_pixel(fb, cx - y, cy + x, color);
        put_pixel(fb, cx - x, cy + y, color);
        put_pixel(fb, cx - x, cy - y, color);
        put_pixel(fb, cx - y, cy - x, color);
        put_pixel(fb, cx + y, cy - x, color);
        put_pixel(fb, cx + x, cy - y, color);
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/* ---------- 5x7 bitmap font (just the HUD character set) ---------- */

/// 5x7 glyph rows for the characters the HUD uses. Each u8 is a row; the low
/// 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character with a 1-pixel black drop shadow.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32 + 1, y + ry as i32 + 1, 0x0000_0000);
                }
            }
        }
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a HUD string; glyphs are 5 pixels wide with 1 pixel of spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6;
    }
}
