// Paint over the parts of a photo that should stay in color; everything else
// goes grayscale in the saved result.
// • Hold Left Mouse: paint the selection (inverted highlight + marching ants).
// • +/-: brush size. C: clear. P: process. S: save result. M: mask view.
// • T: selection stats. ESC or closing the window quits.

mod ants;
mod brush;
mod compose;
mod controller;
mod draw;
mod error;
mod imageio;
mod mask;
mod types;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{error, info};

use ants::AntsPhase;
use controller::{InteractionController, PointerTracker, Reaction};
use draw::{draw_text_5x7, Drawer};
use error::Error;
use types::FrameBuffer;

#[derive(Parser)]
#[command(name = "color-pop", about = "Keep the painted region in color, gray out the rest")]
struct Args {
    /// Image to open (anything the `image` crate decodes)
    image: PathBuf,

    /// Prefix prepended to the input file name for the saved result
    #[arg(long, default_value = "masked_")]
    prefix: String,

    /// Starting brush radius in pixels
    #[arg(long, default_value_t = 10)]
    radius: i32,
}

fn main() -> Result<(), Error> {
    // Stats and save reports go through the logger; default to info so they
    // show up without RUST_LOG set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    /* --- Load + window setup ---
       A failed load is fatal; the interactive loop never starts. */
    let image = imageio::load_image(&args.image)?;
    info!("loaded {} ({}x{})", args.image.display(), image.width, image.height);
    let out_path = imageio::output_path(&args.image, &args.prefix);

    let (w, h) = (image.width, image.height);
    let mut drawer = Drawer::new("color-pop — paint what stays in color", w, h)?;
    let mut ctl = InteractionController::new(image, args.radius);

    /* --- Per-tick state --- */
    let mut frame = FrameBuffer::new(w, h);
    let mut phase = AntsPhase::new();
    let mut pointer = PointerTracker::new();
    let mut quit = false;

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second = 0u32;
    let mut hud_fps_text = String::from("FPS: 0.0");

    while drawer.is_open() && !quit {
        /* 1) Pointer: turn polled button state into press/move/release. */
        for event in pointer.poll(drawer.left_mouse_down(), drawer.mouse_pos()) {
            ctl.on_pointer(event);
        }

        /* 2) Keys → commands through the state machine. */
        for cmd in drawer.pressed_commands() {
            match ctl.on_command(cmd) {
                Reaction::SaveResult(buf) => match imageio::save_image(&out_path, &buf) {
                    Ok(()) => info!("saved {}", out_path.display()),
                    Err(e) => error!("{e}"), // save failures don't end the session
                },
                Reaction::Quit => quit = true,
                Reaction::NothingToSave | Reaction::None => {}
            }
        }

        /* 3) Advance the ants and rebuild this tick's frame. */
        phase.tick();
        ctl.render_frame(&mut frame, &phase);

        /* 4) HUD on top. */
        let hud = format!("{} | R: {} | {}", ctl.mode_label(), ctl.brush().radius(), hud_fps_text);
        draw_text_5x7(&mut frame, 8, 8, &hud, 0x00FF_FFFF);

        /* 5) Present (this also pumps input for the next iteration). */
        drawer.present(&frame)?;

        /* 6) FPS counter, refreshed once per second. */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            hud_fps_text = format!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
