// The interaction state machine. Owns the image, the selection mask, the
// brush, and the cached processed result; everything else reads through it.

use log::{debug, info, warn};

use crate::ants::{trace_contours, AntsPhase};
use crate::brush::{stamp_disc, stroke_segment, BrushState};
use crate::compose;
use crate::mask::SelectionMask;
use crate::types::FrameBuffer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Press { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Clear,
    Process,
    Save,
    Stats,
    ToggleMaskView,
    BrushGrow,
    BrushShrink,
    Quit,
}

/// What the caller has to do after a command; most commands are fully
/// handled internally.
#[derive(Debug, PartialEq)]
pub enum Reaction {
    None,
    /// A processed result exists and should be written to storage.
    SaveResult(FrameBuffer),
    /// Save was requested before any process command. Not an error.
    NothingToSave,
    Quit,
}

enum StrokeState {
    Idle,
    Drawing { last: (i32, i32) },
}

/// Turns polled button state into edge-triggered pointer events. The press
/// edge is only latched once a position has been read, so a press frame
/// where the window has no pointer position yet cannot swallow the stroke.
pub struct PointerTracker {
    was_down: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self { was_down: false }
    }

    pub fn poll(&mut self, down: bool, pos: Option<(i32, i32)>) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        if self.was_down && !down {
            events.push(PointerEvent::Release);
            self.was_down = false;
        }
        if let Some((x, y)) = pos {
            if down && !self.was_down {
                events.push(PointerEvent::Press { x, y });
            } else {
                events.push(PointerEvent::Move { x, y });
            }
            self.was_down = down;
        }
        events
    }
}

pub struct InteractionController {
    image: FrameBuffer,
    mask: SelectionMask,
    brush: BrushState,
    stroke: StrokeState,
    /// Cached output of the last process command; any mask mutation drops it.
    result: Option<FrameBuffer>,
    show_mask: bool,
}

impl InteractionController {
    pub fn new(image: FrameBuffer, radius: i32) -> Self {
        let mask = SelectionMask::new(image.width, image.height);
        Self {
            image,
            mask,
            brush: BrushState::new(radius),
            stroke: StrokeState::Idle,
            result: None,
            show_mask: false,
        }
    }

    pub fn mask(&self) -> &SelectionMask {
        &self.mask
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.stroke, StrokeState::Drawing { .. })
    }

    #[inline]
    fn clamp_point(&self, x: i32, y: i32) -> (i32, i32) {
        (
            x.clamp(0, self.image.width as i32 - 1),
            y.clamp(0, self.image.height as i32 - 1),
        )
    }

    pub fn on_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press { x, y } => {
                let p = self.clamp_point(x, y);
                self.brush.cursor = p;
                // A press while a stroke is already in progress is ignored.
                if matches!(self.stroke, StrokeState::Idle) {
                    stamp_disc(&mut self.mask, p.0, p.1, self.brush.radius());
                    self.after_paint(p);
                    self.stroke = StrokeState::Drawing { last: p };
                }
            }
            PointerEvent::Move { x, y } => {
                let p = self.clamp_point(x, y);
                self.brush.cursor = p;
                if let StrokeState::Drawing { last } = self.stroke {
                    stroke_segment(&mut self.mask, last, p, self.brush.radius());
                    self.after_paint(p);
                    self.stroke = StrokeState::Drawing { last: p };
                }
            }
            PointerEvent::Release => {
                self.stroke = StrokeState::Idle;
            }
        }
    }

    fn after_paint(&mut self, at: (i32, i32)) {
        self.result = None;
        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "painted at ({}, {}) radius {}; mask has {} set cells",
                at.0,
                at.1,
                self.brush.radius(),
                self.mask.set_cells()
            );
        }
    }

    pub fn on_command(&mut self, cmd: Command) -> Reaction {
        match cmd {
            Command::Clear => {
                self.mask.clear();
                self.result = None;
                info!("selection cleared");
                Reaction::None
            }
            Command::Process => {
                self.result = Some(compose::render_output(&self.image, &self.mask));
                info!("processed result ready; S saves it");
                Reaction::None
            }
            Command::Save => match &self.result {
                Some(result) => Reaction::SaveResult(result.clone()),
                None => {
                    warn!("nothing to save yet; press P to process first");
                    Reaction::NothingToSave
                }
            },
            Command::Stats => {
                info!(
                    "selection covers {:.1}% of the image",
                    self.mask.fraction_set() * 100.0
                );
                Reaction::None
            }
            Command::ToggleMaskView => {
                self.show_mask = !self.show_mask;
                Reaction::None
            }
            Command::BrushGrow => {
                self.brush.grow();
                debug!("brush radius now {}", self.brush.radius());
                Reaction::None
            }
            Command::BrushShrink => {
                self.brush.shrink();
                debug!("brush radius now {}", self.brush.radius());
                Reaction::None
            }
            Command::Quit => Reaction::Quit,
        }
    }

    /// Build this tick's display buffer: the mask-only view, the processed
    /// result if one is current, or the live paint preview.
    pub fn render_frame(&self, frame: &mut FrameBuffer, phase: &AntsPhase) {
        if self.show_mask {
            compose::render_mask_view(frame, &self.mask);
        } else if let Some(result) = &self.result {
            frame.pixels.copy_from_slice(&result.pixels);
        } else {
            let contours = trace_contours(&self.mask);
            compose::render_preview(
                frame,
                &self.image,
                &self.mask,
                &contours,
                phase,
                self.brush.cursor,
                self.brush.radius(),
            );
        }
    }

    pub fn mode_label(&self) -> &'static str {
        if self.show_mask {
            "MASK"
        } else if self.result.is_some() {
            "RESULT"
        } else {
            "PAINT"
        }
    }
}
