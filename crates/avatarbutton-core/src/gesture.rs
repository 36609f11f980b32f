//! Toolkit-independent single-tap recognition.
//!
//! Each tap region gets its own [`TapRecognizer`]. A [`TapDispatcher`] plays the
//! part of the host toolkit: it hands each pointer sequence to the topmost
//! region under the initial press and calls back once per recognized tap.

use crate::regions::{RegionRole, TapRegion, TapRegions};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Movement (in logical units) after which a press becomes a drag, not a tap.
pub const TOUCH_SLOP: f64 = 8.0;

/// Identifies one finger or mouse button across a press sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub u64);

/// Pointer event in button-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { pointer: PointerId, position: Point },
    Move { pointer: PointerId, position: Point },
    Up { pointer: PointerId, position: Point },
    Cancel { pointer: PointerId },
}

impl PointerEvent {
    pub fn pointer(&self) -> PointerId {
        match *self {
            PointerEvent::Down { pointer, .. }
            | PointerEvent::Move { pointer, .. }
            | PointerEvent::Up { pointer, .. }
            | PointerEvent::Cancel { pointer } => pointer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TapState {
    Idle,
    Pressed { pointer: PointerId, origin: Point },
}

/// Recognizes a discrete tap inside one region: press and release inside the
/// region, without moving further than [`TOUCH_SLOP`] in between.
#[derive(Debug, Clone)]
pub struct TapRecognizer {
    region: TapRegion,
    state: TapState,
}

impl TapRecognizer {
    pub fn new(region: TapRegion) -> Self {
        Self {
            region,
            state: TapState::Idle,
        }
    }

    pub fn region(&self) -> &TapRegion {
        &self.region
    }

    /// Whether a press is currently being tracked.
    pub fn is_pressed(&self) -> bool {
        matches!(self.state, TapState::Pressed { .. })
    }

    /// Abandon any press in progress.
    pub fn reset(&mut self) {
        self.state = TapState::Idle;
    }

    /// Feed one event. Returns `true` when it completes a tap.
    pub fn handle(&mut self, event: &PointerEvent) -> bool {
        match (*event, self.state) {
            (PointerEvent::Down { pointer, position }, TapState::Idle) => {
                if self.region.contains(position) {
                    self.state = TapState::Pressed { pointer, origin: position };
                }
                false
            }
            (PointerEvent::Move { pointer, position }, TapState::Pressed { pointer: tracked, origin }) => {
                if pointer == tracked && (position - origin).hypot() > TOUCH_SLOP {
                    self.state = TapState::Idle;
                }
                false
            }
            (PointerEvent::Up { pointer, position }, TapState::Pressed { pointer: tracked, origin }) => {
                if pointer != tracked {
                    return false;
                }
                self.state = TapState::Idle;
                self.region.contains(position) && (position - origin).hypot() <= TOUCH_SLOP
            }
            (PointerEvent::Cancel { pointer }, TapState::Pressed { pointer: tracked, .. }) => {
                if pointer == tracked {
                    self.state = TapState::Idle;
                }
                false
            }
            _ => false,
        }
    }
}

/// Routes pointer events to the per-region recognizers and invokes the
/// matching callback once per recognized tap.
///
/// A second pointer going down while one is held cancels the press: only
/// single-finger taps count.
pub struct TapDispatcher<'a> {
    /// Topmost first.
    recognizers: [TapRecognizer; 2],
    active: Option<usize>,
    /// Pointers currently held down, in press order.
    pointers_down: Vec<PointerId>,
    on_image_click: Box<dyn FnMut() + 'a>,
    on_icon_click: Box<dyn FnMut() + 'a>,
}

impl<'a> TapDispatcher<'a> {
    pub fn new(
        regions: &TapRegions,
        on_image_click: impl FnMut() + 'a,
        on_icon_click: impl FnMut() + 'a,
    ) -> Self {
        let [top, bottom] = regions.topmost_first();
        Self {
            recognizers: [TapRecognizer::new(top), TapRecognizer::new(bottom)],
            active: None,
            pointers_down: Vec::new(),
            on_image_click: Box::new(on_image_click),
            on_icon_click: Box::new(on_icon_click),
        }
    }

    /// Feed one event; returns the role whose callback was invoked, if any.
    pub fn handle(&mut self, event: PointerEvent) -> Option<RegionRole> {
        match event {
            PointerEvent::Down { pointer, position } => {
                if !self.pointers_down.contains(&pointer) {
                    self.pointers_down.push(pointer);
                }
                if self.pointers_down.len() > 1 {
                    self.cancel_active();
                    return None;
                }
                if let Some(index) = self.active.take() {
                    self.recognizers[index].reset();
                }
                self.active = self
                    .recognizers
                    .iter()
                    .position(|r| r.region().contains(position));
                if let Some(index) = self.active {
                    self.recognizers[index].handle(&event);
                }
                None
            }
            PointerEvent::Move { .. } => {
                if let Some(index) = self.active {
                    self.recognizers[index].handle(&event);
                    if !self.recognizers[index].is_pressed() {
                        self.active = None;
                    }
                }
                None
            }
            PointerEvent::Up { pointer, .. } | PointerEvent::Cancel { pointer } => {
                self.pointers_down.retain(|&down| down != pointer);
                let index = self.active?;
                let completed = self.recognizers[index].handle(&event);
                // A release from some other pointer leaves the press in progress.
                if self.recognizers[index].is_pressed() {
                    return None;
                }
                self.active = None;
                if !completed {
                    return None;
                }
                let role = self.recognizers[index].region().role;
                self.invoke(role);
                Some(role)
            }
        }
    }

    fn cancel_active(&mut self) {
        if let Some(index) = self.active.take() {
            self.recognizers[index].reset();
            log::debug!("Tap cancelled by a second pointer");
        }
    }

    fn invoke(&mut self, role: RegionRole) {
        log::debug!("Tap recognized on {:?} region", role);
        match role {
            RegionRole::Primary => (self.on_image_click)(),
            RegionRole::Secondary => (self.on_icon_click)(),
        }
    }
}
