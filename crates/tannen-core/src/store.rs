//! Shared application state and the display-mode state machine.
//!
//! The store is an explicit, injectable container rather than an ambient
//! global. Each field has exactly one writer: the inference tick writes
//! `gesture`, `rotation_target` and gesture-driven mode transitions; the
//! upload flow writes `photos`; focus entry (scene picking) and dismissal
//! write the selection; the session lifecycle writes the readiness flags.
//! Every update is a whole-field replacement consumed once per render tick.

use crate::gesture::GestureSignal;
use crate::photos::{PhotoId, PhotoRegistry, SourceRef};

/// Current display mode. Exactly one active at a time, initially assembled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Assembled,
    Scattered,
    Focus,
}

pub struct AppStore {
    pub mode: Mode,
    pub gesture: GestureSignal,
    pub photos: PhotoRegistry,
    /// Non-`None` only while `mode == Focus`; cleared on every transition away.
    focused: Option<PhotoId>,
    /// Hand x scaled to radians; read by the scene in non-Focus modes.
    pub rotation_target: f32,
    pub camera_ready: bool,
    pub tracker_loading: bool,
}

impl AppStore {
    pub fn new(photo_seed: u64) -> Self {
        Self {
            mode: Mode::default(),
            gesture: GestureSignal::default(),
            photos: PhotoRegistry::new(photo_seed),
            focused: None,
            rotation_target: 0.0,
            camera_ready: false,
            tracker_loading: true,
        }
    }

    pub fn focused(&self) -> Option<PhotoId> {
        self.focused
    }

    /// Apply one fresh gesture signal: replace the snapshot and run the
    /// mode transitions. Fist and open palm are exclusive by construction;
    /// a fist wins from any mode, including Focus (source behavior kept).
    /// An all-false signal leaves the mode sticky.
    pub fn apply_gesture(&mut self, signal: GestureSignal) {
        self.gesture = signal;
        if signal.is_fist {
            self.set_mode(Mode::Assembled);
        } else if signal.is_open_palm {
            self.set_mode(Mode::Scattered);
        }
    }

    /// Enter focus on a picked photo. Only meaningful while scattered; calls
    /// in other modes are ignored so picking can never race a fist override.
    pub fn focus(&mut self, id: PhotoId) {
        if self.mode != Mode::Scattered || self.photos.get(id).is_none() {
            return;
        }
        self.mode = Mode::Focus;
        self.focused = Some(id);
    }

    /// Explicit user dismissal: Focus -> Scattered, selection cleared.
    pub fn dismiss_focus(&mut self) {
        if self.mode == Mode::Focus {
            self.set_mode(Mode::Scattered);
        }
    }

    /// Upload flow entry point.
    pub fn add_photo(&mut self, source: SourceRef) -> PhotoId {
        self.photos.add(source)
    }

    /// Remove a photo, clearing the focus selection first when it points at
    /// the removed record (the registry does not track the selection).
    pub fn remove_photo(&mut self, id: PhotoId) -> bool {
        if self.focused == Some(id) {
            self.dismiss_focus();
        }
        self.photos.remove(id)
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        if mode != Mode::Focus {
            self.focused = None;
        }
        log::debug!("mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }
}
