//! Inference-loop driver and the collaborator boundary.
//!
//! The session owns the camera feed and the landmark model, both injected as
//! traits so the loop is drivable from a webcam, a recording, or a scripted
//! test source. One `tick` consumes at most one frame and runs the model at
//! most once; back-pressure is implicit because the caller requests the next
//! tick only after the previous one returns. Failure degrades to a passive
//! state (readiness flags stay down) with no retry and no crash.

use crate::constants::HAND_ROTATION_SCALE;
use crate::gesture::classify;
use crate::hand::HandFrame;
use crate::store::AppStore;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The user declined camera access; the experience stays static.
    #[error("camera permission denied")]
    CameraDenied,
    /// The landmark model could not be acquired or initialized.
    #[error("hand landmark model unavailable: {0}")]
    ModelUnavailable(String),
}

/// Camera/media provider: yields live frames with monotonically increasing
/// timestamps. `stop` must release every acquired hardware track.
pub trait FrameSource {
    type Frame;

    fn start(&mut self) -> Result<(), SessionError>;
    /// Next available frame plus its timestamp in milliseconds, or `None`
    /// when no new frame is ready this tick.
    fn next_frame(&mut self) -> Option<(Self::Frame, f64)>;
    fn stop(&mut self);
}

/// Landmark model boundary: at most one in-flight detection, invoked once
/// per available frame. `close` releases the held model resource.
pub trait HandLandmarker<F> {
    fn detect(&mut self, frame: &F, timestamp_ms: f64) -> Option<HandFrame>;
    fn close(&mut self);
}

pub struct Session<S, L> {
    source: S,
    landmarker: L,
    running: bool,
    closed: bool,
    last_timestamp_ms: f64,
}

impl<S, L> Session<S, L>
where
    S: FrameSource,
    L: HandLandmarker<S::Frame>,
{
    pub fn new(source: S, landmarker: L) -> Self {
        Self {
            source,
            landmarker,
            running: false,
            closed: false,
            last_timestamp_ms: f64::NEG_INFINITY,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Request camera access and mark the store ready on success.
    ///
    /// On denial the loading indicator clears but `camera_ready` stays
    /// false; on a model failure the loading indicator stays up. Neither is
    /// retried.
    pub fn start(&mut self, store: &mut AppStore) -> Result<(), SessionError> {
        match self.source.start() {
            Ok(()) => {
                self.running = true;
                store.camera_ready = true;
                store.tracker_loading = false;
                log::info!("hand tracking session started");
                Ok(())
            }
            Err(err) => {
                if matches!(err, SessionError::CameraDenied) {
                    store.tracker_loading = false;
                }
                log::warn!("hand tracking unavailable: {err}");
                Err(err)
            }
        }
    }

    /// One inference tick: pull at most one frame, detect at most once,
    /// classify, and apply the result to the store. An absent hand writes
    /// the zero signal; the rotation target only moves while a hand is seen.
    pub fn tick(&mut self, store: &mut AppStore) {
        if !self.running {
            return;
        }
        let Some((frame, timestamp_ms)) = self.source.next_frame() else {
            return;
        };
        // The model requires strictly increasing timestamps.
        if timestamp_ms <= self.last_timestamp_ms {
            return;
        }
        self.last_timestamp_ms = timestamp_ms;

        let hand = self.landmarker.detect(&frame, timestamp_ms);
        let signal = classify(hand.as_ref());
        if hand.is_some() {
            store.rotation_target = signal.hand_pos.x * HAND_ROTATION_SCALE;
        }
        store.apply_gesture(signal);
    }

    /// Halt the loop, release the model and stop every media track.
    /// Idempotent; skipping this leaks a live camera indicator.
    pub fn shutdown(&mut self, store: &mut AppStore) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.running = false;
        self.landmarker.close();
        self.source.stop();
        store.camera_ready = false;
        log::info!("hand tracking session shut down");
    }
}
