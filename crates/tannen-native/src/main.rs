//! Headless driver: wires a scripted landmark source into a session and
//! steps the scene at a fixed render cadence, logging mode transitions.
//! Stands in for the webcam-driven frontend when developing the core.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use glam::{Vec2, Vec3};
use instant::Instant;

use tannen_core::{
    AppStore, Camera, FrameSource, HandFrame, HandLandmarker, Mode, PhotoId, Scene, Session,
    SessionError, SourceRef, ANCHOR_KNUCKLE, FINGER_PIPS, FINGER_TIPS, INDEX_TIP, LANDMARK_COUNT,
    THUMB_TIP,
};

const RENDER_DT: f32 = 1.0 / 60.0;
const SIM_SECONDS: f32 = 8.0;

/// One scripted "video frame": which hand shape the fake model should see.
#[derive(Clone, Copy, Debug)]
enum Phase {
    Fist,
    OpenPalm,
    /// Pinch with the hand held at this position (both axes in [-1,1]).
    PinchAt(Vec2),
}

/// Frame source fed by the main loop through a shared queue, mimicking a
/// camera that only has a new frame when one was captured.
struct ScriptFeed {
    queue: Rc<RefCell<VecDeque<(Phase, f64)>>>,
    started: bool,
}

impl FrameSource for ScriptFeed {
    type Frame = Phase;

    fn start(&mut self) -> Result<(), SessionError> {
        self.started = true;
        Ok(())
    }

    fn next_frame(&mut self) -> Option<(Phase, f64)> {
        if !self.started {
            return None;
        }
        self.queue.borrow_mut().pop_front()
    }

    fn stop(&mut self) {
        self.started = false;
        self.queue.borrow_mut().clear();
    }
}

/// Fake landmark model: synthesizes a plausible 21-point frame per phase.
struct PhaseLandmarker;

impl HandLandmarker<Phase> for PhaseLandmarker {
    fn detect(&mut self, frame: &Phase, _timestamp_ms: f64) -> Option<HandFrame> {
        Some(match frame {
            Phase::Fist => synth_frame(true, false, Vec2::ZERO),
            Phase::OpenPalm => synth_frame(false, false, Vec2::ZERO),
            Phase::PinchAt(hand) => synth_frame(false, true, *hand),
        })
    }

    fn close(&mut self) {}
}

/// Build a synthetic landmark frame. `folded` folds all four fingertips
/// below their PIP joints; `pinch` moves the thumb tip onto the index tip;
/// `hand` places the anchor knuckle so the classifier reports that position.
fn synth_frame(folded: bool, pinch: bool, hand: Vec2) -> HandFrame {
    let mut points = [Vec3::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
    let tip_y = if folded { 0.7 } else { 0.3 };
    for (tip, pip) in FINGER_TIPS.iter().zip(FINGER_PIPS.iter()) {
        points[*tip] = Vec3::new(0.5, tip_y, 0.0);
        points[*pip] = Vec3::new(0.5, 0.5, 0.0);
    }
    if folded {
        // A closed hand cannot also read as a pinch-at-distance; park the
        // thumb away from the index tip.
        points[THUMB_TIP] = Vec3::new(0.2, 0.6, 0.0);
    } else if pinch {
        // Pinch without an open palm: fold two fingers so neither the fist
        // nor the palm predicate fires.
        points[FINGER_TIPS[2]] = Vec3::new(0.5, 0.7, 0.0);
        points[FINGER_TIPS[3]] = Vec3::new(0.5, 0.7, 0.0);
        points[THUMB_TIP] = points[INDEX_TIP];
    } else {
        points[THUMB_TIP] = Vec3::new(0.2, 0.5, 0.0);
    }
    // Invert the classifier's mirror mapping: hx = (lx - 0.5) * -2.
    points[ANCHOR_KNUCKLE] = Vec3::new(0.5 - hand.x * 0.5, 0.5 - hand.y * 0.5, 0.0);
    HandFrame::new(points)
}

fn scripted_phase(sim_time: f32, dismissed: bool, pick_target: Option<Vec2>) -> Phase {
    if sim_time < 1.0 {
        Phase::Fist
    } else if sim_time < 3.0 {
        Phase::OpenPalm
    } else if dismissed {
        // Keep pinching, but far from every photo so focus is not re-entered.
        Phase::PinchAt(Vec2::splat(2.0))
    } else {
        Phase::PinchAt(pick_target.unwrap_or(Vec2::ZERO))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut store = AppStore::new(7);
    let mut scene = Scene::new(42);
    let camera = Camera::facing_origin(Vec3::new(0.0, 0.0, 10.0), 16.0 / 9.0);

    let photo_ids: Vec<PhotoId> = (0..3)
        .map(|i| store.add_photo(SourceRef(format!("demo://photo/{i}"))))
        .collect();
    log::info!("registered {} photos", photo_ids.len());

    let queue = Rc::new(RefCell::new(VecDeque::new()));
    let feed = ScriptFeed {
        queue: Rc::clone(&queue),
        started: false,
    };
    let mut session = Session::new(feed, PhaseLandmarker);
    session.start(&mut store)?;

    let wall = Instant::now();
    let steps = (SIM_SECONDS / RENDER_DT) as u32;
    let mut elapsed = 0.0f32;
    let mut last_mode = store.mode;
    let mut dismissed = false;

    for step in 0..steps {
        elapsed += RENDER_DT;

        // Inference runs at half the render cadence, one frame per tick.
        if step % 2 == 0 {
            let spin = glam::Quat::from_rotation_y(scene.group_yaw());
            let pick_target = scene
                .photo_pose(photo_ids[0])
                .and_then(|pose| camera.project_ndc(spin * pose.position));
            let phase = scripted_phase(elapsed, dismissed, pick_target);
            queue
                .borrow_mut()
                .push_back((phase, f64::from(elapsed) * 1000.0));
            session.tick(&mut store);
        }

        scene.step(&mut store, &camera, RENDER_DT, elapsed);

        if store.mode != last_mode {
            log::info!(
                "t={elapsed:.2}s mode {:?} -> {:?} (focus: {:?})",
                last_mode,
                store.mode,
                store.focused()
            );
            last_mode = store.mode;
        }

        // Hold the focused photo for a moment, then dismiss it once.
        if store.mode == Mode::Focus && !dismissed && elapsed > 6.0 {
            store.dismiss_focus();
            dismissed = true;
            log::info!("t={elapsed:.2}s focus dismissed");
        }
    }

    session.shutdown(&mut store);
    log::info!(
        "simulated {SIM_SECONDS}s ({} frames) in {:?}; final mode {:?}, yaw {:.3}",
        steps,
        wall.elapsed(),
        store.mode,
        scene.group_yaw()
    );
    Ok(())
}
