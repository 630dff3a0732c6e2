use glam::{Vec3, vec3};

pub const LOGO_HOLD_SECS: f64 = 2.0;
pub const FLY_TO_SUBJECT_SECS: f64 = 4.0;
pub const LOGO_VIEW_HEIGHT: f32 = 8.0;
// Keeps the top-down look-at away from the degenerate straight-down case.
const LOGO_VIEW_NUDGE: Vec3 = vec3(0.0, 0.0, 0.01);
// The intro ends exactly where the follow cam sits, so the hand-over does not move the camera.
pub const CHASE_OFFSET: Vec3 = vec3(0.0, 7.0, 12.0);
pub const CHASE_LOOK_OFFSET: Vec3 = vec3(0.0, 1.0, 0.0);
pub const FOLLOW_LERP: f32 = 0.05;

pub type CompletionFn = Box<dyn FnMut()>;

/// The one camera transform of the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraRig {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    pub fn lerp(&self, other: &CameraRig, t: f32) -> CameraRig {
        CameraRig {
            position: self.position.lerp(other.position, t),
            target: self.target.lerp(other.target, t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CameraPhase {
    Idle,
    LogoHold,
    FlyToSubject,
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorEvent {
    /// The logo hold is over and the drone should become visible.
    SubjectRevealed,
    IntroFinished,
}

pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

pub fn logo_rig(logo: Vec3) -> CameraRig {
    CameraRig::new(logo + Vec3::Y * LOGO_VIEW_HEIGHT + LOGO_VIEW_NUDGE, logo)
}

pub fn terminal_rig(spawn: Vec3) -> CameraRig {
    CameraRig::new(spawn + CHASE_OFFSET, spawn + CHASE_LOOK_OFFSET)
}

/// Runs the intro camera: logo hold, flight to the drone, then hands over.
pub struct CameraDirector {
    phase: CameraPhase,
    phase_started: f64,
    from: CameraRig,
    to: CameraRig,
    rig: CameraRig,
    on_complete: Option<CompletionFn>,
    cancelled: bool,
}

impl CameraDirector {
    pub fn new(logo: Vec3, spawn: Vec3) -> Self {
        let from = logo_rig(logo);
        Self {
            phase: CameraPhase::Idle,
            phase_started: 0.0,
            from,
            to: terminal_rig(spawn),
            rig: from,
            on_complete: None,
            cancelled: false,
        }
    }

    pub fn with_completion(mut self, on_complete: CompletionFn) -> Self {
        self.set_completion(on_complete);
        self
    }

    pub fn set_completion(&mut self, on_complete: CompletionFn) {
        self.on_complete = Some(on_complete);
    }

    pub fn phase(&self) -> CameraPhase {
        self.phase
    }

    pub fn rig(&self) -> CameraRig {
        self.rig
    }

    pub fn owns_camera(&self) -> bool {
        matches!(self.phase, CameraPhase::LogoHold | CameraPhase::FlyToSubject)
    }

    pub fn start(&mut self, now: f64) {
        if self.phase != CameraPhase::Idle {
            return;
        }
        self.phase = CameraPhase::LogoHold;
        self.phase_started = now;
        self.rig = self.from;
    }

    pub fn update(&mut self, now: f64) -> Vec<DirectorEvent> {
        let mut events = Vec::new();
        let elapsed = now - self.phase_started;

        match self.phase {
            CameraPhase::Idle | CameraPhase::Interactive => {}
            CameraPhase::LogoHold => {
                self.rig = self.from;
                if elapsed >= LOGO_HOLD_SECS {
                    self.phase = CameraPhase::FlyToSubject;
                    self.phase_started = now;
                    events.push(DirectorEvent::SubjectRevealed);
                }
            }
            CameraPhase::FlyToSubject => {
                let progress = (elapsed / FLY_TO_SUBJECT_SECS) as f32;
                if progress >= 1.0 {
                    self.rig = self.to;
                    self.phase = CameraPhase::Interactive;
                    events.push(DirectorEvent::IntroFinished);
                    if let Some(on_complete) = self.on_complete.as_mut() {
                        if !self.cancelled {
                            on_complete();
                        }
                    }
                } else {
                    self.rig = self.from.lerp(&self.to, ease_in_out(progress));
                }
            }
        }

        events
    }

    /// Silences the completion callback until the next reset; the rig keeps its last value.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Back to `Idle`. The completion callback stays registered for the next run.
    pub fn reset(&mut self) {
        self.cancelled = false;
        self.phase = CameraPhase::Idle;
        self.phase_started = 0.0;
        self.rig = self.from;
    }
}

/// Chase camera used once the intro has handed over.
#[derive(Debug, Clone, Copy, Default)]
pub struct FollowCam;

impl FollowCam {
    pub fn update(&self, rig: &mut CameraRig, drone_position: Vec3) {
        if !drone_position.is_finite() {
            return;
        }
        rig.position = rig.position.lerp(drone_position + CHASE_OFFSET, FOLLOW_LERP);
        rig.target = drone_position + CHASE_LOOK_OFFSET;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{DRONE_SPAWN, LOGO_POINT};
    use std::cell::Cell;
    use std::rc::Rc;

    fn director() -> CameraDirector {
        CameraDirector::new(LOGO_POINT, DRONE_SPAWN)
    }

    #[test]
    fn ease_is_symmetric_and_clamped() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(-3.0), 0.0);
        assert_eq!(ease_in_out(7.0), 1.0);
        assert!((ease_in_out(0.25) + ease_in_out(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn start_looks_down_on_logo() {
        let mut director = director();
        director.start(0.0);
        assert_eq!(director.phase(), CameraPhase::LogoHold);
        assert!(director.owns_camera());
        let rig = director.rig();
        assert_eq!(rig.target, LOGO_POINT);
        assert!((rig.position.y - (LOGO_POINT.y + LOGO_VIEW_HEIGHT)).abs() < 1e-6);
    }

    #[test]
    fn logo_hold_then_reveal() {
        let mut director = director();
        director.start(10.0);
        assert!(director.update(11.9).is_empty());
        assert_eq!(director.update(12.0), vec![DirectorEvent::SubjectRevealed]);
        assert_eq!(director.phase(), CameraPhase::FlyToSubject);
    }

    #[test]
    fn fly_midpoint_is_exact_lerp_midpoint() {
        let mut director = director();
        director.start(0.0);
        director.update(LOGO_HOLD_SECS);
        director.update(LOGO_HOLD_SECS + FLY_TO_SUBJECT_SECS / 2.0);

        let expected = logo_rig(LOGO_POINT).lerp(&terminal_rig(DRONE_SPAWN), 0.5);
        let rig = director.rig();
        assert!(rig.position.distance(expected.position) < 1e-5);
        assert!(rig.target.distance(expected.target) < 1e-5);
    }

    #[test]
    fn flight_ends_exactly_on_terminal_rig_and_calls_back_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut director = director().with_completion(Box::new(move || {
            counter.set(counter.get() + 1);
        }));

        director.start(0.0);
        director.update(2.0);
        assert_eq!(director.update(6.5), vec![DirectorEvent::IntroFinished]);
        assert!(director.update(7.0).is_empty());
        assert_eq!(calls.get(), 1);
        assert_eq!(director.rig(), terminal_rig(DRONE_SPAWN));
        assert_eq!(director.phase(), CameraPhase::Interactive);
        assert!(!director.owns_camera());
    }

    #[test]
    fn phases_only_move_forward() {
        let mut director = director();
        director.start(0.0);
        let mut last = director.phase();
        for frame in 0..600 {
            director.update(frame as f64 / 60.0);
            assert!(director.phase() >= last);
            last = director.phase();
        }
        assert_eq!(last, CameraPhase::Interactive);
        director.start(20.0);
        assert_eq!(director.phase(), CameraPhase::Interactive);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut director = director();
        director.start(0.0);
        director.update(2.0);
        director.reset();
        assert_eq!(director.phase(), CameraPhase::Idle);
        assert!(director.update(100.0).is_empty());
    }

    #[test]
    fn cancelled_director_keeps_last_rig_and_skips_callback() {
        let called = Rc::new(Cell::new(false));
        let flag = Rc::clone(&called);
        let mut director = director().with_completion(Box::new(move || flag.set(true)));
        director.start(0.0);
        director.update(2.0);
        director.update(3.0);
        let mid_flight = director.rig();
        director.cancel();
        assert_eq!(director.rig(), mid_flight);
        director.update(10.0);
        assert!(!called.get());
    }

    #[test]
    fn follow_cam_eases_behind_drone() {
        let mut rig = terminal_rig(DRONE_SPAWN);
        let drone = DRONE_SPAWN + vec3(4.0, 0.0, 0.0);
        let start = rig.position;
        FollowCam.update(&mut rig, drone);
        let goal = drone + CHASE_OFFSET;
        let expected = start.lerp(goal, FOLLOW_LERP);
        assert!(rig.position.distance(expected) < 1e-5);
        assert_eq!(rig.target, drone + CHASE_LOOK_OFFSET);

        for _ in 0..400 {
            FollowCam.update(&mut rig, drone);
        }
        assert!(rig.position.distance(goal) < 1e-3);
    }

    #[test]
    fn follow_cam_leaves_the_terminal_rig_alone_for_a_parked_drone() {
        let mut rig = terminal_rig(DRONE_SPAWN);
        let before = rig;
        FollowCam.update(&mut rig, DRONE_SPAWN);
        assert!(rig.position.distance(before.position) < 1e-6);
        assert!(rig.target.distance(before.target) < 1e-6);
    }

    #[test]
    fn callback_fires_again_after_reset() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut director = director().with_completion(Box::new(move || {
            counter.set(counter.get() + 1);
        }));

        for run in 0..2 {
            let t0 = run as f64 * 100.0;
            director.start(t0);
            director.update(t0 + LOGO_HOLD_SECS);
            director.update(t0 + LOGO_HOLD_SECS + FLY_TO_SUBJECT_SECS);
            director.update(t0 + 50.0);
            director.reset();
        }
        assert_eq!(calls.get(), 2);

        director.start(500.0);
        director.cancel();
        director.update(500.0 + LOGO_HOLD_SECS);
        director.update(500.0 + LOGO_HOLD_SECS + FLY_TO_SUBJECT_SECS);
        assert_eq!(calls.get(), 2);
        director.reset();
        director.start(600.0);
        director.update(600.0 + LOGO_HOLD_SECS);
        director.update(600.0 + LOGO_HOLD_SECS + FLY_TO_SUBJECT_SECS);
        assert_eq!(calls.get(), 3);
    }
}
