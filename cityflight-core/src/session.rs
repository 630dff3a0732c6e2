use glam::Vec2;

use crate::camera::{CameraDirector, CameraPhase, CameraRig, CompletionFn, DirectorEvent, FollowCam};
use crate::drone::{DroneMotion, DronePose, DroneState, PoseThrottle};
use crate::input::PointerState;
use crate::intro::{IntroCue, IntroTimeline};
use crate::layout::PlacedStructure;
use crate::orbit::{Orbit, OrbitController, Tilt, TiltController};
use crate::proximity::{PointOfInterest, ProximityTrigger};
use crate::scene::SceneConfig;

/// Everything the frame loop samples from the platform before updating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub now: f64,
    pub dt: f32,
    pub pointer: Option<Vec2>,
    pub pressed: bool,
    pub screen: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    DroneRevealed,
    IntroFinished,
    PanelShown(usize),
    PanelHidden,
    Intro(IntroCue),
}

/// One visitor session: the drone, the cameras, the triggers and the overlays.
pub struct Session {
    scene: SceneConfig,
    layout: Vec<PlacedStructure>,
    drone: DroneMotion,
    drone_visible: bool,
    throttle: PoseThrottle,
    pose: DronePose,
    director: CameraDirector,
    rig: CameraRig,
    follow: FollowCam,
    proximity: ProximityTrigger,
    orbit: OrbitController,
    orbit_shown: Orbit,
    tilt: TiltController,
    pointer: PointerState,
    intro: IntroTimeline,
    alive: bool,
}

impl Session {
    pub fn new(scene: SceneConfig, layout: Vec<PlacedStructure>) -> Self {
        let drone = DroneMotion::new(scene.spawn);
        let director = CameraDirector::new(scene.logo_point, scene.spawn);
        let orbit = OrbitController::new();
        Self {
            pose: DronePose::from(drone.state()),
            rig: director.rig(),
            orbit_shown: orbit.displayed(),
            scene,
            layout,
            drone,
            drone_visible: false,
            throttle: PoseThrottle::new(),
            director,
            follow: FollowCam,
            proximity: ProximityTrigger::new(),
            orbit,
            tilt: TiltController::new(),
            pointer: PointerState::new(),
            intro: IntroTimeline::new(),
            alive: true,
        }
    }

    pub fn with_intro_callback(mut self, on_complete: CompletionFn) -> Self {
        self.director.set_completion(on_complete);
        self
    }

    pub fn start(&mut self, now: f64) {
        if !self.alive {
            return;
        }
        self.director.start(now);
        self.rig = self.director.rig();
        self.intro.start(now);
    }

    pub fn update(&mut self, input: &FrameInput) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if !self.alive {
            return events;
        }
        let now = input.now;

        if input.pressed {
            self.pointer.press();
        } else {
            self.pointer.release();
        }
        if let Some(position) = input.pointer {
            self.pointer.moved(now, position, input.screen);
        }

        let controllable = self.director.phase() == CameraPhase::Interactive;
        let thrust = controllable && self.pointer.is_pressed();
        self.drone.update(input.dt, self.pointer.heading(), thrust);

        for event in self.director.update(now) {
            match event {
                DirectorEvent::SubjectRevealed => {
                    self.drone_visible = true;
                    events.push(SessionEvent::DroneRevealed);
                }
                DirectorEvent::IntroFinished => {
                    self.rig = self.director.rig();
                    self.intro.camera_intro_finished(now);
                    events.push(SessionEvent::IntroFinished);
                }
            }
        }

        if self.director.owns_camera() {
            self.rig = self.director.rig();
        } else if controllable {
            self.follow.update(&mut self.rig, self.drone.state().position);
        }

        if let Some(pose) = self.throttle.offer(now, self.drone.state()) {
            self.pose = pose;
        }

        let before = self.proximity.visible();
        let after = self
            .proximity
            .update(now, self.pose.position, &self.scene.points_of_interest);
        if before != after {
            events.push(match after {
                Some(index) => SessionEvent::PanelShown(index),
                None => SessionEvent::PanelHidden,
            });
        }

        self.orbit_shown = self.orbit.update(now, self.pose.heading, self.pose.thrusting);
        self.tilt.update(input.dt, self.pose.heading, self.pose.thrusting);

        events.extend(self.intro.update(now).into_iter().map(SessionEvent::Intro));
        events
    }

    /// Stops every pending deadline and callback. Later updates do nothing.
    pub fn shutdown(&mut self) {
        self.alive = false;
        self.intro.cancel();
        self.proximity.cancel();
        self.director.cancel();
    }

    /// Back to the state before `start`, keeping scene and layout.
    pub fn reset(&mut self) {
        self.drone.reset(self.scene.spawn);
        self.drone_visible = false;
        self.throttle = PoseThrottle::new();
        self.pose = DronePose::from(self.drone.state());
        self.director.reset();
        self.rig = self.director.rig();
        self.proximity = ProximityTrigger::new();
        self.orbit = OrbitController::new();
        self.orbit_shown = self.orbit.displayed();
        self.tilt = TiltController::new();
        self.pointer.reset();
        self.intro = IntroTimeline::new();
        self.alive = true;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn scene(&self) -> &SceneConfig {
        &self.scene
    }

    pub fn layout(&self) -> &[PlacedStructure] {
        &self.layout
    }

    pub fn drone(&self) -> &DroneState {
        self.drone.state()
    }

    pub fn drone_visible(&self) -> bool {
        self.drone_visible
    }

    pub fn pose(&self) -> &DronePose {
        &self.pose
    }

    pub fn camera(&self) -> CameraRig {
        self.rig
    }

    pub fn camera_phase(&self) -> CameraPhase {
        self.director.phase()
    }

    pub fn visible_panel(&self) -> Option<&PointOfInterest> {
        self.proximity
            .visible()
            .and_then(|index| self.scene.points_of_interest.get(index))
    }

    pub fn orbit(&self) -> Orbit {
        self.orbit_shown
    }

    pub fn tilt(&self) -> Tilt {
        self.tilt.current()
    }

    pub fn intro(&self) -> &IntroTimeline {
        &self.intro
    }
}
