use glam::{Quat, Vec3};

use crate::scene::DRONE_SPAWN;

pub const SPEED: f32 = 4.0; // units per second while thrusting
pub const HEADING_SMOOTHING: f32 = 0.15;
pub const ORIENTATION_SLERP: f32 = 0.08;
pub const POSE_INTERVAL_SECS: f64 = 0.1;
const INITIAL_HEADING: Vec3 = Vec3::NEG_Z;
const MIN_HEADING_LENGTH: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroneState {
    pub position: Vec3,
    pub orientation: Quat,
    pub target_heading: Vec3,
    pub smoothed_heading: Vec3,
    pub is_thrusting: bool,
}

impl DroneState {
    pub fn spawned_at(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
            target_heading: INITIAL_HEADING,
            smoothed_heading: INITIAL_HEADING,
            is_thrusting: false,
        }
    }

    /// Maps a point in the model's frame (-Z forward, +Y up) to world space.
    pub fn local_to_world(&self, offset: Vec3) -> Vec3 {
        self.position + self.orientation * offset
    }

    /// Direction the nose currently points, on the ground plane.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }
}

impl Default for DroneState {
    fn default() -> Self {
        Self::spawned_at(DRONE_SPAWN)
    }
}

/// Rotation about +Y that turns the model's -Z toward `direction`, or `None` when the
/// direction has no horizontal component.
pub fn look_rotation(direction: Vec3) -> Option<Quat> {
    let flat = Vec3::new(direction.x, 0.0, direction.z);
    if !flat.is_finite() || flat.length() < MIN_HEADING_LENGTH {
        return None;
    }
    let yaw = (-flat.x).atan2(-flat.z);
    Some(Quat::from_rotation_y(yaw))
}

/// The only writer of the session's drone state.
#[derive(Debug, Clone, Default)]
pub struct DroneMotion {
    state: DroneState,
}

impl DroneMotion {
    pub fn new(spawn: Vec3) -> Self {
        Self {
            state: DroneState::spawned_at(spawn),
        }
    }

    pub fn state(&self) -> &DroneState {
        &self.state
    }

    pub fn update(&mut self, dt: f32, raw_heading: Option<Vec3>, thrust: bool) {
        if let Some(heading) = raw_heading {
            if heading.is_finite() && heading.length() >= MIN_HEADING_LENGTH {
                self.state.target_heading = heading.normalize();
            }
        }

        let state = &mut self.state;
        state.is_thrusting = thrust;
        state.smoothed_heading = state
            .smoothed_heading
            .lerp(state.target_heading, HEADING_SMOOTHING);

        // A reversal can pass through zero length; hold the orientation for that frame.
        if let Some(target) = look_rotation(state.smoothed_heading) {
            state.orientation = state
                .orientation
                .slerp(target, ORIENTATION_SLERP)
                .normalize();
        }

        if thrust && dt.is_finite() && dt > 0.0 {
            let horizontal = Vec3::new(state.smoothed_heading.x, 0.0, state.smoothed_heading.z);
            state.position += horizontal * SPEED * dt;
        }
    }

    pub fn reset(&mut self, spawn: Vec3) {
        self.state = DroneState::spawned_at(spawn);
    }
}

/// Snapshot handed to readers of the drone (proximity, overlay, JS).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DronePose {
    pub position: Vec3,
    pub orientation: Quat,
    pub heading: Vec3,
    pub thrusting: bool,
}

impl From<&DroneState> for DronePose {
    fn from(state: &DroneState) -> Self {
        Self {
            position: state.position,
            orientation: state.orientation,
            heading: state.target_heading,
            thrusting: state.is_thrusting,
        }
    }
}

/// Rate limits pose publication to `POSE_INTERVAL_SECS`.
#[derive(Debug, Clone, Default)]
pub struct PoseThrottle {
    last_published: Option<f64>,
}

impl PoseThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, now: f64, state: &DroneState) -> Option<DronePose> {
        let due = match self.last_published {
            Some(last) => now - last >= POSE_INTERVAL_SECS,
            None => true,
        };
        if !due {
            return None;
        }
        self.last_published = Some(now);
        Some(DronePose::from(state))
    }
}
