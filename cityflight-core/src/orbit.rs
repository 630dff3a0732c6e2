//! Presentation angles for the drone overlay viewer.
//!
//! The overlay shows the drone model in its own small viewport. Its orbit is driven by the
//! drone heading alone and never touches the scene camera.

use glam::Vec3;

pub const NEUTRAL_ORBIT: Orbit = Orbit {
    azimuth_deg: 0.0,
    polar_deg: 75.0,
};
pub const ANIMATE_THRESHOLD_DEG: f32 = 1.0;
pub const ORBIT_ANIMATION_SECS: f64 = 0.6;
pub const TILT_TIME_CONSTANT_SECS: f32 = 0.1;
const FLYING_TILT: f32 = 1.0;
const IDLE_TILT: f32 = 0.4;
const PITCH_PER_UNIT: f32 = 20.0;
const ROLL_PER_UNIT: f32 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub azimuth_deg: f32,
    pub polar_deg: f32,
}

impl Orbit {
    pub fn new(azimuth_deg: f32, polar_deg: f32) -> Self {
        Self {
            azimuth_deg: wrap_degrees(azimuth_deg),
            polar_deg,
        }
    }

    /// Largest per-axis change to reach `other`, azimuth along the shorter arc.
    pub fn distance_to(&self, other: &Orbit) -> f32 {
        shortest_arc(self.azimuth_deg, other.azimuth_deg)
            .abs()
            .max((other.polar_deg - self.polar_deg).abs())
    }

    fn interpolate(&self, other: &Orbit, t: f32) -> Orbit {
        Orbit::new(
            self.azimuth_deg + shortest_arc(self.azimuth_deg, other.azimuth_deg) * t,
            self.polar_deg + (other.polar_deg - self.polar_deg) * t,
        )
    }
}

/// Wraps into `[0, 360)`.
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Signed change in `(-180, 180]` that turns `from` into `to`.
pub fn shortest_arc(from: f32, to: f32) -> f32 {
    let delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Orbit for a heading on the ground plane. North (`-Z`) maps to azimuth 0 once the model's
/// backwards-facing export is corrected by half a turn.
pub fn orbit_for_heading(heading: Vec3) -> Orbit {
    let bearing = heading.x.atan2(heading.z).to_degrees();
    let polar = ((45.0 - 2.0 * heading.z) * 10.0).round() / 10.0;
    Orbit::new(bearing + 180.0, polar)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct OrbitAnimation {
    from: Orbit,
    to: Orbit,
    started: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitController {
    displayed: Orbit,
    target: Orbit,
    animation: Option<OrbitAnimation>,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self {
            displayed: NEUTRAL_ORBIT,
            target: NEUTRAL_ORBIT,
            animation: None,
        }
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displayed(&self) -> Orbit {
        self.displayed
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn update(&mut self, now: f64, heading: Vec3, thrusting: bool) -> Orbit {
        let target = if thrusting && heading.is_finite() && heading.length_squared() > 0.0 {
            orbit_for_heading(heading)
        } else if thrusting {
            self.target
        } else {
            NEUTRAL_ORBIT
        };

        if self.target.distance_to(&target) > ANIMATE_THRESHOLD_DEG {
            self.animation = Some(OrbitAnimation {
                from: self.displayed,
                to: target,
                started: now,
            });
        } else {
            match self.animation.as_mut() {
                Some(animation) => animation.to = target,
                None => self.displayed = target,
            }
        }
        self.target = target;

        if let Some(animation) = self.animation {
            let t = ((now - animation.started) / ORBIT_ANIMATION_SECS) as f32;
            if t >= 1.0 {
                self.displayed = animation.to;
                self.animation = None;
            } else {
                self.displayed = animation.from.interpolate(&animation.to, ease_out_cubic(t));
            }
        }

        self.displayed
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    pub pitch_deg: f32,
    pub roll_deg: f32,
}

pub fn tilt_target(heading: Vec3, thrusting: bool) -> Tilt {
    if !heading.is_finite() {
        return Tilt::default();
    }
    let k = if thrusting { FLYING_TILT } else { IDLE_TILT };
    Tilt {
        pitch_deg: -heading.z * PITCH_PER_UNIT * k,
        roll_deg: heading.x * ROLL_PER_UNIT * k,
    }
}

/// Leans the overlay model toward the pointer, eased with a short time constant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltController {
    current: Tilt,
}

impl TiltController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Tilt {
        self.current
    }

    pub fn update(&mut self, dt: f32, heading: Vec3, thrusting: bool) -> Tilt {
        let target = tilt_target(heading, thrusting);
        let alpha = if dt > 0.0 {
            1.0 - (-dt / TILT_TIME_CONSTANT_SECS).exp()
        } else {
            0.0
        };
        self.current.pitch_deg += (target.pitch_deg - self.current.pitch_deg) * alpha;
        self.current.roll_deg += (target.roll_deg - self.current.roll_deg) * alpha;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    #[test]
    fn north_heading_has_zero_azimuth() {
        let orbit = orbit_for_heading(vec3(0.0, 0.0, -1.0));
        assert_eq!(orbit.azimuth_deg, 0.0);
        assert_eq!(orbit.polar_deg, 47.0);
    }

    #[test]
    fn azimuth_is_normalized() {
        for heading in [Vec3::X, Vec3::NEG_X, Vec3::Z, vec3(0.6, 0.0, 0.8)] {
            let orbit = orbit_for_heading(heading);
            assert!((0.0..360.0).contains(&orbit.azimuth_deg), "{orbit:?}");
        }
        assert!((orbit_for_heading(Vec3::Z).azimuth_deg - 180.0).abs() < 1e-4);
    }

    #[test]
    fn polar_rounds_to_tenths() {
        let orbit = orbit_for_heading(vec3(0.6, 0.0, 0.8).normalize());
        assert!((orbit.polar_deg - 43.4).abs() < 1e-4);
    }

    #[test]
    fn shortest_arc_wraps() {
        assert_eq!(shortest_arc(350.0, 10.0), 20.0);
        assert_eq!(shortest_arc(10.0, 350.0), -20.0);
        assert_eq!(shortest_arc(0.0, 180.0), 180.0);
    }

    #[test]
    fn idle_relaxes_to_neutral() {
        let mut controller = OrbitController::new();
        assert_eq!(controller.update(0.0, Vec3::X, false), NEUTRAL_ORBIT);
        assert!(!controller.is_animating());
    }

    #[test]
    fn large_change_animates_with_ease_out() {
        let mut controller = OrbitController::new();
        controller.update(0.0, Vec3::X, true);
        assert!(controller.is_animating());

        let target = orbit_for_heading(Vec3::X);
        let halfway = controller.update(0.3, Vec3::X, true);
        let expected = NEUTRAL_ORBIT.interpolate(&target, ease_out_cubic(0.5));
        assert!((halfway.polar_deg - expected.polar_deg).abs() < 1e-3);
        assert!(halfway.polar_deg > 45.0 && halfway.polar_deg < 75.0);

        assert_eq!(controller.update(0.6, Vec3::X, true), target);
        assert!(!controller.is_animating());
    }

    #[test]
    fn small_change_applies_immediately() {
        let mut controller = OrbitController::new();
        controller.update(0.0, Vec3::NEG_Z, true);
        controller.update(1.0, Vec3::NEG_Z, true);
        let nudged = vec3(0.01, 0.0, -1.0).normalize();
        let shown = controller.update(1.016, nudged, true);
        assert!(!controller.is_animating());
        assert_eq!(shown, orbit_for_heading(nudged));
    }

    #[test]
    fn animation_takes_the_short_way_round() {
        let mut controller = OrbitController::new();
        let left = vec3(-0.17, 0.0, -0.98).normalize();
        let right = vec3(0.17, 0.0, -0.98).normalize();
        controller.update(0.0, left, true);
        controller.update(1.0, left, true);
        controller.update(2.0, right, true);
        let mid = controller.update(2.1, right, true);
        // Between ~350 and ~10 through north, never through south.
        assert!(mid.azimuth_deg > 340.0 || mid.azimuth_deg < 20.0, "{mid:?}");
    }

    #[test]
    fn tilt_targets_follow_pointer() {
        let flying = tilt_target(vec3(1.0, 0.0, -1.0), true);
        assert_eq!(flying.roll_deg, 25.0);
        assert_eq!(flying.pitch_deg, 20.0);
        let idle = tilt_target(vec3(1.0, 0.0, 0.0), false);
        assert!((idle.roll_deg - 10.0).abs() < 1e-5);
    }

    #[test]
    fn tilt_eases_toward_target() {
        let mut tilt = TiltController::new();
        let first = tilt.update(0.1, Vec3::X, true);
        assert!(first.roll_deg > 15.0 && first.roll_deg < 16.5);
        for _ in 0..60 {
            tilt.update(1.0 / 60.0, Vec3::X, true);
        }
        assert!((tilt.current().roll_deg - 25.0).abs() < 0.01);
    }
}
