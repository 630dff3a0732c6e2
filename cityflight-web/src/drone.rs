use cityflight_core::DroneState;
use cityflight_core::glam;
use d_gen_layout::palette;
use macroquad::prelude::*;

use crate::scene_draw::{color_from_rgb, to_vec3};

#[derive(Debug, Clone)]
pub struct DroneDrawConfig {
    pub body_size: f32,           // width and length of the fuselage box
    pub body_height_ratio: f32,   // fuselage height as a fraction of body_size
    pub arm_reach: f32,           // hub to rotor centre, along the diagonals
    pub rotor_radius_ratio: f32,  // rotor disc radius as a fraction of arm_reach
    pub rotor_height: f32,
    pub nose_length_ratio: f32,   // nose marker length as a fraction of body_size
    pub body_color: Color,
    pub frame_color: Color,
    pub rotor_color: Color,
    pub thrust_color: Color,
}

impl Default for DroneDrawConfig {
    fn default() -> Self {
        Self {
            body_size: 0.22,
            body_height_ratio: 0.4,
            arm_reach: 0.3,
            rotor_radius_ratio: 0.45,
            rotor_height: 0.02,
            nose_length_ratio: 0.9,
            body_color: color_from_rgb(palette::DRONE_BODY),
            frame_color: color_from_rgb(palette::DRONE_FRAME),
            rotor_color: Color::new(0.85, 0.85, 0.9, 0.55),
            thrust_color: Color::new(1.0, 0.7, 0.27, 0.8),
        }
    }
}

/// Rotor hubs in the model frame, front pair first.
pub fn rotor_offsets(config: &DroneDrawConfig) -> [glam::Vec3; 4] {
    let d = config.arm_reach / std::f32::consts::SQRT_2;
    [
        glam::vec3(-d, 0.0, -d),
        glam::vec3(d, 0.0, -d),
        glam::vec3(d, 0.0, d),
        glam::vec3(-d, 0.0, d),
    ]
}

pub fn draw_drone(state: &DroneState, config: &DroneDrawConfig) {
    let center = to_vec3(state.position);
    let body_height = config.body_size * config.body_height_ratio;

    // The fuselage stays axis aligned; arms and nose carry the yaw.
    draw_cube(
        center,
        vec3(config.body_size, body_height, config.body_size),
        None,
        config.body_color,
    );

    for offset in rotor_offsets(config) {
        let hub = to_vec3(state.local_to_world(offset));
        draw_line_3d(center, hub, config.frame_color);
        draw_cylinder(
            hub,
            config.arm_reach * config.rotor_radius_ratio,
            config.arm_reach * config.rotor_radius_ratio,
            config.rotor_height,
            None,
            config.rotor_color,
        );
        if state.is_thrusting {
            draw_sphere(hub - vec3(0.0, 0.05, 0.0), 0.03, None, config.thrust_color);
        }
    }

    let nose = state.local_to_world(glam::vec3(0.0, 0.0, -config.body_size * config.nose_length_ratio));
    draw_line_3d(center, to_vec3(nose), config.frame_color);
    draw_sphere(to_vec3(nose), body_height * 0.35, None, config.frame_color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotors_sit_at_arm_reach() {
        let config = DroneDrawConfig::default();
        for offset in rotor_offsets(&config) {
            assert!((offset.length() - config.arm_reach).abs() < 1e-5);
            assert_eq!(offset.y, 0.0);
        }
    }

    #[test]
    fn front_rotors_follow_the_nose() {
        let config = DroneDrawConfig::default();
        let mut state = DroneState::default();
        state.orientation = glam::Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2);
        let [front_left, front_right, ..] = rotor_offsets(&config);
        // Nose turned east: both front rotors end up east of the hub.
        assert!(state.local_to_world(front_left).x > state.position.x);
        assert!(state.local_to_world(front_right).x > state.position.x);
    }
}
