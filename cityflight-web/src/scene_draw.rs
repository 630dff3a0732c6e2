use cityflight_core::glam;
use cityflight_core::layout::MAP_HALF_EXTENT;
use cityflight_core::{CameraRig, LandmarkKind, PlacedStructure, PointOfInterest, SceneConfig};
use d_gen_layout::palette::{self, Rgb};
use macroquad::prelude::*;

const GROUND_MARGIN: f32 = 6.0;
const WATER_LEVEL: f32 = 0.01;
const FIELD_OF_VIEW_DEG: f32 = 50.0;
const EDGE_BRIGHTNESS: f32 = 0.6;
const BEACON_HEIGHT: f32 = 1.6;

pub const SKY_COLOR: Color = Color::from_rgba(12, 13, 16, 255);

pub fn to_vec3(v: glam::Vec3) -> Vec3 {
    vec3(v.x, v.y, v.z)
}

pub fn color_from_rgb(rgb: Rgb) -> Color {
    Color::from_rgba(rgb[0], rgb[1], rgb[2], 255)
}

pub fn scene_camera(rig: &CameraRig) -> Camera3D {
    Camera3D {
        position: to_vec3(rig.position),
        target: to_vec3(rig.target),
        up: vec3(0.0, 1.0, 0.0),
        fovy: FIELD_OF_VIEW_DEG.to_radians(),
        z_near: 0.05,
        z_far: 200.0,
        ..Default::default()
    }
}

/// Box centre for something standing on the ground at `footprint` (x, z) with the given height.
fn standing_at(footprint: glam::Vec2, height: f32) -> Vec3 {
    vec3(footprint.x, height * 0.5, footprint.y)
}

fn draw_block(center: Vec3, size: Vec3, rgb: Rgb) {
    draw_cube(center, size, None, color_from_rgb(rgb));
    draw_cube_wires(center, size, color_from_rgb(palette::shade(rgb, EDGE_BRIGHTNESS)));
}

pub fn draw_ground(scene: &SceneConfig) {
    let extent = MAP_HALF_EXTENT + GROUND_MARGIN;
    draw_plane(
        vec3(0.0, 0.0, 0.0),
        vec2(extent, extent),
        None,
        color_from_rgb(palette::GROUND),
    );

    let water = scene.water;
    draw_plane(
        vec3(water.center.x, WATER_LEVEL, water.center.y),
        vec2(water.width * 0.5, water.depth * 0.5),
        None,
        color_from_rgb(palette::WATER),
    );
}

pub fn draw_landmarks(scene: &SceneConfig) {
    for landmark in &scene.landmarks {
        let size = to_vec3(landmark.size);
        match landmark.kind {
            LandmarkKind::Logo | LandmarkKind::Plaza => {
                // Flat plates lie just above the ground to avoid z-fighting.
                let center = vec3(landmark.center.x, size.y * 0.5 + WATER_LEVEL, landmark.center.y);
                draw_cube(center, size, None, color_from_rgb(landmark.tint));
            }
            LandmarkKind::Bridge => {
                let deck = vec3(size.x, size.y * 0.25, size.z);
                let center = vec3(landmark.center.x, size.y - deck.y * 0.5, landmark.center.y);
                draw_block(center, deck, landmark.tint);
                for side in [-1.0, 1.0] {
                    let pier = vec3(size.x * 0.1, size.y, size.z * 0.1);
                    let pier_center = vec3(
                        landmark.center.x + side * size.x * 0.4,
                        size.y * 0.5,
                        landmark.center.y,
                    );
                    draw_block(pier_center, pier, landmark.tint);
                }
            }
            LandmarkKind::Building | LandmarkKind::Boat | LandmarkKind::Container => {
                draw_block(standing_at(landmark.center, size.y), size, landmark.tint);
            }
        }
    }
}

pub fn draw_structures(structures: &[PlacedStructure]) {
    for structure in structures {
        for part in &structure.parts {
            let footprint = structure.origin + part.offset;
            draw_block(
                standing_at(footprint, part.height),
                vec3(part.width, part.height, part.depth),
                palette::structure_tint(part.height),
            );
        }
    }
}

/// Thin beacons over the points of interest; the active one is highlighted.
pub fn draw_points_of_interest(points: &[PointOfInterest], active: Option<&PointOfInterest>) {
    for point in points {
        let base = vec3(point.position.x, 0.0, point.position.z);
        let is_active = active.is_some_and(|shown| shown.id == point.id);
        let color = if is_active {
            color_from_rgb(palette::DRONE_BODY)
        } else {
            Color::new(1.0, 1.0, 1.0, 0.35)
        };
        draw_line_3d(base, base + vec3(0.0, BEACON_HEIGHT, 0.0), color);
        draw_sphere(base + vec3(0.0, BEACON_HEIGHT, 0.0), 0.06, None, color);
    }
}
