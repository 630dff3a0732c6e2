use image::{Rgba, RgbaImage};

use crate::palette::{self, Rgb};

pub const SPRITE_SIZE: u32 = 256;
const AA_SAMPLES_PER_AXIS: u32 = 4;
const AA_SAMPLE_COUNT: u32 = AA_SAMPLES_PER_AXIS * AA_SAMPLES_PER_AXIS;

// Shapes are laid out in a unit square centred on the origin, nose toward -y.
const ARM_REACH: f32 = 0.32;
const ROTOR_RADIUS: f32 = 0.14;
const ROTOR_RING: f32 = 0.025;
const BODY_RADIUS: f32 = 0.12;
const ARM_WIDTH: f32 = 0.05;

#[derive(Clone, Copy)]
struct Disc {
    cx: f32,
    cy: f32,
    r: f32,
    ring: Option<f32>,
    color: Rgb,
}

impl Disc {
    fn covers(&self, x: f32, y: f32) -> bool {
        let dist = ((x - self.cx).powi(2) + (y - self.cy).powi(2)).sqrt();
        match self.ring {
            Some(width) => (dist - self.r).abs() <= width * 0.5,
            None => dist <= self.r,
        }
    }
}

#[derive(Clone, Copy)]
struct Segment {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    width: f32,
    color: Rgb,
}

impl Segment {
    fn covers(&self, x: f32, y: f32) -> bool {
        let dx = self.x2 - self.x1;
        let dy = self.y2 - self.y1;
        let len_sq = dx * dx + dy * dy;
        let t = if len_sq == 0.0 {
            0.0
        } else {
            (((x - self.x1) * dx + (y - self.y1) * dy) / len_sq).clamp(0.0, 1.0)
        };
        let px = self.x1 + dx * t;
        let py = self.y1 + dy * t;
        let radius = self.width * 0.5;
        (x - px).powi(2) + (y - py).powi(2) <= radius * radius
    }
}

enum Shape {
    Disc(Disc),
    Segment(Segment),
}

impl Shape {
    fn color_at(&self, x: f32, y: f32) -> Option<Rgb> {
        match self {
            Shape::Disc(disc) => disc.covers(x, y).then_some(disc.color),
            Shape::Segment(segment) => segment.covers(x, y).then_some(segment.color),
        }
    }
}

/// Quad layout: arms on the diagonals, rotor rings at their ends, a body disc and a nose marker.
fn quad_shapes() -> Vec<Shape> {
    let reach = ARM_REACH / std::f32::consts::SQRT_2;
    let corners = [(-reach, -reach), (reach, -reach), (reach, reach), (-reach, reach)];
    let mut shapes = Vec::new();

    for &(x, y) in &corners {
        shapes.push(Shape::Segment(Segment {
            x1: 0.0,
            y1: 0.0,
            x2: x,
            y2: y,
            width: ARM_WIDTH,
            color: palette::DRONE_FRAME,
        }));
    }
    for &(x, y) in &corners {
        shapes.push(Shape::Disc(Disc {
            cx: x,
            cy: y,
            r: ROTOR_RADIUS,
            ring: Some(ROTOR_RING),
            color: palette::DRONE_FRAME,
        }));
    }
    shapes.push(Shape::Disc(Disc {
        cx: 0.0,
        cy: 0.0,
        r: BODY_RADIUS,
        ring: None,
        color: palette::DRONE_BODY,
    }));
    shapes.push(Shape::Segment(Segment {
        x1: 0.0,
        y1: -BODY_RADIUS * 0.2,
        x2: 0.0,
        y2: -BODY_RADIUS * 0.8,
        width: ARM_WIDTH * 0.8,
        color: palette::DRONE_FRAME,
    }));
    shapes
}

fn sample(shapes: &[Shape], x: f32, y: f32) -> Option<Rgb> {
    shapes.iter().rev().find_map(|shape| shape.color_at(x, y))
}

/// Overlay sprite of the drone seen from above, supersampled for smooth edges.
pub fn build_drone_sprite(size: u32) -> RgbaImage {
    let shapes = quad_shapes();
    let mut image = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let samples_per_axis = AA_SAMPLES_PER_AXIS as f32;
    let inv_sample_count = 1.0 / AA_SAMPLE_COUNT as f32;
    let scale = size as f32;

    for y in 0..size {
        for x in 0..size {
            let mut sum = [0.0f32; 4];
            let mut covered = false;

            for sy in 0..AA_SAMPLES_PER_AXIS {
                for sx in 0..AA_SAMPLES_PER_AXIS {
                    let unit_x = (x as f32 + (sx as f32 + 0.5) / samples_per_axis) / scale - 0.5;
                    let unit_y = (y as f32 + (sy as f32 + 0.5) / samples_per_axis) / scale - 0.5;
                    if let Some(color) = sample(&shapes, unit_x, unit_y) {
                        covered = true;
                        sum[0] += color[0] as f32;
                        sum[1] += color[1] as f32;
                        sum[2] += color[2] as f32;
                        sum[3] += 255.0;
                    }
                }
            }

            if covered {
                // Colour is averaged over covered samples only; alpha carries the coverage.
                let covered_share = sum[3] / 255.0;
                image.put_pixel(
                    x,
                    y,
                    Rgba([
                        (sum[0] / covered_share).round() as u8,
                        (sum[1] / covered_share).round() as u8,
                        (sum[2] / covered_share).round() as u8,
                        (sum[3] * inv_sample_count).round() as u8,
                    ]),
                );
            }
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_opaque_and_corners_are_clear() {
        let sprite = build_drone_sprite(64);
        let center = sprite.get_pixel(32, 36);
        assert_eq!(center.0[3], 255);
        assert_eq!(&center.0[..3], &palette::DRONE_BODY);
        assert_eq!(sprite.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn nose_marker_points_up() {
        let sprite = build_drone_sprite(64);
        let nose = sprite.get_pixel(32, 28);
        assert_eq!(nose.0[3], 255);
        assert_eq!(&nose.0[..3], &palette::DRONE_FRAME);
    }
}
