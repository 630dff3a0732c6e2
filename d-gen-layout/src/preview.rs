use cityflight_core::glam::Vec2;
use cityflight_core::layout::{MAP_HALF_EXTENT, PlacedStructure};
use cityflight_core::scene::SceneConfig;
use image::{Rgba, RgbaImage};

use crate::palette::{self, Rgb};

pub const PIXELS_PER_UNIT: u32 = 24;
const MARGIN_UNITS: f32 = 2.0;

fn rgba(color: Rgb) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], 255])
}

/// Maps ground-plane coordinates to image pixels, +X right and +Z down.
#[derive(Clone, Copy, Debug)]
struct Projection {
    half_extent: f32,
    pixels_per_unit: f32,
}

impl Projection {
    fn size_px(&self) -> u32 {
        (self.half_extent * 2.0 * self.pixels_per_unit).round() as u32
    }

    fn to_pixel(&self, point: Vec2) -> (f32, f32) {
        (
            (point.x + self.half_extent) * self.pixels_per_unit,
            (point.y + self.half_extent) * self.pixels_per_unit,
        )
    }
}

fn fill_rect(image: &mut RgbaImage, min: (f32, f32), max: (f32, f32), color: Rgba<u8>) {
    let (width, height) = image.dimensions();
    let x0 = min.0.max(0.0).floor() as u32;
    let y0 = min.1.max(0.0).floor() as u32;
    let x1 = (max.0.ceil().max(0.0) as u32).min(width);
    let y1 = (max.1.ceil().max(0.0) as u32).min(height);
    for y in y0..y1 {
        for x in x0..x1 {
            image.put_pixel(x, y, color);
        }
    }
}

fn fill_footprint(image: &mut RgbaImage, projection: &Projection, center: Vec2, size: Vec2, color: Rgb) {
    let half = size / 2.0;
    let min = projection.to_pixel(center - half);
    let max = projection.to_pixel(center + half);
    fill_rect(image, min, max, rgba(color));
}

/// Top-down picture of the scene: water, landmarks, then filler buildings shaded by height.
pub fn build_preview_image(scene: &SceneConfig, structures: &[PlacedStructure]) -> RgbaImage {
    let projection = Projection {
        half_extent: MAP_HALF_EXTENT + MARGIN_UNITS,
        pixels_per_unit: PIXELS_PER_UNIT as f32,
    };
    let size = projection.size_px();
    let mut image = RgbaImage::from_pixel(size, size, rgba(palette::GROUND));

    let water = scene.water;
    fill_footprint(
        &mut image,
        &projection,
        water.center,
        Vec2::new(water.width, water.depth),
        palette::WATER,
    );

    for landmark in &scene.landmarks {
        fill_footprint(
            &mut image,
            &projection,
            landmark.center,
            Vec2::new(landmark.size.x, landmark.size.z),
            landmark.tint,
        );
    }

    for structure in structures {
        for part in &structure.parts {
            fill_footprint(
                &mut image,
                &projection,
                structure.origin + part.offset,
                Vec2::new(part.width, part.depth),
                palette::structure_tint(part.height),
            );
        }
    }

    image
}
