//! Colours shared by the baked preview and the live renderer.

pub type Rgb = [u8; 3];

pub const GROUND: Rgb = [34, 36, 40];
pub const WATER: Rgb = [28, 58, 84];
pub const DRONE_BODY: Rgb = [255, 179, 68];
pub const DRONE_FRAME: Rgb = [18, 18, 20];
pub const PANEL_BACKGROUND: Rgb = [16, 16, 18];

const STRUCTURE_LOW: Rgb = [58, 60, 66];
const STRUCTURE_HIGH: Rgb = [150, 146, 138];
const STRUCTURE_MAX_HEIGHT: f32 = 2.0;

fn mix(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| -> u8 { (x as f32 + (y as f32 - x as f32) * t).round() as u8 };
    [
        channel(a[0], b[0]),
        channel(a[1], b[1]),
        channel(a[2], b[2]),
    ]
}

/// Filler buildings get lighter with height so the skyline reads from above.
pub fn structure_tint(height: f32) -> Rgb {
    mix(STRUCTURE_LOW, STRUCTURE_HIGH, height / STRUCTURE_MAX_HEIGHT)
}

pub fn shade(color: Rgb, brightness: f32) -> Rgb {
    let adjust = |channel: u8| -> u8 { (channel as f32 * brightness).clamp(0.0, 255.0).round() as u8 };
    [adjust(color[0]), adjust(color[1]), adjust(color[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taller_structures_are_lighter() {
        let low = structure_tint(0.2);
        let high = structure_tint(1.6);
        assert!(high[0] > low[0] && high[1] > low[1] && high[2] > low[2]);
        assert_eq!(structure_tint(10.0), STRUCTURE_HIGH);
        assert_eq!(structure_tint(-1.0), STRUCTURE_LOW);
    }

    #[test]
    fn shade_clamps() {
        assert_eq!(shade([200, 100, 0], 2.0), [255, 200, 0]);
        assert_eq!(shade([200, 100, 10], 0.5), [100, 50, 5]);
    }
}
