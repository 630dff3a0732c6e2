use glam::{Vec2, Vec3};

pub const POINTER_SCALE: f32 = 0.01;
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
pub const POINTER_THROTTLE_SECS: f64 = 0.016;

/// Heading on the ground plane from a pointer position: screen right is +X, screen down is +Z.
pub fn heading_from_pointer(pointer: Vec2, screen: Vec2) -> Option<Vec3> {
    let center = screen / 2.0;
    let offset = (pointer - center) * POINTER_SCALE;
    let heading = Vec3::new(offset.x, 0.0, offset.y);
    heading.try_normalize()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Mouse,
    Touch,
}

impl InputMode {
    pub fn select(viewport_width: f32, touch_capable: bool) -> Self {
        if viewport_width < MOBILE_BREAKPOINT_PX || touch_capable {
            InputMode::Touch
        } else {
            InputMode::Mouse
        }
    }
}

/// Pointer press state and the last accepted heading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerState {
    pressed: bool,
    heading: Option<Vec3>,
    last_accepted: Option<f64>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn heading(&self) -> Option<Vec3> {
        self.heading
    }

    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    /// Records a pointer move unless one was accepted less than the throttle interval ago.
    /// Returns whether the move was taken.
    pub fn moved(&mut self, now: f64, pointer: Vec2, screen: Vec2) -> bool {
        if let Some(last) = self.last_accepted {
            if now - last < POINTER_THROTTLE_SECS {
                return false;
            }
        }
        self.last_accepted = Some(now);
        if let Some(heading) = heading_from_pointer(pointer, screen) {
            self.heading = Some(heading);
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    const SCREEN: Vec2 = vec2(1280.0, 720.0);

    #[test]
    fn right_of_center_points_east() {
        let heading = heading_from_pointer(vec2(1000.0, 360.0), SCREEN).unwrap();
        assert!((heading - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn below_center_points_toward_viewer() {
        let heading = heading_from_pointer(vec2(640.0, 700.0), SCREEN).unwrap();
        assert!((heading - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn exact_center_has_no_heading() {
        assert_eq!(heading_from_pointer(vec2(640.0, 360.0), SCREEN), None);
    }

    #[test]
    fn narrow_or_touch_selects_touch() {
        assert_eq!(InputMode::select(500.0, false), InputMode::Touch);
        assert_eq!(InputMode::select(1280.0, true), InputMode::Touch);
        assert_eq!(InputMode::select(1280.0, false), InputMode::Mouse);
        assert_eq!(InputMode::select(768.0, false), InputMode::Mouse);
    }

    #[test]
    fn moves_are_throttled() {
        let mut pointer = PointerState::new();
        assert!(pointer.moved(0.0, vec2(1000.0, 360.0), SCREEN));
        assert!(!pointer.moved(0.010, vec2(640.0, 0.0), SCREEN));
        assert!((pointer.heading().unwrap() - Vec3::X).length() < 1e-6);
        assert!(pointer.moved(0.020, vec2(640.0, 0.0), SCREEN));
        assert!((pointer.heading().unwrap() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn center_move_keeps_previous_heading() {
        let mut pointer = PointerState::new();
        pointer.moved(0.0, vec2(1000.0, 360.0), SCREEN);
        pointer.moved(1.0, vec2(640.0, 360.0), SCREEN);
        assert!((pointer.heading().unwrap() - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn press_and_release() {
        let mut pointer = PointerState::new();
        pointer.press();
        assert!(pointer.is_pressed());
        pointer.release();
        assert!(!pointer.is_pressed());
    }
}
