use glam::Vec3;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SHOW_DELAY_SECS: f64 = 0.0;
pub const DEFAULT_HIDE_DELAY_SECS: f64 = 10.0;

/// A project location with the info panel it opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    pub position: Vec3,
    pub trigger_radius: f32,
    #[serde(default = "default_show_delay")]
    pub show_delay_secs: f64,
    #[serde(default = "default_hide_delay")]
    pub hide_delay_secs: f64,
}

fn default_show_delay() -> f64 {
    DEFAULT_SHOW_DELAY_SECS
}

fn default_hide_delay() -> f64 {
    DEFAULT_HIDE_DELAY_SECS
}

impl PointOfInterest {
    pub fn new(id: impl Into<String>, position: Vec3, trigger_radius: f32) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            subtitle: String::new(),
            description: String::new(),
            position,
            trigger_radius,
            show_delay_secs: DEFAULT_SHOW_DELAY_SECS,
            hide_delay_secs: DEFAULT_HIDE_DELAY_SECS,
        }
    }

    pub fn with_text(
        mut self,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.title = title.into();
        self.subtitle = subtitle.into();
        self.description = description.into();
        self
    }

    pub fn with_delays(mut self, show_delay_secs: f64, hide_delay_secs: f64) -> Self {
        self.show_delay_secs = show_delay_secs;
        self.hide_delay_secs = hide_delay_secs;
        self
    }

    pub fn contains(&self, position: Vec3) -> bool {
        self.position.distance(position) < self.trigger_radius
    }
}

/// Index of the first point whose radius contains `position`. Earlier entries win overlaps.
pub fn first_in_range(position: Vec3, points: &[PointOfInterest]) -> Option<usize> {
    points.iter().position(|poi| poi.contains(position))
}

/// Shows one info panel at a time, with separate enter and leave delays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProximityTrigger {
    visible: Option<usize>,
    entering: Option<(usize, f64)>,
    hide_at: Option<f64>,
}

impl ProximityTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> Option<usize> {
        self.visible
    }

    pub fn hide_deadline(&self) -> Option<f64> {
        self.hide_at
    }

    /// Advances the trigger and returns the index of the visible panel, if any.
    pub fn update(&mut self, now: f64, position: Vec3, points: &[PointOfInterest]) -> Option<usize> {
        if !position.is_finite() {
            return self.visible;
        }

        match first_in_range(position, points) {
            Some(index) => {
                self.hide_at = None;
                if self.visible == Some(index) {
                    self.entering = None;
                    return self.visible;
                }

                let since = match self.entering {
                    Some((pending, since)) if pending == index => since,
                    _ => {
                        self.entering = Some((index, now));
                        now
                    }
                };

                if now - since >= points[index].show_delay_secs {
                    self.visible = Some(index);
                    self.entering = None;
                }
            }
            None => {
                self.entering = None;
                if let Some(index) = self.visible {
                    let deadline = *self.hide_at.get_or_insert_with(|| {
                        let delay = points
                            .get(index)
                            .map_or(DEFAULT_HIDE_DELAY_SECS, |poi| poi.hide_delay_secs);
                        now + delay
                    });
                    if now >= deadline {
                        self.visible = None;
                        self.hide_at = None;
                    }
                }
            }
        }

        self.visible
    }

    /// Drops every pending show or hide deadline.
    pub fn cancel(&mut self) {
        self.entering = None;
        self.hide_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    const FRAME: f64 = 1.0 / 60.0;

    fn points() -> Vec<PointOfInterest> {
        vec![
            PointOfInterest::new("tempelhof", vec3(0.0, 0.0, 3.0), 3.0),
            PointOfInterest::new("veddel", vec3(-7.7, 0.0, -6.0), 8.0),
        ]
    }

    #[test]
    fn shows_within_one_frame_of_entering() {
        let points = points();
        let mut trigger = ProximityTrigger::new();
        assert_eq!(trigger.update(0.0, vec3(0.0, 0.6, 7.0), &points), None);
        assert_eq!(trigger.update(FRAME, vec3(0.0, 0.6, 4.0), &points), Some(0));
    }

    #[test]
    fn stays_visible_for_hide_delay_after_leaving() {
        let points = points();
        let mut trigger = ProximityTrigger::new();
        trigger.update(0.0, vec3(0.0, 0.6, 3.0), &points);

        let outside = vec3(6.0, 0.6, 8.0);
        assert_eq!(trigger.update(1.0, outside, &points), Some(0));
        assert_eq!(trigger.hide_deadline(), Some(11.0));
        assert_eq!(trigger.update(10.9, outside, &points), Some(0));
        assert_eq!(trigger.update(11.0, outside, &points), None);
        assert_eq!(trigger.hide_deadline(), None);
    }

    #[test]
    fn hide_deadline_is_not_rearmed_each_frame() {
        let points = points();
        let mut trigger = ProximityTrigger::new();
        trigger.update(0.0, vec3(0.0, 0.6, 3.0), &points);
        let outside = vec3(6.0, 0.6, 8.0);
        trigger.update(1.0, outside, &points);
        trigger.update(5.0, outside, &points);
        assert_eq!(trigger.hide_deadline(), Some(11.0));
    }

    #[test]
    fn reentering_cancels_pending_hide() {
        let points = points();
        let mut trigger = ProximityTrigger::new();
        trigger.update(0.0, vec3(0.0, 0.6, 3.0), &points);
        trigger.update(1.0, vec3(6.0, 0.6, 8.0), &points);
        assert!(trigger.hide_deadline().is_some());

        assert_eq!(trigger.update(2.0, vec3(0.5, 0.6, 3.0), &points), Some(0));
        assert_eq!(trigger.hide_deadline(), None);
        assert_eq!(trigger.update(12.0, vec3(0.5, 0.6, 3.0), &points), Some(0));
    }

    #[test]
    fn first_match_wins_over_nearest() {
        let points = vec![
            PointOfInterest::new("wide", vec3(0.0, 0.0, 0.0), 10.0),
            PointOfInterest::new("close", vec3(1.0, 0.0, 0.0), 2.0),
        ];
        assert_eq!(first_in_range(vec3(1.0, 0.0, 0.0), &points), Some(0));
    }

    #[test]
    fn distance_is_three_dimensional() {
        let points = points();
        // Directly above Tempelhof but higher than its radius.
        assert_eq!(first_in_range(vec3(0.0, 3.5, 3.0), &points), None);
        assert_eq!(first_in_range(vec3(0.0, 2.5, 3.0), &points), Some(0));
    }

    #[test]
    fn show_delay_defers_visibility() {
        let points = vec![PointOfInterest::new("slow", Vec3::ZERO, 2.0).with_delays(0.5, 1.0)];
        let mut trigger = ProximityTrigger::new();
        assert_eq!(trigger.update(0.0, Vec3::ZERO, &points), None);
        assert_eq!(trigger.update(0.3, Vec3::ZERO, &points), None);
        assert_eq!(trigger.update(0.5, Vec3::ZERO, &points), Some(0));
    }

    #[test]
    fn cancel_clears_deadlines() {
        let points = points();
        let mut trigger = ProximityTrigger::new();
        trigger.update(0.0, vec3(0.0, 0.6, 3.0), &points);
        trigger.update(1.0, vec3(6.0, 0.6, 8.0), &points);
        trigger.cancel();
        assert_eq!(trigger.hide_deadline(), None);
    }

    #[test]
    fn non_finite_position_keeps_state() {
        let points = points();
        let mut trigger = ProximityTrigger::new();
        trigger.update(0.0, vec3(0.0, 0.6, 3.0), &points);
        assert_eq!(trigger.update(1.0, Vec3::NAN, &points), Some(0));
    }
}
