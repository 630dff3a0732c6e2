use glam::{Vec2, Vec3, vec2, vec3};
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::layout::{ExclusionZone, KeepClear, WaterArea};
use crate::proximity::PointOfInterest;

pub const DRONE_SPAWN: Vec3 = vec3(0.0, 0.6, 7.0);
pub const LOGO_POINT: Vec3 = vec3(0.0, 0.1, 6.0);
pub const BUILDING_ONE: &str = "building-1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkKind {
    Building,
    Logo,
    Bridge,
    Boat,
    Plaza,
    Container,
}

/// A named structure in the scene. Its footprint becomes an exclusion zone for the
/// filler layout, its box is what the renderer draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    pub kind: LandmarkKind,
    pub center: Vec2, // ground plane (x, z)
    pub footprint_radius: f32,
    pub size: Vec3,
    pub tint: [u8; 3],
}

impl Landmark {
    pub fn new(
        name: impl Into<String>,
        kind: LandmarkKind,
        center: Vec2,
        footprint_radius: f32,
        size: Vec3,
        tint: [u8; 3],
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            center,
            footprint_radius,
            size,
            tint,
        }
    }

    pub fn exclusion_zone(&self) -> ExclusionZone {
        ExclusionZone::new(self.center, self.footprint_radius)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub spawn: Vec3,
    pub logo_point: Vec3,
    pub water: WaterArea,
    pub landmarks: Vec<Landmark>,
    pub points_of_interest: Vec<PointOfInterest>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spawn: DRONE_SPAWN,
            logo_point: LOGO_POINT,
            water: WaterArea::new(vec2(-8.0, 0.0), 8.4, 24.0),
            landmarks: default_landmarks(),
            points_of_interest: default_points_of_interest(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(raw: &str) -> Result<Self, SceneError> {
        let scene: SceneConfig = serde_json::from_str(raw)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if !self.spawn.is_finite() || !self.logo_point.is_finite() {
            return Err(SceneError::InvalidSpawn);
        }

        let water = &self.water;
        let positive = |extent: f32| extent.is_finite() && extent > 0.0;
        if !water.center.is_finite() || !positive(water.width) || !positive(water.depth) {
            return Err(SceneError::InvalidWater);
        }

        for landmark in &self.landmarks {
            if !(landmark.footprint_radius > 0.0) || !landmark.center.is_finite() {
                return Err(SceneError::InvalidZone {
                    name: landmark.name.clone(),
                });
            }
        }

        for poi in &self.points_of_interest {
            let delays_ok = poi.show_delay_secs >= 0.0 && poi.hide_delay_secs >= 0.0;
            if !(poi.trigger_radius > 0.0) || !delays_ok || !poi.position.is_finite() {
                return Err(SceneError::InvalidPointOfInterest { id: poi.id.clone() });
            }
        }

        Ok(())
    }

    /// Exclusion zones in landmark order. Built once per scene and never mutated.
    pub fn exclusion_zones(&self) -> Vec<ExclusionZone> {
        self.landmarks.iter().map(Landmark::exclusion_zone).collect()
    }

    pub fn landmark(&self, name: &str) -> Option<&Landmark> {
        self.landmarks.iter().find(|landmark| landmark.name == name)
    }

    /// Keep-clear points for the filler layout, following this scene's logo, spawn and
    /// building one rather than the built-in positions.
    pub fn keep_clear(&self) -> KeepClear {
        KeepClear {
            logo: vec2(self.logo_point.x, self.logo_point.z),
            spawn: vec2(self.spawn.x, self.spawn.z),
            building_one: self.landmark(BUILDING_ONE).map(|landmark| landmark.center),
        }
    }
}

const GOLD: [u8; 3] = [204, 138, 42];
const DARK: [u8; 3] = [22, 22, 24];
const ACCENT: [u8; 3] = [255, 179, 68];

fn default_landmarks() -> Vec<Landmark> {
    let mut landmarks = vec![
        Landmark::new(
            BUILDING_ONE,
            LandmarkKind::Building,
            vec2(8.0, 7.0),
            3.0,
            vec3(2.4, 3.2, 2.4),
            GOLD,
        ),
        Landmark::new(
            "building-2",
            LandmarkKind::Building,
            vec2(9.39, -9.2),
            4.0,
            vec3(3.0, 4.2, 3.0),
            GOLD,
        ),
        Landmark::new(
            "logo",
            LandmarkKind::Logo,
            vec2(0.0, 6.0),
            2.5,
            vec3(2.0, 0.1, 2.0),
            ACCENT,
        ),
        Landmark::new(
            "harbour-bridge",
            LandmarkKind::Bridge,
            vec2(-8.0, 0.0),
            6.0,
            vec3(9.4, 0.25, 1.2),
            DARK,
        ),
        Landmark::new(
            "boat",
            LandmarkKind::Boat,
            vec2(-8.0, 6.0),
            3.0,
            vec3(1.0, 0.5, 2.6),
            DARK,
        ),
        Landmark::new(
            "plaza",
            LandmarkKind::Plaza,
            vec2(8.0, 7.0),
            3.0,
            vec3(5.0, 0.02, 5.0),
            DARK,
        ),
    ];

    // Container yard: a 3 x 2 grid of stacked boxes.
    for (column, x) in [-2.0f32, 0.0, 2.0].into_iter().enumerate() {
        for (row, z) in [-2.0f32, -0.8].into_iter().enumerate() {
            landmarks.push(Landmark::new(
                format!("container-{column}-{row}"),
                LandmarkKind::Container,
                vec2(x, z),
                1.5,
                vec3(1.6, 0.6, 0.8),
                DARK,
            ));
        }
    }

    landmarks
}

fn default_points_of_interest() -> Vec<PointOfInterest> {
    vec![
        PointOfInterest::new(
            "berlin-tempelhof",
            vec3(0.0, 0.0, 3.0),
            3.0,
        )
        .with_text(
            "Berlin Tempelhof",
            "Das Wohnprojekt",
            "Neubau eines 11-Parteienhauses in Berlin Tempelhof mit moderner Bauweise und \
             nachhaltigen Materialien.",
        ),
        PointOfInterest::new(
            "hamburg-veddel",
            vec3(-7.7, 0.0, -6.0),
            8.0,
        )
        .with_text(
            "Hamburg Veddel",
            "Das Infrastrukturprojekt",
            "Projekt DB-Gleisquerung Veddel in Hamburg mit modernen Brueckenbau-Loesungen.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_is_valid() {
        let scene = SceneConfig::default();
        assert!(scene.validate().is_ok());
        assert_eq!(scene.exclusion_zones().len(), scene.landmarks.len());
        assert_eq!(scene.landmarks.len(), 12);
    }

    #[test]
    fn json_round_trip_preserves_scene() {
        let scene = SceneConfig::default();
        let json = scene.to_json().unwrap();
        let parsed = SceneConfig::from_json(&json).unwrap();
        assert_eq!(parsed, scene);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let parsed = SceneConfig::from_json(r#"{ "spawn": [1.0, 0.6, 2.0] }"#).unwrap();
        assert_eq!(parsed.spawn, vec3(1.0, 0.6, 2.0));
        assert_eq!(parsed.landmarks, SceneConfig::default().landmarks);
    }

    #[test]
    fn rejects_zero_radius_landmark() {
        let mut scene = SceneConfig::default();
        scene.landmarks[0].footprint_radius = 0.0;
        assert_eq!(
            scene.validate(),
            Err(SceneError::InvalidZone {
                name: "building-1".to_string()
            })
        );
    }

    #[test]
    fn rejects_negative_hide_delay() {
        let mut scene = SceneConfig::default();
        scene.points_of_interest[1].hide_delay_secs = -1.0;
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidPointOfInterest { .. })
        ));
    }

    #[test]
    fn rejects_degenerate_water() {
        let mut scene = SceneConfig::default();
        scene.water.width = -2.0;
        assert_eq!(scene.validate(), Err(SceneError::InvalidWater));

        let mut scene = SceneConfig::default();
        scene.water.center.x = f32::NAN;
        assert_eq!(scene.validate(), Err(SceneError::InvalidWater));

        let mut scene = SceneConfig::default();
        scene.water.depth = f32::INFINITY;
        assert_eq!(scene.validate(), Err(SceneError::InvalidWater));
    }

    #[test]
    fn keep_clear_follows_the_scene() {
        let default = SceneConfig::default();
        assert_eq!(default.keep_clear(), KeepClear::default());

        let mut scene = SceneConfig::default();
        scene.spawn = vec3(3.0, 0.6, -12.0);
        scene.landmarks.retain(|landmark| landmark.name != BUILDING_ONE);
        let keep_clear = scene.keep_clear();
        assert_eq!(keep_clear.spawn, vec2(3.0, -12.0));
        assert_eq!(keep_clear.building_one, None);
        assert!(scene.landmark(BUILDING_ONE).is_none());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SceneConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
        assert!(err.to_string().starts_with("scene description is not valid json"));
    }
}
