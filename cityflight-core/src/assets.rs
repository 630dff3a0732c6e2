use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::layout::{
    ExclusionZone, KeepClear, LayoutRules, PlacedStructure, WaterArea, generate_city,
};
use crate::scene::SceneConfig;

pub const SCENE_ASSET: &str = "assets/scene.json";
pub const LAYOUT_ASSET: &str = "assets/layout.json";
pub const DRONE_SPRITE_ASSET: &str = "assets/drone.png";
pub const LAYOUT_FORMAT_VERSION: u32 = 2;
const INPUT_TOLERANCE: f32 = 1e-4;

/// Outcome of probing an optional asset. There is no retry; callers fall back.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetStatus<T> {
    Loaded(T),
    Unavailable,
}

impl<T> AssetStatus<T> {
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => AssetStatus::Loaded(value),
            Err(_) => AssetStatus::Unavailable,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, AssetStatus::Loaded(_))
    }

    pub fn loaded(self) -> Option<T> {
        match self {
            AssetStatus::Loaded(value) => Some(value),
            AssetStatus::Unavailable => None,
        }
    }
}

/// Everything the filler layout depends on besides the fixed region table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutInputs {
    pub water: WaterArea,
    pub keep_clear: KeepClear,
    pub zones: Vec<ExclusionZone>,
}

impl LayoutInputs {
    pub fn for_scene(scene: &SceneConfig) -> Self {
        Self {
            water: scene.water,
            keep_clear: scene.keep_clear(),
            zones: scene.exclusion_zones(),
        }
    }

    pub fn rules(&self) -> LayoutRules {
        LayoutRules::for_scene(self.water, self.keep_clear)
    }

    pub fn generate(&self) -> Vec<PlacedStructure> {
        generate_city(&self.rules(), &self.zones)
    }

    /// Equal up to the rounding a JSON round trip may introduce.
    pub fn matches(&self, other: &LayoutInputs) -> bool {
        let near = |a: f32, b: f32| (a - b).abs() <= INPUT_TOLERANCE;
        let near_point = |a: Vec2, b: Vec2| a.abs_diff_eq(b, INPUT_TOLERANCE);

        let water = near_point(self.water.center, other.water.center)
            && near(self.water.width, other.water.width)
            && near(self.water.depth, other.water.depth);
        let keep_clear = near_point(self.keep_clear.logo, other.keep_clear.logo)
            && near_point(self.keep_clear.spawn, other.keep_clear.spawn)
            && match (self.keep_clear.building_one, other.keep_clear.building_one) {
                (Some(a), Some(b)) => near_point(a, b),
                (None, None) => true,
                _ => false,
            };
        let zones = self.zones.len() == other.zones.len()
            && self
                .zones
                .iter()
                .zip(&other.zones)
                .all(|(a, b)| near_point(a.center, b.center) && near(a.radius, b.radius));

        water && keep_clear && zones
    }
}

#[derive(Deserialize)]
struct LayoutHeader {
    version: u32,
}

/// Filler layout written by the offline baker, with the inputs it was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BakedLayout {
    pub version: u32,
    pub inputs: LayoutInputs,
    pub structures: Vec<PlacedStructure>,
}

impl BakedLayout {
    pub fn bake(scene: &SceneConfig) -> Self {
        let inputs = LayoutInputs::for_scene(scene);
        Self {
            version: LAYOUT_FORMAT_VERSION,
            structures: inputs.generate(),
            inputs,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, SceneError> {
        let header: LayoutHeader = serde_json::from_str(raw)?;
        if header.version != LAYOUT_FORMAT_VERSION {
            return Err(SceneError::UnsupportedLayoutVersion {
                found: header.version,
            });
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Where the running scene's content came from, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Asset,
    BuiltIn,
}

/// Scene from the optional override text, or the built-in scene with the reason it was rejected.
pub fn resolve_scene(raw: AssetStatus<String>) -> (SceneConfig, Source, Option<SceneError>) {
    match raw {
        AssetStatus::Loaded(text) => match SceneConfig::from_json(&text) {
            Ok(scene) => (scene, Source::Asset, None),
            Err(err) => (SceneConfig::default(), Source::BuiltIn, Some(err)),
        },
        AssetStatus::Unavailable => (SceneConfig::default(), Source::BuiltIn, None),
    }
}

/// Baked layout if present, readable and made for `scene`; otherwise generated at startup.
pub fn resolve_layout(
    raw: AssetStatus<String>,
    scene: &SceneConfig,
) -> (Vec<PlacedStructure>, Source, Option<SceneError>) {
    let expected = LayoutInputs::for_scene(scene);
    let baked = match raw {
        AssetStatus::Loaded(text) => BakedLayout::from_json(&text).and_then(|layout| {
            if layout.inputs.matches(&expected) {
                Ok(layout)
            } else {
                Err(SceneError::StaleLayout)
            }
        }),
        AssetStatus::Unavailable => return (expected.generate(), Source::BuiltIn, None),
    };

    match baked {
        Ok(layout) => (layout.structures, Source::Asset, None),
        Err(err) => (expected.generate(), Source::BuiltIn, Some(err)),
    }
}
