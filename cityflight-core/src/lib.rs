pub mod assets;
pub mod camera;
pub mod drone;
pub mod error;
pub mod input;
pub mod intro;
pub mod layout;
pub mod orbit;
pub mod proximity;
pub mod rng;
pub mod scene;
pub mod session;
pub mod timers;

pub use assets::{AssetStatus, BakedLayout, LayoutInputs, Source};
pub use camera::{
    CameraDirector, CameraPhase, CameraRig, CompletionFn, DirectorEvent, FollowCam, ease_in_out,
};
pub use drone::{DroneMotion, DronePose, DroneState, PoseThrottle};
pub use error::SceneError;
pub use input::{InputMode, PointerState, heading_from_pointer};
pub use intro::{IntroCue, IntroTimeline};
pub use layout::{
    ExclusionZone, KeepClear, LayoutRules, PlacedStructure, RegionSpec, StructurePart, WaterArea,
    generate, generate_city, generate_region,
};
pub use orbit::{Orbit, OrbitController, Tilt, TiltController, orbit_for_heading};
pub use proximity::{PointOfInterest, ProximityTrigger};
pub use rng::Lcg;
pub use scene::{Landmark, LandmarkKind, SceneConfig};
pub use session::{FrameInput, Session, SessionEvent};
pub use timers::TimerTable;

pub use glam;
