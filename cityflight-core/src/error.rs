use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    Parse(String),
    InvalidZone { name: String },
    InvalidPointOfInterest { id: String },
    InvalidSpawn,
    InvalidWater,
    UnsupportedLayoutVersion { found: u32 },
    StaleLayout,
}

impl SceneError {
    pub fn message(&self) -> &'static str {
        match self {
            SceneError::Parse(_) => "scene description is not valid json",
            SceneError::InvalidZone { .. } => "landmark footprint must have a positive radius",
            SceneError::InvalidPointOfInterest { .. } => {
                "point of interest needs a positive trigger radius and non-negative delays"
            }
            SceneError::InvalidSpawn => "drone spawn must be a finite position",
            SceneError::InvalidWater => "water area needs a finite center and positive extents",
            SceneError::UnsupportedLayoutVersion { .. } => "baked layout has an unsupported version",
            SceneError::StaleLayout => "baked layout was made for a different scene",
        }
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Parse(detail) => write!(f, "{} ({})", self.message(), detail),
            SceneError::InvalidZone { name } => write!(f, "{}: {}", self.message(), name),
            SceneError::InvalidPointOfInterest { id } => write!(f, "{}: {}", self.message(), id),
            SceneError::InvalidSpawn | SceneError::InvalidWater | SceneError::StaleLayout => {
                f.write_str(self.message())
            }
            SceneError::UnsupportedLayoutVersion { found } => {
                write!(f, "{}: {}", self.message(), found)
            }
        }
    }
}

impl Error for SceneError {}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        SceneError::Parse(err.to_string())
    }
}
