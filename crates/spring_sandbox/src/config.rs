//! Scene files
//!
//! A scene is a TOML file describing the physics world, the interaction
//! components placed in it and a scripted input timeline.
//!
//! # Example
//!
//! ```toml
//! steps = 300
//!
//! [grab]
//! force = 20.0
//!
//! [viewpoint]
//! yaw = 0.0
//!
//! [[objects]]
//! name = "crate"
//! kind = "grabbable"
//! position = { x = 0.0, y = 1.5, z = -3.0 }
//!
//! [[timeline]]
//! step = 10
//! press = ["grab"]
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use spring_core::{InputAction, Tag};
use spring_debug::DebugSettings;
use spring_hud::{Crosshair, Localiser};
use spring_interact::{DoorConfig, GrabConfig, ResolverConfig, SecurityCameraConfig};
use spring_math::{Angles, Vec3};
use spring_physics::SimConfig;
use thiserror::Error;

/// Scene loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse scene: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid scene: {0}")]
    Invalid(String),

    #[error(transparent)]
    Core(#[from] spring_core::Error),

    #[error(transparent)]
    Physics(#[from] spring_physics::PhysicsError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// What an object does besides being a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    #[default]
    Plain,
    Grabbable,
    Door,
    Camera,
}

/// Hinge limits, degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HingeSpec {
    pub min_angle: f32,
    pub max_angle: f32,
}

impl Default for HingeSpec {
    fn default() -> Self {
        Self {
            min_angle: -90.0,
            max_angle: 90.0,
        }
    }
}

/// One object in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectSpec {
    pub name: String,
    pub kind: ObjectKind,
    pub position: Vec3,
    /// Yaw of the rest pose, degrees
    pub yaw: f32,
    pub half_extents: Vec3,
    #[serde(rename = "static")]
    pub is_static: bool,
    pub angular_damping: f32,
    pub tags: Vec<String>,
    /// Grabbables only
    pub resettable: bool,
    pub hinge: HingeSpec,
    pub door: DoorConfig,
    pub camera: SecurityCameraConfig,
}

impl Default for ObjectSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: ObjectKind::Plain,
            position: Vec3::ZERO,
            yaw: 0.0,
            half_extents: Vec3::splat(0.5),
            is_static: false,
            angular_damping: 0.0,
            tags: Vec::new(),
            resettable: true,
            hinge: HingeSpec::default(),
            door: DoorConfig::default(),
            camera: SecurityCameraConfig::default(),
        }
    }
}

impl ObjectSpec {
    /// Parsed tags
    pub fn tags(&self) -> Result<Vec<Tag>> {
        self.tags
            .iter()
            .map(|t| t.parse::<Tag>().map_err(ConfigError::from))
            .collect()
    }
}

/// Where the actor stands and looks at the start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewpointSpec {
    pub position: Vec3,
    pub eye_height: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl Default for ViewpointSpec {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            eye_height: 1.5,
            pitch: 0.0,
            yaw: 0.0,
        }
    }
}

impl ViewpointSpec {
    pub fn angles(&self) -> Angles {
        Angles::new(self.pitch, self.yaw, 0.0)
    }
}

/// Scripted input for one physics step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    pub step: u64,
    /// Action names pressed on this step
    pub press: Vec<String>,
    /// New look yaw, degrees
    pub yaw: Option<f32>,
    /// New look pitch, degrees
    pub pitch: Option<f32>,
    /// Object the actor now stands on, empty for none
    pub ground: Option<String>,
}

impl TimelineEntry {
    /// Pressed actions. Unknown names are skipped with a warning.
    pub fn actions(&self) -> Vec<InputAction> {
        self.press
            .iter()
            .filter_map(|name| match name.parse::<InputAction>() {
                Ok(action) => Some(action),
                Err(e) => {
                    log::warn!("Step {}: {e}, ignoring", self.step);
                    None
                }
            })
            .collect()
    }
}

/// A hotkey toggle over named targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TogglerSpec {
    pub hotkey: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Camera object names, or "crosshair"
    pub targets: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

/// A complete scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    /// Physics steps to run unless overridden on the command line
    pub steps: u64,
    /// Physics step length, seconds
    pub step_seconds: f32,
    pub sim: SimConfig,
    pub resolver: ResolverConfig,
    pub grab: GrabConfig,
    pub debug: DebugSettings,
    pub crosshair: Crosshair,
    pub strings: Localiser,
    pub viewpoint: ViewpointSpec,
    pub objects: Vec<ObjectSpec>,
    pub togglers: Vec<TogglerSpec>,
    pub timeline: Vec<TimelineEntry>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            steps: 100,
            step_seconds: spring_core::FixedClock::DEFAULT_STEP,
            sim: SimConfig::default(),
            resolver: ResolverConfig::default(),
            grab: GrabConfig::default(),
            debug: DebugSettings::default(),
            crosshair: Crosshair::default(),
            strings: Localiser::default(),
            viewpoint: ViewpointSpec::default(),
            objects: Vec::new(),
            togglers: Vec::new(),
            timeline: Vec::new(),
        }
    }
}

impl Scene {
    /// Read and validate a scene file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::parse(&text)?;
        log::info!(
            "Loaded scene {} ({} objects, {} timeline entries)",
            path.display(),
            scene.objects.len(),
            scene.timeline.len()
        );
        Ok(scene)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let scene: Self = toml::from_str(text)?;
        scene.validate()?;
        Ok(scene)
    }

    fn validate(&self) -> Result<()> {
        if self.step_seconds.is_nan() || self.step_seconds <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "step_seconds must be positive, got {}",
                self.step_seconds
            )));
        }

        let mut names = HashSet::new();
        for object in &self.objects {
            if object.name.is_empty() {
                return Err(ConfigError::Invalid("object without a name".into()));
            }
            if !names.insert(object.name.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate object {:?}", object.name)));
            }
            if object.hinge.min_angle > object.hinge.max_angle {
                return Err(ConfigError::Invalid(format!(
                    "object {:?}: hinge min_angle above max_angle",
                    object.name
                )));
            }
            if object.is_static && object.kind != ObjectKind::Plain {
                return Err(ConfigError::Invalid(format!(
                    "object {:?}: a {:?} cannot be static",
                    object.name, object.kind
                )));
            }
            object.tags()?;
        }

        for toggler in &self.togglers {
            toggler.hotkey.parse::<InputAction>()?;
            for target in &toggler.targets {
                let is_camera = self
                    .objects
                    .iter()
                    .any(|o| &o.name == target && o.kind == ObjectKind::Camera);
                if target != "crosshair" && !is_camera {
                    return Err(ConfigError::Invalid(format!("unknown toggle target {target:?}")));
                }
            }
        }

        for entry in &self.timeline {
            if let Some(ground) = entry.ground.as_deref().filter(|g| !g.is_empty()) {
                if !names.contains(ground) {
                    return Err(ConfigError::Invalid(format!(
                        "step {}: unknown ground object {ground:?}",
                        entry.step
                    )));
                }
            }
        }

        Ok(())
    }
}
