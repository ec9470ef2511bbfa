//! Orbit conventions for left-drag rotation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ViewportError;

/// How a left-button drag rotates the camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrbitMode {
    /// Yaw about the world Z axis and pitch about the view X axis,
    /// keeping the horizon level
    #[default]
    Turntable,
    /// Free rotation computed by the native view from raw pointer positions
    Trackball,
}

impl OrbitMode {
    pub fn name(&self) -> &'static str {
        match self {
            OrbitMode::Turntable => "Turntable",
            OrbitMode::Trackball => "Trackball",
        }
    }

    pub fn all() -> &'static [OrbitMode] {
        &[OrbitMode::Turntable, OrbitMode::Trackball]
    }
}

impl FromStr for OrbitMode {
    type Err = ViewportError;

    /// Names are matched exactly, including case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrbitMode::all()
            .iter()
            .copied()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| ViewportError::InvalidOrbitMethod(s.to_string()))
    }
}

impl fmt::Display for OrbitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
