//! 3D viewport interaction.

mod camera_controller;
mod orbit;
mod orbit_camera;
mod pointer;
mod widget;

pub use camera_controller::CameraController;
pub use orbit::OrbitMode;
pub use orbit_camera::OrbitCamera;
pub use pointer::{MouseButton, MouseButtons, PointerTrack, ScreenPoint};
pub use widget::{ObjectSelected, Viewport};
