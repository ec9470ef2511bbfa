//! cadview Viewport
//!
//! Camera interaction for a CAD kernel's native 3D view embedded in a host
//! GUI window.
//!
//! ## Features
//!
//! - **Turntable orbit**: yaw about world Z with a level horizon
//! - **Trackball orbit**: free rotation delegated to the native view
//! - **Pan / Zoom**: middle-drag pan, right-drag zoom at point, wheel zoom
//! - **Click picking**: left click selects a shape, left drag never does
//! - **TOML settings**: orbit mode, rotation speed, zoom step, drag threshold
//!
//! ## Architecture
//!
//! ```text
//! Host GUI event → Viewport → CameraController → View / SelectionContext
//!                                              ↘ ObjectSelected signal
//! ```
//!
//! The native viewer is reached only through the [`View`], [`Camera`] and
//! [`SelectionContext`] traits, so hosts plug in their own kernel binding.

pub mod config;
pub mod error;
pub mod transform;
pub mod view;
pub mod viewport;
pub mod window;

pub use config::{ConfigError, ConfigResult, ViewportConfig};
pub use error::{BackendError, ViewResult, ViewportError};
pub use transform::{AxisRotation, WORLD_UP};
pub use view::{Camera, SelectionContext, View};
pub use viewport::{
    CameraController,
    MouseButton,
    MouseButtons,
    ObjectSelected,
    OrbitCamera,
    OrbitMode,
    PointerTrack,
    ScreenPoint,
    Viewport,
};
pub use window::{NativeWindow, Platform, PlatformWindowProvider, WindowProvider};

pub use cadview_event::{Priority, SubscriberId};
pub use glam;
