//! Collaborator interfaces for the native 3D viewer.
//!
//! The controller never renders or hit-tests by itself. It drives a
//! [`View`] (camera primitives) and a [`SelectionContext`] (picking), both
//! owned by the embedding host and implemented over the CAD kernel's
//! native viewer. Every primitive returns a [`ViewResult`] so backend
//! failures surface unchanged to the caller.

use glam::DVec3;

use crate::error::ViewResult;
use crate::transform::AxisRotation;
use crate::window::NativeWindow;

/// Camera owned by a native view.
pub trait Camera {
    /// Point the camera orbits around
    fn center(&self) -> DVec3;

    /// Apply a rigid rotation to the camera in place
    fn transform(&mut self, rotation: &AxisRotation) -> ViewResult<()>;
}

/// Native 3D view with camera navigation primitives.
///
/// Pixel coordinates are widget-local with Y growing downwards.
pub trait View {
    type Camera: Camera;

    /// Set the camera up direction
    fn set_up(&mut self, up: DVec3) -> ViewResult<()>;

    /// Scale the view by `factor` (< 1 zooms out)
    fn set_zoom(&mut self, factor: f64) -> ViewResult<()>;

    /// Begin a free trackball rotation anchored at a pixel
    fn start_rotation(&mut self, x: i32, y: i32) -> ViewResult<()>;

    /// Continue the trackball rotation started by `start_rotation`
    fn rotation(&mut self, x: i32, y: i32) -> ViewResult<()>;

    /// Rotate relative to the view axes, angles in radians
    fn rotate(&mut self, ax: f64, ay: f64, az: f64) -> ViewResult<()>;

    /// Translate the view by a pixel delta. Y grows upwards here.
    fn pan(&mut self, dx: i32, dy: i32, to_start: bool) -> ViewResult<()>;

    fn start_zoom_at_point(&mut self, x: i32, y: i32) -> ViewResult<()>;

    fn zoom_at_point(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> ViewResult<()>;

    fn camera(&mut self) -> &mut Self::Camera;

    fn redraw(&mut self) -> ViewResult<()>;

    /// Notify the view that its window changed size
    fn must_be_resized(&mut self) -> ViewResult<()>;

    /// Bind the view to the native window it renders into
    fn set_window(&mut self, window: NativeWindow) -> ViewResult<()>;
}

/// Interactive selection over the shapes displayed in a view.
pub trait SelectionContext {
    /// Handle identifying a displayed shape
    type Shape: Clone;

    /// Hit-test the pixel and highlight whatever lies under it
    fn move_to<V: View>(&mut self, x: i32, y: i32, view: &mut V, update: bool) -> ViewResult<()>;

    /// Promote the highlighted object to the selection
    fn select(&mut self, update: bool) -> ViewResult<()>;

    /// Rewind the selection iterator
    fn init_selected(&mut self) -> ViewResult<()>;

    fn has_selected_shape(&mut self) -> ViewResult<bool>;

    fn selected_shape(&mut self) -> ViewResult<Self::Shape>;
}
