//! Camera controller for viewport navigation.
//!
//! Translates pointer and wheel events into view primitives:
//!
//! | Input                | Turntable                       | Trackball          |
//! |----------------------|---------------------------------|--------------------|
//! | left drag            | yaw about world Z, then pitch   | native rotation    |
//! | middle drag          | pan                             | pan                |
//! | right drag           | zoom at point                   | zoom at point      |
//! | wheel                | zoom                            | zoom               |
//! | left click (no drag) | pick shape                      | pick shape         |

use crate::config::{ConfigResult, ViewportConfig};
use crate::error::ViewResult;
use crate::transform::{AxisRotation, WORLD_UP};
use crate::view::{Camera, SelectionContext, View};

use super::orbit::OrbitMode;
use super::pointer::{MouseButton, MouseButtons, PointerTrack, ScreenPoint};

/// Camera controller handling input for viewport navigation.
///
/// Holds only interaction state. The view and selection context are
/// borrowed for the duration of each handler.
#[derive(Clone, Debug)]
pub struct CameraController {
    orbit_mode: OrbitMode,
    pointer: PointerTrack,
    /// Turntable radians per pixel
    rotate_step: f64,
    /// Wheel zoom factor when scrolling away
    zoom_step: f64,
    /// Pixels a left press may travel and still count as a click
    drag_threshold: i32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            orbit_mode: OrbitMode::default(),
            pointer: PointerTrack::new(),
            rotate_step: ViewportConfig::DEFAULT_ROTATE_STEP,
            zoom_step: ViewportConfig::DEFAULT_ZOOM_STEP,
            drag_threshold: ViewportConfig::DEFAULT_DRAG_THRESHOLD,
        }
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a controller from validated settings. No view call is made,
    /// so the camera up vector is left as the view has it.
    pub fn from_config(config: &ViewportConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            orbit_mode: config.orbit_method,
            pointer: PointerTrack::new(),
            rotate_step: config.rotate_step,
            zoom_step: config.zoom_step,
            drag_threshold: config.drag_threshold,
        })
    }

    pub fn rotate_step(&self) -> f64 {
        self.rotate_step
    }

    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    pub fn drag_threshold(&self) -> i32 {
        self.drag_threshold
    }

    pub fn orbit_mode(&self) -> OrbitMode {
        self.orbit_mode
    }

    pub fn pointer(&self) -> &PointerTrack {
        &self.pointer
    }

    /// Whether a left release right now would pick a shape.
    pub fn pending_selection(&self) -> bool {
        self.pointer.pending_selection
    }

    /// Switch orbit mode by name ("Turntable" or "Trackball").
    ///
    /// Unknown names fail with [`ViewportError::InvalidOrbitMethod`]
    /// before any state or view change.
    ///
    /// [`ViewportError::InvalidOrbitMethod`]: crate::ViewportError::InvalidOrbitMethod
    pub fn set_orbit_method<V: View>(&mut self, view: &mut V, method: &str) -> ViewResult<()> {
        let mode = method.parse::<OrbitMode>().map_err(|e| {
            log::warn!("Rejected orbit method {:?}", method);
            e
        })?;
        self.set_orbit_mode(view, mode)
    }

    /// Switch orbit mode. Turntable resets the view up vector to world Z
    /// every time it is selected; Trackball leaves the view untouched.
    pub fn set_orbit_mode<V: View>(&mut self, view: &mut V, mode: OrbitMode) -> ViewResult<()> {
        log::debug!("Orbit mode {} -> {}", self.orbit_mode, mode);
        self.orbit_mode = mode;
        if mode == OrbitMode::Turntable {
            view.set_up(WORLD_UP)?;
        }
        Ok(())
    }

    /// Zoom factor for a vertical wheel delta.
    pub fn zoom_factor(&self, delta: i32) -> f64 {
        if delta < 0 {
            self.zoom_step
        } else {
            1.0 / self.zoom_step
        }
    }

    /// Handle scroll for zooming.
    pub fn wheel<V: View>(&self, view: &mut V, delta: i32) -> ViewResult<()> {
        let factor = self.zoom_factor(delta);
        log::trace!("Wheel delta {} -> zoom {}", delta, factor);
        view.set_zoom(factor)
    }

    /// Handle a button press.
    pub fn press<V: View>(&mut self, view: &mut V, button: MouseButton, pos: ScreenPoint) -> ViewResult<()> {
        log::trace!("Press {:?} at {:?}", button, pos);
        match button {
            MouseButton::Left => {
                self.pointer.arm(pos);
                // Turntable computes its deltas per move instead
                if self.orbit_mode == OrbitMode::Trackball {
                    view.start_rotation(pos.x, pos.y)?;
                }
            }
            MouseButton::Right => view.start_zoom_at_point(pos.x, pos.y)?,
            MouseButton::Middle | MouseButton::Other(_) => {}
        }
        self.pointer.previous = pos;
        Ok(())
    }

    /// Handle pointer motion with `buttons` held.
    pub fn mouse_move<V: View>(&mut self, view: &mut V, buttons: MouseButtons, pos: ScreenPoint) -> ViewResult<()> {
        let previous = self.pointer.previous;

        match buttons.single() {
            Some(MouseButton::Left) => {
                match self.orbit_mode {
                    OrbitMode::Trackball => view.rotation(pos.x, pos.y)?,
                    OrbitMode::Turntable => self.turntable(view, previous, pos)?,
                }
                if self.pointer.pending_selection && self.pointer.exceeds_threshold(pos, self.drag_threshold) {
                    log::trace!("Drag past threshold at {:?}, click selection cancelled", pos);
                    self.pointer.disarm();
                }
            }
            // Screen Y grows down, view pan Y grows up
            Some(MouseButton::Middle) => view.pan(
                pos.x.saturating_sub(previous.x),
                previous.y.saturating_sub(pos.y),
                true,
            )?,
            // Argument order is the zoom primitive's contract
            Some(MouseButton::Right) => view.zoom_at_point(previous.x, pos.y, pos.x, previous.y)?,
            _ => {}
        }

        self.pointer.previous = pos;
        Ok(())
    }

    /// Yaw about the world Z axis through the camera center, then pitch
    /// about the view X axis. The pitch reads the already yawed camera.
    fn turntable<V: View>(&self, view: &mut V, previous: ScreenPoint, pos: ScreenPoint) -> ViewResult<()> {
        let delta_x = f64::from(pos.x) - f64::from(previous.x);
        let delta_y = f64::from(pos.y) - f64::from(previous.y);

        let camera = view.camera();
        let yaw = AxisRotation::about_world_up(camera.center(), -delta_x * self.rotate_step);
        camera.transform(&yaw)?;

        view.rotate(0.0, -delta_y * self.rotate_step, 0.0)
    }

    /// Handle a button release.
    ///
    /// Returns `Some(shapes)` when a left click resolved into a pick
    /// (`shapes` holds at most one shape, empty if nothing was hit), and
    /// `None` when no pick was attempted.
    pub fn release<V, S>(
        &mut self,
        view: &mut V,
        context: &mut S,
        button: MouseButton,
        pos: ScreenPoint,
    ) -> ViewResult<Option<Vec<S::Shape>>>
    where
        V: View,
        S: SelectionContext,
    {
        log::trace!("Release {:?} at {:?}", button, pos);
        self.pointer.previous = pos;

        if button != MouseButton::Left || !self.pointer.take_pending() {
            return Ok(None);
        }

        context.move_to(pos.x, pos.y, view, true)?;
        let shapes = Self::resolve_selection(context)?;
        log::debug!("Click at {:?} selected {} shape(s)", pos, shapes.len());
        Ok(Some(shapes))
    }

    fn resolve_selection<S: SelectionContext>(context: &mut S) -> ViewResult<Vec<S::Shape>> {
        context.select(true)?;
        context.init_selected()?;

        let mut selected = Vec::new();
        if context.has_selected_shape()? {
            selected.push(context.selected_shape()?);
        }
        Ok(selected)
    }
}
