//! Embeddable viewport widget.

use cadview_event::{Priority, Signal, SubscriberId};

use crate::config::{ConfigResult, ViewportConfig};
use crate::error::ViewResult;
use crate::view::{SelectionContext, View};
use crate::window::WindowProvider;

use super::camera_controller::CameraController;
use super::orbit::OrbitMode;
use super::pointer::{MouseButton, MouseButtons, ScreenPoint};

/// Emitted when a left click resolves into a pick.
///
/// `shapes` holds the picked shape, or is empty if the click hit nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectSelected<S> {
    pub shapes: Vec<S>,
}

impl<S> ObjectSelected<S> {
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn first(&self) -> Option<&S> {
        self.shapes.first()
    }
}

/// A native 3D view embedded in a host window, driven by pointer input.
///
/// The host forwards its GUI events to the `mouse_*`, `wheel`, `paint`
/// and `resize` methods on the event thread.
pub struct Viewport<V: View, S: SelectionContext> {
    view: V,
    context: S,
    controller: CameraController,
    object_selected: Signal<ObjectSelected<S::Shape>>,
    window_provider: Box<dyn WindowProvider>,
    initialized: bool,
}

impl<V: View, S: SelectionContext> Viewport<V, S> {
    pub fn new(view: V, context: S, window_provider: impl WindowProvider + 'static) -> Self {
        Self::with_controller(view, context, window_provider, CameraController::new())
    }

    /// Build a viewport from settings, rejecting invalid ones.
    pub fn with_config(
        view: V,
        context: S,
        window_provider: impl WindowProvider + 'static,
        config: &ViewportConfig,
    ) -> ConfigResult<Self> {
        let controller = CameraController::from_config(config)?;
        Ok(Self::with_controller(view, context, window_provider, controller))
    }

    fn with_controller(
        view: V,
        context: S,
        window_provider: impl WindowProvider + 'static,
        controller: CameraController,
    ) -> Self {
        Self {
            view,
            context,
            controller,
            object_selected: Signal::new(),
            window_provider: Box::new(window_provider),
            initialized: false,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn context(&self) -> &S {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut S {
        &mut self.context
    }

    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    pub fn orbit_mode(&self) -> OrbitMode {
        self.controller.orbit_mode()
    }

    /// Whether the native window has been bound
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Subscribe to pick results
    pub fn on_object_selected<F>(&mut self, handler: F) -> SubscriberId
    where
        F: Fn(&ObjectSelected<S::Shape>) + Send + Sync + 'static,
    {
        self.object_selected.subscribe(handler)
    }

    pub fn on_object_selected_with_priority<F>(&mut self, handler: F, priority: Priority) -> SubscriberId
    where
        F: Fn(&ObjectSelected<S::Shape>) + Send + Sync + 'static,
    {
        self.object_selected.subscribe_with_priority(handler, priority)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.object_selected.unsubscribe(id)
    }

    /// See [`CameraController::set_orbit_method`].
    pub fn set_orbit_method(&mut self, method: &str) -> ViewResult<()> {
        self.controller.set_orbit_method(&mut self.view, method)
    }

    pub fn set_orbit_mode(&mut self, mode: OrbitMode) -> ViewResult<()> {
        self.controller.set_orbit_mode(&mut self.view, mode)
    }

    pub fn wheel(&mut self, delta: i32) -> ViewResult<()> {
        self.controller.wheel(&mut self.view, delta)
    }

    pub fn mouse_press(&mut self, button: MouseButton, pos: ScreenPoint) -> ViewResult<()> {
        self.controller.press(&mut self.view, button, pos)
    }

    pub fn mouse_move(&mut self, buttons: MouseButtons, pos: ScreenPoint) -> ViewResult<()> {
        self.controller.mouse_move(&mut self.view, buttons, pos)
    }

    /// Handle a release, emitting [`ObjectSelected`] if a click resolved.
    pub fn mouse_release(&mut self, button: MouseButton, pos: ScreenPoint) -> ViewResult<()> {
        if let Some(shapes) = self
            .controller
            .release(&mut self.view, &mut self.context, button, pos)?
        {
            self.object_selected.emit(&ObjectSelected { shapes });
        }
        Ok(())
    }

    /// Paint request from the host. The first one binds the native window,
    /// later ones redraw.
    pub fn paint(&mut self) -> ViewResult<()> {
        if self.initialized {
            return self.view.redraw();
        }

        let window = self.window_provider.native_window()?;
        log::debug!("Binding view to {:?} window {:#x}", window.platform, window.handle);
        self.view.set_window(window)?;
        self.initialized = true;
        Ok(())
    }

    /// Resize notification from the host.
    pub fn resize(&mut self) -> ViewResult<()> {
        self.view.must_be_resized()
    }
}
