//! Recording view and selection context shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use cadview_viewport::glam::DVec3;
use cadview_viewport::*;

/// Every collaborator call, in the order it was made.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    SetUp(DVec3),
    SetZoom(f64),
    StartRotation(i32, i32),
    Rotation(i32, i32),
    Rotate(f64, f64, f64),
    Pan(i32, i32, bool),
    StartZoomAtPoint(i32, i32),
    ZoomAtPoint(i32, i32, i32, i32),
    CameraTransform(AxisRotation),
    Redraw,
    MustBeResized,
    SetWindow(NativeWindow),
    MoveTo(i32, i32, bool),
    Select(bool),
    InitSelected,
    HasSelectedShape,
    SelectedShape,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct RecordingCamera {
    pub inner: OrbitCamera,
    log: CallLog,
}

impl Camera for RecordingCamera {
    fn center(&self) -> DVec3 {
        self.inner.center()
    }

    fn transform(&mut self, rotation: &AxisRotation) -> ViewResult<()> {
        self.log.borrow_mut().push(Call::CameraTransform(*rotation));
        self.inner.transform(rotation)
    }
}

pub struct RecordingView {
    pub log: CallLog,
    pub camera: RecordingCamera,
    /// Backend primitive that should fail, e.g. "SetZoom"
    pub fail_on: Option<&'static str>,
}

impl RecordingView {
    pub fn new(log: CallLog) -> Self {
        Self {
            camera: RecordingCamera {
                inner: OrbitCamera::default(),
                log: log.clone(),
            },
            log,
            fail_on: None,
        }
    }

    fn record(&mut self, operation: &'static str, call: Call) -> ViewResult<()> {
        self.log.borrow_mut().push(call);
        match self.fail_on {
            Some(failing) if failing == operation => Err(BackendError::new(operation, "injected failure").into()),
            _ => Ok(()),
        }
    }
}

impl View for RecordingView {
    type Camera = RecordingCamera;

    fn set_up(&mut self, up: DVec3) -> ViewResult<()> {
        self.record("SetUp", Call::SetUp(up))?;
        self.camera.inner.set_up(up);
        Ok(())
    }

    fn set_zoom(&mut self, factor: f64) -> ViewResult<()> {
        self.record("SetZoom", Call::SetZoom(factor))?;
        self.camera.inner.zoom(factor);
        Ok(())
    }

    fn start_rotation(&mut self, x: i32, y: i32) -> ViewResult<()> {
        self.record("StartRotation", Call::StartRotation(x, y))
    }

    fn rotation(&mut self, x: i32, y: i32) -> ViewResult<()> {
        self.record("Rotation", Call::Rotation(x, y))
    }

    fn rotate(&mut self, ax: f64, ay: f64, az: f64) -> ViewResult<()> {
        self.record("Rotate", Call::Rotate(ax, ay, az))
    }

    fn pan(&mut self, dx: i32, dy: i32, to_start: bool) -> ViewResult<()> {
        self.record("Pan", Call::Pan(dx, dy, to_start))
    }

    fn start_zoom_at_point(&mut self, x: i32, y: i32) -> ViewResult<()> {
        self.record("StartZoomAtPoint", Call::StartZoomAtPoint(x, y))
    }

    fn zoom_at_point(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> ViewResult<()> {
        self.record("ZoomAtPoint", Call::ZoomAtPoint(x0, y0, x1, y1))
    }

    fn camera(&mut self) -> &mut RecordingCamera {
        &mut self.camera
    }

    fn redraw(&mut self) -> ViewResult<()> {
        self.record("Redraw", Call::Redraw)
    }

    fn must_be_resized(&mut self) -> ViewResult<()> {
        self.record("MustBeResized", Call::MustBeResized)
    }

    fn set_window(&mut self, window: NativeWindow) -> ViewResult<()> {
        self.record("SetWindow", Call::SetWindow(window))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u32);

/// Selection context whose hit test always reports `hit`.
pub struct RecordingContext {
    pub log: CallLog,
    pub hit: Option<ShapeId>,
    detected: Option<ShapeId>,
    selected: Option<ShapeId>,
}

impl RecordingContext {
    pub fn new(log: CallLog, hit: Option<ShapeId>) -> Self {
        Self {
            log,
            hit,
            detected: None,
            selected: None,
        }
    }
}

impl SelectionContext for RecordingContext {
    type Shape = ShapeId;

    fn move_to<V: View>(&mut self, x: i32, y: i32, _view: &mut V, update: bool) -> ViewResult<()> {
        self.log.borrow_mut().push(Call::MoveTo(x, y, update));
        self.detected = self.hit;
        Ok(())
    }

    fn select(&mut self, update: bool) -> ViewResult<()> {
        self.log.borrow_mut().push(Call::Select(update));
        self.selected = self.detected;
        Ok(())
    }

    fn init_selected(&mut self) -> ViewResult<()> {
        self.log.borrow_mut().push(Call::InitSelected);
        Ok(())
    }

    fn has_selected_shape(&mut self) -> ViewResult<bool> {
        self.log.borrow_mut().push(Call::HasSelectedShape);
        Ok(self.selected.is_some())
    }

    fn selected_shape(&mut self) -> ViewResult<ShapeId> {
        self.log.borrow_mut().push(Call::SelectedShape);
        self.selected
            .ok_or_else(|| BackendError::new("SelectedShape", "nothing selected").into())
    }
}

/// A fresh log with a view and context recording into it.
pub fn recorders(hit: Option<ShapeId>) -> (CallLog, RecordingView, RecordingContext) {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let view = RecordingView::new(log.clone());
    let context = RecordingContext::new(log.clone(), hit);
    (log, view, context)
}

/// Drain the log.
pub fn take_calls(log: &CallLog) -> Vec<Call> {
    std::mem::take(&mut *log.borrow_mut())
}

pub fn is_selection_call(call: &Call) -> bool {
    matches!(
        call,
        Call::MoveTo(..) | Call::Select(_) | Call::InitSelected | Call::HasSelectedShape | Call::SelectedShape
    )
}
