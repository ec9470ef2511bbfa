//! Native window acquisition.
//!
//! The native view renders into a platform window owned by the host GUI.
//! Which window type to build is decided once by the host build, not by
//! inspecting the platform at every call: the host injects a
//! [`WindowProvider`] and the viewport asks it for a handle on first paint.

use crate::error::{ViewResult, ViewportError};

/// Windowing backend a native handle belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Win32 `HWND`
    Windows,
    /// Cocoa `NSView`
    MacOs,
    /// Xlib window id
    X11,
}

impl Platform {
    /// Platform selected by the build target. Unknown targets use X11.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::X11
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "win32",
            Platform::MacOs => "darwin",
            Platform::X11 => "x11",
        }
    }
}

/// A native window handle paired with the platform that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NativeWindow {
    pub platform: Platform,
    /// Raw handle value as reported by the host toolkit
    pub handle: u64,
}

impl NativeWindow {
    pub fn new(platform: Platform, handle: u64) -> Self {
        Self { platform, handle }
    }
}

/// Supplies the native window the view renders into.
pub trait WindowProvider {
    fn native_window(&mut self) -> ViewResult<NativeWindow>;
}

impl<F> WindowProvider for F
where
    F: FnMut() -> ViewResult<NativeWindow>,
{
    fn native_window(&mut self) -> ViewResult<NativeWindow> {
        self()
    }
}

/// Provider wrapping a toolkit window id for the build's platform.
#[derive(Clone, Copy, Debug)]
pub struct PlatformWindowProvider {
    platform: Platform,
    window_id: u64,
}

impl PlatformWindowProvider {
    pub fn new(window_id: u64) -> Self {
        Self::with_platform(Platform::current(), window_id)
    }

    pub fn with_platform(platform: Platform, window_id: u64) -> Self {
        Self { platform, window_id }
    }
}

impl WindowProvider for PlatformWindowProvider {
    fn native_window(&mut self) -> ViewResult<NativeWindow> {
        if self.window_id == 0 {
            return Err(ViewportError::Window(format!(
                "no {} window id assigned",
                self.platform.name()
            )));
        }
        Ok(NativeWindow::new(self.platform, self.window_id))
    }
}
