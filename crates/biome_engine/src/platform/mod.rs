//! Window and input collaborators
//!
//! [`WindowBackend`] is everything the frame loop needs from the windowing
//! system: key state, the cursor, the close flag, a clock and presentation.
//! [`GlfwWindow`] is the production implementation.

mod glfw_window;

pub use glfw_window::GlfwWindow;

use crate::error::RuntimeError;
use crate::input::KeyCode;

/// Window, input device and presentation surface
///
/// All calls happen on the thread that owns the OpenGL context.
pub trait WindowBackend {
    /// Whether `key` is currently held down
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// Cursor position in window coordinates (origin top-left, y down)
    fn cursor_position(&self) -> (f64, f64);

    /// Warp the cursor
    fn set_cursor_position(&mut self, x: f64, y: f64);

    /// Whether a close has been requested by the user or the application
    fn should_close(&self) -> bool;

    /// Request the window to close at the next check
    fn request_close(&mut self);

    /// Seconds since the window system was initialised
    fn time(&self) -> f64;

    /// Present the back buffer; blocks until the swap is accepted
    fn swap_buffers(&mut self) -> Result<(), RuntimeError>;

    /// Process pending window system events
    fn poll_events(&mut self);

    /// Client area size in pixels
    fn size(&self) -> (u32, u32);
}
