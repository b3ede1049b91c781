//! GLFW window with a current OpenGL 4.1 core context

use glfw::{Action, Context, Key, OpenGlProfileHint, WindowHint};

use crate::error::{RuntimeError, SetupError, SetupResult};
use crate::input::KeyCode;
use crate::platform::WindowBackend;
use crate::render::gl::GlowDevice;

/// GLFW window wrapper with proper resource management
///
/// The window's OpenGL context is made current on creation and stays current
/// on the creating thread until the window is dropped. The window is fixed
/// size, captures the cursor and uses sticky keys so short presses between
/// polls are not lost.
pub struct GlfwWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    _events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl GlfwWindow {
    /// Create the window and make its context current
    pub fn new(width: u32, height: u32, title: &str) -> SetupResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| SetupError::WindowInit(format!("{e:?}")))?;

        glfw.window_hint(WindowHint::Resizable(false));
        glfw.window_hint(WindowHint::ContextVersion(4, 1));
        glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
        glfw.window_hint(WindowHint::OpenGlForwardCompat(true));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(SetupError::WindowCreation { width, height })?;

        window.make_current();
        window.set_sticky_keys(true);
        window.set_cursor_mode(glfw::CursorMode::Disabled);
        glfw.set_swap_interval(glfw::SwapInterval::None);

        log::info!("Created {width}x{height} window \"{title}\"");

        Ok(Self {
            glfw,
            window,
            _events: events,
        })
    }

    /// Load OpenGL through this window's context
    pub fn create_device(&mut self) -> GlowDevice {
        let window = &mut self.window;
        // SAFETY: the context was made current in `new` and stays current on
        // this thread for the lifetime of the window
        let device =
            unsafe { GlowDevice::from_loader(|name| window.get_proc_address(name) as *const _) };
        log::info!("OpenGL context: {}", device.version_string());
        device
    }

    fn glfw_key(key: KeyCode) -> Key {
        match key {
            KeyCode::W => Key::W,
            KeyCode::A => Key::A,
            KeyCode::S => Key::S,
            KeyCode::D => Key::D,
            KeyCode::LeftShift => Key::LeftShift,
            KeyCode::LeftControl => Key::LeftControl,
            KeyCode::Escape => Key::Escape,
        }
    }
}

impl WindowBackend for GlfwWindow {
    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.window.get_key(Self::glfw_key(key)) == Action::Press
    }

    fn cursor_position(&self) -> (f64, f64) {
        self.window.get_cursor_pos()
    }

    fn set_cursor_position(&mut self, x: f64, y: f64) {
        self.window.set_cursor_pos(x, y);
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn request_close(&mut self) {
        self.window.set_should_close(true);
    }

    fn time(&self) -> f64 {
        self.glfw.get_time()
    }

    fn swap_buffers(&mut self) -> Result<(), RuntimeError> {
        self.window.swap_buffers();
        Ok(())
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    fn size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width.max(0) as u32, height.max(0) as u32)
    }
}
