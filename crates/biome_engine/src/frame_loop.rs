//! The per-frame orchestrator
//!
//! [`FrameLoop::step`] runs one iteration: close check, timing, mouse look,
//! movement, view matrix, clear, uniform upload, one draw per visible entity,
//! error check, present, poll. [`FrameLoop::run`] repeats it until the window
//! is asked to close.

use std::rc::Rc;

use crate::config::EngineConfig;
use crate::error::{EngineError, RuntimeError, SetupResult};
use crate::foundation::math::{Vec3, WORLD_UP};
use crate::foundation::time::FrameClock;
use crate::input::{MoveAxis, CLOSE_KEY, MOVEMENT_BINDINGS};
use crate::platform::WindowBackend;
use crate::render::backend::{ClearMask, GraphicsDevice};
use crate::render::camera::Camera;
use crate::render::shader::ShaderProgram;
use crate::scene::Scene;

/// Uniforms every frame writes; the program must declare all of them
pub const REQUIRED_UNIFORMS: [&str; 7] = [
    "model",
    "view",
    "projection",
    "lightPos",
    "viewPos",
    "lightColor",
    "objectColor",
];

/// Loop lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Frames are being produced
    Running,
    /// The close flag was seen; terminal
    Closing,
}

/// Uniform locations resolved once before the first frame
struct FrameUniforms<L> {
    model: L,
    view: L,
    projection: L,
    light_pos: L,
    view_pos: L,
    light_color: L,
    object_color: L,
}

impl<L: Clone> FrameUniforms<L> {
    fn resolve<D>(program: &mut ShaderProgram<D>) -> SetupResult<Self>
    where
        D: GraphicsDevice<UniformLocation = L>,
    {
        Ok(Self {
            model: program.uniform_location("model")?,
            view: program.uniform_location("view")?,
            projection: program.uniform_location("projection")?,
            light_pos: program.uniform_location("lightPos")?,
            view_pos: program.uniform_location("viewPos")?,
            light_color: program.uniform_location("lightColor")?,
            object_color: program.uniform_location("objectColor")?,
        })
    }
}

/// Position of the orbiting point light at time `t` seconds
pub fn light_position(t: f64) -> Vec3 {
    Vec3::new(t.cos() * 10.0, t.sin() * t.cos() * 10.0, t.sin() * 5.0)
}

/// Frame loop state: everything that lives from setup to shutdown
///
/// Fields drop in declaration order, so the scene's models and the program
/// are released before the last device handle goes away.
pub struct FrameLoop<D: GraphicsDevice> {
    scene: Scene<D>,
    program: ShaderProgram<D>,
    uniforms: FrameUniforms<D::UniformLocation>,
    camera: Camera,
    clock: FrameClock,
    config: EngineConfig,
    state: LoopState,
    device: Rc<D>,
}

impl<D: GraphicsDevice> FrameLoop<D> {
    /// Prepare the loop
    ///
    /// Resolves every uniform in [`REQUIRED_UNIFORMS`], enables depth testing
    /// and sets the clear color. `start_time` is the window clock reading the
    /// first frame's delta is measured from.
    pub fn new(
        device: Rc<D>,
        config: EngineConfig,
        mut program: ShaderProgram<D>,
        scene: Scene<D>,
        start_time: f64,
    ) -> SetupResult<Self> {
        let camera = Camera::new(
            config.fov_degrees,
            f64::from(config.window_width),
            f64::from(config.window_height),
        )?;
        let uniforms = FrameUniforms::resolve(&mut program)?;

        device.enable_depth_test();
        device.set_clear_color(config.clear_color);

        log::info!("Frame loop ready");
        Ok(Self {
            scene,
            program,
            uniforms,
            camera,
            clock: FrameClock::new(start_time),
            config,
            state: LoopState::Running,
            device,
        })
    }

    /// Current lifecycle state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The scene being drawn
    pub fn scene(&self) -> &Scene<D> {
        &self.scene
    }

    /// Frames rendered so far
    pub fn frames_rendered(&self) -> u64 {
        self.clock.frame_count()
    }

    /// Run one iteration
    ///
    /// Returns [`LoopState::Closing`] without rendering once the close flag
    /// is set; Escape sets it at the top of the iteration.
    pub fn step<W: WindowBackend>(&mut self, window: &mut W) -> Result<LoopState, RuntimeError> {
        if self.state == LoopState::Closing {
            return Ok(LoopState::Closing);
        }
        if window.is_key_pressed(CLOSE_KEY) {
            window.request_close();
        }
        if window.should_close() {
            log::info!("Close requested after {} frames", self.clock.frame_count());
            self.state = LoopState::Closing;
            return Ok(LoopState::Closing);
        }

        let now = window.time();
        let delta_time = self.clock.tick(now);

        let (x, y) = window.cursor_position();
        let (width, height) = window.size();
        let center_x = f64::from(width) / 2.0;
        let center_y = f64::from(height) / 2.0;
        window.set_cursor_position(center_x, center_y);

        let sensitivity = self.config.look_sensitivity;
        let speed = self.config.move_speed;
        let player = self.scene.player_mut();
        let delta_yaw = (x - center_x) * sensitivity;
        // screen y grows downwards
        let delta_pitch = (center_y - y) * sensitivity;
        player.add_look_input(delta_yaw, delta_pitch);

        let basis = player.basis();
        for binding in &MOVEMENT_BINDINGS {
            if window.is_key_pressed(binding.key) {
                let axis = match binding.axis {
                    MoveAxis::Forward => basis.forward,
                    MoveAxis::Right => basis.right,
                    MoveAxis::WorldUp => WORLD_UP,
                };
                player.translate(&(axis * binding.sign), delta_time, speed);
            }
        }

        let eye = player.position;
        let view = Camera::view_matrix(&eye, &basis.forward, &basis.up);
        log::trace!(
            "dt {delta_time:.4} eye {eye:?} yaw {:.3} pitch {:.3}",
            player.yaw(),
            player.pitch()
        );

        self.device.clear(ClearMask::COLOR | ClearMask::DEPTH);

        let light = light_position(now);
        let light_color = Vec3::from(self.config.light_color);
        let object_color = Vec3::from(self.config.object_color);
        self.program.bind();
        self.program.set_uniform(&self.uniforms.projection, self.camera.projection_matrix());
        self.program.set_uniform(&self.uniforms.view, &view);
        self.program.set_uniform(&self.uniforms.light_pos, &light);
        self.program.set_uniform(&self.uniforms.view_pos, &eye);
        self.program.set_uniform(&self.uniforms.light_color, &light_color);
        self.program.set_uniform(&self.uniforms.object_color, &object_color);

        self.scene.place_light_marker(light);
        for (entity, model) in self.scene.drawables() {
            self.program.set_uniform(&self.uniforms.model, &entity.transform.model_matrix());
            model.bind_for_draw();
            model.draw();
        }

        if let Some(code) = self.device.take_error() {
            return Err(RuntimeError::Device(code));
        }

        window.swap_buffers()?;
        window.poll_events();
        Ok(LoopState::Running)
    }

    /// Step until the loop closes; returns the number of frames rendered
    pub fn run<W: WindowBackend>(&mut self, window: &mut W) -> Result<u64, EngineError> {
        while self.step(window)? == LoopState::Running {}
        let frames = self.clock.frame_count();
        log::info!("Frame loop finished after {frames} frames");
        Ok(frames)
    }
}
