//! Test doubles for the graphics device and the window
//!
//! [`RecordingDevice`] hands out sequential integer handles from one counter
//! and records every state-changing call. [`ScriptedWindow`] replays a fixed
//! input script with a clock that advances on each event poll.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::RuntimeError;
use crate::input::KeyCode;
use crate::platform::WindowBackend;
use crate::render::backend::{ClearMask, GraphicsDevice, ShaderStage};

/// Uniform names the fake linker reports as active, in location order
pub const ACTIVE_UNIFORMS: [&str; 7] = [
    "model",
    "view",
    "projection",
    "lightPos",
    "viewPos",
    "lightColor",
    "objectColor",
];

/// A recorded device call
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    CreateBuffer { id: u32, bytes: usize },
    DeleteBuffer(u32),
    CreateVertexArray(u32),
    DeleteVertexArray(u32),
    BindVertexArray(Option<u32>),
    BindVec3Attribute { slot: u32, buffer: u32 },
    CreateShader { id: u32, stage: ShaderStage },
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    DetachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    SetClearColor([f32; 4]),
    EnableDepthTest,
    Clear(ClearMask),
    DrawTriangles { first: i32, count: i32 },
}

/// A recorded uniform upload
#[derive(Debug, Clone, PartialEq)]
pub enum UniformUpload {
    Vec3 { location: u32, value: [f32; 3] },
    Mat4 { location: u32, value: [f32; 16] },
}

/// Graphics device that records calls instead of talking to a GPU
#[derive(Default)]
pub struct RecordingDevice {
    next_id: Cell<u32>,
    calls: RefCell<Vec<DeviceCall>>,
    uploads: RefCell<Vec<UniformUpload>>,
    uniform_queries: RefCell<HashMap<String, usize>>,
    missing_uniforms: RefCell<HashSet<String>>,
    pending_errors: RefCell<VecDeque<u32>>,
    shader_logs: RefCell<HashMap<u32, String>>,
    link_failure: RefCell<Option<String>>,
    fail_vertex_arrays: Cell<bool>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn record(&self, call: DeviceCall) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<DeviceCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
        self.uploads.borrow_mut().clear();
    }

    pub fn uploads(&self) -> Vec<UniformUpload> {
        self.uploads.borrow().clone()
    }

    /// Matrices uploaded to `location`, in upload order
    pub fn mat4_uploads(&self, location: u32) -> Vec<[f32; 16]> {
        self.uploads
            .borrow()
            .iter()
            .filter_map(|upload| match upload {
                UniformUpload::Mat4 { location: l, value } if *l == location => Some(*value),
                _ => None,
            })
            .collect()
    }

    /// Vectors uploaded to `location`, in upload order
    pub fn vec3_uploads(&self, location: u32) -> Vec<[f32; 3]> {
        self.uploads
            .borrow()
            .iter()
            .filter_map(|upload| match upload {
                UniformUpload::Vec3 { location: l, value } if *l == location => Some(*value),
                _ => None,
            })
            .collect()
    }

    pub fn draw_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, DeviceCall::DrawTriangles { .. }))
            .count()
    }

    /// How many times the device was asked for `name`
    pub fn uniform_queries(&self, name: &str) -> usize {
        self.uniform_queries
            .borrow()
            .get(name)
            .copied()
            .unwrap_or(0)
    }

    /// Location the fake linker assigns to `name`
    pub fn location_of(name: &str) -> u32 {
        ACTIVE_UNIFORMS
            .iter()
            .position(|n| *n == name)
            .map(|i| i as u32)
            .expect("not an active uniform")
    }

    pub fn fail_vertex_arrays(&self) {
        self.fail_vertex_arrays.set(true);
    }

    pub fn fail_link(&self, log: &str) {
        *self.link_failure.borrow_mut() = Some(log.to_string());
    }

    /// Pretend the linker optimised `name` away
    pub fn drop_uniform(&self, name: &str) {
        self.missing_uniforms.borrow_mut().insert(name.to_string());
    }

    pub fn push_error(&self, code: u32) {
        self.pending_errors.borrow_mut().push_back(code);
    }
}

impl GraphicsDevice for RecordingDevice {
    type Buffer = u32;
    type VertexArray = u32;
    type Shader = u32;
    type Program = u32;
    type UniformLocation = u32;

    fn create_buffer(&self, data: &[u8]) -> Result<u32, String> {
        let id = self.allocate();
        let bytes = data.len();
        self.record(DeviceCall::CreateBuffer { id, bytes });
        Ok(id)
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(DeviceCall::DeleteBuffer(buffer));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        if self.fail_vertex_arrays.get() {
            return Err("out of vertex arrays".to_string());
        }
        let id = self.allocate();
        self.record(DeviceCall::CreateVertexArray(id));
        Ok(id)
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(DeviceCall::DeleteVertexArray(vertex_array));
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(DeviceCall::BindVertexArray(vertex_array));
    }

    fn bind_vec3_attribute(&self, slot: u32, buffer: u32) {
        self.record(DeviceCall::BindVec3Attribute { slot, buffer });
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let id = self.allocate();
        self.record(DeviceCall::CreateShader { id, stage });
        Ok(id)
    }

    fn compile_shader(&self, shader: u32, source: &str) -> bool {
        self.record(DeviceCall::CompileShader(shader));
        let error_line = source
            .lines()
            .find(|line| line.trim_start().starts_with("#error"));
        match error_line {
            Some(line) => {
                self.shader_logs
                    .borrow_mut()
                    .insert(shader, format!("ERROR: 0:2: {}", line.trim()));
                false
            }
            None => true,
        }
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.shader_logs
            .borrow()
            .get(&shader)
            .cloned()
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: u32) {
        self.record(DeviceCall::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let id = self.allocate();
        self.record(DeviceCall::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(DeviceCall::AttachShader { program, shader });
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record(DeviceCall::DetachShader { program, shader });
    }

    fn link_program(&self, program: u32) -> bool {
        self.record(DeviceCall::LinkProgram(program));
        self.link_failure.borrow().is_none()
    }

    fn program_info_log(&self, _program: u32) -> String {
        self.link_failure.borrow().clone().unwrap_or_default()
    }

    fn delete_program(&self, program: u32) {
        self.record(DeviceCall::DeleteProgram(program));
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(DeviceCall::UseProgram(program));
    }

    fn uniform_location(&self, _program: u32, name: &str) -> Option<u32> {
        *self
            .uniform_queries
            .borrow_mut()
            .entry(name.to_string())
            .or_default() += 1;
        if self.missing_uniforms.borrow().contains(name) {
            return None;
        }
        ACTIVE_UNIFORMS
            .iter()
            .position(|n| *n == name)
            .map(|i| i as u32)
    }

    fn uniform_vec3(&self, location: &u32, value: [f32; 3]) {
        let upload = UniformUpload::Vec3 {
            location: *location,
            value,
        };
        self.uploads.borrow_mut().push(upload);
    }

    fn uniform_mat4(&self, location: &u32, value: &[f32; 16]) {
        let upload = UniformUpload::Mat4 {
            location: *location,
            value: *value,
        };
        self.uploads.borrow_mut().push(upload);
    }

    fn set_clear_color(&self, rgba: [f32; 4]) {
        self.record(DeviceCall::SetClearColor(rgba));
    }

    fn enable_depth_test(&self) {
        self.record(DeviceCall::EnableDepthTest);
    }

    fn clear(&self, mask: ClearMask) {
        self.record(DeviceCall::Clear(mask));
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(DeviceCall::DrawTriangles { first, count });
    }

    fn take_error(&self) -> Option<u32> {
        self.pending_errors.borrow_mut().pop_front()
    }
}

/// Window that replays a scripted session
///
/// The clock starts at zero and advances by `time_step` on every
/// [`WindowBackend::poll_events`]. Cursor motion queued with
/// [`ScriptedWindow::queue_cursor`] is delivered one position per poll.
pub struct ScriptedWindow {
    pub width: u32,
    pub height: u32,
    pub pressed: HashSet<KeyCode>,
    pub cursor: (f64, f64),
    pub warps: Vec<(f64, f64)>,
    pub time_step: f64,
    pub swaps: u64,
    clock: f64,
    close_requested: bool,
    close_after_polls: Option<u64>,
    polls: u64,
    cursor_script: VecDeque<(f64, f64)>,
    swap_failure: Option<String>,
}

impl ScriptedWindow {
    /// A `width` x `height` window with the cursor at its centre
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pressed: HashSet::new(),
            cursor: (f64::from(width) / 2.0, f64::from(height) / 2.0),
            warps: Vec::new(),
            time_step: 0.0,
            swaps: 0,
            clock: 0.0,
            close_requested: false,
            close_after_polls: None,
            polls: 0,
            cursor_script: VecDeque::new(),
            swap_failure: None,
        }
    }

    pub fn with_time_step(mut self, seconds: f64) -> Self {
        self.time_step = seconds;
        self
    }

    /// Raise the close flag once `polls` event polls have happened
    pub fn close_after(mut self, polls: u64) -> Self {
        self.close_after_polls = Some(polls);
        self
    }

    pub fn press(&mut self, key: KeyCode) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.pressed.remove(&key);
    }

    pub fn queue_cursor(&mut self, x: f64, y: f64) {
        self.cursor_script.push_back((x, y));
    }

    pub fn fail_swap(&mut self, reason: &str) {
        self.swap_failure = Some(reason.to_string());
    }
}

impl WindowBackend for ScriptedWindow {
    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    fn cursor_position(&self) -> (f64, f64) {
        self.cursor
    }

    fn set_cursor_position(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
        self.warps.push((x, y));
    }

    fn should_close(&self) -> bool {
        self.close_requested
    }

    fn request_close(&mut self) {
        self.close_requested = true;
    }

    fn time(&self) -> f64 {
        self.clock
    }

    fn swap_buffers(&mut self) -> Result<(), RuntimeError> {
        if let Some(reason) = self.swap_failure.take() {
            return Err(RuntimeError::Presentation(reason));
        }
        self.swaps += 1;
        Ok(())
    }

    fn poll_events(&mut self) {
        self.polls += 1;
        self.clock += self.time_step;
        if let Some(position) = self.cursor_script.pop_front() {
            self.cursor = position;
        }
        if matches!(self.close_after_polls, Some(limit) if self.polls >= limit) {
            self.close_requested = true;
        }
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
