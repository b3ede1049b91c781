//! Biomequest
//!
//! Fly through a lit field of cubes. Mouse looks, WASD moves along the look
//! direction, Left Shift / Left Control move straight up and down, Escape
//! quits.

use std::process::ExitCode;
use std::rc::Rc;

use biome_engine::foundation::logging;
use biome_engine::prelude::*;

fn run() -> Result<u64, EngineError> {
    let config = EngineConfig::embedded().map_err(SetupError::from)?;
    log::debug!("Configuration:\n{}", config.to_toml().unwrap_or_default());

    // Declared first so it is dropped last: the context must outlive every
    // GPU object.
    let mut window = GlfwWindow::new(config.window_width, config.window_height, &config.title)?;
    let device = Rc::new(window.create_device());

    let program = ShaderProgram::from_resources(device.clone(), &config.shader_name)?;
    let scene = Scene::cube_grid(device.clone(), &config)?;
    let start = window.time();
    let mut frame_loop = FrameLoop::new(device, config, program, scene, start)?;

    frame_loop.run(&mut window)
}

fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC occurred: {panic_info}");
    }));

    logging::init();
    log::info!("Starting biomequest");

    match run() {
        Ok(frames) => {
            log::info!("Exited cleanly after {frames} frames");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
