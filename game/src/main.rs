mod bounce;
mod consts;

use backend::glutils::log_opengl_info;
use backend::math::{Color, Rect};
use backend::shapes::RectRenderer;
use backend::system::System;
use bounce::{BouncingSquare, Bounds};
use consts::*;
use std::process::ExitCode;

fn run() -> backend::Result<()> {
    let mut system = System::new(WINDOW_WIDTH, WINDOW_HEIGHT, WINDOW_TITLE)?;
    system.set_framerate_limit(FRAMERATE);
    log_opengl_info();

    let renderer = RectRenderer::new()?;
    let bounds = Bounds::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
    let [r, g, b] = SQUARE_COLOR;
    let color = Color::from_rgb8(r, g, b);
    let mut square = BouncingSquare::new(
        Rect::square(INITIAL_POSITION, SQUARE_SIDE),
        INITIAL_VELOCITY,
        SPEED,
    );

    while system.process_io_events() {
        // game logic
        square.tick(&bounds);

        system.clear_screen(Color::BLACK);
        renderer.draw(square.shape(), color, system.viewport())?;
        system.draw_to_screen();
    }

    log::info!(
        "exiting after {} frames, square at {:?} moving {:?}",
        system.frames(),
        square.shape().position(),
        square.velocity()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("game failure: {e}");
            ExitCode::FAILURE
        }
    }
}
