use super::error::{Error, Result};
use super::math::{Color, Vec2};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::video::GLProfile;
use std::time::{Duration, Instant};

pub struct System {
    pub w: usize,
    pub h: usize,
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_ctx: sdl2::video::GLContext,
    event_pump: sdl2::EventPump,
    frame_budget: Option<Duration>,
    last_frame: Instant,
    frames: u64,
}

impl System {
    pub fn new(w: usize, h: usize, title: &str) -> Result<System> {
        let sdl_context = sdl2::init().map_err(Error::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(Error::Sdl)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let window = video_subsystem
            .window(title, w as u32, h as u32)
            .opengl()
            .build()?;

        let gl_ctx = window.gl_create_context().map_err(Error::Sdl)?;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
        debug_assert_eq!(gl_attr.context_version(), (3, 3));

        unsafe { gl::Viewport(0, 0, w as i32, h as i32) };

        let event_pump = sdl_context.event_pump().map_err(Error::Sdl)?;
        log::info!("window '{title}' {w}x{h} created");

        Ok(System {
            w,
            h,
            sdl_context,
            window,
            video_subsystem,
            gl_ctx,
            event_pump,
            frame_budget: None,
            last_frame: Instant::now(),
            frames: 0,
        })
    }

    /// Caps presentation at `fps` frames per second; 0 removes the cap.
    pub fn set_framerate_limit(&mut self, fps: u32) {
        self.frame_budget = frame_budget(fps);
        log::info!("framerate limit: {fps}");
    }

    /// Window size in pixels.
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.w as f32, self.h as f32)
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Drains pending events. Returns false once the window was asked to close.
    pub fn process_io_events(&mut self) -> bool {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    log::info!("close requested");
                    return false;
                }
                _ => {}
            }
        }
        true
    }

    pub fn draw_to_screen(&mut self) {
        self.window.gl_swap_window();
        self.frames += 1;

        if let Some(budget) = self.frame_budget {
            if let Some(rest) = remaining_frame_time(budget, self.last_frame.elapsed()) {
                std::thread::sleep(rest);
            }
        }
        self.last_frame = Instant::now();
    }

    pub fn clear_screen(&mut self, color: Color) {
        unsafe {
            gl::ClearColor(color.r, color.g, color.b, color.a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
}

fn frame_budget(fps: u32) -> Option<Duration> {
    if fps == 0 {
        return None;
    }
    Some(Duration::from_secs_f64(1.0 / f64::from(fps)))
}

/// Time left in the frame, or None when the frame already ran over.
fn remaining_frame_time(budget: Duration, elapsed: Duration) -> Option<Duration> {
    budget.checked_sub(elapsed).filter(|rest| !rest.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_fps_disables_the_cap() {
        assert_eq!(frame_budget(0), None);
    }

    #[test]
    fn sixty_fps_budget() {
        let budget = frame_budget(60).unwrap();
        assert!((budget.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn sleeps_only_for_the_rest_of_the_frame() {
        let budget = Duration::from_millis(16);
        assert_eq!(
            remaining_frame_time(budget, Duration::from_millis(10)),
            Some(Duration::from_millis(6))
        );
        assert_eq!(remaining_frame_time(budget, Duration::from_millis(16)), None);
        assert_eq!(remaining_frame_time(budget, Duration::from_millis(40)), None);
    }
}
