use backend::math::Vec2;

pub const WINDOW_WIDTH: usize = 800;
pub const WINDOW_HEIGHT: usize = 600;
pub const WINDOW_TITLE: &str = "UTN-INSPT SFML";
pub const FRAMERATE: u32 = 60;

/// Pixels per frame on each axis.
pub const SPEED: f32 = 4.5;
pub const SQUARE_SIDE: f32 = 25.0;
// RGB
pub const SQUARE_COLOR: [u8; 3] = [255, 0, 128];

pub const INITIAL_POSITION: Vec2 = Vec2::new(0.0, 0.0);
pub const INITIAL_VELOCITY: Vec2 = Vec2::new(SPEED, SPEED);
