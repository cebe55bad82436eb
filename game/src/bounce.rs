//! Window-edge contact tests and the per-frame bounce update of the square.
//!
//! The square is never clamped back inside the window: after a contact it may
//! stick out by up to one frame of displacement before the reversed velocity
//! carries it back.

use backend::math::{Rect, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Size of the area the square bounces in, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Bounds {
        Bounds { width, height }
    }
}

/// True when `r` has reached or passed `edge` of the window.
pub fn touches_edge(r: &Rect, edge: Edge, bounds: &Bounds) -> bool {
    match edge {
        Edge::Top => r.top <= 0.0,
        Edge::Bottom => r.bottom() >= bounds.height,
        Edge::Left => r.left <= 0.0,
        Edge::Right => r.right() >= bounds.width,
    }
}

pub struct BouncingSquare {
    shape: Rect,
    velocity: Vec2,
    speed: f32,
}

impl BouncingSquare {
    pub fn new(shape: Rect, velocity: Vec2, speed: f32) -> BouncingSquare {
        BouncingSquare {
            shape,
            velocity,
            speed,
        }
    }

    pub fn shape(&self) -> &Rect {
        &self.shape
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Points the velocity away from any touched edge. Left is checked before
    /// right and top before bottom; an axis with no contact keeps its velocity.
    fn update_velocity(&mut self, bounds: &Bounds) {
        if touches_edge(&self.shape, Edge::Left, bounds) {
            self.velocity.x = self.speed;
            log::trace!("left edge contact at {:?}", self.shape.position());
        } else if touches_edge(&self.shape, Edge::Right, bounds) {
            self.velocity.x = -self.speed;
            log::trace!("right edge contact at {:?}", self.shape.position());
        }

        if touches_edge(&self.shape, Edge::Top, bounds) {
            self.velocity.y = self.speed;
            log::trace!("top edge contact at {:?}", self.shape.position());
        } else if touches_edge(&self.shape, Edge::Bottom, bounds) {
            self.velocity.y = -self.speed;
            log::trace!("bottom edge contact at {:?}", self.shape.position());
        }
    }

    /// Advances the square by one frame.
    pub fn tick(&mut self, bounds: &Bounds) {
        self.update_velocity(bounds);
        self.shape.translate(self.velocity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SPEED: f32 = 4.5;
    const SIDE: f32 = 25.0;
    const BOUNDS: Bounds = Bounds::new(800.0, 600.0);

    fn square_at(x: f32, y: f32, vx: f32, vy: f32) -> BouncingSquare {
        BouncingSquare::new(
            Rect::square(Vec2::new(x, y), SIDE),
            Vec2::new(vx, vy),
            SPEED,
        )
    }

    #[test]
    fn edge_contact_is_inclusive() {
        let at = |x, y| Rect::square(Vec2::new(x, y), SIDE);

        assert!(touches_edge(&at(100.0, 0.0), Edge::Top, &BOUNDS));
        assert!(touches_edge(&at(100.0, -3.0), Edge::Top, &BOUNDS));
        assert!(!touches_edge(&at(100.0, 0.5), Edge::Top, &BOUNDS));

        assert!(touches_edge(&at(100.0, 575.0), Edge::Bottom, &BOUNDS));
        assert!(!touches_edge(&at(100.0, 574.5), Edge::Bottom, &BOUNDS));

        assert!(touches_edge(&at(0.0, 100.0), Edge::Left, &BOUNDS));
        assert!(!touches_edge(&at(0.5, 100.0), Edge::Left, &BOUNDS));

        assert!(touches_edge(&at(775.0, 100.0), Edge::Right, &BOUNDS));
        assert!(!touches_edge(&at(774.5, 100.0), Edge::Right, &BOUNDS));
    }

    #[test]
    fn first_frame_from_origin() {
        let mut sq = square_at(0.0, 0.0, SPEED, SPEED);
        sq.tick(&BOUNDS);

        assert_eq!(sq.velocity(), Vec2::new(4.5, 4.5));
        assert_eq!(sq.shape().position(), Vec2::new(4.5, 4.5));
    }

    #[test]
    fn right_edge_reverses_horizontal_velocity() {
        let mut sq = square_at(780.0, 300.0, SPEED, 0.0);
        sq.tick(&BOUNDS);

        assert_eq!(sq.velocity(), Vec2::new(-4.5, 0.0));
        assert_eq!(sq.shape().position(), Vec2::new(775.5, 300.0));
    }

    #[test]
    fn top_contact_forces_downward_velocity() {
        let mut sq = square_at(300.0, -2.0, SPEED, -SPEED);
        sq.tick(&BOUNDS);
        assert_eq!(sq.velocity().y, SPEED);

        let mut sq = square_at(300.0, 0.0, SPEED, SPEED);
        sq.tick(&BOUNDS);
        assert_eq!(sq.velocity().y, SPEED);
    }

    #[test]
    fn bottom_contact_forces_upward_velocity() {
        let mut sq = square_at(300.0, 580.0, -SPEED, SPEED);
        sq.tick(&BOUNDS);

        assert_eq!(sq.velocity(), Vec2::new(-4.5, -4.5));
        assert_eq!(sq.shape().position(), Vec2::new(295.5, 575.5));
    }

    #[test]
    fn velocity_kept_without_contact() {
        let mut sq = square_at(100.25, 200.5, SPEED, -SPEED);
        sq.tick(&BOUNDS);

        assert_eq!(sq.velocity(), Vec2::new(SPEED, -SPEED));
        assert_eq!(sq.shape().position(), Vec2::new(104.75, 196.0));
    }

    #[test]
    fn left_and_top_win_when_both_sides_touch() {
        let mut sq = BouncingSquare::new(
            Rect::new(0.0, 0.0, 900.0, 700.0),
            Vec2::new(-SPEED, -SPEED),
            SPEED,
        );
        sq.tick(&BOUNDS);

        assert_eq!(sq.velocity(), Vec2::new(SPEED, SPEED));
    }

    #[test]
    fn overshoot_is_not_clamped() {
        let mut sq = square_at(774.0, 300.0, SPEED, 0.0);

        sq.tick(&BOUNDS);
        assert_eq!(sq.shape().left, 778.5);
        assert!(sq.shape().right() > BOUNDS.width);

        sq.tick(&BOUNDS);
        assert_eq!(sq.velocity().x, -SPEED);
        assert_eq!(sq.shape().left, 774.0);
    }

    #[test]
    fn square_stays_near_the_window() {
        let mut sq = square_at(0.0, 0.0, SPEED, SPEED);
        for _ in 0..10_000 {
            sq.tick(&BOUNDS);
            let r = sq.shape();
            assert!(r.left >= -SPEED && r.right() <= BOUNDS.width + SPEED);
            assert!(r.top >= -SPEED && r.bottom() <= BOUNDS.height + SPEED);
        }
    }

    proptest! {
        #[test]
        fn axis_speed_never_changes(
            x in -10.0f32..810.0,
            y in -10.0f32..610.0,
            right in any::<bool>(),
            down in any::<bool>(),
            frames in 1usize..400,
        ) {
            let vx = if right { SPEED } else { -SPEED };
            let vy = if down { SPEED } else { -SPEED };
            let mut sq = square_at(x, y, vx, vy);

            for _ in 0..frames {
                sq.tick(&BOUNDS);
                prop_assert_eq!(sq.velocity().x.abs(), SPEED);
                prop_assert_eq!(sq.velocity().y.abs(), SPEED);
            }
        }
    }
}
