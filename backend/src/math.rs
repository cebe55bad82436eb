use std::ops::{Add, AddAssign};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline(always)]
    pub const fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline(always)]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Axis-aligned rectangle in window pixels, origin at the top-left corner
/// of the window and y growing downwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Rect {
        Rect {
            left,
            top,
            width,
            height,
        }
    }

    pub const fn square(position: Vec2, side: f32) -> Rect {
        Rect::new(position.x, position.y, side, side)
    }

    #[inline(always)]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline(always)]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline(always)]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Moves the rectangle by `delta`, keeping its size.
    pub fn translate(&mut self, delta: Vec2) {
        self.left += delta.x;
        self.top += delta.y;
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque colour from 0-255 channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Color {
        Color {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: 1.0,
        }
    }

    #[inline(always)]
    pub fn as_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_add_assign_is_plain_addition() {
        let mut v = Vec2::new(780.0, 300.0);
        v += Vec2::new(-4.5, 0.0);
        assert_eq!(v, Vec2::new(775.5, 300.0));
        assert_eq!(Vec2::new(1.0, 2.0) + Vec2::new(0.5, -2.0), Vec2::new(1.5, 0.0));
    }

    #[test]
    fn rect_edges_and_translate() {
        let mut r = Rect::square(Vec2::new(10.0, 20.0), 25.0);
        assert_eq!(r.right(), 35.0);
        assert_eq!(r.bottom(), 45.0);

        r.translate(Vec2::new(4.5, -4.5));
        assert_eq!(r.position(), Vec2::new(14.5, 15.5));
        assert_eq!(r.width, 25.0);
        assert_eq!(r.height, 25.0);
    }

    #[test]
    fn color_from_rgb8() {
        let c = Color::from_rgb8(255, 0, 128);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 128.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(c.as_array()[3], 1.0);
    }
}
