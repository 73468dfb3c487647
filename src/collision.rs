//! Axis-aligned bounding-box overlap in board coordinates.

/// Rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Hitbox {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Anything that occupies a rectangle on the board.
pub trait Bounded {
    fn hitbox(&self) -> Hitbox;
}

/// Strict overlap test. Rectangles that only share an edge do not collide.
pub fn detect_collision(a: &Hitbox, b: &Hitbox) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
