use std::ops::Sub;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T: Copy> Rect<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect { x, y, width, height }
    }

    pub fn size(&self) -> Size<T> {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

impl<T: Copy + Sub<Output = T>> Rect<T> {
    /// Translate a point in the rect's parent space into the rect's local space.
    pub fn to_local(&self, point: Pos<T>) -> Pos<T> {
        Pos {
            x: point.x - self.x,
            y: point.y - self.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl Size<f32> {
    /// True when either side is zero, negative or NaN.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos<T> {
    pub x: T,
    pub y: T,
}

impl<T> Pos<T> {
    pub fn new(x: T, y: T) -> Self {
        Pos { x, y }
    }
}

impl From<Pos<f32>> for glam::Vec2 {
    fn from(pos: Pos<f32>) -> Self {
        glam::Vec2::new(pos.x, pos.y)
    }
}
