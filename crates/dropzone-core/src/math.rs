/// Vector math using SIMD-accelerated `glam` types.
///
/// This module re-exports everything from the [`glam`] crate. The animation
/// engine works in 2D local coordinates, so [`Vec2`] is the type used almost
/// everywhere: marker position, pointer target, spring velocity.
///
/// # Examples
///
/// ```
/// use dropzone_core::math::Vec2;
///
/// let marker = Vec2::new(-120.0, 50.0);
/// let velocity = Vec2::new(4.0, 0.0);
/// let next = marker + velocity;
/// assert_eq!(next, Vec2::new(-116.0, 50.0));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;

/// Returns true if `a` and `b` are within `epsilon` on both axes.
#[inline]
pub fn approx_eq(a: Vec2, b: Vec2, epsilon: f32) -> bool {
    (a - b).abs().max_element() <= epsilon
}
