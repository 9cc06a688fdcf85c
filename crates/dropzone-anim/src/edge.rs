//! Entry-edge detection for the first event of a drag session.

use dropzone_core::geometry::Size;
use glam::Vec2;

/// Distance outside the drop target at which the marker appears.
pub const ENTRY_OFFSET: f32 = 120.0;

/// A side of the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Evaluation order; earlier edges win ties.
    pub const ORDER: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Distance from `pointer` to this edge of a target with `extent`.
    pub fn distance(self, pointer: Vec2, extent: Size<f32>) -> f32 {
        match self {
            Edge::Left => pointer.x,
            Edge::Right => extent.width - pointer.x,
            Edge::Top => pointer.y,
            Edge::Bottom => extent.height - pointer.y,
        }
    }

    /// The point `offset` units outside this edge, aligned with `pointer`.
    pub fn outside_point(self, pointer: Vec2, extent: Size<f32>, offset: f32) -> Vec2 {
        match self {
            Edge::Left => Vec2::new(-offset, pointer.y),
            Edge::Right => Vec2::new(extent.width + offset, pointer.y),
            Edge::Top => Vec2::new(pointer.x, -offset),
            Edge::Bottom => Vec2::new(pointer.x, extent.height + offset),
        }
    }
}

/// The edge closest to `pointer`. Ties go to the edge listed first in [`Edge::ORDER`].
pub fn nearest_edge(pointer: Vec2, extent: Size<f32>) -> Edge {
    let mut best = Edge::Left;
    let mut best_distance = Edge::Left.distance(pointer, extent);

    for edge in &Edge::ORDER[1..] {
        let distance = edge.distance(pointer, extent);
        if distance < best_distance {
            best = *edge;
            best_distance = distance;
        }
    }

    best
}

/// Where the marker starts when a session begins with the pointer at `pointer`.
pub fn entry_position(pointer: Vec2, extent: Size<f32>) -> (Edge, Vec2) {
    let edge = nearest_edge(pointer, extent);
    (edge, edge.outside_point(pointer, extent, ENTRY_OFFSET))
}
