//! Arena bounds and the renderer's visible window
//!
//! The arena is a fixed rectangle of square tiles anchored at the origin.
//! The viewport is the slice of it the renderer currently shows; it drives
//! monster catch-up speed and where new monsters appear.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fixed-size rectangular world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    width: u32,
    height: u32,
    unit: f32,
}

impl Arena {
    /// `width` x `height` tiles of `unit` world units each
    pub fn new(width: u32, height: u32, unit: f32) -> Self {
        Self {
            width,
            height,
            unit,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn unit(&self) -> f32 {
        self.unit
    }

    /// Size of the world in world units
    #[inline]
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width as f32 * self.unit, self.height as f32 * self.unit)
    }

    /// Half-open containment: `[0, w) x [0, h)`
    pub fn contains(&self, point: Vec2) -> bool {
        let extent = self.extent();
        point.x >= 0.0 && point.y >= 0.0 && point.x < extent.x && point.y < extent.y
    }

    /// Clamp the anchor of a `size`-wide square so the square stays inside
    pub fn clamp_box(&self, pos: Vec2, size: f32) -> Vec2 {
        let max = (self.extent() - Vec2::splat(size)).max(Vec2::ZERO);
        pos.clamp(Vec2::ZERO, max)
    }
}

/// One of the four sides of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

/// Axis-aligned window onto the arena, in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Top-left corner
    pub origin: Vec2,
    pub size: Vec2,
}

impl Viewport {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Camera centred on `focus`, pushed back inside the arena near its walls
    pub fn follow(arena: &Arena, focus: Vec2, size: Vec2) -> Self {
        let max_origin = (arena.extent() - size).max(Vec2::ZERO);
        let origin = (focus - size / 2.0).clamp(Vec2::ZERO, max_origin);
        Self { origin, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// True if a circle is at least partly on screen (edges inclusive)
    pub fn contains_circle(&self, center: Vec2, radius: f32) -> bool {
        let min = self.min() - Vec2::splat(radius);
        let max = self.max() + Vec2::splat(radius);
        center.x >= min.x && center.x <= max.x && center.y >= min.y && center.y <= max.y
    }

    /// Point `margin` units outside `edge`, at fraction `t` (0..1) along it
    pub fn point_outside(&self, edge: Edge, t: f32, margin: f32) -> Vec2 {
        let min = self.min();
        let max = self.max();
        match edge {
            Edge::Top => Vec2::new(min.x + t * self.size.x, min.y - margin),
            Edge::Right => Vec2::new(max.x + margin, min.y + t * self.size.y),
            Edge::Bottom => Vec2::new(min.x + t * self.size.x, max.y + margin),
            Edge::Left => Vec2::new(min.x - margin, min.y + t * self.size.y),
        }
    }
}
