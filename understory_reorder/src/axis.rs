// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout axes and axis-relative edges.

use kurbo::{Point, Rect, Vec2};

/// Direction in which a list orders its items.
///
/// The *main* axis is the one items are laid out along; the *cross* axis is
/// perpendicular to it. All axis-relative helpers here read or write the
/// corresponding `kurbo` coordinate so call sites never branch on direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Items are stacked top to bottom; the main coordinate is `y`.
    Vertical,
    /// Items are laid out left to right; the main coordinate is `x`.
    Horizontal,
}

impl Axis {
    /// Main-axis coordinate of a point.
    #[must_use]
    pub const fn main(self, point: Point) -> f64 {
        match self {
            Self::Vertical => point.y,
            Self::Horizontal => point.x,
        }
    }

    /// Cross-axis coordinate of a point.
    #[must_use]
    pub const fn cross(self, point: Point) -> f64 {
        match self {
            Self::Vertical => point.x,
            Self::Horizontal => point.y,
        }
    }

    /// Main-axis component of a vector.
    #[must_use]
    pub const fn main_of(self, vec: Vec2) -> f64 {
        match self {
            Self::Vertical => vec.y,
            Self::Horizontal => vec.x,
        }
    }

    /// Builds a point from main and cross coordinates.
    #[must_use]
    pub const fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Vertical => Point::new(cross, main),
            Self::Horizontal => Point::new(main, cross),
        }
    }

    /// Builds a vector that only moves along the main axis.
    #[must_use]
    pub const fn vec(self, main: f64) -> Vec2 {
        match self {
            Self::Vertical => Vec2::new(0.0, main),
            Self::Horizontal => Vec2::new(main, 0.0),
        }
    }

    /// Leading edge of `rect` on the main axis (`top` or `left`).
    #[must_use]
    pub const fn start(self, rect: Rect) -> f64 {
        match self {
            Self::Vertical => rect.y0,
            Self::Horizontal => rect.x0,
        }
    }

    /// Trailing edge of `rect` on the main axis (`bottom` or `right`).
    #[must_use]
    pub const fn end(self, rect: Rect) -> f64 {
        match self {
            Self::Vertical => rect.y1,
            Self::Horizontal => rect.x1,
        }
    }

    /// Extent of `rect` along the main axis.
    #[must_use]
    pub fn size(self, rect: Rect) -> f64 {
        self.end(rect) - self.start(rect)
    }

    /// Reads the given main-axis edge of `rect`.
    #[must_use]
    pub const fn edge(self, rect: Rect, edge: Edge) -> f64 {
        match edge {
            Edge::Start => self.start(rect),
            Edge::End => self.end(rect),
        }
    }
}

/// A main-axis edge of a box, relative to the list direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The leading edge (`top` for vertical lists, `left` for horizontal ones).
    Start,
    /// The trailing edge (`bottom` for vertical lists, `right` for horizontal ones).
    End,
}

impl Edge {
    /// Edge to align on when stepping one index in a list.
    ///
    /// Moving away from the start index aligns the trailing edge in the
    /// direction of travel; moving back toward it aligns the leading edge.
    #[must_use]
    pub const fn for_move(is_moving_forward: bool, is_moving_toward_start: bool) -> Self {
        match (is_moving_forward, is_moving_toward_start) {
            (true, false) => Self::End,
            (false, false) => Self::Start,
            (true, true) => Self::Start,
            (false, true) => Self::End,
        }
    }
}
