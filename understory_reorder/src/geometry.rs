// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box model and edge alignment primitives.

use core::ops::Add;

use kurbo::{Insets, Point, Rect, Vec2};

use crate::{Axis, DroppableDimension, Edge};

/// The four nested rectangles of a measured box.
///
/// Rectangles are expected to be in a single coordinate space (usually page
/// coordinates). A `BoxModel` is an immutable snapshot of a measurement; use
/// [`BoxModel::offset`] to derive a translated copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxModel {
    /// Border box: the visual box, including border and padding.
    pub border_box: Rect,
    /// Margin box: the border box expanded by the margins.
    pub margin_box: Rect,
    /// Padding box: the border box shrunk by the border widths.
    pub padding_box: Rect,
    /// Content box: the padding box shrunk by the padding.
    pub content_box: Rect,
    /// Margin widths.
    pub margin: Insets,
    /// Border widths.
    pub border: Insets,
    /// Padding widths.
    pub padding: Insets,
}

impl BoxModel {
    /// Derives the full box model from a border box and its spacing.
    #[must_use]
    pub fn new(border_box: Rect, margin: Insets, border: Insets, padding: Insets) -> Self {
        let padding_box = border_box - border;
        Self {
            border_box,
            margin_box: border_box + margin,
            padding_box,
            content_box: padding_box - padding,
            margin,
            border,
            padding,
        }
    }

    /// A box with no margin, border, or padding.
    #[must_use]
    pub fn from_border_box(border_box: Rect) -> Self {
        Self::new(border_box, Insets::ZERO, Insets::ZERO, Insets::ZERO)
    }

    /// Translates every rectangle by `delta`; spacing is unchanged.
    #[must_use]
    pub fn offset(&self, delta: Vec2) -> Self {
        Self {
            border_box: self.border_box + delta,
            margin_box: self.margin_box + delta,
            padding_box: self.padding_box + delta,
            content_box: self.content_box + delta,
            ..*self
        }
    }
}

/// Computes the center `source` must move to so that its `source_edge`
/// coincides with `destination_edge` of `destination` along `axis`.
///
/// Only the main-axis coordinate changes; the cross-axis coordinate of the
/// source center is kept.
#[must_use]
pub fn move_to_edge(
    source: Rect,
    source_edge: Edge,
    destination: Rect,
    destination_edge: Edge,
    axis: Axis,
) -> Point {
    let center = source.center();
    let center_from_edge = axis.main(center) - axis.edge(source, source_edge);
    let main = axis.edge(destination, destination_edge) + center_from_edge;
    axis.point(main, axis.cross(center))
}

/// Shifts a page position or page delta by the droppable's own scroll
/// displacement.
///
/// Final positions and scroll-jump vectors both go through this so that a
/// scrolled list never desynchronizes the dragged item from its target.
#[must_use]
pub fn with_droppable_displacement<K, T>(droppable: &DroppableDimension<K>, value: T) -> T
where
    T: Add<Vec2, Output = T>,
{
    value + droppable.scroll_displacement()
}
