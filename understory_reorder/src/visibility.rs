// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility of boxes against the viewport and a droppable's visible frame.
//!
//! A target is tested in page coordinates after being shifted by the
//! droppable's own scroll displacement. It must pass both the droppable's
//! clipped subject and the viewport frame. A droppable that is clipped away
//! entirely hides every target.

use kurbo::{Point, Rect};

use crate::{Axis, DraggableDimension, DroppableDimension};

fn is_within(lower: f64, upper: f64, value: f64) -> bool {
    lower <= value && value <= upper
}

fn is_partially_visible_through_frame(frame: Rect, subject: Rect) -> bool {
    let within_vertical = |v| is_within(frame.y0, frame.y1, v);
    let within_horizontal = |v| is_within(frame.x0, frame.x1, v);

    let partially_vertical = within_vertical(subject.y0) || within_vertical(subject.y1);
    let partially_horizontal = within_horizontal(subject.x0) || within_horizontal(subject.x1);
    if partially_vertical && partially_horizontal {
        return true;
    }

    let bigger_vertically = subject.y0 < frame.y0 && subject.y1 > frame.y1;
    let bigger_horizontally = subject.x0 < frame.x0 && subject.x1 > frame.x1;
    if bigger_vertically && bigger_horizontally {
        return true;
    }

    // Larger than the frame on one axis and overlapping on the other.
    (bigger_vertically && partially_horizontal) || (bigger_horizontally && partially_vertical)
}

fn is_totally_visible_through_frame(frame: Rect, subject: Rect) -> bool {
    is_within(frame.y0, frame.y1, subject.y0)
        && is_within(frame.y0, frame.y1, subject.y1)
        && is_within(frame.x0, frame.x1, subject.x0)
        && is_within(frame.x0, frame.x1, subject.x1)
}

fn is_totally_visible_through_frame_on_axis(axis: Axis, frame: Rect, subject: Rect) -> bool {
    let within = |v| is_within(axis.start(frame), axis.end(frame), v);
    within(axis.start(subject)) && within(axis.end(subject))
}

fn is_visible<K>(
    target: Rect,
    destination: &DroppableDimension<K>,
    viewport: Rect,
    through_frame: impl Fn(Rect, Rect) -> bool,
) -> bool {
    let Some(clipped) = destination.clipped() else {
        return false;
    };
    let target = target + destination.scroll_displacement();
    through_frame(clipped, target) && through_frame(viewport, target)
}

/// Whether any part of `target` is visible.
#[must_use]
pub fn is_partially_visible<K>(
    target: Rect,
    destination: &DroppableDimension<K>,
    viewport: Rect,
) -> bool {
    is_visible(
        target,
        destination,
        viewport,
        is_partially_visible_through_frame,
    )
}

/// Whether all of `target` is visible.
#[must_use]
pub fn is_totally_visible<K>(
    target: Rect,
    destination: &DroppableDimension<K>,
    viewport: Rect,
) -> bool {
    is_visible(
        target,
        destination,
        viewport,
        is_totally_visible_through_frame,
    )
}

/// Whether `target` is entirely visible along `axis`, ignoring the other axis.
#[must_use]
pub fn is_totally_visible_on_axis<K>(
    target: Rect,
    destination: &DroppableDimension<K>,
    viewport: Rect,
    axis: Axis,
) -> bool {
    is_visible(target, destination, viewport, |frame, subject| {
        is_totally_visible_through_frame_on_axis(axis, frame, subject)
    })
}

/// Whether `draggable` would be entirely visible with its border box centered
/// on `new_center`.
///
/// With `only_on_main_axis` set, the cross axis of `destination` is ignored:
/// cross-axis scrollbars can come and go during a drag without affecting
/// whether a move along the list is valid.
#[must_use]
pub fn is_totally_visible_in_new_location<K>(
    draggable: &DraggableDimension<K>,
    destination: &DroppableDimension<K>,
    new_center: Point,
    viewport: Rect,
    only_on_main_axis: bool,
) -> bool {
    let border_box = draggable.page.border_box;
    let shifted = border_box + (new_center - border_box.center());
    if only_on_main_axis {
        is_totally_visible_on_axis(shifted, destination, viewport, destination.axis)
    } else {
        is_totally_visible(shifted, destination, viewport)
    }
}
