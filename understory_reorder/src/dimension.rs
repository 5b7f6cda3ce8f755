// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measured dimensions of draggables, droppables, and the viewport.
//!
//! These are snapshots supplied by a host measurement layer. The engine never
//! measures layout itself and never mutates a snapshot: scrolling produces a
//! new value via [`Viewport::scrolled_to`] or [`DroppableDimension::scrolled_to`].

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Rect, Vec2};

use crate::{Axis, BoxModel};

/// Lookup from draggable id to its measured dimension.
pub type DraggableDimensionMap<K> = HashMap<K, DraggableDimension<K>>;

/// Identity and list position of a draggable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DraggableDescriptor<K> {
    /// Identifier of the draggable.
    pub id: K,
    /// Index of the draggable within its home droppable at drag start.
    pub index: usize,
    /// Identifier of the droppable the draggable belongs to.
    pub droppable_id: K,
}

/// A draggable with its page geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct DraggableDimension<K> {
    /// Identity and home location.
    pub descriptor: DraggableDescriptor<K>,
    /// Box model in page coordinates.
    pub page: BoxModel,
    /// Space the draggable occupies; siblings move by this much to make room for it.
    pub displace_by: Vec2,
}

impl<K> DraggableDimension<K> {
    /// Creates a dimension whose `displace_by` is the size of its margin box.
    #[must_use]
    pub fn new(descriptor: DraggableDescriptor<K>, page: BoxModel) -> Self {
        let size = page.margin_box.size();
        Self {
            descriptor,
            page,
            displace_by: Vec2::new(size.width, size.height),
        }
    }
}

/// Identity of a droppable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DroppableDescriptor<K> {
    /// Identifier of the droppable.
    pub id: K,
}

/// Scroll offsets of a scroll container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollDetails {
    /// Offset when the drag started.
    pub initial: Vec2,
    /// Offset now.
    pub current: Vec2,
    /// Largest reachable offset on each axis.
    pub max: Vec2,
}

impl ScrollDetails {
    /// A scroll state that has not moved since the drag started.
    #[must_use]
    pub const fn at_rest(offset: Vec2, max: Vec2) -> Self {
        Self {
            initial: offset,
            current: offset,
            max,
        }
    }

    /// Amount scrolled since the drag started.
    #[must_use]
    pub fn diff(&self) -> Vec2 {
        self.current - self.initial
    }

    /// How far content has visually moved because of scrolling (`-diff`).
    #[must_use]
    pub fn displacement(&self) -> Vec2 {
        -self.diff()
    }

    /// Clamps `offset` to `[0, max]` on both axes.
    #[must_use]
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            offset.x.clamp(0.0, self.max.x.max(0.0)),
            offset.y.clamp(0.0, self.max.y.max(0.0)),
        )
    }

    fn with_current(self, current: Vec2) -> Self {
        Self { current, ..self }
    }
}

/// The closest scroll container of a droppable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrollable {
    /// Visible frame of the container in page coordinates.
    pub frame: Rect,
    /// Whether the droppable's subject is clipped to `frame`.
    pub should_clip_subject: bool,
    /// Internal scroll of the container.
    pub scroll: ScrollDetails,
}

/// A list that can receive draggables.
#[derive(Clone, Debug, PartialEq)]
pub struct DroppableDimension<K> {
    /// Identity.
    pub descriptor: DroppableDescriptor<K>,
    /// Ordering axis of the list.
    pub axis: Axis,
    /// Box model in page coordinates, as measured at drag start.
    pub page: BoxModel,
    /// Scroll container of the list, if the list scrolls on its own.
    pub closest_scrollable: Option<Scrollable>,
}

impl<K> DroppableDimension<K> {
    /// Creates a droppable that does not scroll on its own.
    #[must_use]
    pub fn new(id: K, axis: Axis, page: BoxModel) -> Self {
        Self {
            descriptor: DroppableDescriptor { id },
            axis,
            page,
            closest_scrollable: None,
        }
    }

    /// Attaches a scroll container.
    #[must_use]
    pub fn with_scrollable(mut self, scrollable: Scrollable) -> Self {
        self.closest_scrollable = Some(scrollable);
        self
    }

    /// Visual displacement caused by the droppable's own scroll since drag start.
    #[must_use]
    pub fn scroll_displacement(&self) -> Vec2 {
        self.closest_scrollable
            .as_ref()
            .map_or(Vec2::ZERO, |scrollable| scrollable.scroll.displacement())
    }

    /// Visible part of the droppable in page coordinates.
    ///
    /// The margin box is shifted by the internal scroll displacement and,
    /// when the scroll container clips, intersected with its frame. Returns
    /// `None` when nothing of the droppable remains visible.
    #[must_use]
    pub fn clipped(&self) -> Option<Rect> {
        let subject = self.page.margin_box + self.scroll_displacement();
        let clipped = match &self.closest_scrollable {
            Some(scrollable) if scrollable.should_clip_subject => {
                subject.intersect(scrollable.frame)
            }
            _ => subject,
        };
        (clipped.width() > 0.0 && clipped.height() > 0.0).then_some(clipped)
    }

    /// Returns a copy with the internal scroll moved to `offset`.
    ///
    /// Droppables without a scroll container are returned unchanged.
    #[must_use]
    pub fn scrolled_to(&self, offset: Vec2) -> Self
    where
        K: Clone,
    {
        let mut scrolled = self.clone();
        if let Some(scrollable) = scrolled.closest_scrollable.as_mut() {
            scrollable.scroll = scrollable.scroll.with_current(offset);
        }
        scrolled
    }
}

/// The visible window and its scroll state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Visible rectangle in page coordinates.
    pub frame: Rect,
    /// Window scroll.
    pub scroll: ScrollDetails,
}

impl Viewport {
    /// Creates a viewport whose scroll offset is the frame origin.
    #[must_use]
    pub fn new(frame: Rect, max_scroll: Vec2) -> Self {
        Self {
            frame,
            scroll: ScrollDetails::at_rest(frame.origin().to_vec2(), max_scroll),
        }
    }

    /// Returns a viewport scrolled to `offset`, moving the frame with it.
    #[must_use]
    pub fn scrolled_to(&self, offset: Vec2) -> Self {
        Self {
            frame: Rect::from_origin_size(offset.to_point(), self.frame.size()),
            scroll: self.scroll.with_current(offset),
        }
    }

    /// Applies a scroll-jump request, clamped to the scrollable range.
    #[must_use]
    pub fn scrolled_by(&self, delta: Vec2) -> Self {
        self.scrolled_to(self.scroll.clamp(self.scroll.current + delta))
    }
}

/// Draggables belonging to `droppable_id`, in list order.
#[must_use]
pub fn draggables_inside_droppable<'a, K>(
    droppable_id: &K,
    draggables: &'a DraggableDimensionMap<K>,
) -> Vec<&'a DraggableDimension<K>>
where
    K: Eq + Hash,
{
    let mut inside: Vec<_> = draggables
        .values()
        .filter(|draggable| &draggable.descriptor.droppable_id == droppable_id)
        .collect();
    inside.sort_by_key(|draggable| draggable.descriptor.index);
    inside
}
