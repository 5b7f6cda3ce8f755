// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Reorder: the geometry engine behind keyboard reordering in
//! drag-and-drop lists.
//!
//! Given a dragged item inside its home list, a direction (forward or
//! backward), and the impact of the previous move, this crate computes:
//!
//! - the next valid index, or `None` at a list boundary,
//! - where the dragged item's border box center should be rendered,
//! - a [`DragImpact`] describing which siblings are pushed aside, by how much,
//!   and whether they should animate,
//! - a scroll-jump request when the destination is off screen.
//!
//! The engine is a pure function of its inputs. It does not measure layout,
//! render, capture input, or scroll. Hosts supply measured
//! [`DraggableDimension`]s, the home [`DroppableDimension`], and the current
//! [`Viewport`]; they apply the returned center and displacements, and
//! perform any requested scroll before resolving again.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use understory_reorder::{
//!     Axis, BoxModel, DragImpact, DraggableDescriptor, DraggableDimension,
//!     DraggableDimensionMap, DroppableDimension, HomeMoveArgs, Viewport,
//!     move_to_next_index_in_home_list,
//! };
//!
//! // Three 50px rows in a vertical list.
//! let mut draggables = DraggableDimensionMap::new();
//! for index in 0..3_usize {
//!     let top = 50.0 * index as f64;
//!     let id = ["a", "b", "c"][index];
//!     let descriptor = DraggableDescriptor { id, index, droppable_id: "list" };
//!     let page = BoxModel::from_border_box(Rect::new(0.0, top, 200.0, top + 50.0));
//!     draggables.insert(id, DraggableDimension::new(descriptor, page));
//! }
//! let list = DroppableDimension::new(
//!     "list",
//!     Axis::Vertical,
//!     BoxModel::from_border_box(Rect::new(0.0, 0.0, 200.0, 150.0)),
//! );
//! let viewport = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0), Vec2::ZERO);
//!
//! let start = DragImpact::home(&draggables["a"], &list);
//! let moved = move_to_next_index_in_home_list(HomeMoveArgs {
//!     is_moving_forward: true,
//!     draggable_id: &"a",
//!     previous_page_border_box_center: Point::new(100.0, 25.0),
//!     previous_impact: &start,
//!     droppable: &list,
//!     draggables: &draggables,
//!     viewport: &viewport,
//! })
//! .unwrap()
//! .unwrap();
//!
//! assert_eq!(moved.page_border_box_center, Point::new(100.0, 75.0));
//! assert_eq!(moved.impact.destination.unwrap().index, 1);
//! assert_eq!(moved.impact.movement.displaced()[0].draggable_id, "b");
//! assert!(moved.scroll_jump_request.is_none());
//! ```
//!
//! ## Coordinates
//!
//! All geometry is expressed with [`kurbo`] types in page coordinates. A
//! droppable may scroll on its own ([`Scrollable`]); its scroll displacement
//! is applied to visibility checks, rendered centers, and scroll-jump
//! requests alike so the dragged item stays in sync with its target.
//!
//! ## Sequencing
//!
//! Each move depends on the previous [`DragImpact`]. Moves must be resolved
//! one at a time in request order; the crate keeps no history of its own.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` float support for `kurbo`.
//! - `tracing`: emits `tracing` events from the move resolver.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod dimension;
mod displacement;
mod error;
mod geometry;
mod home_list;
mod impact;
mod visibility;

pub use axis::{Axis, Edge};
pub use dimension::{
    DraggableDescriptor, DraggableDimension, DraggableDimensionMap, DroppableDescriptor,
    DroppableDimension, ScrollDetails, Scrollable, Viewport, draggables_inside_droppable,
};
pub use displacement::{displacement_for, with_first_added, with_first_removed};
pub use error::MoveError;
pub use geometry::{BoxModel, move_to_edge, with_droppable_displacement};
pub use home_list::{HomeMove, HomeMoveArgs, move_to_next_index_in_home_list};
pub use impact::{
    DisplacedBy, Displacement, DisplacementMap, DragImpact, DragMovement, DraggableLocation,
    displaced_by, displacement_map,
};
pub use visibility::{
    is_partially_visible, is_totally_visible, is_totally_visible_in_new_location,
    is_totally_visible_on_axis,
};
