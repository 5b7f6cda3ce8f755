// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepping the dragged item one index within its home list.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Point, Vec2};

use crate::displacement::lookup;
use crate::{
    DragImpact, DragMovement, DraggableDimensionMap, DraggableLocation, DroppableDimension, Edge,
    MoveError, Viewport, displaced_by, draggables_inside_droppable,
    is_totally_visible_in_new_location, move_to_edge, with_droppable_displacement,
    with_first_added, with_first_removed,
};

/// Inputs to [`move_to_next_index_in_home_list`].
///
/// Everything is a read-only snapshot; the previous state of the drag is
/// passed in explicitly through `previous_impact` and
/// `previous_page_border_box_center`.
#[derive(Debug)]
pub struct HomeMoveArgs<'a, K> {
    /// Step toward the end of the list (`true`) or toward its beginning.
    pub is_moving_forward: bool,
    /// The dragged item.
    pub draggable_id: &'a K,
    /// Center of the dragged item's border box after the previous move.
    pub previous_page_border_box_center: Point,
    /// Impact produced by the previous move; must have a destination.
    pub previous_impact: &'a DragImpact<K>,
    /// The dragged item's home list.
    pub droppable: &'a DroppableDimension<K>,
    /// Dimensions of every draggable.
    pub draggables: &'a DraggableDimensionMap<K>,
    /// Current viewport.
    pub viewport: &'a Viewport,
}

/// Outcome of a resolved move.
///
/// Exactly one of two shapes is produced. When the item fits on screen at
/// its new location, `page_border_box_center` is that location and
/// `scroll_jump_request` is `None`. Otherwise the item stays at the previous
/// center and `scroll_jump_request` holds the distance the viewport must
/// scroll; the caller scrolls and resolves again once scrolling settles.
#[derive(Clone, Debug, PartialEq)]
pub struct HomeMove<K> {
    /// Where to render the dragged item's border box center.
    pub page_border_box_center: Point,
    /// Impact of the move on the list.
    pub impact: DragImpact<K>,
    /// Scroll needed before the move is visible, if any.
    pub scroll_jump_request: Option<Vec2>,
}

impl<K> HomeMove<K> {
    /// Returns `true` if the move is waiting on a viewport scroll.
    #[must_use]
    pub const fn is_scroll_jump(&self) -> bool {
        self.scroll_jump_request.is_some()
    }
}

/// Moves the dragged item one index forward or backward within its home list.
///
/// Returns `Ok(None)` when the step would leave the list; callers should
/// ignore the request. Errors indicate a caller contract violation: a
/// previous impact without destination (a cross-list move routed here), a
/// dragged item that is not in `droppable`, missing dimensions, or an
/// inconsistent previous impact.
pub fn move_to_next_index_in_home_list<K>(
    args: HomeMoveArgs<'_, K>,
) -> Result<Option<HomeMove<K>>, MoveError<K>>
where
    K: Clone + Eq + Hash + Debug,
{
    let HomeMoveArgs {
        is_moving_forward,
        draggable_id,
        previous_page_border_box_center,
        previous_impact,
        droppable,
        draggables,
        viewport,
    } = args;

    let Some(location) = previous_impact.destination.as_ref() else {
        return Err(MoveError::NoPreviousDestination);
    };

    let draggable = lookup(draggables, draggable_id)?;
    let home_id = &droppable.descriptor.id;
    if &draggable.descriptor.droppable_id != home_id {
        return Err(MoveError::NotInHomeList {
            draggable: draggable_id.clone(),
            droppable: home_id.clone(),
        });
    }
    let axis = droppable.axis;
    let inside = draggables_inside_droppable(home_id, draggables);

    let start_index = draggable.descriptor.index;
    let current_index = location.index;
    let proposed_index = if is_moving_forward {
        current_index.checked_add(1)
    } else {
        current_index.checked_sub(1)
    };
    let Some(proposed_index) = proposed_index.filter(|&index| index < inside.len()) else {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            draggable = ?draggable_id,
            current_index,
            is_moving_forward,
            len = inside.len(),
            "move rejected at list boundary"
        );
        return Ok(None);
    };

    let destination = inside[proposed_index];
    let is_moving_toward_start = if is_moving_forward {
        proposed_index <= start_index
    } else {
        proposed_index >= start_index
    };
    let edge = Edge::for_move(is_moving_forward, is_moving_toward_start);

    let new_page_border_box_center = move_to_edge(
        draggable.page.border_box,
        edge,
        destination.page.border_box,
        edge,
        axis,
    );

    // Only the main axis matters: cross-axis scrollbars may toggle mid-drag.
    let is_visible_in_new_location = is_totally_visible_in_new_location(
        draggable,
        droppable,
        new_page_border_box_center,
        viewport.frame,
        true,
    );

    let displaced = if is_moving_toward_start {
        with_first_removed(
            draggable_id,
            is_visible_in_new_location,
            previous_impact,
            droppable,
            draggables,
        )?
    } else {
        with_first_added(
            &destination.descriptor.id,
            previous_impact,
            droppable,
            draggables,
            viewport,
        )?
    };

    let is_in_front_of_start = proposed_index > start_index;
    let impact = DragImpact {
        movement: DragMovement::new(
            displaced,
            displaced_by(axis, draggable.displace_by, is_in_front_of_start),
            is_in_front_of_start,
        ),
        destination: Some(DraggableLocation {
            droppable_id: home_id.clone(),
            index: proposed_index,
        }),
        direction: Some(axis),
        group: None,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        draggable = ?draggable_id,
        proposed_index,
        ?edge,
        is_visible_in_new_location,
        displaced = impact.movement.displaced().len(),
        "resolved home list move"
    );

    if is_visible_in_new_location {
        return Ok(Some(HomeMove {
            page_border_box_center: with_droppable_displacement(
                droppable,
                new_page_border_box_center,
            ),
            impact,
            scroll_jump_request: None,
        }));
    }

    let distance = new_page_border_box_center - previous_page_border_box_center;
    Ok(Some(HomeMove {
        page_border_box_center: previous_page_border_box_center,
        impact,
        scroll_jump_request: Some(with_droppable_displacement(droppable, distance)),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use kurbo::Rect;

    use crate::{Axis, BoxModel, DraggableDescriptor, DraggableDimension};

    // Rows of the given heights stacked from y = 0 in droppable 100.
    fn column(heights: &[f64]) -> (DroppableDimension<u32>, DraggableDimensionMap<u32>) {
        let mut draggables = DraggableDimensionMap::new();
        let mut top = 0.0;
        for (index, height) in heights.iter().copied().enumerate() {
            let id = u32::try_from(index).unwrap();
            draggables.insert(
                id,
                DraggableDimension::new(
                    DraggableDescriptor {
                        id,
                        index,
                        droppable_id: 100,
                    },
                    BoxModel::from_border_box(Rect::new(0.0, top, 80.0, top + height)),
                ),
            );
            top += height;
        }
        let droppable = DroppableDimension::new(
            100,
            Axis::Vertical,
            BoxModel::from_border_box(Rect::new(0.0, 0.0, 80.0, top)),
        );
        (droppable, draggables)
    }

    fn step(
        forward: bool,
        id: u32,
        center: Point,
        impact: &DragImpact<u32>,
        droppable: &DroppableDimension<u32>,
        draggables: &DraggableDimensionMap<u32>,
        viewport: &Viewport,
    ) -> Result<Option<HomeMove<u32>>, MoveError<u32>> {
        move_to_next_index_in_home_list(HomeMoveArgs {
            is_moving_forward: forward,
            draggable_id: &id,
            previous_page_border_box_center: center,
            previous_impact: impact,
            droppable,
            draggables,
            viewport,
        })
    }

    fn big_viewport() -> Viewport {
        Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0), Vec2::ZERO)
    }

    fn displaced_ids(result: &HomeMove<u32>) -> Vec<u32> {
        result
            .impact
            .movement
            .displaced()
            .iter()
            .map(|d| d.draggable_id)
            .collect()
    }

    #[test]
    fn forward_past_differently_sized_sibling() {
        let (droppable, draggables) = column(&[20.0, 60.0, 20.0]);
        let viewport = big_viewport();
        let home = DragImpact::home(&draggables[&0], &droppable);

        let moved = step(
            true,
            0,
            Point::new(40.0, 10.0),
            &home,
            &droppable,
            &draggables,
            &viewport,
        )
        .unwrap()
        .unwrap();

        // Trailing edges meet: bottom of row 1 is 80, so the center is 70.
        assert_eq!(moved.page_border_box_center, Point::new(40.0, 70.0));
        assert_eq!(moved.scroll_jump_request, None);
        assert_eq!(displaced_ids(&moved), [1]);
        assert!(moved.impact.movement.is_in_front_of_start);
        assert_eq!(moved.impact.movement.displaced_by.value, -20.0);
        assert_eq!(moved.impact.destination.as_ref().unwrap().index, 1);
        assert_eq!(moved.impact.direction, Some(Axis::Vertical));
    }

    #[test]
    fn backward_from_middle_aligns_leading_edges() {
        let (droppable, draggables) = column(&[20.0, 30.0, 40.0]);
        let viewport = big_viewport();
        let home = DragImpact::home(&draggables[&2], &droppable);

        let moved = step(
            false,
            2,
            Point::new(40.0, 70.0),
            &home,
            &droppable,
            &draggables,
            &viewport,
        )
        .unwrap()
        .unwrap();

        // Row 1 starts at 20; a 40px row starting there is centered at 40.
        assert_eq!(moved.page_border_box_center, Point::new(40.0, 40.0));
        assert_eq!(displaced_ids(&moved), [1]);
        assert!(!moved.impact.movement.is_in_front_of_start);
        assert_eq!(moved.impact.movement.displaced_by.value, 40.0);
    }

    #[test]
    fn boundaries_are_not_errors() {
        let (droppable, draggables) = column(&[20.0, 20.0]);
        let viewport = big_viewport();

        let first = DragImpact::home(&draggables[&0], &droppable);
        let result = step(
            false,
            0,
            Point::new(40.0, 10.0),
            &first,
            &droppable,
            &draggables,
            &viewport,
        );
        assert_eq!(result, Ok(None));

        let last = DragImpact::home(&draggables[&1], &droppable);
        let result = step(
            true,
            1,
            Point::new(40.0, 30.0),
            &last,
            &droppable,
            &draggables,
            &viewport,
        );
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn missing_destination_is_rejected() {
        let (droppable, draggables) = column(&[20.0, 20.0]);
        let result = step(
            true,
            0,
            Point::new(40.0, 10.0),
            &DragImpact::none(),
            &droppable,
            &draggables,
            &big_viewport(),
        );
        assert_eq!(result, Err(MoveError::NoPreviousDestination));
    }

    #[test]
    fn unknown_draggable_is_rejected() {
        let (droppable, draggables) = column(&[20.0, 20.0]);
        let home = DragImpact::home(&draggables[&0], &droppable);
        let result = step(
            true,
            9,
            Point::new(40.0, 10.0),
            &home,
            &droppable,
            &draggables,
            &big_viewport(),
        );
        assert_eq!(result, Err(MoveError::UnknownDraggable(9)));
    }

    #[test]
    fn foreign_list_is_rejected() {
        let (_, draggables) = column(&[20.0, 20.0]);
        let other = DroppableDimension::new(
            7,
            Axis::Vertical,
            BoxModel::from_border_box(Rect::new(200.0, 0.0, 280.0, 40.0)),
        );
        // The impact claims the foreign list as home.
        let home = DragImpact::home(&draggables[&0], &other);
        let result = step(
            true,
            0,
            Point::new(40.0, 10.0),
            &home,
            &other,
            &draggables,
            &big_viewport(),
        );
        assert_eq!(
            result,
            Err(MoveError::NotInHomeList {
                draggable: 0,
                droppable: 7
            })
        );
    }

    #[test]
    fn inconsistent_previous_impact_is_rejected() {
        let (droppable, draggables) = column(&[20.0, 20.0, 20.0]);
        // Claims index 2 but displaces nobody.
        let mut impact = DragImpact::home(&draggables[&0], &droppable);
        impact.destination = Some(DraggableLocation {
            droppable_id: 100,
            index: 2,
        });
        let result = step(
            false,
            0,
            Point::new(40.0, 50.0),
            &impact,
            &droppable,
            &draggables,
            &big_viewport(),
        );
        assert_eq!(result, Err(MoveError::NothingDisplaced));
    }

    #[test]
    fn internal_scroll_adjusts_target() {
        let (droppable, draggables) = column(&[20.0, 20.0, 20.0]);
        let droppable = droppable
            .with_scrollable(crate::Scrollable {
                frame: Rect::new(0.0, 0.0, 80.0, 60.0),
                should_clip_subject: true,
                scroll: crate::ScrollDetails::at_rest(Vec2::ZERO, Vec2::new(0.0, 10.0)),
            })
            .scrolled_to(Vec2::new(0.0, 5.0));
        let home = DragImpact::home(&draggables[&0], &droppable);

        let moved = step(
            true,
            0,
            Point::new(40.0, 5.0),
            &home,
            &droppable,
            &draggables,
            &big_viewport(),
        )
        .unwrap()
        .unwrap();

        // Row 1 ends at 40 in page space and is rendered 5px higher.
        assert_eq!(moved.page_border_box_center, Point::new(40.0, 25.0));
        assert!(!moved.is_scroll_jump());
    }

    #[test]
    fn internal_scroll_adjusts_scroll_jump() {
        let (droppable, draggables) = column(&[20.0, 20.0, 20.0]);
        let droppable = droppable
            .with_scrollable(crate::Scrollable {
                frame: Rect::new(0.0, 0.0, 80.0, 60.0),
                should_clip_subject: true,
                scroll: crate::ScrollDetails::at_rest(Vec2::ZERO, Vec2::new(0.0, 10.0)),
            })
            .scrolled_to(Vec2::new(0.0, 5.0));
        let home = DragImpact::home(&draggables[&0], &droppable);
        // Row 1 renders at 15..35, past the bottom of a 30px viewport.
        let viewport = Viewport::new(Rect::new(0.0, 0.0, 800.0, 30.0), Vec2::new(0.0, 100.0));
        let previous = Point::new(40.0, 5.0);

        let moved = step(
            true,
            0,
            previous,
            &home,
            &droppable,
            &draggables,
            &viewport,
        )
        .unwrap()
        .unwrap();

        assert_eq!(moved.page_border_box_center, previous);
        let target = Point::new(40.0, 30.0);
        assert_eq!(
            moved.scroll_jump_request,
            Some((target - previous) + droppable.scroll_displacement())
        );
        assert_eq!(moved.scroll_jump_request, Some(Vec2::new(0.0, 20.0)));
        assert_eq!(moved.impact.destination.as_ref().unwrap().index, 1);
    }

    #[test]
    fn moving_toward_start_keeps_edge_table() {
        // Start at index 1, step back to 0, then forward to 1 again.
        let (droppable, draggables) = column(&[20.0, 30.0, 40.0]);
        let viewport = big_viewport();
        let home = DragImpact::home(&draggables[&1], &droppable);
        let original = draggables[&1].page.border_box.center();

        let back = step(
            false,
            1,
            original,
            &home,
            &droppable,
            &draggables,
            &viewport,
        )
        .unwrap()
        .unwrap();
        assert_eq!(back.page_border_box_center, Point::new(40.0, 15.0));

        let forward = step(
            true,
            1,
            back.page_border_box_center,
            &back.impact,
            &droppable,
            &draggables,
            &viewport,
        )
        .unwrap()
        .unwrap();
        assert_eq!(forward.page_border_box_center, original);
        assert!(forward.impact.movement.displaced().is_empty());
        assert!(!forward.impact.movement.is_in_front_of_start);
        assert_eq!(forward.impact, home);
    }
}
