// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental updates to the displaced-sibling sequence.
//!
//! Stepping one index either pushes one more sibling aside (moving away from
//! the start) or lets the nearest displaced sibling return (moving back toward
//! it). The two operations carry different visibility and animation rules and
//! are kept separate. Both return a fresh sequence; callers rebuild the lookup
//! map from it with [`DragMovement::new`](crate::DragMovement::new).

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use kurbo::Rect;

use crate::{
    Displacement, DragImpact, DraggableDimension, DraggableDimensionMap, DroppableDimension,
    MoveError, Viewport, is_partially_visible,
};

pub(crate) fn lookup<'a, K>(
    draggables: &'a DraggableDimensionMap<K>,
    id: &K,
) -> Result<&'a DraggableDimension<K>, MoveError<K>>
where
    K: Clone + Eq + Hash + Debug,
{
    draggables
        .get(id)
        .ok_or_else(|| MoveError::UnknownDraggable(id.clone()))
}

/// Displacement of `draggable` when pushed aside inside `destination`.
///
/// The sibling is visible when any part of its margin box is. Invisible
/// siblings never animate; a sibling displaced for the first time animates;
/// otherwise the previous animation flag is kept.
#[must_use]
pub fn displacement_for<K>(
    draggable: &DraggableDimension<K>,
    destination: &DroppableDimension<K>,
    previous_impact: &DragImpact<K>,
    viewport: Rect,
) -> Displacement<K>
where
    K: Clone + Eq + Hash,
{
    let id = &draggable.descriptor.id;
    let is_visible = is_partially_visible(draggable.page.margin_box, destination, viewport);
    let should_animate = is_visible
        && previous_impact
            .movement
            .get(id)
            .is_none_or(|previous| previous.should_animate);
    Displacement {
        draggable_id: id.clone(),
        is_visible,
        should_animate,
    }
}

/// Pushes `add` aside in front of the previously displaced siblings.
///
/// Visibility of every sibling is recomputed against `viewport`.
pub fn with_first_added<K>(
    add: &K,
    previous_impact: &DragImpact<K>,
    droppable: &DroppableDimension<K>,
    draggables: &DraggableDimensionMap<K>,
    viewport: &Viewport,
) -> Result<Vec<Displacement<K>>, MoveError<K>>
where
    K: Clone + Eq + Hash + Debug,
{
    core::iter::once(add)
        .chain(
            previous_impact
                .movement
                .displaced()
                .iter()
                .map(|displacement| &displacement.draggable_id),
        )
        .map(|id| -> Result<_, MoveError<K>> {
            let draggable = lookup(draggables, id)?;
            Ok(displacement_for(
                draggable,
                droppable,
                previous_impact,
                viewport.frame,
            ))
        })
        .collect()
}

/// Restores the displaced sibling nearest to the dragged item.
///
/// When the dragged item will not be visible at its new location a scroll
/// jump follows. The remaining nearest siblings are then forced visible,
/// without animation, until the combined main-axis size of the restored
/// sibling and the dragged item is used up, so that they are already in place
/// once scrolled into view.
pub fn with_first_removed<K>(
    dragging: &K,
    is_visible_in_new_location: bool,
    previous_impact: &DragImpact<K>,
    droppable: &DroppableDimension<K>,
    draggables: &DraggableDimensionMap<K>,
) -> Result<Vec<Displacement<K>>, MoveError<K>>
where
    K: Clone + Eq + Hash + Debug,
{
    let Some((restored, remaining)) = previous_impact.movement.displaced().split_first() else {
        return Err(MoveError::NothingDisplaced);
    };
    if remaining.is_empty() || is_visible_in_new_location {
        return Ok(remaining.to_vec());
    }

    let axis = droppable.axis;
    let extent_of = |id: &K| -> Result<f64, MoveError<K>> {
        Ok(axis.size(lookup(draggables, id)?.page.margin_box))
    };
    let mut buffer = extent_of(&restored.draggable_id)? + extent_of(dragging)?;

    remaining
        .iter()
        .map(|displacement| -> Result<_, MoveError<K>> {
            if buffer <= 0.0 {
                return Ok(displacement.clone());
            }
            buffer -= extent_of(&displacement.draggable_id)?;
            Ok(force_visible(displacement))
        })
        .collect()
}

fn force_visible<K: Clone>(displacement: &Displacement<K>) -> Displacement<K> {
    Displacement {
        draggable_id: displacement.draggable_id.clone(),
        is_visible: true,
        should_animate: false,
    }
}
