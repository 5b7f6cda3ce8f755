// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag impact: where the dragged item would land and which siblings move.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Vec2;

use crate::{Axis, DraggableDimension, DroppableDimension};

/// State of one sibling that has been pushed out of the way.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Displacement<K> {
    /// Identifier of the displaced draggable.
    pub draggable_id: K,
    /// Whether the sibling is visible at all.
    pub is_visible: bool,
    /// Whether the sibling should animate into its displaced position.
    ///
    /// Siblings that snap (for example because they are off screen) have this unset.
    pub should_animate: bool,
}

/// Lookup from draggable id to its displacement.
pub type DisplacementMap<K> = HashMap<K, Displacement<K>>;

/// Builds a lookup from an ordered displacement sequence.
#[must_use]
pub fn displacement_map<K>(displaced: &[Displacement<K>]) -> DisplacementMap<K>
where
    K: Clone + Eq + Hash,
{
    displaced
        .iter()
        .map(|displacement| (displacement.draggable_id.clone(), displacement.clone()))
        .collect()
}

/// How far displaced siblings move, signed along the main axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplacedBy {
    /// Signed main-axis distance.
    pub value: f64,
    /// `value` as a vector on the main axis.
    pub point: Vec2,
}

/// Computes how far siblings move to make room for the dragged item.
///
/// The magnitude is the dragged item's extent on `axis` (margins included).
/// Siblings in front of the start move backward, siblings behind it move forward.
#[must_use]
pub fn displaced_by(axis: Axis, displace_by: Vec2, is_in_front_of_start: bool) -> DisplacedBy {
    let extent = axis.main_of(displace_by);
    debug_assert!(extent >= 0.0, "displace_by must not be negative");
    let value = if is_in_front_of_start { -extent } else { extent };
    DisplacedBy {
        value,
        point: axis.vec(value),
    }
}

/// Displaced siblings and how far they move.
///
/// The ordered sequence is the source of truth, nearest sibling first; the
/// lookup map is always rebuilt from it.
#[derive(Clone, Debug)]
pub struct DragMovement<K> {
    /// How far each displaced sibling moves.
    pub displaced_by: DisplacedBy,
    /// Whether the dragged item sits past its start index.
    pub is_in_front_of_start: bool,
    displaced: Vec<Displacement<K>>,
    map: DisplacementMap<K>,
}

impl<K> DragMovement<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a movement, deriving its lookup map from `displaced`.
    #[must_use]
    pub fn new(
        displaced: Vec<Displacement<K>>,
        displaced_by: DisplacedBy,
        is_in_front_of_start: bool,
    ) -> Self {
        let map = displacement_map(&displaced);
        Self {
            displaced_by,
            is_in_front_of_start,
            displaced,
            map,
        }
    }

    /// A movement with nothing displaced.
    #[must_use]
    pub fn empty(displaced_by: DisplacedBy) -> Self {
        Self::new(Vec::new(), displaced_by, false)
    }

    /// Displaced siblings, nearest to the dragged item first.
    #[must_use]
    pub fn displaced(&self) -> &[Displacement<K>] {
        &self.displaced
    }

    /// Lookup over [`Self::displaced`].
    #[must_use]
    pub fn map(&self) -> &DisplacementMap<K> {
        &self.map
    }

    /// Displacement of `id`, if it is displaced.
    #[must_use]
    pub fn get(&self, id: &K) -> Option<&Displacement<K>> {
        self.map.get(id)
    }
}

impl<K: PartialEq> PartialEq for DragMovement<K> {
    fn eq(&self, other: &Self) -> bool {
        // The map is derived from the sequence.
        self.displaced_by == other.displaced_by
            && self.is_in_front_of_start == other.is_in_front_of_start
            && self.displaced == other.displaced
    }
}

/// A position within a droppable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DraggableLocation<K> {
    /// Identifier of the droppable.
    pub droppable_id: K,
    /// Index within the droppable.
    pub index: usize,
}

/// Effect of the current drag position on the list layout.
///
/// An impact is never updated in place: each resolved move produces a fresh
/// impact derived from the previous one.
#[derive(Clone, Debug, PartialEq)]
pub struct DragImpact<K> {
    /// Displaced siblings.
    pub movement: DragMovement<K>,
    /// Where the dragged item would land, if anywhere.
    pub destination: Option<DraggableLocation<K>>,
    /// Axis of the destination list.
    pub direction: Option<Axis>,
    /// Reserved for grouping; always `None` for in-list moves.
    pub group: Option<K>,
}

impl<K> DragImpact<K>
where
    K: Clone + Eq + Hash,
{
    /// An impact with no destination and nothing displaced.
    #[must_use]
    pub fn none() -> Self {
        Self {
            movement: DragMovement::empty(DisplacedBy {
                value: 0.0,
                point: Vec2::ZERO,
            }),
            destination: None,
            direction: None,
            group: None,
        }
    }

    /// The impact at drag start: the item sits at its own index in its home list.
    #[must_use]
    pub fn home(draggable: &DraggableDimension<K>, home: &DroppableDimension<K>) -> Self {
        Self {
            movement: DragMovement::empty(displaced_by(home.axis, draggable.displace_by, false)),
            destination: Some(DraggableLocation {
                droppable_id: home.descriptor.id.clone(),
                index: draggable.descriptor.index,
            }),
            direction: Some(home.axis),
            group: None,
        }
    }
}
