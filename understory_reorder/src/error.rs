// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by the move resolver.

use core::fmt::Debug;

/// Caller contract violations reported by the move resolver.
///
/// Reaching a list boundary is not an error; it is reported as `Ok(None)`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError<K: Debug> {
    /// The previous impact has no destination, so the drag is not over a list.
    #[error("cannot move to the next index in the home list without a previous destination")]
    NoPreviousDestination,
    /// A draggable id is missing from the supplied dimensions.
    #[error("no dimension for draggable {0:?}")]
    UnknownDraggable(K),
    /// The dragged item does not belong to the supplied droppable.
    #[error("draggable {draggable:?} is not in droppable {droppable:?}")]
    NotInHomeList {
        /// The dragged item.
        draggable: K,
        /// The droppable it was resolved against.
        droppable: K,
    },
    /// Moving back toward the start with no displaced sibling to restore.
    #[error("cannot restore a displaced sibling: nothing is displaced")]
    NothingDisplaced,
}
