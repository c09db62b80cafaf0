//! Per-row edit metadata and the editable row wrapper.
//!
//! An `EditableRow<R>` pairs the caller's row with an `EditStatus<R>`. The
//! status holds the pristine snapshot (the last committed baseline) and three
//! flags:
//!
//! - `is_dirty`: some editable cell differs from pristine under its column's
//!   equality. Recomputed by cell updates only.
//! - `is_new`: inserted and not yet committed.
//! - `is_removed`: removed and not yet committed.
//!
//! The operations never produce a row that is both new and removed: removing
//! a new row drops it. The raw `is_dirty` flag is not forced on for new or
//! removed rows; `EditStatus::has_changes` is the derived predicate that
//! folds all three flags together, and it is what the `dirty` view uses.

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edit::column::EqualityByKey;
use crate::lens::Field;

/// Edit metadata attached to one row.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditStatus<R> {
    /// The last committed baseline of the row.
    pub pristine: R,
    /// Some editable cell differs from `pristine`.
    pub is_dirty: bool,
    /// Inserted and not yet committed.
    pub is_new: bool,
    /// Removed and not yet committed.
    pub is_removed: bool,
}

/// A coarse, derived classification of an `EditStatus`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowState {
    Pristine,
    Modified,
    New,
    Removed,
}

impl<R> EditStatus<R> {
    /// A clean status for a row whose baseline is `pristine`.
    pub fn clean(pristine: R) -> EditStatus<R> {
        return EditStatus {
            pristine,
            is_dirty: false,
            is_new: false,
            is_removed: false,
        };
    }

    /// True if the row has any pending change: edited cells, an uncommitted
    /// insert, or an uncommitted removal.
    #[inline]
    pub fn has_changes(&self) -> bool {
        return self.is_dirty || self.is_new || self.is_removed;
    }

    /// Classify the status. Removal takes precedence over newness, newness
    /// over cell edits.
    pub fn state(&self) -> RowState {
        if self.is_removed {
            return RowState::Removed;
        }
        if self.is_new {
            return RowState::New;
        }
        if self.is_dirty {
            return RowState::Modified;
        }
        return RowState::Pristine;
    }

    /// Space-separated style classes for the set flags, e.g. `"is-dirty is-new"`.
    pub fn class_name(&self) -> String {
        let flags = [
            (self.is_dirty, "is-dirty"),
            (self.is_new, "is-new"),
            (self.is_removed, "is-removed"),
        ];
        return flags
            .iter()
            .filter(|(set, _)| *set)
            .map(|(_, class)| *class)
            .collect::<Vec<_>>()
            .join(" ");
    }
}

/// Edit status of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellEditStatus<'a, T> {
    pub pristine: &'a T,
    pub current: &'a T,
    pub is_dirty: bool,
}

/// A row together with its edit status.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditableRow<R> {
    data: R,
    status: EditStatus<R>,
}

impl<R: Clone> EditableRow<R> {
    /// Wrap `row` as a fresh baseline: pristine is the row itself, all flags
    /// false.
    pub fn new(row: R) -> EditableRow<R> {
        let pristine = row.clone();
        return EditableRow {
            data: row,
            status: EditStatus::clean(pristine),
        };
    }

    /// Wrap `row` as an uncommitted insert.
    pub fn inserted(row: R) -> EditableRow<R> {
        let mut editable = EditableRow::new(row);
        editable.status.is_new = true;
        return editable;
    }

    /// Rebuild this row from its pristine snapshot, discarding edits and flags.
    pub fn reverted(&self) -> EditableRow<R> {
        return EditableRow::new(self.status.pristine.clone());
    }

    /// Rebuild this row with its current data as the new baseline.
    pub fn committed(&self) -> EditableRow<R> {
        return EditableRow::new(self.data.clone());
    }

    /// A copy of this row flagged as removed.
    pub fn removed(&self) -> EditableRow<R> {
        let mut next = self.clone();
        next.status.is_removed = true;
        return next;
    }
}

impl<R> EditableRow<R> {
    /// Assemble a row from parts. Used by the cell update engine, which
    /// carries flags and pristine over unchanged.
    pub(crate) fn from_parts(data: R, status: EditStatus<R>) -> EditableRow<R> {
        return EditableRow { data, status };
    }

    /// The current field values.
    #[inline]
    pub fn data(&self) -> &R {
        return &self.data;
    }

    /// The edit status.
    #[inline]
    pub fn status(&self) -> &EditStatus<R> {
        return &self.status;
    }

    /// The pristine snapshot.
    #[inline]
    pub fn pristine(&self) -> &R {
        return &self.status.pristine;
    }

    /// The raw dirty flag. See `EditStatus::has_changes` for the derived one.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        return self.status.is_dirty;
    }

    #[inline]
    pub fn is_new(&self) -> bool {
        return self.status.is_new;
    }

    #[inline]
    pub fn is_removed(&self) -> bool {
        return self.status.is_removed;
    }

    /// Strip the edit status, returning the current row.
    pub fn into_data(self) -> R {
        return self.data;
    }

    /// Split into current row and status.
    pub fn into_parts(self) -> (R, EditStatus<R>) {
        return (self.data, self.status);
    }

    /// Per-cell status for `field`, using the equality configured for its
    /// column. Fields without an editable column are never dirty.
    pub fn cell<'a, T>(&'a self, field: &Field<R, T>, equality: &EqualityByKey<R>) -> CellEditStatus<'a, T> {
        let is_dirty = match equality.get(field.key()) {
            Some(eq) => !eq.equal(&self.status.pristine, &self.data),
            None => false,
        };
        return CellEditStatus {
            pristine: field.get(&self.status.pristine),
            current: field.get(&self.data),
            is_dirty,
        };
    }

    /// Keys of the editable columns whose cell differs from pristine, in
    /// column order.
    pub fn dirty_columns(&self, equality: &EqualityByKey<R>) -> SmallVec<[&'static str; 8]> {
        return equality
            .iter()
            .filter(|(_, eq)| !eq.equal(&self.status.pristine, &self.data))
            .map(|(key, _)| key)
            .collect();
    }
}
