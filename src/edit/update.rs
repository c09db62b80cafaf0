//! Cell updates.
//!
//! A cell update replaces one field of one row and recomputes the row's
//! dirty flag over every editable column. The update itself is either a
//! literal value or a function of the previous cell value.

use std::fmt;

use crate::edit::column::EqualityByKey;
use crate::edit::status::EditableRow;
use crate::lens::Field;

/// A new value for a cell, or a transform from the previous value.
pub enum CellUpdate<'a, T> {
    Set(T),
    With(Box<dyn FnOnce(&T) -> T + 'a>),
}

impl<'a, T> CellUpdate<'a, T> {
    /// An update computed from the previous cell value.
    pub fn with(f: impl FnOnce(&T) -> T + 'a) -> CellUpdate<'a, T> {
        return CellUpdate::With(Box::new(f));
    }

    /// Resolve the update against the previous value.
    pub fn apply(self, previous: &T) -> T {
        return match self {
            CellUpdate::Set(value) => value,
            CellUpdate::With(f) => f(previous),
        };
    }
}

impl<'a, T> From<T> for CellUpdate<'a, T> {
    fn from(value: T) -> Self {
        return CellUpdate::Set(value);
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for CellUpdate<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            CellUpdate::Set(value) => f.debug_tuple("Set").field(value).finish(),
            CellUpdate::With(_) => write!(f, "With(..)"),
        };
    }
}

/// Apply `update` to `field` of `previous`, returning the replacement row.
///
/// Pristine, `is_new` and `is_removed` carry over; `is_dirty` is recomputed
/// against pristine across all editable columns in `equality`.
pub fn apply_row_cell_update<R: Clone, T>(
    equality: &EqualityByKey<R>,
    previous: &EditableRow<R>,
    field: &Field<R, T>,
    update: CellUpdate<'_, T>,
) -> EditableRow<R> {
    let value = update.apply(field.get(previous.data()));
    let data = field.replaced(previous.data(), value);

    let mut status = previous.status().clone();
    status.is_dirty = equality.differs(&data, &status.pristine);

    return EditableRow::from_parts(data, status);
}
