//! The editable row collection and its lifecycle operations.
//!
//! Every operation here is a pure function of the previous collection and
//! its arguments: it returns a new `Rows` and leaves `self` untouched. Rows
//! are held behind `Rc`, so rows an operation does not touch are shared
//! between the old and new collection and stay pointer-identical.
//!
//! Batch operations take plain rows as targets. Their identity values are
//! collected into a hash set first, then the collection is mapped once:
//!
//! | operation | new row   | removed row        | other row          |
//! |-----------|-----------|--------------------|--------------------|
//! | remove    | dropped   | stays removed      | flagged removed    |
//! | revert    | dropped   | rebuilt (pristine) | rebuilt (pristine) |
//! | commit    | rebuilt   | dropped            | rebuilt (current)  |
//!
//! Targets with no matching row are ignored.

use std::hash::Hash;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::edit::column::EqualityByKey;
use crate::edit::status::EditableRow;
use crate::edit::update::{apply_row_cell_update, CellUpdate};
use crate::edit::view::RowViews;
use crate::lens::Field;

/// An ordered collection of editable rows.
#[derive(Debug)]
pub struct Rows<R> {
    rows: Vec<Rc<EditableRow<R>>>,
}

impl<R> Clone for Rows<R> {
    fn clone(&self) -> Self {
        return Rows { rows: self.rows.clone() };
    }
}

impl<R> Default for Rows<R> {
    fn default() -> Self {
        return Rows { rows: Vec::new() };
    }
}

impl<R: PartialEq> PartialEq for Rows<R> {
    fn eq(&self, other: &Self) -> bool {
        return self.rows == other.rows;
    }
}

impl<R> FromIterator<EditableRow<R>> for Rows<R> {
    fn from_iter<It: IntoIterator<Item = EditableRow<R>>>(iter: It) -> Self {
        return Rows { rows: iter.into_iter().map(Rc::new).collect() };
    }
}

impl<'a, R> IntoIterator for &'a Rows<R> {
    type Item = &'a Rc<EditableRow<R>>;
    type IntoIter = std::slice::Iter<'a, Rc<EditableRow<R>>>;

    fn into_iter(self) -> Self::IntoIter {
        return self.rows.iter();
    }
}

/// Collect the identity values of `rows`.
pub fn row_id_set<'a, R: 'a, I>(row_id: &Field<R, I>, rows: impl IntoIterator<Item = &'a R>) -> FxHashSet<I>
where
    I: Clone + Eq + Hash,
{
    return rows.into_iter().map(|row| row_id.get(row).clone()).collect();
}

impl<R> Rows<R> {
    pub fn new() -> Rows<R> {
        return Rows::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        return self.rows.len();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.rows.is_empty();
    }

    pub fn get(&self, index: usize) -> Option<&Rc<EditableRow<R>>> {
        return self.rows.get(index);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rc<EditableRow<R>>> {
        return self.rows.iter();
    }

    pub fn as_slice(&self) -> &[Rc<EditableRow<R>>] {
        return &self.rows;
    }

    /// The first row whose identity equals `id`.
    pub fn find<I: Eq>(&self, row_id: &Field<R, I>, id: &I) -> Option<&Rc<EditableRow<R>>> {
        return self.rows.iter().find(|row| row_id.get(row.data()) == id);
    }

    pub fn contains_id<I: Eq>(&self, row_id: &Field<R, I>, id: &I) -> bool {
        return self.find(row_id, id).is_some();
    }

    /// True if both collections hold the very same row allocations in the
    /// same order.
    pub fn ptr_eq(&self, other: &Rows<R>) -> bool {
        return self.rows.len() == other.rows.len()
            && self.rows.iter().zip(&other.rows).all(|(a, b)| Rc::ptr_eq(a, b));
    }

    /// Keep, replace or drop each row with `f`, sharing untouched rows.
    fn filter_map(&self, mut f: impl FnMut(&Rc<EditableRow<R>>) -> Option<Rc<EditableRow<R>>>) -> Rows<R> {
        return Rows { rows: self.rows.iter().filter_map(|row| f(row)).collect() };
    }
}

impl<R: Clone> Rows<R> {
    /// A fresh collection: every row is its own baseline, all flags false.
    /// Discards whatever was tracked before.
    pub fn initialize(rows: impl IntoIterator<Item = R>) -> Rows<R> {
        return rows.into_iter().map(EditableRow::new).collect();
    }

    /// Append `rows` as uncommitted inserts.
    ///
    /// Identities are not checked against the collection; see
    /// `TableEditor::try_insert_rows` for the strict variant.
    pub fn insert(&self, rows: &[R]) -> Rows<R> {
        let mut next = self.rows.clone();
        next.extend(rows.iter().cloned().map(|row| Rc::new(EditableRow::inserted(row))));
        return Rows { rows: next };
    }

    /// Flag `targets` as removed. New rows are dropped instead.
    pub fn remove<I>(&self, row_id: &Field<R, I>, targets: &[R]) -> Rows<R>
    where
        I: Clone + Eq + Hash,
    {
        return self.remove_ids(row_id, &row_id_set(row_id, targets));
    }

    /// Restore `targets` to pristine, clearing every flag. New rows are
    /// dropped. A removed row is un-removed and loses its cell edits in the
    /// same step.
    pub fn revert<I>(&self, row_id: &Field<R, I>, targets: &[R]) -> Rows<R>
    where
        I: Clone + Eq + Hash,
    {
        return self.revert_ids(row_id, &row_id_set(row_id, targets));
    }

    /// Make the current data of `targets` their new baseline. Removed rows
    /// are dropped, finalizing the removal.
    pub fn commit<I>(&self, row_id: &Field<R, I>, targets: &[R]) -> Rows<R>
    where
        I: Clone + Eq + Hash,
    {
        return self.commit_ids(row_id, &row_id_set(row_id, targets));
    }

    pub fn remove_ids<I>(&self, row_id: &Field<R, I>, ids: &FxHashSet<I>) -> Rows<R>
    where
        I: Eq + Hash,
    {
        return self.filter_map(|row| {
            if !ids.contains(row_id.get(row.data())) {
                return Some(Rc::clone(row));
            }
            if row.is_new() {
                return None;
            }
            return Some(Rc::new(row.removed()));
        });
    }

    pub fn revert_ids<I>(&self, row_id: &Field<R, I>, ids: &FxHashSet<I>) -> Rows<R>
    where
        I: Eq + Hash,
    {
        return self.filter_map(|row| {
            if !ids.contains(row_id.get(row.data())) {
                return Some(Rc::clone(row));
            }
            if row.is_new() {
                return None;
            }
            return Some(Rc::new(row.reverted()));
        });
    }

    pub fn commit_ids<I>(&self, row_id: &Field<R, I>, ids: &FxHashSet<I>) -> Rows<R>
    where
        I: Eq + Hash,
    {
        return self.filter_map(|row| {
            if !ids.contains(row_id.get(row.data())) {
                return Some(Rc::clone(row));
            }
            if row.is_removed() {
                return None;
            }
            return Some(Rc::new(row.committed()));
        });
    }

    /// Update one cell of the row whose identity is `id`.
    ///
    /// Only the first matching row is replaced; every other row is shared
    /// with `self`. With no match the result holds exactly the same rows.
    pub fn update_cell<I, T>(
        &self,
        row_id: &Field<R, I>,
        id: &I,
        field: &Field<R, T>,
        update: CellUpdate<'_, T>,
        equality: &EqualityByKey<R>,
    ) -> Rows<R>
    where
        I: Eq,
    {
        let Some(position) = self.rows.iter().position(|row| row_id.get(row.data()) == id) else {
            return self.clone();
        };

        let mut next = self.rows.clone();
        next[position] = Rc::new(apply_row_cell_update(equality, &self.rows[position], field, update));
        return Rows { rows: next };
    }

    /// Project the derived views.
    pub fn views(&self) -> RowViews<R> {
        return RowViews::project(&self.rows);
    }
}
