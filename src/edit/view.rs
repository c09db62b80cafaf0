//! Derived views over an editable row collection.
//!
//! Views are recomputed from the collection on every read. Nothing is
//! memoized.

use std::rc::Rc;

use crate::edit::status::EditableRow;

/// The five derived views of a collection.
#[derive(Debug)]
pub struct RowViews<R> {
    /// Current data of every row not flagged removed.
    pub current: Vec<R>,
    /// Pristine snapshot of every row not flagged new.
    pub pristine: Vec<R>,
    /// Rows that are dirty, new or removed.
    pub dirty: Vec<Rc<EditableRow<R>>>,
    /// Rows flagged new.
    pub new: Vec<Rc<EditableRow<R>>>,
    /// Rows flagged removed.
    pub removed: Vec<Rc<EditableRow<R>>>,
}

impl<R: Clone> RowViews<R> {
    pub fn project(rows: &[Rc<EditableRow<R>>]) -> RowViews<R> {
        let current = rows
            .iter()
            .filter(|row| !row.is_removed())
            .map(|row| row.data().clone())
            .collect();
        let pristine = rows
            .iter()
            .filter(|row| !row.is_new())
            .map(|row| row.pristine().clone())
            .collect();
        let dirty = rows
            .iter()
            .filter(|row| row.status().has_changes())
            .cloned()
            .collect();
        let new = rows.iter().filter(|row| row.is_new()).cloned().collect();
        let removed = rows.iter().filter(|row| row.is_removed()).cloned().collect();

        return RowViews {
            current,
            pristine,
            dirty,
            new,
            removed,
        };
    }
}

impl<R> RowViews<R> {
    /// True if there is nothing to save.
    pub fn is_clean(&self) -> bool {
        return self.dirty.is_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::status::EditStatus;

    fn editable(v: i32, pristine: i32, is_new: bool, is_removed: bool) -> Rc<EditableRow<i32>> {
        let mut status = EditStatus::clean(pristine);
        status.is_dirty = v != pristine;
        status.is_new = is_new;
        status.is_removed = is_removed;
        return Rc::new(EditableRow::from_parts(v, status));
    }

    #[test]
    fn views_partition_rows() {
        let rows = vec![
            editable(1, 1, false, false),
            editable(2, 20, false, false),
            editable(3, 3, true, false),
            editable(4, 4, false, true),
        ];
        let views = RowViews::project(&rows);

        assert_eq!(views.current, vec![1, 2, 3]);
        assert_eq!(views.pristine, vec![1, 20, 4]);
        assert_eq!(views.dirty.len(), 3);
        assert_eq!(views.new.len(), 1);
        assert_eq!(*views.new[0].data(), 3);
        assert_eq!(views.removed.len(), 1);
        assert_eq!(*views.removed[0].data(), 4);
        assert!(!views.is_clean());
    }

    #[test]
    fn dirty_view_shares_rows() {
        let rows = vec![editable(1, 1, true, false)];
        let views = RowViews::project(&rows);
        assert!(Rc::ptr_eq(&views.dirty[0], &rows[0]));
    }

    #[test]
    fn empty_collection_is_clean() {
        let views = RowViews::<i32>::project(&[]);
        assert!(views.current.is_empty());
        assert!(views.is_clean());
    }
}
