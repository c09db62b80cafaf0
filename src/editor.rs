//! The table editor façade.
//!
//! `TableEditor` binds a row-identity field, a column list, and a store
//! holding the editable rows. Every mutation reads the previous collection
//! and replaces it through the store's `replace`, so calls queue and apply
//! in order. Reads project fresh views on every call.
//!
//! ```
//! use table_editor::{field, EditableColumn, MetaColumn, TableEditor};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User {
//!     username: String,
//!     credits: i64,
//! }
//!
//! let editor = TableEditor::builder(field!(User, username))
//!     .meta_column(MetaColumn::new("Delete"))
//!     .column(EditableColumn::new(field!(User, credits), "Credits"))
//!     .rows(vec![User { username: "dan".into(), credits: 10 }])
//!     .build();
//!
//! editor.set_cell(&"dan".to_string(), &field!(User, credits), 25);
//! assert_eq!(editor.rows().dirty.len(), 1);
//! ```

use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::edit::{
    equality_by_key, CellEditStatus, CellUpdate, Column, EditableColumn, EditableRow, EqualityByKey, MetaColumn,
    RowViews, Rows,
};
use crate::error::EditError;
use crate::lens::Field;
use crate::store::{CellStore, Store};

/// Tracks edits to a table of `R` rows identified by `I`.
pub struct TableEditor<R, I, S = CellStore<Rows<R>>> {
    row_id: Field<R, I>,
    columns: Vec<Column<R>>,
    store: S,
}

impl<R, I> TableEditor<R, I>
where
    R: Clone,
    I: Clone + Eq + Hash,
{
    /// An editor over `rows`, kept in a fresh `CellStore`.
    pub fn new(row_id: Field<R, I>, columns: Vec<Column<R>>, rows: impl IntoIterator<Item = R>) -> Self {
        return TableEditor::with_store(row_id, columns, CellStore::new(Rows::initialize(rows)));
    }

    pub fn builder(row_id: Field<R, I>) -> TableEditorBuilder<R, I> {
        return TableEditorBuilder {
            row_id,
            columns: Vec::new(),
            rows: Vec::new(),
        };
    }
}

impl<R, I, S> TableEditor<R, I, S>
where
    R: Clone,
    I: Clone + Eq + Hash,
    S: Store<Rows<R>>,
{
    /// An editor over an existing store. The store's contents are used as is.
    pub fn with_store(row_id: Field<R, I>, columns: Vec<Column<R>>, store: S) -> Self {
        return TableEditor { row_id, columns, store };
    }

    // =========================================================================
    // Read surface
    // =========================================================================

    pub fn row_id_field(&self) -> &Field<R, I> {
        return &self.row_id;
    }

    pub fn columns(&self) -> &[Column<R>] {
        return &self.columns;
    }

    pub fn store(&self) -> &S {
        return &self.store;
    }

    /// Key → equality mapping, derived from the columns on each call.
    pub fn equality_by_key(&self) -> EqualityByKey<R> {
        return equality_by_key(&self.columns);
    }

    /// A snapshot of the editable rows.
    pub fn editable_rows(&self) -> Rows<R> {
        return self.store.read();
    }

    /// The derived views, projected from the current collection.
    pub fn rows(&self) -> RowViews<R> {
        return self.store.read().views();
    }

    pub fn find(&self, id: &I) -> Option<Rc<EditableRow<R>>> {
        return self.store.read().find(&self.row_id, id).cloned();
    }

    // =========================================================================
    // Mutation surface
    // =========================================================================

    /// Replace the whole collection with fresh baselines from `rows`.
    pub fn initialize_table(&self, rows: impl IntoIterator<Item = R>) {
        let rows = Rows::initialize(rows);
        #[cfg(feature = "tracing")]
        tracing::debug!(rows = rows.len(), "initialize_table");
        self.store.replace(move |_| rows);
    }

    /// Append `rows` as uncommitted inserts. Identities are not checked.
    pub fn insert_rows(&self, rows: &[R]) {
        #[cfg(feature = "tracing")]
        tracing::debug!(targets = rows.len(), "insert_rows");
        self.store.replace(|previous| previous.insert(rows));
    }

    /// Append `rows` as uncommitted inserts, rejecting the whole batch if an
    /// identity is already in the table or repeated within `rows`.
    pub fn try_insert_rows(&self, rows: &[R]) -> Result<(), EditError>
    where
        I: Debug,
    {
        let existing = self.store.read();
        let mut batch = FxHashSet::default();
        for row in rows {
            let id = self.row_id.get(row);
            if existing.contains_id(&self.row_id, id) {
                return Err(EditError::DuplicateRowId { id: format!("{:?}", id) });
            }
            if !batch.insert(id.clone()) {
                return Err(EditError::DuplicateInBatch { id: format!("{:?}", id) });
            }
        }
        self.insert_rows(rows);
        return Ok(());
    }

    /// Flag `rows` as removed; new rows among them are dropped.
    pub fn remove_rows(&self, rows: &[R]) {
        #[cfg(feature = "tracing")]
        tracing::debug!(targets = rows.len(), "remove_rows");
        self.store.replace(|previous| previous.remove(&self.row_id, rows));
    }

    /// Restore `rows` to pristine; new rows among them are dropped.
    pub fn revert_rows(&self, rows: &[R]) {
        #[cfg(feature = "tracing")]
        tracing::debug!(targets = rows.len(), "revert_rows");
        self.store.replace(|previous| previous.revert(&self.row_id, rows));
    }

    /// Make the current data of `rows` their baseline; removed rows among
    /// them are dropped.
    pub fn commit_rows(&self, rows: &[R]) {
        #[cfg(feature = "tracing")]
        tracing::debug!(targets = rows.len(), "commit_rows");
        self.store.replace(|previous| previous.commit(&self.row_id, rows));
    }

    /// Update one cell of the row identified by `id`. A missing row is a
    /// no-op.
    pub fn update_cell<'u, T>(&self, id: &I, field: &Field<R, T>, update: impl Into<CellUpdate<'u, T>>) {
        let equality = self.equality_by_key();
        let update = update.into();
        self.store.replace(|previous| {
            #[cfg(feature = "tracing")]
            if !previous.contains_id(&self.row_id, id) {
                tracing::trace!(column = field.key(), "update_cell: no matching row");
            }
            previous.update_cell(&self.row_id, id, field, update, &equality)
        });
    }

    /// Set one cell to `value`.
    pub fn set_cell<T>(&self, id: &I, field: &Field<R, T>, value: T) {
        self.update_cell(id, field, CellUpdate::Set(value));
    }

    /// Set one cell to `f(previous)`.
    pub fn update_cell_with<'u, T>(&self, id: &I, field: &Field<R, T>, f: impl FnOnce(&T) -> T + 'u) {
        self.update_cell(id, field, CellUpdate::with(f));
    }

    /// A handle bound to the row identified by `id`, for handing to the
    /// renderer of that row.
    pub fn row_editor(&self, id: I) -> RowEditor<'_, R, I, S> {
        return RowEditor { editor: self, id };
    }

    /// One handle per row, in collection order.
    pub fn row_editors(&self) -> Vec<RowEditor<'_, R, I, S>> {
        return self
            .store
            .read()
            .iter()
            .map(|row| self.row_editor(self.row_id.get(row.data()).clone()))
            .collect();
    }

    fn apply_to_id(&self, id: &I, op: fn(&Rows<R>, &Field<R, I>, &FxHashSet<I>) -> Rows<R>) {
        let mut ids = FxHashSet::default();
        ids.insert(id.clone());
        self.store.replace(|previous| op(previous, &self.row_id, &ids));
    }
}

/// Capability handle for one row: cell updates and row-level actions.
pub struct RowEditor<'a, R, I, S> {
    editor: &'a TableEditor<R, I, S>,
    id: I,
}

impl<'a, R, I, S> RowEditor<'a, R, I, S>
where
    R: Clone,
    I: Clone + Eq + Hash,
    S: Store<Rows<R>>,
{
    pub fn id(&self) -> &I {
        return &self.id;
    }

    /// The row as currently stored, if it still exists.
    pub fn row(&self) -> Option<Rc<EditableRow<R>>> {
        return self.editor.find(&self.id);
    }

    /// Per-cell status for `field`, if the row still exists.
    pub fn cell<T: Clone>(&self, field: &Field<R, T>) -> Option<(T, T, bool)> {
        let row = self.row()?;
        let CellEditStatus {
            pristine,
            current,
            is_dirty,
        } = row.cell(field, &self.editor.equality_by_key());
        return Some((pristine.clone(), current.clone(), is_dirty));
    }

    pub fn update_cell<'u, T>(&self, field: &Field<R, T>, update: impl Into<CellUpdate<'u, T>>) {
        self.editor.update_cell(&self.id, field, update);
    }

    pub fn set_cell<T>(&self, field: &Field<R, T>, value: T) {
        self.editor.set_cell(&self.id, field, value);
    }

    pub fn update_cell_with<'u, T>(&self, field: &Field<R, T>, f: impl FnOnce(&T) -> T + 'u) {
        self.editor.update_cell_with(&self.id, field, f);
    }

    pub fn remove(&self) {
        self.editor.apply_to_id(&self.id, Rows::remove_ids);
    }

    pub fn revert(&self) {
        self.editor.apply_to_id(&self.id, Rows::revert_ids);
    }

    pub fn commit(&self) {
        self.editor.apply_to_id(&self.id, Rows::commit_ids);
    }
}

/// Builder for a `TableEditor`: identity field, ordered columns, initial rows.
pub struct TableEditorBuilder<R, I> {
    row_id: Field<R, I>,
    columns: Vec<Column<R>>,
    rows: Vec<R>,
}

impl<R, I> TableEditorBuilder<R, I>
where
    R: Clone,
    I: Clone + Eq + Hash,
{
    pub fn column(mut self, column: EditableColumn<R>) -> Self {
        self.columns.push(Column::Editable(column));
        return self;
    }

    pub fn meta_column(mut self, column: MetaColumn) -> Self {
        self.columns.push(Column::Meta(column));
        return self;
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = Column<R>>) -> Self {
        self.columns.extend(columns);
        return self;
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = R>) -> Self {
        self.rows.extend(rows);
        return self;
    }

    pub fn build(self) -> TableEditor<R, I> {
        return TableEditor::new(self.row_id, self.columns, self.rows);
    }

    /// Build over `store`, first replacing its contents with the builder's
    /// rows as fresh baselines.
    pub fn build_with_store<S: Store<Rows<R>>>(self, store: S) -> TableEditor<R, I, S> {
        let editor = TableEditor::with_store(self.row_id, self.columns, store);
        editor.initialize_table(self.rows);
        return editor;
    }
}
