//! Table Editor - edit tracking for in-memory tables.
//!
//! Rows are wrapped with an immutable pristine snapshot and dirty/new/removed
//! flags. Cell updates, inserts, removals, reverts and commits move rows
//! between edit states without touching the caller's original data, and
//! dirtiness is derived from per-column equality.
//!
//! # Quick Start
//!
//! ```
//! use table_editor::{field, EditableColumn, TableEditor};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Item {
//!     id: char,
//!     v: i32,
//! }
//!
//! let editor = TableEditor::builder(field!(Item, id))
//!     .column(EditableColumn::new(field!(Item, v), "Value"))
//!     .rows(vec![Item { id: 'a', v: 1 }, Item { id: 'b', v: 2 }])
//!     .build();
//!
//! // Edit a cell: the row becomes dirty.
//! editor.set_cell(&'a', &field!(Item, v), 5);
//! assert!(editor.find(&'a').unwrap().is_dirty());
//!
//! // Commit it: the current data becomes the new baseline.
//! editor.commit_rows(&[Item { id: 'a', v: 5 }]);
//! assert_eq!(editor.find(&'a').unwrap().pristine().v, 5);
//!
//! // Remove and revert a row.
//! editor.remove_rows(&[Item { id: 'b', v: 2 }]);
//! assert_eq!(editor.rows().current.len(), 1);
//! editor.revert_rows(&[Item { id: 'b', v: 2 }]);
//! assert_eq!(editor.rows().current.len(), 2);
//! ```
//!
//! The operations themselves are pure functions over [`Rows`], usable
//! without an editor or store.

pub mod edit;
pub mod editor;
pub mod error;
mod lens;
pub mod store;

pub use edit::{
    equality_by_key, CellEditStatus, CellUpdate, Column, EditStatus, EditableColumn, EditableRow, Equality,
    EqualityByKey, MetaColumn, RowState, RowViews, Rows,
};
pub use editor::{RowEditor, TableEditor, TableEditorBuilder};
pub use error::EditError;
pub use lens::Field;
pub use store::{CellStore, Store};
