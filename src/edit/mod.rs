//! The edit-tracking core.
//!
//! Pure data and pure functions: nothing in this module holds state between
//! calls. The editor façade in `crate::editor` threads these operations
//! through a store.

pub mod column;
pub mod rows;
pub mod status;
pub mod update;
pub mod view;

pub use column::{equality_by_key, Column, EditableColumn, Equality, EqualityByKey, MetaColumn, RowEq};
pub use rows::{row_id_set, Rows};
pub use status::{CellEditStatus, EditStatus, EditableRow, RowState};
pub use update::{apply_row_cell_update, CellUpdate};
pub use view::RowViews;
