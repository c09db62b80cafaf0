//! Column configuration and per-column equality.
//!
//! Columns are either editable (bound to one field, with an equality used to
//! decide dirtiness) or meta (row-level actions such as delete or undo, not
//! bound to any field). `equality_by_key` derives the key → equality mapping
//! the cell update engine replays on every edit.

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::lens::Field;

/// Compares one field of two whole rows: `(pristine, current)`.
pub type RowEq<R> = Rc<dyn Fn(&R, &R) -> bool>;

/// How an editable column decides whether a cell changed.
pub enum Equality<R> {
    /// Value equality of the field type (`PartialEq`).
    Default(RowEq<R>),
    /// A caller-supplied function over `(pristine, current)` cell values.
    Custom(RowEq<R>),
}

impl<R> Clone for Equality<R> {
    fn clone(&self) -> Self {
        return match self {
            Equality::Default(eq) => Equality::Default(Rc::clone(eq)),
            Equality::Custom(eq) => Equality::Custom(Rc::clone(eq)),
        };
    }
}

impl<R> fmt::Debug for Equality<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Equality::Default(_) => write!(f, "Equality::Default"),
            Equality::Custom(_) => write!(f, "Equality::Custom"),
        };
    }
}

impl<R> Equality<R> {
    /// True if the column was configured with its own equality function.
    pub fn is_custom(&self) -> bool {
        return matches!(self, Equality::Custom(_));
    }

    /// Compare the column's cell in `pristine` and `current`.
    #[inline]
    pub fn equal(&self, pristine: &R, current: &R) -> bool {
        return match self {
            Equality::Default(eq) | Equality::Custom(eq) => eq(pristine, current),
        };
    }
}

/// A column bound to one field of the row.
pub struct EditableColumn<R> {
    key: &'static str,
    title: String,
    equality: Equality<R>,
}

impl<R> Clone for EditableColumn<R> {
    fn clone(&self) -> Self {
        return EditableColumn {
            key: self.key,
            title: self.title.clone(),
            equality: self.equality.clone(),
        };
    }
}

impl<R> fmt::Debug for EditableColumn<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("EditableColumn")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("equality", &self.equality)
            .finish();
    }
}

impl<R: 'static> EditableColumn<R> {
    /// An editable column using the field type's `PartialEq`.
    pub fn new<T>(field: Field<R, T>, title: impl Into<String>) -> EditableColumn<R>
    where
        T: PartialEq + 'static,
    {
        let get = field.getter();
        let eq: RowEq<R> = Rc::new(move |pristine: &R, current: &R| get(pristine) == get(current));
        return EditableColumn {
            key: field.key(),
            title: title.into(),
            equality: Equality::Default(eq),
        };
    }

    /// An editable column with a custom equality over `(pristine, current)`.
    pub fn with_eq<T, F>(field: Field<R, T>, title: impl Into<String>, eq: F) -> EditableColumn<R>
    where
        T: 'static,
        F: Fn(&T, &T) -> bool + 'static,
    {
        let get = field.getter();
        let row_eq: RowEq<R> = Rc::new(move |pristine: &R, current: &R| eq(get(pristine), get(current)));
        return EditableColumn {
            key: field.key(),
            title: title.into(),
            equality: Equality::Custom(row_eq),
        };
    }
}

impl<R> EditableColumn<R> {
    #[inline]
    pub fn key(&self) -> &'static str {
        return self.key;
    }

    #[inline]
    pub fn title(&self) -> &str {
        return &self.title;
    }

    #[inline]
    pub fn equality(&self) -> &Equality<R> {
        return &self.equality;
    }
}

/// A column for row-level actions, not bound to a field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetaColumn {
    title: Option<String>,
}

impl MetaColumn {
    pub fn new(title: impl Into<String>) -> MetaColumn {
        return MetaColumn { title: Some(title.into()) };
    }

    pub fn untitled() -> MetaColumn {
        return MetaColumn { title: None };
    }

    pub fn title(&self) -> Option<&str> {
        return self.title.as_deref();
    }
}

/// One table column. Columns are assumed constant for a table's lifetime.
pub enum Column<R> {
    Editable(EditableColumn<R>),
    Meta(MetaColumn),
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        return match self {
            Column::Editable(column) => Column::Editable(column.clone()),
            Column::Meta(column) => Column::Meta(column.clone()),
        };
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Column::Editable(column) => f.debug_tuple("Editable").field(column).finish(),
            Column::Meta(column) => f.debug_tuple("Meta").field(column).finish(),
        };
    }
}

impl<R> Column<R> {
    /// The field key, for editable columns.
    pub fn key(&self) -> Option<&'static str> {
        return self.as_editable().map(|column| column.key());
    }

    pub fn title(&self) -> Option<&str> {
        return match self {
            Column::Editable(column) => Some(column.title()),
            Column::Meta(column) => column.title(),
        };
    }

    pub fn as_editable(&self) -> Option<&EditableColumn<R>> {
        return match self {
            Column::Editable(column) => Some(column),
            Column::Meta(_) => None,
        };
    }

    pub fn is_meta(&self) -> bool {
        return matches!(self, Column::Meta(_));
    }
}

impl<R> From<EditableColumn<R>> for Column<R> {
    fn from(column: EditableColumn<R>) -> Self {
        return Column::Editable(column);
    }
}

impl<R> From<MetaColumn> for Column<R> {
    fn from(column: MetaColumn) -> Self {
        return Column::Meta(column);
    }
}

/// Mapping from editable-column key to that column's equality.
///
/// Iteration follows column order.
pub struct EqualityByKey<R> {
    entries: Vec<(&'static str, Equality<R>)>,
    index: FxHashMap<&'static str, usize>,
}

impl<R> Clone for EqualityByKey<R> {
    fn clone(&self) -> Self {
        return EqualityByKey {
            entries: self.entries.clone(),
            index: self.index.clone(),
        };
    }
}

impl<R> fmt::Debug for EqualityByKey<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_map().entries(self.entries.iter().map(|(k, v)| (k, v))).finish();
    }
}

impl<R> Default for EqualityByKey<R> {
    fn default() -> Self {
        return EqualityByKey {
            entries: Vec::new(),
            index: FxHashMap::default(),
        };
    }
}

impl<R> EqualityByKey<R> {
    /// Insert or replace the equality for `key`. A replaced key keeps its
    /// original position.
    pub fn insert(&mut self, key: &'static str, equality: Equality<R>) {
        if let Some(&i) = self.index.get(key) {
            self.entries[i].1 = equality;
            return;
        }
        self.index.insert(key, self.entries.len());
        self.entries.push((key, equality));
    }

    pub fn get(&self, key: &str) -> Option<&Equality<R>> {
        return self.index.get(key).map(|&i| &self.entries[i].1);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        return self.index.contains_key(key);
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Equality<R>)> {
        return self.entries.iter().map(|(key, eq)| (*key, eq));
    }

    /// True if any editable cell of `current` differs from `pristine`.
    ///
    /// Every editable column is checked, not only the one last edited, since
    /// cell-level dirtiness is not stored.
    pub fn differs(&self, current: &R, pristine: &R) -> bool {
        return self.entries.iter().any(|(_, eq)| !eq.equal(pristine, current));
    }
}

/// Derive the key → equality mapping from a column list. Meta columns
/// contribute nothing. Not cached: call it whenever the columns are read.
pub fn equality_by_key<R>(columns: &[Column<R>]) -> EqualityByKey<R> {
    let mut mapping = EqualityByKey::default();
    for column in columns {
        if let Column::Editable(column) = column {
            mapping.insert(column.key(), column.equality().clone());
        }
    }
    return mapping;
}
