//! Typed field lenses.
//!
//! A `Field<R, T>` names one field of a row type `R` and knows how to read
//! and write it. Fields stand in for "a key of the row type": they are used
//! to designate the row-identity key, to bind editable columns, and to target
//! cell updates.
//!
//! ```
//! use table_editor::field;
//!
//! #[derive(Clone)]
//! struct User {
//!     username: String,
//!     credits: i64,
//! }
//!
//! let credits = field!(User, credits);
//! let user = User { username: "dan".into(), credits: 10 };
//! assert_eq!(credits.key(), "credits");
//! assert_eq!(*credits.get(&user), 10);
//! ```

use std::fmt;

/// A named accessor for one field of `R` with value type `T`.
pub struct Field<R, T> {
    key: &'static str,
    get: fn(&R) -> &T,
    get_mut: fn(&mut R) -> &mut T,
}

// Manual impls: fn pointers are Copy regardless of R and T.
impl<R, T> Clone for Field<R, T> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<R, T> Copy for Field<R, T> {}

impl<R, T> fmt::Debug for Field<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "Field({})", self.key);
    }
}

impl<R, T> Field<R, T> {
    /// Create a field from its key and accessor pair.
    ///
    /// Prefer the [`field!`](crate::field!) macro for plain struct fields.
    pub fn new(key: &'static str, get: fn(&R) -> &T, get_mut: fn(&mut R) -> &mut T) -> Field<R, T> {
        return Field { key, get, get_mut };
    }

    /// The key naming this field.
    #[inline]
    pub fn key(&self) -> &'static str {
        return self.key;
    }

    /// Borrow the field's value in `row`.
    #[inline]
    pub fn get<'a>(&self, row: &'a R) -> &'a T {
        return (self.get)(row);
    }

    /// Mutably borrow the field's value in `row`.
    #[inline]
    pub fn get_mut<'a>(&self, row: &'a mut R) -> &'a mut T {
        return (self.get_mut)(row);
    }

    /// The raw getter, for building comparators over whole rows.
    pub(crate) fn getter(&self) -> fn(&R) -> &T {
        return self.get;
    }
}

impl<R: Clone, T> Field<R, T> {
    /// Return a copy of `row` with this field set to `value`.
    pub fn replaced(&self, row: &R, value: T) -> R {
        let mut next = row.clone();
        *self.get_mut(&mut next) = value;
        return next;
    }
}

/// Build a [`Field`] for a named struct field.
///
/// `field!(Row, name)` expands to a lens whose key is `"name"`.
#[macro_export]
macro_rules! field {
    ($row:ty, $name:ident) => {
        $crate::Field::<$row, _>::new(
            stringify!($name),
            |row: &$row| &row.$name,
            |row: &mut $row| &mut row.$name,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: u32,
        label: String,
    }

    #[test]
    fn macro_uses_field_name_as_key() {
        let label = field!(Item, label);
        assert_eq!(label.key(), "label");
    }

    #[test]
    fn get_and_get_mut_reach_the_field() {
        let label = field!(Item, label);
        let mut item = Item { id: 1, label: "a".to_string() };
        assert_eq!(label.get(&item), "a");
        label.get_mut(&mut item).push('b');
        assert_eq!(item.label, "ab");
    }

    #[test]
    fn replaced_leaves_original_untouched() {
        let id = field!(Item, id);
        let item = Item { id: 1, label: "a".to_string() };
        let next = id.replaced(&item, 7);
        assert_eq!(item.id, 1);
        assert_eq!(next, Item { id: 7, label: "a".to_string() });
    }

    #[test]
    fn fields_are_copy() {
        let id = field!(Item, id);
        let copy = id;
        assert_eq!(id.key(), copy.key());
        assert_eq!(format!("{:?}", copy), "Field(id)");
    }
}
