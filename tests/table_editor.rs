//! Scenario tests for the table editor.

use table_editor::{field, Column, EditableColumn, Field, MetaColumn, RowState, TableEditor};

// =============================================================================
// Test helpers
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
struct Item {
    id: &'static str,
    v: i32,
}

fn item(id: &'static str, v: i32) -> Item {
    return Item { id, v };
}

fn v() -> Field<Item, i32> {
    return field!(Item, v);
}

fn items_editor() -> TableEditor<Item, &'static str> {
    return TableEditor::new(
        field!(Item, id),
        vec![EditableColumn::new(v(), "V").into()],
        vec![item("a", 1), item("b", 2)],
    );
}

#[derive(Clone, Debug, PartialEq)]
struct User {
    username: String,
    full_name: String,
    credits: i64,
}

fn user(username: &str, full_name: &str, credits: i64) -> User {
    return User {
        username: username.to_string(),
        full_name: full_name.to_string(),
        credits,
    };
}

fn users_editor() -> TableEditor<User, String> {
    let columns: Vec<Column<User>> = vec![
        MetaColumn::new("Delete").into(),
        EditableColumn::new(field!(User, username), "Username").into(),
        EditableColumn::with_eq(field!(User, full_name), "Full name", |pristine: &String, current: &String| {
            pristine.to_lowercase() == current.to_lowercase()
        })
        .into(),
        EditableColumn::new(field!(User, credits), "Credits").into(),
        MetaColumn::new("Undo").into(),
    ];
    return TableEditor::new(
        field!(User, username),
        columns,
        vec![
            user("dan", "Toucan Dan", 10),
            user("dave", "Chiquita Dave", 80),
            user("truck", "Truck Shepard", 30),
            user("vader", "Dark Vader", 75),
        ],
    );
}

// =============================================================================
// The a/b walkthrough
// =============================================================================

#[test]
fn edit_commit_remove_revert_walkthrough() {
    let editor = items_editor();

    editor.set_cell(&"a", &v(), 5);
    let a = editor.find(&"a").unwrap();
    assert_eq!(a.data().v, 5);
    assert!(a.is_dirty());
    let b = editor.find(&"b").unwrap();
    assert_eq!(b.data(), &item("b", 2));
    assert!(!b.is_dirty());

    editor.commit_rows(&[item("a", 5)]);
    let a = editor.find(&"a").unwrap();
    assert_eq!(a.pristine().v, 5);
    assert!(!a.is_dirty());

    editor.remove_rows(&[item("b", 2)]);
    assert!(editor.find(&"b").unwrap().is_removed());
    assert!(!editor.rows().current.contains(&item("b", 2)));

    editor.revert_rows(&[item("b", 2)]);
    assert!(!editor.find(&"b").unwrap().is_removed());
    assert!(editor.rows().current.contains(&item("b", 2)));
}

// =============================================================================
// Lifecycle properties
// =============================================================================

#[test]
fn removing_a_removed_row_again_changes_nothing() {
    let editor = items_editor();
    editor.set_cell(&"a", &v(), 3);
    editor.remove_rows(&[item("a", 3)]);
    let before = editor.editable_rows();
    editor.remove_rows(&[item("a", 3)]);
    assert_eq!(editor.editable_rows(), before);
}

#[test]
fn committing_twice_without_edits_changes_nothing() {
    let editor = items_editor();
    editor.set_cell(&"a", &v(), 3);
    editor.commit_rows(&[item("a", 3)]);
    let before = editor.editable_rows();
    editor.commit_rows(&[item("a", 3)]);
    assert_eq!(editor.editable_rows(), before);
}

#[test]
fn removing_a_new_row_deletes_it() {
    let editor = items_editor();
    editor.insert_rows(&[item("x", 0)]);
    editor.remove_rows(&[item("x", 0)]);
    assert!(editor.find(&"x").is_none());
    assert!(editor.rows().removed.is_empty());
}

#[test]
fn reverting_a_new_row_deletes_it() {
    let editor = items_editor();
    editor.insert_rows(&[item("x", 0)]);
    editor.set_cell(&"x", &v(), 4);
    editor.revert_rows(&[item("x", 4)]);
    assert!(editor.find(&"x").is_none());
    assert_eq!(editor.editable_rows().len(), 2);
}

#[test]
fn dirtiness_follows_the_whole_row() {
    let editor = TableEditor::new(
        field!(Pair, id),
        vec![
            EditableColumn::new(field!(Pair, a), "A").into(),
            EditableColumn::new(field!(Pair, b), "B").into(),
        ],
        vec![Pair { id: 1, a: 1, b: 2 }],
    );
    let a = field!(Pair, a);
    let b = field!(Pair, b);

    editor.set_cell(&1, &a, 2);
    assert!(editor.find(&1).unwrap().is_dirty());

    editor.set_cell(&1, &a, 1);
    assert!(!editor.find(&1).unwrap().is_dirty());

    editor.set_cell(&1, &a, 2);
    editor.update_cell_with(&1, &b, |b| b + 1);
    editor.set_cell(&1, &b, 2);
    // b is back to pristine but a is not.
    assert!(editor.find(&1).unwrap().is_dirty());
}

#[derive(Clone, Debug, PartialEq)]
struct Pair {
    id: u32,
    a: i32,
    b: i32,
}

#[test]
fn commit_rebaselines_so_revert_is_a_no_op() {
    let editor = items_editor();
    editor.set_cell(&"a", &v(), 9);
    editor.commit_rows(&[item("a", 9)]);
    let a = editor.find(&"a").unwrap();
    assert_eq!(a.pristine(), &item("a", 9));
    assert!(!a.is_dirty());

    let before = editor.editable_rows();
    editor.revert_rows(&[item("a", 9)]);
    assert_eq!(editor.editable_rows(), before);
}

#[test]
fn revert_restores_exactly_pristine() {
    let editor = items_editor();
    editor.set_cell(&"b", &v(), 40);
    editor.revert_rows(&[item("b", 40)]);
    let b = editor.find(&"b").unwrap();
    assert_eq!(b.data(), &item("b", 2));
    assert!(!b.is_dirty());
}

#[test]
fn insert_remove_commit_leaves_no_trace() {
    let editor = items_editor();
    let before = editor.editable_rows();
    editor.insert_rows(&[item("x", 1)]);
    editor.remove_rows(&[item("x", 1)]);
    assert_eq!(editor.editable_rows(), before);
    editor.commit_rows(&[item("x", 1)]);
    assert_eq!(editor.editable_rows(), before);
}

#[test]
fn initialize_discards_all_tracking() {
    let editor = items_editor();
    editor.set_cell(&"a", &v(), 9);
    editor.insert_rows(&[item("c", 3)]);
    editor.remove_rows(&[item("b", 2)]);

    editor.initialize_table(vec![item("z", 26)]);
    let views = editor.rows();
    assert_eq!(views.current, vec![item("z", 26)]);
    assert!(views.is_clean());
}

// =============================================================================
// Column equality
// =============================================================================

#[test]
fn case_insensitive_column_ignores_casing_changes() {
    let editor = users_editor();
    let full_name = field!(User, full_name);
    let dan = "dan".to_string();

    editor.set_cell(&dan, &full_name, "TOUCAN DAN".to_string());
    let row = editor.find(&dan).unwrap();
    assert_eq!(row.data().full_name, "TOUCAN DAN");
    assert!(!row.is_dirty());

    editor.set_cell(&dan, &full_name, "Toucan Don".to_string());
    assert!(editor.find(&dan).unwrap().is_dirty());
}

#[test]
fn cell_status_uses_column_equality() {
    let editor = users_editor();
    let dave = editor.row_editor("dave".to_string());
    dave.set_cell(&field!(User, full_name), "chiquita dave".to_string());
    dave.update_cell_with(&field!(User, credits), |credits| credits - 5);

    let (_, _, name_dirty) = dave.cell(&field!(User, full_name)).unwrap();
    assert!(!name_dirty);
    let (pristine, current, credits_dirty) = dave.cell(&field!(User, credits)).unwrap();
    assert_eq!((pristine, current, credits_dirty), (80, 75, true));

    let row = dave.row().unwrap();
    let equality = editor.equality_by_key();
    assert_eq!(row.dirty_columns(&equality).as_slice(), &["credits"]);
    assert_eq!(row.status().state(), RowState::Modified);
    assert_eq!(row.status().class_name(), "is-dirty");
}

// =============================================================================
// Derived views
// =============================================================================

#[test]
fn derived_views_partition_the_collection() {
    let editor = users_editor();
    editor.set_cell(&"dan".to_string(), &field!(User, credits), 11);
    editor.remove_rows(&[user("truck", "Truck Shepard", 30)]);
    editor.insert_rows(&[user("luke", "Luke", 5)]);

    let rows = editor.editable_rows();
    let views = editor.rows();

    assert_eq!(views.current.len() + views.removed.len(), rows.len());
    assert_eq!(views.pristine.len() + views.new.len(), rows.len());
    assert_eq!(views.dirty.len(), 3);
    assert!(views.new.iter().all(|row| row.is_new()));
    for row in &rows {
        let in_dirty = views.dirty.iter().any(|d| std::rc::Rc::ptr_eq(d, row));
        assert_eq!(in_dirty, row.is_dirty() || row.is_new() || row.is_removed());
    }

    // The save payload and the running total the demo table shows.
    let delta: i64 = views
        .dirty
        .iter()
        .filter(|row| !row.is_new() && !row.is_removed())
        .map(|row| row.data().credits - row.pristine().credits)
        .sum();
    assert_eq!(delta, 1);
}

#[test]
fn saving_dirty_rows_commits_them() {
    let editor = users_editor();
    editor.set_cell(&"vader".to_string(), &field!(User, credits), 1);
    editor.insert_rows(&[user("leia", "Leia", 99)]);
    editor.remove_rows(&[user("dave", "Chiquita Dave", 80)]);

    let to_save: Vec<User> = editor.rows().dirty.iter().map(|row| row.data().clone()).collect();
    editor.commit_rows(&to_save);

    let views = editor.rows();
    assert!(views.is_clean());
    assert_eq!(views.current.len(), 4);
    assert_eq!(views.pristine, views.current);
}
