//! Synchronous resolver bodies.
//!
//! The `#[Object]` roots in [`super::schema`] only fetch the store from the
//! schema data and delegate here. Every function takes the store explicitly so
//! the logic can be exercised without a GraphQL engine.

use crate::{
    error::{Result, TodoError},
    model::{Todo, TodoPatch},
    storage::TodoStore,
};

/// Integer-prefix parse of a textual id.
///
/// Leading whitespace and an optional sign are accepted, followed by the
/// longest run of ASCII digits; trailing garbage is ignored (`"12abc"` is 12).
/// Returns `None` when no digits lead the input or the value cannot be a
/// stored id (negative or out of range).
pub fn parse_id(raw: &str) -> Option<u64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = s
        .as_bytes()
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    let value: u64 = s[..digits_end].parse().ok()?;
    match (negative, value) {
        (true, 0) | (false, _) => Some(value),
        (true, _) => None,
    }
}

fn lookup_id(id: &str) -> Result<u64> {
    parse_id(id).ok_or_else(|| TodoError::NotFound(id.to_string()))
}

pub fn get_todos(store: &TodoStore) -> Result<Vec<Todo>> {
    store.list().map_err(|err| {
        tracing::error!(error = %err, "Error fetching todos");
        TodoError::OperationFailed("Failed to fetch todos.".to_string())
    })
}

pub fn get_todo_by_id(store: &TodoStore, id: &str) -> Result<Todo> {
    tracing::debug!(id, "Fetching todo");
    lookup_id(id)
        .and_then(|parsed| {
            store
                .find_by_id(parsed)?
                .ok_or_else(|| TodoError::NotFound(id.to_string()))
        })
        .inspect_err(|err| tracing::error!(error = %err, "Error fetching todo by ID"))
}

pub fn add_todo(store: &TodoStore, title: String, completed: bool) -> Result<Todo> {
    store.append(title, completed).map_err(|err| {
        tracing::error!(error = %err, "Error adding todo");
        TodoError::OperationFailed("Failed to add todo.".to_string())
    })
}

pub fn remove_todo(store: &TodoStore, id: &str) -> Result<Todo> {
    lookup_id(id)
        .and_then(|parsed| {
            store
                .remove(parsed)?
                .ok_or_else(|| TodoError::NotFound(id.to_string()))
        })
        .inspect_err(|err| tracing::error!(error = %err, "Error removing todo"))
}

pub fn update_todo(store: &TodoStore, id: &str, patch: TodoPatch) -> Result<Todo> {
    lookup_id(id)
        .and_then(|parsed| {
            store
                .update(parsed, &patch)?
                .ok_or_else(|| TodoError::NotFound(id.to_string()))
        })
        .inspect_err(|err| tracing::error!(error = %err, "Error updating todo"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_two() -> TodoStore {
        let store = TodoStore::new();
        add_todo(&store, "Buy milk".to_string(), false).unwrap();
        add_todo(&store, "Clean house".to_string(), false).unwrap();
        store
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id("  42"), Some(42));
        assert_eq!(parse_id("+7"), Some(7));
        assert_eq!(parse_id("12abc"), Some(12));
        assert_eq!(parse_id("007"), Some(7));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id("-"), None);
        assert_eq!(parse_id("99999999999999999999999"), None);
    }

    #[test]
    fn test_add_to_empty_store() {
        let store = TodoStore::new();
        let todo = add_todo(&store, "Buy milk".to_string(), false).unwrap();
        assert_eq!(todo, Todo::new(1, "Buy milk", false));
    }

    #[test]
    fn test_get_todos_in_insertion_order() {
        let store = store_with_two();
        let todos = get_todos(&store).unwrap();
        assert_eq!(
            todos,
            vec![
                Todo::new(1, "Buy milk", false),
                Todo::new(2, "Clean house", false)
            ]
        );
    }

    #[test]
    fn test_get_todo_by_id() {
        let store = store_with_two();
        assert_eq!(
            get_todo_by_id(&store, "1").unwrap(),
            Todo::new(1, "Buy milk", false)
        );
    }

    #[test]
    fn test_get_missing_todo_reports_id() {
        let store = store_with_two();
        let err = get_todo_by_id(&store, "999").unwrap_err();
        assert!(matches!(err, TodoError::NotFound(_)));
        assert_eq!(err.to_string(), "Todo with ID 999 not found");
    }

    #[test]
    fn test_non_numeric_id_is_not_found() {
        let store = store_with_two();
        let err = get_todo_by_id(&store, "abc").unwrap_err();
        assert_eq!(err.to_string(), "Todo with ID abc not found");
    }

    #[test]
    fn test_remove_then_get_fails() {
        let store = store_with_two();
        let removed = remove_todo(&store, "1").unwrap();
        assert_eq!(removed, Todo::new(1, "Buy milk", false));
        assert!(matches!(
            get_todo_by_id(&store, "1"),
            Err(TodoError::NotFound(_))
        ));
    }

    #[test]
    fn test_remove_twice_fails() {
        let store = store_with_two();
        remove_todo(&store, "2").unwrap();
        assert!(matches!(
            remove_todo(&store, "2"),
            Err(TodoError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_completed_only() {
        let store = store_with_two();
        let patch = TodoPatch {
            title: None,
            completed: Some(true),
        };
        let updated = update_todo(&store, "2", patch).unwrap();
        assert_eq!(updated, Todo::new(2, "Clean house", true));
    }

    #[test]
    fn test_update_title_only() {
        let store = store_with_two();
        let patch = TodoPatch {
            title: Some("Buy bread".to_string()),
            completed: None,
        };
        let updated = update_todo(&store, "1", patch).unwrap();
        assert_eq!(updated, Todo::new(1, "Buy bread", false));
        assert_eq!(get_todo_by_id(&store, "1").unwrap(), updated);
    }

    #[test]
    fn test_update_missing_fails() {
        let store = store_with_two();
        let err = update_todo(&store, "5", TodoPatch::default()).unwrap_err();
        assert_eq!(err.to_string(), "Todo with ID 5 not found");
    }

    #[test]
    fn test_count_tracks_adds_and_removes() {
        let store = TodoStore::new();
        for i in 0..6 {
            add_todo(&store, format!("todo {i}"), i % 2 == 0).unwrap();
        }
        remove_todo(&store, "2").unwrap();
        remove_todo(&store, "5").unwrap();
        assert!(remove_todo(&store, "5").is_err());
        assert_eq!(get_todos(&store).unwrap().len(), 4);
    }

    #[test]
    fn test_add_failure_is_generic() {
        let store = TodoStore::with_todos(vec![Todo::new(u64::MAX, "last", false)]).unwrap();
        let err = add_todo(&store, "one more".to_string(), false).unwrap_err();
        assert_eq!(err.to_string(), "Failed to add todo.");
    }
}
