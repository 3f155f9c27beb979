use crate::{
    error::{Result, TodoError},
    model::{Todo, TodoPatch},
};
use std::sync::{Mutex, MutexGuard};

/// Ordered in-memory collection of todos.
///
/// Every read and every scan-then-mutate sequence runs under one lock, so an
/// index found by a scan is still valid when the mutation uses it.
///
/// Ids are kept strictly ascending in insertion order: appends use
/// `last.id + 1` and removals never reorder. The last element therefore always
/// carries the largest id.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Mutex<Vec<Todo>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `todos`, which must have strictly
    /// ascending ids.
    pub fn with_todos(todos: Vec<Todo>) -> Result<Self> {
        if let Some(pair) = todos.windows(2).find(|w| w[0].id >= w[1].id) {
            return Err(TodoError::Seed(format!(
                "todo ids must be unique and ascending, found {} before {}",
                pair[0].id, pair[1].id
            )));
        }
        Ok(Self {
            todos: Mutex::new(todos),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Todo>>> {
        self.todos
            .lock()
            .map_err(|_| TodoError::OperationFailed("Todo store lock poisoned".to_string()))
    }

    pub fn list(&self) -> Result<Vec<Todo>> {
        Ok(self.lock()?.clone())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn find_by_id(&self, id: u64) -> Result<Option<Todo>> {
        Ok(self.lock()?.iter().find(|t| t.id == id).cloned())
    }

    /// Append a new todo with the next id and return it.
    pub fn append(&self, title: String, completed: bool) -> Result<Todo> {
        let mut todos = self.lock()?;
        let id = next_id(&todos)
            .ok_or_else(|| TodoError::OperationFailed("Todo id space exhausted".to_string()))?;
        let todo = Todo::new(id, title, completed);
        tracing::info!(id = todo.id, title = %todo.title, "Adding todo");
        todos.push(todo.clone());
        Ok(todo)
    }

    /// Remove the todo with `id`, returning it, or `None` when absent.
    pub fn remove(&self, id: u64) -> Result<Option<Todo>> {
        let mut todos = self.lock()?;
        let Some(index) = todos.iter().position(|t| t.id == id) else {
            return Ok(None);
        };
        tracing::info!(id, index, "Removing todo");
        Ok(Some(remove_at(&mut todos, index)))
    }

    /// Apply `patch` to the todo with `id` and return its new state.
    pub fn update(&self, id: u64, patch: &TodoPatch) -> Result<Option<Todo>> {
        let mut todos = self.lock()?;
        let Some(todo) = todos.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        tracing::info!(id, ?patch, "Updating todo");
        patch.apply(todo);
        Ok(Some(todo.clone()))
    }
}

/// One more than the last id, or 1 for an empty list. `None` on overflow.
fn next_id(todos: &[Todo]) -> Option<u64> {
    match todos.last() {
        Some(last) => last.id.checked_add(1),
        None => Some(1),
    }
}

fn remove_at(todos: &mut Vec<Todo>, index: usize) -> Todo {
    todos.remove(index)
}
