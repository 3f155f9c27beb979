use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
        }
    }
}

/// Partial update for a stored [`Todo`].
///
/// `None` leaves the field unchanged. An empty title counts as omitted, so a
/// todo can never lose its title through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn apply(&self, todo: &mut Todo) {
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            todo.title = title.to_string();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}
