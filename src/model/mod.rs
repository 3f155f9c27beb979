//! Data models for todoql.
//!
//! - [`Todo`]: the single record kind held by the store
//! - [`TodoPatch`]: optional field replacements applied by `updateTodo`

mod todo;

pub use todo::{Todo, TodoPatch};
