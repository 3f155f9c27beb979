use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema, extensions::Tracing};

use crate::model::TodoPatch;
use crate::storage::TodoStore;

use super::resolvers;
use super::types::Todo;

pub type TodoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<TodoStore>) -> TodoSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .extension(Tracing)
        .data(store)
        .finish()
}

fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<TodoStore>> {
    ctx.data::<Arc<TodoStore>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List every todo in insertion order
    async fn get_todos(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Todo>>>> {
        let todos = resolvers::get_todos(get_store(ctx)?)?;
        Ok(Some(todos.into_iter().map(|t| Some(t.into())).collect()))
    }

    /// Get a single todo by ID
    async fn get_todo_by_id(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Todo>> {
        let todo = resolvers::get_todo_by_id(get_store(ctx)?, &id)?;
        Ok(Some(todo.into()))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a todo with the next free ID
    async fn add_todo(
        &self,
        ctx: &Context<'_>,
        title: String,
        completed: bool,
    ) -> async_graphql::Result<Option<Todo>> {
        let todo = resolvers::add_todo(get_store(ctx)?, title, completed)?;
        Ok(Some(todo.into()))
    }

    /// Remove a todo, returning it
    async fn remove_todo(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Todo>> {
        let todo = resolvers::remove_todo(get_store(ctx)?, &id)?;
        Ok(Some(todo.into()))
    }

    /// Replace the title and/or completion flag of a todo
    async fn update_todo(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: Option<String>,
        completed: Option<bool>,
    ) -> async_graphql::Result<Option<Todo>> {
        let patch = TodoPatch { title, completed };
        let todo = resolvers::update_todo(get_store(ctx)?, &id, patch)?;
        Ok(Some(todo.into()))
    }
}
