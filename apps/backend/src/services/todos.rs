//! Owner-scoped todo operations. The owner id always comes from the verified
//! credential, never from the request body.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;
use tracing::debug;

use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::todos::{self, Todo, TodoPatch};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodoInput {
    #[serde(default)]
    pub title: Option<String>,
    // None = absent (keep), Some(None) = null (clear), Some(Some(_)) = set
    #[serde(default, with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    pub success: bool,
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::validation("Title must not be empty"));
    }
    Ok(())
}

pub async fn create_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner: i64,
    input: CreateTodoInput,
) -> Result<Todo, AppError> {
    validate_title(&input.title)?;
    // an empty description is stored as no description
    let description = input.description.filter(|d| !d.is_empty());

    let todo = todos::insert_todo(conn, owner, &input.title, description.as_deref()).await?;
    debug!(user_id = owner, todo_id = todo.id, "todo created");
    Ok(todo)
}

pub async fn list_todos<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner: i64,
    completed: Option<bool>,
) -> Result<Vec<Todo>, AppError> {
    Ok(todos::select_todos(conn, owner, completed).await?)
}

/// Apply a partial update; `updated_at` is refreshed even for an empty patch.
pub async fn update_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner: i64,
    id: i64,
    input: UpdateTodoInput,
) -> Result<Todo, AppError> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }

    let patch = TodoPatch {
        title: input.title,
        description: input.description,
        completed: input.completed,
    };
    let todo = todos::update_todo(conn, id, owner, patch).await?;
    debug!(user_id = owner, todo_id = id, "todo updated");
    Ok(todo)
}

pub async fn delete_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner: i64,
    id: i64,
) -> Result<DeleteOutcome, AppError> {
    if !todos::delete_todo(conn, id, owner).await? {
        return Err(DomainError::todo_not_found().into());
    }
    debug!(user_id = owner, todo_id = id, "todo deleted");
    Ok(DeleteOutcome { success: true })
}
