//! Todo repository functions. Every operation takes the owner id and never
//! touches another owner's rows.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::todos_sea::{self as todos_adapter, TodoCreate, TodoUpdate};
use crate::errors::domain::DomainError;

/// Todo domain model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub user_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Fields a caller may change; see [`TodoUpdate`] for the description tri-state.
pub type TodoPatch = TodoUpdate;

pub async fn insert_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner: i64,
    title: &str,
    description: Option<&str>,
) -> Result<Todo, DomainError> {
    let dto = TodoCreate {
        user_id: owner,
        title: title.to_string(),
        description: description.map(str::to_string),
    };
    Ok(Todo::from(todos_adapter::insert(conn, dto).await?))
}

pub async fn select_todos<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner: i64,
    completed: Option<bool>,
) -> Result<Vec<Todo>, DomainError> {
    let rows = todos_adapter::select_by_owner(conn, owner, completed).await?;
    Ok(rows.into_iter().map(Todo::from).collect())
}

pub async fn find_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    owner: i64,
) -> Result<Option<Todo>, DomainError> {
    let row = todos_adapter::find_owned(conn, id, owner).await?;
    Ok(row.map(Todo::from))
}

/// Missing and foreign rows both yield `NotFoundKind::Todo`.
pub async fn update_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    owner: i64,
    patch: TodoPatch,
) -> Result<Todo, DomainError> {
    todos_adapter::update_owned(conn, id, owner, patch)
        .await?
        .map(Todo::from)
        .ok_or_else(DomainError::todo_not_found)
}

/// `true` when a row was removed.
pub async fn delete_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    owner: i64,
) -> Result<bool, DomainError> {
    Ok(todos_adapter::delete_owned(conn, id, owner).await?)
}

impl From<crate::entities::todos::Model> for Todo {
    fn from(model: crate::entities::todos::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            completed: model.completed,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
