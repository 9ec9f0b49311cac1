//! SeaORM adapter for the todo repository.
//!
//! Every statement is filtered on `user_id`; a row owned by someone else is
//! indistinguishable from a missing one.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, NotSet,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::todos;

pub mod dto;

pub use dto::{TodoCreate, TodoUpdate};

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TodoCreate,
) -> Result<todos::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let todo_active = todos::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        description: Set(dto.description),
        completed: Set(false),
        user_id: Set(dto.user_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    todo_active.insert(conn).await
}

pub async fn select_by_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    completed: Option<bool>,
) -> Result<Vec<todos::Model>, sea_orm::DbErr> {
    let mut query = todos::Entity::find().filter(todos::Column::UserId.eq(user_id));
    if let Some(completed) = completed {
        query = query.filter(todos::Column::Completed.eq(completed));
    }
    query.order_by_asc(todos::Column::Id).all(conn).await
}

pub async fn find_owned<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    todo_id: i64,
    user_id: i64,
) -> Result<Option<todos::Model>, sea_orm::DbErr> {
    todos::Entity::find()
        .filter(todos::Column::Id.eq(todo_id))
        .filter(todos::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

/// Apply `dto` to an owned row. `Ok(None)` when the row is missing or foreign.
pub async fn update_owned<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    todo_id: i64,
    user_id: i64,
    dto: TodoUpdate,
) -> Result<Option<todos::Model>, sea_orm::DbErr> {
    let Some(existing) = find_owned(conn, todo_id, user_id).await? else {
        return Ok(None);
    };

    let mut active = existing.into_active_model();
    if let Some(title) = dto.title {
        active.title = Set(title);
    }
    if let Some(description) = dto.description {
        active.description = Set(description);
    }
    if let Some(completed) = dto.completed {
        active.completed = Set(completed);
    }
    active.updated_at = Set(time::OffsetDateTime::now_utc());

    active.update(conn).await.map(Some)
}

/// Delete an owned row; `false` when nothing matched.
pub async fn delete_owned<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    todo_id: i64,
    user_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let result = todos::Entity::delete_many()
        .filter(todos::Column::Id.eq(todo_id))
        .filter(todos::Column::UserId.eq(user_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected > 0)
}
