//! Todo endpoints. Each handler takes `CurrentUser` first so an
//! unauthenticated request is rejected before its body or path is parsed.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::extractors::{CurrentUser, TodoId, ValidatedJson, ValidatedQuery};
use crate::infra::db::{require_db, with_txn};
use crate::services::todos::{self as todo_service, CreateTodoInput, UpdateTodoInput};
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub completed: Option<bool>,
}

async fn list(
    user: CurrentUser,
    query: ValidatedQuery<ListQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let todos = todo_service::list_todos(db, user.id, query.into_inner().completed).await?;
    Ok(HttpResponse::Ok().json(todos))
}

async fn create(
    user: CurrentUser,
    body: ValidatedJson<CreateTodoInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let todo = todo_service::create_todo(db, user.id, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(todo))
}

async fn update(
    user: CurrentUser,
    todo_id: TodoId,
    body: ValidatedJson<UpdateTodoInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let owner = user.id;
    let TodoId(id) = todo_id;
    let input = body.into_inner();

    let todo = with_txn(&app_state, |txn| {
        Box::pin(async move { todo_service::update_todo(txn, owner, id, input).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(todo))
}

async fn delete(
    user: CurrentUser,
    todo_id: TodoId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let outcome = todo_service::delete_todo(db, user.id, todo_id.0).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .service(
        web::resource("/{id}")
            .route(web::patch().to(update))
            .route(web::delete().to(delete)),
    );
}
