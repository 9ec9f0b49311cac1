use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::infra::db::require_db;
use crate::services::auth::{self as auth_service, LoginInput, RegisterInput};
use crate::state::app_state::AppState;

async fn register(
    body: ValidatedJson<RegisterInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let response = auth_service::register(
        db,
        &app_state.passwords,
        &app_state.issuer,
        body.into_inner(),
    )
    .await?;

    Ok(HttpResponse::Created().json(response))
}

async fn login(
    body: ValidatedJson<LoginInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let response =
        auth_service::login(db, &app_state.passwords, &app_state.issuer, body.into_inner())
            .await?;

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/login", web::post().to(login));
}
