use actix_web::web;

pub mod auth;
pub mod health;
pub mod todos;

/// Register every route. `main.rs` and the integration tests share this, so
/// the paths under test are the paths in production.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));
    cfg.service(web::scope("/api/todos").configure(todos::configure_routes));
}
