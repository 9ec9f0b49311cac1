use std::process::ExitCode;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use todo_backend::{
    build_state, cors_middleware, routes, BcryptHasher, DbProfile, RequestTrace, SecurityConfig,
    ServerConfig, SignatureScheme, StructuredLogger, TraceSpan,
};
use tracing::{error, info, warn};

mod telemetry;

#[actix_web::main]
async fn main() -> ExitCode {
    telemetry::init_tracing();

    // Configuration comes from the process environment only; source a .env
    // file in the shell (or docker env_file) before starting.
    let security = match SecurityConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid security configuration");
            return ExitCode::FAILURE;
        }
    };
    let server = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            return ExitCode::FAILURE;
        }
    };
    let db_profile = match DbProfile::from_env() {
        Ok(profile) => profile,
        Err(e) => {
            error!(error = %e, "invalid database configuration");
            return ExitCode::FAILURE;
        }
    };

    if security.uses_default_secret() {
        warn!("JWT_SECRET is not set; using the built-in default secret");
    }
    if security.scheme == SignatureScheme::Legacy {
        warn!(
            scheme = security.scheme.as_str(),
            "legacy token signatures do not protect the secret; prefer JWT_SIGNATURE_SCHEME=hmac-sha256"
        );
    }

    let app_state = match build_state()
        .with_db(db_profile)
        .with_security(security)
        .with_password_hasher(Arc::new(BcryptHasher::new(server.bcrypt_cost)))
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            return ExitCode::FAILURE;
        }
    };

    let data = web::Data::new(app_state);
    let (host, port) = server.bind_addr();
    info!(%host, port, "starting todo backend");

    let http = HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .wrap(StructuredLogger)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port));

    let result = match http {
        Ok(server) => server.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server terminated");
            ExitCode::FAILURE
        }
    }
}
