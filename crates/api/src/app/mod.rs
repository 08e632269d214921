//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: stores, registry and token service wiring
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::Router;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(jwt_secret: String) -> Router {
    build_router(Arc::new(services::AppServices::new(&jwt_secret)))
}

/// Router over pre-built services; tests use this to seed data first.
pub fn build_router(services: Arc<services::AppServices>) -> Router {
    let auth_state = middleware::AuthState { tokens: services.tokens.clone() };

    // Protected routes: require a valid session token.
    let protected = routes::protected_router()
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    let v1 = routes::public_router()
        .merge(protected)
        .layer(axum::Extension(services));

    Router::new()
        .merge(routes::system::router())
        .nest("/api/v1", v1)
}
