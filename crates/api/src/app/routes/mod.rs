use axum::{
    Router,
    routing::{get, post},
};

pub mod auth;
pub mod dashboard;
pub mod generic;
pub mod metadata;
pub mod system;

/// Routes that need no session: login and form metadata.
pub fn public_router() -> Router {
    Router::new()
        .route("/login/token", post(auth::login))
        .route("/metadata/:model_name", get(metadata::model_metadata))
}

/// Router for all authenticated (tenant-scoped) endpoints.
pub fn protected_router() -> Router {
    Router::new()
        .route(
            "/generic/:model_name",
            get(generic::list_items).post(generic::create_item),
        )
        .route("/generic/:model_name/export", get(generic::export_items))
        .route(
            "/generic/:model_name/:id",
            get(generic::read_item)
                .put(generic::update_item)
                .delete(generic::delete_item),
        )
        .route("/dashboard/stats", get(dashboard::stats))
}
