//! Form-metadata route. Public, like the login route: the frontend renders
//! the login-adjacent screens before any session exists.

use std::sync::Arc;

use axum::{Json, extract::Extension, extract::Path, response::IntoResponse};

use crate::app::errors;
use crate::app::services::AppServices;

pub async fn model_metadata(
    Extension(services): Extension<Arc<AppServices>>,
    Path(model_name): Path<String>,
) -> axum::response::Response {
    match gestao_registry::model_metadata(&services.registry, &model_name) {
        Ok(meta) => Json(meta).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
