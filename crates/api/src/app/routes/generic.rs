//! Generic CRUD routes keyed by route model name.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::Value;

use gestao_core::RecordId;
use gestao_registry::RegistryEntry;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::TenantContext;

fn resolve<'a>(
    services: &'a AppServices,
    model_name: &str,
) -> Result<&'a Arc<RegistryEntry>, axum::response::Response> {
    services
        .registry
        .resolve(model_name)
        .ok_or_else(|| errors::json_error(StatusCode::NOT_FOUND, "not_found", "Model not found"))
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Path(model_name): Path<String>,
    Query(params): Query<dto::ListParams>,
) -> axum::response::Response {
    let entry = match resolve(&services, &model_name) {
        Ok(entry) => entry,
        Err(res) => return res,
    };

    match entry.handler.list(tenant.tenant_id(), &params.into_query()) {
        Ok(page) => Json(page).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Path(model_name): Path<String>,
    Json(payload): Json<Value>,
) -> axum::response::Response {
    let entry = match resolve(&services, &model_name) {
        Ok(entry) => entry,
        Err(res) => return res,
    };

    match entry.handler.create(tenant.tenant_id(), payload) {
        Ok(created) => (StatusCode::OK, Json(created)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn read_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Path((model_name, id)): Path<(String, i64)>,
) -> axum::response::Response {
    let entry = match resolve(&services, &model_name) {
        Ok(entry) => entry,
        Err(res) => return res,
    };

    match entry.handler.get(tenant.tenant_id(), RecordId::new(id)) {
        Ok(item) => Json(item).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Path((model_name, id)): Path<(String, i64)>,
    Json(payload): Json<Value>,
) -> axum::response::Response {
    let entry = match resolve(&services, &model_name) {
        Ok(entry) => entry,
        Err(res) => return res,
    };

    match entry.handler.update(tenant.tenant_id(), RecordId::new(id), payload) {
        Ok(updated) => Json(updated).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Path((model_name, id)): Path<(String, i64)>,
) -> axum::response::Response {
    let entry = match resolve(&services, &model_name) {
        Ok(entry) => entry,
        Err(res) => return res,
    };

    match entry.handler.delete(tenant.tenant_id(), RecordId::new(id)) {
        Ok(removed) => Json(removed).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// All filtered rows of the tenant as a CSV attachment.
pub async fn export_items(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Path(model_name): Path<String>,
    Query(params): Query<dto::ListParams>,
) -> axum::response::Response {
    let entry = match resolve(&services, &model_name) {
        Ok(entry) => entry,
        Err(res) => return res,
    };

    match entry.handler.export_csv(tenant.tenant_id(), &params.into_query()) {
        Ok(csv) => {
            let filename = format!("{model_name}_export_{}.csv", tenant.tenant_id());
            (
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename={filename}"),
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
