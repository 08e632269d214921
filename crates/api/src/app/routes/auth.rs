use std::sync::Arc;

use axum::{Form, Json, extract::Extension, http::StatusCode, response::IntoResponse};

use gestao_store::RecordStore;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Login. The form's `username` carries the email; a successful login
/// returns a bearer token scoped to the user's empresa.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<dto::LoginForm>,
) -> axum::response::Response {
    let Some(user) = services.usuarios.find(&|u| u.email == form.username) else {
        return errors::json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "Incorrect email or senha",
        );
    };

    if !gestao_auth::verify_password(&form.password, &user.senha) {
        return errors::json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "Incorrect email or senha",
        );
    }

    if !user.situacao {
        return errors::json_error(StatusCode::UNAUTHORIZED, "inactive_user", "Inactive user");
    }

    let Ok(empresa) = services.empresas.get(user.id_empresa, user.id_empresa.into()) else {
        return errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            "Business not found for user",
        );
    };

    let fantasia = empresa.fantasia.unwrap_or(empresa.razao);
    match services.tokens.issue(
        user.id.into(),
        user.id_empresa,
        fantasia,
        user.email.clone(),
        user.perfil.to_string(),
    ) {
        Ok(access_token) => {
            Json(dto::TokenResponse { access_token, token_type: "bearer" }).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "token signing failed");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "token_error", "login failed")
        }
    }
}
