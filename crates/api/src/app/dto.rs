//! Request/response DTOs.

use serde::{Deserialize, Serialize};

/// Login form body. The email travels in `username`, OAuth2-password style.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

fn default_limit() -> usize {
    10
}

/// Query parameters for the paginated listing and the CSV export.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub situacao: Option<String>,
}

impl ListParams {
    pub fn into_query(self) -> gestao_registry::ListQuery {
        gestao_registry::ListQuery {
            skip: self.skip,
            limit: self.limit,
            situacao: self.situacao,
            search_term: self.search_term,
        }
    }
}

/// Date window for the dashboard; defaults to the last 30 days.
#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    #[serde(default)]
    pub start_date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub end_date: Option<chrono::NaiveDate>,
}
