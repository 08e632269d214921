use serde::{Deserialize, Serialize};

use gestao_core::{TenantId, UserId};

/// JWT claims carried by a session token.
///
/// The tenant and profile travel inside the token so protected endpoints can
/// scope queries without a user lookup per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub id_usuario: UserId,
    pub id_empresa: TenantId,
    /// Tenant display name; razão social when no fantasy name is set.
    pub empresa_fantasia: String,
    pub email: String,
    pub perfil: String,
    /// Expiration, seconds since the epoch.
    pub exp: i64,
}
