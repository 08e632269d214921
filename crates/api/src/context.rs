use gestao_core::{TenantId, UserId};

/// Tenant context for a request.
///
/// Derived from the session token; present on every protected route.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TenantContext {
    tenant_id: TenantId,
}

impl TenantContext {
    pub fn new(tenant_id: TenantId) -> Self {
        Self { tenant_id }
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }
}

/// Authenticated identity for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    user_id: UserId,
    email: String,
    perfil: String,
}

impl PrincipalContext {
    pub fn new(user_id: UserId, email: String, perfil: String) -> Self {
        Self { user_id, email, perfil }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn perfil(&self) -> &str {
        &self.perfil
    }
}
