use std::sync::Arc;

use chrono::{Duration as ChronoDuration, Utc};
use gestao_api::app::{build_router, services::AppServices};
use gestao_auth::JwtClaims;
use gestao_core::{TenantId, UserId};
use gestao_registry::EntityHandler as _;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::StatusCode;
use serde_json::json;

const JWT_SECRET: &str = "test-secret";

struct TestServer {
    base_url: String,
    services: Arc<AppServices>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Same router as prod, bound to an ephemeral port, over services the
    /// test can seed directly.
    async fn spawn() -> Self {
        let services = Arc::new(AppServices::new(JWT_SECRET));
        let app = build_router(services.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/api/v1", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, services, handle }
    }

    /// Seed one empresa and its admin user through the registered handlers,
    /// the same path the HTTP layer takes.
    fn seed_tenant(&self, cnpj: &str, email: &str, password: &str) -> TenantId {
        let empresas = self.services.registry.resolve("empresas").unwrap();
        let empresa = empresas
            .handler
            .create(
                TenantId::new(0),
                json!({
                    "cnpj": cnpj,
                    "razao": "ACME Comercio Ltda",
                    "fantasia": "ACME",
                    "cep": "01000-000",
                }),
            )
            .expect("failed to seed empresa");
        let tenant = TenantId::new(empresa["id"].as_i64().unwrap());

        let usuarios = self.services.registry.resolve("usuarios").unwrap();
        usuarios
            .handler
            .create(
                tenant,
                json!({ "nome": "Admin", "email": email, "senha": password }),
            )
            .expect("failed to seed usuario");
        tenant
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn mint_jwt(tenant_id: TenantId) -> String {
    let claims = JwtClaims {
        id_usuario: UserId::new(1),
        id_empresa: tenant_id,
        empresa_fantasia: "ACME".to_string(),
        email: "admin@acme.com.br".to_string(),
        perfil: "admin".to_string(),
        exp: (Utc::now() + ChronoDuration::minutes(10)).timestamp(),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("failed to encode jwt")
}

async fn login(client: &reqwest::Client, base_url: &str, email: &str, password: &str) -> String {
    let res = client
        .post(format!("{base_url}/login/token"))
        .form(&[("username", email), ("password", password)])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["token_type"], "bearer");
    body["access_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_endpoint_is_public() {
    let srv = TestServer::spawn().await;

    // /health sits outside the /api/v1 prefix.
    let root = srv.base_url.trim_end_matches("/api/v1");
    let res = reqwest::get(format!("{root}/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn auth_required_for_protected_endpoints() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/generic/produtos", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_issues_token_and_rejects_bad_credentials() {
    let srv = TestServer::spawn().await;
    srv.seed_tenant("11.111.111/0001-11", "admin@acme.com.br", "senha-forte");

    let client = reqwest::Client::new();
    let token = login(&client, &srv.base_url, "admin@acme.com.br", "senha-forte").await;
    assert!(!token.is_empty());

    let res = client
        .post(format!("{}/login/token", srv.base_url))
        .form(&[("username", "admin@acme.com.br"), ("password", "errada")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(format!("{}/login/token", srv.base_url))
        .form(&[("username", "ninguem@acme.com.br"), ("password", "senha-forte")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn produto_lifecycle_create_read_update_delete() {
    let srv = TestServer::spawn().await;
    let tenant = srv.seed_tenant("11.111.111/0001-11", "admin@acme.com.br", "senha-forte");
    let token = mint_jwt(tenant);

    let client = reqwest::Client::new();

    // Create: tenant comes from the token, not the payload.
    let res = client
        .post(format!("{}/generic/produtos", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "sku": "SKU-1", "descricao": "Parafuso sextavado" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let created: serde_json::Value = res.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["id_empresa"].as_i64().unwrap(), tenant.value());
    assert_eq!(created["descricao"], "Parafuso sextavado");

    // Read
    let res = client
        .get(format!("{}/generic/produtos/{id}", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Update is partial: untouched attributes keep their values.
    let res = client
        .put(format!("{}/generic/produtos/{id}", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "descricao": "Parafuso allen" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();
    assert_eq!(updated["descricao"], "Parafuso allen");
    assert_eq!(updated["sku"], "SKU-1");

    // Delete returns the removed row; a second read is a 404.
    let res = client
        .delete(format!("{}/generic/produtos/{id}", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let removed: serde_json::Value = res.json().await.unwrap();
    assert_eq!(removed["id"].as_i64().unwrap(), id);

    let res = client
        .get(format!("{}/generic/produtos/{id}", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn tenant_isolation_blocks_cross_tenant_access() {
    let srv = TestServer::spawn().await;
    let tenant1 = srv.seed_tenant("11.111.111/0001-11", "um@acme.com.br", "senha-forte");
    let tenant2 = srv.seed_tenant("22.222.222/0001-22", "dois@beta.com.br", "senha-forte");
    let token1 = mint_jwt(tenant1);
    let token2 = mint_jwt(tenant2);

    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/generic/produtos", srv.base_url))
        .bearer_auth(&token1)
        .json(&json!({ "sku": "SKU-1", "descricao": "Widget" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let created: serde_json::Value = res.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();

    // Another tenant's row behaves like a row that does not exist.
    let res = client
        .get(format!("{}/generic/produtos/{id}", srv.base_url))
        .bearer_auth(&token2)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(format!("{}/generic/produtos/{id}", srv.base_url))
        .bearer_auth(&token2)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Listing under tenant2 sees nothing.
    let res = client
        .get(format!("{}/generic/produtos", srv.base_url))
        .bearer_auth(&token2)
        .send()
        .await
        .unwrap();
    let page: serde_json::Value = res.json().await.unwrap();
    assert_eq!(page["total_count"].as_u64().unwrap(), 0);
}

#[tokio::test]
async fn duplicate_sku_is_a_conflict() {
    let srv = TestServer::spawn().await;
    let tenant = srv.seed_tenant("11.111.111/0001-11", "admin@acme.com.br", "senha-forte");
    let token = mint_jwt(tenant);

    let client = reqwest::Client::new();
    for expected in [StatusCode::OK, StatusCode::CONFLICT] {
        let res = client
            .post(format!("{}/generic/produtos", srv.base_url))
            .bearer_auth(&token)
            .json(&json!({ "sku": "SKU-1", "descricao": "Widget" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), expected);
    }
}

#[tokio::test]
async fn unknown_model_name_is_not_found() {
    let srv = TestServer::spawn().await;
    let tenant = srv.seed_tenant("11.111.111/0001-11", "admin@acme.com.br", "senha-forte");
    let token = mint_jwt(tenant);

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/generic/naves", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/metadata/naves", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_supports_search_and_pagination() {
    let srv = TestServer::spawn().await;
    let tenant = srv.seed_tenant("11.111.111/0001-11", "admin@acme.com.br", "senha-forte");
    let token = mint_jwt(tenant);

    let client = reqwest::Client::new();
    for (sku, descricao) in [
        ("SKU-1", "Parafuso sextavado"),
        ("SKU-2", "Porca sextavada"),
        ("SKU-3", "Arruela de pressão"),
    ] {
        let res = client
            .post(format!("{}/generic/produtos", srv.base_url))
            .bearer_auth(&token)
            .json(&json!({ "sku": sku, "descricao": descricao }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    // Search is accent and case insensitive.
    let res = client
        .get(format!("{}/generic/produtos?search_term=PRESSAO", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let page: serde_json::Value = res.json().await.unwrap();
    assert_eq!(page["total_count"].as_u64().unwrap(), 1);
    assert_eq!(page["items"][0]["sku"], "SKU-3");

    // total_count covers the whole filtered set, not just the page.
    let res = client
        .get(format!("{}/generic/produtos?skip=1&limit=1", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let page: serde_json::Value = res.json().await.unwrap();
    assert_eq!(page["total_count"].as_u64().unwrap(), 3);
    assert_eq!(page["items"].as_array().unwrap().len(), 1);
    assert_eq!(page["items"][0]["sku"], "SKU-2");
}

#[tokio::test]
async fn metadata_is_public_and_describes_the_form() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/metadata/produtos", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let meta: serde_json::Value = res.json().await.unwrap();

    // model_name echoes the requested route name, not the type name.
    assert_eq!(meta["model_name"], "produtos");
    assert_eq!(meta["display_field"], "descricao");

    let fields = meta["fields"].as_array().unwrap();
    assert!(fields.iter().all(|f| f["name"] != "id" && f["name"] != "id_empresa"));

    // Foreign keys carry linkage instead of a widget type.
    let fornecedor = fields.iter().find(|f| f["name"] == "id_fornecedor").unwrap();
    assert!(fornecedor["type"].is_null());
    assert_eq!(fornecedor["foreign_key_model"], "cadastros");
    assert_eq!(fornecedor["foreign_key_label_field"], "nome_razao");
    assert_eq!(fornecedor["label"], "Fornecedor");

    let unidade = fields.iter().find(|f| f["name"] == "unidade").unwrap();
    assert_eq!(unidade["type"], "select");
    assert_eq!(unidade["options"].as_array().unwrap().len(), 5);

    let preco = fields.iter().find(|f| f["name"] == "preco").unwrap();
    assert_eq!(preco["format_mask"], "currency");
}

#[tokio::test]
async fn export_produces_csv_without_internal_columns() {
    let srv = TestServer::spawn().await;
    let tenant = srv.seed_tenant("11.111.111/0001-11", "admin@acme.com.br", "senha-forte");
    let token = mint_jwt(tenant);

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/generic/produtos", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "sku": "SKU-1", "descricao": "Parafuso, sextavado" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/generic/produtos/export", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "text/csv");
    assert!(res.headers()["content-disposition"]
        .to_str()
        .unwrap()
        .contains("attachment"));

    let body = res.text().await.unwrap();
    let header = body.lines().next().unwrap();
    assert!(header.contains("sku"));
    assert!(!header.contains("id_empresa"));
    // Embedded commas are quoted.
    assert!(body.contains("\"Parafuso, sextavado\""));
}

#[tokio::test]
async fn dashboard_aggregates_real_data() {
    let srv = TestServer::spawn().await;
    let tenant = srv.seed_tenant("11.111.111/0001-11", "admin@acme.com.br", "senha-forte");
    let token = mint_jwt(tenant);

    let client = reqwest::Client::new();
    let today = Utc::now().date_naive().to_string();

    // Two live orders and one canceled one.
    for (total, situacao) in [(100.0, "Orçamento"), (50.0, "Faturamento"), (999.0, "Cancelado")] {
        let res = client
            .post(format!("{}/generic/pedidos", srv.base_url))
            .bearer_auth(&token)
            .json(&json!({ "total": total, "situacao": situacao, "data_emissao": today }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    // One receivable and one payable due today.
    for (valor, tipo) in [(80.0, "A Receber"), (30.0, "A Pagar")] {
        let res = client
            .post(format!("{}/generic/contas", srv.base_url))
            .bearer_auth(&token)
            .json(&json!({ "valor": valor, "tipo_conta": tipo, "data_vencimento": today }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    // A product whose stock lots sum below the alert threshold.
    let res = client
        .post(format!("{}/generic/produtos", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "sku": "SKU-1", "descricao": "Parafuso" }))
        .send()
        .await
        .unwrap();
    let produto: serde_json::Value = res.json().await.unwrap();
    let res = client
        .post(format!("{}/generic/estoque", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "id_produto": produto["id"], "quantidade": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/dashboard/stats", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let stats: serde_json::Value = res.json().await.unwrap();

    // Canceled orders are excluded from revenue and count.
    assert_eq!(stats["summary"]["revenue"].as_f64().unwrap(), 150.0);
    assert_eq!(stats["summary"]["orders"].as_u64().unwrap(), 2);
    assert_eq!(stats["summary"]["to_receive"].as_f64().unwrap(), 80.0);
    assert_eq!(stats["summary"]["to_pay"].as_f64().unwrap(), 30.0);
    assert_eq!(stats["summary"]["net_balance"].as_f64().unwrap(), 50.0);

    // The status chart keeps canceled orders.
    let by_status = stats["charts"]["orders_by_status"].as_array().unwrap();
    assert!(by_status.iter().any(|nv| nv["name"] == "Cancelado" && nv["value"] == 1));

    let recent = stats["recent_orders"].as_array().unwrap();
    assert_eq!(recent.len(), 3);
    // No cliente on the order falls back to the walk-in label.
    assert_eq!(recent[0]["cliente"], "Consumidor Final");

    let low = stats["low_stock"].as_array().unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0]["sku"], "SKU-1");
    assert_eq!(low[0]["quantidade"].as_i64().unwrap(), 3);
}

#[tokio::test]
async fn dashboard_requires_auth() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/dashboard/stats", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
