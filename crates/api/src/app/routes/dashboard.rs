//! Dashboard aggregation over the tenant's orders, accounts and stock.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    response::IntoResponse,
};
use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use gestao_domain::enums::{ContaSituacao, ContaTipo, PedidoSituacao};
use gestao_store::RecordStore;

use crate::app::dto::DashboardParams;
use crate::app::services::AppServices;
use crate::context::TenantContext;

#[derive(Debug, Serialize)]
struct Summary {
    revenue: Decimal,
    orders: usize,
    to_receive: Decimal,
    to_pay: Decimal,
    net_balance: Decimal,
}

#[derive(Debug, Serialize)]
struct NameValue {
    name: String,
    value: usize,
}

#[derive(Debug, Serialize)]
struct EvolutionPoint {
    date: String,
    value: Decimal,
}

#[derive(Debug, Serialize)]
struct Charts {
    orders_by_status: Vec<NameValue>,
    sales_evolution: Vec<EvolutionPoint>,
}

#[derive(Debug, Serialize)]
struct RecentOrder {
    id: i64,
    cliente: String,
    total: Decimal,
    situacao: String,
    data: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct LowStockItem {
    sku: String,
    produto: String,
    quantidade: i64,
}

#[derive(Debug, Serialize)]
struct DashboardStats {
    summary: Summary,
    charts: Charts,
    recent_orders: Vec<RecentOrder>,
    low_stock: Vec<LowStockItem>,
}

const LOW_STOCK_THRESHOLD: i64 = 10;
const RECENT_ORDERS_LIMIT: usize = 5;
const LOW_STOCK_LIMIT: usize = 5;

pub async fn stats(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Query(params): Query<DashboardParams>,
) -> axum::response::Response {
    let end = params.end_date.unwrap_or_else(|| Utc::now().date_naive());
    let start = params.start_date.unwrap_or(end - Duration::days(30));
    let tenant = tenant.tenant_id();

    let pedidos = services.pedidos.list(tenant);
    let in_range = |date: Option<NaiveDate>| date.map(|d| d >= start && d <= end).unwrap_or(false);

    // Sales summary: orders issued in the window, cancellations excluded.
    let mut revenue = Decimal::ZERO;
    let mut orders = 0usize;
    for pedido in &pedidos {
        if in_range(pedido.data_emissao) && pedido.situacao != PedidoSituacao::Cancelado {
            revenue += pedido.total.unwrap_or(Decimal::ZERO);
            orders += 1;
        }
    }

    // Orders by status over the window, cancellations included.
    let mut orders_by_status: Vec<NameValue> = Vec::new();
    for pedido in &pedidos {
        if !in_range(pedido.data_emissao) {
            continue;
        }
        let name = pedido.situacao.as_str();
        match orders_by_status.iter_mut().find(|nv| nv.name == name) {
            Some(nv) => nv.value += 1,
            None => orders_by_status.push(NameValue { name: name.to_string(), value: 1 }),
        }
    }

    // Receivables vs payables due in the window.
    let mut to_receive = Decimal::ZERO;
    let mut to_pay = Decimal::ZERO;
    for conta in services.contas.list(tenant) {
        if conta.situacao == ContaSituacao::Cancelado || !in_range(conta.data_vencimento) {
            continue;
        }
        match conta.tipo_conta {
            ContaTipo::AReceber => to_receive += conta.valor,
            ContaTipo::APagar => to_pay += conta.valor,
        }
    }

    // Five most recent orders regardless of window.
    let mut by_emission = pedidos.clone();
    by_emission.sort_by(|a, b| b.data_emissao.cmp(&a.data_emissao));
    let recent_orders: Vec<RecentOrder> = by_emission
        .iter()
        .take(RECENT_ORDERS_LIMIT)
        .map(|pedido| {
            let cliente = pedido
                .id_cliente
                .and_then(|id| services.cadastros.get(tenant, id).ok())
                .map(|c| c.nome_razao)
                .unwrap_or_else(|| "Consumidor Final".to_string());
            RecentOrder {
                id: pedido.id.value(),
                cliente,
                total: pedido.total.unwrap_or(Decimal::ZERO),
                situacao: pedido.situacao.to_string(),
                data: pedido.data_emissao,
            }
        })
        .collect();

    // Products whose summed stock lots fall under the threshold. Products
    // with no stock rows at all are not alerts.
    let estoque = services.estoque.list(tenant);
    let mut low_stock = Vec::new();
    for produto in services.produtos.list(tenant) {
        let lots: Vec<i64> = estoque
            .iter()
            .filter(|e| e.id_produto == produto.id)
            .map(|e| e.quantidade)
            .collect();
        if lots.is_empty() {
            continue;
        }
        let quantidade: i64 = lots.iter().sum();
        if quantidade < LOW_STOCK_THRESHOLD {
            low_stock.push(LowStockItem {
                sku: produto.sku,
                produto: produto.descricao,
                quantidade,
            });
            if low_stock.len() == LOW_STOCK_LIMIT {
                break;
            }
        }
    }

    // Daily revenue evolution over the window, cancellations excluded.
    let mut daily: Vec<(NaiveDate, Decimal)> = Vec::new();
    for pedido in &pedidos {
        if pedido.situacao == PedidoSituacao::Cancelado {
            continue;
        }
        let Some(date) = pedido.data_emissao.filter(|d| *d >= start && *d <= end) else {
            continue;
        };
        match daily.iter_mut().find(|(d, _)| *d == date) {
            Some((_, total)) => *total += pedido.total.unwrap_or(Decimal::ZERO),
            None => daily.push((date, pedido.total.unwrap_or(Decimal::ZERO))),
        }
    }
    daily.sort_by_key(|(d, _)| *d);
    let sales_evolution = daily
        .into_iter()
        .map(|(date, value)| EvolutionPoint { date: date.format("%d/%m").to_string(), value })
        .collect();

    Json(DashboardStats {
        summary: Summary {
            revenue,
            orders,
            to_receive,
            to_pay,
            net_balance: to_receive - to_pay,
        },
        charts: Charts { orders_by_status, sales_evolution },
        recent_orders,
        low_stock,
    })
    .into_response()
}
