//! Invoice API Handlers

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};
use serde::{Deserialize, Serialize};
use shared::models::{Invoice, InvoiceCreate, InvoiceWithItems};

use crate::AppError;
use crate::auth::{CurrentUser, ShowroomScope};
use crate::core::ServerState;
use crate::db::repository::{business, invoice, showroom, tax};
use crate::utils::AppResult;

const DEFAULT_PAGE_SIZE: i64 = 50;
const MAX_PAGE_SIZE: i64 = 500;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(rename = "pageSize")]
    pub page_size: Option<i64>,
    pub start: Option<i64>,
    pub end: Option<i64>,
}

fn default_page() -> i64 {
    1
}

#[derive(Debug, Serialize)]
pub struct InvoiceListResponse {
    pub items: Vec<Invoice>,
    pub total: i64,
    pub page: i64,
    #[serde(rename = "pageSize")]
    pub page_size: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

/// GET /api/v1/invoice - 分页发票列表 (按门店范围过滤)
pub async fn list(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<InvoiceListResponse>> {
    let page_size = query
        .page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let page = query.page.max(1);

    let (items, total) =
        invoice::find_all(&state.pool, scope.0, query.start, query.end, page, page_size).await?;

    Ok(Json(InvoiceListResponse {
        items,
        total,
        page,
        page_size,
        total_pages: (total + page_size - 1) / page_size,
    }))
}

/// GET /api/v1/invoice/:id - 发票详情 (含明细行)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Path(id): Path<i64>,
) -> AppResult<Json<InvoiceWithItems>> {
    let found = invoice::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Invoice {id}")))?;
    ensure_in_scope(&found.invoice, scope)?;
    Ok(Json(found))
}

/// POST /api/v1/invoice - 开具销售发票
///
/// The applied tax rate resolves in order: explicit `tax_id` on the
/// request, the business default tax, otherwise zero.
pub async fn create(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    current: CurrentUser,
    Json(payload): Json<InvoiceCreate>,
) -> AppResult<Json<InvoiceWithItems>> {
    // Scoped users sell from their showroom; super admins must carry an
    // assignment too, otherwise there is no showroom to invoice from.
    let showroom_id = match scope.0.or(current.showroom_id) {
        Some(id) => id,
        None => {
            return Err(AppError::business_rule(
                "No showroom assigned; cannot create an invoice",
            ));
        }
    };

    let selling_showroom = showroom::find_by_id(&state.pool, showroom_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Showroom {showroom_id}")))?;

    let tax_rate = resolve_tax_rate(&state, payload.tax_id).await?;

    let created =
        invoice::create(&state.pool, &selling_showroom, current.id, tax_rate, payload).await?;

    tracing::info!(
        invoice_no = %created.invoice.invoice_no,
        showroom_id,
        net_amount = created.invoice.net_amount,
        "Invoice created"
    );

    Ok(Json(created))
}

/// POST /api/v1/invoice/:id/void - 作废发票并回滚库存
pub async fn void(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Path(id): Path<i64>,
) -> AppResult<Json<InvoiceWithItems>> {
    let existing = invoice::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Invoice {id}")))?;
    ensure_in_scope(&existing.invoice, scope)?;

    let voided = invoice::void(&state.pool, id).await?;

    tracing::info!(invoice_no = %voided.invoice.invoice_no, "Invoice voided");
    Ok(Json(voided))
}

async fn resolve_tax_rate(state: &ServerState, tax_id: Option<i64>) -> Result<f64, AppError> {
    let effective_tax_id = match tax_id {
        Some(id) => Some(id),
        None => business::get(&state.pool).await?.and_then(|b| b.default_tax_id),
    };

    let Some(id) = effective_tax_id else {
        return Ok(0.0);
    };

    let tax_row = tax::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::validation(format!("tax_id {id} does not exist")))?;
    if !tax_row.is_active {
        return Err(AppError::business_rule(format!("Tax {} is disabled", tax_row.name)));
    }
    Ok(tax_row.rate)
}

fn ensure_in_scope(invoice: &Invoice, scope: ShowroomScope) -> Result<(), AppError> {
    if let ShowroomScope(Some(own)) = scope
        && invoice.showroom_id != own
    {
        return Err(AppError::forbidden("Invoice belongs to another showroom"));
    }
    Ok(())
}
