//! Reports API Handlers
//!
//! Time ranges accept either explicit `start`/`end` millisecond bounds or
//! a named `range` (today / week / month), resolved against UTC midnight.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{Datelike, Duration, TimeZone, Utc};
use serde::Deserialize;

use crate::AppError;
use crate::core::ServerState;
use crate::db::repository::reports;
use crate::db::repository::reports::{
    ExpenseSummary, InventoryValuation, SalesSummary, TopProduct,
};
use crate::utils::AppResult;

const DEFAULT_TOP_LIMIT: i64 = 10;
const MAX_TOP_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub range: Option<String>,
    pub start: Option<i64>,
    pub end: Option<i64>,
    /// Optional showroom filter (reports are mounted unguarded, so the
    /// filter is a parameter rather than a scope extension)
    pub showroom_id: Option<i64>,
    pub limit: Option<i64>,
}

/// Resolve (start, end) millis from a named range or explicit bounds.
fn resolve_range(query: &RangeQuery) -> Result<(Option<i64>, Option<i64>), AppError> {
    if query.start.is_some() || query.end.is_some() {
        if let (Some(s), Some(e)) = (query.start, query.end)
            && s >= e
        {
            return Err(AppError::validation("start must be before end"));
        }
        return Ok((query.start, query.end));
    }

    let Some(range) = query.range.as_deref() else {
        return Ok((None, None));
    };

    let now = Utc::now();
    let today = now.date_naive();
    let day_start = |date: chrono::NaiveDate| {
        Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("midnight is valid"))
            .timestamp_millis()
    };

    let bounds = match range {
        "today" => (day_start(today), day_start(today + Duration::days(1))),
        "week" => {
            let weekday = today.weekday().num_days_from_monday();
            let week_start = today - Duration::days(weekday as i64);
            (day_start(week_start), day_start(today + Duration::days(1)))
        }
        "month" => {
            let month_start = today.with_day(1).unwrap_or(today);
            (day_start(month_start), day_start(today + Duration::days(1)))
        }
        other => {
            return Err(AppError::validation(format!(
                "unknown range '{other}' (expected today, week or month)"
            )));
        }
    };
    Ok((Some(bounds.0), Some(bounds.1)))
}

/// GET /api/v1/reports/sales - 销售汇总
pub async fn sales(
    State(state): State<ServerState>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<SalesSummary>> {
    let (start, end) = resolve_range(&query)?;
    let summary = reports::sales_summary(&state.pool, query.showroom_id, start, end).await?;
    Ok(Json(summary))
}

/// GET /api/v1/reports/top-products - 销量排行
pub async fn top_products(
    State(state): State<ServerState>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<Vec<TopProduct>>> {
    let (start, end) = resolve_range(&query)?;
    let limit = query.limit.unwrap_or(DEFAULT_TOP_LIMIT).clamp(1, MAX_TOP_LIMIT);
    let rows = reports::top_products(&state.pool, query.showroom_id, start, end, limit).await?;
    Ok(Json(rows))
}

/// GET /api/v1/reports/inventory - 库存估值 (按位置)
pub async fn inventory(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<InventoryValuation>>> {
    let rows = reports::inventory_valuation(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/v1/reports/expenses - 支出汇总 (按类别)
pub async fn expenses(
    State(state): State<ServerState>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<Vec<ExpenseSummary>>> {
    let (start, end) = resolve_range(&query)?;
    let rows = reports::expense_summary(&state.pool, query.showroom_id, start, end).await?;
    Ok(Json(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(range: Option<&str>, start: Option<i64>, end: Option<i64>) -> RangeQuery {
        RangeQuery {
            range: range.map(str::to_string),
            start,
            end,
            showroom_id: None,
            limit: None,
        }
    }

    #[test]
    fn explicit_bounds_pass_through() {
        let (s, e) = resolve_range(&query(None, Some(100), Some(200))).expect("valid range");
        assert_eq!((s, e), (Some(100), Some(200)));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert!(resolve_range(&query(None, Some(200), Some(100))).is_err());
    }

    #[test]
    fn named_ranges_resolve_to_ordered_bounds() {
        for name in ["today", "week", "month"] {
            let (s, e) = resolve_range(&query(Some(name), None, None)).expect("valid range");
            let (s, e) = (s.expect("start"), e.expect("end"));
            assert!(s < e, "{name} should produce an ordered interval");
        }
    }

    #[test]
    fn unknown_range_is_rejected() {
        assert!(resolve_range(&query(Some("decade"), None, None)).is_err());
    }

    #[test]
    fn missing_range_means_unbounded() {
        let (s, e) = resolve_range(&query(None, None, None)).expect("valid range");
        assert_eq!((s, e), (None, None));
    }
}
