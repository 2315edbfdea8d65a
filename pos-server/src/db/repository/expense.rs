//! Expense Repository

use super::{RepoError, RepoResult};
use shared::models::{Expense, ExpenseCreate, ExpenseUpdate};
use sqlx::SqlitePool;

const EXPENSE_SELECT: &str = "SELECT id, title, amount, expense_head, showroom_id, incurred_on, notes, created_by, created_at, updated_at FROM expense";

pub async fn find_all(
    pool: &SqlitePool,
    scope: Option<i64>,
    start: Option<i64>,
    end: Option<i64>,
) -> RepoResult<Vec<Expense>> {
    let sql = format!(
        "{EXPENSE_SELECT} WHERE (?1 IS NULL OR showroom_id = ?1) AND (?2 IS NULL OR incurred_on >= ?2) AND (?3 IS NULL OR incurred_on < ?3) ORDER BY incurred_on DESC"
    );
    let rows = sqlx::query_as::<_, Expense>(&sql)
        .bind(scope)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Expense>> {
    let sql = format!("{EXPENSE_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Expense>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, created_by: i64, data: ExpenseCreate) -> RepoResult<Expense> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    let incurred_on = data.incurred_on.unwrap_or(now);
    sqlx::query(
        "INSERT INTO expense (id, title, amount, expense_head, showroom_id, incurred_on, notes, created_by, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
    )
    .bind(id)
    .bind(data.title)
    .bind(data.amount)
    .bind(data.expense_head)
    .bind(data.showroom_id)
    .bind(incurred_on)
    .bind(data.notes)
    .bind(created_by)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create expense".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ExpenseUpdate) -> RepoResult<Expense> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE expense SET title = COALESCE(?1, title), amount = COALESCE(?2, amount), expense_head = COALESCE(?3, expense_head), incurred_on = COALESCE(?4, incurred_on), notes = COALESCE(?5, notes), updated_at = ?6 WHERE id = ?7",
    )
    .bind(data.title)
    .bind(data.amount)
    .bind(data.expense_head)
    .bind(data.incurred_on)
    .bind(data.notes)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Expense {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Expense {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM expense WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
