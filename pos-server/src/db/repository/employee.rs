//! Employee Repository

use super::{RepoError, RepoResult};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::SqlitePool;

const EMPLOYEE_SELECT: &str = "SELECT id, name, phone, email, designation, salary, showroom_id, joined_at, is_active, created_at, updated_at FROM employee";

pub async fn find_all(pool: &SqlitePool, scope: Option<i64>) -> RepoResult<Vec<Employee>> {
    let sql = format!(
        "{EMPLOYEE_SELECT} WHERE is_active = 1 AND (?1 IS NULL OR showroom_id = ?1) ORDER BY name"
    );
    let rows = sqlx::query_as::<_, Employee>(&sql)
        .bind(scope)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO employee (id, name, phone, email, designation, salary, showroom_id, joined_at, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 1, ?9, ?9)",
    )
    .bind(id)
    .bind(data.name)
    .bind(data.phone)
    .bind(data.email)
    .bind(data.designation)
    .bind(data.salary)
    .bind(data.showroom_id)
    .bind(data.joined_at)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE employee SET name = COALESCE(?1, name), phone = COALESCE(?2, phone), email = COALESCE(?3, email), designation = COALESCE(?4, designation), salary = COALESCE(?5, salary), showroom_id = COALESCE(?6, showroom_id), joined_at = COALESCE(?7, joined_at), is_active = COALESCE(?8, is_active), updated_at = ?9 WHERE id = ?10",
    )
    .bind(data.name)
    .bind(data.phone)
    .bind(data.email)
    .bind(data.designation)
    .bind(data.salary)
    .bind(data.showroom_id)
    .bind(data.joined_at)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE employee SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1",
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
