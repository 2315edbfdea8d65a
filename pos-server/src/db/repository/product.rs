//! Product Repository

use super::{RepoError, RepoResult};
use shared::models::{Product, ProductCreate, ProductTransfer, ProductUpdate, ProductWithRefs};
use sqlx::SqlitePool;

const PRODUCT_SELECT: &str = "SELECT id, name, item_code, product_group_id, category_id, brand_id, supplier_id, cost_price, selling_price, quantity, showroom_id, warehouse_id, description, is_active, created_at, updated_at FROM product";

const PRODUCT_WITH_REFS_SELECT: &str = "SELECT p.id, p.name, p.item_code, \
 p.product_group_id, pg.name AS product_group_name, \
 p.category_id, c.name AS category_name, \
 p.brand_id, b.name AS brand_name, \
 p.supplier_id, s.name AS supplier_name, \
 p.cost_price, p.selling_price, p.quantity, p.showroom_id, p.warehouse_id, \
 p.description, p.is_active, p.created_at, p.updated_at \
 FROM product p \
 LEFT JOIN product_group pg ON p.product_group_id = pg.id \
 LEFT JOIN category c ON p.category_id = c.id \
 LEFT JOIN brand b ON p.brand_id = b.id \
 LEFT JOIN supplier s ON p.supplier_id = s.id";

pub async fn find_all(pool: &SqlitePool, scope: Option<i64>) -> RepoResult<Vec<ProductWithRefs>> {
    let sql = format!(
        "{PRODUCT_WITH_REFS_SELECT} WHERE p.is_active = 1 AND (?1 IS NULL OR p.showroom_id = ?1) ORDER BY p.created_at DESC"
    );
    let rows = sqlx::query_as::<_, ProductWithRefs>(&sql)
        .bind(scope)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ProductWithRefs>> {
    let sql = format!("{PRODUCT_WITH_REFS_SELECT} WHERE p.id = ?");
    let row = sqlx::query_as::<_, ProductWithRefs>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Plain row without lookups, used by sale and barcode flows.
pub async fn find_row_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let sql = format!("{PRODUCT_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Product>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Match by name, item code or an attached barcode.
pub async fn search(
    pool: &SqlitePool,
    query: &str,
    scope: Option<i64>,
) -> RepoResult<Vec<ProductWithRefs>> {
    let pattern = format!("%{query}%");
    let sql = format!(
        "{PRODUCT_WITH_REFS_SELECT} WHERE p.is_active = 1 AND (?1 IS NULL OR p.showroom_id = ?1) \
         AND (p.name LIKE ?2 OR p.item_code LIKE ?2 \
              OR EXISTS (SELECT 1 FROM barcode bc WHERE bc.product_id = p.id AND bc.code = ?3)) \
         ORDER BY p.name"
    );
    let rows = sqlx::query_as::<_, ProductWithRefs>(&sql)
        .bind(scope)
        .bind(&pattern)
        .bind(query)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(pool: &SqlitePool, data: ProductCreate) -> RepoResult<ProductWithRefs> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO product (id, name, item_code, product_group_id, category_id, brand_id, supplier_id, cost_price, selling_price, quantity, showroom_id, warehouse_id, description, is_active, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, 1, ?14, ?14)",
    )
    .bind(id)
    .bind(data.name)
    .bind(data.item_code)
    .bind(data.product_group_id)
    .bind(data.category_id)
    .bind(data.brand_id)
    .bind(data.supplier_id)
    .bind(data.cost_price)
    .bind(data.selling_price)
    .bind(data.quantity)
    .bind(data.showroom_id)
    .bind(data.warehouse_id)
    .bind(data.description)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ProductUpdate) -> RepoResult<ProductWithRefs> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE product SET name = COALESCE(?1, name), item_code = COALESCE(?2, item_code), product_group_id = COALESCE(?3, product_group_id), category_id = COALESCE(?4, category_id), brand_id = COALESCE(?5, brand_id), supplier_id = COALESCE(?6, supplier_id), cost_price = COALESCE(?7, cost_price), selling_price = COALESCE(?8, selling_price), quantity = COALESCE(?9, quantity), description = COALESCE(?10, description), is_active = COALESCE(?11, is_active), updated_at = ?12 WHERE id = ?13",
    )
    .bind(data.name)
    .bind(data.item_code)
    .bind(data.product_group_id)
    .bind(data.category_id)
    .bind(data.brand_id)
    .bind(data.supplier_id)
    .bind(data.cost_price)
    .bind(data.selling_price)
    .bind(data.quantity)
    .bind(data.description)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}

/// Move a product to another showroom/warehouse. Both targets may be set
/// (showroom floor + backing warehouse) or either cleared with NULL.
pub async fn transfer(
    pool: &SqlitePool,
    id: i64,
    data: ProductTransfer,
) -> RepoResult<ProductWithRefs> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE product SET showroom_id = ?1, warehouse_id = ?2, updated_at = ?3 WHERE id = ?4",
    )
    .bind(data.showroom_id)
    .bind(data.warehouse_id)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE product SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1",
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
