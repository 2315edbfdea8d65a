//! Invoice Repository
//!
//! Sale creation is a single transaction: stock validation, header + line
//! inserts, stock decrements and customer stats all commit or roll back
//! together. Voiding reverses the stock/stats effects but keeps the row.

use super::{RepoError, RepoResult};
use shared::models::{Invoice, InvoiceCreate, InvoiceItem, InvoiceWithItems, Showroom};
use sqlx::SqlitePool;

pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_VOIDED: &str = "voided";

const INVOICE_SELECT: &str = "SELECT id, invoice_no, showroom_id, customer_id, created_by, subtotal, discount_amount, tax_amount, net_amount, paid_amount, change_amount, payment_method, status, created_at, updated_at FROM invoice";

const ITEM_SELECT: &str = "SELECT id, invoice_id, product_id, product_name, quantity, unit_price, discount, tax_rate, line_total FROM invoice_item";

/// Paginated listing, newest first. `scope = None` lists all showrooms.
/// `start`/`end` bound `created_at` in millis (half-open interval).
pub async fn find_all(
    pool: &SqlitePool,
    scope: Option<i64>,
    start: Option<i64>,
    end: Option<i64>,
    page: i64,
    page_size: i64,
) -> RepoResult<(Vec<Invoice>, i64)> {
    let offset = (page.max(1) - 1) * page_size;
    let sql = format!(
        "{INVOICE_SELECT} WHERE (?1 IS NULL OR showroom_id = ?1) AND (?2 IS NULL OR created_at >= ?2) AND (?3 IS NULL OR created_at < ?3) ORDER BY created_at DESC LIMIT ?4 OFFSET ?5"
    );
    let rows = sqlx::query_as::<_, Invoice>(&sql)
        .bind(scope)
        .bind(start)
        .bind(end)
        .bind(page_size)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    let (total,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM invoice WHERE (?1 IS NULL OR showroom_id = ?1) AND (?2 IS NULL OR created_at >= ?2) AND (?3 IS NULL OR created_at < ?3)",
    )
    .bind(scope)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;

    Ok((rows, total))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<InvoiceWithItems>> {
    let sql = format!("{INVOICE_SELECT} WHERE id = ?");
    let Some(invoice) = sqlx::query_as::<_, Invoice>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
    else {
        return Ok(None);
    };

    let items_sql = format!("{ITEM_SELECT} WHERE invoice_id = ? ORDER BY id");
    let items = sqlx::query_as::<_, InvoiceItem>(&items_sql)
        .bind(id)
        .fetch_all(pool)
        .await?;

    Ok(Some(InvoiceWithItems { invoice, items }))
}

/// Create a sale for `showroom`, priced at the moment of the call.
///
/// `tax_rate` is the percent rate already resolved by the handler (explicit
/// `tax_id`, business default, or zero).
pub async fn create(
    pool: &SqlitePool,
    showroom: &Showroom,
    created_by: i64,
    tax_rate: f64,
    data: InvoiceCreate,
) -> RepoResult<InvoiceWithItems> {
    if data.items.is_empty() {
        return Err(RepoError::Validation("Invoice must contain at least one item".into()));
    }
    if data.paid_amount < 0.0 {
        return Err(RepoError::Validation("paid_amount must not be negative".into()));
    }

    let now = shared::util::now_millis();
    let invoice_id = shared::util::snowflake_id();

    let mut tx = pool.begin().await?;

    // Snapshot price/name and validate stock per line
    let mut subtotal = 0.0;
    let mut discount_amount = 0.0;
    let mut tax_amount = 0.0;
    let mut lines: Vec<(i64, String, i64, f64, f64, f64)> = Vec::with_capacity(data.items.len());

    for line in &data.items {
        if line.quantity <= 0 {
            return Err(RepoError::Validation(format!(
                "Quantity for product {} must be positive",
                line.product_id
            )));
        }
        let row: Option<(String, f64, i64)> = sqlx::query_as(
            "SELECT name, selling_price, quantity FROM product WHERE id = ? AND is_active = 1",
        )
        .bind(line.product_id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some((name, unit_price, on_hand)) = row else {
            return Err(RepoError::NotFound(format!("Product {} not found", line.product_id)));
        };
        if on_hand < line.quantity {
            return Err(RepoError::Rule(format!(
                "Insufficient stock for {name}: {on_hand} on hand, {} requested",
                line.quantity
            )));
        }

        let gross = unit_price * line.quantity as f64;
        let taxable = gross - line.discount;
        if taxable < 0.0 {
            return Err(RepoError::Validation(format!(
                "Discount on {name} exceeds the line amount"
            )));
        }
        let tax = taxable * tax_rate / 100.0;

        subtotal += gross;
        discount_amount += line.discount;
        tax_amount += tax;
        lines.push((
            line.product_id,
            name,
            line.quantity,
            unit_price,
            line.discount,
            taxable + tax,
        ));
    }

    let net_amount = subtotal - discount_amount + tax_amount;
    if data.paid_amount < net_amount {
        return Err(RepoError::Rule(format!(
            "Paid amount {:.2} is less than the invoice total {net_amount:.2}",
            data.paid_amount
        )));
    }
    let change_amount = data.paid_amount - net_amount;

    // Per-showroom sequential number, assigned inside the transaction
    let (seq,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM invoice WHERE showroom_id = ?")
        .bind(showroom.id)
        .fetch_one(&mut *tx)
        .await?;
    let invoice_no = format!("{}-{:06}", showroom.invoice_prefix, seq + 1);

    sqlx::query(
        "INSERT INTO invoice (id, invoice_no, showroom_id, customer_id, created_by, subtotal, discount_amount, tax_amount, net_amount, paid_amount, change_amount, payment_method, status, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?14)",
    )
    .bind(invoice_id)
    .bind(&invoice_no)
    .bind(showroom.id)
    .bind(data.customer_id)
    .bind(created_by)
    .bind(subtotal)
    .bind(discount_amount)
    .bind(tax_amount)
    .bind(net_amount)
    .bind(data.paid_amount)
    .bind(change_amount)
    .bind(&data.payment_method)
    .bind(STATUS_COMPLETED)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    for (product_id, name, quantity, unit_price, discount, line_total) in &lines {
        sqlx::query(
            "INSERT INTO invoice_item (id, invoice_id, product_id, product_name, quantity, unit_price, discount, tax_rate, line_total) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(shared::util::snowflake_id())
        .bind(invoice_id)
        .bind(product_id)
        .bind(name)
        .bind(quantity)
        .bind(unit_price)
        .bind(discount)
        .bind(tax_rate)
        .bind(line_total)
        .execute(&mut *tx)
        .await?;

        // Guarded decrement; a concurrent sale may have taken the stock
        let updated = sqlx::query(
            "UPDATE product SET quantity = quantity - ?1, updated_at = ?2 WHERE id = ?3 AND quantity >= ?1",
        )
        .bind(quantity)
        .bind(now)
        .bind(product_id)
        .execute(&mut *tx)
        .await?;
        if updated.rows_affected() == 0 {
            return Err(RepoError::Rule(format!("Insufficient stock for {name}")));
        }
    }

    if let Some(customer_id) = data.customer_id {
        sqlx::query(
            "UPDATE customer SET total_spent = total_spent + ?1, purchase_count = purchase_count + 1, updated_at = ?2 WHERE id = ?3 AND is_active = 1",
        )
        .bind(net_amount)
        .bind(now)
        .bind(customer_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    find_by_id(pool, invoice_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create invoice".into()))
}

/// Void a completed invoice: restore stock, reverse customer stats, mark
/// the row `voided`. Idempotence is rejected, not silently absorbed.
pub async fn void(pool: &SqlitePool, id: i64) -> RepoResult<InvoiceWithItems> {
    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;

    let sql = format!("{INVOICE_SELECT} WHERE id = ?");
    let Some(invoice) = sqlx::query_as::<_, Invoice>(&sql)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
    else {
        return Err(RepoError::NotFound(format!("Invoice {id} not found")));
    };
    if invoice.status == STATUS_VOIDED {
        return Err(RepoError::Rule(format!("Invoice {} is already voided", invoice.invoice_no)));
    }

    let items_sql = format!("{ITEM_SELECT} WHERE invoice_id = ?");
    let items = sqlx::query_as::<_, InvoiceItem>(&items_sql)
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

    for item in &items {
        sqlx::query("UPDATE product SET quantity = quantity + ?1, updated_at = ?2 WHERE id = ?3")
            .bind(item.quantity)
            .bind(now)
            .bind(item.product_id)
            .execute(&mut *tx)
            .await?;
    }

    if let Some(customer_id) = invoice.customer_id {
        sqlx::query(
            "UPDATE customer SET total_spent = total_spent - ?1, purchase_count = purchase_count - 1, updated_at = ?2 WHERE id = ?3",
        )
        .bind(invoice.net_amount)
        .bind(now)
        .bind(customer_id)
        .execute(&mut *tx)
        .await?;
    }

    sqlx::query("UPDATE invoice SET status = ?1, updated_at = ?2 WHERE id = ?3")
        .bind(STATUS_VOIDED)
        .bind(now)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Invoice {id} not found")))
}
