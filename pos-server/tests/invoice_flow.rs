//! End-to-end sale flow: stock, totals, numbering, voiding, barcodes.

mod common;

use common::TestServer;
use http::StatusCode;
use serde_json::json;

/// Register the super admin, give them a showroom and return a fresh
/// token that carries the assignment.
async fn admin_with_showroom(server: &TestServer) -> (String, i64) {
    server.seed().await;
    let admin_id = server.register("Boss", "boss@sparkx.test", "password-1").await;
    let token = server.login("boss@sparkx.test", "password-1").await;
    let ho = server.head_office_id(&token).await;

    let (status, _) = server
        .put(
            &format!("/api/v1/user/{admin_id}"),
            Some(&token),
            json!({"showroom_id": ho}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // Re-login so the token claims include the showroom assignment
    let token = server.login("boss@sparkx.test", "password-1").await;
    (token, ho)
}

async fn create_product(server: &TestServer, token: &str, ho: i64, code: &str, qty: i64) -> i64 {
    let (status, body) = server
        .post(
            "/api/v1/product",
            Some(token),
            json!({
                "name": format!("Shirt {code}"),
                "item_code": code,
                "cost_price": 400.0,
                "selling_price": 550.0,
                "quantity": qty,
                "showroom_id": ho,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "product create failed: {body}");
    body["id"].as_i64().expect("product id")
}

async fn product_quantity(server: &TestServer, token: &str, id: i64) -> i64 {
    let (status, body) = server.get(&format!("/api/v1/product/{id}"), Some(token)).await;
    assert_eq!(status, StatusCode::OK);
    body["quantity"].as_i64().expect("quantity")
}

#[tokio::test]
async fn sale_decrements_stock_and_computes_totals() {
    let server = TestServer::start().await;
    let (token, ho) = admin_with_showroom(&server).await;
    let product_id = create_product(&server, &token, ho, "SH-001", 10).await;

    let (status, body) = server
        .post(
            "/api/v1/invoice",
            Some(&token),
            json!({
                "payment_method": "cash",
                "paid_amount": 2000.0,
                "items": [{"product_id": product_id, "quantity": 3}],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "invoice create failed: {body}");

    // 3 × 550, no discount, no default tax configured
    assert_eq!(body["subtotal"].as_f64(), Some(1650.0));
    assert_eq!(body["net_amount"].as_f64(), Some(1650.0));
    assert_eq!(body["change_amount"].as_f64(), Some(350.0));
    assert_eq!(body["status"], "completed");
    assert_eq!(body["items"].as_array().map(Vec::len), Some(1));

    // Numbering uses the showroom prefix and a running sequence
    let invoice_no = body["invoice_no"].as_str().expect("invoice_no");
    assert_eq!(invoice_no, "HO-000001");

    assert_eq!(product_quantity(&server, &token, product_id).await, 7);

    // Next invoice continues the sequence
    let (status, body) = server
        .post(
            "/api/v1/invoice",
            Some(&token),
            json!({
                "payment_method": "cash",
                "paid_amount": 550.0,
                "items": [{"product_id": product_id, "quantity": 1}],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["invoice_no"], "HO-000002");
}

#[tokio::test]
async fn insufficient_stock_rejects_and_persists_nothing() {
    let server = TestServer::start().await;
    let (token, ho) = admin_with_showroom(&server).await;
    let product_id = create_product(&server, &token, ho, "SH-002", 5).await;

    let (status, body) = server
        .post(
            "/api/v1/invoice",
            Some(&token),
            json!({
                "payment_method": "cash",
                "paid_amount": 100000.0,
                "items": [{"product_id": product_id, "quantity": 100}],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");

    // Stock untouched, nothing listed
    assert_eq!(product_quantity(&server, &token, product_id).await, 5);
    let (status, body) = server.get("/api/v1/invoice", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"].as_i64(), Some(0));
}

#[tokio::test]
async fn underpayment_is_rejected() {
    let server = TestServer::start().await;
    let (token, ho) = admin_with_showroom(&server).await;
    let product_id = create_product(&server, &token, ho, "SH-003", 5).await;

    let (status, _) = server
        .post(
            "/api/v1/invoice",
            Some(&token),
            json!({
                "payment_method": "cash",
                "paid_amount": 10.0,
                "items": [{"product_id": product_id, "quantity": 1}],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn voiding_restores_stock_and_cannot_repeat() {
    let server = TestServer::start().await;
    let (token, ho) = admin_with_showroom(&server).await;
    let product_id = create_product(&server, &token, ho, "SH-004", 10).await;

    let (status, body) = server
        .post(
            "/api/v1/invoice",
            Some(&token),
            json!({
                "payment_method": "card",
                "paid_amount": 2200.0,
                "items": [{"product_id": product_id, "quantity": 4}],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let invoice_id = body["id"].as_i64().expect("invoice id");
    assert_eq!(product_quantity(&server, &token, product_id).await, 6);

    let (status, body) = server
        .post(
            &format!("/api/v1/invoice/{invoice_id}/void"),
            Some(&token),
            serde_json::Value::Null,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "voided");
    assert_eq!(product_quantity(&server, &token, product_id).await, 10);

    // Double void is a business-rule error
    let (status, _) = server
        .post(
            &format!("/api/v1/invoice/{invoice_id}/void"),
            Some(&token),
            serde_json::Value::Null,
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn customer_stats_follow_the_sale() {
    let server = TestServer::start().await;
    let (token, ho) = admin_with_showroom(&server).await;
    let product_id = create_product(&server, &token, ho, "SH-005", 10).await;

    let (status, body) = server
        .post(
            "/api/v1/customer",
            Some(&token),
            json!({"name": "Walk-in Regular", "phone": "01700000000"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let customer_id = body["id"].as_i64().expect("customer id");

    let (status, _) = server
        .post(
            "/api/v1/invoice",
            Some(&token),
            json!({
                "customer_id": customer_id,
                "payment_method": "cash",
                "paid_amount": 1100.0,
                "items": [{"product_id": product_id, "quantity": 2}],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = server
        .get(&format!("/api/v1/customer/{customer_id}"), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_spent"].as_f64(), Some(1100.0));
    assert_eq!(body["purchase_count"].as_i64(), Some(1));
}

#[tokio::test]
async fn barcode_generation_yields_unique_ean13() {
    let server = TestServer::start().await;
    let (token, ho) = admin_with_showroom(&server).await;
    let product_id = create_product(&server, &token, ho, "SH-006", 10).await;

    let (status, body) = server
        .post(
            "/api/v1/barcode",
            Some(&token),
            json!({"product_id": product_id, "count": 5}),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let codes: Vec<&str> = body
        .as_array()
        .expect("barcode list")
        .iter()
        .map(|b| b["code"].as_str().expect("code"))
        .collect();
    assert_eq!(codes.len(), 5);
    let unique: std::collections::HashSet<_> = codes.iter().collect();
    assert_eq!(unique.len(), 5);
    for code in codes {
        assert_eq!(code.len(), 13);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    // Searching by an exact barcode finds the product
    let (status, body) = server
        .get(
            &format!("/api/v1/barcode/product/{product_id}"),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn sales_report_reflects_completed_invoices() {
    let server = TestServer::start().await;
    let (token, ho) = admin_with_showroom(&server).await;
    let product_id = create_product(&server, &token, ho, "SH-007", 20).await;

    for qty in [2, 3] {
        let (status, _) = server
            .post(
                "/api/v1/invoice",
                Some(&token),
                json!({
                    "payment_method": "cash",
                    "paid_amount": 10000.0,
                    "items": [{"product_id": product_id, "quantity": qty}],
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = server.get("/api/v1/reports/sales?range=today", None).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["invoice_count"].as_i64(), Some(2));
    assert_eq!(body["revenue"].as_f64(), Some(5.0 * 550.0));

    let (status, body) = server.get("/api/v1/reports/top-products", None).await;
    assert_eq!(status, StatusCode::OK);
    let top = body.as_array().expect("top products");
    assert_eq!(top.len(), 1);
    assert_eq!(top[0]["units_sold"].as_i64(), Some(5));
}
