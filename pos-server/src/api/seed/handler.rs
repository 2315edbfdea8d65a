//! Seed Handlers
//!
//! Idempotent bootstrap data for a fresh install: business settings, the
//! head-office showroom, the main warehouse and a standard tax rate.
//! Accounts are NOT seeded; the first registration becomes the super
//! admin.

use axum::{Json, extract::State};
use serde::Serialize;
use shared::models::{ShowroomCreate, TaxCreate, WarehouseCreate};

use crate::core::ServerState;
use crate::db::repository::{business, showroom, tax, warehouse};
use crate::utils::AppResult;

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub business: String,
    pub showroom: String,
    pub warehouse: String,
    pub tax: String,
}

/// POST /api/v1/db/seed
pub async fn seed(State(state): State<ServerState>) -> AppResult<Json<SeedResponse>> {
    let settings = business::create_if_missing(&state.pool, "SparkX Retail", "BDT").await?;

    let head_office = match showroom::find_by_code(&state.pool, "HO").await? {
        Some(existing) => existing,
        None => {
            showroom::create(
                &state.pool,
                ShowroomCreate {
                    name: "Head Office".into(),
                    code: "HO".into(),
                    invoice_prefix: "HO".into(),
                    address: None,
                    phone: None,
                },
            )
            .await?
        }
    };

    let main_warehouse = match warehouse::find_all(&state.pool)
        .await?
        .into_iter()
        .find(|w| w.code == "MAIN")
    {
        Some(existing) => existing,
        None => {
            warehouse::create(
                &state.pool,
                WarehouseCreate {
                    name: "Main Warehouse".into(),
                    code: "MAIN".into(),
                    location: None,
                },
            )
            .await?
        }
    };

    let standard_tax = match tax::find_all(&state.pool)
        .await?
        .into_iter()
        .find(|t| t.name == "Standard VAT")
    {
        Some(existing) => existing,
        None => {
            tax::create(
                &state.pool,
                TaxCreate {
                    name: "Standard VAT".into(),
                    rate: 7.5,
                },
            )
            .await?
        }
    };

    tracing::info!("Seed data ensured (business, showroom, warehouse, tax)");

    Ok(Json(SeedResponse {
        business: settings.name,
        showroom: head_office.name,
        warehouse: main_warehouse.name,
        tax: standard_tax.name,
    }))
}
