//! Barcode API Handlers
//!
//! Generates printable EAN-13 codes for products. The first 12 digits are
//! random; the 13th is the standard modulo-10 check digit, so any retail
//! scanner accepts the label.

use axum::{
    Json,
    extract::{Path, State},
};
use rand::Rng;
use shared::models::{Barcode, BarcodeBatchCreate};

use crate::AppError;
use crate::core::ServerState;
use crate::db::repository::barcode;
use crate::utils::AppResult;

/// Upper bound per generation request; printing sheets hold 100 labels.
const MAX_BATCH: u32 = 100;

/// Compute the EAN-13 check digit for 12 payload digits.
fn ean13_check_digit(digits: &[u8; 12]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { d as u32 } else { d as u32 * 3 })
        .sum();
    ((10 - (sum % 10)) % 10) as u8
}

/// One random EAN-13 code as a 13-char digit string.
fn generate_ean13() -> String {
    let mut rng = rand::thread_rng();
    let mut digits = [0u8; 12];
    // Leading 2 marks in-store numbering per GS1, so the codes can never
    // collide with manufacturer-issued EANs
    digits[0] = 2;
    for d in digits.iter_mut().skip(1) {
        *d = rng.gen_range(0..10);
    }
    let check = ean13_check_digit(&digits);
    let mut code = String::with_capacity(13);
    for d in digits {
        code.push((b'0' + d) as char);
    }
    code.push((b'0' + check) as char);
    code
}

/// POST /api/v1/barcode - 为商品批量生成条码
pub async fn generate(
    State(state): State<ServerState>,
    Json(payload): Json<BarcodeBatchCreate>,
) -> AppResult<Json<Vec<Barcode>>> {
    if payload.count == 0 || payload.count > MAX_BATCH {
        return Err(AppError::validation(format!(
            "count must be between 1 and {MAX_BATCH}"
        )));
    }

    barcode::product_exists(&state.pool, payload.product_id).await?;

    // Regenerate on the (rare) random collision with an existing code
    let mut codes = Vec::with_capacity(payload.count as usize);
    while codes.len() < payload.count as usize {
        let code = generate_ean13();
        if barcode::find_by_code(&state.pool, &code).await?.is_none() && !codes.contains(&code) {
            codes.push(code);
        }
    }

    let created = barcode::create_batch(&state.pool, payload.product_id, &codes).await?;
    Ok(Json(created))
}

/// GET /api/v1/barcode/product/:product_id - 商品的所有条码
pub async fn list_by_product(
    State(state): State<ServerState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<Vec<Barcode>>> {
    let barcodes = barcode::find_by_product(&state.pool, product_id).await?;
    Ok(Json(barcodes))
}

/// DELETE /api/v1/barcode/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = barcode::delete(&state.pool, id).await?;
    Ok(Json(deleted))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_digit_of(code: &str) -> u8 {
        let digits: Vec<u8> = code.bytes().map(|b| b - b'0').collect();
        let payload: [u8; 12] = digits[..12].try_into().expect("12 payload digits");
        ean13_check_digit(&payload)
    }

    #[test]
    fn known_ean13_check_digits() {
        // 4006381333931 is the canonical GS1 example
        assert_eq!(check_digit_of("4006381333931"), 1);
        // 5901234123457
        assert_eq!(check_digit_of("5901234123457"), 7);
    }

    #[test]
    fn generated_codes_are_valid_ean13() {
        for _ in 0..50 {
            let code = generate_ean13();
            assert_eq!(code.len(), 13);
            assert!(code.starts_with('2'));
            assert!(code.bytes().all(|b| b.is_ascii_digit()));
            let expected = check_digit_of(&code);
            assert_eq!(code.as_bytes()[12] - b'0', expected);
        }
    }
}
