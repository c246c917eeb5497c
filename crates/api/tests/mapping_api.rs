//! Integration tests for the `/mappings` endpoint (migration-seeded data).

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: all seeded mappings are returned
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_seeded_mappings(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/mappings").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let mappings = body["data"].as_array().expect("data array");
    assert_eq!(mappings.len(), 26);

    let phone = mappings
        .iter()
        .find(|m| m["sourceType"] == "COURSE" && m["sourceField"] == "phone")
        .expect("course phone mapping");
    assert_eq!(phone["hubspotObject"], "CONTACT");
    assert_eq!(phone["hubspotProperty"], "phone");
    assert_eq!(phone["transformFn"], "normalizePhone");
}

// ---------------------------------------------------------------------------
// Test: sourceType filter narrows the list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_source_type(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/mappings?sourceType=HUT_BOOKING").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let mappings = body["data"].as_array().expect("data array");
    assert_eq!(mappings.len(), 6);
    assert!(mappings.iter().all(|m| m["sourceType"] == "HUT_BOOKING"));
}
