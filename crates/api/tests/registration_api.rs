//! Integration tests for the `/registrations` endpoints.

mod common;

use axum::http::StatusCode;
use common::{assert_error_response, body_json, build_test_app, get};
use serde_json::json;
use sqlx::PgPool;

use accsync_core::types::SourceType;
use accsync_db::models::registration::CreateRegistration;
use accsync_db::repositories::RegistrationRepo;

async fn seed_course(pool: &PgPool, external_id: &str, email: &str, waiver_signed: bool) {
    RegistrationRepo::create(
        pool,
        &CreateRegistration {
            source_type: SourceType::Course,
            external_id: external_id.to_string(),
            source_ref: Some("Hapily".to_string()),
            email: Some(email.to_string()),
            first_name: Some("Priya".to_string()),
            last_name: Some("Sharma".to_string()),
            raw_data: json!({
                "firstName": "Priya",
                "lastName": "Sharma",
                "email": email,
                "phone": "403-555-0201",
                "courseCode": "GMC-2026",
                "courseName": "General Mountaineering Camp 2026",
                "startDate": "2026-07-12",
                "waiverSigned": waiver_signed,
                "emergencyContact": "Raj Sharma: 403-555-0202"
            }),
        },
    )
    .await
    .expect("seed registration");
}

async fn seed_membership(pool: &PgPool, external_id: &str, email: &str) {
    RegistrationRepo::create(
        pool,
        &CreateRegistration {
            source_type: SourceType::Membership,
            external_id: external_id.to_string(),
            source_ref: Some("Section CSV".to_string()),
            email: Some(email.to_string()),
            first_name: Some("Marcus".to_string()),
            last_name: Some("Chen".to_string()),
            raw_data: json!({
                "firstName": "Marcus",
                "lastName": "Chen",
                "email": email,
                "phone": "604-555-0303",
                "membershipType": "Full",
                "section": "van",
                "emergencyContact": "Lin Chen: 604-555-0304",
                "waiverSigned": true
            }),
        },
    )
    .await
    .expect("seed registration");
}

// ---------------------------------------------------------------------------
// Test: list returns validated rows with canonical and payload attached
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_validated_rows(pool: PgPool) {
    seed_course(&pool, "HAP-1", "priya.sharma@email.com", true).await;
    seed_course(&pool, "HAP-2", "no.waiver@email.com", false).await;

    let app = build_test_app(pool);
    let response = get(app, "/api/v1/registrations").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().expect("data array");
    assert_eq!(rows.len(), 2);

    let valid = rows
        .iter()
        .find(|r| r["externalId"] == "HAP-1")
        .expect("HAP-1 present");
    assert_eq!(valid["validationStatus"], "VALID");
    assert_eq!(valid["sourceType"], "COURSE");
    assert_eq!(valid["canonical"]["phone"], "+14035550201");
    assert_eq!(valid["hubspotPayload"]["firstname"], "Priya");

    let blocked = rows
        .iter()
        .find(|r| r["externalId"] == "HAP-2")
        .expect("HAP-2 present");
    assert_eq!(blocked["validationStatus"], "BLOCKED");
    assert_eq!(blocked["validationIssues"][0]["code"], "WAIVER_MISSING");
    assert_eq!(
        blocked["validationIssues"][0]["message"],
        "Waiver has not been signed."
    );
}

// ---------------------------------------------------------------------------
// Test: sourceType filter narrows the list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_source_type(pool: PgPool) {
    seed_course(&pool, "HAP-1", "priya.sharma@email.com", true).await;
    seed_membership(&pool, "SEC-1", "marcus.chen@email.com").await;

    let app = build_test_app(pool);
    let response = get(app.clone(), "/api/v1/registrations?sourceType=MEMBERSHIP").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().expect("data array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["externalId"], "SEC-1");
    // Section alias resolved during canonicalization.
    assert_eq!(rows[0]["canonical"]["section"], "Vancouver");

    // An unknown source type is a 400, not an empty list.
    let response = get(app, "/api/v1/registrations?sourceType=NOPE").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: fetching a missing registration returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_registration_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/registrations/424242").await;
    assert_error_response(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}
