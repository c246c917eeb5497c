//! Demo-data seeder: realistic, intentionally messy registrations.
//!
//! Reproduces the problem the pipeline solves: three source systems
//! with inconsistent field formats, section-name variants, phone-format
//! chaos, missing waivers and emergency contacts, an empty membership
//! type, and one person registered in all three systems under the same
//! email.
//!
//! Usage: `cargo run -p accsync-db --bin seed` (reads `DATABASE_URL`).

use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use accsync_core::types::SourceType;
use accsync_db::models::registration::CreateRegistration;
use accsync_db::repositories::RegistrationRepo;

struct SeedRecord {
    source_type: SourceType,
    external_id: &'static str,
    source_ref: &'static str,
    payload: Value,
}

fn course(external_id: &'static str, source_ref: &'static str, payload: Value) -> SeedRecord {
    SeedRecord {
        source_type: SourceType::Course,
        external_id,
        source_ref,
        payload,
    }
}

fn hut(external_id: &'static str, source_ref: &'static str, payload: Value) -> SeedRecord {
    SeedRecord {
        source_type: SourceType::HutBooking,
        external_id,
        source_ref,
        payload,
    }
}

fn membership(external_id: &'static str, source_ref: &'static str, payload: Value) -> SeedRecord {
    SeedRecord {
        source_type: SourceType::Membership,
        external_id,
        source_ref,
        payload,
    }
}

fn seed_records() -> Vec<SeedRecord> {
    vec![
        // -- Course registrations (Hapily source) ---------------------------
        course("HAP-2026-001", "GMC-2026 / A", json!({
            "firstName": "Sarah", "lastName": "Okonkwo",
            "email": "sarah.okonkwo@email.com",
            "phone": "403-555-0101",
            "membershipNumber": "ACC-88421", "membershipType": "Full",
            "section": "Calgary",
            "courseCode": "GMC-2026", "courseName": "General Mountaineering Camp 2026",
            "startDate": "2026-07-12", "waiverSigned": true,
            "emergencyContact": "James Okonkwo: 403-555-0102", "postalCode": "T2P 1G5"
        })),
        course("HAP-2026-002", "GMC-2026 / B", json!({
            "firstName": "Marcus", "lastName": "Tran",
            "email": "mtran@outlook.com",
            "phone": "+14035550203",
            "membershipNumber": "ACC-77312", "membershipType": "Associate",
            "section": "YYC Section",
            "courseCode": "GMC-2026", "courseName": "General Mountaineering Camp 2026",
            "startDate": "2026-07-12", "waiverSigned": true,
            "emergencyContact": "Linh Tran: 403-555-0204", "postalCode": "T2R 0B9"
        })),
        course("HAP-2026-003", "SKI-W26 / A", json!({
            "firstName": "Priya", "lastName": "Sharma",
            "email": "priya.sharma@gmail.com",
            "phone": "6049870044",
            "membershipType": "Youth", "section": "Vancouver",
            "courseCode": "SKI-W26", "courseName": "Ski Mountaineering Week 2026",
            "startDate": "2026-03-01",
            "waiverSigned": false, // BLOCKED, and no emergency contact
            "postalCode": "V6B 1A1"
        })),
        course("HAP-2026-004", "GMC-2026 / C", json!({
            "firstName": "Daniel", "lastName": "Leblanc",
            "email": "daniel.leblanc@icloud.com",
            "phone": "(780) 555-0312",
            "membershipNumber": "ACC-91033", "membershipType": "Full",
            "section": "Edmonton",
            "courseCode": "GMC-2026", "courseName": "General Mountaineering Camp 2026",
            "startDate": "2026-07-12", "waiverSigned": true,
            "emergencyContact": "Claire Leblanc: 780-555-0313", "postalCode": "T5J 0N3"
        })),
        course("HAP-2026-005", "ICE-F26 / A", json!({
            "firstName": "Amara", "lastName": "Diallo",
            "email": "amara.diallo@email.com", // appears in all three systems
            "phone": "250-555-0177",
            "membershipType": "Full", "section": "Whistler",
            "courseCode": "ICE-F26", "courseName": "Intro to Ice Climbing 2026",
            "startDate": "2026-11-07", "waiverSigned": true,
            "emergencyContact": "Fatou Diallo: 250-555-0178", "postalCode": "V8E 0A1"
        })),
        course("HAP-2026-006", "GMC-2026 / D", json!({
            "firstName": "Tyler", "lastName": "Wong",
            "email": "tyler.wong@shaw.ca",
            // no phone
            "membershipNumber": "ACC-44821", "membershipType": "Associate",
            "section": "YYC",
            "courseCode": "GMC-2026", "courseName": "General Mountaineering Camp 2026",
            "startDate": "2026-07-12", "waiverSigned": true,
            "emergencyContact": "Betty Wong: 403-555-0888", "postalCode": "T3A 1Z2"
        })),
        course("HAP-2026-007", "ALP-S26 / A", json!({
            "firstName": "Kenji", "lastName": "Nakamura",
            "email": "kenji.nakamura@gmail.com",
            "phone": "6045550092",
            "membershipType": "Student", "section": "Vancouver Island",
            "courseCode": "ALP-S26", "courseName": "Alpine Skills Course 2026",
            "startDate": "2026-06-20",
            "waiverSigned": false, // BLOCKED
            "emergencyContact": "Hana Nakamura: 604-555-0093", "postalCode": "V8W 1A1"
        })),
        // -- Hut bookings (Mews source) -------------------------------------
        hut("MEWS-2026-101", "STAN-20260814", json!({
            "firstName": "Rachel", "lastName": "Fortin",
            "email": "rachel.fortin@hotmail.com",
            "phone": "4035550421",
            "hutName": "Stanley Mitchell Hut",
            "checkIn": "2026-08-14", "checkOut": "2026-08-17", "partySize": 4,
            "membershipNumber": "ACC-55920", "waiverSigned": true,
            "specialRequests": "Vegetarian meals preferred"
        })),
        hut("MEWS-2026-102", "ABBOT-20260901", json!({
            "firstName": "Omar", "lastName": "Al-Rashid",
            "email": "omar.alrashid@gmail.com",
            "phone": "403-555-0507",
            "hutName": "Abbot Pass Refuge Cabin",
            "checkIn": "2026-09-01", "checkOut": "2026-09-03", "partySize": 2,
            "waiverSigned": true // non-member booking, no membershipNumber
        })),
        hut("MEWS-2026-103", "LIZRD-20260715", json!({
            "firstName": "Amara", "lastName": "Diallo",
            "email": "amara.diallo@email.com", // duplicate, second system
            "phone": "250-555-0177",
            "hutName": "Lizard Head Hut",
            "checkIn": "2026-07-15", "checkOut": "2026-07-18", "partySize": 3,
            "membershipNumber": "ACC-66104", "waiverSigned": true
        })),
        hut("MEWS-2026-104", "ELBOW-20260820", json!({
            "firstName": "Ingrid", "lastName": "Bergstrom",
            "email": "ingrid.bergstrom@shaw.ca",
            "phone": "+1 403 555 0654",
            "hutName": "Elbow Lake Shelter",
            "checkIn": "2026-08-20", "checkOut": "2026-08-22", "partySize": 6,
            "membershipNumber": "ACC-29871",
            "waiverSigned": false, // BLOCKED
            "specialRequests": "Arriving late afternoon"
        })),
        hut("MEWS-2026-105", "STAN-20260710", json!({
            "firstName": "Luca", "lastName": "Moretti",
            "email": "luca.moretti@gmail.com",
            "phone": "7785550831",
            "hutName": "Stanley Mitchell Hut",
            "checkIn": "2026-07-10", "checkOut": "2026-07-14", "partySize": 2,
            "membershipNumber": "ACC-38817", "waiverSigned": true
        })),
        // -- Memberships (Sections manual source) ---------------------------
        membership("SEC-2026-201", "MBR-YYC-0041", json!({
            "firstName": "Christine", "lastName": "Beausoleil",
            "email": "c.beausoleil@telus.net",
            "phone": "403-555-0711",
            "membershipType": "Full", "section": "Calgary Section",
            "renewalDate": "2027-01-15", "postalCode": "T2S 2Y4",
            "emergencyContact": "Pierre Beausoleil: 403-555-0712",
            "waiverSigned": true, "prmType": "None"
        })),
        membership("SEC-2026-202", "MBR-VAN-0019", json!({
            "firstName": "James", "lastName": "Hartley",
            "email": "james.hartley@gmail.com",
            "phone": "6045550192",
            "membershipType": "Family", "section": "Vancouver",
            "renewalDate": "2026-12-31", "postalCode": "V5K 1B3",
            "emergencyContact": "Nadia Hartley: 604-555-0193",
            "waiverSigned": true, "prmType": "None"
        })),
        membership("SEC-2026-203", "MBR-EDM-0088", json!({
            "firstName": "Fatima", "lastName": "Hussain",
            "email": "fatima.hussain@ualberta.ca",
            "phone": "7805550344",
            "membershipType": "", // BLOCKED, and no emergency contact
            "section": "Edmonton", "postalCode": "T6G 2R3",
            "waiverSigned": true, "prmType": "Mobility"
        })),
        membership("SEC-2026-204", "MBR-WHI-0007", json!({
            "firstName": "Nathan", "lastName": "Gervais",
            "email": "ngervais@outlook.com",
            "phone": "604 555 0466",
            "membershipType": "Associate", "section": "Whistler",
            "renewalDate": "2027-03-01", "postalCode": "V0N 1B1",
            "emergencyContact": "Sophie Gervais: 604-555-0467",
            "waiverSigned": true, "prmType": "None"
        })),
        membership("SEC-2026-205", "MBR-YYC-0042", json!({
            "firstName": "Amara", "lastName": "Diallo",
            "email": "amara.diallo@email.com", // duplicate, third system
            "phone": "250-555-0177",
            "membershipType": "Full", "section": "Whistler",
            "renewalDate": "2027-01-01", "postalCode": "V8E 0A1",
            "emergencyContact": "Fatou Diallo: 250-555-0178",
            "waiverSigned": true, "prmType": "None"
        })),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL")?;
    let pool = accsync_db::create_pool(&database_url).await?;
    accsync_db::run_migrations(&pool).await?;

    // Clear existing pipeline data; field mappings are migration-seeded.
    sqlx::query("DELETE FROM sync_records").execute(&pool).await?;
    sqlx::query("DELETE FROM sync_runs").execute(&pool).await?;
    sqlx::query("DELETE FROM registrations").execute(&pool).await?;

    let records = seed_records();
    let total = records.len();

    for record in records {
        let body = CreateRegistration {
            source_type: record.source_type,
            external_id: record.external_id.to_string(),
            source_ref: Some(record.source_ref.to_string()),
            email: record.payload["email"].as_str().map(str::to_string),
            first_name: record.payload["firstName"].as_str().map(str::to_string),
            last_name: record.payload["lastName"].as_str().map(str::to_string),
            raw_data: record.payload,
        };
        RegistrationRepo::create(&pool, &body).await?;
    }

    tracing::info!(total, "Seeded demo registrations");
    tracing::info!("Data story: 3 unsigned waivers, 1 empty membership type, missing emergency contacts, amara.diallo@email.com in 3 systems, 4 section-name variants");
    Ok(())
}
