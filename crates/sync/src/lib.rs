//! Pipeline orchestration: the read-and-repair query service and the
//! sync-run orchestrator, plus the CRM capability seam they share.

use async_trait::async_trait;

use accsync_core::hubspot::ContactProperties;
use accsync_hubspot::HubSpotClient;

pub mod compute;
pub mod query;
pub mod run;

pub use query::{RegistrationQueryService, RegistrationRow};
pub use run::{SyncOrchestrator, SyncPolicy, SyncSummary};

/// Result of one CRM upsert.
#[derive(Debug, Clone)]
pub struct UpsertOutcome {
    /// Remote contact id, when the CRM returned one.
    pub remote_id: Option<String>,
}

/// The single capability the sync stage requires from the CRM:
/// upsert a contact keyed by email with a property bag.
///
/// Errors carry a human-readable message that ends up in the per-record
/// audit trail; they never abort the run.
#[async_trait]
pub trait ContactUpserter: Send + Sync {
    async fn upsert(
        &self,
        email: &str,
        properties: &ContactProperties,
    ) -> anyhow::Result<UpsertOutcome>;
}

#[async_trait]
impl ContactUpserter for HubSpotClient {
    async fn upsert(
        &self,
        email: &str,
        properties: &ContactProperties,
    ) -> anyhow::Result<UpsertOutcome> {
        let result = self.upsert_contact_by_email(email, properties).await?;
        Ok(UpsertOutcome {
            remote_id: result.hubspot_id,
        })
    }
}
