//! Dashboard fetches.
//!
//! Dashboard payload shapes differ per role and are consumed as loose JSON.
//! The RUP view combines two independent datasets with a resilient join:
//! the administrative stats are primary, the personal-teaching stats are
//! enrichment. A secondary failure is logged and degrades to partial data;
//! it never blocks the primary display.

use edt_core::errors::ScheduleResult;
use serde_json::Value;
use tracing::warn;

use crate::ApiClient;

/// The RUP dashboard: administrative stats, plus the RUP's own teaching
/// stats when that secondary fetch succeeded.
#[derive(Debug, Clone)]
pub struct RupDashboard {
    pub administrative: Value,
    pub teaching: Option<Value>,
}

impl ApiClient {
    /// `GET /dashboard/etudiant`.
    pub async fn etudiant_dashboard(&self) -> ScheduleResult<Value> {
        let envelope = self.get_envelope("/dashboard/etudiant").await?;
        Ok(envelope.data)
    }

    /// `GET /dashboard/professeur`.
    pub async fn professeur_dashboard(&self) -> ScheduleResult<Value> {
        let envelope = self.get_envelope("/dashboard/professeur").await?;
        Ok(envelope.data)
    }

    /// Fetches the RUP's administrative and teaching datasets concurrently.
    /// Fails only when the administrative (primary) fetch fails.
    pub async fn rup_dashboard(&self) -> ScheduleResult<RupDashboard> {
        let (administrative, teaching) = tokio::join!(
            self.get_envelope("/dashboard/rup"),
            self.get_envelope("/dashboard/professeur"),
        );

        let administrative = administrative?.data;
        let teaching = match teaching {
            Ok(envelope) => Some(envelope.data),
            Err(e) => {
                warn!(error = %e, "teaching stats unavailable, showing administrative only");
                None
            }
        };

        Ok(RupDashboard {
            administrative,
            teaching,
        })
    }
}
