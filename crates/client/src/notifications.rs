//! Notification feed reads and acknowledgements.

use edt_core::errors::ScheduleResult;
use edt_core::models::entities::Notification;
use serde::Deserialize;

use crate::ApiClient;

/// One poll of the notification feed: the notifications plus the backend's
/// unread count.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct NotificationFeed {
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub non_lues: u32,
}

impl ApiClient {
    /// `GET /notifications`.
    pub async fn notifications(&self) -> ScheduleResult<NotificationFeed> {
        let envelope = self.get_envelope("/notifications").await?;
        envelope.payload()
    }

    /// `PUT /notifications/{id}/marquer-lu`.
    pub async fn mark_notification_read(&self, notification_id: i64) -> ScheduleResult<()> {
        self.put_empty(&format!("/notifications/{}/marquer-lu", notification_id))
            .await?;
        Ok(())
    }

    /// `PUT /notifications/marquer-toutes-lues`.
    pub async fn mark_all_notifications_read(&self) -> ScheduleResult<()> {
        self.put_empty("/notifications/marquer-toutes-lues").await?;
        Ok(())
    }
}
