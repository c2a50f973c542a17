//! Backend port consumed by the view layer.
//!
//! View models depend on this trait rather than on [`ApiClient`] directly so
//! tests can substitute [`crate::mock::MockBackend`].

use async_trait::async_trait;
use edt_core::errors::ScheduleResult;
use edt_core::models::entities::{Attribution, EmploiTemps, Salle};
use edt_core::models::requests::{CreateCreneauRequest, UpdateCreneauRequest};
use edt_core::models::wire::RawCreneau;

use crate::exports::ExportFormat;
use crate::notifications::NotificationFeed;
use crate::ApiClient;

/// Every backend operation the schedule views need.
#[async_trait]
pub trait ScheduleBackend: Send + Sync {
    async fn class_timetable_slots(&self, classe_id: i64) -> ScheduleResult<Vec<RawCreneau>>;
    async fn teacher_slots(&self, professeur_id: i64) -> ScheduleResult<Vec<RawCreneau>>;
    async fn find_timetable(
        &self,
        classe_id: i64,
        semestre_id: i64,
    ) -> ScheduleResult<Option<EmploiTemps>>;
    async fn timetable_detail(&self, emploi_temps_id: i64) -> ScheduleResult<EmploiTemps>;
    async fn initialize_timetable(
        &self,
        classe_id: i64,
        semestre_id: i64,
    ) -> ScheduleResult<EmploiTemps>;
    async fn create_slot(&self, request: CreateCreneauRequest) -> ScheduleResult<()>;
    async fn update_slot(
        &self,
        creneau_id: i64,
        request: UpdateCreneauRequest,
    ) -> ScheduleResult<()>;
    async fn delete_slot(&self, creneau_id: i64) -> ScheduleResult<()>;
    async fn list_salles(&self) -> ScheduleResult<Vec<Salle>>;
    async fn list_attributions(
        &self,
        classe_id: i64,
        semestre_id: i64,
    ) -> ScheduleResult<Vec<Attribution>>;
    async fn export_timetable(
        &self,
        emploi_temps_id: i64,
        format: ExportFormat,
    ) -> ScheduleResult<Vec<u8>>;
    async fn notifications(&self) -> ScheduleResult<NotificationFeed>;
    async fn mark_notification_read(&self, notification_id: i64) -> ScheduleResult<()>;
    async fn mark_all_notifications_read(&self) -> ScheduleResult<()>;
}

#[async_trait]
impl ScheduleBackend for ApiClient {
    async fn class_timetable_slots(&self, classe_id: i64) -> ScheduleResult<Vec<RawCreneau>> {
        ApiClient::class_timetable_slots(self, classe_id).await
    }

    async fn teacher_slots(&self, professeur_id: i64) -> ScheduleResult<Vec<RawCreneau>> {
        ApiClient::teacher_slots(self, professeur_id).await
    }

    async fn find_timetable(
        &self,
        classe_id: i64,
        semestre_id: i64,
    ) -> ScheduleResult<Option<EmploiTemps>> {
        ApiClient::find_timetable(self, classe_id, semestre_id).await
    }

    async fn timetable_detail(&self, emploi_temps_id: i64) -> ScheduleResult<EmploiTemps> {
        ApiClient::timetable_detail(self, emploi_temps_id).await
    }

    async fn initialize_timetable(
        &self,
        classe_id: i64,
        semestre_id: i64,
    ) -> ScheduleResult<EmploiTemps> {
        ApiClient::initialize_timetable(self, classe_id, semestre_id).await
    }

    async fn create_slot(&self, request: CreateCreneauRequest) -> ScheduleResult<()> {
        ApiClient::create_slot(self, request).await
    }

    async fn update_slot(
        &self,
        creneau_id: i64,
        request: UpdateCreneauRequest,
    ) -> ScheduleResult<()> {
        ApiClient::update_slot(self, creneau_id, request).await
    }

    async fn delete_slot(&self, creneau_id: i64) -> ScheduleResult<()> {
        ApiClient::delete_slot(self, creneau_id).await
    }

    async fn list_salles(&self) -> ScheduleResult<Vec<Salle>> {
        ApiClient::list_salles(self).await
    }

    async fn list_attributions(
        &self,
        classe_id: i64,
        semestre_id: i64,
    ) -> ScheduleResult<Vec<Attribution>> {
        ApiClient::list_attributions(self, classe_id, semestre_id).await
    }

    async fn export_timetable(
        &self,
        emploi_temps_id: i64,
        format: ExportFormat,
    ) -> ScheduleResult<Vec<u8>> {
        ApiClient::export_timetable(self, emploi_temps_id, format).await
    }

    async fn notifications(&self) -> ScheduleResult<NotificationFeed> {
        ApiClient::notifications(self).await
    }

    async fn mark_notification_read(&self, notification_id: i64) -> ScheduleResult<()> {
        ApiClient::mark_notification_read(self, notification_id).await
    }

    async fn mark_all_notifications_read(&self) -> ScheduleResult<()> {
        ApiClient::mark_all_notifications_read(self).await
    }
}
