//! Mock backend for view-model tests.

use async_trait::async_trait;
use edt_core::errors::ScheduleResult;
use edt_core::models::entities::{Attribution, EmploiTemps, Salle};
use edt_core::models::requests::{CreateCreneauRequest, UpdateCreneauRequest};
use edt_core::models::wire::RawCreneau;
use mockall::mock;

use crate::backend::ScheduleBackend;
use crate::exports::ExportFormat;
use crate::notifications::NotificationFeed;

mock! {
    pub Backend {}

    #[async_trait]
    impl ScheduleBackend for Backend {
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
}
