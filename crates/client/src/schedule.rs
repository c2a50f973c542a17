//! Timetable and slot reads/writes.
//!
//! The backend is the sole authority on scheduling conflicts; every write
//! here either succeeds or comes back as a structured rejection (possibly
//! carrying a `conflits` list) which is surfaced unchanged.

use edt_core::errors::ScheduleResult;
use edt_core::models::entities::EmploiTemps;
use edt_core::models::requests::{
    CreateCreneauRequest, CreateEmploiTempsRequest, UpdateCreneauRequest,
};
use edt_core::models::wire::RawCreneau;

use crate::ApiClient;

impl ApiClient {
    /// `GET /emplois-temps/classe/{classe_id}`: a class's active timetable,
    /// read by students. Returns the slot collection under the timetable.
    pub async fn class_timetable_slots(&self, classe_id: i64) -> ScheduleResult<Vec<RawCreneau>> {
        let envelope = self
            .get_envelope(&format!("/emplois-temps/classe/{}", classe_id))
            .await?;
        let timetable: EmploiTemps = envelope.object("emploi_temps")?;
        Ok(timetable.creneaux)
    }

    /// `GET /creneaux?professeur_id={id}`: a teacher's own slots across all
    /// classes, no timetable indirection.
    pub async fn teacher_slots(&self, professeur_id: i64) -> ScheduleResult<Vec<RawCreneau>> {
        let envelope = self
            .get_envelope(&format!("/creneaux?professeur_id={}", professeur_id))
            .await?;
        envelope.collection("creneaux")
    }

    /// `GET /emplois-temps?classe_id&semestre_id`: timetable search. The
    /// results are summaries without slot details; follow up with
    /// [`ApiClient::timetable_detail`].
    pub async fn find_timetable(
        &self,
        classe_id: i64,
        semestre_id: i64,
    ) -> ScheduleResult<Option<EmploiTemps>> {
        let envelope = self
            .get_envelope(&format!(
                "/emplois-temps?classe_id={}&semestre_id={}",
                classe_id, semestre_id
            ))
            .await?;
        let mut timetables: Vec<EmploiTemps> = envelope.collection("emplois_temps")?;
        if timetables.is_empty() {
            Ok(None)
        } else {
            Ok(Some(timetables.remove(0)))
        }
    }

    /// `GET /emplois-temps/{id}`: timetable detail including the full slot
    /// collection (editor shape).
    pub async fn timetable_detail(&self, emploi_temps_id: i64) -> ScheduleResult<EmploiTemps> {
        let envelope = self
            .get_envelope(&format!("/emplois-temps/{}", emploi_temps_id))
            .await?;
        envelope.object("emploi_temps")
    }

    /// `POST /emplois-temps`: initializes the timetable for a (class,
    /// semester) pair. Must happen before any slot can be added.
    pub async fn initialize_timetable(
        &self,
        classe_id: i64,
        semestre_id: i64,
    ) -> ScheduleResult<EmploiTemps> {
        let request = CreateEmploiTempsRequest {
            classe_id,
            semestre_id,
        };
        let envelope = self.post_envelope("/emplois-temps", &request).await?;
        envelope.object("emploi_temps")
    }

    /// `POST /creneaux`.
    pub async fn create_slot(&self, request: CreateCreneauRequest) -> ScheduleResult<()> {
        self.post_envelope("/creneaux", &request).await?;
        Ok(())
    }

    /// `PUT /creneaux/{id}`.
    pub async fn update_slot(
        &self,
        creneau_id: i64,
        request: UpdateCreneauRequest,
    ) -> ScheduleResult<()> {
        self.put_envelope(&format!("/creneaux/{}", creneau_id), &request)
            .await?;
        Ok(())
    }

    /// `DELETE /creneaux/{id}`.
    pub async fn delete_slot(&self, creneau_id: i64) -> ScheduleResult<()> {
        self.delete_envelope(&format!("/creneaux/{}", creneau_id))
            .await?;
        Ok(())
    }
}
