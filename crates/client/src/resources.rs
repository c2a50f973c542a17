//! Reference-data CRUD.
//!
//! All fourteen reference resources follow the same `GET/POST/PUT/DELETE`
//! surface; the generic functions below go through the [`Resource`] adapter
//! table so each endpoint's envelope shape is recorded exactly once. Typed
//! wrappers exist for the resources the schedule views consume directly.

use edt_core::errors::ScheduleResult;
use edt_core::models::entities::{Attribution, Classe, Salle, Semestre};
use serde_json::Value;

use crate::envelope::Resource;
use crate::ApiClient;

impl ApiClient {
    /// `GET {resource}`: full list, raw JSON rows.
    pub async fn list_resource(&self, resource: Resource) -> ScheduleResult<Vec<Value>> {
        let envelope = self.get_envelope(resource.path()).await?;
        envelope.collection(resource.collection_key())
    }

    /// `GET {resource}?...`: list filtered by query parameters. Values are
    /// percent-encoded; callers pass them raw.
    pub async fn list_resource_where(
        &self,
        resource: Resource,
        filters: &[(&str, &str)],
    ) -> ScheduleResult<Vec<Value>> {
        let query = filters
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        let envelope = self
            .get_envelope(&format!("{}?{}", resource.path(), query))
            .await?;
        envelope.collection(resource.collection_key())
    }

    /// `POST {resource}`.
    pub async fn create_resource(&self, resource: Resource, payload: &Value) -> ScheduleResult<()> {
        self.post_envelope(resource.path(), payload).await?;
        Ok(())
    }

    /// `PUT {resource}/{id}`.
    pub async fn update_resource(
        &self,
        resource: Resource,
        id: i64,
        payload: &Value,
    ) -> ScheduleResult<()> {
        self.put_envelope(&format!("{}/{}", resource.path(), id), payload)
            .await?;
        Ok(())
    }

    /// `DELETE {resource}/{id}`.
    pub async fn delete_resource(&self, resource: Resource, id: i64) -> ScheduleResult<()> {
        self.delete_envelope(&format!("{}/{}", resource.path(), id))
            .await?;
        Ok(())
    }

    pub async fn list_classes(&self) -> ScheduleResult<Vec<Classe>> {
        let envelope = self.get_envelope(Resource::Classes.path()).await?;
        envelope.collection(Resource::Classes.collection_key())
    }

    pub async fn list_semestres(&self) -> ScheduleResult<Vec<Semestre>> {
        let envelope = self.get_envelope(Resource::Semestres.path()).await?;
        envelope.collection(Resource::Semestres.collection_key())
    }

    /// The semester flagged active, when one exists. Views auto-select it.
    pub async fn active_semestre(&self) -> ScheduleResult<Option<Semestre>> {
        let semestres = self.list_semestres().await?;
        Ok(semestres.into_iter().find(|s| s.actif))
    }

    pub async fn list_salles(&self) -> ScheduleResult<Vec<Salle>> {
        let envelope = self.get_envelope(Resource::Salles.path()).await?;
        envelope.collection(Resource::Salles.collection_key())
    }

    /// `GET /attributions?classe_id&semestre_id`: teaching assignments for
    /// one (class, semester) pair, feeding the slot editor's dropdowns.
    pub async fn list_attributions(
        &self,
        classe_id: i64,
        semestre_id: i64,
    ) -> ScheduleResult<Vec<Attribution>> {
        let envelope = self
            .get_envelope(&format!(
                "{}?classe_id={}&semestre_id={}",
                Resource::Attributions.path(),
                classe_id,
                semestre_id
            ))
            .await?;
        envelope.collection(Resource::Attributions.collection_key())
    }
}
