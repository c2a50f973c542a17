//! Response envelopes and the per-resource adapter table.
//!
//! The backend wraps every response as `{ success, data }`, but the shape of
//! `data` drifts between endpoints: most wrap their collection under a
//! resource key (`data.classes: [...]`), a few return the bare array
//! (`data: [...]`). Each endpoint's observed shape is fixed; the adapter
//! accepts both rather than assuming a uniform envelope.

use edt_core::errors::{ScheduleError, ScheduleResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Generic backend response envelope.
#[derive(Debug, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope {
    /// Extracts the collection for `key`, accepting both the keyed-object
    /// form (`data.{key}: [...]`) and the bare-array form (`data: [...]`).
    /// A missing collection yields an empty list, matching the policy that
    /// read failures render empty rather than propagate.
    pub fn collection<T: DeserializeOwned>(&self, key: &str) -> ScheduleResult<Vec<T>> {
        let items = match self.data.get(key) {
            Some(value) if value.is_array() => value.clone(),
            _ if self.data.is_array() => self.data.clone(),
            _ => {
                warn!(key, "response envelope carries no collection");
                return Ok(Vec::new());
            }
        };

        serde_json::from_value(items).map_err(|e| {
            ScheduleError::Validation(format!("réponse inattendue pour {}: {}", key, e))
        })
    }

    /// Deserializes `data` as a whole, for endpoints whose payload is not
    /// wrapped under a resource key (login, dashboards).
    pub fn payload<T: DeserializeOwned>(&self) -> ScheduleResult<T> {
        serde_json::from_value(self.data.clone())
            .map_err(|e| ScheduleError::Validation(format!("réponse inattendue: {}", e)))
    }

    /// Extracts the single object under `key`, falling back to `data` itself
    /// for endpoints that skip the key.
    pub fn object<T: DeserializeOwned>(&self, key: &str) -> ScheduleResult<T> {
        let value = match self.data.get(key) {
            Some(value) if !value.is_null() => value.clone(),
            _ => self.data.clone(),
        };

        serde_json::from_value(value).map_err(|e| {
            ScheduleError::Validation(format!("réponse inattendue pour {}: {}", key, e))
        })
    }
}

/// The backend's uniform reference-data resources. One row per resource:
/// URL path and the collection key observed in its envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Professeurs,
    Etudiants,
    Salles,
    Classes,
    Specialites,
    Filieres,
    Cycles,
    UnitesEnseignement,
    Matieres,
    Semestres,
    Dfrs,
    Domaines,
    Attributions,
    Indisponibilites,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Professeurs => "/professeurs",
            Resource::Etudiants => "/etudiants",
            Resource::Salles => "/salles",
            Resource::Classes => "/classes",
            Resource::Specialites => "/specialites",
            Resource::Filieres => "/filieres",
            Resource::Cycles => "/cycles",
            Resource::UnitesEnseignement => "/unites-enseignement",
            Resource::Matieres => "/matieres",
            Resource::Semestres => "/semestres",
            Resource::Dfrs => "/dfrs",
            Resource::Domaines => "/domaines",
            Resource::Attributions => "/attributions",
            Resource::Indisponibilites => "/indisponibilites",
        }
    }

    pub fn collection_key(&self) -> &'static str {
        match self {
            Resource::Professeurs => "professeurs",
            Resource::Etudiants => "etudiants",
            Resource::Salles => "salles",
            Resource::Classes => "classes",
            Resource::Specialites => "specialites",
            Resource::Filieres => "filieres",
            Resource::Cycles => "cycles",
            Resource::UnitesEnseignement => "unites_enseignement",
            Resource::Matieres => "matieres",
            Resource::Semestres => "semestres",
            Resource::Dfrs => "dfrs",
            Resource::Domaines => "domaines",
            Resource::Attributions => "attributions",
            Resource::Indisponibilites => "indisponibilites",
        }
    }
}
