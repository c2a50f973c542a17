//! Reference-data entities read from the backend's CRUD endpoints.

use serde::{Deserialize, Serialize};

use super::wire::{RawCreneau, RawMatiere, RawProfesseur};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classe {
    pub id: i64,
    pub nom: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semestre {
    pub id: i64,
    pub nom: String,
    #[serde(default)]
    pub annee_scolaire: Option<String>,
    /// At most one semester is active at a time; views auto-select it.
    #[serde(default)]
    pub actif: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salle {
    pub id: i64,
    pub nom: String,
    #[serde(default)]
    pub capacite: Option<u32>,
}

/// Teaching assignment: authorizes a (teacher, subject) pairing for one
/// class in one semester. Drives the slot editor's dependent dropdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribution {
    pub id: i64,
    pub matiere_id: i64,
    pub professeur_id: i64,
    #[serde(default)]
    pub classe_id: Option<i64>,
    #[serde(default)]
    pub semestre_id: Option<i64>,
    pub matiere: RawMatiere,
    pub professeur: RawProfesseur,
}

/// Timetable for one (class, semester) pair. The search endpoint returns
/// summaries without slot details; only the detail endpoint fills `creneaux`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploiTemps {
    pub id: i64,
    #[serde(default)]
    pub classe_id: Option<i64>,
    #[serde(default)]
    pub semestre_id: Option<i64>,
    #[serde(default)]
    pub creneaux: Vec<RawCreneau>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub message: String,
    #[serde(default)]
    pub titre: Option<String>,
    #[serde(default)]
    pub lu: bool,
}
