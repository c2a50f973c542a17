//! Course-slot records as the backend emits them, before normalization.
//!
//! The three schedule endpoints return overlapping but not identical shapes
//! (the editor shape adds `semaine_numero` and `annule`), so every field that
//! varies between shapes is optional here and resolved in
//! [`crate::normalize`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCreneau {
    pub id: i64,
    pub jour_semaine: String,
    /// `HH:MM:SS` wall-clock string; seconds are dropped at normalization.
    pub heure_debut: String,
    pub heure_fin: String,
    #[serde(default)]
    pub matiere_id: Option<i64>,
    #[serde(default)]
    pub professeur_id: Option<i64>,
    #[serde(default)]
    pub salle_id: Option<i64>,
    #[serde(default)]
    pub matiere: Option<RawMatiere>,
    #[serde(default)]
    pub professeur: Option<RawProfesseur>,
    #[serde(default)]
    pub salle: Option<RawSalle>,
    #[serde(default)]
    pub emploi_temps: Option<RawEmploiTempsRef>,
    /// Editor shape only.
    #[serde(default)]
    pub semaine_numero: Option<u32>,
    /// Editor shape only.
    #[serde(default)]
    pub annule: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMatiere {
    pub nom: String,
    #[serde(default)]
    pub code: Option<String>,
    /// Owning department; carries the color token used for visual grouping.
    #[serde(default)]
    pub dfr: Option<RawDfr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDfr {
    #[serde(default)]
    pub couleur: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProfesseur {
    #[serde(default)]
    pub id: Option<i64>,
    pub user: RawUserName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawUserName {
    pub nom: String,
    pub prenom: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSalle {
    pub nom: String,
    #[serde(default)]
    pub capacite: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEmploiTempsRef {
    #[serde(default)]
    pub classe: Option<RawClasseRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawClasseRef {
    pub nom: String,
}
