use serde::{Deserialize, Serialize};

use super::slot::WeekDay;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub mot_de_passe: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmploiTempsRequest {
    pub classe_id: i64,
    pub semestre_id: i64,
}

/// Slot creation payload. Times are `HH:MM` wall-clock strings, as the
/// backend expects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCreneauRequest {
    pub jour_semaine: WeekDay,
    pub heure_debut: String,
    pub heure_fin: String,
    pub matiere_id: i64,
    pub professeur_id: i64,
    pub salle_id: i64,
    pub emploi_temps_id: i64,
    pub semaine_numero: u32,
}

/// Slot update payload. Identical to creation minus the owning timetable
/// reference, which is immutable once a slot exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCreneauRequest {
    pub jour_semaine: WeekDay,
    pub heure_debut: String,
    pub heure_fin: String,
    pub matiere_id: i64,
    pub professeur_id: i64,
    pub salle_id: i64,
    pub semaine_numero: u32,
}
