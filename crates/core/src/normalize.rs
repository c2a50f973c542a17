//! Normalization of backend course-slot records.
//!
//! The backend serves schedules in three shapes: the class timetable read by
//! students, the personal slot list read by teachers and RUPs, and the
//! editor shape which additionally carries `semaine_numero` and `annule` for
//! per-week filtering and soft-cancellation. All three are mapped to the one
//! canonical [`CourseSlot`] with uniform rules, substituting placeholders so
//! a missing relation never breaks rendering.

use chrono::NaiveTime;

use crate::models::slot::{CourseSlot, WeekDay};
use crate::models::wire::RawCreneau;

/// Placeholder when the subject relation is missing.
pub const UNKNOWN_SUBJECT: &str = "Matière inconnue";
/// Placeholder when the room relation is missing.
pub const UNKNOWN_ROOM: &str = "Salle ?";
/// Neutral color token when the subject has no department color.
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// Which endpoint a raw record came from. Week and cancellation information
/// only exist on the editor shape; the other two leave them "not applicable".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceShape {
    /// `GET /emplois-temps/classe/{id}` (student view).
    ClassSchedule,
    /// `GET /creneaux?professeur_id={id}` (teacher/RUP view).
    PersonalSchedule,
    /// `GET /emplois-temps/{id}` detail (slot editor view).
    Editor,
}

/// Truncates an `HH:MM:SS` string to minute precision and parses it.
/// Malformed input falls back to the 07:00 grid origin; the function is
/// total so normalization never fails mid-render.
fn parse_wall_time(raw: &str) -> NaiveTime {
    // get() instead of indexing: byte 5 may not be a char boundary.
    let truncated = raw.get(..5).unwrap_or(raw);
    NaiveTime::parse_from_str(truncated, "%H:%M")
        .unwrap_or_else(|_| NaiveTime::from_hms_opt(7, 0, 0).unwrap())
}

/// Maps one raw backend record to the canonical slot shape.
pub fn normalize(raw: &RawCreneau, shape: SourceShape) -> CourseSlot {
    // Unknown day names collapse to Monday, mirroring the original fallback.
    let day = WeekDay::from_name(&raw.jour_semaine).unwrap_or(WeekDay::Monday);

    let subject = raw
        .matiere
        .as_ref()
        .map(|m| m.nom.clone())
        .unwrap_or_else(|| UNKNOWN_SUBJECT.to_string());

    let teacher = raw
        .professeur
        .as_ref()
        .map(|p| format!("{} {}", p.user.prenom, p.user.nom))
        .unwrap_or_default();

    let room = raw
        .salle
        .as_ref()
        .map(|s| s.nom.clone())
        .unwrap_or_else(|| UNKNOWN_ROOM.to_string());

    let class_name = raw
        .emploi_temps
        .as_ref()
        .and_then(|e| e.classe.as_ref())
        .map(|c| c.nom.clone())
        .unwrap_or_default();

    let color = raw
        .matiere
        .as_ref()
        .and_then(|m| m.dfr.as_ref())
        .and_then(|d| d.couleur.clone())
        .unwrap_or_else(|| DEFAULT_COLOR.to_string());

    let (week, cancelled) = match shape {
        SourceShape::Editor => (raw.semaine_numero, raw.annule),
        SourceShape::ClassSchedule | SourceShape::PersonalSchedule => (None, None),
    };

    CourseSlot {
        id: raw.id,
        day,
        start: parse_wall_time(&raw.heure_debut),
        end: parse_wall_time(&raw.heure_fin),
        subject,
        teacher,
        room,
        class_name,
        color,
        week,
        cancelled,
    }
}

/// Normalizes a whole collection in order.
pub fn normalize_all(raws: &[RawCreneau], shape: SourceShape) -> Vec<CourseSlot> {
    raws.iter().map(|raw| normalize(raw, shape)).collect()
}
