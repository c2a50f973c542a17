//! Role-based schedule fetch policy.
//!
//! Decides which backend endpoint serves "my schedule" for the authenticated
//! user. Students read their class's timetable; teachers and RUPs read their
//! own slots directly, since a teacher's week can span several classes'
//! timetables. Every other combination yields [`ScheduleSource::None`] and
//! the caller renders an empty week, never an error.

use crate::models::user::{Role, SessionUser};
use crate::normalize::SourceShape;

/// Where to fetch the user's schedule from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSource {
    /// `GET /emplois-temps/classe/{classe_id}`, slots under the timetable.
    ClassTimetable { classe_id: i64 },
    /// `GET /creneaux?professeur_id={professeur_id}`, flat slot list.
    TeacherSlots { professeur_id: i64 },
    /// No usable role/profile combination; show an empty week.
    None,
}

impl ScheduleSource {
    /// Record shape served by this source, for normalization.
    pub fn shape(&self) -> Option<SourceShape> {
        match self {
            ScheduleSource::ClassTimetable { .. } => Some(SourceShape::ClassSchedule),
            ScheduleSource::TeacherSlots { .. } => Some(SourceShape::PersonalSchedule),
            ScheduleSource::None => None,
        }
    }
}

/// Resolves the schedule source for a session user.
pub fn resolve_schedule_source(user: &SessionUser) -> ScheduleSource {
    match user.role() {
        Role::Etudiant => match user.etudiant.as_ref().and_then(|e| e.classe_id) {
            Some(classe_id) => ScheduleSource::ClassTimetable { classe_id },
            None => ScheduleSource::None,
        },
        // RUPs are teachers too and can have assigned courses.
        Role::Professeur | Role::Rup => match user.professeur.as_ref() {
            Some(prof) => ScheduleSource::TeacherSlots {
                professeur_id: prof.id,
            },
            None => ScheduleSource::None,
        },
        Role::Unknown => ScheduleSource::None,
    }
}
