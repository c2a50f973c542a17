//! Role-based personal week view ("my schedule").

use std::sync::Arc;

use edt_client::backend::ScheduleBackend;
use edt_core::grid::{self, SlotPosition};
use edt_core::models::slot::CourseSlot;
use edt_core::models::user::SessionUser;
use edt_core::normalize::normalize_all;
use edt_core::policy::{resolve_schedule_source, ScheduleSource};
use tracing::warn;

/// The authenticated user's own week: slots fetched from whichever endpoint
/// the fetch policy selects for their role, already normalized.
pub struct PersonalWeekView {
    backend: Arc<dyn ScheduleBackend>,
    slots: Vec<CourseSlot>,
}

impl PersonalWeekView {
    pub fn new(backend: Arc<dyn ScheduleBackend>) -> Self {
        PersonalWeekView {
            backend,
            slots: Vec::new(),
        }
    }

    /// Loads the user's schedule. A user the policy cannot place, or any
    /// fetch failure, yields an empty week; this never errors.
    pub async fn load(&mut self, user: &SessionUser) {
        let source = resolve_schedule_source(user);

        let fetched = match source {
            ScheduleSource::ClassTimetable { classe_id } => {
                self.backend.class_timetable_slots(classe_id).await
            }
            ScheduleSource::TeacherSlots { professeur_id } => {
                self.backend.teacher_slots(professeur_id).await
            }
            ScheduleSource::None => Ok(Vec::new()),
        };

        self.slots = match (fetched, source.shape()) {
            (Ok(raws), Some(shape)) => normalize_all(&raws, shape),
            (Ok(_), None) => Vec::new(),
            (Err(e), _) => {
                warn!(error = %e, "schedule load failed, showing empty week");
                Vec::new()
            }
        };
    }

    pub fn slots(&self) -> &[CourseSlot] {
        &self.slots
    }

    /// Slots paired with their grid positions, ready to render.
    pub fn positioned(&self) -> Vec<(&CourseSlot, SlotPosition)> {
        self.slots
            .iter()
            .map(|slot| (slot, grid::position_slot(slot)))
            .collect()
    }
}
