//! Timetable editor view.
//!
//! Drives one class/semester timetable: loads the summary-then-detail pair,
//! filters the selected week, and runs the slot edit workflow against the
//! backend. Week navigation refilters the already-loaded collection; only
//! class or semester changes refetch. Loads are guarded by a request intent
//! so a slow response for a superseded selection can never overwrite the
//! state of a newer one.

use std::sync::Arc;

use edt_client::backend::ScheduleBackend;
use edt_client::exports::{export_file_name, ExportFormat};
use edt_core::editor::{SavePayload, SlotEditor};
use edt_core::errors::ScheduleResult;
use edt_core::models::entities::{EmploiTemps, Salle};
use edt_core::models::slot::CourseSlot;
use edt_core::normalize::{normalize_all, SourceShape};
use edt_core::week::select_week;
use tracing::{debug, warn};
use uuid::Uuid;

/// Number of weeks in a semester.
pub const SEMESTER_WEEKS: u32 = 16;

/// Identity of one load request: the (class, semester) pair it was issued
/// for. Completions are applied only when their intent still matches the
/// current selection (last-write-wins keyed by intent, not arrival order).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadIntent {
    pub classe_id: i64,
    pub semestre_id: i64,
}

pub struct TimetableManager {
    backend: Arc<dyn ScheduleBackend>,
    classe_id: Option<i64>,
    semestre_id: Option<i64>,
    week: u32,
    current_intent: Option<LoadIntent>,
    timetable: Option<EmploiTemps>,
    week_slots: Vec<CourseSlot>,
    salles: Vec<Salle>,
    editor: SlotEditor,
}

impl TimetableManager {
    pub fn new(backend: Arc<dyn ScheduleBackend>) -> Self {
        TimetableManager {
            backend,
            classe_id: None,
            semestre_id: None,
            week: 1,
            current_intent: None,
            timetable: None,
            week_slots: Vec::new(),
            salles: Vec::new(),
            editor: SlotEditor::new(),
        }
    }

    pub fn select_class(&mut self, classe_id: Option<i64>) {
        self.classe_id = classe_id;
    }

    pub fn select_semester(&mut self, semestre_id: Option<i64>) {
        self.semestre_id = semestre_id;
    }

    /// Changes the displayed week and refilters the loaded collection. No
    /// fetch: the timetable already spans every week of the semester.
    pub fn select_week(&mut self, week: u32) {
        self.week = week.clamp(1, SEMESTER_WEEKS);
        self.refilter();
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    pub fn timetable(&self) -> Option<&EmploiTemps> {
        self.timetable.as_ref()
    }

    /// Non-cancelled slots of the selected week, normalized for the grid.
    pub fn week_slots(&self) -> &[CourseSlot] {
        &self.week_slots
    }

    pub fn salles(&self) -> &[Salle] {
        &self.salles
    }

    pub fn editor(&self) -> &SlotEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut SlotEditor {
        &mut self.editor
    }

    /// Records the intent of a new load for the current selection. `None`
    /// when class or semester is missing, which also clears the grid.
    pub fn begin_load(&mut self) -> Option<LoadIntent> {
        let (Some(classe_id), Some(semestre_id)) = (self.classe_id, self.semestre_id) else {
            self.current_intent = None;
            self.timetable = None;
            self.week_slots.clear();
            return None;
        };

        let intent = LoadIntent {
            classe_id,
            semestre_id,
        };
        self.current_intent = Some(intent);
        debug!(
            request = %Uuid::new_v4(),
            classe_id,
            semestre_id,
            "timetable load started"
        );
        Some(intent)
    }

    /// Applies a completed load if its intent still matches the current
    /// selection. Stale completions are discarded.
    pub fn finish_load(&mut self, intent: LoadIntent, timetable: Option<EmploiTemps>) -> bool {
        if self.current_intent != Some(intent) {
            debug!(
                classe_id = intent.classe_id,
                semestre_id = intent.semestre_id,
                "stale timetable load discarded"
            );
            return false;
        }
        self.timetable = timetable;
        self.refilter();
        true
    }

    /// Full load for the current selection: search the (class, semester)
    /// timetable, then fetch its detail for the slot collection. Read
    /// failures log and leave the grid empty.
    pub async fn reload(&mut self) {
        let Some(intent) = self.begin_load() else {
            return;
        };
        let timetable = self.fetch_timetable(intent).await;
        self.finish_load(intent, timetable);
    }

    async fn fetch_timetable(&self, intent: LoadIntent) -> Option<EmploiTemps> {
        let summary = match self
            .backend
            .find_timetable(intent.classe_id, intent.semestre_id)
            .await
        {
            Ok(found) => found?,
            Err(e) => {
                warn!(error = %e, "timetable search failed");
                return None;
            }
        };

        // The search endpoint strips slot details; the detail fetch fills them.
        match self.backend.timetable_detail(summary.id).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                warn!(error = %e, "timetable detail fetch failed");
                None
            }
        }
    }

    fn refilter(&mut self) {
        let slots = self
            .timetable
            .as_ref()
            .map(|t| normalize_all(&t.creneaux, SourceShape::Editor))
            .unwrap_or_default();
        self.week_slots = select_week(&slots, self.week);
    }

    /// Initializes the timetable for the current selection, then reloads.
    pub async fn initialize(&mut self) -> ScheduleResult<()> {
        let Some(intent) = self.begin_load() else {
            return Ok(());
        };
        self.backend
            .initialize_timetable(intent.classe_id, intent.semestre_id)
            .await?;
        let timetable = self.fetch_timetable(intent).await;
        self.finish_load(intent, timetable);
        Ok(())
    }

    /// Opens the editor for a new slot, loading rooms and the attribution
    /// set that constrains the subject/teacher dropdowns. Load failures log
    /// and open with empty option sets.
    pub async fn open_add_slot(&mut self) {
        let attributions = self.load_editor_options().await;
        self.editor.open_create(attributions);
    }

    /// Opens the editor pre-filled from a slot of the loaded timetable.
    pub async fn open_edit_slot(&mut self, creneau_id: i64) {
        let Some(raw) = self
            .timetable
            .as_ref()
            .and_then(|t| t.creneaux.iter().find(|c| c.id == creneau_id))
            .cloned()
        else {
            warn!(creneau_id, "slot not in loaded timetable");
            return;
        };
        let attributions = self.load_editor_options().await;
        self.editor.open_edit(&raw, attributions);
    }

    async fn load_editor_options(&mut self) -> Vec<edt_core::models::entities::Attribution> {
        self.salles = match self.backend.list_salles().await {
            Ok(salles) => salles,
            Err(e) => {
                warn!(error = %e, "room list unavailable");
                Vec::new()
            }
        };

        let (Some(classe_id), Some(semestre_id)) = (self.classe_id, self.semestre_id) else {
            return Vec::new();
        };
        match self.backend.list_attributions(classe_id, semestre_id).await {
            Ok(attributions) => attributions,
            Err(e) => {
                warn!(error = %e, "attribution list unavailable");
                Vec::new()
            }
        }
    }

    /// Submits the open form. Returns `true` when the backend accepted the
    /// slot; the editor then closes and the timetable is reloaded in full.
    /// On rejection the editor reopens with the backend's message and the
    /// grid is left untouched.
    pub async fn save(&mut self) -> bool {
        let Some(emploi_temps_id) = self.timetable.as_ref().map(|t| t.id) else {
            warn!("no timetable loaded, cannot save slot");
            return false;
        };

        let payload = match self.editor.begin_save(emploi_temps_id, self.week) {
            Ok(payload) => payload,
            Err(e) => {
                debug!(error = %e, "slot form incomplete");
                return false;
            }
        };

        let result = match payload {
            SavePayload::Create(request) => self.backend.create_slot(request).await,
            SavePayload::Update {
                creneau_id,
                request,
            } => self.backend.update_slot(creneau_id, request).await,
        };

        match result {
            Ok(()) => {
                self.editor.save_succeeded();
                self.reload().await;
                true
            }
            Err(e) => {
                self.editor.save_failed(&e);
                false
            }
        }
    }

    /// Deletes the slot being edited. On success the editor closes and the
    /// timetable reloads; membership is never adjusted locally.
    pub async fn delete_slot(&mut self) -> bool {
        let Some(creneau_id) = self.editor.delete_target() else {
            return false;
        };

        match self.backend.delete_slot(creneau_id).await {
            Ok(()) => {
                self.editor.close();
                self.reload().await;
                true
            }
            Err(e) => {
                self.editor.set_error(e.to_string());
                false
            }
        }
    }

    /// Downloads the loaded timetable as PDF or Excel, returning the
    /// suggested file name and the bytes.
    pub async fn export(&self, format: ExportFormat) -> ScheduleResult<Option<(String, Vec<u8>)>> {
        let Some(timetable) = self.timetable.as_ref() else {
            return Ok(None);
        };
        let bytes = self.backend.export_timetable(timetable.id, format).await?;
        let name = export_file_name(
            self.classe_id.unwrap_or_default(),
            self.semestre_id.unwrap_or_default(),
            format,
        );
        Ok(Some((name, bytes)))
    }
}
