//! Slot edit workflow state machine.
//!
//! `Closed -> Open(create | edit) -> Saving -> Closed`, with `Saving` able to
//! fail back to `Open` carrying the backend's message. The only constraint
//! enforced client-side is the attribution-driven option sets: the subject
//! dropdown is limited to subjects attributed to the (class, semester) pair,
//! and the teacher dropdown to teachers attributed to the selected subject.
//! Overlap detection stays with the backend; the workflow submits candidate
//! slots and surfaces rejections verbatim.

use serde::{Deserialize, Serialize};

use crate::errors::{ScheduleError, ScheduleResult};
use crate::models::entities::Attribution;
use crate::models::requests::{CreateCreneauRequest, UpdateCreneauRequest};
use crate::models::slot::WeekDay;
use crate::models::wire::RawCreneau;

/// Generic hint appended to conflict rejections. The client never interprets
/// the conflict list itself.
pub const CONFLICT_HINT: &str = "Vérifiez que le Professeur ou la Salle ne sont pas déjà occupés.";

const DEFAULT_START: &str = "07:30";
const DEFAULT_END: &str = "09:30";

/// Dropdown entry derived from the attribution collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: i64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit { creneau_id: i64 },
}

/// Field values of the slot form. Times are `HH:MM` strings as edited.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotForm {
    pub jour: WeekDay,
    pub heure_debut: String,
    pub heure_fin: String,
    pub matiere_id: Option<i64>,
    pub professeur_id: Option<i64>,
    pub salle_id: Option<i64>,
}

impl SlotForm {
    fn blank() -> Self {
        SlotForm {
            jour: WeekDay::Monday,
            heure_debut: DEFAULT_START.to_string(),
            heure_fin: DEFAULT_END.to_string(),
            matiere_id: None,
            professeur_id: None,
            salle_id: None,
        }
    }

    fn from_raw(raw: &RawCreneau) -> Self {
        SlotForm {
            jour: WeekDay::from_name(&raw.jour_semaine).unwrap_or(WeekDay::Monday),
            heure_debut: truncate_time(&raw.heure_debut),
            heure_fin: truncate_time(&raw.heure_fin),
            matiere_id: raw.matiere_id,
            professeur_id: raw.professeur_id,
            salle_id: raw.salle_id,
        }
    }
}

fn truncate_time(raw: &str) -> String {
    // get() instead of indexing: byte 5 may not be a char boundary.
    raw.get(..5).unwrap_or(raw).to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorState {
    Closed,
    Open {
        mode: EditMode,
        form: SlotForm,
        /// Backend rejection from the last save attempt, if any.
        error: Option<String>,
    },
    Saving {
        mode: EditMode,
        form: SlotForm,
    },
}

/// Payload handed to the transport when a save begins. Updates omit the
/// immutable timetable reference.
#[derive(Debug, Clone, PartialEq)]
pub enum SavePayload {
    Create(CreateCreneauRequest),
    Update {
        creneau_id: i64,
        request: UpdateCreneauRequest,
    },
}

/// The slot edit workflow. Owns the current state and the attribution
/// collection loaded for the (class, semester) being edited.
#[derive(Debug, Clone)]
pub struct SlotEditor {
    state: EditorState,
    attributions: Vec<Attribution>,
}

impl Default for SlotEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotEditor {
    pub fn new() -> Self {
        SlotEditor {
            state: EditorState::Closed,
            attributions: Vec::new(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Open { .. })
    }

    /// Opens the form for a new slot.
    pub fn open_create(&mut self, attributions: Vec<Attribution>) {
        self.attributions = attributions;
        self.state = EditorState::Open {
            mode: EditMode::Create,
            form: SlotForm::blank(),
            error: None,
        };
    }

    /// Opens the form pre-filled from an existing slot.
    pub fn open_edit(&mut self, raw: &RawCreneau, attributions: Vec<Attribution>) {
        self.attributions = attributions;
        self.state = EditorState::Open {
            mode: EditMode::Edit { creneau_id: raw.id },
            form: SlotForm::from_raw(raw),
            error: None,
        };
    }

    pub fn close(&mut self) {
        self.state = EditorState::Closed;
    }

    /// Records a user-facing error on the open form (delete failures,
    /// validation). No-op when no form is open.
    pub fn set_error(&mut self, message: impl Into<String>) {
        if let EditorState::Open { error, .. } = &mut self.state {
            *error = Some(message.into());
        }
    }

    /// Subjects attributed to the current (class, semester), deduplicated in
    /// attribution order. Labels are `CODE - Nom` when a code exists.
    pub fn subject_options(&self) -> Vec<SelectOption> {
        let mut seen = Vec::new();
        let mut options = Vec::new();
        for attribution in &self.attributions {
            if seen.contains(&attribution.matiere_id) {
                continue;
            }
            seen.push(attribution.matiere_id);
            let label = match &attribution.matiere.code {
                Some(code) => format!("{} - {}", code, attribution.matiere.nom),
                None => attribution.matiere.nom.clone(),
            };
            options.push(SelectOption {
                id: attribution.matiere_id,
                label,
            });
        }
        options
    }

    /// Teachers attributed to the currently selected subject. Empty while no
    /// subject is selected.
    pub fn teacher_options(&self) -> Vec<SelectOption> {
        let Some(matiere_id) = self.form().and_then(|f| f.matiere_id) else {
            return Vec::new();
        };
        self.attributions
            .iter()
            .filter(|a| a.matiere_id == matiere_id)
            .map(|a| SelectOption {
                id: a.professeur_id,
                label: format!(
                    "{} {}",
                    a.professeur.user.prenom, a.professeur.user.nom
                ),
            })
            .collect()
    }

    /// Selects a subject. Always clears the teacher field, even when the
    /// previous teacher also teaches the new subject, then auto-selects when
    /// exactly one teacher is attributed.
    pub fn select_subject(&mut self, matiere_id: i64) {
        if let Some(form) = self.form_mut() {
            form.matiere_id = Some(matiere_id);
            form.professeur_id = None;
        }
        let options = self.teacher_options();
        if options.len() == 1 {
            if let Some(form) = self.form_mut() {
                form.professeur_id = Some(options[0].id);
            }
        }
    }

    pub fn select_teacher(&mut self, professeur_id: i64) {
        if let Some(form) = self.form_mut() {
            form.professeur_id = Some(professeur_id);
        }
    }

    pub fn select_room(&mut self, salle_id: i64) {
        if let Some(form) = self.form_mut() {
            form.salle_id = Some(salle_id);
        }
    }

    pub fn set_day(&mut self, jour: WeekDay) {
        if let Some(form) = self.form_mut() {
            form.jour = jour;
        }
    }

    pub fn set_times(&mut self, heure_debut: &str, heure_fin: &str) {
        if let Some(form) = self.form_mut() {
            form.heure_debut = heure_debut.to_string();
            form.heure_fin = heure_fin.to_string();
        }
    }

    /// Transitions `Open -> Saving` and builds the request payload for the
    /// owning timetable and week. Incomplete forms stay `Open` with a
    /// validation error.
    pub fn begin_save(
        &mut self,
        emploi_temps_id: i64,
        semaine_numero: u32,
    ) -> ScheduleResult<SavePayload> {
        let (mode, form) = match &self.state {
            EditorState::Open { mode, form, .. } => (*mode, form.clone()),
            _ => {
                return Err(ScheduleError::Validation(
                    "Aucun formulaire ouvert".to_string(),
                ));
            }
        };

        let (Some(matiere_id), Some(professeur_id), Some(salle_id)) =
            (form.matiere_id, form.professeur_id, form.salle_id)
        else {
            let message = "Matière, professeur et salle sont requis".to_string();
            self.set_error(message.clone());
            return Err(ScheduleError::Validation(message));
        };

        let payload = match mode {
            EditMode::Create => SavePayload::Create(CreateCreneauRequest {
                jour_semaine: form.jour,
                heure_debut: form.heure_debut.clone(),
                heure_fin: form.heure_fin.clone(),
                matiere_id,
                professeur_id,
                salle_id,
                emploi_temps_id,
                semaine_numero,
            }),
            EditMode::Edit { creneau_id } => SavePayload::Update {
                creneau_id,
                request: UpdateCreneauRequest {
                    jour_semaine: form.jour,
                    heure_debut: form.heure_debut.clone(),
                    heure_fin: form.heure_fin.clone(),
                    matiere_id,
                    professeur_id,
                    salle_id,
                    semaine_numero,
                },
            },
        };

        self.state = EditorState::Saving { mode, form };
        Ok(payload)
    }

    /// Successful save: the workflow closes and the caller reloads the owning
    /// timetable, since the backend is the source of truth for membership.
    pub fn save_succeeded(&mut self) {
        self.state = EditorState::Closed;
    }

    /// Failed save: back to `Open` with the backend message, plus the
    /// availability hint when the rejection carries a conflict list.
    pub fn save_failed(&mut self, error: &ScheduleError) {
        let message = match error {
            ScheduleError::Conflict { message, conflicts } if !conflicts.is_empty() => {
                format!("{}. {}", message, CONFLICT_HINT)
            }
            other => other.to_string(),
        };

        if let EditorState::Saving { mode, form } = &self.state {
            self.state = EditorState::Open {
                mode: *mode,
                form: form.clone(),
                error: Some(message),
            };
        }
    }

    /// Slot targeted by a delete action. Deletion is only available while
    /// editing an existing slot.
    pub fn delete_target(&self) -> Option<i64> {
        match &self.state {
            EditorState::Open {
                mode: EditMode::Edit { creneau_id },
                ..
            } => Some(*creneau_id),
            _ => None,
        }
    }

    fn form(&self) -> Option<&SlotForm> {
        match &self.state {
            EditorState::Open { form, .. } | EditorState::Saving { form, .. } => Some(form),
            EditorState::Closed => None,
        }
    }

    fn form_mut(&mut self) -> Option<&mut SlotForm> {
        match &mut self.state {
            EditorState::Open { form, .. } => Some(form),
            _ => None,
        }
    }
}
