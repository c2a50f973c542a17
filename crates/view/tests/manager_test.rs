use std::sync::Arc;

use edt_client::mock::MockBackend;
use edt_core::editor::{EditorState, CONFLICT_HINT};
use edt_core::errors::ScheduleError;
use edt_core::models::entities::{Attribution, EmploiTemps, Salle};
use edt_core::models::wire::{RawCreneau, RawMatiere, RawProfesseur, RawUserName};
use edt_view::manager::TimetableManager;
use pretty_assertions::assert_eq;

fn raw_slot(id: i64, week: u32, annule: bool) -> RawCreneau {
    RawCreneau {
        id,
        jour_semaine: "Lundi".to_string(),
        heure_debut: "08:00:00".to_string(),
        heure_fin: "10:00:00".to_string(),
        matiere_id: Some(1),
        professeur_id: Some(10),
        salle_id: Some(3),
        matiere: None,
        professeur: None,
        salle: None,
        emploi_temps: None,
        semaine_numero: Some(week),
        annule: Some(annule),
    }
}

fn timetable(id: i64, creneaux: Vec<RawCreneau>) -> EmploiTemps {
    EmploiTemps {
        id,
        classe_id: Some(1),
        semestre_id: Some(2),
        creneaux,
    }
}

fn attribution() -> Attribution {
    Attribution {
        id: 1,
        matiere_id: 1,
        professeur_id: 10,
        classe_id: Some(1),
        semestre_id: Some(2),
        matiere: RawMatiere {
            nom: "Algorithmique".to_string(),
            code: None,
            dfr: None,
        },
        professeur: RawProfesseur {
            id: Some(10),
            user: RawUserName {
                nom: "Dupont".to_string(),
                prenom: "Jean".to_string(),
            },
        },
    }
}

#[test]
fn test_week_navigation_refilters_without_refetch() {
    // No expectations on the mock: week changes must not hit the backend.
    let mut manager = TimetableManager::new(Arc::new(MockBackend::new()));
    manager.select_class(Some(1));
    manager.select_semester(Some(2));

    let intent = manager.begin_load().expect("selection is complete");
    let applied = manager.finish_load(
        intent,
        Some(timetable(
            10,
            vec![raw_slot(1, 1, false), raw_slot(2, 2, false), raw_slot(3, 2, true)],
        )),
    );
    assert!(applied);
    assert_eq!(manager.week_slots().len(), 1);
    assert_eq!(manager.week_slots()[0].id, 1);

    manager.select_week(2);
    // The cancelled week-2 slot stays out.
    assert_eq!(manager.week_slots().len(), 1);
    assert_eq!(manager.week_slots()[0].id, 2);
}

#[test]
fn test_stale_load_is_discarded() {
    let mut manager = TimetableManager::new(Arc::new(MockBackend::new()));
    manager.select_class(Some(1));
    manager.select_semester(Some(2));
    let stale = manager.begin_load().expect("selection is complete");

    // The user switches class before the first load lands.
    manager.select_class(Some(9));
    let fresh = manager.begin_load().expect("selection is complete");

    assert!(!manager.finish_load(stale, Some(timetable(10, vec![raw_slot(1, 1, false)]))));
    assert_eq!(manager.timetable(), None);

    assert!(manager.finish_load(fresh, Some(timetable(11, vec![raw_slot(2, 1, false)]))));
    assert_eq!(manager.timetable().map(|t| t.id), Some(11));
    assert_eq!(manager.week_slots()[0].id, 2);
}

#[test]
fn test_incomplete_selection_clears_grid() {
    let mut manager = TimetableManager::new(Arc::new(MockBackend::new()));
    manager.select_class(Some(1));
    assert_eq!(manager.begin_load(), None);
    assert_eq!(manager.timetable(), None);
    assert!(manager.week_slots().is_empty());
}

#[tokio::test]
async fn test_reload_fetches_summary_then_detail() {
    let mut mock = MockBackend::new();
    mock.expect_find_timetable()
        .returning(|_, _| Ok(Some(timetable(10, vec![]))));
    mock.expect_timetable_detail()
        .returning(|_| Ok(timetable(10, vec![raw_slot(1, 1, false)])));

    let mut manager = TimetableManager::new(Arc::new(mock));
    manager.select_class(Some(1));
    manager.select_semester(Some(2));
    manager.reload().await;

    assert_eq!(manager.timetable().map(|t| t.id), Some(10));
    assert_eq!(manager.week_slots().len(), 1);
}

#[tokio::test]
async fn test_read_failure_renders_empty_grid() {
    let mut mock = MockBackend::new();
    mock.expect_find_timetable()
        .returning(|_, _| Err(ScheduleError::Transport(eyre::eyre!("backend down"))));

    let mut manager = TimetableManager::new(Arc::new(mock));
    manager.select_class(Some(1));
    manager.select_semester(Some(2));
    manager.reload().await;

    assert_eq!(manager.timetable(), None);
    assert!(manager.week_slots().is_empty());
}

#[tokio::test]
async fn test_save_posts_slot_and_reloads() {
    let mut mock = MockBackend::new();
    mock.expect_find_timetable()
        .times(2)
        .returning(|_, _| Ok(Some(timetable(10, vec![]))));
    mock.expect_timetable_detail()
        .times(2)
        .returning(|_| Ok(timetable(10, vec![raw_slot(1, 1, false)])));
    mock.expect_list_salles().returning(|| {
        Ok(vec![Salle {
            id: 3,
            nom: "A1".to_string(),
            capacite: Some(40),
        }])
    });
    mock.expect_list_attributions()
        .returning(|_, _| Ok(vec![attribution()]));
    mock.expect_create_slot()
        .withf(|request| {
            request.emploi_temps_id == 10
                && request.semaine_numero == 1
                && request.matiere_id == 1
                && request.professeur_id == 10
        })
        .returning(|_| Ok(()));

    let mut manager = TimetableManager::new(Arc::new(mock));
    manager.select_class(Some(1));
    manager.select_semester(Some(2));
    manager.reload().await;

    manager.open_add_slot().await;
    manager.editor_mut().select_subject(1);
    manager.editor_mut().select_room(3);

    assert!(manager.save().await);
    assert_eq!(*manager.editor().state(), EditorState::Closed);
}

#[tokio::test]
async fn test_conflict_rejection_reopens_form_and_keeps_grid() {
    let mut mock = MockBackend::new();
    mock.expect_find_timetable()
        .times(1)
        .returning(|_, _| Ok(Some(timetable(10, vec![]))));
    mock.expect_timetable_detail()
        .times(1)
        .returning(|_| Ok(timetable(10, vec![raw_slot(1, 1, false)])));
    mock.expect_list_salles().returning(|| Ok(vec![]));
    mock.expect_list_attributions()
        .returning(|_, _| Ok(vec![attribution()]));
    mock.expect_create_slot().returning(|_| {
        Err(ScheduleError::Conflict {
            message: "Créneau en conflit".to_string(),
            conflicts: vec![raw_slot(7, 1, false)],
        })
    });

    let mut manager = TimetableManager::new(Arc::new(mock));
    manager.select_class(Some(1));
    manager.select_semester(Some(2));
    manager.reload().await;
    let before: Vec<i64> = manager.week_slots().iter().map(|s| s.id).collect();

    manager.open_add_slot().await;
    manager.editor_mut().select_subject(1);
    manager.editor_mut().select_room(3);

    assert!(!manager.save().await);
    let EditorState::Open { error, .. } = manager.editor().state() else {
        panic!("rejected save should reopen the form");
    };
    assert!(error.as_deref().unwrap().contains(CONFLICT_HINT));

    // No reload happened (times(1) above) and the grid is untouched.
    let after: Vec<i64> = manager.week_slots().iter().map(|s| s.id).collect();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_delete_requires_edit_mode() {
    let mut mock = MockBackend::new();
    mock.expect_list_salles().returning(|| Ok(vec![]));
    mock.expect_list_attributions()
        .returning(|_, _| Ok(vec![attribution()]));

    let mut manager = TimetableManager::new(Arc::new(mock));
    manager.select_class(Some(1));
    manager.select_semester(Some(2));
    let intent = manager.begin_load().expect("selection is complete");
    manager.finish_load(intent, Some(timetable(10, vec![])));

    manager.open_add_slot().await;
    // Creating: no delete target, no backend call (no expectation set).
    assert!(!manager.delete_slot().await);
}
