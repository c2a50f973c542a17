use chrono::NaiveTime;
use edt_core::models::slot::WeekDay;
use edt_core::models::wire::{
    RawClasseRef, RawCreneau, RawDfr, RawEmploiTempsRef, RawMatiere, RawProfesseur, RawSalle,
    RawUserName,
};
use edt_core::normalize::{
    normalize, normalize_all, SourceShape, DEFAULT_COLOR, UNKNOWN_ROOM, UNKNOWN_SUBJECT,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn raw(jour: &str) -> RawCreneau {
    RawCreneau {
        id: 1,
        jour_semaine: jour.to_string(),
        heure_debut: "08:00:00".to_string(),
        heure_fin: "10:00:00".to_string(),
        matiere_id: Some(5),
        professeur_id: Some(7),
        salle_id: Some(9),
        matiere: Some(RawMatiere {
            nom: "Algorithmique".to_string(),
            code: Some("ALG101".to_string()),
            dfr: Some(RawDfr {
                couleur: Some("#FF0000".to_string()),
            }),
        }),
        professeur: Some(RawProfesseur {
            id: Some(7),
            user: RawUserName {
                nom: "Dupont".to_string(),
                prenom: "Jean".to_string(),
            },
        }),
        salle: Some(RawSalle {
            nom: "A1".to_string(),
            capacite: Some(40),
        }),
        emploi_temps: Some(RawEmploiTempsRef {
            classe: Some(RawClasseRef {
                nom: "3A-INFO".to_string(),
            }),
        }),
        semaine_numero: Some(4),
        annule: Some(false),
    }
}

#[test]
fn test_full_record_maps_every_field() {
    let slot = normalize(&raw("Mardi"), SourceShape::Editor);

    assert_eq!(slot.id, 1);
    assert_eq!(slot.day, WeekDay::Tuesday);
    assert_eq!(slot.start, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    assert_eq!(slot.end, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    assert_eq!(slot.subject, "Algorithmique");
    assert_eq!(slot.teacher, "Jean Dupont");
    assert_eq!(slot.room, "A1");
    assert_eq!(slot.class_name, "3A-INFO");
    assert_eq!(slot.color, "#FF0000");
    assert_eq!(slot.week, Some(4));
    assert_eq!(slot.cancelled, Some(false));
}

#[rstest]
#[case("Lundi", 1)]
#[case("Mardi", 2)]
#[case("Mercredi", 3)]
#[case("Jeudi", 4)]
#[case("Vendredi", 5)]
#[case("Samedi", 6)]
#[case("Dimanche", 7)]
fn test_day_name_lookup(#[case] name: &str, #[case] number: u8) {
    let slot = normalize(&raw(name), SourceShape::ClassSchedule);
    assert_eq!(slot.day.number(), number);
}

#[test]
fn test_unknown_day_name_falls_back_to_monday() {
    let slot = normalize(&raw("Octidi"), SourceShape::ClassSchedule);
    assert_eq!(slot.day, WeekDay::Monday);
}

#[test]
fn test_missing_relations_get_placeholders() {
    let mut record = raw("Jeudi");
    record.matiere = None;
    record.professeur = None;
    record.salle = None;
    record.emploi_temps = None;

    let slot = normalize(&record, SourceShape::Editor);
    assert_eq!(slot.subject, UNKNOWN_SUBJECT);
    assert_eq!(slot.subject, "Matière inconnue");
    assert_eq!(slot.teacher, "");
    assert_eq!(slot.room, UNKNOWN_ROOM);
    assert_eq!(slot.class_name, "");
}

#[test]
fn test_color_defaults_without_department() {
    let mut record = raw("Lundi");
    record.matiere.as_mut().unwrap().dfr = None;
    let slot = normalize(&record, SourceShape::PersonalSchedule);
    assert_eq!(slot.color, DEFAULT_COLOR);

    record.matiere = None;
    let slot = normalize(&record, SourceShape::PersonalSchedule);
    assert_eq!(slot.color, DEFAULT_COLOR);
}

#[test]
fn test_seconds_are_truncated() {
    let mut record = raw("Lundi");
    record.heure_debut = "09:15:42".to_string();
    record.heure_fin = "11:45:59".to_string();

    let slot = normalize(&record, SourceShape::ClassSchedule);
    assert_eq!(slot.start, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
    assert_eq!(slot.end, NaiveTime::from_hms_opt(11, 45, 0).unwrap());
}

#[rstest]
#[case("pas une heure")]
// Byte 5 lands inside the "é": truncation must respect char boundaries.
#[case("08h0é00")]
#[case("éééééé")]
fn test_malformed_time_falls_back_to_grid_origin(#[case] bad: &str) {
    let mut record = raw("Lundi");
    record.heure_debut = bad.to_string();

    let slot = normalize(&record, SourceShape::ClassSchedule);
    assert_eq!(slot.start, NaiveTime::from_hms_opt(7, 0, 0).unwrap());
}

#[rstest]
#[case(SourceShape::ClassSchedule)]
#[case(SourceShape::PersonalSchedule)]
fn test_non_editor_shapes_leave_week_not_applicable(#[case] shape: SourceShape) {
    // Even when the backend happens to include the fields, the class and
    // personal shapes do not carry week semantics.
    let slot = normalize(&raw("Lundi"), shape);
    assert_eq!(slot.week, None);
    assert_eq!(slot.cancelled, None);
}

#[test]
fn test_normalize_all_keeps_order() {
    let records = vec![raw("Lundi"), raw("Samedi")];
    let slots = normalize_all(&records, SourceShape::Editor);
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].day, WeekDay::Monday);
    assert_eq!(slots[1].day, WeekDay::Saturday);
}
