use edt_client::envelope::{Envelope, Resource};
use edt_core::models::entities::Classe;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_value, json};

fn envelope(data: serde_json::Value) -> Envelope {
    from_value(json!({ "success": true, "data": data })).unwrap()
}

#[test]
fn test_collection_under_resource_key() {
    let envelope = envelope(json!({
        "classes": [
            { "id": 1, "nom": "3A-INFO" },
            { "id": 2, "nom": "3B-INFO" }
        ]
    }));

    let classes: Vec<Classe> = envelope.collection("classes").unwrap();
    assert_eq!(classes.len(), 2);
    assert_eq!(classes[0].nom, "3A-INFO");
}

#[test]
fn test_collection_as_bare_array() {
    // Some endpoints skip the resource key; both envelope shapes are valid.
    let envelope = envelope(json!([{ "id": 1, "nom": "3A-INFO" }]));
    let classes: Vec<Classe> = envelope.collection("classes").unwrap();
    assert_eq!(classes.len(), 1);
}

#[test]
fn test_missing_collection_is_empty_not_error() {
    let envelope = envelope(json!({ "autre_chose": 42 }));
    let classes: Vec<Classe> = envelope.collection("classes").unwrap();
    assert_eq!(classes, vec![]);
}

#[test]
fn test_malformed_rows_are_a_validation_error() {
    let envelope = envelope(json!({ "classes": [{ "id": "pas un id" }] }));
    let result: Result<Vec<Classe>, _> = envelope.collection("classes");
    assert!(result.is_err());
}

#[test]
fn test_object_under_key_with_fallback() {
    let keyed = envelope(json!({ "classe": { "id": 1, "nom": "3A-INFO" } }));
    let classe: Classe = keyed.object("classe").unwrap();
    assert_eq!(classe.id, 1);

    let bare = envelope(json!({ "id": 2, "nom": "3B-INFO" }));
    let classe: Classe = bare.object("classe").unwrap();
    assert_eq!(classe.id, 2);
}

#[rstest]
#[case(Resource::Professeurs, "/professeurs", "professeurs")]
#[case(Resource::Etudiants, "/etudiants", "etudiants")]
#[case(Resource::Salles, "/salles", "salles")]
#[case(Resource::Classes, "/classes", "classes")]
#[case(Resource::Specialites, "/specialites", "specialites")]
#[case(Resource::Filieres, "/filieres", "filieres")]
#[case(Resource::Cycles, "/cycles", "cycles")]
#[case(Resource::UnitesEnseignement, "/unites-enseignement", "unites_enseignement")]
#[case(Resource::Matieres, "/matieres", "matieres")]
#[case(Resource::Semestres, "/semestres", "semestres")]
#[case(Resource::Dfrs, "/dfrs", "dfrs")]
#[case(Resource::Domaines, "/domaines", "domaines")]
#[case(Resource::Attributions, "/attributions", "attributions")]
#[case(Resource::Indisponibilites, "/indisponibilites", "indisponibilites")]
fn test_resource_adapter_table(
    #[case] resource: Resource,
    #[case] path: &str,
    #[case] key: &str,
) {
    assert_eq!(resource.path(), path);
    assert_eq!(resource.collection_key(), key);
}
