//! Compatibility tests against documents written by the original app
//!
//! The mobile app persisted each collection as one JSON array under a
//! fixed key, with millisecond-timestamp ids and Portuguese field names.
//! A data directory it produced must keep working unchanged.

use std::sync::Arc;

use petbase::storage::{MemoryBackend, StorageBackend};
use petbase::{
    AdoptionPetFields, ClientFields, Config, Engine, PetFields, PetShopFields, RecordId,
    ReloadHook, VeterinarianFields,
};

fn seeded_engine(key: &str, document: &str) -> Engine {
    let backend = Arc::new(MemoryBackend::new());
    backend.set(key, document).unwrap();
    Engine::with_backend(backend, Config::default())
}

#[test]
fn test_reads_legacy_pets_document() {
    // As written by the app before the tutor field existed
    let engine = seeded_engine(
        "pets",
        r#"[{"id":1714764305000,"nome":"Rex","raca":"Labrador","idade":3,"imagem":"file:///rex.jpg"}]"#,
    );

    let pets = engine.list::<PetFields>().unwrap();
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].id, RecordId(1714764305000));
    assert_eq!(pets[0].fields.tutor, "");
    assert_eq!(pets[0].fields.imagem.as_deref(), Some("file:///rex.jpg"));
}

#[test]
fn test_reads_legacy_pets_document_with_string_age() {
    // FormPets persisted Formik's raw input values, so idade arrived as
    // a numeric string in older documents
    let engine = seeded_engine(
        "pets",
        r#"[{"id":1714764305000,"nome":"Rex","raca":"Labrador","idade":"3"},
            {"id":1714764305001,"nome":"Mia","raca":"Siamês","idade":2}]"#,
    );

    let pets = engine.list::<PetFields>().unwrap();
    assert_eq!(pets.len(), 2);
    assert_eq!(pets[0].fields.idade, 3);
    assert_eq!(pets[1].fields.idade, 2);
}

#[test]
fn test_reads_legacy_adoption_document_with_string_age() {
    let engine = seeded_engine(
        "petsAdocao",
        r#"[{"id":1714764306001,"nome":"Thor","raca":"SRD","idade":"4"}]"#,
    );

    let pets = engine.list::<AdoptionPetFields>().unwrap();
    assert_eq!(pets[0].fields.idade, 4);
}

#[test]
fn test_reads_legacy_adoption_document() {
    let engine = seeded_engine(
        "petsAdocao",
        r#"[{"id":1714764306000,"nome":"Luna","raca":"SRD","idade":1,"imagem":null}]"#,
    );

    let pets = engine.list::<AdoptionPetFields>().unwrap();
    assert_eq!(pets[0].fields.nome, "Luna");
    assert_eq!(pets[0].fields.imagem, None);
}

#[test]
fn test_reads_legacy_clients_document() {
    let engine = seeded_engine(
        "clientes",
        r#"[{"id":1714764307000,"nome":"Ana","nomePet":"Rex","cpf":"123.456.789-00","telefone":"(11) 91234-5678","endereco":"Rua A, 10"}]"#,
    );

    let clients = engine.list::<ClientFields>().unwrap();
    assert_eq!(clients[0].fields.nome_pet, "Rex");
    assert_eq!(clients[0].fields.endereco, "Rua A, 10");
}

#[test]
fn test_reads_legacy_petshops_document() {
    let engine = seeded_engine(
        "petshops",
        r#"[{"id":1714764308000,"nome":"Bicho Feliz","produtos":["Ração","Brinquedos"],"servicos":["Banho","Tosa"]}]"#,
    );

    let shops = engine.list::<PetShopFields>().unwrap();
    assert_eq!(shops[0].fields.produtos, ["Ração", "Brinquedos"]);
    assert_eq!(shops[0].fields.servicos, ["Banho", "Tosa"]);
}

#[test]
fn test_reads_legacy_veterinarians_document() {
    let engine = seeded_engine(
        "veterinarios",
        r#"[{"id":1714764309000,"nome":"Dr. Sousa","horario":"08:30","telefone":"(11) 1234-5678","servicos":["Consulta"]}]"#,
    );

    let vets = engine.list::<VeterinarianFields>().unwrap();
    assert_eq!(vets[0].fields.horario, "08:30");
}

#[test]
fn test_mutation_keeps_legacy_wire_shape() {
    let backend = Arc::new(MemoryBackend::new());
    backend
        .set(
            "clientes",
            r#"[{"id":1,"nome":"Ana","nomePet":"Rex","cpf":"123.456.789-00","telefone":"(11) 91234-5678","endereco":"Rua A"}]"#,
        )
        .unwrap();
    let engine = Engine::with_backend(
        Arc::clone(&backend) as Arc<dyn StorageBackend>,
        Config::default(),
    );

    let mut ana = engine.list::<ClientFields>().unwrap().remove(0);
    ana.fields.endereco = "Rua B".to_string();
    engine.update(ana, &ReloadHook::none()).unwrap();

    let raw = backend.get("clientes").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    // Flat array of flat records, Portuguese keys, numeric id
    assert!(value.is_array());
    assert_eq!(value[0]["id"], 1);
    assert_eq!(value[0]["nomePet"], "Rex");
    assert_eq!(value[0]["endereco"], "Rua B");
    assert!(value[0].get("fields").is_none());
    assert!(value[0].get("nome_pet").is_none());
}
