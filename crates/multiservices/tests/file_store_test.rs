use chrono::{TimeZone, Utc};
use multiservices::error::DirectoryError;
use multiservices::ids::{FixedClock, SequentialIds};
use multiservices::model::{ClientDraft, ProviderDraft, RecordId, ReviewDraft, ServiceCategory};
use multiservices::store::fs::FileStore;
use multiservices::store::{Collection, CorruptionPolicy, DirectoryStore};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn painter() -> ProviderDraft {
    ProviderDraft {
        name: "Carlos Silva".to_string(),
        email: "carlos@pintor.com".to_string(),
        phone: "(11) 99999-9999".to_string(),
        service: ServiceCategory::Painter,
        experience: "8 anos de experiência".to_string(),
        description: "Pintura residencial".to_string(),
        location: "São Paulo - SP".to_string(),
        hourly_rate: Some(80.0),
    }
}

#[test]
fn records_persist_across_store_instances() {
    let dir = TempDir::new().unwrap();
    let id = {
        let mut store = FileStore::open(dir.path());
        let provider = store.save_provider(painter()).unwrap();
        store
            .save_review(ReviewDraft {
                provider_id: provider.id.clone(),
                rating: 5,
                comment: Some("Excelente".to_string()),
            })
            .unwrap();
        store
            .save_client(ClientDraft {
                name: "Bea".to_string(),
                email: "bea@example.com".to_string(),
                phone: "11912345678".to_string(),
                location: "Santos - SP".to_string(),
            })
            .unwrap();
        provider.id
    };

    let store = FileStore::open(dir.path());
    let provider = store.get_provider_by_id(&id).unwrap().unwrap();
    assert_eq!(provider.name, "Carlos Silva");
    assert_eq!(provider.hourly_rate, Some(80.0));
    assert_eq!(store.list_reviews(&id).unwrap().len(), 1);
    assert_eq!(store.list_clients().unwrap().len(), 1);
}

#[test]
fn persisted_file_uses_versioned_envelope_and_camel_case() {
    let dir = TempDir::new().unwrap();
    let created = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    let mut store = FileStore::open(dir.path())
        .with_id_generator(SequentialIds::new())
        .with_clock(FixedClock(created));

    store.save_provider(painter()).unwrap();
    store
        .save_review(ReviewDraft {
            provider_id: RecordId::from("1"),
            rating: 4,
            comment: None,
        })
        .unwrap();

    let providers: Value = serde_json::from_slice(
        &fs::read(dir.path().join("multiservices_providers.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(providers["version"], 1);
    assert_eq!(providers["records"][0]["id"], "1");
    assert_eq!(providers["records"][0]["hourlyRate"], 80.0);
    assert_eq!(providers["records"][0]["service"], "Pintor");

    let reviews: Value = serde_json::from_slice(
        &fs::read(dir.path().join("multiservices_reviews.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(reviews["records"][0]["providerId"], "1");
    assert!(reviews["records"][0]["date"]
        .as_str()
        .unwrap()
        .starts_with("2024-03-15T12:00:00"));
}

#[test]
fn legacy_bare_array_with_string_rates_is_read() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("multiservices_providers.json"),
        r#"[
            {"id": "1700000000000", "name": "Carlos Silva", "email": "carlos@pintor.com",
             "phone": "(11) 99999-9999", "service": "Pintor", "experience": "8 anos",
             "description": "Pintura", "location": "São Paulo - SP", "hourlyRate": "80.00"},
            {"id": "1700000000001", "name": "Maria Santos", "email": "maria@encanadora.com",
             "phone": "(11) 98888-8888", "service": "Encanadora", "location": "São Paulo - SP",
             "hourlyRate": ""}
        ]"#,
    )
    .unwrap();

    let store = FileStore::open(dir.path());
    let providers = store.list_providers().unwrap();
    assert_eq!(providers.len(), 2);
    assert_eq!(providers[0].hourly_rate, Some(80.0));
    assert_eq!(providers[1].service, ServiceCategory::Plumber);
    assert_eq!(providers[1].hourly_rate, None);
    assert_eq!(providers[1].description, "");
}

#[test]
fn corrupt_file_follows_policy() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("multiservices_clients.json");
    fs::write(&path, "{ not json").unwrap();

    let strict = FileStore::open(dir.path()).with_corruption_policy(CorruptionPolicy::Error);
    match strict.list_clients() {
        Err(DirectoryError::CorruptState { collection, .. }) => {
            assert_eq!(collection, Collection::Clients)
        }
        other => panic!("Expected CorruptState, got {:?}", other),
    }

    let mut lenient = FileStore::open(dir.path());
    assert!(lenient.list_clients().unwrap().is_empty());

    // The next save replaces the unreadable file.
    lenient
        .save_client(ClientDraft {
            name: "Bea".to_string(),
            email: "bea@example.com".to_string(),
            phone: "11912345678".to_string(),
            location: "Santos - SP".to_string(),
        })
        .unwrap();
    assert_eq!(strict.list_clients().unwrap().len(), 1);
}
