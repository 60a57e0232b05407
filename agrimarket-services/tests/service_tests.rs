mod common;

use std::sync::Arc;

use agrimarket_model::{Labour, Listing, ListingKind, Machine, Status};
use agrimarket_services::{LabourFilter, LabourService, Marketplace, ServiceError};
use agrimarket_store::{Document, RecordStore};
use agrimarket_types::RecordId;
use common::{UnreachableStore, init_tracing, memory_marketplace, names, object};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── create ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_labour_normalizes_form_strings() {
    let (store, market) = memory_marketplace();

    let id = market
        .labour
        .create(&json!({"name": "A", "age": "30", "wages": "500"}))
        .await
        .unwrap();

    let doc = store.get("labours", &id).await.unwrap().unwrap();
    assert_eq!(doc.fields["age"], json!(30));
    assert_eq!(doc.fields["wages"], json!(500.0));
    assert_eq!(doc.fields["experience"], json!([]));
    assert_eq!(doc.fields["skills"], json!([]));
    assert_eq!(doc.fields["status"], json!("available"));
    assert_eq!(doc.fields["rating"], json!(0.0));
    assert_eq!(doc.fields["totalJobs"], json!(0));
    assert_eq!(doc.fields["verified"], json!(false));
    assert!(doc.fields["createdAt"].as_i64().unwrap() > 0);

    let labour = market.labour.get(&id).await.unwrap();
    assert_eq!(labour.id, Some(id));
    assert_eq!(labour.age, 30);
    assert_eq!(labour.wages, 500.0);
}

#[tokio::test]
async fn create_machine_and_produce() {
    let (store, market) = memory_marketplace();

    let machine_id = market
        .machines
        .create(&json!({"name": "Tractor", "manufactureYear": "2018", "price": "1200"}))
        .await
        .unwrap();
    let produce_id = market
        .produce
        .create(&json!({"name": "Mango", "type": "Fruit", "manufacturedDate": "2024-05-01", "price": "80"}))
        .await
        .unwrap();

    let machine = store.get("machines", &machine_id).await.unwrap().unwrap();
    assert_eq!(machine.fields["manufactureYear"], json!(2018));
    assert_eq!(machine.fields["status"], json!("available"));
    assert!(!machine.fields.contains_key("rating"));

    let produce = store.get("produce", &produce_id).await.unwrap().unwrap();
    assert_eq!(produce.fields["type"], json!("Fruit"));
    assert_eq!(produce.fields["price"], json!(80.0));
}

#[tokio::test]
async fn create_rejects_non_object_input() {
    let (store, market) = memory_marketplace();

    let err = market.labour.create(&json!(["not", "a", "record"])).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
    assert_eq!(err.code(), "invalid_input");
    assert_eq!(store.count("labours").await.unwrap(), 0);
}

#[tokio::test]
async fn create_on_unreachable_store_is_a_failure_result() {
    init_tracing();
    let market = Marketplace::new(Arc::new(UnreachableStore));

    let err = market.machines.create(&json!({"name": "Tiller"})).await.unwrap_err();
    assert!(matches!(err, ServiceError::Store(_)));
    assert!(err.to_string().contains("connection refused"));
}

// ── list ─────────────────────────────────────────────────────────

#[tokio::test]
async fn list_returns_only_available_newest_first() {
    let (store, market) = memory_marketplace();
    for (name, created, status) in [
        ("oldest", 100, "available"),
        ("hired", 300, "hired"),
        ("newest", 400, "available"),
        ("middle", 200, "available"),
    ] {
        store
            .insert("labours", object(json!({"name": name, "createdAt": created, "status": status})))
            .await
            .unwrap();
    }

    let labours = market.labour.list().await;
    assert_eq!(names(&labours), vec!["newest", "middle", "oldest"]);
    assert!(labours.iter().all(|l| l.status == Status::Available));
    assert!(labours.iter().all(|l| l.id.is_some()));
}

#[tokio::test]
async fn list_orders_mixed_created_at_encodings() {
    let (store, market) = memory_marketplace();
    for (id, created) in [
        ("numeric-2020", json!(1_577_836_800_000i64)),
        ("rfc-2030", json!("2030-01-01T00:00:00Z")),
    ] {
        store
            .insert_with_id(
                "labours",
                Document::new(
                    RecordId::parse(id).unwrap(),
                    object(json!({"name": id, "status": "available", "createdAt": created})),
                ),
            )
            .await;
    }

    let listed: Vec<(String, i64)> = market
        .labour
        .list()
        .await
        .into_iter()
        .map(|l| (l.name, l.created_at.as_millis()))
        .collect();
    assert_eq!(
        listed,
        vec![
            ("rfc-2030".to_string(), 1_893_456_000_000),
            ("numeric-2020".to_string(), 1_577_836_800_000),
        ]
    );
}

#[tokio::test]
async fn machine_and_produce_lists_exclude_taken_records() {
    let (store, market) = memory_marketplace();
    store.insert("machines", object(json!({"name": "free", "status": "available"}))).await.unwrap();
    store.insert("machines", object(json!({"name": "out", "status": "rented"}))).await.unwrap();
    store.insert("produce", object(json!({"name": "fresh", "status": "available"}))).await.unwrap();
    store.insert("produce", object(json!({"name": "gone", "status": "sold"}))).await.unwrap();

    let machines = market.machines.list().await;
    assert_eq!(machines.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(), vec!["free"]);

    let produce = market.produce.list().await;
    assert_eq!(produce.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["fresh"]);
}

#[tokio::test]
async fn list_normalizes_legacy_documents() {
    let (store, market) = memory_marketplace();
    let id = RecordId::parse("legacy-1").unwrap();
    store
        .insert_with_id(
            "labours",
            Document::new(
                id.clone(),
                object(json!({
                    "name": "Legacy",
                    "status": "available",
                    "age": "41",
                    "wages": "450",
                    "experience": [{"duration": "5"}, {"duration": ""}, {"duration": "3"}]
                })),
            ),
        )
        .await;

    let labours = market.labour.list().await;
    assert_eq!(labours.len(), 1);
    assert_eq!(labours[0].id, Some(id));
    assert_eq!(labours[0].age, 41);
    assert_eq!(labours[0].wages, 450.0);
    assert_eq!(labours[0].total_experience(), 8);
    assert_eq!(labours[0].languages, vec!["Hindi".to_string()]);
}

#[tokio::test]
async fn list_swallows_store_failures_but_try_list_reports_them() {
    init_tracing();
    let service = LabourService::new(Arc::new(UnreachableStore));

    assert!(service.list().await.is_empty());
    assert!(service.list_filtered(&LabourFilter::default()).await.is_empty());

    let err = service.try_list().await.unwrap_err();
    assert!(matches!(err, ServiceError::Store(_)));
    assert_eq!(err.code(), "store");
}

#[tokio::test]
async fn list_filtered_applies_filter_to_available_labour() {
    let (_store, market) = memory_marketplace();
    market
        .labour
        .create(&json!({"name": "Cheap", "wages": "400", "skills": ["Sowing"]}))
        .await
        .unwrap();
    market
        .labour
        .create(&json!({"name": "Dear", "wages": "900", "skills": ["Sowing"]}))
        .await
        .unwrap();
    market
        .labour
        .create(&json!({"name": "Other", "wages": "300", "skills": ["Weeding"]}))
        .await
        .unwrap();

    let filter = LabourFilter::default().with_skill("Sowing").with_max_wage(500.0);
    let labours = market.labour.list_filtered(&filter).await;
    assert_eq!(names(&labours), vec!["Cheap"]);

    let checked = market.labour.try_list_filtered(&filter).await.unwrap();
    assert_eq!(checked, labours);
}

#[tokio::test]
async fn try_list_filtered_reports_store_failures() {
    init_tracing();
    let service = LabourService::new(Arc::new(UnreachableStore));
    let filter = LabourFilter::default().with_min_experience(2);

    let err = service.try_list_filtered(&filter).await.unwrap_err();
    assert!(matches!(err, ServiceError::Store(_)));
    assert!(service.list_filtered(&filter).await.is_empty());
}

// ── transition ───────────────────────────────────────────────────

#[tokio::test]
async fn hire_moves_labour_off_the_list() {
    let (store, market) = memory_marketplace();
    let id = market.labour.create(&json!({"name": "A"})).await.unwrap();

    market.labour.hire_labour(&id).await.unwrap();

    assert!(market.labour.list().await.is_empty());
    let labour = market.labour.get(&id).await.unwrap();
    assert_eq!(labour.status, Status::Hired);
    assert!(labour.hired_at.is_some());

    let doc = store.get("labours", &id).await.unwrap().unwrap();
    assert_eq!(doc.fields["name"], json!("A"));
}

#[tokio::test]
async fn rent_and_buy_set_their_busy_status() {
    let (_store, market) = memory_marketplace();
    let machine_id = market.machines.create(&json!({"name": "Sprayer"})).await.unwrap();
    let produce_id = market.produce.create(&json!({"name": "Onion"})).await.unwrap();

    market.machines.rent_machine(&machine_id).await.unwrap();
    market.produce.buy_produce(&produce_id).await.unwrap();

    assert_eq!(market.machines.get(&machine_id).await.unwrap().status, Status::Rented);
    assert_eq!(market.produce.get(&produce_id).await.unwrap().status, Status::Sold);
    assert!(market.machines.list().await.is_empty());
    assert!(market.produce.list().await.is_empty());
}

#[tokio::test]
async fn transition_on_missing_id_is_not_found() {
    let (_store, market) = memory_marketplace();

    let err = market.labour.hire_labour(&RecordId::generate()).await.unwrap_err();
    match &err {
        ServiceError::NotFound { kind, .. } => assert_eq!(*kind, ListingKind::Labour),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.code(), "not_found");
}

#[tokio::test]
async fn second_transition_is_already_taken() {
    let (_store, market) = memory_marketplace();
    let id = market.produce.create(&json!({"name": "Potato"})).await.unwrap();

    market.produce.buy_produce(&id).await.unwrap();
    let err = market.produce.buy_produce(&id).await.unwrap_err();

    assert!(matches!(err, ServiceError::AlreadyTaken { .. }));
    assert!(err.to_string().contains("no longer available"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_hires_have_exactly_one_winner() {
    let (_store, market) = memory_marketplace();
    let id = market.labour.create(&json!({"name": "Sought After"})).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = market.labour.clone();
        let id = id.clone();
        handles.push(tokio::spawn(async move { service.hire_labour(&id).await }));
    }

    let mut won = 0;
    let mut taken = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => won += 1,
            Err(ServiceError::AlreadyTaken { .. }) => taken += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!((won, taken), (1, 7));
}

#[tokio::test]
async fn transition_on_unreachable_store_is_a_store_error() {
    init_tracing();
    let market = Marketplace::new(Arc::new(UnreachableStore));
    let err = market.produce.buy_produce(&RecordId::generate()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Store(_)));
}

// ── get ──────────────────────────────────────────────────────────

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let (_store, market) = memory_marketplace();
    let err = market.machines.get(&RecordId::generate()).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { kind: ListingKind::Machine, .. }));
}

#[tokio::test]
async fn created_record_roundtrips_through_the_store() {
    let (_store, market) = memory_marketplace();
    let id = market
        .machines
        .create(&json!({"name": "Rotavator", "manufactureYear": 2020, "price": 900, "description": "6 ft"}))
        .await
        .unwrap();

    let machine: Machine = market.machines.get(&id).await.unwrap();
    assert_eq!(machine.description.as_deref(), Some("6 ft"));
    assert_eq!(Listing::id(&machine), Some(&id));
    assert_eq!(machine.status(), Status::Available);
}

#[test]
fn labour_kind_is_wired_to_labours_collection() {
    assert_eq!(Labour::KIND.collection(), "labours");
}
