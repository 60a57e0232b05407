//! Shared test helpers for service tests.

#![allow(dead_code)]

use std::sync::Arc;

use agrimarket_model::{ExperienceEntry, Labour, Listing};
use agrimarket_services::Marketplace;
use agrimarket_store::{
    Document, FieldEquals, MemoryStore, Query, RecordStore, StoreError, StoreResult,
};
use agrimarket_types::{RecordId, Timestamp};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Routes service logs to the test harness output. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// A store whose every call fails as if the backend were unreachable.
pub struct UnreachableStore;

fn unreachable() -> StoreError {
    StoreError::Backend("connection refused".into())
}

#[async_trait]
impl RecordStore for UnreachableStore {
    fn backend_name(&self) -> &'static str {
        "unreachable"
    }

    async fn insert(&self, _: &str, _: Map<String, Value>) -> StoreResult<RecordId> {
        Err(unreachable())
    }

    async fn query(&self, _: &str, _: &Query) -> StoreResult<Vec<Document>> {
        Err(unreachable())
    }

    async fn get(&self, _: &str, _: &RecordId) -> StoreResult<Option<Document>> {
        Err(unreachable())
    }

    async fn update(&self, _: &str, _: &RecordId, _: Map<String, Value>) -> StoreResult<()> {
        Err(unreachable())
    }

    async fn update_if(
        &self,
        _: &str,
        _: &RecordId,
        _: &FieldEquals,
        _: Map<String, Value>,
    ) -> StoreResult<()> {
        Err(unreachable())
    }
}

pub fn memory_marketplace() -> (Arc<MemoryStore>, Marketplace) {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    let market = Marketplace::new(store.clone());
    (store, market)
}

pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

/// An available labour record with the given experience durations.
pub fn labour(name: &str, wages: f64, durations: &[u32]) -> Labour {
    let mut labour = Labour::from_input(&Map::new(), Timestamp::from_millis(0));
    labour.name = name.to_string();
    labour.wages = wages;
    labour.experience = durations
        .iter()
        .map(|&duration| ExperienceEntry {
            crop: "Rice".into(),
            duration,
            farm_size: 1.0,
            employer: String::new(),
        })
        .collect();
    labour
}

pub fn names(labours: &[Labour]) -> Vec<&str> {
    labours.iter().map(|l| l.name.as_str()).collect()
}
