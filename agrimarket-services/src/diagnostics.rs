//! Store connectivity check: document count per listing collection.

use agrimarket_model::ListingKind;
use agrimarket_store::RecordStore;
use serde::Serialize;
use tracing::{debug, warn};

/// Count for one collection, or the error text if it could not be read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCount {
    pub collection: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Counts every listing collection. One failing collection does not stop
/// the others from being counted.
pub async fn collection_counts(store: &dyn RecordStore) -> Vec<CollectionCount> {
    let mut counts = Vec::with_capacity(ListingKind::ALL.len());
    for kind in ListingKind::ALL {
        let collection = kind.collection();
        match store.count(collection).await {
            Ok(n) => {
                debug!("{}: {} documents", collection, n);
                counts.push(CollectionCount {
                    collection,
                    documents: Some(n),
                    error: None,
                });
            }
            Err(e) => {
                warn!("{}: count failed: {}", collection, e);
                counts.push(CollectionCount {
                    collection,
                    documents: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }
    counts
}
