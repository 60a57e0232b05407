use std::marker::PhantomData;
use std::sync::Arc;

use agrimarket_model::{Labour, Listing, Machine, Produce, Status};
use agrimarket_store::{FieldEquals, Query, RecordStore};
use agrimarket_types::{RecordId, Timestamp};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{ServiceError, ServiceResult};
use crate::filter::LabourFilter;

const STATUS_FIELD: &str = "status";

/// Create / list / transition for one listing kind.
///
/// The service is the only path between the presentation layer and the
/// store for its kind: it owns type coercion on the way in, normalization
/// on the way out, and the status transition.
pub struct EntityService<L: Listing> {
    store: Arc<dyn RecordStore>,
    _kind: PhantomData<fn() -> L>,
}

impl<L: Listing> Clone for EntityService<L> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _kind: PhantomData,
        }
    }
}

pub type LabourService = EntityService<Labour>;
pub type MachineService = EntityService<Machine>;
pub type ProduceService = EntityService<Produce>;

impl<L: Listing> EntityService<L> {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            _kind: PhantomData,
        }
    }

    /// Normalizes `input` and writes it as a new `available` listing.
    ///
    /// `input` is raw form data; numeric strings are coerced here and
    /// callers must not pre-coerce. Returns the store-assigned id.
    pub async fn create(&self, input: &Value) -> ServiceResult<RecordId> {
        let kind = L::KIND;
        let Some(fields) = input.as_object() else {
            return Err(ServiceError::InvalidInput(format!(
                "{kind} input must be a JSON object"
            )));
        };

        let record = L::from_input(fields, Timestamp::now());
        let fields = record.to_fields()?;
        debug!("Adding {} to {}: {:?}", kind, kind.collection(), record);

        match self.store.insert(kind.collection(), fields).await {
            Ok(id) => {
                info!("Added {} {}", kind, id);
                Ok(id)
            }
            Err(e) => {
                warn!("Failed to add {}: {}", kind, e);
                Err(ServiceError::from_store(kind, e))
            }
        }
    }

    /// Available listings, newest first, as a `Result`.
    pub async fn try_list(&self) -> ServiceResult<Vec<L>> {
        let kind = L::KIND;
        let query = Query::all()
            .where_eq(STATUS_FIELD, Status::Available.as_str())
            .newest_first();

        let docs = self
            .store
            .query(kind.collection(), &query)
            .await
            .map_err(|e| ServiceError::from_store(kind, e))?;

        debug!("Fetched {} available {} listings", docs.len(), kind);
        Ok(docs
            .into_iter()
            .map(|doc| L::from_document(doc.id, &doc.fields))
            .collect())
    }

    /// Available listings, newest first.
    ///
    /// A store failure is logged and yields an empty list, so an empty
    /// result can mean either "nothing listed" or "store unreachable". Use
    /// [`try_list`](Self::try_list) to tell them apart.
    pub async fn list(&self) -> Vec<L> {
        match self.try_list().await {
            Ok(records) => records,
            Err(e) => {
                warn!("Error listing {} from {}: {}", L::KIND, self.store.backend_name(), e);
                Vec::new()
            }
        }
    }

    /// One listing by id, whatever its status.
    pub async fn get(&self, id: &RecordId) -> ServiceResult<L> {
        let kind = L::KIND;
        match self.store.get(kind.collection(), id).await {
            Ok(Some(doc)) => Ok(L::from_document(doc.id, &doc.fields)),
            Ok(None) => Err(ServiceError::NotFound {
                kind,
                id: id.to_string(),
            }),
            Err(e) => Err(ServiceError::from_store(kind, e)),
        }
    }

    /// Moves one listing from `available` to the kind's busy status.
    ///
    /// The write is conditional on the stored status still being
    /// `available`; when several callers race for the same listing exactly
    /// one succeeds and the rest get [`ServiceError::AlreadyTaken`].
    pub async fn transition(&self, id: &RecordId) -> ServiceResult<()> {
        let kind = L::KIND;
        let precondition = FieldEquals::new(STATUS_FIELD, Status::Available.as_str());
        let patch = L::transition_patch(Timestamp::now());

        match self
            .store
            .update_if(kind.collection(), id, &precondition, patch)
            .await
        {
            Ok(()) => {
                info!("{} {} is now {}", kind, id, kind.busy_status());
                Ok(())
            }
            Err(e) => {
                warn!("Failed to {} {} {}: {}", kind.transition_verb(), kind, id, e);
                Err(ServiceError::from_store(kind, e))
            }
        }
    }
}

impl EntityService<Labour> {
    /// Available labour narrowed by `filter`, newest first, as a `Result`.
    pub async fn try_list_filtered(&self, filter: &LabourFilter) -> ServiceResult<Vec<Labour>> {
        let labours = self.try_list().await?;
        let total = labours.len();
        let matched = filter.apply(labours);
        debug!("Labour filter kept {} of {} ({:?})", matched.len(), total, filter);
        Ok(matched)
    }

    /// Available labour narrowed by `filter`, newest first.
    ///
    /// Same failure behaviour as [`list`](Self::list).
    pub async fn list_filtered(&self, filter: &LabourFilter) -> Vec<Labour> {
        match self.try_list_filtered(filter).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Error listing filtered labour from {}: {}", self.store.backend_name(), e);
                Vec::new()
            }
        }
    }

    pub async fn hire_labour(&self, id: &RecordId) -> ServiceResult<()> {
        self.transition(id).await
    }
}

impl EntityService<Machine> {
    pub async fn rent_machine(&self, id: &RecordId) -> ServiceResult<()> {
        self.transition(id).await
    }
}

impl EntityService<Produce> {
    pub async fn buy_produce(&self, id: &RecordId) -> ServiceResult<()> {
        self.transition(id).await
    }
}

/// The three entity services over one shared store.
#[derive(Clone)]
pub struct Marketplace {
    store: Arc<dyn RecordStore>,
    pub labour: LabourService,
    pub machines: MachineService,
    pub produce: ProduceService,
}

impl Marketplace {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            labour: EntityService::new(Arc::clone(&store)),
            machines: EntityService::new(Arc::clone(&store)),
            produce: EntityService::new(Arc::clone(&store)),
            store,
        }
    }

    /// The store backing every service.
    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }
}
