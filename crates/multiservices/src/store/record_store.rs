use super::backend::StorageBackend;
use super::codec;
use super::{Collection, CorruptionPolicy, DirectoryStore};
use crate::error::{DirectoryError, Result};
use crate::ids::{Clock, IdGenerator, SystemClock, UuidIds};
use crate::model::{Client, ClientDraft, Provider, ProviderDraft, RecordId, Review, ReviewDraft};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    policy: CorruptionPolicy,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            ids: Box::new(UuidIds),
            clock: Box::new(SystemClock),
            policy: CorruptionPolicy::default(),
        }
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_corruption_policy(mut self, policy: CorruptionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn corruption_policy(&self) -> CorruptionPolicy {
        self.policy
    }

    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let bytes = match self.backend.read(collection.key()) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => return self.recover(collection, e),
        };

        match codec::decode(&bytes) {
            Ok(decoded) => Ok(decoded.records),
            Err(e) => self.recover(
                collection,
                DirectoryError::CorruptState {
                    collection,
                    reason: e.to_string(),
                },
            ),
        }
    }

    fn recover<T>(&self, collection: Collection, err: DirectoryError) -> Result<Vec<T>> {
        match self.policy {
            CorruptionPolicy::Empty => {
                warn!(%collection, error = %err, "unreadable collection, treating as empty");
                Ok(Vec::new())
            }
            CorruptionPolicy::Error => Err(err),
        }
    }

    /// Full read-modify-write of one collection.
    fn append<T>(&mut self, collection: Collection, id: &RecordId, record: T) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        let mut records: Vec<T> = self.load(collection)?;
        records.push(record.clone());

        let bytes = codec::encode(&records)?;
        self.backend.write(collection.key(), &bytes)?;

        debug!(%collection, %id, count = records.len(), "saved record");
        Ok(record)
    }
}

impl<B: StorageBackend> DirectoryStore for RecordStore<B> {
    fn collection_exists(&self, collection: Collection) -> Result<bool> {
        Ok(self.backend.read(collection.key())?.is_some())
    }

    fn list_providers(&self) -> Result<Vec<Provider>> {
        self.load(Collection::Providers)
    }

    fn save_provider(&mut self, draft: ProviderDraft) -> Result<Provider> {
        let id = self.ids.next_id();
        let provider = Provider::new(id.clone(), draft);
        self.append(Collection::Providers, &id, provider)
    }

    fn get_provider_by_id(&self, id: &RecordId) -> Result<Option<Provider>> {
        Ok(self
            .list_providers()?
            .into_iter()
            .find(|provider| &provider.id == id))
    }

    fn list_clients(&self) -> Result<Vec<Client>> {
        self.load(Collection::Clients)
    }

    fn save_client(&mut self, draft: ClientDraft) -> Result<Client> {
        let id = self.ids.next_id();
        let client = Client::new(id.clone(), draft);
        self.append(Collection::Clients, &id, client)
    }

    fn list_reviews(&self, provider_id: &RecordId) -> Result<Vec<Review>> {
        let reviews: Vec<Review> = self.load(Collection::Reviews)?;
        Ok(reviews
            .into_iter()
            .filter(|review| &review.provider_id == provider_id)
            .collect())
    }

    fn save_review(&mut self, draft: ReviewDraft) -> Result<Review> {
        let id = self.ids.next_id();
        let review = Review::new(id.clone(), self.clock.now(), draft);
        self.append(Collection::Reviews, &id, review)
    }
}
