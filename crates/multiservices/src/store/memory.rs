use super::mem_backend::MemBackend;
use super::record_store::RecordStore;

pub type InMemoryStore = RecordStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        RecordStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ClientDraft, ProviderDraft, ReviewDraft, ServiceCategory};
    use crate::store::DirectoryStore;

    pub fn provider_draft(name: &str, service: ServiceCategory) -> ProviderDraft {
        ProviderDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "(11) 98765-4321".to_string(),
            service,
            experience: "5 anos".to_string(),
            description: format!("Serviços de {}", service.label().to_lowercase()),
            location: "São Paulo - SP".to_string(),
            hourly_rate: None,
        }
    }

    pub fn client_draft(name: &str) -> ClientDraft {
        ClientDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "11912345678".to_string(),
            location: "Rio de Janeiro - RJ".to_string(),
        }
    }

    pub fn review_draft(provider_id: &str, rating: u8) -> ReviewDraft {
        ReviewDraft {
            provider_id: provider_id.into(),
            rating,
            comment: None,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_provider(mut self, name: &str, service: ServiceCategory) -> Self {
            self.store
                .save_provider(provider_draft(name, service))
                .unwrap();
            self
        }

        /// Adds a provider and one review per rating.
        pub fn with_rated_provider(
            mut self,
            name: &str,
            service: ServiceCategory,
            ratings: &[u8],
        ) -> Self {
            let provider = self
                .store
                .save_provider(provider_draft(name, service))
                .unwrap();
            for rating in ratings {
                self.store
                    .save_review(review_draft(provider.id.as_str(), *rating))
                    .unwrap();
            }
            self
        }

        pub fn with_client(mut self, name: &str) -> Self {
            self.store.save_client(client_draft(name)).unwrap();
            self
        }

        /// Id of the first provider with the given name.
        pub fn provider_id(&self, name: &str) -> crate::model::RecordId {
            self.store
                .list_providers()
                .unwrap()
                .into_iter()
                .find(|p| p.name == name)
                .map(|p| p.id)
                .unwrap()
        }
    }
}
