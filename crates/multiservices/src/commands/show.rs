use crate::commands::{CmdResult, RatedProvider};
use crate::error::{DirectoryError, Result};
use crate::model::RecordId;
use crate::rating::{mean_rating, RatingSummary};
use crate::store::DirectoryStore;

/// Loads one provider with its rating and every review written for it.
pub fn run<S: DirectoryStore>(store: &S, id: &RecordId) -> Result<CmdResult> {
    let provider = store
        .get_provider_by_id(id)?
        .ok_or_else(|| DirectoryError::ProviderNotFound(id.to_string()))?;

    let reviews = store.list_reviews(id)?;
    let rating = RatingSummary {
        average: mean_rating(&reviews),
        review_count: reviews.len(),
    };

    Ok(CmdResult {
        providers: vec![RatedProvider { provider, rating }],
        reviews,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ServiceCategory;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn shows_provider_with_reviews() {
        let fixture = StoreFixture::new()
            .with_rated_provider("Lia", ServiceCategory::Gardener, &[4, 5, 5])
            .with_rated_provider("Rui", ServiceCategory::Mason, &[1]);
        let id = fixture.provider_id("Lia");

        let result = run(&fixture.store, &id).unwrap();
        assert_eq!(result.providers[0].provider.name, "Lia");
        assert_eq!(result.providers[0].rating.average, 4.7);
        assert_eq!(result.reviews.len(), 3);
        assert!(result.reviews.iter().all(|r| r.provider_id == id));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let fixture = StoreFixture::new();
        match run(&fixture.store, &RecordId::from("missing")) {
            Err(DirectoryError::ProviderNotFound(id)) => assert_eq!(id, "missing"),
            other => panic!("Expected ProviderNotFound, got {:?}", other),
        }
    }
}
