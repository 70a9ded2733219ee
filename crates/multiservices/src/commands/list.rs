use crate::commands::{CmdResult, RatedProvider};
use crate::error::Result;
use crate::rating::rating_summary;
use crate::search::{ProviderFilter, ProviderSort};
use crate::store::DirectoryStore;

/// Lists the providers matching `filter`, each with its rating, in `sort`
/// order.
pub fn providers<S: DirectoryStore>(
    store: &S,
    filter: &ProviderFilter,
    sort: ProviderSort,
) -> Result<CmdResult> {
    let matching = filter.apply(store.list_providers()?);

    let mut rated = Vec::with_capacity(matching.len());
    for provider in matching {
        let rating = rating_summary(store, &provider.id)?;
        rated.push(RatedProvider { provider, rating });
    }
    sort.apply(&mut rated, |r| r.provider.name.as_str(), |r| r.rating.average);

    Ok(CmdResult::default().with_providers(rated))
}

pub fn clients<S: DirectoryStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult {
        clients: store.list_clients()?,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ServiceCategory;
    use crate::store::memory::fixtures::StoreFixture;

    fn fixture() -> StoreFixture {
        StoreFixture::new()
            .with_rated_provider("Carlos", ServiceCategory::Painter, &[3])
            .with_rated_provider("ana", ServiceCategory::Plumber, &[5, 4])
            .with_provider("Bruno", ServiceCategory::Painter)
    }

    fn names(result: &CmdResult) -> Vec<&str> {
        result
            .providers
            .iter()
            .map(|r| r.provider.name.as_str())
            .collect()
    }

    #[test]
    fn lists_in_registration_order_by_default() {
        let fixture = fixture();
        let result =
            providers(&fixture.store, &ProviderFilter::new(), ProviderSort::default()).unwrap();
        assert_eq!(names(&result), vec!["Carlos", "ana", "Bruno"]);
        assert_eq!(result.providers[1].rating.average, 4.5);
        assert_eq!(result.providers[2].rating.review_count, 0);
    }

    #[test]
    fn sorts_by_rating_and_name() {
        let fixture = fixture();
        let by_rating =
            providers(&fixture.store, &ProviderFilter::new(), ProviderSort::Rating).unwrap();
        assert_eq!(names(&by_rating), vec!["ana", "Carlos", "Bruno"]);

        let by_name =
            providers(&fixture.store, &ProviderFilter::new(), ProviderSort::Name).unwrap();
        assert_eq!(names(&by_name), vec!["ana", "Bruno", "Carlos"]);
    }

    #[test]
    fn filters_by_service() {
        let fixture = fixture();
        let filter = ProviderFilter::new().service(ServiceCategory::Painter);
        let result = providers(&fixture.store, &filter, ProviderSort::Registered).unwrap();
        assert_eq!(names(&result), vec!["Carlos", "Bruno"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let fixture = fixture();
        let filter = ProviderFilter::new().term("nobody here");
        let result = providers(&fixture.store, &filter, ProviderSort::Registered).unwrap();
        assert!(result.providers.is_empty());
    }

    #[test]
    fn lists_clients() {
        let fixture = StoreFixture::new().with_client("Bea").with_client("Caio");
        let result = clients(&fixture.store).unwrap();
        let names: Vec<_> = result.clients.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bea", "Caio"]);
    }
}
