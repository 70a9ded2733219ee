//! Provider search and ordering for the listing.

use crate::model::{Provider, ServiceCategory};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Conditions a provider must meet to be listed.
///
/// `term` is matched case-insensitively against name, service label, location
/// and description; a blank term matches everything. `service` must match
/// exactly when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderFilter {
    pub term: Option<String>,
    pub service: Option<ServiceCategory>,
}

impl ProviderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn service(mut self, service: ServiceCategory) -> Self {
        self.service = Some(service);
        self
    }

    pub fn matches(&self, provider: &Provider) -> bool {
        if let Some(service) = self.service {
            if provider.service != service {
                return false;
            }
        }

        let Some(term) = self.term.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
            return true;
        };
        let needle = term.to_lowercase();
        [
            provider.name.as_str(),
            provider.service.label(),
            provider.location.as_str(),
            provider.description.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply(&self, providers: Vec<Provider>) -> Vec<Provider> {
        providers.into_iter().filter(|p| self.matches(p)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderSort {
    /// Registration (insertion) order.
    #[default]
    Registered,
    /// Highest average rating first; ties keep registration order.
    Rating,
    /// Alphabetical by name, ignoring case.
    Name,
}

impl FromStr for ProviderSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "registered" => Ok(ProviderSort::Registered),
            "rating" => Ok(ProviderSort::Rating),
            "name" => Ok(ProviderSort::Name),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

impl ProviderSort {
    /// Orders `items` in place, reading each item's name and average rating
    /// through the accessors. The sort is stable.
    pub fn apply<T>(
        &self,
        items: &mut [T],
        name: impl Fn(&T) -> &str,
        rating: impl Fn(&T) -> f64,
    ) {
        match self {
            ProviderSort::Registered => {}
            ProviderSort::Rating => items.sort_by(|a, b| {
                rating(b)
                    .partial_cmp(&rating(a))
                    .unwrap_or(Ordering::Equal)
            }),
            ProviderSort::Name => {
                items.sort_by_key(|item| name(item).to_lowercase());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;
    use crate::store::memory::fixtures::provider_draft;

    fn provider(name: &str, service: ServiceCategory, location: &str) -> Provider {
        let mut draft = provider_draft(name, service);
        draft.location = location.to_string();
        Provider::new(RecordId::new(name), draft)
    }

    fn sample() -> Vec<Provider> {
        vec![
            provider("Carlos Silva", ServiceCategory::Painter, "São Paulo - SP"),
            provider("Maria Santos", ServiceCategory::Plumber, "Campinas - SP"),
            provider(
                "João Pereira",
                ServiceCategory::AirConditioningInstaller,
                "Rio de Janeiro - RJ",
            ),
        ]
    }

    fn names(providers: &[Provider]) -> Vec<&str> {
        providers.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        assert_eq!(ProviderFilter::new().apply(sample()).len(), 3);
        assert_eq!(ProviderFilter::new().term("   ").apply(sample()).len(), 3);
    }

    #[test]
    fn term_matches_name_case_insensitively() {
        let found = ProviderFilter::new().term("maria").apply(sample());
        assert_eq!(names(&found), vec!["Maria Santos"]);
    }

    #[test]
    fn term_matches_service_and_location() {
        let found = ProviderFilter::new().term("encanador").apply(sample());
        assert_eq!(names(&found), vec!["Maria Santos"]);

        let found = ProviderFilter::new().term("- sp").apply(sample());
        assert_eq!(names(&found), vec!["Carlos Silva", "Maria Santos"]);
    }

    #[test]
    fn term_matches_description() {
        let mut providers = sample();
        providers[2].description = "Manutenção de split e janela".to_string();
        let found = ProviderFilter::new().term("SPLIT").apply(providers);
        assert_eq!(names(&found), vec!["João Pereira"]);
    }

    #[test]
    fn service_filter_is_exact_and_combines_with_term() {
        let found = ProviderFilter::new()
            .service(ServiceCategory::Painter)
            .apply(sample());
        assert_eq!(names(&found), vec!["Carlos Silva"]);

        let found = ProviderFilter::new()
            .service(ServiceCategory::Painter)
            .term("campinas")
            .apply(sample());
        assert!(found.is_empty());
    }

    #[test]
    fn sorting() {
        let mut rated = vec![("b", 3.0), ("A", 4.5), ("c", 4.5), ("d", 0.0)];
        ProviderSort::Rating.apply(&mut rated, |r| r.0, |r| r.1);
        assert_eq!(
            rated.iter().map(|r| r.0).collect::<Vec<_>>(),
            vec!["A", "c", "b", "d"]
        );

        ProviderSort::Name.apply(&mut rated, |r| r.0, |r| r.1);
        assert_eq!(
            rated.iter().map(|r| r.0).collect::<Vec<_>>(),
            vec!["A", "b", "c", "d"]
        );

        assert_eq!("RATING".parse(), Ok(ProviderSort::Rating));
        assert!("stars".parse::<ProviderSort>().is_err());
    }
}
