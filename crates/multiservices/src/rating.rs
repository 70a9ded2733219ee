//! Average ratings derived from the review collection.
//!
//! Nothing is cached: every call re-reads the provider's reviews from the
//! store, so a rating always reflects the latest saved review.

use crate::error::Result;
use crate::model::{RecordId, Review};
use crate::store::DirectoryStore;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub average: f64,
    pub review_count: usize,
}

/// Mean of the ratings rounded to one decimal place, or 0 without reviews.
pub fn mean_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let mean = f64::from(total) / reviews.len() as f64;
    (mean * 10.0).round() / 10.0
}

pub fn average_rating<S: DirectoryStore>(store: &S, provider_id: &RecordId) -> Result<f64> {
    Ok(mean_rating(&store.list_reviews(provider_id)?))
}

pub fn rating_summary<S: DirectoryStore>(store: &S, provider_id: &RecordId) -> Result<RatingSummary> {
    let reviews = store.list_reviews(provider_id)?;
    Ok(RatingSummary {
        average: mean_rating(&reviews),
        review_count: reviews.len(),
    })
}
