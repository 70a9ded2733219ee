use crate::commands::{CmdMessage, CmdResult, RatedProvider};
use crate::error::{DirectoryError, Result};
use crate::rating::rating_summary;
use crate::store::DirectoryStore;
use crate::validation::ReviewForm;

/// Validates and stores a review.
///
/// The provider is looked up before anything is written, so a failing lookup
/// leaves the reviews untouched. A review for an unknown provider id is still
/// stored (references are not enforced); the result carries a warning
/// instead of the provider.
pub fn run<S: DirectoryStore>(store: &mut S, form: &ReviewForm) -> Result<CmdResult> {
    let draft = form.validate().map_err(DirectoryError::Validation)?;
    let provider = store.get_provider_by_id(&draft.provider_id)?;
    let review = store.save_review(draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Review saved: {} star(s) for {}",
        review.rating, review.provider_id
    )));

    match provider {
        Some(provider) => match rating_summary(store, &provider.id) {
            Ok(rating) => result.providers.push(RatedProvider { provider, rating }),
            Err(e) => result.add_message(CmdMessage::warning(format!(
                "Could not refresh the rating of {}: {}",
                provider.name, e
            ))),
        },
        None => result.add_message(CmdMessage::warning(format!(
            "No provider with id {} is registered",
            review.provider_id
        ))),
    }

    result.reviews.push(review);
    Ok(result)
}
