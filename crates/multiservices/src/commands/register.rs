use crate::commands::{CmdMessage, CmdResult, RatedProvider};
use crate::error::{DirectoryError, Result};
use crate::rating::RatingSummary;
use crate::store::DirectoryStore;
use crate::validation::{ClientForm, ProviderForm};

pub fn provider<S: DirectoryStore>(store: &mut S, form: &ProviderForm) -> Result<CmdResult> {
    let draft = form.validate().map_err(DirectoryError::Validation)?;
    let provider = store.save_provider(draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Provider registered: {} ({})",
        provider.name, provider.id
    )));
    // Nobody has reviewed a brand new provider yet.
    result.providers.push(RatedProvider {
        provider,
        rating: RatingSummary {
            average: 0.0,
            review_count: 0,
        },
    });
    Ok(result)
}

pub fn client<S: DirectoryStore>(store: &mut S, form: &ClientForm) -> Result<CmdResult> {
    let draft = form.validate().map_err(DirectoryError::Validation)?;
    let client = store.save_client(draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Client registered: {} ({})",
        client.name, client.id
    )));
    result.clients.push(client);
    Ok(result)
}
