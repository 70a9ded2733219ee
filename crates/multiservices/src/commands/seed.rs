use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::seed::seed_sample_providers;
use crate::store::DirectoryStore;

pub fn run<S: DirectoryStore>(store: &mut S) -> Result<CmdResult> {
    let count = seed_sample_providers(store)?;

    let mut result = CmdResult::default();
    if count == 0 {
        result.add_message(CmdMessage::info(
            "Provider list already exists, nothing to seed",
        ));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Added {} sample providers",
            count
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn seeds_then_reports_nothing_to_do() {
        let mut store = InMemoryStore::new();

        let first = run(&mut store).unwrap();
        assert_eq!(first.messages[0].level, MessageLevel::Success);

        let second = run(&mut store).unwrap();
        assert_eq!(second.messages[0].level, MessageLevel::Info);
        assert_eq!(store.list_providers().unwrap().len(), 3);
    }
}
