use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CredentialStore;

pub fn run<S: CredentialStore>(store: &mut S, site: &str) -> Result<CmdResult> {
    store.delete(site)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Credentials for {} deleted",
        site
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::save;
    use crate::error::PassKeepError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn deletes_an_existing_entry() {
        let mut store = InMemoryStore::new();
        save::run(&mut store, "site.com", "u@x.com", "pw").unwrap();

        run(&mut store, "site.com").unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn missing_site_is_not_found_and_store_is_untouched() {
        let mut store = InMemoryStore::new();
        save::run(&mut store, "site.com", "u@x.com", "pw").unwrap();

        assert!(matches!(
            run(&mut store, "other.com"),
            Err(PassKeepError::NotFound(_))
        ));
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
