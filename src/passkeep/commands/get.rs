use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CredentialStore;

pub fn run<S: CredentialStore>(store: &S, site: &str) -> Result<CmdResult> {
    let credential = store.get(site)?;
    Ok(CmdResult::default().with_entries(vec![(site.to_string(), credential)]))
}
