use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CredentialStore;

pub fn run<S: CredentialStore>(store: &S) -> Result<CmdResult> {
    let entries = store.list()?;
    Ok(CmdResult::default().with_entries(entries))
}
