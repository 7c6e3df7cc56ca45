use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PassKeepError, Result};
use crate::model::Credential;
use crate::store::CredentialStore;

/// Save (or overwrite) the credential for a site.
///
/// All three fields must be non-empty after trimming; nothing is written
/// otherwise. Saving to an existing site replaces its record, so this is
/// also the update operation.
pub fn run<S: CredentialStore>(
    store: &mut S,
    site: &str,
    email: &str,
    password: &str,
) -> Result<CmdResult> {
    let site = site.trim();
    let email = email.trim();
    let password = password.trim();

    if site.is_empty() || email.is_empty() || password.is_empty() {
        return Err(PassKeepError::IncompleteCredential);
    }

    let credential = Credential::new(email, password);
    store.put(site, &credential)?;

    let mut result =
        CmdResult::default().with_entries(vec![(site.to_string(), credential)]);
    result.add_message(CmdMessage::success(format!(
        "Credentials for {} saved",
        site
    )));
    Ok(result)
}
