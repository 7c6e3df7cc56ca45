use serde::{Deserialize, Serialize};

/// The record stored under a site key: an email/username plus a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

impl Credential {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Options controlling password generation.
///
/// Each class toggle adds that class to the character pool; the exclusion
/// flags then strip easily-confused or ambiguous characters from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            lower: true,
            upper: true,
            digits: true,
            symbols: true,
            exclude_similar: false,
            exclude_ambiguous: false,
        }
    }
}
