//! Password strength classification.
//!
//! The heuristic looks only at length and character-class diversity. The
//! symbol set used here is a separate constant from the generation set in
//! [`crate::generator`]; the two are scored and sampled independently.

use std::fmt;

const SYMBOLS: &str = "!@#$%^&*()-_+=<>?/";

/// Strength tier of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn label(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a password by length and class diversity.
///
/// Total over all strings, including the empty one (length 0, zero
/// categories, Weak).
pub fn score(password: &str) -> Strength {
    let length = password.chars().count();

    let mut categories = 0;
    if password.chars().any(|c| c.is_lowercase()) {
        categories += 1;
    }
    if password.chars().any(|c| c.is_uppercase()) {
        categories += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        categories += 1;
    }
    if password.chars().any(|c| SYMBOLS.contains(c)) {
        categories += 1;
    }

    if length >= 12 && categories >= 3 {
        Strength::Strong
    } else if length >= 8 && categories >= 2 {
        Strength::Medium
    } else {
        Strength::Weak
    }
}
