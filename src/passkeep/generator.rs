//! Character pool construction and password sampling.
//!
//! The pool is built by appending whole character classes in a fixed order
//! (lower, upper, digits, symbols) and then stripping excluded characters.
//! Sampling draws uniformly from the pool with replacement, so repeated
//! characters are expected and valid.

use crate::error::{PassKeepError, Result};
use crate::model::GenerationOptions;
use rand::Rng;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_+=<>?/";

/// Characters easy to misread for one another (capital i, lowercase L, ...).
pub const SIMILAR_CHARS: &str = "Il1O0";

/// Punctuation that tends to break shells, URLs and manual entry.
pub const AMBIGUOUS_CHARS: &str = "{}[]()/\\\"'`~,;:.<>";

/// Assemble the character pool for the given options.
///
/// Fails with [`PassKeepError::NoCharacterClassSelected`] when no class is
/// enabled or the exclusion filters empty the pool out.
pub fn build_pool(options: &GenerationOptions) -> Result<Vec<char>> {
    let mut pool = String::new();
    if options.lower {
        pool.push_str(LOWERCASE);
    }
    if options.upper {
        pool.push_str(UPPERCASE);
    }
    if options.digits {
        pool.push_str(DIGITS);
    }
    if options.symbols {
        pool.push_str(SYMBOLS);
    }

    if options.exclude_similar {
        pool.retain(|c| !SIMILAR_CHARS.contains(c));
    }
    if options.exclude_ambiguous {
        pool.retain(|c| !AMBIGUOUS_CHARS.contains(c));
    }

    if pool.is_empty() {
        return Err(PassKeepError::NoCharacterClassSelected);
    }
    Ok(pool.chars().collect())
}

/// Draw `length` characters uniformly from `pool`, with replacement.
///
/// The pool is validated again here even though [`build_pool`] never returns
/// an empty one, so the function stands on its own.
pub fn generate(pool: &[char], length: usize) -> Result<String> {
    if length == 0 {
        return Err(PassKeepError::InvalidLength);
    }
    if pool.is_empty() {
        return Err(PassKeepError::NoCharacterClassSelected);
    }

    let mut rng = rand::thread_rng();
    Ok((0..length).map(|_| pool[rng.gen_range(0..pool.len())]).collect())
}

/// Build the pool and sample a password in one step.
pub fn generate_password(options: &GenerationOptions) -> Result<String> {
    let pool = build_pool(options)?;
    generate(&pool, options.length)
}
