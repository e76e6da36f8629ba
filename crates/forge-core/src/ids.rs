//! Entity ID prefixes and generation.
//!
//! IDs look like `rsk-3fa9c01b`: a three-letter domain prefix, a dash, and
//! eight lowercase hex characters drawn from the OS random source.

use std::fmt::Write as _;

use crate::enums::Domain;
use crate::errors::CoreError;

pub const PREFIX_AUTOMATION: &str = "aut";
pub const PREFIX_IDEA: &str = "ida";
pub const PREFIX_RISK: &str = "rsk";
pub const PREFIX_TIMELINE: &str = "tml";
pub const PREFIX_SOLUTION: &str = "sol";

/// ID prefix for entities of the given domain.
#[must_use]
pub const fn prefix_for(domain: Domain) -> &'static str {
    match domain {
        Domain::Automation => PREFIX_AUTOMATION,
        Domain::Brainstorm => PREFIX_IDEA,
        Domain::Risk => PREFIX_RISK,
        Domain::Timeline => PREFIX_TIMELINE,
        Domain::ProblemSolving => PREFIX_SOLUTION,
    }
}

/// Generate a fresh `{prefix}-{8 hex}` ID.
///
/// # Errors
///
/// Returns `CoreError::Random` if the OS random source cannot be read.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::Random(e.to_string()))?;

    let mut id = String::with_capacity(prefix.len() + 9);
    id.push_str(prefix);
    id.push('-');
    for byte in bytes {
        let _ = write!(id, "{byte:02x}");
    }
    Ok(id)
}

/// Generate an ID that `taken` reports as unused.
///
/// # Errors
///
/// Returns `CoreError::Random` if the OS random source cannot be read.
pub fn generate_unique_id(prefix: &str, taken: impl Fn(&str) -> bool) -> Result<String, CoreError> {
    loop {
        let id = generate_id(prefix)?;
        if !taken(&id) {
            return Ok(id);
        }
    }
}
