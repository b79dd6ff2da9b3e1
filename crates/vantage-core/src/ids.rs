//! ID prefixes and generation.
//!
//! IDs are `{prefix}-{8 lowercase hex chars}` (e.g. `lst-a3f8b2c1`), drawn
//! from the OS random source. They are only unique within one local store;
//! nothing coordinates them across machines.

use std::fmt::Write;

use crate::errors::CoreError;

pub const PREFIX_LIST: &str = "lst";
pub const PREFIX_SEARCH: &str = "srch";

const MAX_ID_ATTEMPTS: usize = 16;

/// Generate a fresh prefixed ID.
///
/// # Errors
///
/// Returns [`CoreError::Other`] if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("OS random source unavailable: {e}")))?;

    let mut id = String::with_capacity(prefix.len() + 9);
    id.push_str(prefix);
    id.push('-');
    for byte in bytes {
        let _ = write!(id, "{byte:02x}");
    }
    Ok(id)
}

/// Generate a prefixed ID that `is_taken` does not already claim.
///
/// # Errors
///
/// Returns [`CoreError::Other`] if the random source fails or every attempt
/// collides.
pub fn generate_unique_id<F>(prefix: &str, is_taken: F) -> Result<String, CoreError>
where
    F: Fn(&str) -> bool,
{
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = generate_id(prefix)?;
        if !is_taken(&id) {
            return Ok(id);
        }
    }
    Err(CoreError::Other(anyhow::anyhow!(
        "no free {prefix} id after {MAX_ID_ATTEMPTS} attempts"
    )))
}
