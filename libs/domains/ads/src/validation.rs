//! Field validation for ad operations.
//!
//! Services call these in a fixed order (author, then title, then text) and
//! stop at the first failure. Lengths are counted in characters, not bytes.

use crate::error::{AdError, AdResult};

pub const TITLE_MAX_CHARS: usize = 100;
pub const TEXT_MAX_CHARS: usize = 500;

/// A title must be 1-100 characters.
pub fn validate_title(title: &str) -> AdResult<()> {
    let len = title.chars().count();
    if len == 0 || len > TITLE_MAX_CHARS {
        return Err(AdError::BadTitle);
    }
    Ok(())
}

/// A text body must be 1-500 characters.
pub fn validate_text(text: &str) -> AdResult<()> {
    let len = text.chars().count();
    if len == 0 || len > TEXT_MAX_CHARS {
        return Err(AdError::BadText);
    }
    Ok(())
}

/// Only the owning author may act on an ad.
pub fn validate_author_id(owner: i64, caller: i64) -> AdResult<()> {
    if owner != caller {
        return Err(AdError::BadAuthorId { owner, caller });
    }
    Ok(())
}
