//! Input validation and normalization for clubs

use crate::config::Config;
use crate::contract::{ClubError, NewAddress, NewClub};

/// Lookup key for titles and cities: trimmed and case-folded
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalize a state code to two upper-case ASCII letters
pub fn normalize_state(state: &str) -> Result<String, ClubError> {
    let trimmed = state.trim();
    if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ClubError::validation(format!(
            "state '{}' must be a two-letter code",
            trimmed
        )));
    }
    Ok(trimmed.to_ascii_uppercase())
}

fn required(field: &str, value: &str) -> Result<String, ClubError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClubError::validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

pub fn prepare_address(address: NewAddress) -> Result<NewAddress, ClubError> {
    Ok(NewAddress {
        street: required("street", &address.street)?,
        city: required("city", &address.city)?,
        state: normalize_state(&address.state)?,
    })
}

/// Validate a club and return it with trimmed fields and a normalized state
pub fn prepare_club(club: NewClub, cfg: &Config) -> Result<NewClub, ClubError> {
    let title = required("title", &club.title)?;
    if title.chars().count() > cfg.max_title_len {
        return Err(ClubError::validation(format!(
            "title exceeds {} characters",
            cfg.max_title_len
        )));
    }

    let image = club
        .image
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty());

    Ok(NewClub {
        title,
        description: club.description.trim().to_string(),
        image,
        category: club.category,
        address: prepare_address(club.address)?,
    })
}

/// Page size for a request: default when absent, capped at the maximum
pub fn resolve_limit(limit: Option<u64>, cfg: &Config) -> Result<u64, ClubError> {
    match limit {
        None => Ok(cfg.default_page_size),
        Some(0) => Err(ClubError::validation("page size must be positive")),
        Some(n) => Ok(n.min(cfg.max_page_size)),
    }
}
