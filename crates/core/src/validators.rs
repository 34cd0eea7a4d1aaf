//! Reusable constraint checks.
//!
//! Each returns `Err(Violation)` describing the broken constraint; callers attach
//! the field location via [`crate::Checker`].

use url::Url;

use crate::error::{ErrorKind, Violation};

/// Longest URL accepted by [`http_url`].
pub const URL_MAX_LENGTH: usize = 2083;

/// `value > bound`.
pub fn greater_than(value: f64, bound: f64) -> Result<(), Violation> {
    if value > bound {
        Ok(())
    } else {
        Err(Violation::new(
            ErrorKind::GreaterThan,
            format!("input should be greater than {bound}"),
        ))
    }
}

/// String length in characters (not bytes) is at most `max`.
pub fn max_chars(value: &str, max: usize) -> Result<(), Violation> {
    if value.chars().count() <= max {
        Ok(())
    } else {
        Err(Violation::new(
            ErrorKind::StringTooLong,
            format!("string should have at most {max} characters"),
        ))
    }
}

/// Same as [`max_chars`], passing when the value is absent.
pub fn max_chars_opt(value: Option<&str>, max: usize) -> Result<(), Violation> {
    value.map_or(Ok(()), |v| max_chars(v, max))
}

/// A list holds at most `max` entries.
pub fn max_items(len: usize, max: usize) -> Result<(), Violation> {
    if len <= max {
        Ok(())
    } else {
        Err(Violation::new(
            ErrorKind::TooManyItems,
            format!("list should have at most {max} items, not {len}"),
        ))
    }
}

/// Absolute `http`/`https` URL with a host.
pub fn http_url(value: &str) -> Result<(), Violation> {
    if value.len() > URL_MAX_LENGTH {
        return Err(Violation::new(
            ErrorKind::InvalidUrl,
            format!("URL should have at most {URL_MAX_LENGTH} characters"),
        ));
    }

    let url = Url::parse(value)
        .map_err(|e| Violation::new(ErrorKind::InvalidUrl, format!("input should be a valid URL, {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Violation::new(
            ErrorKind::InvalidUrl,
            "URL scheme should be 'http' or 'https'",
        ));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(Violation::new(ErrorKind::InvalidUrl, "URL should have a host"));
    }

    Ok(())
}
