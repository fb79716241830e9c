//! Validation of free-text command-line input.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PicnicError, Result};

/// Words of Latin letters (Basic Latin through Latin Extended-A/B), joined by
/// a single space, hyphen, apostrophe or ". ".
static CITY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z\x{0080}-\x{024F}]+(?:\. |-| |'))*[a-zA-Z\x{0080}-\x{024F}]*$")
        .expect("city name pattern is valid")
});

/// Kinds of argument that can be validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    City,
}

impl ArgumentKind {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            ArgumentKind::City => !value.is_empty() && CITY_NAME.is_match(value),
        }
    }
}

impl TryFrom<&str> for ArgumentKind {
    type Error = ();

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        match value {
            "city" => Ok(ArgumentKind::City),
            _ => Err(()),
        }
    }
}

/// Check `value` against the format rule for `argument`.
///
/// Never returns `Ok(false)`: an unsupported argument name or a value that
/// does not match fails with `InvalidArgument`.
pub fn validate(argument: &str, value: &str) -> Result<bool> {
    let valid = ArgumentKind::try_from(argument)
        .map(|kind| kind.matches(value))
        .unwrap_or(false);

    if !valid {
        let shown = if value.is_empty() { "(empty)" } else { value };
        return Err(PicnicError::InvalidArgument(format!(
            "Invalid argument or value provided for validation. [arg]: {argument} [value]: {shown}"
        )));
    }

    Ok(true)
}
