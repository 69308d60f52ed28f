use crate::Family;
use thiserror::Error as ThisError;

/// An error caused by parsing or converting an address.
#[derive(Debug, ThisError, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Could not parse {input:?} as {}", describe(.attempted))]
    ParseFailure {
        input: String,
        /// The grammars that were tried, in order.
        attempted: &'static [Family],
    },
    #[error("Expected an {expected} address but got {actual}")]
    TypeMismatch { expected: Family, actual: Family },
}

impl AddressError {
    pub(crate) fn parse_failure(input: &str, attempted: &'static [Family]) -> Self {
        Self::ParseFailure {
            input: input.to_owned(),
            attempted,
        }
    }

    /// Returns `true` if the error came from the textual parsers.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::ParseFailure { .. })
    }

    /// Returns `true` if the error came from extracting the wrong family.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}

/// Moves the outcome of a fallible operation into an error slot, leaving
/// `T::default()` in its place on failure.
pub(crate) fn report<T: Default>(result: Result<T, AddressError>, slot: &mut Option<AddressError>) -> T {
    match result {
        Ok(value) => {
            *slot = None;
            value
        }
        Err(e) => {
            *slot = Some(e);
            T::default()
        }
    }
}

/// The inverse of [`report`].
pub(crate) fn raise<T>(value: T, slot: Option<AddressError>) -> Result<T, AddressError> {
    match slot {
        Some(e) => Err(e),
        None => Ok(value),
    }
}

/// Renders a list of families as `IPv6 or IPv4`.
fn describe(families: &[Family]) -> String {
    if families.is_empty() {
        return "an address".to_owned();
    }
    families
        .iter()
        .map(Family::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = AddressError::parse_failure("nope", &[Family::V4]);
        assert_eq!(err.to_string(), "Could not parse \"nope\" as IPv4");
        assert!(err.is_parse_failure());

        let err = AddressError::parse_failure("nope", &[]);
        assert_eq!(err.to_string(), "Could not parse \"nope\" as an address");

        let err = AddressError::TypeMismatch {
            expected: Family::V4,
            actual: Family::V4,
        };
        assert_eq!(err.to_string(), "Expected an IPv4 address but got IPv4");
        assert!(err.is_type_mismatch());
    }

    #[cfg(feature = "ipv6")]
    #[test]
    fn both_families_listed() {
        let err = AddressError::parse_failure("x", Family::ALL);
        assert_eq!(err.to_string(), "Could not parse \"x\" as IPv6 or IPv4");
    }
}
