//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod movies;
pub mod state;
pub mod users;

pub use crate::domain::ApiResult;

/// Parse a path segment into a resource identifier.
///
/// Identifiers are positive integers. Anything else — non-numeric text,
/// zero, negatives, overflow — is a lookup that cannot match any stored row,
/// so callers translate `None` straight into a not-found outcome instead of
/// rejecting the request shape.
pub(crate) fn parse_resource_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::parse_resource_id;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(1))]
    #[case("5000", Some(5000))]
    #[case("0", None)]
    #[case("-3", None)]
    #[case("abc", None)]
    #[case("1.5", None)]
    #[case("", None)]
    #[case("99999999999999999999", None)]
    fn ids_parse_leniently(#[case] raw: &str, #[case] expected: Option<i32>) {
        assert_eq!(parse_resource_id(raw), expected);
    }
}
