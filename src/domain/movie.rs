//! Movie resource and its payload validator.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::validation::{
    FieldViolation, require_boolean_like, require_bounded_string, require_integer, require_string,
};

/// A stored movie, addressable by its store-assigned identifier.
///
/// ## Invariants
/// - `id` is positive, assigned by the store on insert, and never changes.
/// - No field is nullable; `year` is kept as a string on purpose (clients
///   submit `"1977"`, not `1977`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    /// Store-assigned primary key.
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Star Wars")]
    pub title: String,
    #[schema(example = "George Lucas")]
    pub director: String,
    #[schema(example = "1977")]
    pub year: String,
    /// Whether the film is in colour.
    pub color: bool,
    /// Running time in minutes.
    #[schema(example = 120)]
    pub duration: i32,
}

impl Movie {
    /// Attach a store-assigned identifier to a validated draft.
    pub fn from_draft(id: i32, draft: MovieDraft) -> Self {
        let MovieDraft {
            title,
            director,
            year,
            color,
            duration,
        } = draft;
        Self {
            id,
            title,
            director,
            year,
            color,
            duration,
        }
    }
}

/// A validated create/update payload, not yet persisted.
///
/// Drafts only exist as the output of [`MovieDraft::from_payload`], so any
/// value of this type has passed every movie validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDraft {
    pub title: String,
    pub director: String,
    pub year: String,
    pub color: bool,
    pub duration: i32,
}

impl MovieDraft {
    /// Validate a raw JSON payload into a draft.
    ///
    /// Pure function of the payload: the full ordered violation list is
    /// returned on failure, and a non-object payload is treated as an object
    /// with every field absent. Unknown extra fields are ignored.
    pub fn from_payload(payload: &Value) -> Result<Self, Vec<FieldViolation>> {
        let empty = Map::new();
        let fields = payload.as_object().unwrap_or(&empty);
        let mut violations = Vec::new();

        let title = require_bounded_string(fields, "title", &mut violations);
        let director = require_bounded_string(fields, "director", &mut violations);
        let year = require_string(fields, "year", &mut violations);
        let color = require_boolean_like(fields, "color", &mut violations);
        let duration = require_integer(fields, "duration", &mut violations);

        match (title, director, year, color, duration) {
            (Some(title), Some(director), Some(year), Some(color), Some(duration))
                if violations.is_empty() =>
            {
                Ok(Self {
                    title,
                    director,
                    year,
                    color,
                    duration,
                })
            }
            _ => Err(violations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::ViolationCode;
    use rstest::rstest;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "title": "Star Wars",
            "director": "George Lucas",
            "year": "1977",
            "color": true,
            "duration": 120,
        })
    }

    #[rstest]
    fn full_payload_produces_a_draft() {
        let draft = MovieDraft::from_payload(&full_payload()).expect("valid payload");

        assert_eq!(draft.title, "Star Wars");
        assert_eq!(draft.director, "George Lucas");
        assert_eq!(draft.year, "1977");
        assert!(draft.color);
        assert_eq!(draft.duration, 120);
    }

    #[rstest]
    fn extra_fields_are_ignored() {
        let mut payload = full_payload();
        payload["tagline"] = json!("A long time ago");

        assert!(MovieDraft::from_payload(&payload).is_ok());
    }

    #[rstest]
    fn string_colour_flags_are_accepted() {
        let mut payload = full_payload();
        payload["color"] = json!("0");

        let draft = MovieDraft::from_payload(&payload).expect("valid payload");
        assert!(!draft.color);
    }

    #[rstest]
    fn missing_fields_are_all_reported() {
        let violations = MovieDraft::from_payload(&json!({ "title": "Harry Potter" }))
            .expect_err("incomplete payload");

        let fields: Vec<&str> = violations.iter().map(FieldViolation::field).collect();
        assert_eq!(fields, vec!["director", "year", "color", "duration"]);
    }

    #[rstest]
    fn non_object_payload_reports_every_field_missing() {
        let violations =
            MovieDraft::from_payload(&json!("not an object")).expect_err("shapeless payload");

        assert_eq!(violations.len(), 5);
        assert!(
            violations
                .iter()
                .all(|violation| violation.code() == ViolationCode::MissingField)
        );
    }

    #[rstest]
    fn numeric_year_is_rejected_not_coerced() {
        let mut payload = full_payload();
        payload["year"] = json!(1977);

        let violations = MovieDraft::from_payload(&payload).expect_err("numeric year");
        assert_eq!(violations.first().map(FieldViolation::field), Some("year"));
        assert_eq!(violations.first().map(FieldViolation::code), Some(ViolationCode::NotAString));
    }

    #[rstest]
    fn type_and_missing_violations_combine() {
        let violations = MovieDraft::from_payload(&json!({
            "title": "Avatar",
            "director": 7,
            "year": "2009",
            "duration": "162",
        }))
        .expect_err("mixed violations");

        let fields: Vec<&str> = violations.iter().map(FieldViolation::field).collect();
        assert_eq!(fields, vec!["director", "color", "duration"]);
    }

    #[rstest]
    fn from_draft_carries_every_field() {
        let draft = MovieDraft::from_payload(&full_payload()).expect("valid payload");
        let movie = Movie::from_draft(7, draft.clone());

        assert_eq!(movie.id, 7);
        assert_eq!(movie.title, draft.title);
        assert_eq!(movie.duration, draft.duration);
    }
}
