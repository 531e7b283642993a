//! User resource and its payload validator.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::validation::{FieldViolation, require_bounded_string, require_email};

/// A stored user, addressable by its store-assigned identifier.
///
/// Email syntax is validated on the way in, but uniqueness is deliberately
/// not enforced: two users may share an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned primary key.
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Marie")]
    pub firstname: String,
    #[schema(example = "Martin")]
    pub lastname: String,
    #[schema(example = "marie.martin@wild.co")]
    pub email: String,
    #[schema(example = "Paris")]
    pub city: String,
    #[schema(example = "French")]
    pub language: String,
}

impl User {
    /// Attach a store-assigned identifier to a validated draft.
    pub fn from_draft(id: i32, draft: UserDraft) -> Self {
        let UserDraft {
            firstname,
            lastname,
            email,
            city,
            language,
        } = draft;
        Self {
            id,
            firstname,
            lastname,
            email,
            city,
            language,
        }
    }
}

/// A validated create/update payload, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub city: String,
    pub language: String,
}

impl UserDraft {
    /// Validate a raw JSON payload into a draft.
    ///
    /// Same contract as [`crate::domain::MovieDraft::from_payload`]: pure,
    /// collects every violation, ignores unknown fields, and treats a
    /// non-object payload as one with every field absent.
    pub fn from_payload(payload: &Value) -> Result<Self, Vec<FieldViolation>> {
        let empty = Map::new();
        let fields = payload.as_object().unwrap_or(&empty);
        let mut violations = Vec::new();

        let firstname = require_bounded_string(fields, "firstname", &mut violations);
        let lastname = require_bounded_string(fields, "lastname", &mut violations);
        let email = require_email(fields, "email", &mut violations);
        let city = require_bounded_string(fields, "city", &mut violations);
        let language = require_bounded_string(fields, "language", &mut violations);

        match (firstname, lastname, email, city, language) {
            (Some(firstname), Some(lastname), Some(email), Some(city), Some(language))
                if violations.is_empty() =>
            {
                Ok(Self {
                    firstname,
                    lastname,
                    email,
                    city,
                    language,
                })
            }
            _ => Err(violations),
        }
    }
}
