//! Domain entities, validators, and ports.
//!
//! Purpose: define the catalogue's strongly typed resources (`Movie`,
//! `User`), the pure payload validators producing drafts, the outcome
//! taxonomy shared by every handler, and the repository ports adapters
//! implement. Nothing in this module knows about HTTP or Diesel.

pub mod error;
pub mod movie;
pub mod ports;
pub mod user;
pub mod validation;

pub use self::error::Error;
pub use self::movie::{Movie, MovieDraft};
pub use self::user::{User, UserDraft};
pub use self::validation::{FieldViolation, ViolationCode};

/// Convenient result alias for operations that surface domain outcomes.
pub type ApiResult<T> = Result<T, Error>;
