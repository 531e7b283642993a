//! Cinetheque: a JSON REST API over a movie and user catalogue.
//!
//! The crate follows a hexagonal layout: pure validators and repository
//! ports live in [`domain`], actix-web handlers in [`inbound::http`],
//! Diesel adapters in [`outbound::persistence`], and wiring in [`server`].

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

pub use doc::ApiDoc;
pub use middleware::Trace;
