//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the repository ports and stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::{MovieRepository, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub movies: Arc<dyn MovieRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl HttpState {
    /// Construct state from the two repository ports.
    pub fn new(movies: Arc<dyn MovieRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { movies, users }
    }
}
