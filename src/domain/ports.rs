//! Repository ports for the catalogue's two resources.
//!
//! Ports describe how the domain expects to interact with the store. Each
//! trait exposes strongly typed errors so adapters map their failures into
//! predictable variants instead of returning `anyhow::Result`. The
//! in-memory implementations back handler tests and storeless development
//! runs.

use std::sync::Mutex;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use thiserror::Error;

use super::movie::{Movie, MovieDraft};
use super::user::{User, UserDraft};

/// Failures surfaced by repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// Repository connection could not be established.
    #[error("repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("repository query failed: {message}")]
    Query { message: String },
}

impl PersistenceError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for the movie resource.
///
/// `update` and `delete` report whether a row matched the identifier; the
/// caller translates `false` into a not-found outcome. Consistency of
/// concurrent writes to the same id is the store's concern, not the port's.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Fetch every stored movie, ordered by identifier.
    async fn list(&self) -> Result<Vec<Movie>, PersistenceError>;

    /// Fetch a movie by identifier.
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, PersistenceError>;

    /// Insert a new row and return the stored entity with its assigned id.
    async fn insert(&self, draft: &MovieDraft) -> Result<Movie, PersistenceError>;

    /// Replace every field of the row matching `id`. Returns whether a row
    /// matched.
    async fn update(&self, id: i32, draft: &MovieDraft) -> Result<bool, PersistenceError>;

    /// Remove the row matching `id`. Returns whether a row matched.
    async fn delete(&self, id: i32) -> Result<bool, PersistenceError>;
}

/// Persistence port for the user resource.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every stored user, ordered by identifier.
    async fn list(&self) -> Result<Vec<User>, PersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, PersistenceError>;

    /// Insert a new row and return the stored entity with its assigned id.
    async fn insert(&self, draft: &UserDraft) -> Result<User, PersistenceError>;

    /// Replace every field of the row matching `id`. Returns whether a row
    /// matched.
    async fn update(&self, id: i32, draft: &UserDraft) -> Result<bool, PersistenceError>;

    /// Remove the row matching `id`. Returns whether a row matched.
    async fn delete(&self, id: i32) -> Result<bool, PersistenceError>;
}

fn poisoned() -> PersistenceError {
    PersistenceError::query("in-memory store lock poisoned")
}

/// In-memory movie store with the same observable semantics as the Diesel
/// adapter: monotonically increasing ids, full-replace updates, permanent
/// deletes.
#[derive(Default)]
pub struct InMemoryMovieRepository {
    rows: Mutex<Vec<Movie>>,
    next_id: AtomicI32,
}

impl InMemoryMovieRepository {
    /// Create an empty store whose first assigned id is 1.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn list(&self) -> Result<Vec<Movie>, PersistenceError> {
        let rows = self.rows.lock().map_err(|_| poisoned())?;
        Ok(rows.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, PersistenceError> {
        let rows = self.rows.lock().map_err(|_| poisoned())?;
        Ok(rows.iter().find(|movie| movie.id == id).cloned())
    }

    async fn insert(&self, draft: &MovieDraft) -> Result<Movie, PersistenceError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let movie = Movie::from_draft(id, draft.clone());
        let mut rows = self.rows.lock().map_err(|_| poisoned())?;
        rows.push(movie.clone());
        Ok(movie)
    }

    async fn update(&self, id: i32, draft: &MovieDraft) -> Result<bool, PersistenceError> {
        let mut rows = self.rows.lock().map_err(|_| poisoned())?;
        match rows.iter_mut().find(|movie| movie.id == id) {
            Some(row) => {
                *row = Movie::from_draft(id, draft.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, PersistenceError> {
        let mut rows = self.rows.lock().map_err(|_| poisoned())?;
        let before = rows.len();
        rows.retain(|movie| movie.id != id);
        Ok(rows.len() < before)
    }
}

/// In-memory user store mirroring [`InMemoryMovieRepository`].
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<User>>,
    next_id: AtomicI32,
}

impl InMemoryUserRepository {
    /// Create an empty store whose first assigned id is 1.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, PersistenceError> {
        let rows = self.rows.lock().map_err(|_| poisoned())?;
        Ok(rows.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, PersistenceError> {
        let rows = self.rows.lock().map_err(|_| poisoned())?;
        Ok(rows.iter().find(|user| user.id == id).cloned())
    }

    async fn insert(&self, draft: &UserDraft) -> Result<User, PersistenceError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let user = User::from_draft(id, draft.clone());
        let mut rows = self.rows.lock().map_err(|_| poisoned())?;
        rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, draft: &UserDraft) -> Result<bool, PersistenceError> {
        let mut rows = self.rows.lock().map_err(|_| poisoned())?;
        match rows.iter_mut().find(|user| user.id == id) {
            Some(row) => {
                *row = User::from_draft(id, draft.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, PersistenceError> {
        let mut rows = self.rows.lock().map_err(|_| poisoned())?;
        let before = rows.len();
        rows.retain(|user| user.id != id);
        Ok(rows.len() < before)
    }
}
