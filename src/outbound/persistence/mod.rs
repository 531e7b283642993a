//! PostgreSQL persistence adapters built on Diesel.

mod diesel_movie_repository;
mod diesel_user_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_movie_repository::DieselMovieRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
