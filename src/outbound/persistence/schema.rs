//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; they give Diesel
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Movie catalogue table. `id` is a `SERIAL` primary key assigned by
    /// the store; no column is nullable.
    movies (id) {
        id -> Int4,
        #[max_length = 255]
        title -> Varchar,
        #[max_length = 255]
        director -> Varchar,
        /// Release year, kept as text on purpose.
        #[max_length = 255]
        year -> Varchar,
        color -> Bool,
        /// Running time in minutes.
        duration -> Int4,
    }
}

diesel::table! {
    /// Registered users table. Email has no uniqueness constraint.
    users (id) {
        id -> Int4,
        #[max_length = 255]
        firstname -> Varchar,
        #[max_length = 255]
        lastname -> Varchar,
        #[max_length = 255]
        email -> Varchar,
        #[max_length = 255]
        city -> Varchar,
        #[max_length = 255]
        language -> Varchar,
    }
}
