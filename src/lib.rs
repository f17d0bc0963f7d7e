// Person Registry - Rust Edition
// A minimal GraphQL server exposing a persons dataset through queries and mutations

//! # Person Registry Library
//!
//! This is the main library crate for the Person Registry, a small GraphQL
//! server that owns an in-memory collection of person records and exposes it
//! through queries and mutations. This file serves as the **library root**
//! and defines the public API that external crates can use.
//!
//! ## Core Components
//!
//! ### Domain Models (`models/`)
//! - [`Person`]: The canonical person record (flat street/city fields from
//!   which the GraphQL `address` object is derived at read time)
//! - [`NewPerson`]: Input for creating a person
//!
//! ### Engine Layer (`engine/`)
//! - [`PersonStore`]: Trait defining the store operations resolvers call
//! - [`InMemoryPersonStore`]: Default implementation, a `Vec` behind a lock
//!   so insertion order is preserved
//! - GraphQL schema and resolvers translating between the API surface and
//!   the store
//! - One-time remote seed loading for the bulk-load startup variant
//!
//! ### Server Layer (`server/`)
//! - Axum HTTP server with GraphQL endpoint, GraphiQL interface and a
//!   health route

// Core domain models
pub mod models;

// Engine implementations (store, GraphQL schema, remote seed load)
pub mod engine;

// Server implementations
// This contains HTTP server and GraphQL server setup
pub mod server;

// Re-export core domain types for easy access
pub use models::{seed_persons, NewPerson, Person};

// Re-export engine types for convenience
pub use engine::{
    graphql::{
        create_schema, create_schema_with_store, AddressGQL, PersonGQL, PersonRegistrySchema,
        YesNo,
    },
    remote::fetch_persons,
    store::{InMemoryPersonStore, PersonStore},
};

// Re-export server types for convenience
pub use server::graphql::{GraphQLServer, GraphQLServerBuilder, GraphQLServerConfig};

// Core error types
use thiserror::Error;

/// Custom error types for Person Registry operations
///
/// Domain errors are deliberately few: the only operation that can fail for
/// a caller-visible reason is adding a person whose name is already taken.
/// Not-found conditions are represented as `Ok(None)`, never as errors.
#[derive(Error, Debug)]
pub enum PersonRegistryError {
    /// Error when adding a person whose name is already used
    #[error("Name is already used: {name}")]
    DuplicateName { name: String },

    /// Error when the one-time remote seed load fails at startup
    #[error("Seed fetch failed: {0}")]
    SeedFetch(String),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for PersonRegistryError {
    fn from(err: std::io::Error) -> Self {
        PersonRegistryError::Internal(err.to_string())
    }
}

/// Type alias for Results that use our custom error type
pub type Result<T> = std::result::Result<T, PersonRegistryError>;
