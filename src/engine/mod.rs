// Person Registry Engine
// This contains the store abstraction and the GraphQL API interface

//! # Engine Module
//!
//! The engine is the layer between the domain models and the external
//! world. It follows the same layering as the server as a whole:
//!
//! - **Domain Models**: Pure data (in `models/`)
//! - **Engine Layer**: Store and API interfaces (this module)
//! - **Server Layer**: HTTP server and GraphQL endpoint (in `server/`)
//!
//! ## Engine Components
//!
//! ### Store (`store` module)
//! - [`PersonStore`] trait defining every operation resolvers can perform
//! - [`InMemoryPersonStore`], the default implementation holding a `Vec`
//!   behind a lock so insertion order is preserved
//!
//! ### GraphQL Engine (`graphql` module)
//! - GraphQL schema and resolvers
//! - Translates between GraphQL types and domain models
//! - Includes the schema building functions used by the server
//!
//! ### Remote Seed Load (`remote` module)
//! - One-time fetch of the initial dataset from an HTTP endpoint,
//!   performed as an explicit fallible step before the server binds

/// GraphQL engine for the API interface
pub mod graphql;

/// One-time remote seed loading
pub mod remote;

/// Store abstraction and in-memory implementation
pub mod store;

// Re-export main engine types for clean API access
pub use graphql::{create_schema, create_schema_with_store, PersonRegistrySchema};
pub use remote::fetch_persons;
pub use store::{InMemoryPersonStore, PersonStore};
