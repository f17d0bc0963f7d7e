// Person Registry server implementations

//! # Server Module
//!
//! This module contains the server implementation that exposes the person
//! registry to external clients. The server layer sits on top of the
//! engine layer and provides the network-accessible GraphQL API.
//!
//! ## Server Architecture
//!
//! The server follows a **layered architecture**:
//! ```text
//! Client (Any Language)
//!        | HTTP/GraphQL
//! Server Layer (this module) - Axum HTTP server, GraphQL endpoint
//!        | Function calls
//! Engine Layer - GraphQL schema, store abstraction
//!        | Function calls
//! Domain Layer - Person records
//! ```
//!
//! ## GraphQL Server (`graphql` module)
//! - HTTP server with GraphQL endpoint
//! - Built on the Axum web framework
//! - Provides a GraphiQL interface for development
//! - Handles CORS for browser access
//! - Seeds the store (static data or one-time remote load) before binding

/// GraphQL HTTP server implementation
pub mod graphql;

/// Re-export GraphQL server types
///
/// These types enable HTTP server setup:
/// - GraphQLServer: The main server instance
/// - GraphQLServerConfig: Configuration options
/// - GraphQLServerBuilder: Builder pattern for easy setup
pub use graphql::{GraphQLServer, GraphQLServerBuilder, GraphQLServerConfig};
