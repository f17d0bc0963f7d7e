// Core domain models for the Person Registry
// These are plain data structures with no GraphQL or transport concerns

//! # Domain Models Module
//!
//! The registry's domain is small: a single [`Person`] record type, the
//! [`NewPerson`] input used when creating one, and the static seed data the
//! server starts from when no remote source is configured.
//!
//! The GraphQL representations of these types live in `engine::graphql`;
//! keeping the domain models transport-free means the store and its tests
//! never touch the API layer.

pub mod person;

/// Re-export the person types
/// - Person: the canonical stored record
/// - NewPerson: input for the add operation
/// - seed_persons: the static startup dataset
pub use person::{seed_persons, NewPerson, Person};
