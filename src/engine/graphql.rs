// GraphQL API for the person registry
// This provides the schema surface consumed by the external execution engine

//! # GraphQL Engine
//!
//! Thin mapping from schema fields and operations to [`PersonStore`] calls.
//! Resolvers perform no business logic beyond field shaping (deriving the
//! `address` object from the flat street/city fields) and surfacing the
//! duplicate-name error from the store as a user input error.
//!
//! The wire surface:
//!
//! ```graphql
//! type Query {
//!   personCount: Int!
//!   allPersons(gender: YesNo): [Person!]!
//!   findPerson(name: String!): Person
//! }
//!
//! type Mutation {
//!   addPerson(name: String!, gender: String, street: String!, city: String!): Person
//!   editPhone(name: String!, phone: String!): Person
//! }
//! ```
//!
//! The `YesNo` filter on `allPersons` is a presence check on the optional
//! gender field (`YES` = "has a gender value"), not an equality filter.
//! Only `addPerson` can fail explicitly; every other operation degrades to
//! a null or empty result.

use std::sync::Arc;

use async_graphql::{
    ComplexObject, Context, EmptySubscription, Enum, ErrorExtensions, Object, Schema,
    SimpleObject, ID,
};

use crate::engine::store::{InMemoryPersonStore, PersonStore};
use crate::models::{NewPerson, Person};
use crate::PersonRegistryError;

pub type PersonRegistrySchema = Schema<Query, Mutation, EmptySubscription>;

// GraphQL types - these are the API representations of our domain models

#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Person", complex)]
pub struct PersonGQL {
    pub name: String,
    pub age: i32,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub id: ID,
    // Flat source fields for the derived address; not exposed directly
    #[graphql(skip)]
    pub street: String,
    #[graphql(skip)]
    pub city: String,
}

#[ComplexObject]
impl PersonGQL {
    /// Derived sub-object, recomputed from the flat fields on every read
    async fn address(&self) -> AddressGQL {
        AddressGQL {
            street: self.street.clone(),
            city: self.city.clone(),
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Address")]
pub struct AddressGQL {
    pub street: String,
    pub city: String,
}

impl From<&Person> for PersonGQL {
    fn from(person: &Person) -> Self {
        PersonGQL {
            name: person.name.clone(),
            age: person.age,
            gender: person.gender.clone(),
            phone: person.phone.clone(),
            id: ID(person.id.clone()),
            street: person.street.clone(),
            city: person.city.clone(),
        }
    }
}

/// Presence filter for the optional gender field
///
/// `YES` selects persons whose gender is set, `NO` those without one.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

// GraphQL Query root
pub struct Query;

#[Object]
impl Query {
    /// Number of persons currently stored
    async fn person_count(&self, ctx: &Context<'_>) -> async_graphql::Result<i32> {
        let store = ctx.data::<Arc<dyn PersonStore>>()?;
        match store.count().await {
            Ok(count) => Ok(count as i32),
            Err(e) => Err(async_graphql::Error::new(format!(
                "Failed to count persons: {}",
                e
            ))),
        }
    }

    /// All persons, optionally filtered by gender presence
    async fn all_persons(
        &self,
        ctx: &Context<'_>,
        gender: Option<YesNo>,
    ) -> async_graphql::Result<Vec<PersonGQL>> {
        let store = ctx.data::<Arc<dyn PersonStore>>()?;
        let result = match gender {
            None => store.all().await,
            Some(filter) => {
                store
                    .filter_by_gender_presence(filter == YesNo::Yes)
                    .await
            }
        };
        match result {
            Ok(persons) => Ok(persons.iter().map(PersonGQL::from).collect()),
            Err(e) => Err(async_graphql::Error::new(format!(
                "Failed to list persons: {}",
                e
            ))),
        }
    }

    /// Find a person by exact name; absent names resolve to null
    async fn find_person(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<PersonGQL>> {
        let store = ctx.data::<Arc<dyn PersonStore>>()?;
        match store.find_by_name(&name).await {
            Ok(Some(person)) => Ok(Some(PersonGQL::from(&person))),
            Ok(None) => Ok(None),
            Err(e) => Err(async_graphql::Error::new(format!(
                "Failed to find person: {}",
                e
            ))),
        }
    }
}

// GraphQL Mutation root
pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a person; fails when the name is already used
    async fn add_person(
        &self,
        ctx: &Context<'_>,
        name: String,
        gender: Option<String>,
        street: String,
        city: String,
    ) -> async_graphql::Result<Option<PersonGQL>> {
        let store = ctx.data::<Arc<dyn PersonStore>>()?;
        let candidate = NewPerson {
            name,
            // The wire contract carries no age argument, but Person.age is
            // non-null, so created records default to 0
            age: 0,
            gender,
            street,
            city,
        };
        match store.add(candidate).await {
            Ok(person) => Ok(Some(PersonGQL::from(&person))),
            Err(PersonRegistryError::DuplicateName { name }) => {
                Err(async_graphql::Error::new("Name is already used")
                    .extend_with(|_, e| e.set("invalidArgs", name.clone())))
            }
            Err(e) => Err(async_graphql::Error::new(format!(
                "Failed to add person: {}",
                e
            ))),
        }
    }

    /// Replace a person's phone number; unknown names resolve to null
    async fn edit_phone(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: String,
    ) -> async_graphql::Result<Option<PersonGQL>> {
        let store = ctx.data::<Arc<dyn PersonStore>>()?;
        match store.edit_phone(&name, &phone).await {
            Ok(Some(person)) => Ok(Some(PersonGQL::from(&person))),
            Ok(None) => Ok(None),
            Err(e) => Err(async_graphql::Error::new(format!(
                "Failed to edit phone: {}",
                e
            ))),
        }
    }
}

/// Create a schema backed by an empty in-memory store
pub fn create_schema() -> PersonRegistrySchema {
    create_schema_with_store(Arc::new(InMemoryPersonStore::new()))
}

/// Create a schema backed by the given store
pub fn create_schema_with_store(store: Arc<dyn PersonStore>) -> PersonRegistrySchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(store)
        .finish()
}
