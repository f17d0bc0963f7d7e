// Store abstraction for the person registry
// This defines the interface resolvers use to read and write person records

//! # Person Store
//!
//! The store owns the authoritative in-memory collection of [`Person`]
//! records for the lifetime of the process. The abstraction separates the
//! resolver layer from the storage implementation, so tests can run against
//! isolated store instances and alternative backends stay possible.
//!
//! ## Semantics
//!
//! - Records are kept in insertion order; `all` returns them in that order
//! - `name` is unique across the store's lifetime; a violating `add` fails
//!   without mutating state
//! - Not-found is `Ok(None)`, never an error; only `add` can fail for a
//!   caller-visible reason (duplicate name)
//! - Nothing is ever deleted; store lifetime equals process lifetime

use crate::models::{NewPerson, Person};
use crate::{PersonRegistryError, Result};

/// Storage trait for person records
///
/// All operations are async so network-backed implementations remain
/// possible, even though the default in-memory implementation never blocks.
/// `Send + Sync` bounds allow sharing a store across resolver invocations.
#[async_trait::async_trait]
pub trait PersonStore: Send + Sync {
    /// Number of persons currently stored
    async fn count(&self) -> Result<usize>;

    /// Every person currently stored, in insertion order
    async fn all(&self) -> Result<Vec<Person>>;

    /// Persons whose `gender` field is set (`want_present` true) or unset
    ///
    /// This is a presence check, not a gender-equality filter. It backs the
    /// YES/NO enum filter on the `allPersons` query.
    async fn filter_by_gender_presence(&self, want_present: bool) -> Result<Vec<Person>>;

    /// First person whose name exactly matches, or `None`
    async fn find_by_name(&self, name: &str) -> Result<Option<Person>>;

    /// Create a person with a fresh id and append it to the store
    ///
    /// ## Errors
    /// - [`PersonRegistryError::DuplicateName`] if a person with the same
    ///   name already exists; the store is left unchanged
    async fn add(&self, candidate: NewPerson) -> Result<Person>;

    /// Replace the phone number of the person with the given name
    ///
    /// Returns `Ok(None)` when no person matches; the store is unmodified
    /// in that case. On a match the record keeps its id, position and all
    /// other fields, and the updated copy is returned.
    async fn edit_phone(&self, name: &str, phone: &str) -> Result<Option<Person>>;
}

/// In-memory store implementation
///
/// Holds the records in a `Vec` rather than a map because insertion order
/// is part of the contract. Duplicate-name checks are linear scans, which
/// is fine at this data scale; a name index would be the next step if the
/// dataset grew.
///
/// Uses `std::sync::RwLock` for thread-safe access: operations are short
/// and never hold the lock across an await point.
#[derive(Default)]
pub struct InMemoryPersonStore {
    persons: std::sync::RwLock<Vec<Person>>,
}

impl InMemoryPersonStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given records
    ///
    /// Used both for the static seed data variant and for the one-time
    /// remote bulk load at startup.
    pub fn with_persons(persons: Vec<Person>) -> Self {
        Self {
            persons: std::sync::RwLock::new(persons),
        }
    }
}

#[async_trait::async_trait]
impl PersonStore for InMemoryPersonStore {
    async fn count(&self) -> Result<usize> {
        let persons = self.persons.read().unwrap();
        Ok(persons.len())
    }

    async fn all(&self) -> Result<Vec<Person>> {
        let persons = self.persons.read().unwrap();
        Ok(persons.clone())
    }

    async fn filter_by_gender_presence(&self, want_present: bool) -> Result<Vec<Person>> {
        let persons = self.persons.read().unwrap();
        Ok(persons
            .iter()
            .filter(|person| person.has_gender() == want_present)
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>> {
        let persons = self.persons.read().unwrap();
        Ok(persons.iter().find(|person| person.name == name).cloned())
    }

    async fn add(&self, candidate: NewPerson) -> Result<Person> {
        let mut persons = self.persons.write().unwrap();

        if persons.iter().any(|person| person.name == candidate.name) {
            return Err(PersonRegistryError::DuplicateName {
                name: candidate.name,
            });
        }

        let person = Person::create(candidate);
        persons.push(person.clone());
        Ok(person)
    }

    async fn edit_phone(&self, name: &str, phone: &str) -> Result<Option<Person>> {
        let mut persons = self.persons.write().unwrap();

        match persons.iter_mut().find(|person| person.name == name) {
            Some(person) => {
                person.phone = Some(phone.to_string());
                Ok(Some(person.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_persons;

    fn seeded_store() -> InMemoryPersonStore {
        InMemoryPersonStore::with_persons(seed_persons())
    }

    fn new_person(name: &str, gender: Option<&str>) -> NewPerson {
        NewPerson {
            name: name.to_string(),
            age: 30,
            gender: gender.map(str::to_string),
            street: "1 Test Street".to_string(),
            city: "Testville".to_string(),
        }
    }

    #[tokio::test]
    async fn test_count_matches_all() {
        let store = seeded_store();
        assert_eq!(store.count().await.unwrap(), 3);
        assert_eq!(store.count().await.unwrap(), store.all().await.unwrap().len());
    }

    #[tokio::test]
    async fn test_all_preserves_insertion_order() {
        let store = seeded_store();
        store.add(new_person("Ada Lovelace", None)).await.unwrap();

        let names: Vec<String> = store
            .all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(
            names,
            vec!["Smith Jones", "Joe Biden", "Bruce Lee", "Ada Lovelace"]
        );
    }

    #[tokio::test]
    async fn test_gender_presence_filter_partitions_the_store() {
        let store = seeded_store();

        let with_gender = store.filter_by_gender_presence(true).await.unwrap();
        let without_gender = store.filter_by_gender_presence(false).await.unwrap();

        assert_eq!(with_gender.len(), 2);
        assert_eq!(without_gender.len(), 1);
        assert_eq!(without_gender[0].name, "Bruce Lee");
        assert_eq!(
            with_gender.len() + without_gender.len(),
            store.count().await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let store = seeded_store();

        let found = store.find_by_name("Smith Jones").await.unwrap().unwrap();
        assert_eq!(found.age, 28);
        assert_eq!(found.street, "724th Street");
        assert_eq!(found.city, "New York");

        assert!(store.find_by_name("Nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_grows_store_and_assigns_id() {
        let store = seeded_store();
        let before = store.count().await.unwrap();

        let created = store.add(new_person("Ada Lovelace", None)).await.unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.phone, None);
        assert_eq!(store.count().await.unwrap(), before + 1);

        let found = store.find_by_name("Ada Lovelace").await.unwrap().unwrap();
        assert_eq!(found.street, "1 Test Street");
        assert_eq!(found.city, "Testville");
        assert_eq!(found.id, created.id);
    }

    #[tokio::test]
    async fn test_add_rejects_duplicate_name_without_mutating() {
        let store = seeded_store();
        let before = store.count().await.unwrap();

        let result = store.add(new_person("Smith Jones", None)).await;
        match result {
            Err(PersonRegistryError::DuplicateName { name }) => {
                assert_eq!(name, "Smith Jones");
            }
            other => panic!("expected DuplicateName, got {:?}", other.map(|p| p.name)),
        }
        assert_eq!(store.count().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_edit_phone_updates_only_phone() {
        let store = seeded_store();

        let updated = store
            .edit_phone("Bruce Lee", "555-0101")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.phone.as_deref(), Some("555-0101"));
        assert_eq!(updated.id, "3");
        assert_eq!(updated.age, 19);
        assert_eq!(updated.street, "Colombian Street");

        // Position in the store is unchanged
        let all = store.all().await.unwrap();
        assert_eq!(all[2].name, "Bruce Lee");
        assert_eq!(all[2].phone.as_deref(), Some("555-0101"));
    }

    #[tokio::test]
    async fn test_edit_phone_unknown_name_is_none_and_store_unmodified() {
        let store = seeded_store();
        let before = store.all().await.unwrap();

        assert!(store.edit_phone("Nobody", "555-0101").await.unwrap().is_none());
        assert_eq!(store.all().await.unwrap(), before);
    }
}
