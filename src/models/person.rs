// Person domain model
//
// The record is stored flat: `street` and `city` live directly on the
// person, and the GraphQL `address` object is derived from them at read
// time. Address has no identity or lifecycle of its own.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// The canonical person record held by the store
///
/// ## Invariants
///
/// - `id` is assigned once at creation and never changes or gets reused
/// - `name` is unique across the full lifetime of the store (enforced by
///   the store at write time, not by this type)
/// - `street` and `city` are always present, so every person has a
///   derivable non-null address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier, assigned at creation, immutable
    ///
    /// Seed sources may carry numeric ids; they are normalized to strings
    /// on deserialization.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub age: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Present only once set via the phone-edit mutation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub street: String,
    pub city: String,
}

impl Person {
    /// Create a person from an input, assigning a fresh UUID
    pub fn create(input: NewPerson) -> Self {
        Person {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            age: input.age,
            gender: input.gender,
            phone: None,
            street: input.street,
            city: input.city,
        }
    }

    /// Whether the optional gender field carries a value
    ///
    /// This is the presence check backing the YES/NO filter: it does not
    /// compare gender against any particular value.
    pub fn has_gender(&self) -> bool {
        self.gender.as_deref().map_or(false, |g| !g.is_empty())
    }
}

/// Input for the add operation
///
/// The id is not part of the input; the store assigns it. The wire-level
/// `addPerson` mutation has no age argument, so the resolver layer fills
/// `age` with a default before reaching the store.
#[derive(Debug, Clone)]
pub struct NewPerson {
    pub name: String,
    pub age: i32,
    pub gender: Option<String>,
    pub street: String,
    pub city: String,
}

/// Accept both string and integer ids from seed sources
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// The static startup dataset used when no remote seed source is configured
pub fn seed_persons() -> Vec<Person> {
    vec![
        Person {
            id: "1".to_string(),
            name: "Smith Jones".to_string(),
            age: 28,
            gender: Some("Male".to_string()),
            phone: None,
            street: "724th Street".to_string(),
            city: "New York".to_string(),
        },
        Person {
            id: "2".to_string(),
            name: "Joe Biden".to_string(),
            age: 21,
            gender: Some("Male".to_string()),
            phone: None,
            street: "120th Street".to_string(),
            city: "Arizona".to_string(),
        },
        Person {
            id: "3".to_string(),
            name: "Bruce Lee".to_string(),
            age: 19,
            gender: None,
            phone: None,
            street: "Colombian Street".to_string(),
            city: "Ohio".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_fresh_ids() {
        let input = NewPerson {
            name: "Ada Lovelace".to_string(),
            age: 36,
            gender: None,
            street: "12 Analytical Lane".to_string(),
            city: "London".to_string(),
        };

        let first = Person::create(input.clone());
        let second = Person::create(input);

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert_eq!(first.phone, None);
    }

    #[test]
    fn test_has_gender_is_a_presence_check() {
        let mut person = seed_persons().remove(0);
        assert!(person.has_gender());

        person.gender = None;
        assert!(!person.has_gender());

        // An empty string counts as absent, matching the filter semantics
        person.gender = Some(String::new());
        assert!(!person.has_gender());
    }

    #[test]
    fn test_deserializes_numeric_and_string_ids() {
        let numeric: Person = serde_json::from_str(
            r#"{"id": 7, "name": "Grace Hopper", "age": 45,
                "street": "1 Navy Way", "city": "Arlington"}"#,
        )
        .unwrap();
        assert_eq!(numeric.id, "7");
        assert_eq!(numeric.gender, None);

        let textual: Person = serde_json::from_str(
            r#"{"id": "abc-123", "name": "Alan Turing", "age": 41,
                "gender": "Male", "street": "Bletchley Rd", "city": "Milton Keynes"}"#,
        )
        .unwrap();
        assert_eq!(textual.id, "abc-123");
        assert_eq!(textual.gender.as_deref(), Some("Male"));
    }

    #[test]
    fn test_seed_data_shape() {
        let seed = seed_persons();
        assert_eq!(seed.len(), 3);
        assert_eq!(seed[0].name, "Smith Jones");
        assert_eq!(seed[2].name, "Bruce Lee");
        assert!(!seed[2].has_gender());
    }
}
