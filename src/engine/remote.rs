// One-time remote seed load
//
// The bulk-load variant fills the store from an HTTP endpoint returning a
// JSON array of person-shaped objects. The fetch runs exactly once, as an
// explicit fallible initialization step, before the server binds its
// listening socket. Any failure aborts startup with a typed error instead
// of serving an empty or partial dataset.

use tracing::{debug, info};

use crate::models::Person;
use crate::{PersonRegistryError, Result};

/// Fetch the initial person dataset from a remote endpoint
///
/// ## Errors
/// - [`PersonRegistryError::SeedFetch`] when the request fails, the
///   endpoint answers with a non-success status, or the body is not a JSON
///   array of person records
pub async fn fetch_persons(url: &str) -> Result<Vec<Person>> {
    info!("Loading person seed data from {}", url);

    let response = reqwest::get(url)
        .await
        .map_err(|e| PersonRegistryError::SeedFetch(format!("request to {} failed: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(PersonRegistryError::SeedFetch(format!(
            "seed endpoint {} returned {}",
            url, status
        )));
    }

    let persons = response
        .json::<Vec<Person>>()
        .await
        .map_err(|e| PersonRegistryError::SeedFetch(format!("invalid seed payload: {}", e)))?;

    debug!("Loaded {} person records", persons.len());
    Ok(persons)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The wire shape the loader expects; exercised without a network by
    // going through the same serde path `response.json()` uses.
    #[test]
    fn test_seed_payload_shape_parses() {
        let payload = r#"[
            {"name": "Smith Jones", "gender": "Male", "age": 28,
             "street": "724th Street", "city": "New York", "id": 1},
            {"name": "Bruce Lee", "age": 19,
             "street": "Colombian Street", "city": "Ohio", "id": "3"}
        ]"#;

        let persons: Vec<Person> = serde_json::from_str(payload).unwrap();
        assert_eq!(persons.len(), 2);
        assert_eq!(persons[0].id, "1");
        assert_eq!(persons[0].gender.as_deref(), Some("Male"));
        assert_eq!(persons[1].id, "3");
        assert_eq!(persons[1].gender, None);
    }

    #[tokio::test]
    async fn test_invalid_endpoint_is_a_seed_fetch_error() {
        let result = fetch_persons("not-a-valid-url").await;
        match result {
            Err(PersonRegistryError::SeedFetch(message)) => {
                assert!(message.contains("request to"));
            }
            other => panic!("expected SeedFetch error, got {:?}", other.map(|p| p.len())),
        }
    }
}
