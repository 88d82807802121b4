//! Domain types for the PetFriends API.
//!
//! # Design
//! Request inputs (`Credentials`, `AuthKey`, `PetFilter`, `NewPet`) are typed
//! so credentials are threaded explicitly through each call. Response DTOs
//! (`Pet`, `PetList`) are optional typed views obtained through
//! [`Envelope::decode`]; they mirror the mock-server's schema but are defined
//! independently.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;

/// Email and password used to obtain an [`AuthKey`].
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque key issued by `api/key`. Sent as the `auth_key` header.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthKey(String);

impl AuthKey {
    pub fn new(key: &str) -> Self {
        Self(key.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key from the `"key"` field of an `authenticate` envelope.
    pub fn from_envelope(envelope: &Envelope) -> Option<Self> {
        envelope
            .body
            .get("key")
            .and_then(|value| value.as_str())
            .map(Self::new)
    }
}

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthKey(<redacted>)")
    }
}

/// Which pets `list_pets` asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetFilter {
    #[default]
    All,
    MyPets,
}

impl PetFilter {
    /// Value of the `filter` query parameter.
    pub fn as_query(self) -> &'static str {
        match self {
            PetFilter::All => "",
            PetFilter::MyPets => "my_pets",
        }
    }
}

/// Fields sent when creating or updating a pet. All three are free-form
/// text, `age` included; the service does not require a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub animal_type: String,
    pub age: String,
}

impl NewPet {
    pub fn new(name: &str, animal_type: &str, age: &str) -> Self {
        Self {
            name: name.to_string(),
            animal_type: animal_type.to_string(),
            age: age.to_string(),
        }
    }

    pub(crate) fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("name".to_string(), self.name.clone()),
            ("animal_type".to_string(), self.animal_type.clone()),
            ("age".to_string(), self.age.clone()),
        ]
    }
}

/// A pet as returned by the service. `age` is a string on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    pub age: String,
    #[serde(default)]
    pub pet_photo: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub created_at: String,
}

/// Body of a `list_pets` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetList {
    pub pets: Vec<Pet>,
}

impl PetList {
    pub fn contains_id(&self, id: &str) -> bool {
        self.pets.iter().any(|pet| pet.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Body;

    #[test]
    fn filter_query_values() {
        assert_eq!(PetFilter::All.as_query(), "");
        assert_eq!(PetFilter::MyPets.as_query(), "my_pets");
        assert_eq!(PetFilter::default(), PetFilter::All);
    }

    #[test]
    fn auth_key_from_envelope() {
        let envelope = Envelope {
            status: 200,
            body: Body::Json(serde_json::json!({"key": "abc123"})),
        };
        assert_eq!(AuthKey::from_envelope(&envelope), Some(AuthKey::new("abc123")));
    }

    #[test]
    fn auth_key_missing_from_error_envelope() {
        let envelope = Envelope {
            status: 403,
            body: Body::Text("Forbidden".to_string()),
        };
        assert!(AuthKey::from_envelope(&envelope).is_none());
    }

    #[test]
    fn secrets_are_not_debug_printed() {
        let creds = Credentials::new("a@b.c", "hunter2");
        assert!(!format!("{creds:?}").contains("hunter2"));
        assert!(!format!("{:?}", AuthKey::new("secret-key")).contains("secret-key"));
    }

    #[test]
    fn new_pet_age_is_sent_as_string() {
        let fields = NewPet::new("Corey", "dog", "4").form_fields();
        assert_eq!(fields[2], ("age".to_string(), "4".to_string()));
    }

    #[test]
    fn new_pet_age_is_passed_through_verbatim() {
        let fields = NewPet::new("Барсик", "кот", "два года").form_fields();
        assert_eq!(fields[2], ("age".to_string(), "два года".to_string()));
    }

    #[test]
    fn pet_tolerates_missing_optional_fields() {
        let pet: Pet =
            serde_json::from_str(r#"{"id":"1","name":"Corey","animal_type":"dog","age":"4"}"#)
                .unwrap();
        assert_eq!(pet.pet_photo, "");
    }
}
