//! Stateless HTTP request builder for the PetFriends API.
//!
//! # Design
//! `PetFriendsClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation has a `build_*` method that produces an
//! `HttpRequest`; executing it is the job of a
//! [`Transport`](crate::transport::Transport), and reading the response is the
//! job of [`normalize`](crate::envelope::normalize). Keeping request
//! construction free of I/O (apart from reading an upload file) makes every
//! request inspectable in tests.

use std::path::Path;

use crate::error::ApiError;
use crate::http::{HttpBody, HttpMethod, HttpRequest};
use crate::multipart::MultipartForm;
use crate::types::{AuthKey, Credentials, NewPet, PetFilter};

/// Live PetFriends host.
pub const DEFAULT_BASE_URL: &str = "https://petfriends.skillfactory.ru";

/// Form field carrying the photo in multipart uploads.
const PHOTO_FIELD: &str = "pet_photo";

/// Builds `HttpRequest` values for each PetFriends operation.
#[derive(Debug, Clone)]
pub struct PetFriendsClient {
    base_url: String,
}

impl Default for PetFriendsClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PetFriendsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_authenticate(&self, credentials: &Credentials) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/key", self.base_url),
            headers: vec![
                ("email".to_string(), credentials.email.clone()),
                ("password".to_string(), credentials.password.clone()),
            ],
            query: Vec::new(),
            body: HttpBody::Empty,
        }
    }

    pub fn build_list_pets(&self, key: &AuthKey, filter: PetFilter) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/pets", self.base_url),
            headers: auth_headers(key),
            query: vec![("filter".to_string(), filter.as_query().to_string())],
            body: HttpBody::Empty,
        }
    }

    /// Multipart create. Reads the whole photo before returning.
    pub fn build_create_pet(
        &self,
        key: &AuthKey,
        pet: &NewPet,
        photo: &Path,
    ) -> Result<HttpRequest, ApiError> {
        let mut form = MultipartForm::new();
        for (name, value) in pet.form_fields() {
            form = form.text(&name, &value);
        }
        let form = form.file_from_path(PHOTO_FIELD, photo)?;
        Ok(self.multipart_request(format!("{}/api/pets", self.base_url), key, form))
    }

    pub fn build_create_pet_without_photo(&self, key: &AuthKey, pet: &NewPet) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/create_pet_simple", self.base_url),
            headers: auth_headers(key),
            query: Vec::new(),
            body: HttpBody::Form(pet.form_fields()),
        }
    }

    pub fn build_attach_photo(
        &self,
        key: &AuthKey,
        pet_id: &str,
        photo: &Path,
    ) -> Result<HttpRequest, ApiError> {
        let form = MultipartForm::new().file_from_path(PHOTO_FIELD, photo)?;
        Ok(self.multipart_request(
            format!("{}/api/pets/set_photo/{pet_id}", self.base_url),
            key,
            form,
        ))
    }

    pub fn build_update_pet(&self, key: &AuthKey, pet_id: &str, pet: &NewPet) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/api/pets/{pet_id}", self.base_url),
            headers: auth_headers(key),
            query: Vec::new(),
            body: HttpBody::Form(pet.form_fields()),
        }
    }

    pub fn build_delete_pet(&self, key: &AuthKey, pet_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/api/pets/{pet_id}", self.base_url),
            headers: auth_headers(key),
            query: Vec::new(),
            body: HttpBody::Empty,
        }
    }

    /// The transport sets the `multipart/form-data` content type.
    fn multipart_request(&self, path: String, key: &AuthKey, form: MultipartForm) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path,
            headers: auth_headers(key),
            query: Vec::new(),
            body: HttpBody::Multipart(form),
        }
    }
}

fn auth_headers(key: &AuthKey) -> Vec<(String, String)> {
    vec![("auth_key".to_string(), key.as_str().to_string())]
}
