//! High-level PetFriends operations.
//!
//! Each method is one round trip: build the request, execute it on the
//! transport, normalize the response. Non-2xx statuses come back as
//! `Ok(Envelope)`; only transport failures and unreadable photos are `Err`.

use std::path::Path;

use crate::client::PetFriendsClient;
use crate::config::ClientConfig;
use crate::envelope::{normalize, Envelope};
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::transport::{Transport, UreqTransport};
use crate::types::{AuthKey, Credentials, NewPet, PetFilter};

/// PetFriends API bound to a transport.
#[derive(Debug, Clone)]
pub struct PetFriends<T = UreqTransport> {
    client: PetFriendsClient,
    transport: T,
}

impl PetFriends<UreqTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(PetFriendsClient::new(base_url), UreqTransport::new())
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }
}

impl<T: Transport> PetFriends<T> {
    pub fn with_transport(client: PetFriendsClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &PetFriendsClient {
        &self.client
    }

    /// `GET api/key`. On success the body holds `{"key": ...}`; see
    /// [`AuthKey::from_envelope`].
    pub fn authenticate(&self, credentials: &Credentials) -> Result<Envelope, ApiError> {
        self.send(self.client.build_authenticate(credentials))
    }

    /// `GET api/pets`. Filtering happens on the server.
    pub fn list_pets(&self, key: &AuthKey, filter: PetFilter) -> Result<Envelope, ApiError> {
        self.send(self.client.build_list_pets(key, filter))
    }

    /// `POST api/pets` with a photo. The photo is read before anything is sent;
    /// an unreadable photo fails with [`ApiError::Photo`].
    pub fn create_pet(
        &self,
        key: &AuthKey,
        pet: &NewPet,
        photo: impl AsRef<Path>,
    ) -> Result<Envelope, ApiError> {
        let request = self.client.build_create_pet(key, pet, photo.as_ref())?;
        self.send(request)
    }

    /// `POST api/create_pet_simple`.
    pub fn create_pet_without_photo(
        &self,
        key: &AuthKey,
        pet: &NewPet,
    ) -> Result<Envelope, ApiError> {
        self.send(self.client.build_create_pet_without_photo(key, pet))
    }

    /// `POST api/pets/set_photo/{id}`.
    pub fn attach_photo(
        &self,
        key: &AuthKey,
        pet_id: &str,
        photo: impl AsRef<Path>,
    ) -> Result<Envelope, ApiError> {
        let request = self.client.build_attach_photo(key, pet_id, photo.as_ref())?;
        self.send(request)
    }

    /// `PUT api/pets/{id}`.
    pub fn update_pet(
        &self,
        key: &AuthKey,
        pet_id: &str,
        pet: &NewPet,
    ) -> Result<Envelope, ApiError> {
        self.send(self.client.build_update_pet(key, pet_id, pet))
    }

    /// `DELETE api/pets/{id}`. The live service answers 200 with an empty
    /// body, which normalizes to `Body::Text("")`.
    pub fn delete_pet(&self, key: &AuthKey, pet_id: &str) -> Result<Envelope, ApiError> {
        self.send(self.client.build_delete_pet(key, pet_id))
    }

    fn send(&self, request: HttpRequest) -> Result<Envelope, ApiError> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        Ok(normalize(response))
    }
}
