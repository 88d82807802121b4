//! Synchronous client for the PetFriends web API.
//!
//! # Overview
//! Every operation is a single HTTP round trip whose response is normalized
//! into an [`Envelope`]: the status code verbatim plus the body decoded as
//! JSON, or the raw text when it is not JSON. The client never treats a
//! non-2xx status as an error.
//!
//! # Design
//! - `PetFriendsClient` is stateless: it holds only `base_url` and builds
//!   `HttpRequest` values.
//! - A [`Transport`] executes requests (`UreqTransport` in production, test
//!   doubles elsewhere).
//! - [`normalize`] is the single decode-or-fallback step shared by every
//!   operation.
//! - Credentials are typed values ([`Credentials`], [`AuthKey`]) passed to
//!   each call; nothing is cached.
//!
//! ```no_run
//! use petfriends_core::{AuthKey, Credentials, PetFilter, PetFriends};
//!
//! let api = PetFriends::new("https://petfriends.skillfactory.ru");
//! let auth = api.authenticate(&Credentials::new("me@example.com", "secret"))?;
//! if let Some(key) = AuthKey::from_envelope(&auth) {
//!     let pets = api.list_pets(&key, PetFilter::MyPets)?;
//!     println!("{} {:?}", pets.status, pets.body);
//! }
//! # Ok::<(), petfriends_core::ApiError>(())
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod multipart;
pub mod transport;
pub mod types;

pub use api::PetFriends;
pub use client::{PetFriendsClient, DEFAULT_BASE_URL};
pub use config::ClientConfig;
pub use envelope::{normalize, Body, Envelope};
pub use error::ApiError;
pub use http::{HttpBody, HttpMethod, HttpRequest, HttpResponse};
pub use multipart::MultipartForm;
pub use transport::{Transport, UreqTransport};
pub use types::{AuthKey, Credentials, NewPet, Pet, PetFilter, PetList};
