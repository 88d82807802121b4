//! HTTP transport types for the build / execute / normalize split.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! `PetFriendsClient` builds `HttpRequest` values without touching the network;
//! a [`Transport`](crate::transport::Transport) executes them and hands back an
//! `HttpResponse`, which is then normalized into an
//! [`Envelope`](crate::envelope::Envelope).
//!
//! All fields use owned types (`String`, `Vec`) so requests can be inspected in
//! tests and moved across threads without lifetime concerns.

use crate::multipart::MultipartForm;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Payload attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpBody {
    Empty,
    /// `application/x-www-form-urlencoded` fields, in order.
    Form(Vec<(String, String)>),
    /// `multipart/form-data` parts; the transport does the wire encoding.
    Multipart(MultipartForm),
}

impl HttpBody {
    pub fn is_empty(&self) -> bool {
        matches!(self, HttpBody::Empty)
    }

    /// Value of a form field, if this is a urlencoded body.
    pub fn form_field(&self, name: &str) -> Option<&str> {
        match self {
            HttpBody::Form(fields) => fields
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `PetFriendsClient::build_*` methods. `path` is the absolute URL;
/// query parameters are kept apart so the transport can encode them.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: HttpBody,
}

impl HttpRequest {
    /// First header with the given name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a transport after executing an `HttpRequest`, then passed to
/// [`normalize`](crate::envelope::normalize).
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
