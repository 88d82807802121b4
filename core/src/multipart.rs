//! `multipart/form-data` payloads for photo uploads.
//!
//! A form is a list of parts described as plain data; the wire encoding is
//! done by `ureq`'s multipart support in [`UreqTransport`](crate::transport::UreqTransport).
//! File parts are read completely when they are added, so no file handle
//! outlives [`MultipartForm::file_from_path`].

use std::fs;
use std::path::Path;

use crate::error::ApiError;

/// One part of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub name: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Parts of a `multipart/form-data` body, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<Part>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|part| part.name == name)
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(Part {
            name: name.to_string(),
            filename: None,
            content_type: None,
            data: value.as_bytes().to_vec(),
        });
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: Vec<u8>) -> Self {
        self.parts.push(Part {
            name: name.to_string(),
            filename: Some(filename.to_string()),
            content_type: Some(content_type.to_string()),
            data,
        });
        self
    }

    /// Read `path` into a file part. The content type is guessed from the
    /// extension.
    pub fn file_from_path(self, name: &str, path: &Path) -> Result<Self, ApiError> {
        let data = fs::read(path).map_err(|source| ApiError::Photo {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "read upload file");

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let content_type = mime_guess::from_path(path).first_or_octet_stream();
        Ok(self.file(name, &filename, content_type.essence_str(), data))
    }
}
