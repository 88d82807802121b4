//! Executing `HttpRequest` values over the network.
//!
//! # Design
//! `Transport` is the seam between request construction and I/O. The
//! production implementation wraps a blocking `ureq::Agent` configured so
//! that 4xx/5xx responses come back as data rather than `Err`; status
//! interpretation belongs to the caller.

use ureq::unversioned::multipart::{Form, Part};

use crate::error::ApiError;
use crate::http::{HttpBody, HttpMethod, HttpRequest, HttpResponse};
use crate::multipart::MultipartForm;

/// Executes one request and returns the raw response.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by `ureq`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            path,
            headers,
            query,
            body,
        } = request;

        let result = match method {
            HttpMethod::Get | HttpMethod::Delete => {
                let mut builder = if method == HttpMethod::Get {
                    self.agent.get(&path)
                } else {
                    self.agent.delete(&path)
                };
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                for (name, value) in &query {
                    builder = builder.query(name.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post | HttpMethod::Put => {
                let mut builder = if method == HttpMethod::Post {
                    self.agent.post(&path)
                } else {
                    self.agent.put(&path)
                };
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                for (name, value) in &query {
                    builder = builder.query(name.as_str(), value.as_str());
                }
                match body {
                    HttpBody::Empty => builder.send_empty(),
                    HttpBody::Form(fields) => builder.send_form(fields),
                    HttpBody::Multipart(form) => builder.send(encode_form(&form)?),
                }
            }
        };

        let mut response = result.map_err(|e| {
            tracing::debug!(method = method.as_str(), %path, error = %e, "request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        // Whole body, any size and any encoding. Invalid UTF-8 is replaced so
        // that normalize can still keep it as text.
        let bytes = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        tracing::debug!(method = method.as_str(), %path, status, "request completed");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn encode_form(form: &MultipartForm) -> Result<Form<'_>, ApiError> {
    let mut encoded = Form::new();
    for part in form.parts() {
        let mut wire = Part::bytes(&part.data);
        if let Some(filename) = &part.filename {
            wire = wire.file_name(filename);
        }
        if let Some(content_type) = &part.content_type {
            wire = wire
                .mime_str(content_type)
                .map_err(|e| ApiError::Transport(e.to_string()))?;
        }
        encoded = encoded.part(&part.name, wire);
    }
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn wire(form: &MultipartForm) -> String {
        let mut encoded = encode_form(form).unwrap();
        let boundary = encoded.boundary().to_string();
        let mut out = Vec::new();
        encoded.read_to_end(&mut out).unwrap();
        let out = String::from_utf8_lossy(&out).into_owned();
        assert!(out.ends_with(&format!("--{boundary}--\r\n")));
        out
    }

    #[test]
    fn form_parts_are_encoded_in_order() {
        let form = MultipartForm::new()
            .text("name", "Corey")
            .file("pet_photo", "corey.jpg", "image/jpeg", b"JPEG".to_vec());
        let out = wire(&form);

        let name = out.find(r#"name="name""#).unwrap();
        let photo = out.find(r#"name="pet_photo"; filename="corey.jpg""#).unwrap();
        assert!(name < photo);
        assert!(out.contains("Content-Type: image/jpeg"));
        assert!(out.contains("\r\n\r\nCorey\r\n"));
        assert!(out.contains("\r\n\r\nJPEG\r\n"));
    }

    #[test]
    fn text_parts_carry_no_content_type() {
        let out = wire(&MultipartForm::new().text("age", "4"));
        assert!(!out.to_ascii_lowercase().contains("content-type"));
    }

    #[test]
    fn invalid_part_content_type_is_transport_error() {
        let form = MultipartForm::new().file("f", "a.bin", "image/jpeg/extra/slashes", Vec::new());
        assert!(matches!(encode_form(&form), Err(ApiError::Transport(_))));
    }
}
