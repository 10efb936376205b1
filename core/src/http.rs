//! Plain-data requests and their execution on the transport.
//!
//! # Design
//! The builder never talks to `ureq` directly. It captures its state into an
//! `HttpRequest` at call time, and `HttpRequest::send` performs the single
//! round trip. Keeping the snapshot as owned data makes request assembly
//! testable without a network and guarantees the sent request cannot change
//! after the verb is invoked.

use std::collections::HashMap;

use crate::error::Result;

/// Header name to value. Names are kept exactly as the caller wrote them.
pub type Headers = HashMap<String, String>;

/// Raw response handed back by every verb. Dropping it releases the body.
pub type Response = ureq::http::Response<ureq::Body>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Value of the first header matching `name`, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Perform exactly one round trip on `agent`.
    pub(crate) fn send(self, agent: &ureq::Agent) -> Result<Response> {
        tracing::debug!(method = self.method.as_str(), url = %self.url, "sending request");

        let response = match self.method {
            HttpMethod::Get => apply_headers(agent.get(&self.url), &self.headers).call(),
            HttpMethod::Delete => apply_headers(agent.delete(&self.url), &self.headers).call(),
            HttpMethod::Post => send_body(apply_headers(agent.post(&self.url), &self.headers), self.body),
            HttpMethod::Put => send_body(apply_headers(agent.put(&self.url), &self.headers), self.body),
            HttpMethod::Patch => send_body(apply_headers(agent.patch(&self.url), &self.headers), self.body),
        }?;

        tracing::debug!(
            method = self.method.as_str(),
            url = %self.url,
            status = response.status().as_u16(),
            "received response"
        );
        Ok(response)
    }
}

fn apply_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (key, value) in headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    builder
}

fn send_body(
    builder: ureq::RequestBuilder<ureq::typestate::WithBody>,
    body: Option<Vec<u8>>,
) -> std::result::Result<Response, ureq::Error> {
    match body {
        Some(bytes) => builder.send(&bytes[..]),
        None => builder.send_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names_are_uppercase() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = HttpRequest {
            method: HttpMethod::Post,
            url: "http://localhost:8000/post".to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: None,
        };
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("cookie"), None);
    }
}
