//! Per-call request builder.
//!
//! # Design
//! A `RequestBuilder` is created for one call chain, seeded with the client's
//! base headers. `with_headers` and `with_cookies` consume and return it;
//! every verb consumes it for good, so a builder can never be executed twice
//! or observed after its request left.
//!
//! The verb captures headers, cookies and body into an `HttpRequest` snapshot
//! before anything touches the network.

use serde::Serialize;

use crate::cookie::{cookie_header, Cookie};
use crate::error::{Error, Result};
use crate::http::{Headers, HttpMethod, HttpRequest, Response};
use crate::merge::{combine, MergeStrategy};
use crate::query::encode_query;

const CONTENT_TYPE: &str = "Content-Type";
const COOKIE: &str = "Cookie";
const JSON_MIME: &str = "application/json";

#[derive(Debug, Clone)]
pub struct RequestBuilder<'a> {
    agent: &'a ureq::Agent,
    base_url: &'a str,
    headers: Headers,
    cookies: Vec<Cookie>,
}

impl<'a> RequestBuilder<'a> {
    pub(crate) fn new(agent: &'a ureq::Agent, base_url: &'a str, headers: Headers) -> Self {
        Self {
            agent,
            base_url,
            headers,
            cookies: Vec::new(),
        }
    }

    /// Merge `headers` over the current ones; incoming values win.
    ///
    /// Header names are case-insensitive on the wire, so a current key that
    /// differs from an incoming one only by case is dropped first.
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers.retain(|current, _| {
            !headers
                .keys()
                .any(|incoming| incoming != current && incoming.eq_ignore_ascii_case(current))
        });
        self.headers = combine(Some(&self.headers), Some(&headers), MergeStrategy::Replace);
        self
    }

    /// Replace the cookie set.
    pub fn with_cookies(mut self, cookies: Vec<Cookie>) -> Self {
        self.cookies = cookies;
        self
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn cookies(&self) -> &[Cookie] {
        &self.cookies
    }

    /// Retrieve a resource. `params` is flattened into the query string; pass
    /// `&()` or a `None` for no params.
    pub fn get<P: Serialize + ?Sized>(self, endpoint: &str, params: &P) -> Result<Response> {
        let query = encode_query(params)?;
        let uri = if query.is_empty() {
            endpoint.to_string()
        } else {
            format!("{endpoint}?{query}")
        };
        self.exec(HttpMethod::Get, &uri, None)
    }

    /// Create a resource from a JSON-encoded body.
    pub fn post<B: Serialize + ?Sized>(self, endpoint: &str, body: &B) -> Result<Response> {
        self.exec_json(HttpMethod::Post, endpoint, body)
    }

    /// `post` with caller-encoded bytes, e.g. a file upload.
    pub fn post_raw(self, endpoint: &str, raw: Vec<u8>) -> Result<Response> {
        self.exec(HttpMethod::Post, endpoint, Some(raw))
    }

    /// Create or update a resource from a JSON-encoded body.
    pub fn put<B: Serialize + ?Sized>(self, endpoint: &str, body: &B) -> Result<Response> {
        self.exec_json(HttpMethod::Put, endpoint, body)
    }

    pub fn put_raw(self, endpoint: &str, raw: Vec<u8>) -> Result<Response> {
        self.exec(HttpMethod::Put, endpoint, Some(raw))
    }

    /// Partially update a resource from a JSON-encoded body.
    pub fn patch<B: Serialize + ?Sized>(self, endpoint: &str, body: &B) -> Result<Response> {
        self.exec_json(HttpMethod::Patch, endpoint, body)
    }

    pub fn patch_raw(self, endpoint: &str, raw: Vec<u8>) -> Result<Response> {
        self.exec(HttpMethod::Patch, endpoint, Some(raw))
    }

    pub fn delete(self, endpoint: &str) -> Result<Response> {
        self.exec(HttpMethod::Delete, endpoint, None)
    }

    fn exec_json<B: Serialize + ?Sized>(
        mut self,
        method: HttpMethod,
        endpoint: &str,
        body: &B,
    ) -> Result<Response> {
        let raw = serde_json::to_vec(body).map_err(Error::Serialization)?;
        if find_header(&self.headers, CONTENT_TYPE).is_none() {
            self.headers.insert(CONTENT_TYPE.to_string(), JSON_MIME.to_string());
        }
        self.exec(method, endpoint, Some(raw))
    }

    fn exec(self, method: HttpMethod, uri: &str, body: Option<Vec<u8>>) -> Result<Response> {
        let agent = self.agent;
        self.prepare(method, uri, body).send(agent)
    }

    /// Snapshot the builder into a plain request.
    fn prepare(self, method: HttpMethod, uri: &str, body: Option<Vec<u8>>) -> HttpRequest {
        let mut headers: Vec<(String, String)> = self.headers.into_iter().collect();
        headers.sort();

        if let Some(pairs) = cookie_header(&self.cookies) {
            match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(COOKIE)) {
                Some((_, existing)) if !existing.is_empty() => {
                    existing.push_str("; ");
                    existing.push_str(&pairs);
                }
                Some((_, existing)) => *existing = pairs,
                None => headers.push((COOKIE.to_string(), pairs)),
            }
        }

        HttpRequest {
            method,
            url: format!("{}{}", self.base_url, uri),
            headers,
            body,
        }
    }
}

fn find_header<'h>(headers: &'h Headers, name: &str) -> Option<&'h str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}
