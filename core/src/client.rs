//! Client facade over the request builder.
//!
//! # Design
//! `Client` holds the transport agent, the base URL and the base headers, and
//! nothing else survives between calls. Each verb builds a fresh
//! `RequestBuilder` seeded with a copy of the base headers, so concurrent
//! callers share only immutable state. `set_base_headers` takes `&mut self`,
//! which keeps configuration changes from racing with in-flight reads.

use serde::Serialize;

use crate::config::Config;
use crate::cookie::Cookie;
use crate::error::Result;
use crate::http::{Headers, Response};
use crate::request::RequestBuilder;

#[derive(Debug, Clone)]
pub struct Client {
    agent: ureq::Agent,
    base_url: String,
    base_headers: Headers,
}

impl Client {
    pub fn new(config: Config) -> Self {
        // Non-2xx statuses come back as responses for the caller to classify.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout_duration())
            .build()
            .new_agent();

        tracing::debug!(host = %config.host, timeout_ms = config.timeout, "client created");

        Self {
            agent,
            base_url: config.host,
            base_headers: Headers::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn base_headers(&self) -> &Headers {
        &self.base_headers
    }

    /// Replace the headers applied to every request.
    pub fn set_base_headers(&mut self, headers: Headers) {
        self.base_headers = headers;
    }

    /// Start a request with extra headers merged over the base headers.
    pub fn with_headers(&self, headers: Headers) -> RequestBuilder<'_> {
        self.request().with_headers(headers)
    }

    /// Start a request carrying `cookies`.
    pub fn with_cookies(&self, cookies: Vec<Cookie>) -> RequestBuilder<'_> {
        self.request().with_cookies(cookies)
    }

    pub fn get<P: Serialize + ?Sized>(&self, endpoint: &str, params: &P) -> Result<Response> {
        self.request().get(endpoint, params)
    }

    pub fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Response> {
        self.request().post(endpoint, body)
    }

    pub fn post_raw(&self, endpoint: &str, raw: Vec<u8>) -> Result<Response> {
        self.request().post_raw(endpoint, raw)
    }

    pub fn put<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Response> {
        self.request().put(endpoint, body)
    }

    pub fn put_raw(&self, endpoint: &str, raw: Vec<u8>) -> Result<Response> {
        self.request().put_raw(endpoint, raw)
    }

    pub fn patch<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Response> {
        self.request().patch(endpoint, body)
    }

    pub fn patch_raw(&self, endpoint: &str, raw: Vec<u8>) -> Result<Response> {
        self.request().patch_raw(endpoint, raw)
    }

    pub fn delete(&self, endpoint: &str) -> Result<Response> {
        self.request().delete(endpoint)
    }

    fn request(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(&self.agent, &self.base_url, self.base_headers.clone())
    }
}
