//! Thin synchronous JSON client over `ureq`.
//!
//! # Overview
//! A `Client` carries a base URL and base headers. Each call builds a fresh
//! `RequestBuilder`, optionally adds headers and cookies, then performs one
//! HTTP round trip and returns the raw response. `decode_json_body` and
//! `is_status_ok` cover the common response handling.
//!
//! ```no_run
//! use restkit::{decode_json_body, is_status_ok, Client, Config, Headers};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Reply {
//!     data: String,
//! }
//!
//! let mut client = Client::new(Config::new("http://localhost:8000", 3000));
//! client.set_base_headers(Headers::from([("X-API-Key".into(), "key".into())]));
//!
//! let resp = client.get("/get", &())?;
//! if is_status_ok(&resp) {
//!     let reply: Reply = decode_json_body(resp)?;
//!     println!("{}", reply.data);
//! }
//! # Ok::<(), restkit::Error>(())
//! ```
//!
//! # Design
//! - No retries, no connection management beyond the agent's own pooling.
//! - Non-2xx statuses are returned as responses, never as errors.
//! - Header collisions are resolved by `combine` under a `MergeStrategy`;
//!   per-call headers always use `Replace`.

pub mod client;
pub mod config;
pub mod cookie;
pub mod error;
pub mod http;
pub mod merge;
pub mod query;
pub mod request;
pub mod response;

pub use client::Client;
pub use config::Config;
pub use cookie::Cookie;
pub use error::{Error, Result};
pub use http::{Headers, HttpMethod, HttpRequest, Response};
pub use merge::{combine, MergeStrategy};
pub use query::encode_query;
pub use request::RequestBuilder;
pub use response::{decode_json_body, is_status_ok, is_success_status};
