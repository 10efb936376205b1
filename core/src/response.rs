//! Status classification and JSON body decoding.

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::http::Response;

/// True iff `code` is in the 2xx range.
pub fn is_success_status(code: u16) -> bool {
    (200..300).contains(&code)
}

/// True iff the response status is 2xx.
pub fn is_status_ok(response: &Response) -> bool {
    is_success_status(response.status().as_u16())
}

/// Read the whole body of `response` and decode it as JSON into `T`.
///
/// The response is consumed, so its body is released whether reading or
/// decoding succeeds or fails.
pub fn decode_json_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    decode_json_reader(response.into_body().into_reader())
}

fn decode_json_reader<T: DeserializeOwned, R: Read>(mut reader: R) -> Result<T> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw).map_err(Error::Read)?;
    drop(reader);
    serde_json::from_slice(&raw).map_err(Error::Decode)
}
