/*
[INPUT]:  Raw response bodies and dispatch failures
[OUTPUT]: Typed results, permission errors and API errors
[POS]:    HTTP layer - response decoding shared by endpoint wrappers
[UPDATE]: When the API changes its error shapes
*/

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::http::{Form, FybClient, FybError, Result};
use crate::types::{ApiResponse, PermissionError};

/// Decode a JSON body, keeping the raw text on failure
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| {
        let body = String::from_utf8_lossy(body).into_owned();
        warn!(%body, error = %source, "failed to decode FYB response");
        FybError::Decode { source, body }
    })
}

/// Message of a `{"error": "<message>"}` body, if that is what it is
pub fn permission_error(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<PermissionError>(body)
        .ok()
        .map(|perm| perm.error)
}

/// Decode an authenticated response.
///
/// Falls back to the permission-error shape when the primary shape does not
/// fit, and turns a nonzero `error` field into [`FybError::Api`].
pub fn decode_response<T>(body: &[u8]) -> Result<T>
where
    T: ApiResponse + DeserializeOwned,
{
    let response: T = match serde_json::from_slice(body) {
        Ok(response) => response,
        Err(source) => {
            if let Some(message) = permission_error(body) {
                return Err(FybError::Permission(message));
            }
            let body = String::from_utf8_lossy(body).into_owned();
            warn!(%body, error = %source, "failed to decode FYB response");
            return Err(FybError::Decode { source, body });
        }
    };

    match response.error_code() {
        0 => Ok(response),
        code => Err(FybError::Api {
            code,
            message: response.message().to_string(),
        }),
    }
}

impl FybClient {
    /// GET a public resource and decode it
    pub(crate) async fn get_public<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        let body = self
            .dispatch(Method::GET, resource, Form::new(), false)
            .await?;
        decode_json(&body)
    }

    /// POST a signed form and decode the response
    pub(crate) async fn post_private<T>(&self, resource: &str, payload: Form) -> Result<T>
    where
        T: ApiResponse + DeserializeOwned,
    {
        let body = self
            .dispatch(Method::POST, resource, payload, true)
            .await
            .map_err(surface_permission_error)?;
        decode_response(&body)
    }
}

fn surface_permission_error(err: FybError) -> FybError {
    match err {
        FybError::Status { status, body } => match permission_error(&body) {
            Some(message) => FybError::Permission(message),
            None => FybError::Status { status, body },
        },
        other => other,
    }
}
