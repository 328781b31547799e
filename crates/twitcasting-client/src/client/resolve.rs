use std::fmt::Debug;

use reqwest::Response;
use serde::de::DeserializeOwned;

use super::*;
use crate::api::models::ErrorResponse;
use crate::{ApiResult, TwitCastingError};

/// Success codes for reads, deletes and updates that never create anything.
pub const OK: &[u16] = &[200];
/// Success codes for writes that may create a resource.
pub const CREATED: &[u16] = &[200, 201];

/// Classify a fully-read response body by status code.
///
/// A status in `success_codes` decodes as `T`; anything else decodes as the
/// `{"error": {code, message}}` envelope and becomes [`TwitCastingError::Api`].
/// Malformed JSON on either branch is [`TwitCastingError::Json`].
pub fn decode_outcome<T: DeserializeOwned>(
    status: u16,
    body: &[u8],
    success_codes: &[u16],
) -> ApiResult<T> {
    if success_codes.contains(&status) {
        return Ok(serde_json::from_slice(body)?);
    }

    let envelope: ErrorResponse = serde_json::from_slice(body)?;
    Err(TwitCastingError::Api {
        status,
        error: envelope.error,
    })
}

impl ApiClient {
    /// Read the whole body, then decode it as `T` or as the error envelope.
    ///
    /// The response is consumed on every path.
    pub async fn resolve<T: DeserializeOwned + Debug>(
        &self,
        response: Response,
        success_codes: &[u16],
        operation: &str,
    ) -> ApiResult<T> {
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            self.logger
                .error(&format!("read response body failed for {operation}"), &e);
            TwitCastingError::from(e)
        })?;

        let outcome = decode_outcome::<T>(status, &body, success_codes);
        match &outcome {
            Ok(value) => {
                self.logger.debug(&format!("response for {operation}"), value);
            }
            Err(TwitCastingError::Api { error, .. }) => {
                self.logger
                    .debug(&format!("error response for {operation}"), error);
                self.logger
                    .warn(&format!("API returned an error for {operation}"), &status);
            }
            Err(e) if success_codes.contains(&status) => {
                self.logger
                    .error(&format!("decode response body failed for {operation}"), e);
            }
            Err(e) => {
                self.logger.error(
                    &format!("decode error response body failed for {operation}"),
                    e,
                );
            }
        }
        outcome
    }
}
