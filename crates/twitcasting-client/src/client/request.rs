use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response};
use serde::Serialize;

use super::*;
use crate::TwitCastingError;
use crate::credentials::AuthMode;

const API_VERSION_HEADER: &str = "X-Api-Version";
const APPLICATION_JSON: &str = "application/json";

impl ApiClient {
    /// Execute a GET request with API headers.
    pub async fn get(&self, path: &str, auth: AuthMode) -> Result<Response, TwitCastingError> {
        self.execute(Method::GET, path, None, auth).await
    }

    /// Execute a POST request with API headers and JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        auth: AuthMode,
    ) -> Result<Response, TwitCastingError> {
        let body = self.encode_body(path, body)?;
        self.execute(Method::POST, path, Some(body), auth).await
    }

    /// Execute a PUT request with API headers and JSON body.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        auth: AuthMode,
    ) -> Result<Response, TwitCastingError> {
        let body = self.encode_body(path, body)?;
        self.execute(Method::PUT, path, Some(body), auth).await
    }

    /// Execute a DELETE request with API headers. Parameters travel in `path`'s query.
    pub async fn delete(&self, path: &str, auth: AuthMode) -> Result<Response, TwitCastingError> {
        self.execute(Method::DELETE, path, None, auth).await
    }

    /// POST an `application/x-www-form-urlencoded` body without API or auth headers.
    ///
    /// Only the OAuth token endpoint takes this shape.
    pub(crate) async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<Response, TwitCastingError> {
        self.logger.debug("sending form request", &(Method::POST, path));
        self.http
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .map_err(|e| {
                self.logger.error("request failed", &(Method::POST, path, &e));
                TwitCastingError::from(e)
            })
    }

    fn encode_body<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Vec<u8>, TwitCastingError> {
        serde_json::to_vec(body).map_err(|e| {
            self.logger.error("encode request body failed", &(path, &e));
            TwitCastingError::from(e)
        })
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        auth: AuthMode,
    ) -> Result<Response, TwitCastingError> {
        let authorization = self.credentials.authorization(auth).inspect_err(|e| {
            self.logger.error("authorization unavailable", &(&method, path, e));
        })?;

        self.logger.debug("sending request", &(&method, path, auth));

        let mut request = self
            .http
            .request(method.clone(), self.url(path))
            .header(API_VERSION_HEADER, API_VERSION)
            .header(ACCEPT, APPLICATION_JSON)
            .header(AUTHORIZATION, authorization);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, APPLICATION_JSON).body(body);
        }

        request.send().await.map_err(|e| {
            self.logger.error("request failed", &(&method, path, &e));
            TwitCastingError::from(e)
        })
    }
}
