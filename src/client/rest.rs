//! REST request builder shared by every v2 and policy resource

use log::debug;
use reqwest::{Client as HttpClient, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::http::{check_status, decode_json};
use crate::error::{ApiError, Result};

/// Header carrying the personal API token
const TOKEN_HEADER: &str = "Circle-Token";

/// Authenticated JSON client rooted at a base URL.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl RestClient {
    /// Create a client for `base_url` (e.g. `https://circleci.com/api/v2`).
    #[cfg(test)]
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        Ok(Self::with_http(super::http::build_http_client()?, base_url, token))
    }

    /// Create a client sharing an existing HTTP client.
    pub fn with_http(http: HttpClient, base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `path` with auth and content headers applied.
    fn builder(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let token = self.token.as_deref().ok_or(ApiError::Unauthorized)?;
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        Ok(self
            .http
            .request(method, &url)
            .header(TOKEN_HEADER, token)
            .header("Accept", "application/json"))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(ApiError::from)?;
        let response = check_status(response).await?;
        decode_json(response).await
    }

    /// GET `path` with query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let request = self.builder(Method::GET, path)?.query(query);
        self.send(request).await
    }

    /// POST a JSON body to `path`
    pub async fn post<B, T>(&self, path: &str, query: &[(&str, String)], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.builder(Method::POST, path)?.query(query).json(body);
        self.send(request).await
    }

    /// PUT a JSON body to `path`
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.builder(Method::PUT, path)?.json(body);
        self.send(request).await
    }

    /// PATCH a JSON body to `path`
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.builder(Method::PATCH, path)?.json(body);
        self.send(request).await
    }

    /// DELETE `path`
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.builder(Method::DELETE, path)?;
        self.send(request).await
    }
}
