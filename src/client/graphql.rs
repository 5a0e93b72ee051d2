//! Generic GraphQL request/response cycle

use log::debug;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::http::{check_status, decode_json};
use crate::error::{ApiError, Result};

/// GraphQL request envelope
#[derive(Debug, Serialize)]
struct GraphQLRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQLError>,
}

/// A single GraphQL error, either top-level or inside a mutation payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphQLError {
    pub message: String,
}

/// Raise payload-level errors returned inside a mutation/query result.
pub fn check_payload_errors(errors: &[GraphQLError]) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::graphql(errors.iter().map(|e| e.message.as_str())).into())
    }
}

/// Client for the CircleCI GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphQLClient {
    http: HttpClient,
    url: String,
    token: Option<String>,
}

impl GraphQLClient {
    /// Create a client posting to `url`. Without a token requests are anonymous.
    #[cfg(test)]
    pub fn new(url: impl Into<String>, token: Option<String>) -> Result<Self> {
        Ok(Self::with_http(super::http::build_http_client()?, url, token))
    }

    /// Create a client sharing an existing HTTP client.
    pub fn with_http(http: HttpClient, url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http,
            url: url.into(),
            token,
        }
    }

    /// Whether requests carry a token
    #[cfg(test)]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Run a query or mutation and decode its `data`.
    pub async fn run<V, T>(&self, query: &str, variables: V) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        debug!("POST {} (graphql)", self.url);

        let mut request = self
            .http
            .post(&self.url)
            .header("Accept", "application/json")
            .json(&GraphQLRequest { query, variables });

        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            request = request.header("Authorization", token);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let response = check_status(response).await?;
        let body: GraphQLResponse<T> = decode_json(response).await?;

        if !body.errors.is_empty() {
            return Err(ApiError::graphql(body.errors.iter().map(|e| e.message.as_str())).into());
        }

        body.data
            .ok_or_else(|| ApiError::InvalidResponse("GraphQL response had no data".into()).into())
    }
}
