//! CircleCI API client implementation
//!
//! One client speaks to all three services: REST v2, the v1 policy service
//! and GraphQL. Trait implementations live in per-resource modules.

mod compile;
mod context;
mod info;
mod orb;
mod pipeline;
mod policy;
mod project;
mod repository;
mod schedule;
mod trigger;

use log::debug;

use super::graphql::GraphQLClient;
use super::http::build_http_client;
use super::rest::RestClient;
use crate::config::Config;
use crate::error::Result;

/// CircleCI API client
#[derive(Debug, Clone)]
pub struct CircleCiClient {
    rest: RestClient,
    policy: RestClient,
    graphql: GraphQLClient,
}

impl CircleCiClient {
    /// Build a client from resolved settings.
    ///
    /// The token is optional here; REST calls without one fail with
    /// `Unauthorized` and GraphQL calls go out anonymously.
    pub fn new(config: &Config) -> Result<Self> {
        let http = build_http_client()?;
        let token = config.token.clone().filter(|t| !t.is_empty());

        let rest_url = config.rest_url()?;
        let policy_url = config.policy_url()?;
        let graphql_url = config.graphql_url()?;
        debug!("REST {}, policy {}, GraphQL {}", rest_url, policy_url, graphql_url);

        Ok(Self {
            rest: RestClient::with_http(http.clone(), rest_url, token.clone()),
            policy: RestClient::with_http(http.clone(), policy_url, token.clone()),
            graphql: GraphQLClient::with_http(http, graphql_url, token),
        })
    }

    /// Whether a token was configured
    #[cfg(test)]
    pub fn is_authenticated(&self) -> bool {
        self.graphql.is_authenticated()
    }
}

#[cfg(test)]
pub(crate) fn test_client(host: &str) -> CircleCiClient {
    let config = Config {
        host: host.to_string(),
        token: Some("test-token".to_string()),
        ..Default::default()
    };
    CircleCiClient::new(&config).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_host_without_scheme() {
        let config = Config {
            host: "circleci.com".to_string(),
            ..Default::default()
        };
        assert!(CircleCiClient::new(&config).is_err());
    }

    #[test]
    fn test_empty_token_is_anonymous() {
        let config = Config {
            token: Some(String::new()),
            ..Default::default()
        };
        assert!(!CircleCiClient::new(&config).unwrap().is_authenticated());
        assert!(test_client("http://localhost").is_authenticated());
    }
}
