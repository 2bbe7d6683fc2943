use std::sync::Arc;

use anyhow::Context;
use storefront_graphql_contracts::{GraphQlClient, GraphQlRequest, GraphQlResponse};
use tracing::{trace, warn};
use url::Url;

use crate::http::HttpClient;

pub mod http;

#[derive(Debug, Clone)]
pub struct GraphQlClientImpl {
    config: GraphQlClientConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct GraphQlClientConfig {
    pub endpoint: Arc<Url>,
}

impl GraphQlClientImpl {
    pub fn new(config: GraphQlClientConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            http: HttpClient::new().context("Failed to build http client")?,
        })
    }
}

impl GraphQlClient for GraphQlClientImpl {
    async fn execute(&self, request: GraphQlRequest) -> anyhow::Result<serde_json::Value> {
        trace!(
            endpoint = %self.config.endpoint,
            operation = request.operation_name.as_deref(),
            "sending graphql request"
        );

        let response = self
            .http
            .post((*self.config.endpoint).clone())
            .json(&request)
            .send()
            .await
            .context("Failed to send graphql request")?
            .error_for_status()
            .context("Graphql request returned an error")?
            .json::<GraphQlResponse>()
            .await
            .context("Failed to deserialize graphql response")?;

        if !response.errors.is_empty() {
            warn!(
                operation = request.operation_name.as_deref(),
                errors = ?response.errors,
                "graphql response carries errors"
            );
        }

        response.into_data().map_err(Into::into)
    }
}
