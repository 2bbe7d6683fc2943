use std::future::Future;

use anyhow::Context;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

pub use crate::document::{Document, Fragment};

mod document;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait GraphQlClient: Send + Sync + 'static {
    /// Send a single GraphQL request and return the `data` of the response.
    ///
    /// Fails if the request could not be delivered or if the response
    /// carries top-level GraphQL errors.
    fn execute(
        &self,
        request: GraphQlRequest,
    ) -> impl Future<Output = anyhow::Result<serde_json::Value>> + Send;
}

pub trait GraphQlClientExt: GraphQlClient {
    /// Execute the given document and deserialize the returned `data`.
    fn fetch<T>(
        &self,
        document: &Document,
        variables: serde_json::Value,
    ) -> impl Future<Output = anyhow::Result<T>> + Send
    where
        T: DeserializeOwned + Send,
    {
        let request = GraphQlRequest::new(document, variables);
        async move {
            let data = self.execute(request).await?;
            serde_json::from_value(data).context("Failed to deserialize graphql response data")
        }
    }
}

impl<C: GraphQlClient + ?Sized> GraphQlClientExt for C {}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    pub variables: serde_json::Value,
}

impl GraphQlRequest {
    pub fn new(document: &Document, variables: serde_json::Value) -> Self {
        Self {
            query: document.render(),
            operation_name: Some(document.operation_name.into()),
            variables,
        }
    }
}

/// The response envelope of a GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("GraphQL request failed: {}", .0.iter().map(|err| err.message.as_str()).collect::<Vec<_>>().join("; "))]
pub struct GraphQlResponseError(pub Vec<GraphQlError>);

impl GraphQlResponse {
    /// Returns the `data` of the response.
    ///
    /// Top-level errors only fail the response if no `data` was returned.
    pub fn into_data(self) -> Result<serde_json::Value, GraphQlResponseError> {
        match self.data {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(GraphQlResponseError(self.errors)),
        }
    }
}

#[cfg(any(test, feature = "mock"))]
impl MockGraphQlClient {
    pub fn with_execute(mut self, request: GraphQlRequest, result: serde_json::Value) -> Self {
        self.expect_execute()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_execute_error(mut self, request: GraphQlRequest, error: anyhow::Error) -> Self {
        self.expect_execute()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(Err(error))));
        self
    }
}
