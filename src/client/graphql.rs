//! GraphQL transport adapter.
//!
//! One method, [`TurbotClient::execute`], owns the whole wire exchange:
//! build the `{query, variables}` body, attach the basic-auth and no-cache
//! headers, POST to the workspace endpoint, and split the `{data, errors}`
//! envelope. Errors are returned raw here; operation context is added by the
//! resource facade one layer up.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::client::errors::{Error, GraphqlErrors, GraphqlResponseError};
use crate::client::TurbotClient;

/// The `{data, errors}` response envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlResponseError>,
}

impl TurbotClient {
    /// Executes one GraphQL request and decodes `data` into `T`.
    ///
    /// Exactly one outbound call per invocation: no retries, no caching, no
    /// timeout beyond the transport default.
    ///
    /// # Errors
    ///
    /// - [`Error::Network`] if the request could not be sent or the body not
    ///   read.
    /// - [`Error::Response`] for a non-success HTTP status, carrying the raw
    ///   body.
    /// - [`Error::Graphql`] if the envelope carries a non-empty error list.
    /// - [`Error::Decode`] if the envelope or `data` cannot be decoded.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<T, Error> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        tracing::debug!(endpoint = %self.endpoint(), "dispatching GraphQL request");

        let response = self
            .http()
            .post(self.endpoint())
            .header("Authorization", self.authorization())
            .header("Cache-Control", "no-cache")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Error::Response {
                code: status.as_u16(),
                message: text,
            });
        }

        // Split the envelope before decoding `data`, so a server error list
        // is never masked by a shape mismatch in a partial `data` object.
        let envelope: Envelope =
            serde_json::from_str(&text).map_err(|e| Error::Decode(e.to_string()))?;

        if !envelope.errors.is_empty() {
            let errors = GraphqlErrors(envelope.errors);
            tracing::warn!(%errors, "GraphQL request returned errors");
            return Err(Error::Graphql(errors));
        }

        let data = envelope
            .data
            .ok_or_else(|| Error::Decode("response contained neither data nor errors".to_string()))?;
        serde_json::from_value(data).map_err(|e| Error::Decode(e.to_string()))
    }
}
