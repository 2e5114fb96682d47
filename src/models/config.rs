//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::forms::search::QueryEncoding;

#[derive(Clone, Debug, Deserialize)]
/// Settings of the customers console.
pub struct ClientConfig {
    /// Root of the remote customers service, e.g. `http://localhost:8080`.
    pub base_url: String,
    #[serde(default)]
    pub query_encoding: QueryEncoding,
}
