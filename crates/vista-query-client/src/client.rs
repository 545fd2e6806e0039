// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::envelope::decode_envelope;
use crate::schema::{build_catalog, build_styles, EdgeLabelRecord, Page, PropertyKeyRecord, VertexLabelRecord};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};
use vista_app_core::prefs::BackendPrefs;
use vista_filter::{AdjacencyQuery, QueryBackend, QueryError, SchemaCatalog, StyleMappings};
use vista_graph::GraphView;

/// Errors building the HTTP client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL is not an `http(s)://` URL.
    #[error("invalid base url: {0}")]
    BaseUrl(String),
    /// The underlying HTTP client could not be created.
    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Schema catalog plus style tables, fetched together.
#[derive(Debug, Clone, Default)]
pub struct SchemaBundle {
    /// Edge-type property lists and property kinds.
    pub catalog: SchemaCatalog,
    /// Vertex/edge type styles.
    pub styles: StyleMappings,
}

#[derive(Deserialize)]
struct AdjacencyData {
    graph_view: GraphView,
}

/// Query backend over HTTP, scoped to one graph connection.
#[derive(Debug, Clone)]
pub struct HttpQueryClient {
    http: Client,
    base_url: String,
    connection_id: u32,
}

impl HttpQueryClient {
    /// Client for `base_url` (scheme + host, no trailing path) and a graph connection.
    pub fn new(base_url: &str, connection_id: u32, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = base_url.trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::BaseUrl(base_url.to_owned()));
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.to_owned(),
            connection_id,
        })
    }

    /// Client from saved backend preferences.
    pub fn from_prefs(prefs: &BackendPrefs) -> Result<Self, ClientError> {
        Self::new(
            &prefs.base_url,
            prefs.connection_id,
            Duration::from_secs(prefs.timeout_secs),
        )
    }

    /// Absolute URL of a path under this graph connection.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/api/v1.2/graph-connections/{}/{}",
            self.base_url,
            self.connection_id,
            path.trim_start_matches('/')
        )
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, QueryError> {
        let response = request
            .send()
            .await
            .map_err(|e| QueryError::transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| QueryError::transport(e.to_string()))?;
        debug!(status, bytes = body.len(), "backend response");
        decode_envelope(status, &body)
    }

    async fn records<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, QueryError> {
        let request = self.http.get(self.url(path)).query(&[("page_size", "-1")]);
        let page: Page<T> = self.send(request).await?;
        Ok(page.records)
    }

    /// Fetch property keys, vertex labels and edge labels and build the
    /// catalog and style tables from them.
    #[instrument(skip(self), fields(connection = self.connection_id))]
    pub async fn fetch_schema(&self) -> Result<SchemaBundle, QueryError> {
        let keys: Vec<PropertyKeyRecord> = self.records("schema/propertykeys").await?;
        let vertices: Vec<VertexLabelRecord> = self.records("schema/vertexlabels").await?;
        let edges: Vec<EdgeLabelRecord> = self.records("schema/edgelabels").await?;
        let catalog = build_catalog(&keys, &edges);
        let styles = build_styles(vertices, edges);
        Ok(SchemaBundle { catalog, styles })
    }
}

impl QueryBackend for HttpQueryClient {
    async fn query_adjacency(&self, query: &AdjacencyQuery) -> Result<GraphView, QueryError> {
        let request = self.http.put(self.url("graph/adjacency")).json(query);
        let data: AdjacencyData = self.send(request).await?;
        Ok(data.graph_view)
    }
}
