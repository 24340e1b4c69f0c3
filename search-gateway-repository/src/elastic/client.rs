//! Elasticsearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! over the engine's plain HTTP REST API with basic authentication.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use tracing::{debug, error, info};
use url::Url;

use crate::config::EngineConfig;
use crate::elastic::{index_config, queries};
use crate::errors::EngineError;
use crate::interfaces::SearchEngineClient;
use search_gateway_shared::Employee;

/// Marker the engine puts in the body when an index already exists.
const ALREADY_EXISTS_MARKER: &str = "resource_already_exists_exception";

/// Elasticsearch client implementation.
///
/// Every operation is a single synchronous HTTP round trip: build one
/// request through [`ElasticClient::request`], send it, read the full body,
/// log it, and map the outcome into an `EngineError` or a decoded payload.
///
/// # Example
///
/// ```ignore
/// let config = EngineConfig::with_base_url("http://localhost:9200");
/// let client = ElasticClient::new(config)?;
/// client.ensure_index_exists().await?;
/// let hits = client.search("Vadul").await?;
/// ```
pub struct ElasticClient {
    http: reqwest::Client,
    config: EngineConfig,
}

/// Engine search response, narrowed to the parts the gateway reads.
#[derive(Debug, Deserialize)]
struct SearchResponseBody {
    hits: HitList,
}

#[derive(Debug, Deserialize)]
struct HitList {
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: Employee,
}

/// Engine get-by-id response.
#[derive(Debug, Deserialize)]
struct GetResponseBody {
    #[serde(rename = "_source")]
    source: Option<Employee>,
}

impl ElasticClient {
    /// Create a new client for the engine described by `config`.
    ///
    /// # Returns
    ///
    /// * `Ok(ElasticClient)` - A new client instance
    /// * `Err(EngineError::RequestError)` - If the base URL is invalid
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Url::parse(&config.base_url)
            .map_err(|e| EngineError::request(format!("invalid base URL: {}", e)))?;

        info!(url = %config.base_url, index = %config.index, "Created engine client");

        Ok(Self {
            http: reqwest::Client::new(),
            config,
        })
    }

    /// Build a request for the given method and engine path.
    ///
    /// All outbound requests go through here so the basic-auth credentials
    /// and JSON content type are attached in exactly one place.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        self.http
            .request(method, url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header(CONTENT_TYPE, "application/json")
    }

    /// Send a request, read the full body, and log it.
    ///
    /// Transport failures map to `ConnectionError`, body-read failures to
    /// `ResponseReadError`. Status handling is left to the caller since it
    /// differs per operation (404 is fine for delete, fatal for update).
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(StatusCode, String), EngineError> {
        let response = request
            .send()
            .await
            .map_err(|e| EngineError::connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| EngineError::response_read(e.to_string()))?;

        debug!(status = %status, body = %body, "engine response");

        Ok((status, body))
    }

    /// Insert `count` synthetic employee documents starting at id `start`.
    ///
    /// Local-testing helper: names and addresses are `person{id}` and
    /// `address{id}`, salary is `id * 100`.
    pub async fn seed_documents(&self, start: i64, count: i64) -> Result<(), EngineError> {
        for id in start..start + count {
            let employee = Employee::new(
                id,
                format!("person{}", id),
                format!("address{}", id),
                id as f64 * 100.0,
            );
            self.insert_document(&employee).await?;
        }

        info!(start, count, "Seeded employee documents");
        Ok(())
    }
}

#[async_trait]
impl SearchEngineClient for ElasticClient {
    /// Check that the engine answers at its base address.
    ///
    /// Any response counts as healthy, including engine-side errors; only a
    /// transport failure is reported as unreachable.
    async fn health_check(&self) -> Result<bool, EngineError> {
        self.send(self.request(Method::GET, "")).await?;
        Ok(true)
    }

    /// Create the employee index with its fixed mapping.
    ///
    /// Idempotent: an `resource_already_exists_exception` response from the
    /// engine counts as success.
    async fn ensure_index_exists(&self) -> Result<(), EngineError> {
        let path = format!("/{}", self.config.index);
        let request = self
            .request(Method::PUT, &path)
            .json(&index_config::mapping_body());

        let (status, body) = self.send(request).await?;

        if status.is_success() {
            info!(index = %self.config.index, "Index created");
            return Ok(());
        }

        if body.contains(ALREADY_EXISTS_MARKER) {
            debug!(index = %self.config.index, "Index already exists");
            return Ok(());
        }

        error!(status = %status, body = %body, "Index creation failed");
        Err(EngineError::engine(format!(
            "index creation failed with status {}: {}",
            status, body
        )))
    }

    /// Index an employee document at its id-keyed path, replacing any
    /// existing document with the same id. Uses `refresh=true` so the
    /// document is immediately visible to reads.
    async fn insert_document(&self, employee: &Employee) -> Result<(), EngineError> {
        let path = format!("/{}/_doc/{}?refresh=true", self.config.index, employee.id);
        let request = self.request(Method::PUT, &path).json(employee);

        let (status, body) = self.send(request).await?;

        if !status.is_success() {
            error!(status = %status, body = %body, id = employee.id, "Insert failed");
            return Err(EngineError::engine(format!(
                "insert failed with status {}: {}",
                status, body
            )));
        }

        debug!(id = employee.id, "Document indexed");
        Ok(())
    }

    /// Partially update an existing document with `{"doc": record}`.
    async fn update_document(&self, employee: &Employee) -> Result<(), EngineError> {
        let path = format!("/{}/_update/{}", self.config.index, employee.id);
        let request = self
            .request(Method::POST, &path)
            .json(&queries::build_update_body(employee));

        let (status, body) = self.send(request).await?;

        if status == StatusCode::NOT_FOUND {
            return Err(EngineError::document_not_found(employee.id));
        }

        if !status.is_success() {
            error!(status = %status, body = %body, id = employee.id, "Update failed");
            return Err(EngineError::engine(format!(
                "update failed with status {}: {}",
                status, body
            )));
        }

        debug!(id = employee.id, "Document updated");
        Ok(())
    }

    /// Delete a document by id. A 404 is not an error since the document
    /// may never have existed.
    async fn delete_document(&self, id: i64) -> Result<(), EngineError> {
        let path = format!("/{}/_doc/{}", self.config.index, id);

        let (status, body) = self.send(self.request(Method::DELETE, &path)).await?;

        if !status.is_success() && status != StatusCode::NOT_FOUND {
            error!(status = %status, body = %body, id, "Delete failed");
            return Err(EngineError::engine(format!(
                "delete failed with status {}: {}",
                status, body
            )));
        }

        debug!(id, "Document deleted");
        Ok(())
    }

    /// Fetch a document by id, returning `None` if it does not exist.
    async fn fetch_document(&self, id: i64) -> Result<Option<Employee>, EngineError> {
        let path = format!("/{}/_doc/{}", self.config.index, id);

        let (status, body) = self.send(self.request(Method::GET, &path)).await?;

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            error!(status = %status, body = %body, id, "Fetch failed");
            return Err(EngineError::engine(format!(
                "fetch failed with status {}: {}",
                status, body
            )));
        }

        let decoded: GetResponseBody = serde_json::from_str(&body)
            .map_err(|e| EngineError::parse(format!("invalid get response: {}", e)))?;

        Ok(decoded.source)
    }

    /// Run a match query on the `name` field and extract each hit's
    /// `_source`, preserving the engine's relevance order. An empty hit
    /// list yields an empty vector.
    async fn search(&self, keyword: &str) -> Result<Vec<Employee>, EngineError> {
        let path = format!("/{}/_search", self.config.index);
        let request = self
            .request(Method::GET, &path)
            .json(&queries::build_match_query(keyword));

        let (status, body) = self.send(request).await?;

        if !status.is_success() {
            error!(status = %status, body = %body, keyword, "Search failed");
            return Err(EngineError::engine(format!(
                "search failed with status {}: {}",
                status, body
            )));
        }

        let decoded: SearchResponseBody = serde_json::from_str(&body)
            .map_err(|e| EngineError::parse(format!("invalid search response: {}", e)))?;

        Ok(decoded
            .hits
            .hits
            .into_iter()
            .map(|hit| hit.source)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use httpmock::Method;
    use serde_json::json;

    // base64("elastic:ELASTIC_PASSWORD")
    const AUTH_HEADER: &str = "Basic ZWxhc3RpYzpFTEFTVElDX1BBU1NXT1JE";

    fn test_client(server: &MockServer) -> ElasticClient {
        let config = EngineConfig::with_base_url(server.base_url())
            .with_credentials("elastic", "ELASTIC_PASSWORD")
            .with_index("employee");
        ElasticClient::new(config).unwrap()
    }

    fn sample_employee() -> Employee {
        Employee::new(38118545, "Vadul lui Voda", "Chisinau", 1200.0)
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let config = EngineConfig::with_base_url("not a url");

        let result = ElasticClient::new(config);

        assert!(matches!(result, Err(EngineError::RequestError(_))));
    }

    #[tokio::test]
    async fn test_health_check_attaches_basic_auth() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(Method::GET).path("/").header("authorization", AUTH_HEADER);
            then.status(200).json_body(json!({"cluster_name": "test"}));
        });

        let healthy = test_client(&server).health_check().await.unwrap();

        assert!(healthy);
        mock.assert();
    }

    #[tokio::test]
    async fn test_health_check_engine_error_is_still_reachable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::GET).path("/");
            then.status(503).body("unavailable");
        });

        // Any response from the engine counts; only transport failure fails.
        let healthy = test_client(&server).health_check().await.unwrap();

        assert!(healthy);
    }

    #[tokio::test]
    async fn test_health_check_unreachable_engine() {
        // Nothing listens on this port.
        let config = EngineConfig::with_base_url("http://127.0.0.1:1");
        let client = ElasticClient::new(config).unwrap();

        let result = client.health_check().await;

        assert!(matches!(result, Err(EngineError::ConnectionError(_))));
    }

    #[tokio::test]
    async fn test_ensure_index_exists_sends_mapping() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(Method::PUT)
                .path("/employee")
                .header("authorization", AUTH_HEADER)
                .json_body(index_config::mapping_body());
            then.status(200)
                .json_body(json!({"acknowledged": true, "index": "employee"}));
        });

        test_client(&server).ensure_index_exists().await.unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_ensure_index_exists_tolerates_existing_index() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::PUT).path("/employee");
            then.status(400).json_body(json!({
                "error": {"type": "resource_already_exists_exception"}
            }));
        });

        let result = test_client(&server).ensure_index_exists().await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_ensure_index_exists_surfaces_other_failures() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::PUT).path("/employee");
            then.status(500).body("boom");
        });

        let result = test_client(&server).ensure_index_exists().await;

        assert!(matches!(result, Err(EngineError::EngineReportedError(_))));
    }

    #[tokio::test]
    async fn test_insert_document() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(Method::PUT)
                .path("/employee/_doc/38118545")
                .query_param("refresh", "true")
                .header("authorization", AUTH_HEADER)
                .json_body(json!({
                    "id": 38118545,
                    "name": "Vadul lui Voda",
                    "address": "Chisinau",
                    "salary": 1200.0
                }));
            then.status(201).json_body(json!({"result": "created"}));
        });

        test_client(&server)
            .insert_document(&sample_employee())
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_insert_document_engine_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::PUT).path("/employee/_doc/38118545");
            then.status(500).body("boom");
        });

        let result = test_client(&server)
            .insert_document(&sample_employee())
            .await;

        assert!(matches!(result, Err(EngineError::EngineReportedError(_))));
    }

    #[tokio::test]
    async fn test_update_document_wraps_record_in_doc() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(Method::POST)
                .path("/employee/_update/38118545")
                .json_body(json!({
                    "doc": {
                        "id": 38118545,
                        "name": "Vadul lui Voda",
                        "address": "Chisinau",
                        "salary": 1200.0
                    }
                }));
            then.status(200).json_body(json!({"result": "updated"}));
        });

        test_client(&server)
            .update_document(&sample_employee())
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_update_missing_document() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::POST).path("/employee/_update/38118545");
            then.status(404).json_body(json!({
                "error": {"type": "document_missing_exception"}
            }));
        });

        let result = test_client(&server)
            .update_document(&sample_employee())
            .await;

        assert!(matches!(result, Err(EngineError::DocumentNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_document() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(Method::DELETE)
                .path("/employee/_doc/42")
                .header("authorization", AUTH_HEADER);
            then.status(200).json_body(json!({"result": "deleted"}));
        });

        test_client(&server).delete_document(42).await.unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_delete_absent_document_is_not_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::DELETE).path("/employee/_doc/99999999");
            then.status(404).json_body(json!({"result": "not_found"}));
        });

        let result = test_client(&server).delete_document(99999999).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_document_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::GET).path("/employee/_doc/38118545");
            then.status(200).json_body(json!({
                "found": true,
                "_source": {
                    "id": 38118545,
                    "name": "Vadul lui Voda",
                    "address": "Chisinau",
                    "salary": 1200.0
                }
            }));
        });

        let fetched = test_client(&server).fetch_document(38118545).await.unwrap();

        assert_eq!(fetched, Some(sample_employee()));
    }

    #[tokio::test]
    async fn test_fetch_missing_document_returns_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::GET).path("/employee/_doc/99999999");
            then.status(404).json_body(json!({"found": false}));
        });

        let fetched = test_client(&server).fetch_document(99999999).await.unwrap();

        assert_eq!(fetched, None);
    }

    #[tokio::test]
    async fn test_search_preserves_engine_order() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(Method::GET)
                .path("/employee/_search")
                .json_body(json!({"query": {"match": {"name": "Voda"}}}));
            then.status(200).json_body(json!({
                "hits": {
                    "hits": [
                        {"_score": 2.1, "_source": {
                            "id": 38118545, "name": "Vadul lui Voda",
                            "address": "Chisinau", "salary": 1200.0
                        }},
                        {"_score": 1.4, "_source": {
                            "id": 38784049, "name": "Центр рышкановки",
                            "address": "Chisinau", "salary": 950.5
                        }}
                    ]
                }
            }));
        });

        let results = test_client(&server).search("Voda").await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, 38118545);
        assert_eq!(results[0].name, "Vadul lui Voda");
        assert_eq!(results[1].id, 38784049);
        mock.assert();
    }

    #[tokio::test]
    async fn test_search_no_matches_returns_empty_vec() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::GET).path("/employee/_search");
            then.status(200).json_body(json!({"hits": {"hits": []}}));
        });

        let results = test_client(&server).search("nobody").await.unwrap();

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_search_engine_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::GET).path("/employee/_search");
            then.status(500).body("boom");
        });

        let result = test_client(&server).search("Voda").await;

        assert!(matches!(result, Err(EngineError::EngineReportedError(_))));
    }

    #[tokio::test]
    async fn test_search_malformed_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::GET).path("/employee/_search");
            then.status(200).body("not json");
        });

        let result = test_client(&server).search("Voda").await;

        assert!(matches!(result, Err(EngineError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_seed_documents_inserts_each_id() {
        let server = MockServer::start();
        let first = server.mock(|when, then| {
            when.method(Method::PUT)
                .path("/employee/_doc/10")
                .json_body(json!({
                    "id": 10, "name": "person10",
                    "address": "address10", "salary": 1000.0
                }));
            then.status(201).json_body(json!({"result": "created"}));
        });
        let second = server.mock(|when, then| {
            when.method(Method::PUT).path("/employee/_doc/11");
            then.status(201).json_body(json!({"result": "created"}));
        });

        test_client(&server).seed_documents(10, 2).await.unwrap();

        first.assert();
        second.assert();
    }
}
