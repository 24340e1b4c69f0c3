//! Configuration types for the engine client.

/// Connection configuration for the search engine.
///
/// Built once at startup and passed into the client constructor; the client
/// never reads the environment itself.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL of the engine, e.g. `http://localhost:9200`.
    pub base_url: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
    /// Name of the index holding employee documents.
    pub index: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9200".to_string(),
            username: "elastic".to_string(),
            password: "ELASTIC_PASSWORD".to_string(),
            index: "employee".to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a config for the given base URL, keeping the remaining defaults.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the basic-auth credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Set the index name.
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }
}
