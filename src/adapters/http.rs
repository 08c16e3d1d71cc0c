use crate::domain::ports::{ConfigProvider, ModelCatalog};
use crate::utils::error::{FormError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

pub const DEFAULT_MODELS_PATH: &str = "get_models";

/// Model list endpoint: `GET {base_url}/{models_path}/{company}`, answering
/// with a JSON array of model names.
#[derive(Debug, Clone)]
pub struct HttpModelCatalog {
    client: Client,
    base_url: Url,
    models_path: String,
}

impl HttpModelCatalog {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url, DEFAULT_MODELS_PATH)
    }

    pub fn with_client(client: Client, base_url: &str, models_path: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(FormError::InvalidConfigValueError {
                field: "endpoint.base_url".to_string(),
                value: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }
        Ok(Self {
            client,
            base_url,
            models_path: models_path.to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Self::with_client(client, config.base_url(), config.models_path())
    }

    /// The company name becomes one percent-encoded path segment.
    pub fn models_url(&self, company: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                FormError::config(format!("Base URL cannot be a base: {}", self.base_url))
            })?;
            segments.pop_if_empty();
            for part in self.models_path.split('/').filter(|p| !p.is_empty()) {
                segments.push(part);
            }
            segments.push(company);
        }
        Ok(url)
    }
}

#[async_trait]
impl ModelCatalog for HttpModelCatalog {
    async fn fetch_models(&self, company: &str) -> Result<Vec<String>> {
        let url = self.models_url(company)?;
        tracing::debug!("Requesting model list from: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Model list response status: {}", status);

        if !status.is_success() {
            return Err(FormError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        // `null` 視為沒有車款
        let models: Option<Vec<String>> = serde_json::from_str(&body)?;
        Ok(models.unwrap_or_default())
    }
}
