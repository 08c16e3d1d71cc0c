use crate::adapters::http::DEFAULT_MODELS_PATH;
use crate::core::navigation::DEFAULT_NAVBAR_BUFFER;
use crate::domain::model::NumberBounds;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FormError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub endpoint: EndpointConfig,
    pub layout: LayoutConfig,
    pub fields: FieldsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub base_url: String,
    pub models_path: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            models_path: DEFAULT_MODELS_PATH.to_string(),
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub navbar_buffer: f64,
    pub prediction_scroll_delay_ms: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            navbar_buffer: DEFAULT_NAVBAR_BUFFER,
            prediction_scroll_delay_ms: 100,
        }
    }
}

/// Bounds rendered onto the page's number inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    pub year: NumberBounds,
    pub kilo_driven: NumberBounds,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            year: NumberBounds {
                min: Some(1990),
                max: Some(2024),
            },
            kilo_driven: NumberBounds {
                min: Some(0),
                max: None,
            },
        }
    }
}

impl FormConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| FormError::config(format!("TOML parsing error: {}", e)))
    }

    /// 替換環境變數 (例如 ${CAR_PRICE_URL})；找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| FormError::config(format!("Invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for FormConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint.base_url", &self.endpoint.base_url)?;
        validation::validate_non_empty_string("endpoint.models_path", &self.endpoint.models_path)?;

        if let Some(timeout) = self.endpoint.request_timeout_secs {
            validation::validate_positive_number("endpoint.request_timeout_secs", timeout, 1)?;
        }

        validation::validate_range("layout.navbar_buffer", self.layout.navbar_buffer, 0.0, 500.0)?;
        validation::validate_range(
            "layout.prediction_scroll_delay_ms",
            self.layout.prediction_scroll_delay_ms,
            0,
            10_000,
        )?;

        validation::validate_bounds("fields.year", self.fields.year.min, self.fields.year.max)?;
        validation::validate_bounds(
            "fields.kilo_driven",
            self.fields.kilo_driven.min,
            self.fields.kilo_driven.max,
        )?;

        Ok(())
    }
}

impl ConfigProvider for FormConfig {
    fn base_url(&self) -> &str {
        &self.endpoint.base_url
    }

    fn models_path(&self) -> &str {
        &self.endpoint.models_path
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.endpoint.request_timeout_secs.map(Duration::from_secs)
    }

    fn navbar_buffer(&self) -> f64 {
        self.layout.navbar_buffer
    }

    fn prediction_scroll_delay_ms(&self) -> u64 {
        self.layout.prediction_scroll_delay_ms
    }
}
