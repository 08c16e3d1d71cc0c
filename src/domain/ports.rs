use crate::domain::model::{FieldId, FormSnapshot, NavLink, SelectOption};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The page as the controller sees it. Implementations own the real
/// element state; every method is a single read or write.
pub trait PageView: Send + Sync {
    fn snapshot(&self) -> FormSnapshot;

    fn set_value(&self, field: FieldId, value: &str);

    /// Replaces all options of a select. The field's value becomes the first
    /// option's value.
    fn set_options(&self, field: FieldId, options: Vec<SelectOption>);
    fn set_disabled(&self, field: FieldId, disabled: bool);
    fn set_invalid_marker(&self, field: FieldId, invalid: bool);
    fn focus(&self, field: FieldId);
    /// Smooth scroll that centers the field vertically.
    fn scroll_into_view(&self, field: FieldId);
    fn show_loading_overlay(&self);

    fn location_hash(&self) -> String;
    fn nav_links(&self) -> Vec<NavLink>;
    fn set_link_active(&self, href: &str, active: bool);

    /// Document-relative top of the element a `#fragment` resolves to.
    fn element_top(&self, fragment: &str) -> Option<f64>;
    fn navbar_height(&self) -> Option<f64>;
    fn prediction_top(&self) -> Option<f64>;
    /// Smooth scroll of the window to a document offset.
    fn scroll_to(&self, top: f64);
}

#[async_trait]
pub trait ModelCatalog: Send + Sync {
    async fn fetch_models(&self, company: &str) -> Result<Vec<String>>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn models_path(&self) -> &str;
    /// `None` waits for the server indefinitely.
    fn request_timeout(&self) -> Option<Duration>;
    fn navbar_buffer(&self) -> f64;
    fn prediction_scroll_delay_ms(&self) -> u64;
}
