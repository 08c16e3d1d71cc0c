use crate::core::navigation::{
    active_href_for_hash, classify_anchor, scroll_offset, AnchorAction, DEFAULT_NAVBAR_BUFFER,
};
use crate::core::validation::{
    input_style_marker, number_input_marker, plan_submit, validate_number_input, NUMBER_FIELDS,
};
use crate::domain::model::{ClickOutcome, FieldId, ModelListState, SubmitOutcome, HOME_HREF};
use crate::domain::ports::{ConfigProvider, ModelCatalog, PageView};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    pub navbar_buffer: f64,
    pub prediction_scroll_delay: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            navbar_buffer: DEFAULT_NAVBAR_BUFFER,
            prediction_scroll_delay: Duration::from_millis(100),
        }
    }
}

impl ControllerSettings {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            navbar_buffer: config.navbar_buffer(),
            prediction_scroll_delay: Duration::from_millis(config.prediction_scroll_delay_ms()),
        }
    }
}

/// Event handlers for the prediction form page.
///
/// Every handler takes `&self`, so several can be in flight on one event
/// loop. Model-list requests are numbered; only the most recently issued
/// one may write to the model select.
pub struct FormController<V: PageView, M: ModelCatalog> {
    view: V,
    catalog: M,
    settings: ControllerSettings,
    latest_request: AtomicU64,
}

impl<V: PageView, M: ModelCatalog> FormController<V, M> {
    pub fn new(view: V, catalog: M) -> Self {
        Self::with_settings(view, catalog, ControllerSettings::default())
    }

    pub fn with_settings(view: V, catalog: M, settings: ControllerSettings) -> Self {
        Self {
            view,
            catalog,
            settings,
            latest_request: AtomicU64::new(0),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Load-time pass: style every select, validate both number inputs,
    /// pick the active nav link.
    pub fn initialize(&self) {
        let snapshot = self.view.snapshot();
        for select in snapshot.selects() {
            self.view
                .set_invalid_marker(select.id, input_style_marker(select, !select.is_empty()));
        }
        for id in NUMBER_FIELDS {
            self.on_number_input(id);
        }
        self.update_active_nav();
        tracing::debug!("Form controller initialized");
    }

    pub async fn on_page_load(&self) {
        self.initialize();
        self.scroll_to_prediction().await;
    }

    /// Manufacturer changed to `company`. The selection is written to the
    /// page first, so the manufacturer field and the model list agree.
    /// Returns the state written to the model select, or `None` when a newer
    /// change superseded this one before its response arrived.
    pub async fn on_company_change(&self, company: &str) -> Option<ModelListState> {
        let seq = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;

        self.view.set_value(FieldId::Company, company);

        self.apply_model_list(&ModelListState::Loading);
        self.view.set_invalid_marker(FieldId::CarModel, false);

        if company.is_empty() {
            let state = ModelListState::AwaitingBrand;
            self.apply_model_list(&state);
            self.validate_input_style(FieldId::Company, false);
            return Some(state);
        }
        self.validate_input_style(FieldId::Company, true);

        tracing::debug!(company, seq, "Fetching car models");
        let state = match self.catalog.fetch_models(company).await {
            Ok(models) if models.is_empty() => ModelListState::Empty,
            Ok(models) => ModelListState::Loaded(models),
            Err(e) => {
                tracing::error!(company, error = %e, "Error fetching car models");
                ModelListState::Failed
            }
        };

        let latest = self.latest_request.load(Ordering::SeqCst);
        if latest != seq {
            tracing::debug!(company, seq, latest, "Discarding stale model list response");
            return None;
        }

        self.apply_model_list(&state);
        Some(state)
    }

    /// Change on any select other than the manufacturer.
    pub fn on_select_change(&self, field: FieldId) {
        if field == FieldId::Company {
            return;
        }
        let snapshot = self.view.snapshot();
        if let Some(f) = snapshot.field(field) {
            self.view.set_invalid_marker(field, input_style_marker(f, !f.is_empty()));
        }
    }

    /// Live validation of a number input. A missing field has nothing to reject.
    pub fn on_number_input(&self, field: FieldId) -> bool {
        let snapshot = self.view.snapshot();
        match snapshot.field(field) {
            Some(f) => {
                self.view.set_invalid_marker(field, number_input_marker(f));
                validate_number_input(f)
            }
            None => true,
        }
    }

    pub fn validate_input_style(&self, field: FieldId, is_valid: bool) {
        let snapshot = self.view.snapshot();
        if let Some(f) = snapshot.field(field) {
            self.view.set_invalid_marker(field, input_style_marker(f, is_valid));
        }
    }

    pub fn handle_submit(&self) -> SubmitOutcome {
        let plan = plan_submit(&self.view.snapshot());

        for id in &plan.missing {
            tracing::debug!("Input required: {}", id);
        }
        for update in &plan.markers {
            self.view.set_invalid_marker(update.field, update.invalid);
        }

        if plan.valid {
            tracing::info!("Submitting prediction form");
            self.view.show_loading_overlay();
            return SubmitOutcome::Allowed;
        }

        tracing::info!("Form submission prevented due to validation errors.");
        let first_invalid = self.view.snapshot().first_invalid();
        if let Some(id) = first_invalid {
            self.view.focus(id);
            self.view.scroll_into_view(id);
        }
        SubmitOutcome::Blocked { first_invalid }
    }

    pub fn update_active_nav(&self) {
        let hash = self.view.location_hash();
        let links = self.view.nav_links();
        let target = active_href_for_hash(&hash, &links).map(str::to_string);

        self.clear_active_links();
        if let Some(href) = target {
            self.view.set_link_active(&href, true);
        }
    }

    pub fn on_hash_change(&self) {
        self.update_active_nav();
    }

    /// Click on an anchor. In-page links whose target exists are handled
    /// here and the default navigation is cancelled.
    pub fn on_anchor_click(&self, href: &str) -> ClickOutcome {
        match classify_anchor(href) {
            AnchorAction::ScrollTop => {
                self.view.scroll_to(0.0);
                self.mark_active(HOME_HREF);
                ClickOutcome {
                    default_prevented: true,
                }
            }
            AnchorAction::ScrollToFragment(fragment) => match self.view.element_top(fragment) {
                Some(top) => {
                    let offset =
                        scroll_offset(top, self.view.navbar_height(), self.settings.navbar_buffer);
                    self.view.scroll_to(offset);
                    self.mark_active(fragment);
                    ClickOutcome {
                        default_prevented: true,
                    }
                }
                None => ClickOutcome {
                    default_prevented: false,
                },
            },
            AnchorAction::Ignore => ClickOutcome {
                default_prevented: false,
            },
        }
    }

    /// Scrolls to a server-rendered prediction after the fixed delay.
    /// Returns whether a prediction was present.
    pub async fn scroll_to_prediction(&self) -> bool {
        let Some(top) = self.view.prediction_top() else {
            return false;
        };
        // offset is taken at load time, like the rest of the layout reads
        let offset = scroll_offset(top, self.view.navbar_height(), self.settings.navbar_buffer);
        tokio::time::sleep(self.settings.prediction_scroll_delay).await;
        self.view.scroll_to(offset);
        true
    }

    fn apply_model_list(&self, state: &ModelListState) {
        self.view.set_options(FieldId::CarModel, state.options());
        self.view.set_disabled(FieldId::CarModel, !state.enables_field());
    }

    fn clear_active_links(&self) {
        for link in self.view.nav_links() {
            if link.active {
                self.view.set_link_active(&link.href, false);
            }
        }
    }

    fn mark_active(&self, href: &str) {
        self.clear_active_links();
        if self.view.nav_links().iter().any(|l| l.href == href) {
            self.view.set_link_active(href, true);
        }
    }
}
