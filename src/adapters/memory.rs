use crate::domain::model::{
    FieldId, FieldKind, FieldSnapshot, FormSnapshot, NavLink, NumberBounds, SelectOption,
    SELECT_BRAND_FIRST,
};
use crate::domain::ports::PageView;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

pub const FUEL_TYPES: [&str; 6] = ["Petrol", "Diesel", "CNG", "Electric", "Hybrid", "Petrol + CNG"];

#[derive(Debug, Clone)]
struct MemoryField {
    snapshot: FieldSnapshot,
    options: Vec<SelectOption>,
}

#[derive(Debug, Default)]
struct PageState {
    fields: Vec<MemoryField>,
    focused: Option<FieldId>,
    scrolled_into_view: Vec<FieldId>,
    overlay_visible: bool,
    hash: String,
    nav: Vec<NavLink>,
    sections: HashMap<String, f64>,
    navbar_height: Option<f64>,
    prediction_top: Option<f64>,
    scroll_history: Vec<f64>,
}

impl PageState {
    fn field_mut(&mut self, id: FieldId) -> Option<&mut MemoryField> {
        self.fields.iter_mut().find(|f| f.snapshot.id == id)
    }

    fn field(&self, id: FieldId) -> Option<&MemoryField> {
        self.fields.iter().find(|f| f.snapshot.id == id)
    }
}

/// A page held entirely in memory. Used by the headless driver and as the
/// test double for the controller; it also records focus, scrolls and the
/// loading overlay so callers can inspect what happened.
#[derive(Debug, Default)]
pub struct MemoryPage {
    state: Mutex<PageState>,
}

impl MemoryPage {
    pub fn new(fields: Vec<FieldSnapshot>) -> Self {
        let fields = fields
            .into_iter()
            .map(|snapshot| MemoryField {
                snapshot,
                options: Vec::new(),
            })
            .collect();
        Self {
            state: Mutex::new(PageState {
                fields,
                ..PageState::default()
            }),
        }
    }

    /// The car price form as the server renders it: brand, model (disabled
    /// until a brand is chosen), year, fuel type, kilometers driven.
    pub fn prediction_form(year: NumberBounds, kilo_driven: NumberBounds) -> Self {
        let select = |id: FieldId, disabled: bool| FieldSnapshot {
            id,
            kind: FieldKind::Select,
            value: String::new(),
            required: true,
            disabled,
            min: None,
            max: None,
            invalid: false,
        };
        let number = |id: FieldId, bounds: NumberBounds| FieldSnapshot {
            id,
            kind: FieldKind::Number,
            value: String::new(),
            required: true,
            disabled: false,
            min: bounds.min.map(|v| v.to_string()),
            max: bounds.max.map(|v| v.to_string()),
            invalid: false,
        };

        let page = Self::new(vec![
            select(FieldId::Company, false),
            select(FieldId::CarModel, true),
            number(FieldId::Year, year),
            select(FieldId::FuelType, false),
            number(FieldId::KiloDriven, kilo_driven),
        ]);
        page.set_options(
            FieldId::CarModel,
            vec![SelectOption::placeholder(SELECT_BRAND_FIRST)],
        );
        let fuel = std::iter::once(SelectOption::placeholder("Select Fuel Type"))
            .chain(FUEL_TYPES.iter().map(|f| SelectOption::named(f)))
            .collect();
        page.set_options(FieldId::FuelType, fuel);
        page
    }

    pub fn with_nav(self, hrefs: &[&str], navbar_height: Option<f64>) -> Self {
        {
            let mut state = self.lock();
            state.nav = hrefs
                .iter()
                .map(|h| NavLink {
                    href: h.to_string(),
                    active: false,
                })
                .collect();
            state.navbar_height = navbar_height;
        }
        self
    }

    /// Registers an element reachable as `#fragment`, at a document offset.
    pub fn with_section(self, fragment: &str, top: f64) -> Self {
        self.lock().sections.insert(fragment.to_string(), top);
        self
    }

    pub fn with_prediction(self, top: f64) -> Self {
        self.lock().prediction_top = Some(top);
        self
    }

    pub fn with_hash(self, hash: &str) -> Self {
        self.lock().hash = hash.to_string();
        self
    }

    /// Picks an option of a select. Returns false when no option carries
    /// that value or the field is disabled.
    pub fn choose_option(&self, field: FieldId, value: &str) -> bool {
        let mut state = self.lock();
        let Some(f) = state.field_mut(field) else {
            return false;
        };
        if f.snapshot.disabled || !f.options.iter().any(|o| o.value == value) {
            return false;
        }
        f.snapshot.value = value.to_string();
        true
    }

    pub fn set_hash(&self, hash: &str) {
        self.lock().hash = hash.to_string();
    }

    pub fn value(&self, field: FieldId) -> String {
        self.lock()
            .field(field)
            .map(|f| f.snapshot.value.clone())
            .unwrap_or_default()
    }

    pub fn options(&self, field: FieldId) -> Vec<SelectOption> {
        self.lock()
            .field(field)
            .map(|f| f.options.clone())
            .unwrap_or_default()
    }

    pub fn option_labels(&self, field: FieldId) -> Vec<String> {
        self.options(field).into_iter().map(|o| o.label).collect()
    }

    pub fn is_disabled(&self, field: FieldId) -> bool {
        self.lock().field(field).is_some_and(|f| f.snapshot.disabled)
    }

    pub fn is_invalid(&self, field: FieldId) -> bool {
        self.lock().field(field).is_some_and(|f| f.snapshot.invalid)
    }

    pub fn focused(&self) -> Option<FieldId> {
        self.lock().focused
    }

    pub fn scrolled_into_view(&self) -> Vec<FieldId> {
        self.lock().scrolled_into_view.clone()
    }

    pub fn overlay_visible(&self) -> bool {
        self.lock().overlay_visible
    }

    pub fn scroll_history(&self) -> Vec<f64> {
        self.lock().scroll_history.clone()
    }

    pub fn active_links(&self) -> Vec<String> {
        self.lock()
            .nav
            .iter()
            .filter(|l| l.active)
            .map(|l| l.href.clone())
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        // 單執行緒頁面，poison 時沿用既有狀態
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PageView for MemoryPage {
    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: self.lock().fields.iter().map(|f| f.snapshot.clone()).collect(),
        }
    }

    fn set_value(&self, field: FieldId, value: &str) {
        if let Some(f) = self.lock().field_mut(field) {
            f.snapshot.value = value.to_string();
        }
    }

    fn set_options(&self, field: FieldId, options: Vec<SelectOption>) {
        if let Some(f) = self.lock().field_mut(field) {
            f.snapshot.value = options.first().map(|o| o.value.clone()).unwrap_or_default();
            f.options = options;
        }
    }

    fn set_disabled(&self, field: FieldId, disabled: bool) {
        if let Some(f) = self.lock().field_mut(field) {
            f.snapshot.disabled = disabled;
        }
    }

    fn set_invalid_marker(&self, field: FieldId, invalid: bool) {
        if let Some(f) = self.lock().field_mut(field) {
            f.snapshot.invalid = invalid;
        }
    }

    fn focus(&self, field: FieldId) {
        self.lock().focused = Some(field);
    }

    fn scroll_into_view(&self, field: FieldId) {
        self.lock().scrolled_into_view.push(field);
    }

    fn show_loading_overlay(&self) {
        self.lock().overlay_visible = true;
    }

    fn location_hash(&self) -> String {
        self.lock().hash.clone()
    }

    fn nav_links(&self) -> Vec<NavLink> {
        self.lock().nav.clone()
    }

    fn set_link_active(&self, href: &str, active: bool) {
        for link in self.lock().nav.iter_mut().filter(|l| l.href == href) {
            link.active = active;
        }
    }

    fn element_top(&self, fragment: &str) -> Option<f64> {
        self.lock().sections.get(fragment).copied()
    }

    fn navbar_height(&self) -> Option<f64> {
        self.lock().navbar_height
    }

    fn prediction_top(&self) -> Option<f64> {
        self.lock().prediction_top
    }

    fn scroll_to(&self, top: f64) {
        self.lock().scroll_history.push(top);
    }
}
