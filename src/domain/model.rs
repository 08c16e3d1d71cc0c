use serde::{Deserialize, Serialize};
use std::fmt;

/// 表單欄位，對應頁面上的 element id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Company,
    CarModel,
    Year,
    KiloDriven,
    FuelType,
}

impl FieldId {
    pub fn element_id(&self) -> &'static str {
        match self {
            FieldId::Company => "company",
            FieldId::CarModel => "car_models",
            FieldId::Year => "year",
            FieldId::KiloDriven => "kilo_driven",
            FieldId::FuelType => "fuel_type",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Select,
    Number,
}

/// Point-in-time copy of one field. `min`/`max` keep the raw attribute text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub id: FieldId,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
    pub disabled: bool,
    pub min: Option<String>,
    pub max: Option<String>,
    pub invalid: bool,
}

impl FieldSnapshot {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Fields in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub fields: Vec<FieldSnapshot>,
}

impl FormSnapshot {
    pub fn field(&self, id: FieldId) -> Option<&FieldSnapshot> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn value_of(&self, id: FieldId) -> &str {
        self.field(id).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn selects(&self) -> impl Iterator<Item = &FieldSnapshot> {
        self.fields.iter().filter(|f| f.kind == FieldKind::Select)
    }

    pub fn first_invalid(&self) -> Option<FieldId> {
        self.fields.iter().find(|f| f.invalid).map(|f| f.id)
    }
}

/// Inclusive integer bounds rendered as a number input's `min`/`max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberBounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }

    pub fn named(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }
}

pub const LOADING_MODELS: &str = "Loading Models...";
pub const SELECT_BRAND_FIRST: &str = "Select Brand First";
pub const SELECT_MODEL: &str = "Select Model";
pub const NO_MODELS_FOUND: &str = "No models found";
pub const ERROR_LOADING_MODELS: &str = "Error loading models";

/// What the dependent model field currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelListState {
    AwaitingBrand,
    Loading,
    Loaded(Vec<String>),
    Empty,
    Failed,
}

impl ModelListState {
    pub fn options(&self) -> Vec<SelectOption> {
        match self {
            ModelListState::AwaitingBrand => vec![SelectOption::placeholder(SELECT_BRAND_FIRST)],
            ModelListState::Loading => vec![SelectOption::placeholder(LOADING_MODELS)],
            ModelListState::Loaded(models) => {
                std::iter::once(SelectOption::placeholder(SELECT_MODEL))
                    .chain(models.iter().map(|m| SelectOption::named(m)))
                    .collect()
            }
            ModelListState::Empty => vec![SelectOption::placeholder(NO_MODELS_FOUND)],
            ModelListState::Failed => vec![SelectOption::placeholder(ERROR_LOADING_MODELS)],
        }
    }

    /// Only a loaded, non-empty list enables the field.
    pub fn enables_field(&self) -> bool {
        matches!(self, ModelListState::Loaded(_))
    }
}

/// One write of the invalid marker, applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerUpdate {
    pub field: FieldId,
    pub invalid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitPlan {
    pub markers: Vec<MarkerUpdate>,
    /// Required fields that had no value.
    pub missing: Vec<FieldId>,
    pub valid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Allowed,
    Blocked { first_invalid: Option<FieldId> },
}

impl SubmitOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, SubmitOutcome::Allowed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub active: bool,
}

pub const HOME_HREF: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    pub default_prevented: bool,
}
