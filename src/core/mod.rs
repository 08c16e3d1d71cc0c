pub mod controller;
pub mod navigation;
pub mod validation;

pub use crate::domain::model::{
    FieldId, FieldKind, FieldSnapshot, FormSnapshot, ModelListState, SubmitOutcome,
};
pub use crate::domain::ports::{ConfigProvider, ModelCatalog, PageView};
pub use crate::utils::error::Result;
