pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpModelCatalog, MemoryPage};
pub use config::FormConfig;
pub use core::controller::{ControllerSettings, FormController};
pub use domain::model::{FieldId, ModelListState, SubmitOutcome};
pub use utils::error::{FormError, Result};
