// Adapters layer: concrete implementations of the domain ports (HTTP model catalog, in-memory page).

pub mod http;
pub mod memory;

pub use http::HttpModelCatalog;
pub use memory::MemoryPage;
