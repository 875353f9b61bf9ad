pub mod entry;
pub mod store;

pub use entry::AppEntry;
pub use store::{CatalogStore, LoadSource};
