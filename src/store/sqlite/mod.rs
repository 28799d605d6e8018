//! SQLite-backed model stores.

mod table;

pub use table::SqliteSoftDeleteStore;
