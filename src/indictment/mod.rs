//! Indictment records: the data model, its persistence and its HTTP routes.

pub mod model;
pub mod routes;
pub mod store;
pub mod supabase;

#[cfg(test)]
mod tests;

pub use model::{FieldKey, Indictment, StoredIndictment};
pub use store::{IndictmentStore, MemoryIndictmentStore, StoreError};
pub use supabase::SupabaseIndictmentStore;
