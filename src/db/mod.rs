//! Application state shared by all HTTP workers.

use std::sync::Arc;

use crate::config::SupabaseConfig;
use crate::indictment::store::{IndictmentStore, MemoryIndictmentStore};
use crate::indictment::supabase::SupabaseIndictmentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn IndictmentStore + Send + Sync>,
}

impl AppState {
    /// Build state around the Supabase store, or the in-memory store when no
    /// Supabase project is configured.
    pub fn new_with_config(supabase_config: Option<&SupabaseConfig>) -> Self {
        let store: Arc<dyn IndictmentStore + Send + Sync> = match supabase_config {
            Some(config) => {
                log::info!(
                    "Using Supabase row store at {} (table '{}')",
                    config.url,
                    config.table
                );
                Arc::new(SupabaseIndictmentStore::new(config))
            }
            None => {
                log::warn!(
                    "SUPABASE_URL / SUPABASE_ANON_KEY not set, records are kept in memory only"
                );
                Arc::new(MemoryIndictmentStore::new())
            }
        };

        Self { store }
    }

    pub fn new_with_store(store: Arc<dyn IndictmentStore + Send + Sync>) -> Self {
        Self { store }
    }
}
