//! Supabase (PostgREST) implementation of [`IndictmentStore`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use postgrest::Postgrest;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{Indictment, StoredIndictment};
use super::store::{IndictmentStore, StoreError};
use crate::config::SupabaseConfig;

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: String,
    #[serde(default)]
    details: Option<String>,
}

#[derive(Serialize)]
struct IndictmentUpdate<'a> {
    #[serde(flatten)]
    indictment: &'a Indictment,
    updated_at: DateTime<Utc>,
}

pub struct SupabaseIndictmentStore {
    client: Postgrest,
    table: String,
}

impl SupabaseIndictmentStore {
    pub fn new(config: &SupabaseConfig) -> Self {
        let client = Postgrest::new(config.rest_url())
            .insert_header("apikey", &config.anon_key)
            .insert_header("Authorization", format!("Bearer {}", config.anon_key));

        Self {
            client,
            table: config.table.clone(),
        }
    }

    /// Map a PostgREST reply to its JSON rows, turning non-2xx replies into errors.
    async fn rows(
        &self,
        request: postgrest::Builder,
    ) -> Result<Vec<StoredIndictment>, StoreError> {
        let response = request
            .execute()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: rejection_message(&body),
            });
        }

        decode_rows(&body)
    }
}

fn decode_rows(body: &str) -> Result<Vec<StoredIndictment>, StoreError> {
    Ok(serde_json::from_str(body)?)
}

fn rejection_message(body: &str) -> String {
    match serde_json::from_str::<PostgrestErrorBody>(body) {
        Ok(PostgrestErrorBody {
            message,
            details: Some(details),
        }) => format!("{} ({})", message, details),
        Ok(PostgrestErrorBody { message, .. }) => message,
        Err(_) => body.to_string(),
    }
}

#[async_trait]
impl IndictmentStore for SupabaseIndictmentStore {
    async fn insert(&self, indictment: &Indictment) -> Result<StoredIndictment, StoreError> {
        let body = serde_json::to_string(&[indictment])?;
        let request = self.client.from(&self.table).insert(body);

        let row = self.rows(request).await?.into_iter().next().ok_or_else(|| {
            StoreError::Rejected {
                status: 200,
                message: "insert returned no rows".to_string(),
            }
        })?;
        log::info!("Indictment {} inserted into Supabase", row.id);
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        indictment: &Indictment,
    ) -> Result<StoredIndictment, StoreError> {
        let body = serde_json::to_string(&IndictmentUpdate {
            indictment,
            updated_at: Utc::now(),
        })?;
        let request = self
            .client
            .from(&self.table)
            .eq("id", id.to_string())
            .update(body);

        self.rows(request)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<StoredIndictment>, StoreError> {
        let request = self
            .client
            .from(&self.table)
            .select("*")
            .order("created_at.desc");
        self.rows(request).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let request = self
            .client
            .from(&self.table)
            .eq("id", id.to_string())
            .delete();

        if self.rows(request).await?.is_empty() {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
