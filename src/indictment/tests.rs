use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::indictment::model::{FieldKey, Indictment, StoredIndictment};
use crate::indictment::store::{IndictmentStore, MemoryIndictmentStore, StoreError};

#[test]
fn test_indictment_defaults_for_missing_fields() {
    let json = r#"{
        "accused_names": "Иванов И.И.",
        "completion_date": "2024-01-15"
    }"#;

    let record: Indictment = serde_json::from_str(json).unwrap();
    assert_eq!(record.accused_names, "Иванов И.И.");
    assert_eq!(record.victim_data, "");
    assert_eq!(
        record.completion_date,
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    );
}

#[test]
fn test_missing_completion_date_defaults_to_today() {
    let record: Indictment = serde_json::from_str("{}").unwrap();
    assert_eq!(record.completion_date, Local::now().date_naive());
}

#[test]
fn test_unknown_field_rejected() {
    let json = r#"{ "accused_names": "Иванов И.И.", "nickname": "Ваня" }"#;
    let result: Result<Indictment, _> = serde_json::from_str(json);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("unknown field `nickname`"), "{}", err);
}

#[test]
fn test_malformed_completion_date_rejected() {
    let json = r#"{ "completion_date": "15.01.2024" }"#;
    assert!(serde_json::from_str::<Indictment>(json).is_err());
}

#[test]
fn test_field_lookup_matches_column_names() {
    let record = Indictment {
        victim_data: "Сидоров С.С.".to_string(),
        fine_payment_info: "р/с 40101810".to_string(),
        ..Default::default()
    };
    let value = serde_json::to_value(&record).unwrap();

    for key in [FieldKey::VictimData, FieldKey::FinePaymentInfo, FieldKey::CrimeTime] {
        assert_eq!(value[key.name()], record.field(key));
    }
}

#[test]
fn test_title_falls_back_when_accused_missing() {
    let mut record = Indictment::default();
    assert_eq!(record.title(), "Без названия");
    record.accused_names = "Петров П.П.".to_string();
    assert_eq!(record.title(), "Петров П.П.");
}

#[test]
fn test_stored_indictment_flattens_fields() {
    let row = StoredIndictment {
        id: Uuid::new_v4(),
        indictment: Indictment {
            criminal_code_article: "ч.1 ст.158 УК РФ".to_string(),
            ..Default::default()
        },
        created_at: None,
        updated_at: None,
    };

    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value["criminal_code_article"], "ч.1 ст.158 УК РФ");
    assert_eq!(value["id"], row.id.to_string());

    let parsed: StoredIndictment = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, row);
}

#[test]
fn test_stored_row_from_supabase_shape() {
    let json = r#"{
        "id": "0b6f8f5e-3d1c-4f7a-9a55-0a4c1a2b3c4d",
        "accused_names": "Иванов И.И.",
        "completion_date": "2024-01-15",
        "created_at": "2024-01-15T10:00:00+00:00",
        "updated_at": null
    }"#;

    let row: StoredIndictment = serde_json::from_str(json).unwrap();
    assert_eq!(row.indictment.accused_names, "Иванов И.И.");
    assert!(row.created_at.is_some());
    assert!(row.updated_at.is_none());
}

#[test]
fn test_stored_row_with_null_completion_date() {
    let json = r#"{
        "id": "0b6f8f5e-3d1c-4f7a-9a55-0a4c1a2b3c4d",
        "accused_names": "Иванов И.И.",
        "completion_date": null
    }"#;

    let row: StoredIndictment = serde_json::from_str(json).unwrap();
    assert_eq!(row.indictment.accused_names, "Иванов И.И.");
    assert_eq!(row.indictment.completion_date, Local::now().date_naive());
}

#[test]
fn test_stored_row_with_null_text_columns() {
    let json = r#"{
        "id": "0b6f8f5e-3d1c-4f7a-9a55-0a4c1a2b3c4d",
        "accused_names": null,
        "victim_data": null,
        "fine_payment_info": null,
        "completion_date": "2024-01-15"
    }"#;

    let row: StoredIndictment = serde_json::from_str(json).unwrap();
    assert_eq!(row.indictment.accused_names, "");
    assert_eq!(row.indictment.victim_data, "");
    assert_eq!(row.indictment.fine_payment_info, "");
    assert_eq!(row.indictment.title(), "Без названия");
}

#[test]
fn test_stored_row_ignores_extra_columns() {
    let json = r#"{
        "id": "0b6f8f5e-3d1c-4f7a-9a55-0a4c1a2b3c4d",
        "owner_id": "someone",
        "completion_date": "2024-01-15"
    }"#;

    let row: StoredIndictment = serde_json::from_str(json).unwrap();
    assert_eq!(
        row.indictment.completion_date,
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    );
}

#[test]
fn test_stored_row_with_malformed_date_rejected() {
    let json = r#"{
        "id": "0b6f8f5e-3d1c-4f7a-9a55-0a4c1a2b3c4d",
        "completion_date": "15.01.2024"
    }"#;
    assert!(serde_json::from_str::<StoredIndictment>(json).is_err());
}

#[test]
fn test_request_body_still_rejects_nulls() {
    let json = r#"{ "victim_data": null }"#;
    assert!(serde_json::from_str::<Indictment>(json).is_err());

    let json = r#"{ "completion_date": null }"#;
    assert!(serde_json::from_str::<Indictment>(json).is_err());
}

#[test]
fn test_field_keys_cover_every_column() {
    let value = serde_json::to_value(Indictment::default()).unwrap();
    let columns = value.as_object().unwrap();
    assert_eq!(columns.len(), FieldKey::ALL.len() + 1);
    for key in FieldKey::ALL {
        assert!(columns.contains_key(key.name()), "{} missing", key.name());
    }
}

#[tokio::test]
async fn test_memory_store_lists_newest_first() {
    let store = MemoryIndictmentStore::new();
    for name in ["Первый", "Второй", "Третий"] {
        let record = Indictment {
            accused_names: name.to_string(),
            ..Default::default()
        };
        store.insert(&record).await.unwrap();
    }

    let rows = store.list().await.unwrap();
    let names: Vec<&str> = rows
        .iter()
        .map(|row| row.indictment.accused_names.as_str())
        .collect();
    assert_eq!(names, vec!["Третий", "Второй", "Первый"]);
}

#[tokio::test]
async fn test_memory_store_update_sets_timestamp() {
    let store = MemoryIndictmentStore::new();
    let row = store.insert(&Indictment::default()).await.unwrap();
    assert!(row.updated_at.is_none());

    let changed = Indictment {
        victim_data: "Сидоров С.С.".to_string(),
        ..row.indictment.clone()
    };
    let updated = store.update(row.id, &changed).await.unwrap();

    assert_eq!(updated.id, row.id);
    assert_eq!(updated.created_at, row.created_at);
    assert!(updated.updated_at.is_some());
    assert_eq!(updated.indictment.victim_data, "Сидоров С.С.");
}

#[tokio::test]
async fn test_memory_store_missing_ids() {
    let store = MemoryIndictmentStore::new();
    let id = Uuid::new_v4();

    assert!(matches!(
        store.update(id, &Indictment::default()).await,
        Err(StoreError::NotFound(missing)) if missing == id
    ));
    assert!(matches!(
        store.delete(id).await,
        Err(StoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_memory_store_delete() {
    let store = MemoryIndictmentStore::new();
    let row = store.insert(&Indictment::default()).await.unwrap();
    assert_eq!(store.len(), 1);

    store.delete(row.id).await.unwrap();
    assert!(store.is_empty());
}
