mod common;

use std::sync::Arc;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use serde_json::{json, Value};

use indictment_docs::indictment::{MemoryIndictmentStore, StoredIndictment};
use indictment_docs::AppState;

fn app_state() -> web::Data<AppState> {
    web::Data::new(AppState::new_with_store(Arc::new(
        MemoryIndictmentStore::new(),
    )))
}

#[actix_web::test]
async fn test_create_list_update_delete() {
    let app = test::init_service(
        App::new()
            .app_data(app_state())
            .configure(indictment_docs::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/indictments")
        .set_json(json!({
            "accused_names": "Иванов И.И.",
            "criminal_code_article": "ч.1 ст.158 УК РФ",
            "completion_date": "2024-01-15"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: StoredIndictment = test::read_body_json(resp).await;
    assert_eq!(created.indictment.accused_names, "Иванов И.И.");
    assert!(created.created_at.is_some());

    let req = test::TestRequest::get().uri("/api/indictments").to_request();
    let rows: Vec<StoredIndictment> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, created.id);

    let mut changed = created.indictment.clone();
    changed.victim_data = "Сидоров С.С.".to_string();
    let req = test::TestRequest::put()
        .uri(&format!("/api/indictments/{}", created.id))
        .set_json(&changed)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: StoredIndictment = test::read_body_json(resp).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.indictment.victim_data, "Сидоров С.С.");
    assert!(updated.updated_at.is_some());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/indictments/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/indictments/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NotFound");

    let req = test::TestRequest::get().uri("/api/indictments").to_request();
    let rows: Vec<StoredIndictment> = test::call_and_read_body_json(&app, req).await;
    assert!(rows.is_empty());
}

#[actix_web::test]
async fn test_update_missing_record_is_not_found() {
    let app = test::init_service(
        App::new()
            .app_data(app_state())
            .configure(indictment_docs::configure),
    )
    .await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/indictments/{}", uuid::Uuid::new_v4()))
        .set_json(json!({ "accused_names": "Петров П.П." }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_unknown_field_is_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(app_state())
            .configure(indictment_docs::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/indictments")
        .set_json(json!({ "accused_names": "Иванов И.И.", "nickname": "Ваня" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BadRequest");
    assert!(body["message"].as_str().unwrap().contains("nickname"));
}

#[actix_web::test]
async fn test_export_text_attachment() {
    let app = test::init_service(
        App::new()
            .app_data(app_state())
            .configure(indictment_docs::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/indictments/export/txt")
        .set_json(&common::scenario_record())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(
        resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"obvinitelnoye_zaklyuchenie_2024-01-15.txt\""
    );

    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("ОБВИНИТЕЛЬНОЕ ЗАКЛЮЧЕНИЕ"));
    assert!(text.contains("Иванов И.И."));
}

#[actix_web::test]
async fn test_export_docx_attachment() {
    let app = test::init_service(
        App::new()
            .app_data(app_state())
            .configure(indictment_docs::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/indictments/export/docx")
        .set_json(json!({ "completion_date": "2024-03-01" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
    assert_eq!(
        resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"obvinitelnoye_zaklyuchenie_2024-03-01.docx\""
    );

    let body = test::read_body(resp).await;
    let xml = common::document_xml(&body);
    assert_eq!(xml.matches(r#"w:type="page""#).count(), 3);
}

#[actix_web::test]
async fn test_export_unknown_format_is_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(app_state())
            .configure(indictment_docs::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/indictments/export/pdf")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("pdf"));
}

#[actix_web::test]
async fn test_malformed_id_is_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(app_state())
            .configure(indictment_docs::configure),
    )
    .await;

    let req = test::TestRequest::delete()
        .uri("/api/indictments/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BadRequest");

    let req = test::TestRequest::put()
        .uri("/api/indictments/12345")
        .set_json(json!({ "accused_names": "Петров П.П." }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BadRequest");
    assert!(body["message"].as_str().unwrap().starts_with("Invalid path parameter"));
}
