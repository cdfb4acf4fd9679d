//! HTTP-level tests for the `/projects` resource.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Months, Utc};
use common::{body_json, create, delete, get, post_json, project_body, put_json, task_body, user_body};
use serde_json::{json, Value};

fn timestamp(value: &Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

#[tokio::test]
async fn create_defaults_end_date_to_one_year() {
    let app = common::build_test_app();

    let response = post_json(&app, "/projects", project_body("Apollo", 1)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let project = body_json(response).await;
    assert_eq!(project["description"], "");
    let start = timestamp(&project["startDate"]);
    assert_eq!(
        Some(timestamp(&project["endDate"])),
        start.checked_add_months(Months::new(12))
    );

    assert_eq!(body_json(get(&app, "/projects/1").await).await, project);
}

#[tokio::test]
async fn null_description_is_treated_as_empty() {
    let app = common::build_test_app();

    let mut body = project_body("Apollo", 1);
    body["description"] = Value::Null;
    let project = create(&app, "/projects", body.clone()).await;
    assert_eq!(project["description"], "");

    let response = put_json(&app, "/projects/1", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["description"], "");
}

#[tokio::test]
async fn end_before_start_returns_400_and_stores_nothing() {
    let app = common::build_test_app();

    let mut body = project_body("Apollo", 1);
    body["endDate"] = json!("1999-12-31T23:59:59Z");
    let response = post_json(&app, "/projects", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "DATE_ORDER");
    assert_eq!(body_json(get(&app, "/projects").await).await, json!([]));
}

#[tokio::test]
async fn missing_manager_returns_400() {
    let app = common::build_test_app();

    let response = post_json(&app, "/projects", json!({ "title": "Apollo" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["details"][0]["field"], "managerId");
}

#[tokio::test]
async fn update_replaces_and_clears_end_date() {
    let app = common::build_test_app();
    let created = create(&app, "/projects", project_body("Apollo", 1)).await;

    let response = put_json(
        &app,
        "/projects/1",
        json!({ "title": "Apollo 11", "description": "moon", "managerId": 2 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["title"], "Apollo 11");
    assert_eq!(updated["managerId"], 2);
    assert_eq!(updated["endDate"], Value::Null);
    assert_eq!(updated["startDate"], created["startDate"]);
}

#[tokio::test]
async fn update_unknown_project_returns_404() {
    let app = common::build_test_app();

    let response = put_json(&app, "/projects/8", project_body("Apollo", 1)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let app = common::build_test_app();
    create(&app, "/projects", project_body("Apollo", 1)).await;

    let response = delete(&app, "/projects/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!("Deleted successfully"));

    assert_eq!(get(&app, "/projects/1").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn project_tasks_lists_tasks_in_project() {
    let app = common::build_test_app();
    create(&app, "/projects", project_body("Apollo", 1)).await;
    create(&app, "/projects", project_body("Gemini", 1)).await;
    create(&app, "/tasks", task_body("launch", 1, 1)).await;
    create(&app, "/tasks", task_body("orbit", 1, 2)).await;
    create(&app, "/tasks", task_body("land", 2, 1)).await;

    let response = get(&app, "/projects/1/tasks").await;
    assert_eq!(response.status(), StatusCode::OK);

    let titles: Vec<_> = body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, ["launch", "land"]);
}

#[tokio::test]
async fn project_tasks_for_unknown_project_returns_404() {
    let app = common::build_test_app();

    let response = get(&app, "/projects/3/tasks").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Project with id 3 not found");
}

#[tokio::test]
async fn deleting_parents_leaves_tasks_in_place() {
    let app = common::build_test_app();
    create(&app, "/users", user_body("Ada", "ada@example.com")).await;
    create(&app, "/projects", project_body("Apollo", 1)).await;
    create(&app, "/tasks", task_body("launch", 1, 1)).await;

    delete(&app, "/users/1").await;
    delete(&app, "/projects/1").await;

    let response = get(&app, "/tasks/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["projectId"], 1);
}
