//! HTTP-level tests for group listing, creation, deletion and month copy.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_form, redirect_location};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Listing and creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn add_group_redirects_to_month_list(pool: SqlitePool) {
    let response = post_form(build_test_app(pool.clone()), "/add_group", "name=Morning&month=2").await;
    assert_eq!(redirect_location(&response), "/groups/2");

    let json = body_json(get(build_test_app(pool), "/groups/2").await).await;
    assert_eq!(json["data"]["month"], 2);
    let groups = json["data"]["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["name"], "Morning");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn group_names_are_trimmed(pool: SqlitePool) {
    let response = post_form(
        build_test_app(pool.clone()),
        "/add_group",
        "name=%20%20Evening%20&month=2",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let json = body_json(get(build_test_app(pool), "/groups/2").await).await;
    assert_eq!(json["data"]["groups"][0]["name"], "Evening");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn groups_are_listed_per_month_only(pool: SqlitePool) {
    common::add_group(&pool, "Alpha", 1).await;
    common::add_group(&pool, "Beta", 2).await;

    let json = body_json(get(build_test_app(pool), "/groups/1").await).await;
    let groups = json["data"]["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["name"], "Alpha");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_group_in_month_returns_409(pool: SqlitePool) {
    common::add_group(&pool, "Alpha", 4).await;

    let response = post_form(build_test_app(pool.clone()), "/add_group", "name=Alpha&month=4").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    // The same name in another month is a separate group.
    let response = post_form(build_test_app(pool), "/add_group", "name=Alpha&month=5").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_month_returns_400(pool: SqlitePool) {
    let response = get(build_test_app(pool.clone()), "/groups/13").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_form(build_test_app(pool), "/add_group", "name=Alpha&month=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_form_field_returns_400(pool: SqlitePool) {
    let response = post_form(build_test_app(pool), "/add_group", "month=3").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_group_name_returns_400(pool: SqlitePool) {
    let response = post_form(build_test_app(pool), "/add_group", "name=%20&month=3").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_numeric_path_returns_400(pool: SqlitePool) {
    let response = get(build_test_app(pool), "/groups/june").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_group_removes_sheet(pool: SqlitePool) {
    let group_id = common::add_group(&pool, "Alpha", 6).await;
    common::add_student(&pool, "Ann", 1000, 6, group_id).await;
    common::add_lesson(&pool, 6, group_id, "2026-06-02").await;

    let response = get(
        build_test_app(pool.clone()),
        &format!("/delete_group/{group_id}/6"),
    )
    .await;
    assert_eq!(redirect_location(&response), "/groups/6");

    let response = get(build_test_app(pool.clone()), &format!("/month/6/{group_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(get(build_test_app(pool), "/groups/6").await).await;
    assert_eq!(json["data"]["groups"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_group_in_wrong_month_returns_404(pool: SqlitePool) {
    let group_id = common::add_group(&pool, "Alpha", 6).await;

    let response = get(
        build_test_app(pool.clone()),
        &format!("/delete_group/{group_id}/7"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Still there in its own month.
    let response = get(build_test_app(pool), &format!("/month/6/{group_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Month copy
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn copy_month_carries_groups_and_students(pool: SqlitePool) {
    let group_id = common::add_group(&pool, "Alpha", 4).await;
    common::add_student(&pool, "Ann", 1500, 4, group_id).await;
    common::add_student(&pool, "Bob", 2000, 4, group_id).await;
    common::add_lesson(&pool, 4, group_id, "2026-04-07").await;

    let response = get(build_test_app(pool.clone()), "/copy_month/5").await;
    assert_eq!(redirect_location(&response), "/groups/5");

    let json = body_json(get(build_test_app(pool.clone()), "/groups/5").await).await;
    let groups = json["data"]["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["name"], "Alpha");
    let copied_id = groups[0]["id"].as_i64().unwrap();
    assert_ne!(copied_id, group_id);

    let sheet = common::month_sheet(&pool, 5, copied_id).await;
    let rows = sheet["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["student"]["name"], "Ann");
    assert_eq!(rows[0]["student"]["fee"], 1500);
    assert_eq!(rows[1]["student"]["name"], "Bob");
    assert_eq!(rows[1]["student"]["fee"], 2000);
    // Lessons stay in the month they were recorded in.
    assert_eq!(sheet["lessons"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn copy_month_twice_is_a_no_op(pool: SqlitePool) {
    let group_id = common::add_group(&pool, "Alpha", 4).await;
    common::add_student(&pool, "Ann", 1500, 4, group_id).await;

    for _ in 0..2 {
        let response = get(build_test_app(pool.clone()), "/copy_month/5").await;
        assert_eq!(redirect_location(&response), "/groups/5");
    }

    let json = body_json(get(build_test_app(pool.clone()), "/groups/5").await).await;
    let groups = json["data"]["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);

    let copied_id = groups[0]["id"].as_i64().unwrap();
    let sheet = common::month_sheet(&pool, 5, copied_id).await;
    assert_eq!(sheet["rows"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn copy_into_first_month_does_nothing(pool: SqlitePool) {
    common::add_group(&pool, "Alpha", 12).await;

    let response = get(build_test_app(pool.clone()), "/copy_month/1").await;
    assert_eq!(redirect_location(&response), "/groups/1");

    let json = body_json(get(build_test_app(pool), "/groups/1").await).await;
    assert_eq!(json["data"]["groups"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn recopy_keeps_deleted_student_out(pool: SqlitePool) {
    let group_id = common::add_group(&pool, "Alpha", 4).await;
    common::add_student(&pool, "Ann", 1500, 4, group_id).await;
    common::add_student(&pool, "Bob", 2000, 4, group_id).await;

    get(build_test_app(pool.clone()), "/copy_month/5").await;
    let json = body_json(get(build_test_app(pool.clone()), "/groups/5").await).await;
    let may_id = json["data"]["groups"][0]["id"].as_i64().unwrap();

    let sheet = common::month_sheet(&pool, 5, may_id).await;
    let bob_id = sheet["rows"][1]["student"]["id"].as_i64().unwrap();
    let response = get(
        build_test_app(pool.clone()),
        &format!("/delete_student_select/5/{may_id}?student_id={bob_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = get(build_test_app(pool.clone()), "/copy_month/5").await;
    assert_eq!(redirect_location(&response), "/groups/5");

    let sheet = common::month_sheet(&pool, 5, may_id).await;
    let names: Vec<_> = sheet["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["student"]["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Ann"]);
}
