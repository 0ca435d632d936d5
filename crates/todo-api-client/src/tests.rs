use httpmock::prelude::*;
use serde_json::json;

use crate::{AddTaskArgs, ApiError, CreateTodoArgs, MarkCompletedArgs, TodoApi, UpdateTodoArgs};

fn api(server: &MockServer) -> TodoApi {
    TodoApi::new(&server.base_url()).expect("mock server URL should parse")
}

fn todo_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": null,
        "completed": false,
        "tasks": []
    })
}

#[tokio::test]
async fn create_todo_posts_title_and_description() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/todos")
                .json_body(json!({"title": "Groceries", "description": "weekly run"}));
            then.status(200).json_body(json!({
                "code": 0,
                "message": "OK",
                "data": todo_json("t-1", "Groceries")
            }));
        })
        .await;

    let created = api(&server)
        .create_todo(&CreateTodoArgs {
            title: "Groceries",
            description: Some("weekly run"),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(created.id, "t-1");
    assert_eq!(created.title, "Groceries");
    assert!(!created.completed);
}

#[tokio::test]
async fn create_todo_omits_absent_description() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/todos")
                .json_body(json!({"title": "Groceries"}));
            then.status(200).json_body(json!({
                "code": 0,
                "data": todo_json("t-1", "Groceries")
            }));
        })
        .await;

    api(&server)
        .create_todo(&CreateTodoArgs {
            title: "Groceries",
            description: None,
        })
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn create_todo_surfaces_server_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/todos");
            then.status(500)
                .json_body(json!({"code": 500, "message": "title already exists", "data": null}));
        })
        .await;

    let err = api(&server)
        .create_todo(&CreateTodoArgs {
            title: "Groceries",
            description: None,
        })
        .await
        .unwrap_err();

    match &err {
        ApiError::Api { code, message } => {
            assert_eq!(*code, 500);
            assert_eq!(message.as_deref(), Some("title already exists"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(err.user_message("Failed to create todo"), "title already exists");
}

#[tokio::test]
async fn user_message_falls_back_when_server_message_absent() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/todos");
            then.status(500).json_body(json!({"code": 1}));
        })
        .await;

    let err = api(&server)
        .create_todo(&CreateTodoArgs {
            title: "Groceries",
            description: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.user_message("Failed to create todo"), "Failed to create todo");
}

#[tokio::test]
async fn list_todos_preserves_server_order() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/todos");
            then.status(200).json_body(json!({
                "code": 0,
                "data": [todo_json("t-2", "Second"), todo_json("t-1", "First")]
            }));
        })
        .await;

    let todos = api(&server).list_todos().await.unwrap();
    let titles: Vec<_> = todos.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Second", "First"]);
}

#[tokio::test]
async fn list_todos_tolerates_summary_projection() {
    // The list endpoint may omit tasks and description entirely.
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/todos");
            then.status(200).json_body(json!({
                "code": 0,
                "data": [{"id": "t-1", "title": "Groceries", "completed": false}]
            }));
        })
        .await;

    let todos = api(&server).list_todos().await.unwrap();
    assert_eq!(todos.len(), 1);
    assert!(todos[0].tasks.is_empty());
    assert!(todos[0].description.is_none());
}

#[tokio::test]
async fn list_todos_unparsable_failure_degrades_to_status_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/todos");
            then.status(502).body("bad gateway");
        })
        .await;

    let err = api(&server).list_todos().await.unwrap_err();
    assert!(matches!(err, ApiError::Status(s) if s.as_u16() == 502));
    assert_eq!(err.user_message("Failed to load todos"), "Failed to load todos");
}

#[tokio::test]
async fn get_todo_includes_nested_tasks() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/todos/t-1");
            then.status(200).json_body(json!({
                "code": 0,
                "data": {
                    "id": "t-1",
                    "title": "Groceries",
                    "description": "weekly run",
                    "completed": false,
                    "tasks": [{
                        "id": "task-1",
                        "todoId": "t-1",
                        "title": "Milk",
                        "description": null,
                        "completed": true
                    }]
                }
            }));
        })
        .await;

    let todo = api(&server).get_todo("t-1").await.unwrap();
    assert_eq!(todo.tasks.len(), 1);
    assert_eq!(todo.tasks[0].todo_id, "t-1");
    assert_eq!(todo.tasks[0].title, "Milk");
    assert!(todo.tasks[0].completed);
}

#[tokio::test]
async fn get_todo_unknown_id_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/todos/missing");
            then.status(404)
                .json_body(json!({"code": 404, "message": "todo not found", "data": null}));
        })
        .await;

    let err = api(&server).get_todo("missing").await.unwrap_err();
    assert!(matches!(err, ApiError::Api { code: 404, .. }));
}

#[tokio::test]
async fn success_without_data_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/todos/t-1");
            then.status(200).json_body(json!({"code": 0, "message": "OK"}));
        })
        .await;

    let err = api(&server).get_todo("t-1").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn update_todo_sends_only_present_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/todos/t-1")
                .json_body(json!({"title": "Renamed"}));
            then.status(200);
        })
        .await;

    api(&server)
        .update_todo(
            "t-1",
            &UpdateTodoArgs {
                title: Some("Renamed"),
                ..UpdateTodoArgs::default()
            },
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn update_todo_checks_status_only() {
    // No envelope in the response body; a 2xx is enough.
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/todos/t-1");
            then.status(204);
        })
        .await;

    api(&server)
        .update_todo("t-1", &UpdateTodoArgs::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_todo_reports_non_success_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/todos/t-1");
            then.status(500);
        })
        .await;

    let err = api(&server).delete_todo("t-1").await.unwrap_err();
    assert!(matches!(err, ApiError::Status(s) if s.as_u16() == 500));
}

#[tokio::test]
async fn add_task_posts_camel_case_ids() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/todos/task")
                .json_body(json!({"todoId": "t-1", "title": "Milk", "description": "2L"}));
            then.status(200).json_body(json!({"code": 0, "data": true}));
        })
        .await;

    api(&server)
        .add_task(&AddTaskArgs {
            todo_id: "t-1",
            title: "Milk",
            description: Some("2L"),
        })
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn add_task_failure_is_not_silently_dropped() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/todos/task");
            then.status(500)
                .json_body(json!({"code": 500, "message": "todo not found"}));
        })
        .await;

    let err = api(&server)
        .add_task(&AddTaskArgs {
            todo_id: "missing",
            title: "Milk",
            description: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.user_message("Failed to add task"), "todo not found");
}

#[tokio::test]
async fn mark_task_completed_posts_both_ids() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/todos/completed")
                .json_body(json!({"taskId": "task-1", "todoId": "t-1"}));
            then.status(200).json_body(json!({"code": 0, "data": true}));
        })
        .await;

    api(&server)
        .mark_task_completed(&MarkCompletedArgs {
            task_id: "task-1",
            todo_id: "t-1",
        })
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn create_then_list_contains_the_new_title() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/todos");
            then.status(200)
                .json_body(json!({"code": 0, "data": todo_json("t-1", "Groceries")}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/todos");
            then.status(200)
                .json_body(json!({"code": 0, "data": [todo_json("t-1", "Groceries")]}));
        })
        .await;

    let client = api(&server);
    client
        .create_todo(&CreateTodoArgs {
            title: "Groceries",
            description: None,
        })
        .await
        .unwrap();
    let todos = client.list_todos().await.unwrap();
    assert!(todos.iter().any(|t| t.title == "Groceries"));
}

#[test]
fn rejects_unparsable_base_url() {
    assert!(matches!(TodoApi::new("not a url"), Err(ApiError::Url(_))));
}
