//! Domain models and request argument structs.
//!
//! Data structures matching the server's wire contract (camelCase JSON).

use serde::{Deserialize, Serialize};

/// Todo container (matches server DTO)
///
/// `tasks` and `description` default when absent: the list endpoint may
/// return a summary projection without them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
    #[serde(default)]
    pub tasks: Vec<TodoTask>,
}

/// Sub-task owned by exactly one [`Todo`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoTask {
    pub id: String,
    pub todo_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
}

// ========================
// Argument Structs
// ========================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoArgs<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

/// Partial update: absent fields are omitted from the body and preserved
/// server-side.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTaskArgs<'a> {
    pub todo_id: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkCompletedArgs<'a> {
    pub task_id: &'a str,
    pub todo_id: &'a str,
}

/// Uniform response envelope. `code == 0` denotes success.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}
