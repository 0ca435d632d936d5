//! HTTP gateway for the todo service.
//!
//! Maps each domain operation to one request/response cycle against the
//! service's REST API and normalizes its `{code, message, data}` response
//! envelope into typed results. Compiles for both `wasm32-unknown-unknown`
//! (fetch-backed reqwest) and native targets, so the test suite runs on the
//! host against a mock server.

mod client;
mod types;

pub use client::{ApiError, TodoApi, DEFAULT_BASE_URL};
pub use types::{AddTaskArgs, CreateTodoArgs, MarkCompletedArgs, Todo, TodoTask, UpdateTodoArgs};

#[cfg(test)]
mod tests;
