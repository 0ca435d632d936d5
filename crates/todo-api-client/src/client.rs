//! Todo service client.
//!
//! One outbound request per operation: no retries, no timeout beyond the
//! transport default, no cancellation.

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::types::{AddTaskArgs, CreateTodoArgs, Envelope, MarkCompletedArgs, Todo, UpdateTodoArgs};

/// Default base URL of the todo service deployment.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(StatusCode),
    #[error("server error (code {code}): {message:?}")]
    Api { code: i64, message: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message shown to the user: the server-supplied one verbatim when
    /// present and non-empty, otherwise the caller's per-operation fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Api {
                message: Some(m), ..
            } if !m.is_empty() => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TodoApi {
    client: Client,
    base: Url,
}

impl TodoApi {
    pub fn new(base: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base)?;
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(ApiError::Url)
    }

    /// POST `/todos`. Returns the created todo.
    pub async fn create_todo(&self, args: &CreateTodoArgs<'_>) -> Result<Todo, ApiError> {
        let resp = self.client.post(self.url("/todos")?).json(args).send().await?;
        unwrap_envelope(resp).await
    }

    /// GET `/todos`. Order is server-defined and treated as opaque.
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let resp = self.client.get(self.url("/todos")?).send().await?;
        unwrap_envelope(resp).await
    }

    /// GET `/todos/{id}`. Full todo with nested tasks; a missing id is an
    /// error, reported, not retried.
    pub async fn get_todo(&self, id: &str) -> Result<Todo, ApiError> {
        let resp = self
            .client
            .get(self.url(&format!("/todos/{id}"))?)
            .send()
            .await?;
        unwrap_envelope(resp).await
    }

    /// PUT `/todos/{id}` with partial fields. Success is "no thrown error";
    /// only the HTTP status is checked.
    pub async fn update_todo(&self, id: &str, args: &UpdateTodoArgs<'_>) -> Result<(), ApiError> {
        let resp = self
            .client
            .put(self.url(&format!("/todos/{id}"))?)
            .json(args)
            .send()
            .await?;
        check_status(&resp)
    }

    /// DELETE `/todos/{id}`. Status check only.
    pub async fn delete_todo(&self, id: &str) -> Result<(), ApiError> {
        let resp = self
            .client
            .delete(self.url(&format!("/todos/{id}"))?)
            .send()
            .await?;
        check_status(&resp)
    }

    /// POST `/todos/task`. The caller must refetch the parent todo to
    /// observe the new task.
    pub async fn add_task(&self, args: &AddTaskArgs<'_>) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.url("/todos/task")?)
            .json(args)
            .send()
            .await?;
        check_envelope(resp).await
    }

    /// POST `/todos/completed`. One-way transition; the caller must refetch
    /// the parent todo to observe the new state.
    pub async fn mark_task_completed(&self, args: &MarkCompletedArgs<'_>) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.url("/todos/completed")?)
            .json(args)
            .send()
            .await?;
        check_envelope(resp).await
    }
}

fn check_status(resp: &Response) -> Result<(), ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

/// Parse the envelope and return its `data`.
///
/// Failure responses carry the envelope too (HTTP status mirrors `code`),
/// so the body is parsed before the status is consulted: a parsable
/// envelope with `code != 0` surfaces the server message, an unparsable
/// non-2xx body degrades to a status error.
async fn unwrap_envelope<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let bytes = resp.bytes().await?;
    let envelope: Envelope<T> = match serde_json::from_slice(&bytes) {
        Ok(envelope) => envelope,
        Err(e) => {
            if !status.is_success() {
                return Err(ApiError::Status(status));
            }
            return Err(ApiError::Decode(e.to_string()));
        }
    };
    if envelope.code != 0 {
        return Err(ApiError::Api {
            code: envelope.code,
            message: envelope.message,
        });
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("missing data field".to_string()))
}

/// Same as [`unwrap_envelope`] for operations whose `data` the client
/// never uses.
async fn check_envelope(resp: Response) -> Result<(), ApiError> {
    let status = resp.status();
    let bytes = resp.bytes().await?;
    let envelope: Envelope<serde_json::Value> = match serde_json::from_slice(&bytes) {
        Ok(envelope) => envelope,
        Err(e) => {
            if !status.is_success() {
                return Err(ApiError::Status(status));
            }
            return Err(ApiError::Decode(e.to_string()));
        }
    };
    if envelope.code != 0 {
        return Err(ApiError::Api {
            code: envelope.code,
            message: envelope.message,
        });
    }
    Ok(())
}
