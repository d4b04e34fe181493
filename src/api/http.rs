//! HTTP Todo Client
//!
//! `reqwest` uses the browser fetch API on wasm32.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::TodoApi;
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{NewTodo, Todo};

#[derive(Clone, Debug)]
pub struct HttpTodoClient {
    client: Client,
    base_url: String,
}

impl HttpTodoClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let body = check_status(response)?.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// PATCH may answer with an empty body or `null`; `None` means "accepted".
fn parse_optional_record(body: &str) -> ApiResult<Option<Todo>> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<Todo>>(body)?)
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoClient {
    async fn list(&self, user_id: u32) -> ApiResult<Vec<Todo>> {
        log::debug!("[API] GET /todos?userId={}", user_id);
        let response = self
            .client
            .get(self.collection_url())
            .query(&[("userId", user_id)])
            .send()
            .await?;
        read_json(response).await
    }

    async fn create(&self, draft: &NewTodo) -> ApiResult<Todo> {
        log::debug!("[API] POST /todos {:?}", draft.title);
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        read_json(response).await
    }

    async fn update(&self, todo: &Todo) -> ApiResult<Todo> {
        log::debug!("[API] PATCH /todos/{}", todo.id);
        let response = self
            .client
            .patch(self.item_url(todo.id))
            .json(todo)
            .send()
            .await?;
        let body = check_status(response)?.text().await?;
        Ok(parse_optional_record(&body)?.unwrap_or_else(|| todo.clone()))
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        log::debug!("[API] DELETE /todos/{}", id);
        let response = self.client.delete(self.item_url(id)).send().await?;
        check_status(response)?;
        Ok(())
    }
}
