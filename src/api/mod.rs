//! Remote Todo Client
//!
//! Async contract for the todo collection, with the HTTP implementation
//! used in the browser and a recording mock for tests.

mod http;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{NewTodo, Todo};

pub use http::HttpTodoClient;

/// CRUD operations against a todo collection.
///
/// Each call is attempted once; failures are reported to the caller
/// without retry. `?Send` because browser fetch futures are not `Send`.
#[async_trait(?Send)]
pub trait TodoApi {
    /// All todos owned by `user_id`
    async fn list(&self, user_id: u32) -> ApiResult<Vec<Todo>>;

    /// Persist a new todo; the returned record carries the server id
    async fn create(&self, draft: &NewTodo) -> ApiResult<Todo>;

    /// Replace the full record matching `todo.id`
    async fn update(&self, todo: &Todo) -> ApiResult<Todo>;

    async fn delete(&self, id: u32) -> ApiResult<()>;
}
