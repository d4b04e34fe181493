//! In-memory `TodoApi` for store tests.
//!
//! Records every call, assigns ids from a counter, fails on demand and
//! can hold a call open until a gate is released.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use super::TodoApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{NewTodo, Todo};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(u32),
    Create(NewTodo),
    Update(Todo),
    Delete(u32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
}

#[derive(Default)]
struct Inner {
    todos: Vec<Todo>,
    next_id: u32,
    calls: Vec<Call>,
    failing: Vec<Op>,
    failing_ids: Vec<u32>,
    gate: Option<oneshot::Receiver<()>>,
    rewrite: Option<Rc<dyn Fn(&Todo) -> Todo>>,
}

#[derive(Clone, Default)]
pub struct MockTodoApi {
    inner: Rc<RefCell<Inner>>,
}

impl MockTodoApi {
    pub fn new() -> Self {
        let mock = Self::default();
        mock.inner.borrow_mut().next_id = 100;
        mock
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let mock = Self::new();
        mock.inner.borrow_mut().todos = todos;
        mock
    }

    /// Every call of `op` fails with a 500 from now on.
    pub fn fail(&self, op: Op) {
        self.inner.borrow_mut().failing.push(op);
    }

    /// Update/delete calls for `id` fail with a 500.
    pub fn fail_id(&self, id: u32) {
        self.inner.borrow_mut().failing_ids.push(id);
    }

    /// The next call waits until the returned sender fires (or is dropped).
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner.borrow_mut().gate = Some(rx);
        tx
    }

    /// Updates persist and return `rewrite(sent)` in place of the record sent.
    pub fn rewrite_updates(&self, rewrite: impl Fn(&Todo) -> Todo + 'static) {
        self.inner.borrow_mut().rewrite = Some(Rc::new(rewrite));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.clone()
    }

    pub fn server_todos(&self) -> Vec<Todo> {
        self.inner.borrow().todos.clone()
    }

    async fn enter(&self, call: Call, op: Op, id: Option<u32>) -> ApiResult<()> {
        let gate = {
            let mut inner = self.inner.borrow_mut();
            inner.calls.push(call);
            inner.gate.take()
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let inner = self.inner.borrow();
        let id_fails = id.map_or(false, |id| inner.failing_ids.contains(&id));
        if inner.failing.contains(&op) || id_fails {
            return Err(ApiError::Status(500));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl TodoApi for MockTodoApi {
    async fn list(&self, user_id: u32) -> ApiResult<Vec<Todo>> {
        self.enter(Call::List(user_id), Op::List, None).await?;
        Ok(self
            .inner
            .borrow()
            .todos
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, draft: &NewTodo) -> ApiResult<Todo> {
        self.enter(Call::Create(draft.clone()), Op::Create, None).await?;
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let todo = Todo {
            id: inner.next_id,
            title: draft.title.clone(),
            completed: draft.completed,
            user_id: draft.user_id,
        };
        inner.todos.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, todo: &Todo) -> ApiResult<Todo> {
        self.enter(Call::Update(todo.clone()), Op::Update, Some(todo.id)).await?;
        let mut inner = self.inner.borrow_mut();
        let saved = match &inner.rewrite {
            Some(rewrite) => rewrite(todo),
            None => todo.clone(),
        };
        match inner.todos.iter_mut().find(|t| t.id == todo.id) {
            Some(stored) => {
                *stored = saved.clone();
                Ok(saved)
            }
            None => Err(ApiError::Status(404)),
        }
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.enter(Call::Delete(id), Op::Delete, Some(id)).await?;
        self.inner.borrow_mut().todos.retain(|t| t.id != id);
        Ok(())
    }
}
