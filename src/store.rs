//! Todo State Store
//!
//! Single source of truth for todo data and the optimistic UI state
//! around each remote call. Uses Leptos reactive_stores for fine-grained
//! reactivity; views read through the tracked accessors below.

use std::future::Future;
use std::rc::Rc;

use futures::future::{self, join_all, FutureExt, LocalBoxFuture};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use reactive_stores::Store;

use crate::api::{HttpTodoClient, TodoApi};
use crate::error::{ApiError, TodoError};
use crate::models::{FilterStatus, NewTodo, Todo, PLACEHOLDER_ID};

/// Todo list plus transient UI state
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Persisted todos in server order
    pub todos: Vec<Todo>,
    pub filter: FilterStatus,
    /// Error currently shown in the notification banner
    pub error: Option<TodoError>,
    /// True while any mutating call is in flight
    pub is_disabled: bool,
    /// Ids awaiting a server response, one entry per in-flight call
    pub pending_ids: Vec<u32>,
    /// Optimistic add-in-progress item
    pub placeholder: Option<Todo>,
}

impl TodoState {
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    pub fn completed_ids(&self) -> Vec<u32> {
        self.todos
            .iter()
            .filter(|todo| todo.completed)
            .map(|todo| todo.id)
            .collect()
    }

    pub fn is_pending(&self, id: u32) -> bool {
        self.pending_ids.contains(&id)
    }

    /// Records that `toggle_all` sends: every active todo completed, or, when
    /// none is active, every todo reopened.
    pub fn toggle_all_targets(&self) -> Vec<Todo> {
        if self.active_count() > 0 {
            self.todos
                .iter()
                .filter(|todo| !todo.completed)
                .map(|todo| todo.with_completed(true))
                .collect()
        } else {
            self.todos.iter().map(|todo| todo.with_completed(false)).collect()
        }
    }

    fn mark_pending(&mut self, id: u32) {
        self.pending_ids.push(id);
        self.is_disabled = true;
    }

    fn begin_add(&mut self, placeholder: Todo) {
        self.placeholder = Some(placeholder);
        self.error = None;
        self.mark_pending(PLACEHOLDER_ID);
    }

    fn settle(&mut self, id: u32) {
        if let Some(pos) = self.pending_ids.iter().position(|&p| p == id) {
            self.pending_ids.remove(pos);
        }
        if id == PLACEHOLDER_ID && !self.is_pending(PLACEHOLDER_ID) {
            self.placeholder = None;
        }
        self.is_disabled = !self.pending_ids.is_empty();
    }

}

fn items_left_label(active: usize) -> String {
    format!("{} item{} left", active, if active == 1 { "" } else { "s" })
}

fn replace_todo(todos: &mut [Todo], updated: Todo) {
    if let Some(todo) = todos.iter_mut().find(|todo| todo.id == updated.id) {
        *todo = updated;
    }
}

/// What an inline title edit should do once committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleEdit {
    /// Blank input deletes the todo
    Delete,
    Unchanged,
    Rename(String),
}

impl TitleEdit {
    pub fn resolve(current: &str, input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            TitleEdit::Delete
        } else if trimmed == current {
            TitleEdit::Unchanged
        } else {
            TitleEdit::Rename(trimmed.to_string())
        }
    }
}

/// Marks an id pending for as long as it lives.
///
/// Dropped on every exit path of a call, including when the future
/// itself is dropped, so markers cannot get stuck.
struct PendingGuard {
    state: Store<TodoState>,
    id: u32,
}

impl PendingGuard {
    fn begin(state: Store<TodoState>, id: u32) -> Self {
        state.update(|s| s.mark_pending(id));
        Self { state, id }
    }

    fn placeholder(state: Store<TodoState>, placeholder: Todo) -> Self {
        state.update(|s| s.begin_add(placeholder));
        Self { state, id: PLACEHOLDER_ID }
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        let id = self.id;
        let _ = self.state.try_update(|s| s.settle(id));
    }
}

/// Store handle passed explicitly to every view.
///
/// Mutations enter the pending state synchronously when called; the
/// returned future performs the remote call and reconciles.
pub struct TodoStore<A: 'static> {
    state: Store<TodoState>,
    api: StoredValue<Rc<A>, LocalStorage>,
    user_id: u32,
}

impl<A: 'static> Clone for TodoStore<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static> Copy for TodoStore<A> {}

/// Store type used by the app
pub type AppStore = TodoStore<HttpTodoClient>;

impl<A: TodoApi + 'static> TodoStore<A> {
    pub fn new(api: A, user_id: u32) -> Self {
        Self {
            state: Store::new(TodoState::default()),
            api: StoredValue::new_local(Rc::new(api)),
            user_id,
        }
    }

    fn api(&self) -> Rc<A> {
        self.api.get_value()
    }

    fn record_failure(&self, error: TodoError, cause: &ApiError) {
        log::warn!("[STORE] {:?} failed: {}", error, cause);
        self.state.error().set(Some(error));
    }

    // ========================
    // Operations
    // ========================

    /// Initial fetch. On failure the list stays empty and `Loading` is shown.
    pub async fn load(&self) {
        match self.api().list(self.user_id).await {
            Ok(todos) => {
                log::info!("[STORE] loaded {} todos for user {}", todos.len(), self.user_id);
                self.state.todos().set(todos);
            }
            Err(e) => {
                log::warn!("[STORE] loading todos failed: {}", e);
                self.state.todos().write().clear();
                self.state.error().set(Some(TodoError::Loading));
            }
        }
    }

    /// Create a todo from `title`, trimmed. A blank title fails locally
    /// with `EmptyTitle` and never reaches the network.
    pub fn add_todo(&self, title: &str) -> impl Future<Output = Result<Todo, TodoError>> + 'static {
        let store = *self;
        let title = title.trim().to_string();
        let pending = if title.is_empty() {
            store.state.error().set(Some(TodoError::EmptyTitle));
            None
        } else {
            let placeholder = Todo::placeholder(title, store.user_id);
            let draft = NewTodo::from(&placeholder);
            Some((PendingGuard::placeholder(store.state, placeholder), draft))
        };

        async move {
            let Some((_guard, draft)) = pending else {
                return Err(TodoError::EmptyTitle);
            };
            match store.api().create(&draft).await {
                Ok(todo) => {
                    log::debug!("[STORE] created todo #{}", todo.id);
                    store.state.todos().write().push(todo.clone());
                    Ok(todo)
                }
                Err(e) => {
                    store.record_failure(TodoError::Add, &e);
                    Err(TodoError::Add)
                }
            }
        }
    }

    /// Replace the stored record with `todo` (toggle or rename).
    pub fn update_todo(&self, todo: Todo) -> impl Future<Output = Result<(), TodoError>> + 'static {
        let store = *self;
        let guard = PendingGuard::begin(store.state, todo.id);

        async move {
            let _guard = guard;
            match store.api().update(&todo).await {
                Ok(saved) => {
                    replace_todo(&mut store.state.todos().write(), saved);
                    Ok(())
                }
                Err(e) => {
                    store.record_failure(TodoError::Update, &e);
                    Err(TodoError::Update)
                }
            }
        }
    }

    /// Delete by id. Failures only set `Delete` on the banner.
    pub fn delete_todo(&self, id: u32) -> impl Future<Output = ()> + 'static {
        let store = *self;
        let guard = PendingGuard::begin(store.state, id);

        async move {
            let _guard = guard;
            match store.api().delete(id).await {
                Ok(()) => {
                    log::debug!("[STORE] deleted todo #{}", id);
                    store.state.todos().write().retain(|todo| todo.id != id);
                }
                Err(e) => store.record_failure(TodoError::Delete, &e),
            }
        }
    }

    /// Commit an inline edit of `todo`'s title.
    pub fn rename_todo(&self, todo: &Todo, input: &str) -> LocalBoxFuture<'static, Result<(), TodoError>> {
        match TitleEdit::resolve(&todo.title, input) {
            TitleEdit::Delete => self.delete_todo(todo.id).map(Ok).boxed_local(),
            TitleEdit::Unchanged => future::ready(Ok(())).boxed_local(),
            TitleEdit::Rename(title) => self.update_todo(todo.with_title(title)).boxed_local(),
        }
    }

    /// Complete every active todo, or reopen all when none is active.
    /// Updates run concurrently; failures are not aggregated.
    pub fn toggle_all(&self) -> impl Future<Output = ()> + 'static {
        let targets = self.state.with_untracked(TodoState::toggle_all_targets);
        let updates: Vec<_> = targets.into_iter().map(|todo| self.update_todo(todo)).collect();

        async move {
            let total = updates.len();
            let failed = join_all(updates).await.into_iter().filter(Result::is_err).count();
            if failed > 0 {
                log::warn!("[STORE] toggle all: {} of {} updates failed", failed, total);
            }
        }
    }

    /// Delete every completed todo concurrently.
    pub fn clear_completed(&self) -> impl Future<Output = ()> + 'static {
        let ids = self.state.with_untracked(TodoState::completed_ids);
        let deletes: Vec<_> = ids.into_iter().map(|id| self.delete_todo(id)).collect();

        async move {
            join_all(deletes).await;
        }
    }

    pub fn set_filter(&self, filter: FilterStatus) {
        self.state.filter().set(filter);
    }

    pub fn clear_error(&self) {
        self.state.error().set(None);
    }

    // ========================
    // Tracked reads
    // ========================

    pub fn visible_todos(&self) -> Vec<Todo> {
        let filter = self.state.filter().get();
        self.state
            .todos()
            .with(|todos| todos.iter().filter(|todo| filter.matches(todo)).cloned().collect())
    }

    pub fn filter(&self) -> FilterStatus {
        self.state.filter().get()
    }

    pub fn error(&self) -> Option<TodoError> {
        self.state.error().get()
    }

    pub fn is_disabled(&self) -> bool {
        self.state.is_disabled().get()
    }

    pub fn placeholder(&self) -> Option<Todo> {
        self.state.placeholder().get()
    }

    pub fn is_pending(&self, id: u32) -> bool {
        self.state.pending_ids().with(|ids| ids.contains(&id))
    }

    pub fn is_empty(&self) -> bool {
        self.state.todos().with(|todos| todos.is_empty())
    }

    pub fn has_completed(&self) -> bool {
        self.state.todos().with(|todos| todos.iter().any(|todo| todo.completed))
    }

    pub fn all_completed(&self) -> bool {
        self.state
            .todos()
            .with(|todos| !todos.is_empty() && todos.iter().all(|todo| todo.completed))
    }

    pub fn items_left_label(&self) -> String {
        self.state
            .todos()
            .with(|todos| items_left_label(todos.iter().filter(|todo| !todo.completed).count()))
    }
}
