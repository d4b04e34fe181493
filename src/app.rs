//! Todo App
//!
//! Builds the store once and hands it to every view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoClient;
use crate::components::{ErrorNotification, TodoFooter, TodoHeader, TodoList};
use crate::config::Config;
use crate::store::{AppStore, TodoStore};

#[component]
pub fn App(config: Config) -> impl IntoView {
    let store: AppStore = TodoStore::new(HttpTodoClient::new(&config), config.user_id);

    // Initial load, once per mount
    spawn_local(async move {
        store.load().await;
    });

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <TodoHeader store=store />
                <TodoList store=store />
                <TodoFooter store=store />
            </div>

            <ErrorNotification store=store />
        </div>
    }
}
