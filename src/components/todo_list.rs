//! Todo List Component
//!
//! Filtered todos followed by the optimistic placeholder, if any.

use leptos::prelude::*;

use crate::components::{PlaceholderItem, TodoItem};
use crate::models::Todo;
use crate::store::AppStore;

/// Title and status are part of the key so a reconciled record re-renders.
/// A failed update keeps the key, and the row has to reset itself.
fn row_key(todo: &Todo) -> (u32, String, bool) {
    (todo.id, todo.title.clone(), todo.completed)
}

#[component]
pub fn TodoList(store: AppStore) -> impl IntoView {
    view! {
        <section class="todoapp__main">
            <For
                each=move || store.visible_todos()
                key=row_key
                children=move |todo| view! { <TodoItem store=store todo=todo /> }
            />

            {move || store.placeholder().map(|todo| view! { <PlaceholderItem todo=todo /> })}
        </section>
    }
}
