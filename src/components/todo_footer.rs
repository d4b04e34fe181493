//! Todo Footer Component
//!
//! Items-left counter, filter links and the clear-completed button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TodoFilter;
use crate::store::AppStore;

#[component]
pub fn TodoFooter(store: AppStore) -> impl IntoView {
    view! {
        <Show when=move || !store.is_empty()>
            <footer class="todoapp__footer">
                <span class="todo-count">{move || store.items_left_label()}</span>

                <TodoFilter store=store />

                <button
                    type="button"
                    class="todoapp__clear-completed"
                    disabled=move || !store.has_completed()
                    on:click=move |_| spawn_local(store.clear_completed())
                >
                    "Clear completed"
                </button>
            </footer>
        </Show>
    }
}
