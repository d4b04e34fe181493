//! Todo Header Component
//!
//! Toggle-all button and the new-todo input.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::TodoError;
use crate::store::AppStore;

#[component]
pub fn TodoHeader(store: AppStore) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    // Refocus the input whenever the disabled flag flips
    Effect::new(move |_| {
        let _ = store.is_disabled();
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let add = store.add_todo(&title.get_untracked());
        spawn_local(async move {
            match add.await {
                // Blank input is cleared too; only a failed create keeps the text
                Ok(_) | Err(TodoError::EmptyTitle) => set_title.set(String::new()),
                Err(_) => {}
            }
        });
    };

    view! {
        <header class="todoapp__header">
            <Show when=move || !store.is_empty()>
                <button
                    type="button"
                    class=move || {
                        if store.all_completed() { "todoapp__toggle-all active" } else { "todoapp__toggle-all" }
                    }
                    aria-label="Toggle"
                    on:click=move |_| spawn_local(store.toggle_all())
                />
            </Show>

            <form on:submit=on_submit>
                <input
                    node_ref=input_ref
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    disabled=move || store.is_disabled()
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </form>
        </header>
    }
}
