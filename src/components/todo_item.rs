//! Todo Item Component
//!
//! Single row: status checkbox, title with inline editing, delete button
//! and the loader overlay shown while the row's id is pending.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Todo;
use crate::store::{AppStore, TitleEdit};

#[component]
pub fn TodoItem(store: AppStore, todo: Todo) -> impl IntoView {
    let id = todo.id;
    let completed = todo.completed;
    let (editing, set_editing) = signal(false);
    let (saving, set_saving) = signal(false);
    let (checked, set_checked) = signal(completed);
    let (draft, set_draft) = signal(todo.title.clone());
    let edit_ref = NodeRef::<html::Input>::new();
    let todo = StoredValue::new(todo);

    // Focus the title field once it is mounted
    Effect::new(move |_| {
        if let Some(input) = edit_ref.get() {
            let _ = input.focus();
        }
    });

    // A saved toggle re-keys the row; a failed one must undo the browser's flip
    let toggle = move |_: web_sys::Event| {
        let update = store.update_todo(todo.get_value().toggled());
        spawn_local(async move {
            if let Err(e) = update.await {
                log::debug!("[ITEM] toggle of #{} failed: {}", id, e);
                set_checked.set(completed);
            }
        });
    };

    let cancel = move || {
        set_editing.set(false);
        set_draft.set(todo.with_value(|t| t.title.clone()));
    };

    // Submit and blur both land here; Escape or an in-flight save wins
    let commit = move || {
        if !editing.get_untracked() || saving.get_untracked() {
            return;
        }
        let current = todo.get_value();
        let input = draft.get_untracked();
        match TitleEdit::resolve(&current.title, &input) {
            TitleEdit::Rename(title) => set_draft.set(title),
            _ => set_draft.set(current.title.clone()),
        }

        set_saving.set(true);
        let rename = store.rename_todo(&current, &input);
        spawn_local(async move {
            let result = rename.await;
            set_saving.set(false);
            match result {
                Ok(()) => set_editing.set(false),
                Err(e) => {
                    log::debug!("[ITEM] rename of #{} failed: {}", id, e);
                    if let Some(input) = edit_ref.get_untracked() {
                        let _ = input.focus();
                    }
                }
            }
        });
    };

    view! {
        <div class=move || if completed { "todo completed" } else { "todo" }>
            <label class="todo__status-label">
                <input
                    type="checkbox"
                    class="todo__status"
                    prop:checked=move || checked.get()
                    on:change=toggle
                />
            </label>

            {move || if editing.get() {
                view! {
                    <form on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        commit();
                    }>
                        <input
                            node_ref=edit_ref
                            type="text"
                            class="todo__title-field"
                            placeholder="Empty todo will be deleted"
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:keyup=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Escape" {
                                    cancel();
                                }
                            }
                            on:blur=move |_| commit()
                        />
                    </form>
                }.into_any()
            } else {
                view! {
                    <span class="todo__title" on:dblclick=move |_| set_editing.set(true)>
                        {move || draft.get()}
                    </span>
                    <button
                        type="button"
                        class="todo__remove"
                        on:click=move |_| spawn_local(store.delete_todo(id))
                    >
                        "×"
                    </button>
                }.into_any()
            }}

            <div class=move || {
                if store.is_disabled() && store.is_pending(id) { "modal overlay is-active" } else { "modal overlay" }
            }>
                <div class="modal-background has-background-white-ter"></div>
                <div class="loader"></div>
            </div>
        </div>
    }
}

/// Read-only row for the todo being created.
#[component]
pub fn PlaceholderItem(todo: Todo) -> impl IntoView {
    view! {
        <div class="todo">
            <label class="todo__status-label">
                <input type="checkbox" class="todo__status" disabled=true />
            </label>
            <span class="todo__title">{todo.title}</span>
            <div class="modal overlay is-active">
                <div class="modal-background has-background-white-ter"></div>
                <div class="loader"></div>
            </div>
        </div>
    }
}
