//! Error Notification Component
//!
//! Banner for the store's current error, hidden again after a few seconds.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::store::AppStore;

const AUTO_HIDE_MS: u32 = 3000;

#[component]
pub fn ErrorNotification(store: AppStore) -> impl IntoView {
    let timer = StoredValue::new_local(None::<Timeout>);

    // Every new error restarts the timer; dropping a Timeout cancels it
    Effect::new(move |_| {
        let error = store.error();
        timer.set_value(None);
        if error.is_some() {
            timer.set_value(Some(Timeout::new(AUTO_HIDE_MS, move || store.clear_error())));
        }
    });

    view! {
        <div class=move || {
            if store.error().is_some() {
                "notification is-danger is-light has-text-weight-normal"
            } else {
                "notification is-danger is-light has-text-weight-normal hidden"
            }
        }>
            <button type="button" class="delete" on:click=move |_| store.clear_error() />
            {move || store.error().map(|e| e.to_string()).unwrap_or_default()}
        </div>
    }
}
