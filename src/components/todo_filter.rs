//! Todo Filter Component

use leptos::prelude::*;

use crate::models::FilterStatus;
use crate::store::AppStore;

/// All / Active / Completed links; the current one is `selected`.
#[component]
pub fn TodoFilter(store: AppStore) -> impl IntoView {
    view! {
        <nav class="filter">
            {FilterStatus::ALL.into_iter().map(move |status| {
                let link_class = move || {
                    if store.filter() == status { "filter__link selected" } else { "filter__link" }
                };
                view! {
                    <a
                        href=status.href()
                        class=link_class
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            store.set_filter(status);
                        }
                    >
                        {status.label()}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
