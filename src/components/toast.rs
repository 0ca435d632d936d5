//! Toast Stack Component
//!
//! Renders the notice stack in a corner; notices auto-dismiss but can be
//! closed by hand.

use leptos::prelude::*;

use crate::notify::{self, NoticeKind};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "toast success",
                        NoticeKind::Error => "toast error",
                    };
                    let id = notice.id;
                    view! {
                        <div class=class>
                            <span>{notice.text.clone()}</span>
                            <button on:click=move |_| notify::dismiss(store, id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
