//! Todo Frontend App
//!
//! Root component: owns the store and context (no module-level singleton),
//! runs the two query effects, and lays out the list/detail panes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_api_client::{TodoApi, DEFAULT_BASE_URL};

use crate::components::{TaskFormModal, ToastStack, TodoDetail, TodoFormModal, TodoListPane};
use crate::context::AppContext;
use crate::notify;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let api = TodoApi::new(DEFAULT_BASE_URL).expect("default base URL should parse");
    let store = Store::new(AppState::default());

    let (list_reload, set_list_reload) = signal(0u32);
    let (detail_reload, set_detail_reload) = signal(0u32);
    let (selected_id, set_selected_id) = signal::<Option<String>>(None);

    let ctx = AppContext::new(
        api,
        store,
        (list_reload, set_list_reload),
        (detail_reload, set_detail_reload),
        (selected_id, set_selected_id),
    );

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // List query: refetch whenever the reload trigger bumps. On failure the
    // previous snapshot (initially empty) stays visible.
    Effect::new(move |_| {
        let trigger = list_reload.get();
        let token = ctx.begin_list_fetch();
        store.list_loading().set(true);
        web_sys::console::log_1(&format!("[APP] Loading todos, trigger={trigger}").into());
        spawn_local(async move {
            let result = ctx.api().list_todos().await;
            if !ctx.list_fetch_is_current(token) {
                return;
            }
            store.list_loading().set(false);
            match result {
                Ok(todos) => store.todos().set(todos),
                Err(e) => notify::error(store, e.user_message("Failed to load todos")),
            }
        });
    });

    // Detail query: always refetch on selection change or explicit reload,
    // replacing the snapshot wholesale. A stale response for a superseded
    // selection is discarded by the generation token.
    Effect::new(move |_| {
        let _ = detail_reload.get();
        let id = selected_id.get();
        let token = ctx.begin_detail_fetch();
        let Some(id) = id else {
            store.selected().set(None);
            return;
        };
        spawn_local(async move {
            let result = ctx.api().get_todo(&id).await;
            if !ctx.detail_fetch_is_current(token) {
                return;
            }
            match result {
                Ok(todo) => store.selected().set(Some(todo)),
                // Keep the stale snapshot visible instead of blanking the
                // pane on a transient failure.
                Err(e) => notify::error(store, e.user_message("Failed to load todo")),
            }
        });
    });

    view! {
        <div class="app-layout">
            <TodoListPane />

            <main class="detail-pane">
                <TodoDetail />
            </main>

            <TodoFormModal />
            <TaskFormModal />
            <ToastStack />
        </div>
    }
}
