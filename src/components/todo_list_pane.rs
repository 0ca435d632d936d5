//! Todo List Pane Component
//!
//! Left column: selectable todo list with task-count badges and the
//! add-todo entry point.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Selectable list of todos driven by the list query
#[component]
pub fn TodoListPane() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let is_empty = move || store.todos().read().is_empty();

    view! {
        <aside class="list-pane">
            <h2>"Todos"</h2>

            <button class="add-todo-btn" on:click=move |_| ctx.todo_modal_open.set(true)>
                "Add todo"
            </button>

            <Show when=move || store.list_loading().get()>
                <p class="list-loading">"Loading..."</p>
            </Show>

            <Show when=move || !is_empty()>
                <ul class="todo-list">
                    <For
                        each=move || store.todos().get()
                        key=|todo| (todo.id.clone(), todo.title.clone(), todo.completed, todo.tasks.len())
                        children=move |todo| {
                            let id = todo.id.clone();
                            let select_id = todo.id.clone();
                            let is_selected = move || ctx.selected_id.get().as_deref() == Some(id.as_str());
                            let row_class = move || {
                                if is_selected() { "todo-row selected" } else { "todo-row" }
                            };

                            view! {
                                <li
                                    class=row_class
                                    on:click=move |_| ctx.select_todo(select_id.clone())
                                >
                                    <span class="todo-title">{todo.title.clone()}</span>
                                    <span class="todo-badge">{todo.tasks.len()}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            <Show when=move || is_empty() && !store.list_loading().get()>
                <p class="list-empty">"No todos yet"</p>
            </Show>
        </aside>
    }
}
