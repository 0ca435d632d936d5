//! Todo Detail Component
//!
//! Right pane: the selected todo with its tasks, or an empty-state prompt.
//! Task checkboxes dispatch the one-way completion transition; a failed
//! call snaps the checkbox back. Deleting asks for an inline confirmation
//! first.

use leptos::prelude::*;
use todo_api_client::{Todo, TodoTask};

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync::TaskCheck;

#[component]
pub fn TodoDetail() -> impl IntoView {
    let store = use_app_store();

    move || match store.selected().get() {
        Some(todo) => view! { <TodoDetailBody todo=todo /> }.into_any(),
        None => view! {
            <div class="detail-empty">
                <p>"Select a todo to see its tasks"</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn TodoDetailBody(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let delete_id = todo.id.clone();
    let status = if todo.completed { "Completed" } else { "In progress" };
    let status_class = if todo.completed {
        "todo-status completed"
    } else {
        "todo-status"
    };
    let tasks = todo.tasks.clone();
    let has_tasks = !tasks.is_empty();

    // Two-state delete confirmation. Disarms as soon as the delete is
    // dispatched, so a failed call leaves a plain button, not an armed one.
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <div class="detail-body">
            <header class="detail-header">
                <h2>{todo.title.clone()}</h2>
                <span class=status_class>{status}</span>
                <button class="add-task-btn" on:click=move |_| ctx.task_modal_open.set(true)>
                    "Add task"
                </button>
                {move || if confirm_delete.get() {
                    let id = delete_id.clone();
                    view! {
                        <span class="delete-confirm">
                            "Delete this todo and its tasks?"
                            <button
                                class="delete-confirm-btn"
                                on:click=move |_| {
                                    set_confirm_delete.set(false);
                                    ctx.delete_todo(id.clone());
                                }
                            >
                                "Delete"
                            </button>
                            <button
                                class="delete-keep-btn"
                                on:click=move |_| set_confirm_delete.set(false)
                            >
                                "Keep"
                            </button>
                        </span>
                    }
                    .into_any()
                } else {
                    view! {
                        <button
                            class="delete-todo-btn"
                            on:click=move |_| set_confirm_delete.set(true)
                        >
                            "Delete todo"
                        </button>
                    }
                    .into_any()
                }}
            </header>

            {todo.description.clone().map(|d| view! { <p class="todo-description">{d}</p> })}

            <ul class="task-list">
                <For
                    each=move || tasks.clone()
                    key=|task| (task.id.clone(), task.completed)
                    children=move |task| view! { <TaskRow task=task /> }
                />
            </ul>

            <Show when=move || !has_tasks>
                <p class="task-empty">"No tasks yet"</p>
            </Show>
        </div>
    }
}

#[component]
fn TaskRow(task: TodoTask) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let task_id = task.id.clone();
    let todo_id = task.todo_id.clone();
    // Checkbox state lives in a signal so a failed completion call snaps
    // the DOM back; the cache itself is never patched optimistically.
    let check = RwSignal::new(TaskCheck::from_snapshot(task.completed));
    let row_class = move || {
        if check.get().checked() {
            "task-row completed"
        } else {
            "task-row"
        }
    };

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                prop:checked=move || check.get().checked()
                disabled=move || check.get().disabled()
                on:change=move |_| {
                    let armed = check.try_update(|c| c.begin()).unwrap_or(false);
                    if armed {
                        ctx.mark_task_completed(
                            task_id.clone(),
                            todo_id.clone(),
                            move || check.update(|c| c.fail()),
                        );
                    }
                }
            />
            <span class="task-title">{task.title.clone()}</span>
            {task.description.clone().map(|d| view! { <span class="task-description">{d}</span> })}
        </li>
    }
}
