//! Task Form Modal Component
//!
//! Modal form capturing the add-task intent for the selected todo.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::sync::validate_title;

#[component]
pub fn TaskFormModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (title_error, set_title_error) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // No selection means no owner for the task; the modal is only
        // reachable from the detail pane, so just bail.
        let Some(todo_id) = ctx.selected_id.get_untracked() else {
            return;
        };
        let raw = title.get();
        let Some(trimmed) = validate_title(&raw) else {
            set_title_error.set(true);
            return;
        };
        set_title_error.set(false);

        let desc = description.get();
        let desc = {
            let trimmed_desc = desc.trim();
            (!trimmed_desc.is_empty()).then(|| trimmed_desc.to_string())
        };

        ctx.add_task(todo_id, trimmed.to_string(), desc, move || {
            set_title.set(String::new());
            set_description.set(String::new());
        });
    };

    view! {
        <Show when=move || ctx.task_modal_open.get()>
            <div class="modal-overlay">
                <div class="modal">
                    <h3>"Add task"</h3>
                    <form on:submit=on_submit>
                        <label>
                            "Title"
                            <input
                                type="text"
                                placeholder="Task title"
                                prop:value=move || title.get()
                                on:input=move |ev| set_title.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || title_error.get()>
                            <p class="field-error">"Title is required"</p>
                        </Show>

                        <label>
                            "Description"
                            <textarea
                                placeholder="Optional details"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            ></textarea>
                        </label>

                        <div class="modal-actions">
                            <button type="submit">"Add"</button>
                            <button
                                type="button"
                                on:click=move |_| {
                                    set_title_error.set(false);
                                    ctx.task_modal_open.set(false);
                                }
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
