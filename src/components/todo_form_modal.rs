//! Todo Form Modal Component
//!
//! Modal form capturing the create-todo intent. Only "title non-empty" is
//! validated client-side; everything else is the server's concern.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::sync::validate_title;

#[component]
pub fn TodoFormModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (title_error, set_title_error) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
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

        // Fields reset only when the mutation succeeds, so a failed submit
        // keeps the input for retry.
        ctx.create_todo(trimmed.to_string(), desc, move || {
            set_title.set(String::new());
            set_description.set(String::new());
        });
    };

    view! {
        <Show when=move || ctx.todo_modal_open.get()>
            <div class="modal-overlay">
                <div class="modal">
                    <h3>"Add todo"</h3>
                    <form on:submit=on_submit>
                        <label>
                            "Title"
                            <input
                                type="text"
                                placeholder="Todo title"
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
                                placeholder="Optional description"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            ></textarea>
                        </label>

                        <div class="modal-actions">
                            <button type="submit">"Create"</button>
                            <button
                                type="button"
                                on:click=move |_| {
                                    set_title_error.set(false);
                                    ctx.todo_modal_open.set(false);
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
