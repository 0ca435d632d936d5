//! Application Context
//!
//! Shared state provided via Leptos Context API: the gateway handle, the
//! query reload triggers, the selection, modal flags, and the mutation
//! entry points that keep the cached queries synchronized with the server.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_api_client::{AddTaskArgs, CreateTodoArgs, MarkCompletedArgs, TodoApi};

use crate::notify;
use crate::store::AppStore;
use crate::sync::{after_mutation, Mutation, Refresh};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<TodoApi, LocalStorage>,
    store: AppStore,
    /// Trigger to refetch the todo list - read
    pub list_reload: ReadSignal<u32>,
    /// Trigger to refetch the todo list - write
    set_list_reload: WriteSignal<u32>,
    /// Trigger to refetch the selected todo - read
    pub detail_reload: ReadSignal<u32>,
    /// Trigger to refetch the selected todo - write
    set_detail_reload: WriteSignal<u32>,
    /// Currently selected todo id - read
    pub selected_id: ReadSignal<Option<String>>,
    /// Currently selected todo id - write
    set_selected_id: WriteSignal<Option<String>>,
    /// Create-todo modal open flag
    pub todo_modal_open: RwSignal<bool>,
    /// Add-task modal open flag
    pub task_modal_open: RwSignal<bool>,
    // Request generations per cache key. A fetch whose token is no longer
    // current must discard its response instead of overwriting a newer
    // snapshot.
    list_gen: StoredValue<u64>,
    detail_gen: StoredValue<u64>,
}

impl AppContext {
    pub fn new(
        api: TodoApi,
        store: AppStore,
        list_reload: (ReadSignal<u32>, WriteSignal<u32>),
        detail_reload: (ReadSignal<u32>, WriteSignal<u32>),
        selected_id: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            api: StoredValue::new_local(api),
            store,
            list_reload: list_reload.0,
            set_list_reload: list_reload.1,
            detail_reload: detail_reload.0,
            set_detail_reload: detail_reload.1,
            selected_id: selected_id.0,
            set_selected_id: selected_id.1,
            todo_modal_open: RwSignal::new(false),
            task_modal_open: RwSignal::new(false),
            list_gen: StoredValue::new(0),
            detail_gen: StoredValue::new(0),
        }
    }

    pub fn api(&self) -> TodoApi {
        self.api.get_value()
    }

    /// Invalidate the list query
    pub fn reload_list(&self) {
        self.set_list_reload.update(|v| *v += 1);
    }

    /// Invalidate the selected-todo query
    pub fn reload_detail(&self) {
        self.set_detail_reload.update(|v| *v += 1);
    }

    /// Select a todo. Always refetches by id; the list's embedded copy may
    /// be a summary projection without tasks.
    pub fn select_todo(&self, id: String) {
        self.set_selected_id.set(Some(id));
    }

    pub fn clear_selection(&self) {
        self.set_selected_id.set(None);
    }

    // ========================
    // Fetch generations
    // ========================

    pub(crate) fn begin_list_fetch(&self) -> u64 {
        let token = self.list_gen.get_value() + 1;
        self.list_gen.set_value(token);
        token
    }

    pub(crate) fn list_fetch_is_current(&self, token: u64) -> bool {
        self.list_gen.get_value() == token
    }

    pub(crate) fn begin_detail_fetch(&self) -> u64 {
        let token = self.detail_gen.get_value() + 1;
        self.detail_gen.set_value(token);
        token
    }

    pub(crate) fn detail_fetch_is_current(&self, token: u64) -> bool {
        self.detail_gen.get_value() == token
    }

    // ========================
    // Mutation entry points
    // ========================
    //
    // Each issues exactly one gateway call. On success the invalidation
    // plan from `sync` runs and the caller's reset hook fires; on failure
    // only a notice is pushed. Cache entries are never patched
    // optimistically.

    pub fn create_todo(
        &self,
        title: String,
        description: Option<String>,
        on_success: impl FnOnce() + 'static,
    ) {
        let ctx = *self;
        spawn_local(async move {
            let args = CreateTodoArgs {
                title: &title,
                description: description.as_deref(),
            };
            match ctx.api().create_todo(&args).await {
                Ok(_) => {
                    ctx.todo_modal_open.set(false);
                    on_success();
                    notify::success(ctx.store, "Todo created");
                    ctx.apply(after_mutation(Mutation::TodoCreated, ctx.selected().as_deref()));
                }
                Err(e) => notify::error(ctx.store, e.user_message("Failed to create todo")),
            }
        });
    }

    pub fn add_task(
        &self,
        todo_id: String,
        title: String,
        description: Option<String>,
        on_success: impl FnOnce() + 'static,
    ) {
        let ctx = *self;
        spawn_local(async move {
            let args = AddTaskArgs {
                todo_id: &todo_id,
                title: &title,
                description: description.as_deref(),
            };
            match ctx.api().add_task(&args).await {
                Ok(()) => {
                    ctx.task_modal_open.set(false);
                    on_success();
                    notify::success(ctx.store, "Task added");
                    ctx.apply(after_mutation(
                        Mutation::TaskAdded { todo_id: &todo_id },
                        ctx.selected().as_deref(),
                    ));
                }
                Err(e) => notify::error(ctx.store, e.user_message("Failed to add task")),
            }
        });
    }

    /// One-way transition; the checkbox that dispatches this is disabled
    /// once the task is completed. `on_error` lets the dispatching row
    /// snap its checkbox back when the call fails.
    pub fn mark_task_completed(
        &self,
        task_id: String,
        todo_id: String,
        on_error: impl FnOnce() + 'static,
    ) {
        let ctx = *self;
        spawn_local(async move {
            let args = MarkCompletedArgs {
                task_id: &task_id,
                todo_id: &todo_id,
            };
            match ctx.api().mark_task_completed(&args).await {
                Ok(()) => ctx.apply(after_mutation(
                    Mutation::TaskCompleted { todo_id: &todo_id },
                    ctx.selected().as_deref(),
                )),
                Err(e) => {
                    on_error();
                    notify::error(ctx.store, e.user_message("Failed to update task"));
                }
            }
        });
    }

    pub fn delete_todo(&self, id: String) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.api().delete_todo(&id).await {
                Ok(()) => {
                    notify::success(ctx.store, "Todo deleted");
                    ctx.apply(after_mutation(
                        Mutation::TodoDeleted { id: &id },
                        ctx.selected().as_deref(),
                    ));
                }
                Err(e) => notify::error(ctx.store, e.user_message("Failed to delete todo")),
            }
        });
    }

    fn selected(&self) -> Option<String> {
        self.selected_id.get_untracked()
    }

    fn apply(&self, refresh: Refresh) {
        if refresh.clear_selection {
            self.clear_selection();
        }
        if refresh.list {
            self.reload_list();
        }
        if refresh.detail {
            self.reload_detail();
        }
    }
}
