//! UI Components
//!
//! Reusable Leptos components.

mod task_form_modal;
mod toast;
mod todo_detail;
mod todo_form_modal;
mod todo_list_pane;

pub use task_form_modal::TaskFormModal;
pub use toast::ToastStack;
pub use todo_detail::TodoDetail;
pub use todo_form_modal::TodoFormModal;
pub use todo_list_pane::TodoListPane;
