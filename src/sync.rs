//! Cache Synchronization Rules
//!
//! Pure decision logic for keeping the two server-backed queries (the todo
//! list and the selected todo) consistent after a mutation. The context
//! applies the returned plan by bumping reload triggers; nothing here
//! touches the network or the reactive graph, so the rules are testable on
//! the host.

/// A mutation the gateway has confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation<'a> {
    TodoCreated,
    TodoUpdated { id: &'a str },
    TodoDeleted { id: &'a str },
    TaskAdded { todo_id: &'a str },
    TaskCompleted { todo_id: &'a str },
}

/// Which cache entries the mutation invalidates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Refresh {
    /// Refetch the todo list.
    pub list: bool,
    /// Refetch the selected todo by id.
    pub detail: bool,
    /// Drop the selection entirely (its todo no longer exists).
    pub clear_selection: bool,
}

/// Invalidation plan for a confirmed mutation given the current selection.
///
/// Every mutation invalidates the list. The detail entry is refetched only
/// when the mutation touched the selected todo; wholesale replacement on
/// arrival, never a field patch.
pub fn after_mutation(mutation: Mutation<'_>, selected: Option<&str>) -> Refresh {
    let affects = |id: &str| selected == Some(id);
    match mutation {
        Mutation::TodoCreated => Refresh {
            list: true,
            ..Refresh::default()
        },
        Mutation::TodoUpdated { id } => Refresh {
            list: true,
            detail: affects(id),
            ..Refresh::default()
        },
        Mutation::TodoDeleted { id } => Refresh {
            list: true,
            clear_selection: affects(id),
            ..Refresh::default()
        },
        Mutation::TaskAdded { todo_id } | Mutation::TaskCompleted { todo_id } => Refresh {
            list: true,
            detail: affects(todo_id),
            ..Refresh::default()
        },
    }
}

/// Client-side validation: trimmed, non-empty title. Anything else is
/// rejected before a request is issued.
pub fn validate_title(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Transient visual state of a task's completion checkbox.
///
/// The cache is never patched optimistically; this only keeps the DOM
/// honest while the one-way transition is in flight and snaps the
/// checkbox back if the call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskCheck {
    /// Not completed, nothing in flight
    Idle,
    /// Completion request in flight
    Pending,
    /// Completed per the server snapshot
    Done,
}

impl TaskCheck {
    pub fn from_snapshot(completed: bool) -> Self {
        if completed {
            Self::Done
        } else {
            Self::Idle
        }
    }

    /// Arm the transition. Returns true when a request should be issued;
    /// completed and in-flight tasks never dispatch.
    pub fn begin(&mut self) -> bool {
        if *self == Self::Idle {
            *self = Self::Pending;
            true
        } else {
            false
        }
    }

    /// The request failed; the checkbox snaps back and may be retried.
    pub fn fail(&mut self) {
        if *self == Self::Pending {
            *self = Self::Idle;
        }
    }

    pub fn checked(self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn disabled(self) -> bool {
        matches!(self, Self::Pending | Self::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_todo_refreshes_the_list_only() {
        let plan = after_mutation(Mutation::TodoCreated, Some("t-1"));
        assert_eq!(
            plan,
            Refresh {
                list: true,
                detail: false,
                clear_selection: false
            }
        );
    }

    #[test]
    fn task_added_to_selected_todo_refreshes_detail() {
        let plan = after_mutation(Mutation::TaskAdded { todo_id: "t-1" }, Some("t-1"));
        assert!(plan.list);
        assert!(plan.detail);
        assert!(!plan.clear_selection);
    }

    #[test]
    fn task_added_elsewhere_leaves_detail_alone() {
        let plan = after_mutation(Mutation::TaskAdded { todo_id: "t-2" }, Some("t-1"));
        assert!(plan.list);
        assert!(!plan.detail);
    }

    #[test]
    fn task_added_with_no_selection_refreshes_list_only() {
        let plan = after_mutation(Mutation::TaskAdded { todo_id: "t-1" }, None);
        assert!(plan.list);
        assert!(!plan.detail);
    }

    #[test]
    fn completed_task_follows_the_same_rule_as_added_task() {
        let selected = after_mutation(Mutation::TaskCompleted { todo_id: "t-1" }, Some("t-1"));
        let other = after_mutation(Mutation::TaskCompleted { todo_id: "t-1" }, Some("t-9"));
        assert!(selected.detail);
        assert!(!other.detail);
    }

    #[test]
    fn deleting_the_selected_todo_clears_selection() {
        let plan = after_mutation(Mutation::TodoDeleted { id: "t-1" }, Some("t-1"));
        assert!(plan.list);
        assert!(plan.clear_selection);
        assert!(!plan.detail);
    }

    #[test]
    fn deleting_another_todo_keeps_selection() {
        let plan = after_mutation(Mutation::TodoDeleted { id: "t-2" }, Some("t-1"));
        assert!(plan.list);
        assert!(!plan.clear_selection);
    }

    #[test]
    fn updating_the_selected_todo_refreshes_detail() {
        let plan = after_mutation(Mutation::TodoUpdated { id: "t-1" }, Some("t-1"));
        assert!(plan.list);
        assert!(plan.detail);
    }

    #[test]
    fn title_validation_trims_whitespace() {
        assert_eq!(validate_title("  Milk  "), Some("Milk"));
        assert_eq!(validate_title("Milk"), Some("Milk"));
    }

    #[test]
    fn title_validation_rejects_blank_input() {
        assert_eq!(validate_title(""), None);
        assert_eq!(validate_title("   "), None);
        assert_eq!(validate_title("\t\n"), None);
    }

    #[test]
    fn checkbox_dispatches_once_while_in_flight() {
        let mut check = TaskCheck::from_snapshot(false);
        assert!(!check.checked());
        assert!(check.begin());
        assert!(check.checked());
        assert!(check.disabled());
        // A second change event while pending must not fire another call.
        assert!(!check.begin());
    }

    #[test]
    fn completed_checkbox_never_dispatches() {
        let mut check = TaskCheck::from_snapshot(true);
        assert!(check.checked());
        assert!(check.disabled());
        assert!(!check.begin());
        assert_eq!(check, TaskCheck::Done);
    }

    #[test]
    fn failed_transition_snaps_the_checkbox_back() {
        let mut check = TaskCheck::from_snapshot(false);
        assert!(check.begin());
        check.fail();
        assert!(!check.checked());
        assert!(!check.disabled());
        // Retry is allowed after a failure.
        assert!(check.begin());
    }

    #[test]
    fn failure_after_completion_does_not_uncheck() {
        let mut check = TaskCheck::Done;
        check.fail();
        assert_eq!(check, TaskCheck::Done);
    }
}
