//! User Notifications
//!
//! Toast-style notices pushed from mutation boundaries. Auto-dismissed
//! after a short delay; the stack is rendered by `components::ToastStack`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{AppStateStoreFields, AppStore};

/// How long a notice stays visible, in milliseconds.
const DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

pub fn success(store: AppStore, text: impl Into<String>) {
    push(store, NoticeKind::Success, text.into());
}

pub fn error(store: AppStore, text: impl Into<String>) {
    push(store, NoticeKind::Error, text.into());
}

pub fn dismiss(store: AppStore, id: u32) {
    store.notices().write().retain(|n| n.id != id);
}

fn push(store: AppStore, kind: NoticeKind, text: String) {
    let id = {
        let next_notice_id = store.next_notice_id();
        let mut next = next_notice_id.write();
        *next = next.wrapping_add(1);
        *next
    };
    store.notices().write().push(Notice { id, kind, text });
    spawn_local(async move {
        TimeoutFuture::new(DISMISS_MS).await;
        dismiss(store, id);
    });
}
