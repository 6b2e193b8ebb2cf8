//! Transient on-screen notices (toast stack).

use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleInfo, FaCircleXmark, FaTriangleExclamation};
use crate::Icon;

/// Sweep cadence and lifetime, in sweeper ticks (one tick per second).
const NOTICE_TICKS: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice notice--info",
            NoticeLevel::Success => "notice notice--success",
            NoticeLevel::Warning => "notice notice--warning",
            NoticeLevel::Error => "notice notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
    age: u8,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeBoard {
    next_id: u64,
    pub entries: Vec<Notice>,
}

impl NoticeBoard {
    pub fn push(&mut self, level: NoticeLevel, message: &str) {
        self.next_id += 1;
        self.entries.push(Notice {
            id: self.next_id,
            level,
            message: message.to_string(),
            age: 0,
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }

    fn sweep(&mut self) {
        for notice in &mut self.entries {
            notice.age += 1;
        }
        self.entries.retain(|n| n.age < NOTICE_TICKS);
    }
}

pub fn use_notices() -> Signal<NoticeBoard> {
    use_context::<Signal<NoticeBoard>>()
}

pub fn push_notice(board: &mut Signal<NoticeBoard>, level: NoticeLevel, message: &str) {
    board.write().push(level, message);
}

/// Provides the notice board to the subtree and renders the toast stack.
#[component]
pub fn NoticeLayer(children: Element) -> Element {
    let mut board = use_signal(NoticeBoard::default);
    use_context_provider(|| board);

    // Periodic sweep; stale notices fall off after a few seconds.
    use_future(move || async move {
        loop {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_secs(1)).await;

            if !board.peek().entries.is_empty() {
                board.write().sweep();
            }
        }
    });

    rsx! {
        {children}

        div {
            class: "notice-stack",
            for notice in board().entries {
                NoticeItem { key: "{notice.id}", notice }
            }
        }
    }
}

#[component]
fn NoticeItem(notice: Notice) -> Element {
    let mut board = use_notices();
    let id = notice.id;
    let class = notice.level.class();

    rsx! {
        div {
            class: "{class}",
            span {
                class: "notice__icon",
                match notice.level {
                    NoticeLevel::Info => rsx! { Icon { icon: FaCircleInfo, width: 14, height: 14 } },
                    NoticeLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 14, height: 14 } },
                    NoticeLevel::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 14, height: 14 } },
                    NoticeLevel::Error => rsx! { Icon { icon: FaCircleXmark, width: 14, height: 14 } },
                }
            }
            span { class: "notice__message", "{notice.message}" }
            button {
                class: "notice__close",
                onclick: move |_| board.write().dismiss(id),
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_dismiss_sweep() {
        let mut board = NoticeBoard::default();
        board.push(NoticeLevel::Success, "saved");
        board.push(NoticeLevel::Error, "failed");
        assert_eq!(board.entries.len(), 2);

        let first = board.entries[0].id;
        board.dismiss(first);
        assert_eq!(board.entries.len(), 1);
        assert_eq!(board.entries[0].message, "failed");

        for _ in 0..NOTICE_TICKS {
            board.sweep();
        }
        assert!(board.entries.is_empty());
    }

    #[test]
    fn test_ids_are_unique_across_dismissals() {
        let mut board = NoticeBoard::default();
        board.push(NoticeLevel::Info, "a");
        let a = board.entries[0].id;
        board.dismiss(a);
        board.push(NoticeLevel::Info, "b");
        assert_ne!(board.entries[0].id, a);
    }
}
