//! Shared UI for the gym console: auth context, notices, and small widgets.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backend;
pub use backend::{gym_client, make_store};

mod auth;
pub use auth::{do_login, do_logout, do_signup, use_auth, AuthProvider, AuthState};

mod notice;
pub use notice::{push_notice, use_notices, Notice, NoticeBoard, NoticeLayer, NoticeLevel};

mod widgets;
pub use widgets::{Card, ModalOverlay, Spinner, StatusBadge};
