mod login;
pub use login::Login;

mod guard;
pub use guard::RoleGate;

mod layout;
pub use layout::{AdminScope, MemberScope, UserScope};

mod admin;
pub use admin::{
    AdminBills, AdminDietPlans, AdminFeePackages, AdminMembers, AdminNotifications, AdminReports,
    AdminSupplements,
};

mod member;
pub use member::{MemberNotifications, MemberReceipts};

mod user;
pub use user::{UserDetails, UserSearch};

/// Platform sleep for view-level timers.
pub(crate) async fn sleep(duration: std::time::Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
