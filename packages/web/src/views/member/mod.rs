mod receipts;
pub use receipts::MemberReceipts;

mod notifications;
pub use notifications::MemberNotifications;
