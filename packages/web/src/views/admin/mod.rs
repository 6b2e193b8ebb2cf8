mod members;
pub use members::AdminMembers;

mod bills;
pub use bills::AdminBills;

mod fee_packages;
pub use fee_packages::AdminFeePackages;

mod notifications;
pub use notifications::AdminNotifications;

mod reports;
pub use reports::AdminReports;

mod supplements;
pub use supplements::AdminSupplements;

mod diet_plans;
pub use diet_plans::AdminDietPlans;
