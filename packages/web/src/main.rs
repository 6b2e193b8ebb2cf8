use dioxus::prelude::*;

use ui::{AuthProvider, NoticeLayer};
use views::{
    AdminBills, AdminDietPlans, AdminFeePackages, AdminMembers, AdminNotifications, AdminReports,
    AdminScope, AdminSupplements, Login, MemberNotifications, MemberReceipts, MemberScope,
    UserDetails, UserScope, UserSearch,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},

    #[nest("/admin")]
        #[layout(AdminScope)]
            #[route("/members")]
            AdminMembers {},
            #[route("/bills")]
            AdminBills {},
            #[route("/fee-packages")]
            AdminFeePackages {},
            #[route("/notifications")]
            AdminNotifications {},
            #[route("/reports")]
            AdminReports {},
            #[route("/supplements")]
            AdminSupplements {},
            #[route("/diet-plans")]
            AdminDietPlans {},
        #[end_layout]
    #[end_nest]

    #[nest("/member")]
        #[layout(MemberScope)]
            #[route("/receipts")]
            MemberReceipts {},
            #[route("/notifications")]
            MemberNotifications {},
        #[end_layout]
    #[end_nest]

    #[nest("/user")]
        #[layout(UserScope)]
            #[route("/details")]
            UserDetails {},
            #[route("/search")]
            UserSearch {},
}

impl Route {
    /// Where a freshly signed-in identity lands.
    fn home_for(role: api::Role) -> Route {
        match role {
            api::Role::Admin => Route::AdminMembers {},
            api::Role::Member => Route::MemberReceipts {},
            api::Role::User => Route::UserDetails {},
        }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            NoticeLayer {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/login`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}
