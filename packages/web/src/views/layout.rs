//! Per-role dashboard layouts: gate, top nav, and the routed outlet.

use api::Role;
use dioxus::prelude::*;
use ui::{do_logout, use_auth};

use super::RoleGate;
use crate::Route;

#[component]
pub fn AdminScope() -> Element {
    rsx! {
        RoleGate { required: Role::Admin,
            Shell { role: Role::Admin,
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn MemberScope() -> Element {
    rsx! {
        RoleGate { required: Role::Member,
            Shell { role: Role::Member,
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn UserScope() -> Element {
    rsx! {
        RoleGate { required: Role::User,
            Shell { role: Role::User,
                Outlet::<Route> {}
            }
        }
    }
}

fn nav_links(role: Role) -> Vec<(&'static str, Route)> {
    match role {
        Role::Admin => vec![
            ("Members", Route::AdminMembers {}),
            ("Bills", Route::AdminBills {}),
            ("Fee Packages", Route::AdminFeePackages {}),
            ("Notifications", Route::AdminNotifications {}),
            ("Reports", Route::AdminReports {}),
            ("Supplements", Route::AdminSupplements {}),
            ("Diet Plans", Route::AdminDietPlans {}),
        ],
        Role::Member => vec![
            ("Receipts", Route::MemberReceipts {}),
            ("Notifications", Route::MemberNotifications {}),
        ],
        Role::User => vec![
            ("My Details", Route::UserDetails {}),
            ("Search", Route::UserSearch {}),
        ],
    }
}

/// Top bar (brand, section links, signed-in email, logout) over the page body.
#[component]
fn Shell(role: Role, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let current = use_route::<Route>();
    let email = auth.read().email.clone().unwrap_or_default();

    rsx! {
        div { class: "app-shell",
            header { class: "topbar",
                span { class: "brand",
                    "Gym Console"
                    span { class: "brand-scope", "{role.label()}" }
                }
                nav { class: "topnav",
                    for (label, target) in nav_links(role) {
                        Link {
                            class: if target == current { "active" } else { "" },
                            to: target.clone(),
                            "{label}"
                        }
                    }
                }
                div { class: "topbar-user",
                    span { class: "email", "{email}" }
                    button {
                        class: "logout-btn",
                        onclick: move |_| {
                            spawn(async move {
                                do_logout(auth).await;
                                nav.replace(Route::Login {});
                            });
                        },
                        "Log out"
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
        }
    }
}
