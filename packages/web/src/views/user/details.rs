//! The signed-in account's own profile.

use api::models::{display_amount, display_date, Member};
use dioxus::prelude::*;
use ui::{gym_client, push_notice, use_auth, use_notices, Card, NoticeLevel, Spinner, StatusBadge};

#[component]
pub fn UserDetails() -> Element {
    let auth = use_auth();
    let mut notices = use_notices();
    let mut member = use_signal(|| Option::<Member>::None);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || async move {
        let Some(email) = auth.read().email.clone() else {
            loading.set(false);
            return;
        };
        match gym_client().members().find_by_email(&email).await {
            Ok(found) => member.set(found),
            Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
        }
        loading.set(false);
    });

    rsx! {
        Card {
            title: "My Details",

            if loading() {
                Spinner {}
            } else if let Some(m) = member() {
                div { class: "detail-grid",
                    div {
                        div { class: "detail-label", "Name" }
                        div { class: "detail-value", "{m.name}" }
                    }
                    div {
                        div { class: "detail-label", "Email" }
                        div { class: "detail-value", "{m.email}" }
                    }
                    div {
                        div { class: "detail-label", "Phone" }
                        div { class: "detail-value",
                            {m.phone.clone().unwrap_or_else(|| "—".to_string())}
                        }
                    }
                    div {
                        div { class: "detail-label", "Address" }
                        div { class: "detail-value",
                            {m.address.clone().unwrap_or_else(|| "—".to_string())}
                        }
                    }
                    div {
                        div { class: "detail-label", "Status" }
                        div { class: "detail-value",
                            StatusBadge { status: m.status.clone() }
                        }
                    }
                    div {
                        div { class: "detail-label", "Joined" }
                        div { class: "detail-value", {display_date(m.join_date.as_deref())} }
                    }
                    div {
                        div { class: "detail-label", "Fee package" }
                        div { class: "detail-value",
                            {m.fee_package_name.clone().unwrap_or_else(|| "None".to_string())}
                        }
                    }
                    if m.fee_package_amount.is_some() {
                        div {
                            div { class: "detail-label", "Package amount" }
                            div { class: "detail-value", {display_amount(m.fee_package_amount)} }
                        }
                        div {
                            div { class: "detail-label", "Assigned" }
                            div { class: "detail-value", {display_date(m.assigned_at.as_deref())} }
                        }
                    }
                }
            } else {
                // No roster entry for this account; show what the session knows.
                div { class: "detail-grid",
                    div {
                        div { class: "detail-label", "Email" }
                        div { class: "detail-value",
                            {auth.read().email.clone().unwrap_or_default()}
                        }
                    }
                    div {
                        div { class: "detail-label", "Role" }
                        div { class: "detail-value",
                            {auth.read().role.map(|r| r.label()).unwrap_or("—")}
                        }
                    }
                }
                p { class: "empty", "No gym membership profile is linked to this account" }
            }
        }
    }
}
