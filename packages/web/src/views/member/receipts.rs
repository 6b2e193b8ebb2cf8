//! A member's own bill receipts, with a printable detail view.

use api::models::{created_at_sort_key, display_amount, display_date, Bill, Member};
use dioxus::prelude::*;
use ui::{
    gym_client, push_notice, use_auth, use_notices, Card, ModalOverlay, NoticeLevel, Spinner,
    StatusBadge,
};

fn print_page() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.print();
    }
}

#[component]
pub fn MemberReceipts() -> Element {
    let auth = use_auth();
    let mut notices = use_notices();
    let mut member = use_signal(|| Option::<Member>::None);
    let mut bills = use_signal(Vec::<Bill>::new);
    let mut loading = use_signal(|| true);
    let mut selected = use_signal(|| Option::<Bill>::None);

    let _loader = use_resource(move || async move {
        let Some(email) = auth.read().email.clone() else {
            loading.set(false);
            return;
        };
        let client = gym_client();
        match client.members().find_by_email(&email).await {
            Ok(Some(found)) => {
                let member_id = found.id;
                member.set(Some(found));
                match client.bills().list_by_member(member_id).await {
                    Ok(mut list) => {
                        list.sort_by(|a, b| {
                            created_at_sort_key(b.created_at.as_deref())
                                .cmp(&created_at_sort_key(a.created_at.as_deref()))
                        });
                        bills.set(list);
                    }
                    Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
                }
            }
            // A signed-in account without a roster entry is a normal state,
            // not a failure.
            Ok(None) => push_notice(
                &mut notices,
                NoticeLevel::Warning,
                "No member profile is linked to this account yet",
            ),
            Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
        }
        loading.set(false);
    });

    rsx! {
        Card {
            title: "My Receipts",

            if loading() {
                Spinner {}
            } else if bills().is_empty() {
                p { class: "empty", "No bills on record" }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Description" }
                            th { "Amount" }
                            th { "Due" }
                            th { "Status" }
                            th { "" }
                        }
                    }
                    tbody {
                        for bill in bills() {
                            tr { key: "{bill.id}",
                                td { {bill.description.clone().unwrap_or_default()} }
                                td { {display_amount(bill.amount)} }
                                td { {display_date(bill.due_date.as_deref())} }
                                td {
                                    StatusBadge { status: bill.status.clone() }
                                }
                                td {
                                    button {
                                        class: "secondary",
                                        onclick: {
                                            let b = bill.clone();
                                            move |_| selected.set(Some(b.clone()))
                                        },
                                        "View"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(bill) = selected() {
            ModalOverlay {
                on_close: move |_| selected.set(None),
                h2 { "Receipt #{bill.id}" }
                div { class: "detail-grid",
                    if let Some(m) = member() {
                        div {
                            div { class: "detail-label", "Member" }
                            div { class: "detail-value", "{m.name}" }
                        }
                        div {
                            div { class: "detail-label", "Email" }
                            div { class: "detail-value", "{m.email}" }
                        }
                    }
                    div {
                        div { class: "detail-label", "Description" }
                        div { class: "detail-value", {bill.description.clone().unwrap_or_default()} }
                    }
                    div {
                        div { class: "detail-label", "Amount" }
                        div { class: "detail-value", {display_amount(bill.amount)} }
                    }
                    div {
                        div { class: "detail-label", "Due date" }
                        div { class: "detail-value", {display_date(bill.due_date.as_deref())} }
                    }
                    div {
                        div { class: "detail-label", "Status" }
                        div { class: "detail-value",
                            StatusBadge { status: bill.status.clone() }
                        }
                    }
                    div {
                        div { class: "detail-label", "Issued" }
                        div { class: "detail-value", {display_date(bill.created_at.as_deref())} }
                    }
                }
                div { class: "form-actions no-print",
                    button { class: "secondary", onclick: move |_| selected.set(None), "Close" }
                    button { class: "primary", onclick: move |_| print_page(), "Print" }
                }
            }
        }
    }
}
