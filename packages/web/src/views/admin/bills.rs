//! Billing administration: ledger, search, and bill creation.

use api::models::{created_at_sort_key, display_amount, display_date, Bill, BillPayload, Member};
use dioxus::prelude::*;
use ui::{
    gym_client, push_notice, use_notices, Card, ModalOverlay, NoticeBoard, NoticeLevel, Spinner,
    StatusBadge,
};

#[derive(Clone, Default, PartialEq)]
struct BillForm {
    member_id: String,
    amount: String,
    description: String,
    due_date: String,
    status: String,
}

async fn reload(mut bills: Signal<Vec<Bill>>, mut notices: Signal<NoticeBoard>) {
    match gym_client().bills().list().await {
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

#[component]
pub fn AdminBills() -> Element {
    let mut notices = use_notices();
    let mut bills = use_signal(Vec::<Bill>::new);
    let mut members = use_signal(Vec::<Member>::new);
    let mut loading = use_signal(|| true);
    let mut search_term = use_signal(String::new);
    let mut show_form = use_signal(|| false);
    let mut form = use_signal(BillForm::default);

    let _loader = use_resource(move || async move {
        reload(bills, notices).await;
        match gym_client().members().list().await {
            Ok(list) => members.set(list),
            Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
        }
        loading.set(false);
    });

    let run_search = move |_| {
        let term = search_term().trim().to_string();
        spawn(async move {
            if term.is_empty() {
                reload(bills, notices).await;
                return;
            }
            match gym_client().bills().search(&term).await {
                Ok(list) => bills.set(list),
                Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
            }
        });
    };

    let on_save = move |_| {
        let draft = form();
        let Ok(member_id) = draft.member_id.parse::<i64>() else {
            push_notice(&mut notices, NoticeLevel::Warning, "Pick a member first");
            return;
        };
        let Ok(amount) = draft.amount.parse::<f64>() else {
            push_notice(&mut notices, NoticeLevel::Warning, "Amount must be a number");
            return;
        };
        let payload = BillPayload {
            member_id,
            amount,
            description: draft.description.trim().to_string(),
            due_date: draft.due_date.clone(),
            status: if draft.status.is_empty() {
                "pending".to_string()
            } else {
                draft.status.clone()
            },
        };
        spawn(async move {
            match gym_client().bills().create(&payload).await {
                Ok(_) => {
                    push_notice(&mut notices, NoticeLevel::Success, "Bill created");
                    show_form.set(false);
                    reload(bills, notices).await;
                }
                Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
            }
        });
    };

    rsx! {
        Card {
            title: "Bills",
            actions: rsx! {
                input {
                    r#type: "search",
                    placeholder: "Search bills...",
                    value: search_term(),
                    oninput: move |evt| search_term.set(evt.value()),
                }
                button { class: "secondary", onclick: run_search, "Search" }
                button {
                    class: "primary",
                    onclick: move |_| {
                        form.set(BillForm::default());
                        show_form.set(true);
                    },
                    "New bill"
                }
            },

            if loading() {
                Spinner {}
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Member" }
                            th { "Amount" }
                            th { "Description" }
                            th { "Due" }
                            th { "Status" }
                            th { "Created" }
                        }
                    }
                    tbody {
                        if bills().is_empty() {
                            tr {
                                td { class: "empty", colspan: 6, "No bills found" }
                            }
                        }
                        for bill in bills() {
                            tr { key: "{bill.id}",
                                td { {bill.member_name.clone().unwrap_or_else(|| "—".to_string())} }
                                td { {display_amount(bill.amount)} }
                                td { {bill.description.clone().unwrap_or_default()} }
                                td { {display_date(bill.due_date.as_deref())} }
                                td {
                                    StatusBadge { status: bill.status.clone() }
                                }
                                td { {display_date(bill.created_at.as_deref())} }
                            }
                        }
                    }
                }
            }
        }

        if show_form() {
            ModalOverlay {
                on_close: move |_| show_form.set(false),
                h2 { "New bill" }
                div { class: "form-field",
                    label { "Member" }
                    select {
                        value: form().member_id,
                        onchange: move |evt| form.write().member_id = evt.value(),
                        option { value: "", "Pick a member" }
                        for member in members() {
                            option { value: "{member.id}", "{member.name} ({member.email})" }
                        }
                    }
                }
                div { class: "form-row",
                    div { class: "form-field",
                        label { "Amount" }
                        input {
                            r#type: "number",
                            min: "0",
                            step: "0.01",
                            value: form().amount,
                            oninput: move |evt| form.write().amount = evt.value(),
                        }
                    }
                    div { class: "form-field",
                        label { "Due date" }
                        input {
                            r#type: "date",
                            value: form().due_date,
                            oninput: move |evt| form.write().due_date = evt.value(),
                        }
                    }
                }
                div { class: "form-field",
                    label { "Description" }
                    input {
                        value: form().description,
                        oninput: move |evt| form.write().description = evt.value(),
                    }
                }
                div { class: "form-field",
                    label { "Status" }
                    select {
                        value: form().status,
                        onchange: move |evt| form.write().status = evt.value(),
                        option { value: "pending", "Pending" }
                        option { value: "paid", "Paid" }
                        option { value: "overdue", "Overdue" }
                    }
                }
                div { class: "form-actions",
                    button { class: "secondary", onclick: move |_| show_form.set(false), "Cancel" }
                    button { class: "primary", onclick: on_save, "Create" }
                }
            }
        }
    }
}
