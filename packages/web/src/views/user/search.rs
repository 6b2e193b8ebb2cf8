//! Cross-resource search for signed-in users.

use api::models::{display_amount, display_date, Bill, Member, Supplement};
use dioxus::prelude::*;
use ui::{gym_client, push_notice, use_notices, Card, NoticeLevel, Spinner, StatusBadge};

#[derive(Clone, PartialEq)]
enum SearchResults {
    NotYet,
    Members(Vec<Member>),
    Bills(Vec<Bill>),
    Supplements(Vec<Supplement>),
}

impl SearchResults {
    fn is_empty(&self) -> bool {
        match self {
            SearchResults::NotYet => false,
            SearchResults::Members(v) => v.is_empty(),
            SearchResults::Bills(v) => v.is_empty(),
            SearchResults::Supplements(v) => v.is_empty(),
        }
    }
}

#[component]
pub fn UserSearch() -> Element {
    let mut notices = use_notices();
    let mut domain = use_signal(|| "members".to_string());
    let mut term = use_signal(String::new);
    let mut results = use_signal(|| SearchResults::NotYet);
    let mut searching = use_signal(|| false);

    let run_search = move |_| {
        let needle = term().trim().to_string();
        if needle.is_empty() {
            push_notice(&mut notices, NoticeLevel::Warning, "Type something to search for");
            return;
        }
        let target = domain();
        searching.set(true);
        spawn(async move {
            let client = gym_client();
            let outcome = match target.as_str() {
                "bills" => client.bills().search(&needle).await.map(SearchResults::Bills),
                "supplements" => client
                    .supplements()
                    .list(Some(&needle))
                    .await
                    .map(SearchResults::Supplements),
                _ => client
                    .members()
                    .search(&needle)
                    .await
                    .map(SearchResults::Members),
            };
            match outcome {
                Ok(found) => results.set(found),
                Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
            }
            searching.set(false);
        });
    };

    rsx! {
        Card {
            title: "Search",
            actions: rsx! {
                select {
                    value: domain(),
                    onchange: move |evt| domain.set(evt.value()),
                    option { value: "members", "Members" }
                    option { value: "bills", "Bills" }
                    option { value: "supplements", "Supplements" }
                }
                input {
                    r#type: "search",
                    placeholder: "Search...",
                    value: term(),
                    oninput: move |evt| term.set(evt.value()),
                }
                button { class: "primary", onclick: run_search, "Search" }
            },

            if searching() {
                Spinner {}
            } else if results() == SearchResults::NotYet {
                p { class: "empty", "Search members, bills, or supplements" }
            } else if results().is_empty() {
                p { class: "empty", "No matches" }
            } else {
                match results() {
                    SearchResults::NotYet => rsx! {},
                    SearchResults::Members(found) => rsx! {
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Status" }
                                    th { "Joined" }
                                }
                            }
                            tbody {
                                for member in found {
                                    tr { key: "{member.id}",
                                        td { "{member.name}" }
                                        td { "{member.email}" }
                                        td {
                                            StatusBadge { status: member.status.clone() }
                                        }
                                        td { {display_date(member.join_date.as_deref())} }
                                    }
                                }
                            }
                        }
                    },
                    SearchResults::Bills(found) => rsx! {
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Member" }
                                    th { "Amount" }
                                    th { "Due" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for bill in found {
                                    tr { key: "{bill.id}",
                                        td { {bill.member_name.clone().unwrap_or_else(|| "—".to_string())} }
                                        td { {display_amount(bill.amount)} }
                                        td { {display_date(bill.due_date.as_deref())} }
                                        td {
                                            StatusBadge { status: bill.status.clone() }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    SearchResults::Supplements(found) => rsx! {
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Category" }
                                    th { "Price" }
                                    th { "Stock" }
                                }
                            }
                            tbody {
                                for supplement in found {
                                    tr { key: "{supplement.id}",
                                        td { "{supplement.name}" }
                                        td { {supplement.category.clone().unwrap_or_else(|| "—".to_string())} }
                                        td { {display_amount(supplement.price)} }
                                        td {
                                            {supplement.stock
                                                .map(|s| s.to_string())
                                                .unwrap_or_else(|| "—".to_string())}
                                        }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
