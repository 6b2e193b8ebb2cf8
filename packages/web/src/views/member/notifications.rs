//! Notifications addressed to members; opening one marks it read.

use api::models::{created_at_sort_key, display_date, Notification};
use dioxus::prelude::*;
use ui::{gym_client, push_notice, use_notices, Card, NoticeLevel, Spinner};

#[component]
pub fn MemberNotifications() -> Element {
    let mut notices = use_notices();
    let mut items = use_signal(Vec::<Notification>::new);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || async move {
        match gym_client().notifications().list(Some("members")).await {
            Ok(mut list) => {
                list.sort_by(|a, b| {
                    created_at_sort_key(b.created_at.as_deref())
                        .cmp(&created_at_sort_key(a.created_at.as_deref()))
                });
                items.set(list);
            }
            Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
        }
        loading.set(false);
    });

    rsx! {
        Card {
            title: "Notifications",

            if loading() {
                Spinner {}
            } else if items().is_empty() {
                p { class: "empty", "No notifications" }
            } else {
                div { class: "notification-list",
                    for item in items() {
                        div {
                            key: "{item.id}",
                            class: if item.read_flag != Some(true) {
                                "notification-item unread"
                            } else {
                                "notification-item"
                            },
                            onclick: {
                                let id = item.id;
                                let unread = item.read_flag != Some(true);
                                move |_| {
                                    if !unread {
                                        return;
                                    }
                                    spawn(async move {
                                        match gym_client().notifications().mark_as_read(id).await {
                                            Ok(()) => {
                                                if let Some(entry) = items
                                                    .write()
                                                    .iter_mut()
                                                    .find(|n| n.id == id)
                                                {
                                                    entry.read_flag = Some(true);
                                                }
                                            }
                                            Err(err) => push_notice(
                                                &mut notices,
                                                NoticeLevel::Error,
                                                &err.to_string(),
                                            ),
                                        }
                                    });
                                }
                            },
                            h3 { "{item.title}" }
                            p { "{item.message}" }
                            div { class: "meta",
                                "{item.kind}"
                                " · "
                                {display_date(item.created_at.as_deref())}
                            }
                        }
                    }
                }
            }
        }
    }
}
