//! Notification broadcast administration.

use api::models::{created_at_sort_key, display_date, Notification, NotificationPayload};
use dioxus::prelude::*;
use ui::{
    gym_client, push_notice, use_notices, Card, ModalOverlay, NoticeBoard, NoticeLevel, Spinner,
};

#[derive(Clone, PartialEq)]
struct NotificationForm {
    title: String,
    message: String,
    kind: String,
    target_audience: String,
}

impl Default for NotificationForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            message: String::new(),
            kind: "announcement".to_string(),
            target_audience: "all".to_string(),
        }
    }
}

async fn reload(mut items: Signal<Vec<Notification>>, mut notices: Signal<NoticeBoard>) {
    match gym_client().notifications().list(None).await {
        Ok(mut list) => {
            list.sort_by(|a, b| {
                created_at_sort_key(b.created_at.as_deref())
                    .cmp(&created_at_sort_key(a.created_at.as_deref()))
            });
            items.set(list);
        }
        Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
    }
}

#[component]
pub fn AdminNotifications() -> Element {
    let mut notices = use_notices();
    let items = use_signal(Vec::<Notification>::new);
    let mut loading = use_signal(|| true);
    let mut show_form = use_signal(|| false);
    let mut form = use_signal(NotificationForm::default);

    let _loader = use_resource(move || async move {
        reload(items, notices).await;
        loading.set(false);
    });

    let on_save = move |_| {
        let draft = form();
        if draft.title.trim().is_empty() || draft.message.trim().is_empty() {
            push_notice(&mut notices, NoticeLevel::Warning, "Title and message are required");
            return;
        }
        let payload = NotificationPayload {
            title: draft.title.trim().to_string(),
            message: draft.message.trim().to_string(),
            kind: draft.kind.clone(),
            target_audience: draft.target_audience.clone(),
        };
        spawn(async move {
            match gym_client().notifications().create(&payload).await {
                Ok(_) => {
                    push_notice(&mut notices, NoticeLevel::Success, "Notification sent");
                    show_form.set(false);
                    reload(items, notices).await;
                }
                Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
            }
        });
    };

    rsx! {
        Card {
            title: "Notifications",
            actions: rsx! {
                button {
                    class: "primary",
                    onclick: move |_| {
                        form.set(NotificationForm::default());
                        show_form.set(true);
                    },
                    "New notification"
                }
            },

            if loading() {
                Spinner {}
            } else if items().is_empty() {
                p { class: "empty", "Nothing sent yet" }
            } else {
                div { class: "notification-list",
                    for item in items() {
                        div { class: "notification-item", key: "{item.id}",
                            h3 { "{item.title}" }
                            p { "{item.message}" }
                            div { class: "meta",
                                "{item.kind}"
                                " · "
                                {item.target_audience.clone().unwrap_or_else(|| "all".to_string())}
                                " · "
                                {display_date(item.created_at.as_deref())}
                            }
                        }
                    }
                }
            }
        }

        if show_form() {
            ModalOverlay {
                on_close: move |_| show_form.set(false),
                h2 { "New notification" }
                div { class: "form-field",
                    label { "Title" }
                    input {
                        value: form().title,
                        oninput: move |evt| form.write().title = evt.value(),
                    }
                }
                div { class: "form-field",
                    label { "Message" }
                    textarea {
                        rows: "4",
                        value: form().message,
                        oninput: move |evt| form.write().message = evt.value(),
                    }
                }
                div { class: "form-row",
                    div { class: "form-field",
                        label { "Type" }
                        select {
                            value: form().kind,
                            onchange: move |evt| form.write().kind = evt.value(),
                            option { value: "announcement", "Announcement" }
                            option { value: "reminder", "Reminder" }
                            option { value: "alert", "Alert" }
                        }
                    }
                    div { class: "form-field",
                        label { "Audience" }
                        select {
                            value: form().target_audience,
                            onchange: move |evt| form.write().target_audience = evt.value(),
                            option { value: "all", "Everyone" }
                            option { value: "members", "Members" }
                            option { value: "users", "Users" }
                        }
                    }
                }
                div { class: "form-actions",
                    button { class: "secondary", onclick: move |_| show_form.set(false), "Cancel" }
                    button { class: "primary", onclick: on_save, "Send" }
                }
            }
        }
    }
}
