//! Supplement store administration.

use api::models::{display_amount, Supplement, SupplementPayload};
use dioxus::prelude::*;
use ui::{
    gym_client, push_notice, use_notices, Card, ModalOverlay, NoticeBoard, NoticeLevel, Spinner,
};

#[derive(Clone, Default, PartialEq)]
struct SupplementForm {
    name: String,
    description: String,
    category: String,
    price: String,
    stock: String,
}

impl SupplementForm {
    fn from_supplement(supplement: &Supplement) -> Self {
        Self {
            name: supplement.name.clone(),
            description: supplement.description.clone().unwrap_or_default(),
            category: supplement.category.clone().unwrap_or_default(),
            price: supplement.price.map(|p| p.to_string()).unwrap_or_default(),
            stock: supplement.stock.map(|s| s.to_string()).unwrap_or_default(),
        }
    }
}

async fn reload(
    mut supplements: Signal<Vec<Supplement>>,
    term: Option<String>,
    mut notices: Signal<NoticeBoard>,
) {
    match gym_client().supplements().list(term.as_deref()).await {
        Ok(list) => supplements.set(list),
        Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
    }
}

#[component]
pub fn AdminSupplements() -> Element {
    let mut notices = use_notices();
    let supplements = use_signal(Vec::<Supplement>::new);
    let mut loading = use_signal(|| true);
    let mut search_term = use_signal(String::new);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<i64>::None);
    let mut form = use_signal(SupplementForm::default);

    let _loader = use_resource(move || async move {
        reload(supplements, None, notices).await;
        loading.set(false);
    });

    let run_search = move |_| {
        let term = search_term().trim().to_string();
        spawn(async move {
            let term = (!term.is_empty()).then_some(term);
            reload(supplements, term, notices).await;
        });
    };

    let on_save = move |_| {
        let draft = form();
        if draft.name.trim().is_empty() {
            push_notice(&mut notices, NoticeLevel::Warning, "Supplement name is required");
            return;
        }
        let Ok(price) = draft.price.parse::<f64>() else {
            push_notice(&mut notices, NoticeLevel::Warning, "Price must be a number");
            return;
        };
        let Ok(stock) = draft.stock.parse::<i64>() else {
            push_notice(&mut notices, NoticeLevel::Warning, "Stock must be a whole number");
            return;
        };
        let payload = SupplementPayload {
            name: draft.name.trim().to_string(),
            description: draft.description.trim().to_string(),
            category: draft.category.trim().to_string(),
            price,
            stock,
        };
        let current = editing();
        spawn(async move {
            let client = gym_client();
            let result = match current {
                Some(id) => client
                    .supplements()
                    .update(id, &payload)
                    .await
                    .map(|_| "Supplement updated"),
                None => client
                    .supplements()
                    .create(&payload)
                    .await
                    .map(|_| "Supplement created"),
            };
            match result {
                Ok(msg) => {
                    push_notice(&mut notices, NoticeLevel::Success, msg);
                    show_form.set(false);
                    reload(supplements, None, notices).await;
                }
                Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
            }
        });
    };

    rsx! {
        Card {
            title: "Supplements",
            actions: rsx! {
                input {
                    r#type: "search",
                    placeholder: "Search supplements...",
                    value: search_term(),
                    oninput: move |evt| search_term.set(evt.value()),
                }
                button { class: "secondary", onclick: run_search, "Search" }
                button {
                    class: "primary",
                    onclick: move |_| {
                        editing.set(None);
                        form.set(SupplementForm::default());
                        show_form.set(true);
                    },
                    "Add supplement"
                }
            },

            if loading() {
                Spinner {}
            } else if supplements().is_empty() {
                p { class: "empty", "No supplements found" }
            } else {
                div { class: "item-grid",
                    for supplement in supplements() {
                        div { class: "item-card", key: "{supplement.id}",
                            h3 { "{supplement.name}" }
                            p { class: "item-category",
                                {supplement.category.clone().unwrap_or_else(|| "uncategorized".to_string())}
                            }
                            p { {supplement.description.clone().unwrap_or_default()} }
                            div { class: "item-facts",
                                span { {display_amount(supplement.price)} }
                                span {
                                    {supplement.stock
                                        .map(|s| format!("{s} in stock"))
                                        .unwrap_or_else(|| "stock unknown".to_string())}
                                }
                            }
                            div { class: "row-actions",
                                button {
                                    class: "secondary",
                                    onclick: {
                                        let s = supplement.clone();
                                        move |_| {
                                            form.set(SupplementForm::from_supplement(&s));
                                            editing.set(Some(s.id));
                                            show_form.set(true);
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "danger",
                                    onclick: {
                                        let id = supplement.id;
                                        move |_| {
                                            spawn(async move {
                                                match gym_client().supplements().remove(id).await {
                                                    Ok(()) => {
                                                        push_notice(
                                                            &mut notices,
                                                            NoticeLevel::Success,
                                                            "Supplement deleted",
                                                        );
                                                        reload(supplements, None, notices).await;
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
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }

        if show_form() {
            ModalOverlay {
                on_close: move |_| show_form.set(false),
                h2 {
                    if editing().is_some() { "Edit supplement" } else { "New supplement" }
                }
                div { class: "form-field",
                    label { "Name" }
                    input {
                        value: form().name,
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                }
                div { class: "form-field",
                    label { "Category" }
                    input {
                        placeholder: "protein, vitamins, ...",
                        value: form().category,
                        oninput: move |evt| form.write().category = evt.value(),
                    }
                }
                div { class: "form-field",
                    label { "Description" }
                    textarea {
                        rows: "3",
                        value: form().description,
                        oninput: move |evt| form.write().description = evt.value(),
                    }
                }
                div { class: "form-row",
                    div { class: "form-field",
                        label { "Price" }
                        input {
                            r#type: "number",
                            min: "0",
                            step: "0.01",
                            value: form().price,
                            oninput: move |evt| form.write().price = evt.value(),
                        }
                    }
                    div { class: "form-field",
                        label { "Stock" }
                        input {
                            r#type: "number",
                            min: "0",
                            value: form().stock,
                            oninput: move |evt| form.write().stock = evt.value(),
                        }
                    }
                }
                div { class: "form-actions",
                    button { class: "secondary", onclick: move |_| show_form.set(false), "Cancel" }
                    button { class: "primary", onclick: on_save, "Save" }
                }
            }
        }
    }
}
