//! Fee package administration.

use api::models::{display_amount, FeePackage, FeePackagePayload};
use dioxus::prelude::*;
use ui::{
    gym_client, push_notice, use_notices, Card, ModalOverlay, NoticeBoard, NoticeLevel, Spinner,
};

#[derive(Clone, Default, PartialEq)]
struct PackageForm {
    name: String,
    amount: String,
    duration_months: String,
    description: String,
}

async fn reload(mut packages: Signal<Vec<FeePackage>>, mut notices: Signal<NoticeBoard>) {
    match gym_client().fee_packages().list().await {
        Ok(list) => packages.set(list),
        Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
    }
}

#[component]
pub fn AdminFeePackages() -> Element {
    let mut notices = use_notices();
    let packages = use_signal(Vec::<FeePackage>::new);
    let mut loading = use_signal(|| true);
    let mut show_form = use_signal(|| false);
    let mut form = use_signal(PackageForm::default);

    let _loader = use_resource(move || async move {
        reload(packages, notices).await;
        loading.set(false);
    });

    let on_save = move |_| {
        let draft = form();
        if draft.name.trim().is_empty() {
            push_notice(&mut notices, NoticeLevel::Warning, "Package name is required");
            return;
        }
        let Ok(amount) = draft.amount.parse::<f64>() else {
            push_notice(&mut notices, NoticeLevel::Warning, "Amount must be a number");
            return;
        };
        let Ok(duration_months) = draft.duration_months.parse::<i64>() else {
            push_notice(&mut notices, NoticeLevel::Warning, "Duration must be a whole number");
            return;
        };
        let payload = FeePackagePayload {
            name: draft.name.trim().to_string(),
            amount,
            duration_months,
            description: draft.description.trim().to_string(),
        };
        spawn(async move {
            match gym_client().fee_packages().create(&payload).await {
                Ok(_) => {
                    push_notice(&mut notices, NoticeLevel::Success, "Fee package created");
                    show_form.set(false);
                    reload(packages, notices).await;
                }
                Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
            }
        });
    };

    rsx! {
        Card {
            title: "Fee Packages",
            actions: rsx! {
                button {
                    class: "primary",
                    onclick: move |_| {
                        form.set(PackageForm::default());
                        show_form.set(true);
                    },
                    "New package"
                }
            },

            if loading() {
                Spinner {}
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Amount" }
                            th { "Duration" }
                            th { "Description" }
                        }
                    }
                    tbody {
                        if packages().is_empty() {
                            tr {
                                td { class: "empty", colspan: 4, "No fee packages yet" }
                            }
                        }
                        for package in packages() {
                            tr { key: "{package.id}",
                                td { "{package.name}" }
                                td { {display_amount(package.amount)} }
                                td {
                                    {package.duration_months
                                        .map(|m| format!("{m} mo"))
                                        .unwrap_or_else(|| "—".to_string())}
                                }
                                td { {package.description.clone().unwrap_or_default()} }
                            }
                        }
                    }
                }
            }
        }

        if show_form() {
            ModalOverlay {
                on_close: move |_| show_form.set(false),
                h2 { "New fee package" }
                div { class: "form-field",
                    label { "Name" }
                    input {
                        value: form().name,
                        oninput: move |evt| form.write().name = evt.value(),
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
                        label { "Duration (months)" }
                        input {
                            r#type: "number",
                            min: "1",
                            value: form().duration_months,
                            oninput: move |evt| form.write().duration_months = evt.value(),
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
                div { class: "form-actions",
                    button { class: "secondary", onclick: move |_| show_form.set(false), "Cancel" }
                    button { class: "primary", onclick: on_save, "Create" }
                }
            }
        }
    }
}
