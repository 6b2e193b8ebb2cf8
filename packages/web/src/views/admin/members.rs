//! Member administration: roster, search, CRUD, and package assignment.

use api::models::{created_at_sort_key, display_date, FeePackage, Member, MemberPayload};
use dioxus::prelude::*;
use ui::{
    gym_client, push_notice, use_notices, Card, ModalOverlay, NoticeBoard, NoticeLevel, Spinner,
    StatusBadge,
};

#[derive(Clone, Default, PartialEq)]
struct MemberForm {
    name: String,
    email: String,
    phone: String,
    address: String,
    status: String,
    role: String,
    fee_package_id: String,
}

impl MemberForm {
    fn from_member(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            email: member.email.clone(),
            phone: member.phone.clone().unwrap_or_default(),
            address: member.address.clone().unwrap_or_default(),
            status: member.status.clone().unwrap_or_default(),
            role: member.role.clone().unwrap_or_default(),
            fee_package_id: member
                .fee_package_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }
}

async fn reload(mut members: Signal<Vec<Member>>, mut notices: Signal<NoticeBoard>) {
    match gym_client().members().list().await {
        Ok(mut list) => {
            list.sort_by(|a, b| {
                created_at_sort_key(b.created_at.as_deref())
                    .cmp(&created_at_sort_key(a.created_at.as_deref()))
            });
            members.set(list);
        }
        Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
    }
}

#[component]
pub fn AdminMembers() -> Element {
    let mut notices = use_notices();
    let mut members = use_signal(Vec::<Member>::new);
    let mut packages = use_signal(Vec::<FeePackage>::new);
    let mut loading = use_signal(|| true);
    let mut search_term = use_signal(String::new);

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Member>::None);
    let mut form = use_signal(MemberForm::default);

    let mut assigning = use_signal(|| Option::<Member>::None);
    let mut assign_pkg = use_signal(String::new);

    let _loader = use_resource(move || async move {
        reload(members, notices).await;
        match gym_client().fee_packages().list().await {
            Ok(list) => packages.set(list),
            Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
        }
        loading.set(false);
    });

    let run_search = move |_| {
        let term = search_term().trim().to_string();
        spawn(async move {
            if term.is_empty() {
                reload(members, notices).await;
                return;
            }
            match gym_client().members().search(&term).await {
                Ok(list) => members.set(list),
                Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
            }
        });
    };

    let on_save = move |_| {
        let draft = form();
        if draft.name.trim().is_empty() || draft.email.trim().is_empty() {
            push_notice(&mut notices, NoticeLevel::Warning, "Name and email are required");
            return;
        }
        let fee_package_id = draft.fee_package_id.parse::<i64>().ok();
        let package = fee_package_id
            .and_then(|id| packages().into_iter().find(|p| p.id == id));
        let current = editing();
        let payload = MemberPayload {
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            address: draft.address.trim().to_string(),
            join_date: current.as_ref().and_then(|m| m.join_date.clone()),
            status: if draft.status.is_empty() {
                "active".to_string()
            } else {
                draft.status.clone()
            },
            role: if draft.role.is_empty() {
                "member".to_string()
            } else {
                draft.role.clone()
            },
            fee_package_id,
            fee_package_name: package.as_ref().map(|p| p.name.clone()),
            fee_package_amount: package.as_ref().and_then(|p| p.amount),
            // The backend stamps fresh assignments; an unchanged package
            // keeps its original date.
            assigned_at: current.as_ref().filter(|m| m.fee_package_id == fee_package_id)
                .and_then(|m| m.assigned_at.clone()),
        };
        spawn(async move {
            let client = gym_client();
            let result = match &current {
                Some(m) => client.members().update(m.id, &payload).await.map(|_| "Member updated"),
                None => client.members().create(&payload).await.map(|_| "Member created"),
            };
            match result {
                Ok(msg) => {
                    push_notice(&mut notices, NoticeLevel::Success, msg);
                    show_form.set(false);
                    reload(members, notices).await;
                }
                Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
            }
        });
    };

    let on_assign = move |_| {
        let Some(member) = assigning() else { return };
        let Ok(package_id) = assign_pkg().parse::<i64>() else {
            push_notice(&mut notices, NoticeLevel::Warning, "Pick a package first");
            return;
        };
        spawn(async move {
            match gym_client().members().assign_package(member.id, package_id).await {
                Ok(_) => {
                    push_notice(&mut notices, NoticeLevel::Success, "Package assigned");
                    assigning.set(None);
                    reload(members, notices).await;
                }
                Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
            }
        });
    };

    rsx! {
        Card {
            title: "Members",
            actions: rsx! {
                input {
                    r#type: "search",
                    placeholder: "Search members...",
                    value: search_term(),
                    oninput: move |evt| search_term.set(evt.value()),
                }
                button { class: "secondary", onclick: run_search, "Search" }
                button {
                    class: "primary",
                    onclick: move |_| {
                        editing.set(None);
                        form.set(MemberForm::default());
                        show_form.set(true);
                    },
                    "Add member"
                }
            },

            if loading() {
                Spinner {}
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Phone" }
                            th { "Package" }
                            th { "Status" }
                            th { "Joined" }
                            th { "" }
                        }
                    }
                    tbody {
                        if members().is_empty() {
                            tr {
                                td { class: "empty", colspan: 7, "No members found" }
                            }
                        }
                        for member in members() {
                            tr { key: "{member.id}",
                                td { "{member.name}" }
                                td { "{member.email}" }
                                td { {member.phone.clone().unwrap_or_else(|| "—".to_string())} }
                                td { {member.fee_package_name.clone().unwrap_or_else(|| "—".to_string())} }
                                td {
                                    StatusBadge { status: member.status.clone() }
                                }
                                td { {display_date(member.join_date.as_deref())} }
                                td { class: "row-actions",
                                    button {
                                        class: "secondary",
                                        onclick: {
                                            let m = member.clone();
                                            move |_| {
                                                form.set(MemberForm::from_member(&m));
                                                editing.set(Some(m.clone()));
                                                show_form.set(true);
                                            }
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "secondary",
                                        onclick: {
                                            let m = member.clone();
                                            move |_| {
                                                assign_pkg.set(
                                                    m.fee_package_id
                                                        .map(|id| id.to_string())
                                                        .unwrap_or_default(),
                                                );
                                                assigning.set(Some(m.clone()));
                                            }
                                        },
                                        "Assign"
                                    }
                                    button {
                                        class: "danger",
                                        onclick: {
                                            let id = member.id;
                                            move |_| {
                                                spawn(async move {
                                                    match gym_client().members().remove(id).await {
                                                        Ok(()) => {
                                                            push_notice(
                                                                &mut notices,
                                                                NoticeLevel::Success,
                                                                "Member deleted",
                                                            );
                                                            reload(members, notices).await;
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
        }

        if show_form() {
            ModalOverlay {
                on_close: move |_| show_form.set(false),
                h2 {
                    if editing().is_some() { "Edit member" } else { "New member" }
                }
                div { class: "form-row",
                    div { class: "form-field",
                        label { "Name" }
                        input {
                            value: form().name,
                            oninput: move |evt| form.write().name = evt.value(),
                        }
                    }
                    div { class: "form-field",
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: form().email,
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                    }
                }
                div { class: "form-row",
                    div { class: "form-field",
                        label { "Phone" }
                        input {
                            value: form().phone,
                            oninput: move |evt| form.write().phone = evt.value(),
                        }
                    }
                    div { class: "form-field",
                        label { "Status" }
                        select {
                            value: form().status,
                            onchange: move |evt| form.write().status = evt.value(),
                            option { value: "active", "Active" }
                            option { value: "inactive", "Inactive" }
                        }
                    }
                }
                div { class: "form-field",
                    label { "Address" }
                    input {
                        value: form().address,
                        oninput: move |evt| form.write().address = evt.value(),
                    }
                }
                div { class: "form-field",
                    label { "Fee package" }
                    select {
                        value: form().fee_package_id,
                        onchange: move |evt| form.write().fee_package_id = evt.value(),
                        option { value: "", "None" }
                        for package in packages() {
                            option { value: "{package.id}", "{package.name}" }
                        }
                    }
                }
                div { class: "form-actions",
                    button { class: "secondary", onclick: move |_| show_form.set(false), "Cancel" }
                    button { class: "primary", onclick: on_save, "Save" }
                }
            }
        }

        if let Some(member) = assigning() {
            ModalOverlay {
                on_close: move |_| assigning.set(None),
                h2 { "Assign package" }
                p { "Member: {member.name}" }
                div { class: "form-field",
                    label { "Fee package" }
                    select {
                        value: assign_pkg(),
                        onchange: move |evt| assign_pkg.set(evt.value()),
                        option { value: "", "Pick a package" }
                        for package in packages() {
                            option { value: "{package.id}", "{package.name}" }
                        }
                    }
                }
                div { class: "form-actions",
                    button { class: "secondary", onclick: move |_| assigning.set(None), "Cancel" }
                    button { class: "primary", onclick: on_assign, "Assign" }
                }
            }
        }
    }
}
