//! Diet plan administration.

use api::models::{DietPlan, DietPlanPayload};
use dioxus::prelude::*;
use ui::{
    gym_client, push_notice, use_notices, Card, ModalOverlay, NoticeBoard, NoticeLevel, Spinner,
};

#[derive(Clone, Default, PartialEq)]
struct DietPlanForm {
    title: String,
    description: String,
    meal_plan: String,
    category: String,
    calories: String,
    duration_weeks: String,
}

impl DietPlanForm {
    fn from_plan(plan: &DietPlan) -> Self {
        Self {
            title: plan.title.clone(),
            description: plan.description.clone().unwrap_or_default(),
            meal_plan: plan.meal_plan.clone().unwrap_or_default(),
            category: plan.category.clone().unwrap_or_default(),
            calories: plan.calories.map(|c| c.to_string()).unwrap_or_default(),
            duration_weeks: plan
                .duration_weeks
                .map(|w| w.to_string())
                .unwrap_or_default(),
        }
    }
}

async fn reload(mut plans: Signal<Vec<DietPlan>>, mut notices: Signal<NoticeBoard>) {
    match gym_client().diet_plans().list().await {
        Ok(list) => plans.set(list),
        Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
    }
}

#[component]
pub fn AdminDietPlans() -> Element {
    let mut notices = use_notices();
    let plans = use_signal(Vec::<DietPlan>::new);
    let mut loading = use_signal(|| true);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<i64>::None);
    let mut form = use_signal(DietPlanForm::default);

    let _loader = use_resource(move || async move {
        reload(plans, notices).await;
        loading.set(false);
    });

    let on_save = move |_| {
        let draft = form();
        if draft.title.trim().is_empty() {
            push_notice(&mut notices, NoticeLevel::Warning, "Plan title is required");
            return;
        }
        let Ok(calories) = draft.calories.parse::<i64>() else {
            push_notice(&mut notices, NoticeLevel::Warning, "Calories must be a whole number");
            return;
        };
        let Ok(duration_weeks) = draft.duration_weeks.parse::<i64>() else {
            push_notice(&mut notices, NoticeLevel::Warning, "Duration must be a whole number");
            return;
        };
        let payload = DietPlanPayload {
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            meal_plan: draft.meal_plan.trim().to_string(),
            category: draft.category.trim().to_string(),
            calories,
            duration_weeks,
        };
        let current = editing();
        spawn(async move {
            let client = gym_client();
            let result = match current {
                Some(id) => client
                    .diet_plans()
                    .update(id, &payload)
                    .await
                    .map(|_| "Diet plan updated"),
                None => client
                    .diet_plans()
                    .create(&payload)
                    .await
                    .map(|_| "Diet plan created"),
            };
            match result {
                Ok(msg) => {
                    push_notice(&mut notices, NoticeLevel::Success, msg);
                    show_form.set(false);
                    reload(plans, notices).await;
                }
                Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
            }
        });
    };

    rsx! {
        Card {
            title: "Diet Plans",
            actions: rsx! {
                button {
                    class: "primary",
                    onclick: move |_| {
                        editing.set(None);
                        form.set(DietPlanForm::default());
                        show_form.set(true);
                    },
                    "Add plan"
                }
            },

            if loading() {
                Spinner {}
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Category" }
                            th { "Calories" }
                            th { "Duration" }
                            th { "Description" }
                            th { "" }
                        }
                    }
                    tbody {
                        if plans().is_empty() {
                            tr {
                                td { class: "empty", colspan: 6, "No diet plans yet" }
                            }
                        }
                        for plan in plans() {
                            tr { key: "{plan.id}",
                                td { "{plan.title}" }
                                td { {plan.category.clone().unwrap_or_else(|| "—".to_string())} }
                                td {
                                    {plan.calories
                                        .map(|c| format!("{c} kcal"))
                                        .unwrap_or_else(|| "—".to_string())}
                                }
                                td {
                                    {plan.duration_weeks
                                        .map(|w| format!("{w} wk"))
                                        .unwrap_or_else(|| "—".to_string())}
                                }
                                td { {plan.description.clone().unwrap_or_default()} }
                                td { class: "row-actions",
                                    button {
                                        class: "secondary",
                                        onclick: {
                                            let p = plan.clone();
                                            move |_| {
                                                form.set(DietPlanForm::from_plan(&p));
                                                editing.set(Some(p.id));
                                                show_form.set(true);
                                            }
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "danger",
                                        onclick: {
                                            let id = plan.id;
                                            move |_| {
                                                spawn(async move {
                                                    match gym_client().diet_plans().remove(id).await {
                                                        Ok(()) => {
                                                            push_notice(
                                                                &mut notices,
                                                                NoticeLevel::Success,
                                                                "Diet plan deleted",
                                                            );
                                                            reload(plans, notices).await;
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
                    if editing().is_some() { "Edit diet plan" } else { "New diet plan" }
                }
                div { class: "form-field",
                    label { "Title" }
                    input {
                        value: form().title,
                        oninput: move |evt| form.write().title = evt.value(),
                    }
                }
                div { class: "form-row",
                    div { class: "form-field",
                        label { "Category" }
                        input {
                            placeholder: "weight-loss, bulking, ...",
                            value: form().category,
                            oninput: move |evt| form.write().category = evt.value(),
                        }
                    }
                    div { class: "form-field",
                        label { "Calories" }
                        input {
                            r#type: "number",
                            min: "0",
                            value: form().calories,
                            oninput: move |evt| form.write().calories = evt.value(),
                        }
                    }
                    div { class: "form-field",
                        label { "Weeks" }
                        input {
                            r#type: "number",
                            min: "1",
                            value: form().duration_weeks,
                            oninput: move |evt| form.write().duration_weeks = evt.value(),
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
                    label { "Meal plan" }
                    textarea {
                        rows: "5",
                        placeholder: "Breakfast: ...\nLunch: ...\nDinner: ...",
                        value: form().meal_plan,
                        oninput: move |evt| form.write().meal_plan = evt.value(),
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
