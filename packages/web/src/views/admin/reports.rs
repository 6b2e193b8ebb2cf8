//! Report generation: type and date-range controls, summary totals, and
//! CSV export through a browser download.

use api::models::display_amount;
use api::reports::{to_csv, total_amount, ReportRow, REPORT_TYPES};
use dioxus::prelude::*;
use serde_json::Value;
use ui::{gym_client, push_notice, use_notices, Card, NoticeLevel, Spinner};

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn download_csv(kind: &str, csv: &str) {
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(csv));
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    let date = iso.split('T').next().unwrap_or("");
    if let Ok(anchor) = document.create_element("a") {
        let _ = anchor.set_attribute("href", &url);
        let _ = anchor.set_attribute("download", &format!("{kind}-report-{date}.csv"));
        if let Some(element) = anchor.dyn_ref::<web_sys::HtmlElement>() {
            element.click();
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

#[component]
pub fn AdminReports() -> Element {
    let mut notices = use_notices();
    let mut report_type = use_signal(|| "members".to_string());
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut rows = use_signal(Vec::<ReportRow>::new);
    let mut fetched = use_signal(|| false);
    let mut fetching = use_signal(|| false);
    // Only the newest request may apply its response.
    let mut generation = use_signal(|| 0u32);

    let on_generate = move |_| {
        let kind = report_type();
        let start = start_date();
        let end = end_date();
        let request_id = generation() + 1;
        generation.set(request_id);
        fetching.set(true);
        spawn(async move {
            let result = gym_client()
                .reports()
                .fetch(
                    &kind,
                    (!start.is_empty()).then_some(start.as_str()),
                    (!end.is_empty()).then_some(end.as_str()),
                )
                .await;
            if *generation.peek() != request_id {
                return;
            }
            match result {
                Ok(data) => {
                    rows.set(data);
                    fetched.set(true);
                }
                Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
            }
            fetching.set(false);
        });
    };

    let on_export = move |_| {
        match to_csv(&rows()) {
            Some(csv) => {
                #[cfg(target_arch = "wasm32")]
                download_csv(&report_type(), &csv);
                #[cfg(not(target_arch = "wasm32"))]
                {
                    let _ = csv;
                    tracing::info!("csv export is browser-only");
                }
            }
            None => push_notice(&mut notices, NoticeLevel::Warning, "Nothing to export"),
        }
    };

    let data = rows();
    let headers: Vec<String> = data
        .first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default();
    let money_report = report_type() == "bills" || report_type() == "payments";

    rsx! {
        Card {
            title: "Reports",

            div { class: "report-controls",
                div { class: "form-field",
                    label { "Report type" }
                    select {
                        value: report_type(),
                        onchange: move |evt| report_type.set(evt.value()),
                        for (value, label) in REPORT_TYPES {
                            option { value, "{label}" }
                        }
                    }
                }
                div { class: "form-field",
                    label { "From" }
                    input {
                        r#type: "date",
                        value: start_date(),
                        oninput: move |evt| start_date.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { "To" }
                    input {
                        r#type: "date",
                        value: end_date(),
                        oninput: move |evt| end_date.set(evt.value()),
                    }
                }
                button {
                    class: "primary",
                    disabled: fetching(),
                    onclick: on_generate,
                    "Generate"
                }
                button {
                    class: "secondary",
                    disabled: data.is_empty(),
                    onclick: on_export,
                    "Export CSV"
                }
            }

            if fetching() {
                Spinner {}
            } else if fetched() {
                div { class: "report-summary",
                    span {
                        strong { "{data.len()}" }
                        " records"
                    }
                    if money_report {
                        span {
                            "Total: "
                            strong { {display_amount(Some(total_amount(&data)))} }
                        }
                    }
                }
                if data.is_empty() {
                    p { class: "empty", "No records in this range" }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                for header in headers.iter() {
                                    th { "{header}" }
                                }
                            }
                        }
                        tbody {
                            for (idx, row) in data.iter().enumerate() {
                                tr { key: "{idx}",
                                    for header in headers.iter() {
                                        td { {cell_text(row.get(header))} }
                                    }
                                }
                            }
                        }
                    }
                }
            } else {
                p { class: "empty", "Pick a report type and generate" }
            }
        }
    }
}
