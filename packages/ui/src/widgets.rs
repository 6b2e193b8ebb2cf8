//! Small shared widgets used across the dashboards.

use dioxus::prelude::*;

/// Card with a header row (title plus optional action slot) and body.
#[component]
pub fn Card(
    title: String,
    actions: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "card",
            div {
                class: "card-header",
                h2 { "{title}" }
                if let Some(actions) = actions {
                    div { class: "card-actions", {actions} }
                }
            }
            {children}
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}

/// Colored pill for status-ish strings (active/inactive, pending/paid, ...).
#[component]
pub fn StatusBadge(status: Option<String>) -> Element {
    let status = status.unwrap_or_else(|| "unknown".to_string());
    rsx! {
        span { class: "status-badge status-badge--{status}", "{status}" }
    }
}

/// Click-outside-to-close modal shell for the management forms.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
