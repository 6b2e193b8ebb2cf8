//! Combined sign-in / sign-up view.

use api::{AuthOutcome, Role};
use dioxus::prelude::*;
use ui::{do_login, do_signup, push_notice, use_auth, use_notices, NoticeLevel};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut notices = use_notices();

    let mut signup_mode = use_signal(|| false);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut role = use_signal(|| Role::User);
    let mut busy = use_signal(|| false);

    // An already-restored session skips the form entirely.
    use_effect(move || {
        let snapshot = auth();
        if !snapshot.loading {
            if let Some(role) = snapshot.role {
                nav.replace(Route::home_for(role));
            }
        }
    });

    let submit = move |_| {
        if busy() {
            return;
        }
        let email_v = email().trim().to_string();
        let password_v = password();
        let role_v = role();

        if email_v.is_empty() || password_v.is_empty() {
            push_notice(
                &mut notices,
                NoticeLevel::Warning,
                "Email and password are required",
            );
            return;
        }
        if signup_mode() {
            if password_v.len() < 6 {
                push_notice(
                    &mut notices,
                    NoticeLevel::Warning,
                    "Password must be at least 6 characters",
                );
                return;
            }
            if password_v != confirm() {
                push_notice(&mut notices, NoticeLevel::Warning, "Passwords do not match");
                return;
            }
        }

        busy.set(true);
        let name_v = name().trim().to_string();
        let registering = signup_mode();
        spawn(async move {
            if registering {
                match do_signup(&email_v, &password_v, role_v, &name_v).await {
                    AuthOutcome::Success { .. } => {
                        push_notice(&mut notices, NoticeLevel::Success, "Account created");
                    }
                    AuthOutcome::Failure { message } => {
                        push_notice(&mut notices, NoticeLevel::Error, &message);
                        busy.set(false);
                        return;
                    }
                }
            }
            // Sign-up flows straight into a session.
            match do_login(auth, &email_v, &password_v, role_v).await {
                AuthOutcome::Success { warning } => {
                    if let Some(warning) = warning {
                        push_notice(&mut notices, NoticeLevel::Warning, &warning);
                    }
                    nav.replace(Route::home_for(role_v));
                }
                AuthOutcome::Failure { message } => {
                    push_notice(&mut notices, NoticeLevel::Error, &message);
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                h1 { "Gym Console" }
                p { class: "subtitle",
                    if signup_mode() {
                        "Create your account"
                    } else {
                        "Sign in to continue"
                    }
                }

                if signup_mode() {
                    div { class: "form-field",
                        label { "Name" }
                        input {
                            r#type: "text",
                            placeholder: "Jane Doe",
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                }

                div { class: "form-field",
                    label { "Email" }
                    input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                div { class: "form-field",
                    label { "Password" }
                    input {
                        r#type: "password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                if signup_mode() {
                    div { class: "form-field",
                        label { "Confirm password" }
                        input {
                            r#type: "password",
                            value: confirm(),
                            oninput: move |evt| confirm.set(evt.value()),
                        }
                    }
                }

                div { class: "form-field",
                    label { "Role" }
                    select {
                        value: role().as_str(),
                        onchange: move |evt| {
                            if let Ok(parsed) = evt.value().parse::<Role>() {
                                role.set(parsed);
                            }
                        },
                        for option in Role::ALL {
                            option { value: option.as_str(), "{option.label()}" }
                        }
                    }
                }

                button {
                    class: "primary login-submit",
                    disabled: busy(),
                    onclick: submit,
                    if signup_mode() { "Create account" } else { "Sign in" }
                }

                div { class: "login-toggle",
                    if signup_mode() {
                        "Already have an account? "
                        button { onclick: move |_| signup_mode.set(false), "Sign in" }
                    } else {
                        "New here? "
                        button { onclick: move |_| signup_mode.set(true), "Create an account" }
                    }
                }
            }
        }
    }
}
