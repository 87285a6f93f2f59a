//! Sign-up page: six-field form with per-field errors and a live
//! password-strength meter recomputed on every keystroke.

use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant, Input, Label};
use ui::icons::{FaArrowLeft, FaEye, FaEyeSlash, FaGithub, FaGoogle};
use ui::{password_strength, validate_sign_up, FormErrors, Icon, SignUpData, ThemeToggle};

use crate::Route;

const STRENGTH_SEGMENTS: u8 = 4;

#[component]
pub fn SignUp() -> Element {
    let mut form = use_signal(SignUpData::default);
    let mut show_password = use_signal(|| false);
    let mut errors = use_signal(FormErrors::default);
    let nav = use_navigator();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let data = form();
        let validation = validate_sign_up(&data);
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }
        errors.set(FormErrors::default());

        // No backend yet; a valid submission is only logged.
        tracing::info!("sign-up submitted for {} ({})", data.username, data.email);
    };

    let errs = errors();
    let strength = password_strength(&form().password);
    let show_meter = !form().password.is_empty();
    let active_seg = format!("strength-seg strength-{}", strength.color);
    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        div {
            class: "auth-page signup-page",
            ThemeToggle {}

            div {
                class: "signup-card",

                // Left section - form
                div {
                    class: "signup-form-panel",
                    button {
                        class: "btn btn-ghost back-btn",
                        onclick: move |_| { nav.push(Route::Welcome {}); },
                        Icon { icon: FaArrowLeft, width: 20, height: 20 }
                    }

                    div {
                        class: "signup-header",
                        div { class: "signup-logo", "$" }
                        h1 { "Choose Your Reality" }
                        p { "Take control of your financial destiny" }
                    }

                    div {
                        class: "social-buttons",
                        button {
                            class: "btn btn-ghost social-btn",
                            Icon { icon: FaGoogle, width: 22, height: 22 }
                        }
                        button {
                            class: "btn btn-ghost social-btn",
                            Icon { icon: FaGithub, width: 22, height: 22 }
                        }
                    }

                    div {
                        class: "divider",
                        span { "or" }
                    }

                    form {
                        class: "auth-form",
                        onsubmit: handle_submit,

                        div {
                            class: "form-grid-2",
                            div {
                                class: "form-field",
                                Label { "First Name" }
                                Input {
                                    name: "first_name",
                                    value: form().first_name,
                                    oninput: move |evt: FormEvent| form.write().first_name = evt.value(),
                                }
                                if let Some(msg) = errs.get("first_name") {
                                    p { class: "field-error", "{msg}" }
                                }
                            }
                            div {
                                class: "form-field",
                                Label { "Last Name" }
                                Input {
                                    name: "last_name",
                                    value: form().last_name,
                                    oninput: move |evt: FormEvent| form.write().last_name = evt.value(),
                                }
                                if let Some(msg) = errs.get("last_name") {
                                    p { class: "field-error", "{msg}" }
                                }
                            }
                        }

                        div {
                            class: "form-field",
                            Label { "Username" }
                            Input {
                                name: "username",
                                value: form().username,
                                oninput: move |evt: FormEvent| form.write().username = evt.value(),
                            }
                            if let Some(msg) = errs.get("username") {
                                p { class: "field-error", "{msg}" }
                            }
                        }

                        div {
                            class: "form-field",
                            Label { "Email" }
                            Input {
                                r#type: "email",
                                name: "email",
                                value: form().email,
                                oninput: move |evt: FormEvent| form.write().email = evt.value(),
                            }
                            if let Some(msg) = errs.get("email") {
                                p { class: "field-error", "{msg}" }
                            }
                        }

                        div {
                            class: "form-field",
                            Label { "Phone Number" }
                            Input {
                                r#type: "tel",
                                name: "phone",
                                value: form().phone,
                                oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                            }
                            if let Some(msg) = errs.get("phone") {
                                p { class: "field-error", "{msg}" }
                            }
                        }

                        div {
                            class: "form-field",
                            Label { "Password" }
                            div {
                                class: "password-wrap",
                                Input {
                                    r#type: "{password_type}",
                                    name: "password",
                                    value: form().password,
                                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                                }
                                if show_meter {
                                    span { class: "strength-label strength-{strength.color}", "{strength.label}" }
                                }
                                button {
                                    r#type: "button",
                                    class: "password-reveal",
                                    onclick: move |_| show_password.set(!show_password()),
                                    if show_password() {
                                        Icon { icon: FaEyeSlash, width: 18, height: 18 }
                                    } else {
                                        Icon { icon: FaEye, width: 18, height: 18 }
                                    }
                                }
                            }
                            div {
                                class: "strength-bar",
                                for i in 1..=STRENGTH_SEGMENTS {
                                    div {
                                        key: "{i}",
                                        class: if i <= strength.score { "{active_seg}" } else { "strength-seg" },
                                    }
                                }
                            }
                            if let Some(msg) = errs.get("password") {
                                p { class: "field-error", "{msg}" }
                            }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            class: "auth-submit",
                            r#type: "submit",
                            "Take the Blue Pill"
                        }

                        p {
                            class: "auth-switch",
                            "Already unplugged from the Matrix? "
                            Link { to: Route::SignIn {}, "Sign in" }
                        }
                    }
                }

                // Right section - pitch
                div {
                    class: "signup-side-panel",
                    div {
                        class: "signup-pitch",
                        h2 { "The Choice is Yours" }
                        p {
                            "Take the blue pill to unplug from financial uncertainty. "
                            "Join MoneyMatrix and discover the truth about your financial potential."
                        }
                        div {
                            class: "pitch-points",
                            span { class: "pitch-dot dot-blue", "" }
                            span { "Financial Freedom" }
                            span { class: "pitch-dot dot-red", "" }
                            span { "Smart Investing" }
                            span { class: "pitch-dot dot-green", "" }
                            span { "Wealth Building" }
                        }
                    }
                }
            }
        }
    }
}
