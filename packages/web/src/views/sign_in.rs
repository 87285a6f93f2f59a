//! Sign-in page: two-field form validated against the sign-in schema.
//!
//! There is no backend; a valid submission is only logged. Invalid input
//! surfaces as inline messages under the offending field.

use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant, Checkbox, Input, Label};
use ui::icons::{FaEye, FaEyeSlash, FaGithub, FaGoogle};
use ui::{validate_sign_in, FormErrors, Icon, Navbar, SignInData, Testimonial, TestimonialCarousel, ThemeToggle};

use crate::Route;

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            content: "MoneyMatrix finally made my spending visible. I cut my subscriptions in half the first month.".to_string(),
            author: "Sarah Chen".to_string(),
            role: "Product Designer".to_string(),
            image: "/assets/placeholder-logo.svg".to_string(),
        },
        Testimonial {
            content: "Splitting rent and groceries with roommates used to be a spreadsheet nightmare. Not anymore.".to_string(),
            author: "Marcus Webb".to_string(),
            role: "Graduate Student".to_string(),
            image: "/assets/placeholder-logo.svg".to_string(),
        },
        Testimonial {
            content: "The budget ring is the first chart that actually changed how I spend.".to_string(),
            author: "Priya Nair".to_string(),
            role: "Engineer".to_string(),
            image: "/assets/placeholder-logo.svg".to_string(),
        },
    ]
}

#[component]
pub fn SignIn() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember_me = use_signal(|| false);
    let mut show_password = use_signal(|| false);
    let mut errors = use_signal(FormErrors::default);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let data = SignInData {
            email: email().trim().to_string(),
            password: password(),
            remember_me: remember_me(),
        };

        let validation = validate_sign_in(&data);
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }
        errors.set(FormErrors::default());

        loading.set(true);
        spawn(async move {
            // No authentication backend yet; the validated payload is only logged.
            tracing::info!("sign-in submitted for {}", data.email);
            loading.set(false);
        });
    };

    let errs = errors();
    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        div {
            class: "auth-page",

            Navbar {}
            ThemeToggle {}

            div {
                class: "auth-split",

                // Left side - form
                div {
                    class: "auth-form-panel",
                    h2 { class: "auth-title", "Hello, Welcome Back!" }

                    div {
                        class: "social-buttons",
                        button {
                            class: "btn btn-secondary social-btn",
                            Icon { icon: FaGoogle, width: 18, height: 18 }
                            "Google"
                        }
                        button {
                            class: "btn btn-secondary social-btn",
                            Icon { icon: FaGithub, width: 18, height: 18 }
                            "GitHub"
                        }
                    }

                    div {
                        class: "divider",
                        span { "Or continue with" }
                    }

                    form {
                        class: "auth-form",
                        onsubmit: handle_submit,

                        div {
                            class: "form-field",
                            Label { "Email address" }
                            Input {
                                r#type: "email",
                                name: "email",
                                value: email(),
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                            if let Some(msg) = errs.get("email") {
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
                                    value: password(),
                                    oninput: move |evt: FormEvent| password.set(evt.value()),
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
                            if let Some(msg) = errs.get("password") {
                                p { class: "field-error", "{msg}" }
                            }
                        }

                        div {
                            class: "form-row",
                            label {
                                class: "remember-me",
                                Checkbox {
                                    checked: remember_me(),
                                    onchange: move |evt: FormEvent| remember_me.set(evt.checked()),
                                }
                                "Remember me"
                            }
                            a { class: "form-link", href: "#", "Forgot your password?" }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            class: "auth-submit",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                    }

                    p {
                        class: "auth-switch",
                        "Not a member? "
                        Link { to: Route::SignUp {}, "Sign up now" }
                    }
                }

                // Right side - testimonials
                div {
                    class: "auth-side-panel",
                    TestimonialCarousel { testimonials: testimonials() }
                }
            }
        }
    }
}
