use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] name: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default)] oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            r#type: r#type,
            name: "{name}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Label(
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        label {
            class: "label {class}",
            {children}
        }
    }
}

#[component]
pub fn Checkbox(
    #[props(default = "".to_string())] class: String,
    #[props(default = false)] checked: bool,
    #[props(default)] onchange: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            class: "checkbox {class}",
            r#type: "checkbox",
            checked: checked,
            onchange: move |evt| {
                if let Some(handler) = &onchange {
                    handler.call(evt);
                }
            },
        }
    }
}
