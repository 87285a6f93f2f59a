//! Company logo image backed by the best-effort logo lookup.
//!
//! While the lookup is in flight a pulse placeholder renders; once it
//! resolves, either the found logo or the fallback image is shown. The image
//! source is never left unset.

use dioxus::prelude::*;

use api::{logo_or_fallback, search_logo, LogoConfig};

#[component]
pub fn CompanyLogo(
    name: String,
    #[props(default = "Company logo".to_string())] alt: String,
    #[props(default = "company-logo".to_string())] class: String,
) -> Element {
    let company = name.clone();
    let logo = use_resource(move || {
        let company = company.clone();
        async move {
            let client = reqwest::Client::new();
            let config = LogoConfig::from_env();
            logo_or_fallback(search_logo(&client, &config, &company).await)
        }
    });

    match logo() {
        Some(src) => rsx! {
            img {
                class: "{class}",
                src: "{src}",
                alt: "{alt}",
            }
        },
        None => rsx! {
            div { class: "{class} logo-loading" }
        },
    }
}
