use dioxus::prelude::*;

use crate::icons::FaChartPie;
use crate::Icon;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        div {
            class: "navbar",
            div {
                class: "navbar-brand",
                Icon { icon: FaChartPie, width: 24, height: 24 }
                span { "MoneyMatrix" }
            }
            {children}
        }
    }
}
