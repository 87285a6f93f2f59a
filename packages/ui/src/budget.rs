//! Budget progress ring with an expenses/savings mode switch.
//!
//! The ring is an SVG circle whose stroke-dashoffset encodes the percentage;
//! [`circle_dashoffset`] keeps that math testable. The monthly mini-bars are
//! rolled once on mount (display flair, not data).

use dioxus::prelude::*;

use crate::charts::random_range;

const RING_RADIUS: f64 = 120.0;
const RING_MONTHS: [&str; 6] = ["JUL", "AUG", "SEP", "OCT", "NOV", "DEC"];

/// Stroke offset that leaves `pct` percent of the circle drawn.
pub fn circle_dashoffset(circumference: f64, pct: f64) -> f64 {
    circumference - (pct.clamp(0.0, 100.0) / 100.0) * circumference
}

#[component]
pub fn BudgetProgress(
    #[props(default = 78.0)] expense_percentage: f64,
    #[props(default = 65.0)] saving_percentage: f64,
) -> Element {
    let mut savings_mode = use_signal(|| false);
    let month_heights =
        use_signal(|| RING_MONTHS.map(|_| random_range(40.0, 100.0)).to_vec());

    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
    let pct = if savings_mode() {
        saving_percentage
    } else {
        expense_percentage
    };
    let offset = circle_dashoffset(circumference, pct);
    let mode_class = if savings_mode() { "savings" } else { "expenses" };
    let heights = month_heights();

    rsx! {
        div {
            class: "budget-progress {mode_class}",
            div {
                class: "budget-mode-switch",
                button {
                    class: if !savings_mode() { "mode-btn active" } else { "mode-btn" },
                    onclick: move |_| savings_mode.set(false),
                    "Expenses"
                }
                button {
                    class: if savings_mode() { "mode-btn active" } else { "mode-btn" },
                    onclick: move |_| savings_mode.set(true),
                    "Savings"
                }
            }

            div {
                class: "budget-body",
                div {
                    class: "budget-ring",
                    svg {
                        view_box: "0 0 256 256",
                        circle {
                            class: "ring-track",
                            cx: "128",
                            cy: "128",
                            r: "{RING_RADIUS}",
                        }
                        circle {
                            class: "ring-progress",
                            cx: "128",
                            cy: "128",
                            r: "{RING_RADIUS}",
                            stroke_dasharray: "{circumference:.1}",
                            stroke_dashoffset: "{offset:.1}",
                        }
                    }
                    div {
                        class: "ring-label",
                        p { class: "ring-title", if savings_mode() { "SAVINGS" } else { "BUDGET" } }
                        p { class: "ring-value", "{pct:.0}%" }
                    }
                }

                div {
                    class: "budget-months",
                    h3 {
                        if savings_mode() { "Monthly Savings" } else { "Monthly Expenses" }
                    }
                    div {
                        class: "month-bars",
                        for (month, h) in RING_MONTHS.iter().zip(heights) {
                            div {
                                key: "{month}",
                                class: "month-bar",
                                div {
                                    class: "month-bar-track",
                                    div {
                                        class: "month-bar-fill",
                                        style: "height: {h:.0}%",
                                    }
                                }
                                span { "{month}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashoffset_endpoints() {
        let c = 2.0 * std::f64::consts::PI * RING_RADIUS;
        assert_eq!(circle_dashoffset(c, 0.0), c);
        assert_eq!(circle_dashoffset(c, 100.0), 0.0);
    }

    #[test]
    fn test_dashoffset_clamps_percentage() {
        let c = 100.0;
        assert_eq!(circle_dashoffset(c, 150.0), 0.0);
        assert_eq!(circle_dashoffset(c, -10.0), c);
    }

    #[test]
    fn test_dashoffset_midpoint() {
        assert_eq!(circle_dashoffset(100.0, 50.0), 50.0);
    }
}
