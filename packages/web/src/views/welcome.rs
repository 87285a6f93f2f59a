//! Welcome/marketing page: hero, live demo charts, features, how-it-works.

use dioxus::prelude::*;

use ui::icons::{FaArrowRight, FaChartColumn, FaClock, FaShieldHalved, FaUsers};
use ui::{AnimatedBarChart, BudgetProgress, Icon, Navbar, ThemeToggle};

use crate::Route;

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Smart Expense Tracking",
        description: "Automatically categorize your expenses and get insights into your spending patterns.",
    },
    Feature {
        title: "Shared Expenses Management",
        description: "Split bills with roommates or friends effortlessly and track who owes what.",
    },
    Feature {
        title: "Real-time Budget Updates",
        description: "Stay on top of your finances with instant notifications and real-time budget tracking.",
    },
    Feature {
        title: "Secure Financial Data",
        description: "Bank-level security ensures your financial information stays private and protected.",
    },
];

const HOW_IT_WORKS: [(&str, &str, &str); 4] = [
    ("01", "Connect Your Accounts", "Securely link your bank accounts to automatically import transactions."),
    ("02", "Set Your Budget", "Create custom budget categories and set spending limits that work for you."),
    ("03", "Track Progress", "Monitor your spending and savings goals with intuitive visualizations."),
    ("04", "Optimize Spending", "Get insights to help you save more and spend wisely."),
];

#[component]
pub fn Welcome() -> Element {
    rsx! {
        div {
            class: "welcome-page",

            Navbar {
                Link {
                    class: "btn btn-primary navbar-cta",
                    to: Route::SignUp {},
                    "Get Started"
                }
            }
            ThemeToggle {}

            // Hero
            section {
                class: "hero",
                h1 {
                    class: "hero-title",
                    "Simplify Your Finances"
                }
                p {
                    class: "hero-subtitle",
                    "Track expenses, split bills, and achieve your financial goals with our smart budget planner. "
                    "Take control of your money and make better financial decisions."
                }
                Link {
                    class: "btn btn-primary hero-cta",
                    to: Route::SignUp {},
                    "Get Started Free"
                    Icon { icon: FaArrowRight, width: 16, height: 16 }
                }
                p {
                    class: "hero-signin",
                    "Already have an account? "
                    Link { to: Route::SignIn {}, "Sign in" }
                }
            }

            // Live demo charts
            section {
                class: "demo",
                BudgetProgress { expense_percentage: 90.0, saving_percentage: 10.0 }
                AnimatedBarChart {}
            }

            // Features
            section {
                class: "features",
                h2 { "Everything you need to manage your money" }
                p { class: "section-subtitle", "Powerful features to help you take control of your finances" }
                div {
                    class: "feature-grid",
                    for feature in FEATURES {
                        div {
                            key: "{feature.title}",
                            class: "feature-card",
                            FeatureIcon { title: feature.title }
                            h3 { "{feature.title}" }
                            p { "{feature.description}" }
                        }
                    }
                }
            }

            // How it works
            section {
                class: "how-it-works",
                h2 { "How it works" }
                div {
                    class: "steps-grid",
                    for (step, title, description) in HOW_IT_WORKS {
                        div {
                            key: "{step}",
                            class: "step-card",
                            span { class: "step-number", "{step}" }
                            h3 { "{title}" }
                            p { "{description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureIcon(title: &'static str) -> Element {
    let icon = match title {
        "Smart Expense Tracking" => rsx! { Icon { icon: FaChartColumn, width: 28, height: 28 } },
        "Shared Expenses Management" => rsx! { Icon { icon: FaUsers, width: 28, height: 28 } },
        "Real-time Budget Updates" => rsx! { Icon { icon: FaClock, width: 28, height: 28 } },
        _ => rsx! { Icon { icon: FaShieldHalved, width: 28, height: 28 } },
    };
    rsx! {
        div { class: "feature-icon", {icon} }
    }
}
