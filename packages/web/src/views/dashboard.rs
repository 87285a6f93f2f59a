//! Dashboard page: splash overlay, header with theme toggle and user chip,
//! sidebar menu, animated balance counters, statistics line chart, and the
//! fixed transaction list with per-row company logos.

use dioxus::prelude::*;

use ui::icons::{
    FaArrowTrendUp, FaBell, FaChartColumn, FaChevronDown, FaCreditCard, FaGear, FaUsers,
};
use ui::time::sleep_ms;
use ui::{statistics_data, CompanyLogo, Icon, LineChart, ThemeToggle, use_animated_counter};

const SPLASH_MS: u64 = 1000;

/// One row of the (compile-time constant) transaction list.
struct Transaction {
    name: &'static str,
    date: &'static str,
    status: &'static str,
    kind: &'static str,
    amount: f64,
}

impl Transaction {
    fn amount_display(&self) -> String {
        if self.amount < 0.0 {
            format!("-${:.2}", self.amount.abs())
        } else {
            format!("+${:.2}", self.amount)
        }
    }
}

const TRANSACTIONS: [Transaction; 7] = [
    Transaction { name: "Adobe", date: "12 Mar, 11:28 AM", status: "Completed", kind: "Subscription", amount: -35.00 },
    Transaction { name: "Walmart", date: "09 Mar, 09:22 AM", status: "Completed", kind: "Food", amount: -120.00 },
    Transaction { name: "Adidas", date: "02 Mar, 10:32 AM", status: "Completed", kind: "Shopping", amount: -890.00 },
    Transaction { name: "Google", date: "25 Feb, 08:45 AM", status: "Completed", kind: "Subscription", amount: -99.00 },
    Transaction { name: "Apple", date: "18 Feb, 12:00 PM", status: "Completed", kind: "Subscription", amount: -14.99 },
    Transaction { name: "Amazon", date: "10 Feb, 09:00 AM", status: "Completed", kind: "Shopping", amount: -250.00 },
    Transaction { name: "Netflix", date: "03 Feb, 11:00 AM", status: "Completed", kind: "Subscription", amount: -15.00 },
];

#[component]
pub fn Dashboard() -> Element {
    let mut loading = use_signal(|| true);

    let balance = use_animated_counter(32440.99, 2000);
    let available = use_animated_counter(124040.00, 2000);
    let credit_limit = use_animated_counter(520490.00, 2000);

    // Splash overlay flips off once after one second.
    use_effect(move || {
        spawn(async move {
            sleep_ms(SPLASH_MS).await;
            loading.set(false);
        });
    });

    if loading() {
        return rsx! {
            div {
                class: "splash",
                div { class: "splash-brand", "MoneyMatrix" }
            }
        };
    }

    let balance_display = format!("{:.2}", balance());
    let available_display = format!("{:.2}", available());
    let credit_display = format!("{:.2}", credit_limit());

    rsx! {
        div {
            class: "dashboard",

            // Header
            header {
                class: "dashboard-header",
                div {
                    class: "header-left",
                    h1 { class: "header-brand", "MoneyMatrix" }
                    nav {
                        class: "header-nav",
                        button { class: "nav-item active", "Dashboard" }
                        button { class: "nav-item", "Accounts" }
                        button { class: "nav-item", "Cards" }
                        button { class: "nav-item", "Analytics" }
                    }
                }
                div {
                    class: "header-right",
                    ThemeToggle { class: "header-theme-toggle" }
                    Icon { icon: FaBell, width: 18, height: 18 }
                    div {
                        class: "user-chip",
                        CompanyLogo {
                            name: "Emma",
                            alt: "Emma Parson",
                            class: "avatar",
                        }
                        span { "Emma Parson" }
                        Icon { icon: FaChevronDown, width: 12, height: 12 }
                    }
                }
            }

            div {
                class: "dashboard-body",

                // Sidebar
                aside {
                    class: "dashboard-sidebar",
                    button {
                        class: "menu-item active",
                        Icon { icon: FaChartColumn, width: 18, height: 18 }
                        "Dashboard"
                    }
                    button {
                        class: "menu-item",
                        Icon { icon: FaCreditCard, width: 18, height: 18 }
                        "Smart Expense"
                    }
                    button {
                        class: "menu-item",
                        Icon { icon: FaArrowTrendUp, width: 18, height: 18 }
                        "Analytics"
                    }
                    button {
                        class: "menu-item",
                        Icon { icon: FaUsers, width: 18, height: 18 }
                        "Shared Expenses"
                    }
                    button {
                        class: "menu-item",
                        Icon { icon: FaGear, width: 18, height: 18 }
                        "Settings"
                    }
                }

                // Main content
                main {
                    class: "dashboard-main",

                    // Balance card
                    div {
                        class: "card balance-card",
                        p { class: "card-label", "Balance" }
                        h2 { class: "balance-amount", "${balance_display}" }
                        p { class: "balance-detail", "Available to spend: ${available_display}" }
                        p { class: "balance-detail", "Credit limit: ${credit_display}" }
                    }

                    // Statistics
                    div {
                        class: "card",
                        div {
                            class: "card-header",
                            h2 { "Statistics" }
                            select {
                                class: "range-select",
                                option { "Last Year" }
                                option { "Last Month" }
                            }
                        }
                        LineChart { points: statistics_data() }
                    }

                    // Transactions
                    div {
                        class: "card",
                        div {
                            class: "card-header",
                            h2 { "Transactions" }
                            button { class: "nav-item", "View All" }
                        }
                        div {
                            class: "transaction-list",
                            for t in TRANSACTIONS.iter() {
                                div {
                                    key: "{t.name}",
                                    class: "transaction-row",
                                    CompanyLogo {
                                        name: t.name.to_string(),
                                        alt: "{t.name} logo",
                                    }
                                    div {
                                        class: "transaction-info",
                                        p { class: "transaction-name", "{t.name}" }
                                        p { class: "transaction-date", "{t.date}" }
                                    }
                                    span { class: "transaction-kind", "{t.kind}" }
                                    span { class: "transaction-status", "{t.status}" }
                                    span {
                                        class: if t.amount < 0.0 { "transaction-amount negative" } else { "transaction-amount positive" },
                                        "{t.amount_display()}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
