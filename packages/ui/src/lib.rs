//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaGoogle};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod theme;
pub use theme::{apply_theme, use_theme, ThemeProvider, ThemeSignal, ThemeToggle};

pub mod validate;
pub use validate::{validate_sign_in, validate_sign_up, FormErrors, SignInData, SignUpData};

mod password;
pub use password::{password_strength, PasswordStrength};

pub mod charts;
pub use charts::{random_bar_data, statistics_data, AnimatedBarChart, BarPoint, LineChart, SeriesPoint};

mod counter;
pub use counter::use_animated_counter;

mod carousel;
pub use carousel::{Testimonial, TestimonialCarousel};

mod budget;
pub use budget::BudgetProgress;

mod logo;
pub use logo::CompanyLogo;

mod navbar;
pub use navbar::Navbar;

pub mod time;
