//! # API crate — outbound service calls for MoneyMatrix
//!
//! The app has no first-party backend; the only network traffic it produces is
//! a best-effort lookup against an external logo-search service, used to show
//! company logos next to transactions. This crate owns that call and its
//! configuration.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | [`LogoConfig`] — endpoint plus an *optionally configured* bearer token. The token is never hard-coded; it comes from the `LOGO_DEV_TOKEN` build-time env var. |
//! | [`logo`] | The lookup itself: request, response model, error type, and the fallback rule ("any failure renders the placeholder"). |

pub mod config;
pub mod logo;

pub use config::{LogoConfig, FALLBACK_LOGO};
pub use logo::{logo_or_fallback, search_logo, LogoEntry, LogoError};
