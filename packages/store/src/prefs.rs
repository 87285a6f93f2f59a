//! # User preferences — the persisted client-side state
//!
//! MoneyMatrix keeps exactly one durable piece of client state: the dark-mode
//! flag. [`Preferences`] models it as a typed record so the storage layer never
//! deals in ad-hoc strings, and so adding a second preference later is a field
//! addition rather than a new key protocol.
//!
//! Values are serialised as JSON when written through a [`crate::PrefStore`],
//! which keeps the stored representation (`"true"` / `"false"`) readable in the
//! browser's devtools and compatible with what the original shipped under the
//! same key.

use serde::{Deserialize, Serialize};

/// Storage key for the dark-mode flag.
pub const DARK_MODE_KEY: &str = "moneymatrix.dark_mode";

/// Client-side preferences. All fields have production defaults so a missing
/// or corrupt stored value is equivalent to a fresh install.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Dark palette when true. Defaults to dark, matching the original app.
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
}

fn default_dark_mode() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: default_dark_mode(),
        }
    }
}
