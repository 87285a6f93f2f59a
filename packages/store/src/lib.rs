pub mod prefs;
pub mod settings;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use prefs::Preferences;
pub use settings::{PrefStore, Settings};
