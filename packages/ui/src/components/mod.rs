//! Small form atoms shared by the auth pages.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Checkbox, Input, Label};
