//! Interactive create flow using cliclack (Charm-style inline prompts)
//!
//! Only available when the `tui` feature is enabled. Without it, resolve a
//! [`crate::create::CreatePlan`] yourself and call [`crate::create::execute`].

#[cfg(feature = "tui")]
mod prompts;

#[cfg(feature = "tui")]
pub use prompts::{run, CreateArgs};
