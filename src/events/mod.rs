pub mod keyboard;
pub mod pointer;

pub use keyboard::{action_for_key, apply_action};
pub use pointer::{handle_window_input, InputOutcome};
