//! Interaction state owned by the terminal front-end.
//!
//! Each submodule is a self-contained state machine: the search input owns
//! a text value and cursor, the password list owns the filtered listing and
//! its focus, and the prompt sequence owns a queue of console questions.
//! None of them render anything; they expose plain views the rendering
//! layer styles.

mod input;
mod listing;
mod prompt;

pub use input::SearchInput;
pub use listing::{EmptyListing, PasswordList};
pub use prompt::{Prompt, PromptSequence, PromptSignal};
