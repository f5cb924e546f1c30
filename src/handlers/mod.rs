// Handler modules
pub mod inspect;
pub mod lint;

// Re-export all handler functions
pub use inspect::{handle_args, handle_detect, handle_doctor};
pub use lint::{LintReport, handle_lint};
