//! Command implementations.

pub mod clear;
pub mod export;
pub mod info;
pub mod process;
pub mod show;

pub use self::clear::execute_clear;
pub use self::export::execute_export;
pub use self::info::{print_demo, print_formats, print_help};
pub use self::process::execute_process;
pub use self::show::{execute_show, show_text};
