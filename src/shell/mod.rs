//! Process execution and environment lookup.

pub mod command;
pub mod path;
pub mod platform;

pub use command::{execute_program, CommandOptions, CommandResult};
pub use path::{is_executable, parse_system_path, resolve_program, resolve_tool_path};
pub use platform::is_ci;
