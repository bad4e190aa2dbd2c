//! # formforge-cli
//!
//! The `formforge` management binary: a small command framework plus the
//! built-in `runserver`, `check`, and `createtoken` commands.
//!
//! ```rust
//! use formforge_cli::command::CommandRegistry;
//! use formforge_cli::commands::register_builtin_commands;
//!
//! let mut registry = CommandRegistry::new();
//! register_builtin_commands(&mut registry);
//! assert!(registry.list_commands().contains(&"runserver"));
//! ```

pub mod command;
pub mod commands;

pub use command::{CommandRegistry, ManagementCommand};
