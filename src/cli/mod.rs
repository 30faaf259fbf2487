//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod birthday;
pub mod contact;
pub mod export;
pub mod history;
pub mod shell;

pub use birthday::{handle_birthday_command, BirthdayCommands};
pub use contact::{handle_contact_command, ContactCommands};
pub use export::{handle_export_command, handle_import_command, ExportFormat};
pub use history::handle_history_command;
pub use shell::{parse_input, run_shell, Shell, ShellReply};
