use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use contact_book::cli::{
    handle_birthday_command, handle_contact_command, handle_export_command,
    handle_history_command, handle_import_command, run_shell, ExportFormat,
};
use contact_book::config::{paths::ContactPaths, settings::Settings};
use contact_book::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Terminal contact book with birthday reminders",
    long_about = "A terminal contact book. Keep phone numbers and birthdays for \
                  the people you know, and see whose birthday is coming up."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Contact management commands
    #[command(subcommand, alias = "c")]
    Contact(contact_book::cli::ContactCommands),

    /// Birthday commands
    #[command(subcommand, alias = "bd")]
    Birthday(contact_book::cli::BirthdayCommands),

    /// Export the address book to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Import contacts from a JSON or YAML export
    Import {
        /// Export file to read
        file: PathBuf,

        /// Input format (default: from the file extension)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Start the interactive shell
    #[command(alias = "repl")]
    Shell,

    /// Initialize the data directory
    Init,

    /// Show or update configuration
    Config {
        /// Default look-ahead window for upcoming birthdays
        #[arg(long)]
        upcoming_days: Option<u32>,

        /// Enable or disable the audit log
        #[arg(long, value_name = "true|false")]
        audit: Option<bool>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ContactPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::with_settings(paths.clone(), &settings)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Contact(cmd)) => {
            handle_contact_command(&mut storage, cmd)?;
        }
        Some(Commands::Birthday(cmd)) => {
            handle_birthday_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => {
            handle_export_command(&storage, output, format, pretty)?;
        }
        Some(Commands::Import { file, format }) => {
            handle_import_command(&mut storage, file, format)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Shell) => {
            let stdin = io::stdin();
            run_shell(&mut storage, &settings, stdin.lock(), io::stdout())?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Contact book already initialized at: {}", paths.base_dir().display());
                return Ok(());
            }

            println!("Initializing contact book at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Run 'contacts contact add <name> <phone>' to add your first contact.");
        }
        Some(Commands::Config {
            upcoming_days,
            audit,
        }) => {
            if upcoming_days.is_some() || audit.is_some() {
                if let Some(days) = upcoming_days {
                    settings.upcoming_window_days = days;
                }
                if let Some(enabled) = audit {
                    settings.audit_enabled = enabled;
                }
                settings.save(&paths)?;
                println!("Configuration updated.");
                println!();
            }

            println!("Contact Book Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Contacts file:  {}", paths.contacts_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Upcoming window: {} days", settings.upcoming_window_days);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Shell prompt:    {:?}", settings.shell_prompt);
        }
        None => {
            println!("contacts - Terminal contact book");
            println!();
            println!("Run 'contacts --help' for usage information.");
            println!("Run 'contacts shell' to start the interactive shell.");
        }
    }

    Ok(())
}
