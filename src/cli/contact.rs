//! Contact CLI commands
//!
//! Implements CLI commands for contact management.

use clap::Subcommand;

use crate::display::{format_contact_details, format_contact_list};
use crate::error::ContactsResult;
use crate::models::phone::join_phones;
use crate::services::ContactService;
use crate::storage::Storage;

/// Contact subcommands
#[derive(Subcommand)]
pub enum ContactCommands {
    /// Create a new contact
    Add {
        /// Contact name
        name: String,
        /// Phone numbers
        phones: Vec<String>,
        /// Birthday (DD.MM.YYYY)
        #[arg(short, long)]
        birthday: Option<String>,
    },
    /// Replace one of a contact's phone numbers
    Change {
        /// Contact name
        name: String,
        /// Number to replace
        old: String,
        /// Replacement number
        new: String,
    },
    /// Show a contact's phone numbers
    Phone {
        /// Contact name
        name: String,
    },
    /// Remove a phone number from a contact
    RemovePhone {
        /// Contact name
        name: String,
        /// Number to remove
        phone: String,
    },
    /// Delete a contact
    Delete {
        /// Contact name
        name: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List all contacts
    List,
    /// Show contact details
    Show {
        /// Contact name
        name: String,
    },
}

/// Handle a contact command
pub fn handle_contact_command(storage: &mut Storage, cmd: ContactCommands) -> ContactsResult<()> {
    let mut service = ContactService::new(storage);

    match cmd {
        ContactCommands::Add {
            name,
            phones,
            birthday,
        } => {
            let record = service.create_contact(&name, &phones, birthday.as_deref())?;

            println!("Created contact: {}", record.name());
            if !record.phones().is_empty() {
                println!("  Phones:   {}", join_phones(record.phones()));
            }
            if let Some(birthday) = record.birthday() {
                println!("  Birthday: {}", birthday);
            }
        }

        ContactCommands::Change { name, old, new } => {
            let record = service.change_phone(&name, &old, &new)?;
            println!("Updated {}: {} -> {}", record.name(), old, new);
        }

        ContactCommands::Phone { name } => {
            let record = service.get(&name)?;
            if record.phones().is_empty() {
                println!("{} has no phone numbers.", record.name());
            } else {
                println!(
                    "{}'s phone numbers: {}",
                    record.name(),
                    join_phones(record.phones())
                );
            }
        }

        ContactCommands::RemovePhone { name, phone } => {
            let record = service.remove_phone(&name, &phone)?;
            println!("Removed {} from {}", phone, record.name());
        }

        ContactCommands::Delete { name, force } => {
            let record = service.get(&name)?;

            if !force {
                println!("About to delete contact: {}", record);
                println!("Use --force to confirm.");
                return Ok(());
            }

            let deleted = service.delete(&name)?;
            println!("Deleted contact: {}", deleted.name());
        }

        ContactCommands::List => {
            println!("{}", format_contact_list(&service.list()));
        }

        ContactCommands::Show { name } => {
            let record = service.get(&name)?;
            print!("{}", format_contact_details(record));
        }
    }

    Ok(())
}
