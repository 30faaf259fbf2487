//! Birthday CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_upcoming_list;
use crate::error::ContactsResult;
use crate::services::ContactService;
use crate::storage::Storage;

/// Birthday subcommands
#[derive(Subcommand)]
pub enum BirthdayCommands {
    /// Set a contact's birthday
    Set {
        /// Contact name
        name: String,
        /// Birthday (DD.MM.YYYY)
        date: String,
    },
    /// Show a contact's birthday
    Show {
        /// Contact name
        name: String,
    },
    /// List birthdays coming up soon
    Upcoming {
        /// Look-ahead window in days (default from config)
        #[arg(short, long, allow_negative_numbers = true)]
        days: Option<i64>,
    },
}

/// Handle a birthday command
pub fn handle_birthday_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: BirthdayCommands,
) -> ContactsResult<()> {
    let mut service = ContactService::new(storage);

    match cmd {
        BirthdayCommands::Set { name, date } => {
            let record = service.set_birthday(&name, &date)?;
            if let Some(birthday) = record.birthday() {
                println!("Birthday for {} set to {}", record.name(), birthday);
            }
        }

        BirthdayCommands::Show { name } => {
            let record = service.get(&name)?;
            match record.birthday() {
                Some(birthday) => println!("{}'s birthday is on {}.", record.name(), birthday),
                None => println!("No birthday set for {}.", record.name()),
            }
        }

        BirthdayCommands::Upcoming { days } => {
            let days = days.unwrap_or_else(|| i64::from(settings.upcoming_window_days));
            let upcoming = service.upcoming_birthdays(days);
            println!("{}", format_upcoming_list(&upcoming, days).trim_end());
        }
    }

    Ok(())
}
