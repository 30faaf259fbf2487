//! Interactive command shell
//!
//! Reads one command per line (`add Alice 0501234567`, `birthdays 14`, ...),
//! runs it against the contact service and prints the reply. Errors are shown
//! as messages and never end the session.

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::format_days_until;
use crate::error::{ContactsError, ContactsResult};
use crate::models::phone::join_phones;
use crate::services::{AddOutcome, ContactService};
use crate::storage::Storage;

const GREETING: &str = "Welcome to the assistant bot!";
const FAREWELL: &str = "Good bye!";

/// What the shell does after a line has been handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellReply {
    /// Print the message and keep reading
    Message(String),
    /// Nothing to print (blank line)
    Silent,
    /// Print the message and stop
    Exit(String),
}

/// Split a line into a lower-cased command and its arguments
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

/// Line-oriented dispatcher over a contact service
pub struct Shell<'a> {
    service: ContactService<'a>,
    default_window: i64,
}

impl<'a> Shell<'a> {
    pub fn new(storage: &'a mut Storage, settings: &Settings) -> Self {
        Self {
            service: ContactService::new(storage),
            default_window: i64::from(settings.upcoming_window_days),
        }
    }

    /// Handle one input line
    pub fn execute(&mut self, line: &str) -> ShellReply {
        let Some((command, args)) = parse_input(line) else {
            return ShellReply::Silent;
        };

        match self.dispatch(&command, &args) {
            Ok(reply) => reply,
            Err(err) => ShellReply::Message(err.to_string()),
        }
    }

    fn dispatch(&mut self, command: &str, args: &[String]) -> ContactsResult<ShellReply> {
        let message = match command {
            "close" | "exit" => {
                self.service.save()?;
                return Ok(ShellReply::Exit(FAREWELL.to_string()));
            }
            "hello" => "How can I help you?".to_string(),
            "add" => self.add_contact(args)?,
            "change" => self.change_phone(args)?,
            "phone" => self.show_phones(args)?,
            "remove-phone" => self.remove_phone(args)?,
            "delete" => self.delete_contact(args)?,
            "all" => self.show_all(args)?,
            "add-birthday" => self.add_birthday(args)?,
            "show-birthday" => self.show_birthday(args)?,
            "birthdays" => self.birthdays(args)?,
            _ => "Invalid command.".to_string(),
        };

        Ok(ShellReply::Message(message))
    }

    fn add_contact(&mut self, args: &[String]) -> ContactsResult<String> {
        let (name, phone) = match args {
            [name] => (name, None),
            [name, phone] => (name, Some(phone.as_str())),
            _ => return Err(arity("add [name] [phone]")),
        };

        let message = match self.service.add_contact(name, phone)? {
            AddOutcome::Added => "Contact added.",
            AddOutcome::Updated => "Contact updated.",
        };
        Ok(message.to_string())
    }

    fn change_phone(&mut self, args: &[String]) -> ContactsResult<String> {
        let [name, old, new] = args else {
            return Err(arity("change [name] [old_number] [new_number]"));
        };

        self.service.change_phone(name, old, new)?;
        Ok("Phone changed.".to_string())
    }

    fn show_phones(&self, args: &[String]) -> ContactsResult<String> {
        let [name] = args else {
            return Err(arity("phone [name]"));
        };

        let record = self.service.get(name)?;
        if record.phones().is_empty() {
            return Ok(format!("{} has no phone numbers.", name));
        }
        Ok(format!(
            "{}'s phone numbers: {}",
            name,
            join_phones(record.phones())
        ))
    }

    fn remove_phone(&mut self, args: &[String]) -> ContactsResult<String> {
        let [name, phone] = args else {
            return Err(arity("remove-phone [name] [number]"));
        };

        self.service.remove_phone(name, phone)?;
        Ok("Phone removed.".to_string())
    }

    fn delete_contact(&mut self, args: &[String]) -> ContactsResult<String> {
        let [name] = args else {
            return Err(arity("delete [name]"));
        };

        self.service.delete(name)?;
        Ok("Contact deleted.".to_string())
    }

    fn show_all(&self, args: &[String]) -> ContactsResult<String> {
        if !args.is_empty() {
            return Err(arity("all"));
        }

        let records = self.service.list();
        if records.is_empty() {
            return Ok("No contacts in the address book.".to_string());
        }

        let lines: Vec<String> = records.iter().map(|r| r.describe()).collect();
        Ok(format!("All contacts:\n{}", lines.join("\n")))
    }

    fn add_birthday(&mut self, args: &[String]) -> ContactsResult<String> {
        let [name, date] = args else {
            return Err(arity("add-birthday [name] [DD.MM.YYYY]"));
        };

        self.service.set_birthday(name, date)?;
        Ok("Birthday added.".to_string())
    }

    fn show_birthday(&self, args: &[String]) -> ContactsResult<String> {
        let [name] = args else {
            return Err(arity("show-birthday [name]"));
        };

        Ok(match self.service.get(name)?.birthday() {
            Some(birthday) => format!("{}'s birthday is on {}.", name, birthday),
            None => format!("No birthday set for {}.", name),
        })
    }

    fn birthdays(&self, args: &[String]) -> ContactsResult<String> {
        let days = match args {
            [] => self.default_window,
            [days] => days.parse::<i64>().map_err(|_| {
                ContactsError::Validation(format!("Invalid number of days: '{}'", days))
            })?,
            _ => return Err(arity("birthdays [days]")),
        };

        let upcoming = self.service.upcoming_birthdays(days);
        if upcoming.is_empty() {
            return Ok(format!("No upcoming birthdays in the next {} days.", days));
        }

        let lines: Vec<String> = upcoming
            .iter()
            .map(|u| {
                format!(
                    "{}: {} ({})",
                    u.name,
                    u.birthday,
                    format_days_until(u.days_until)
                )
            })
            .collect();
        Ok(format!("Upcoming birthdays:\n{}", lines.join("\n")))
    }
}

fn arity(usage: &'static str) -> ContactsError {
    ContactsError::InvalidArgumentCount { usage }
}

/// Run the interactive loop until `exit`/`close` or end of input
///
/// End of input behaves like `exit`, so piped sessions still save.
pub fn run_shell<R, W>(
    storage: &mut Storage,
    settings: &Settings,
    mut input: R,
    mut output: W,
) -> ContactsResult<()>
where
    R: BufRead,
    W: Write,
{
    let mut shell = Shell::new(storage, settings);
    writeln!(output, "{}", GREETING)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", settings.shell_prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            shell.service.save()?;
            writeln!(output)?;
            writeln!(output, "{}", FAREWELL)?;
            return Ok(());
        }

        match shell.execute(&line) {
            ShellReply::Message(message) => writeln!(output, "{}", message)?,
            ShellReply::Silent => {}
            ShellReply::Exit(message) => {
                writeln!(output, "{}", message)?;
                return Ok(());
            }
        }
    }
}
