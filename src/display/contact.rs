//! Contact display formatting
//!
//! Formats contacts and upcoming birthdays for terminal output in table and
//! detail views.

use chrono::{Local, NaiveDate};

use crate::models::phone::join_phones;
use crate::models::Record;
use crate::services::UpcomingBirthday;

/// Format a list of contacts as a table
pub fn format_contact_list(records: &[&Record]) -> String {
    if records.is_empty() {
        return "No contacts found.".to_string();
    }

    let rows: Vec<(String, String, String)> = records
        .iter()
        .map(|record| {
            (
                record.name().to_string(),
                join_phones(record.phones()),
                record
                    .birthday()
                    .map(|b| b.to_string())
                    .unwrap_or_default(),
            )
        })
        .collect();

    let name_width = column_width(rows.iter().map(|r| r.0.as_str()), "Name");
    let phones_width = column_width(rows.iter().map(|r| r.1.as_str()), "Phones");

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<phones_width$}  {}\n",
        "Name", "Phones", "Birthday",
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<phones_width$}  {:-<10}\n",
        "", "", "",
    ));

    for (name, phones, birthday) in &rows {
        output.push_str(
            format!("{:<name_width$}  {:<phones_width$}  {}", name, phones, birthday)
                .trim_end(),
        );
        output.push('\n');
    }

    output.push_str(&format!("\nTotal: {} contacts", records.len()));
    output
}

/// Format a single contact's details
pub fn format_contact_details(record: &Record) -> String {
    format_contact_details_on(record, Local::now().date_naive())
}

/// Format a single contact's details relative to `today`
pub fn format_contact_details_on(record: &Record, today: NaiveDate) -> String {
    let mut output = String::new();

    output.push_str(&format!("Contact: {}\n", record.name()));

    if record.phones().is_empty() {
        output.push_str("  Phones:   (none)\n");
    } else {
        output.push_str("  Phones:\n");
        for phone in record.phones() {
            output.push_str(&format!("    - {}\n", phone));
        }
    }

    match record.birthday() {
        Some(birthday) => {
            output.push_str(&format!("  Birthday: {}\n", birthday));
            if let Some(days) = birthday.days_until_next(today) {
                output.push_str(&format!("  Next:     {}\n", format_days_until(days)));
            }
        }
        None => output.push_str("  Birthday: Not set\n"),
    }

    output
}

/// Format upcoming birthdays as a table, soonest first
pub fn format_upcoming_list(upcoming: &[UpcomingBirthday], within_days: i64) -> String {
    if upcoming.is_empty() {
        return format!("No upcoming birthdays in the next {} days.", within_days);
    }

    let mut sorted: Vec<&UpcomingBirthday> = upcoming.iter().collect();
    sorted.sort_by_key(|u| u.days_until);

    let name_width = column_width(sorted.iter().map(|u| u.name.as_str()), "Name");

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<10}  {:<10}  {}\n",
        "Name", "Birthday", "Date", "When",
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<10}  {:-<10}  {:-<12}\n",
        "", "", "", "",
    ));

    for entry in sorted {
        output.push_str(&format!(
            "{:<name_width$}  {:<10}  {:<10}  {}\n",
            entry.name,
            entry.birthday.to_string(),
            entry.next_date.format("%d.%m.%Y").to_string(),
            format_days_until(entry.days_until),
        ));
    }

    output
}

/// Describe a day count in words
pub fn format_days_until(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        n => format!("in {} days", n),
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}
