//! End-to-end tests for the `contacts` binary
//!
//! Every test points `CONTACT_BOOK_DATA_DIR` at its own temp dir.

use assert_cmd::Command;
use chrono::{Duration, Local};
use predicates::prelude::*;
use tempfile::TempDir;

fn contacts(data_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_contacts"));
    cmd.env("CONTACT_BOOK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_no_command_prints_hints() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("contacts --help"));
}

#[test]
fn test_add_and_show_contact() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .args(["contact", "add", "Alice", "111", "222", "--birthday", "15.03.1990"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created contact: Alice"));

    contacts(&dir)
        .args(["contact", "phone", "Alice"])
        .assert()
        .success()
        .stdout("Alice's phone numbers: 111; 222\n");

    contacts(&dir)
        .args(["contact", "show", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Birthday: 15.03.1990"));

    assert!(dir.path().join("data").join("contacts.json").exists());
}

#[test]
fn test_duplicate_add_fails() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .args(["contact", "add", "Alice", "111"])
        .assert()
        .success();

    contacts(&dir)
        .args(["contact", "add", "Alice", "222"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact already exists: Alice"));

    contacts(&dir)
        .args(["contact", "phone", "Alice"])
        .assert()
        .stdout("Alice's phone numbers: 111\n");
}

#[test]
fn test_invalid_birthday_rejected() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .args(["contact", "add", "Alice"])
        .assert()
        .success();

    contacts(&dir)
        .args(["birthday", "set", "Alice", "1990-03-15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("use DD.MM.YYYY"));

    contacts(&dir)
        .args(["birthday", "show", "Alice"])
        .assert()
        .success()
        .stdout("No birthday set for Alice.\n");
}

#[test]
fn test_upcoming_birthdays() {
    let dir = TempDir::new().unwrap();
    let soon = Local::now().date_naive() + Duration::days(3);
    let far = Local::now().date_naive() + Duration::days(20);

    for (name, date) in [("Soon", soon), ("Far", far)] {
        contacts(&dir)
            .args(["contact", "add", name])
            .assert()
            .success();
        // 2000 is a leap year, so any day/month pair is valid
        contacts(&dir)
            .args(["birthday", "set", name])
            .arg(format!("{}.2000", date.format("%d.%m")))
            .assert()
            .success();
    }

    contacts(&dir)
        .args(["birthday", "upcoming"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Soon").and(predicate::str::contains("in 3 days")))
        .stdout(predicate::str::contains("Far").not());

    contacts(&dir)
        .args(["birthday", "upcoming", "--days", "2"])
        .assert()
        .success()
        .stdout("No upcoming birthdays in the next 2 days.\n");
}

#[test]
fn test_config_window_is_default_for_upcoming() {
    let dir = TempDir::new().unwrap();
    let date = Local::now().date_naive() + Duration::days(10);

    contacts(&dir)
        .args(["contact", "add", "Alice", "--birthday"])
        .arg(format!("{}.2000", date.format("%d.%m")))
        .assert()
        .success();

    contacts(&dir)
        .args(["birthday", "upcoming"])
        .assert()
        .stdout("No upcoming birthdays in the next 7 days.\n");

    contacts(&dir)
        .args(["config", "--upcoming-days", "14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Upcoming window: 14 days"));

    contacts(&dir)
        .args(["birthday", "upcoming"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));
}

#[test]
fn test_delete_requires_force() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .args(["contact", "add", "Alice"])
        .assert()
        .success();

    contacts(&dir)
        .args(["contact", "delete", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm."));

    contacts(&dir)
        .args(["contact", "delete", "Alice", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted contact: Alice"));

    contacts(&dir)
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn test_history_records_changes() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .args(["contact", "add", "Alice", "111"])
        .assert()
        .success();
    contacts(&dir)
        .args(["contact", "change", "Alice", "111", "222"])
        .assert()
        .success();

    contacts(&dir)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Alice"))
        .stdout(predicate::str::contains("UPDATE Alice"));
}

#[test]
fn test_export_and_import() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let export_file = source.path().join("book.json");

    contacts(&source)
        .args(["contact", "add", "Alice", "111"])
        .assert()
        .success();

    contacts(&source)
        .arg("export")
        .arg(&export_file)
        .args(["--format", "json", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 contacts"));

    contacts(&target)
        .arg("import")
        .arg(&export_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 contacts."));

    contacts(&target)
        .args(["contact", "phone", "Alice"])
        .assert()
        .success()
        .stdout("Alice's phone numbers: 111\n");
}

#[test]
fn test_shell_session() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .arg("shell")
        .write_stdin(
            "hello\nadd Alice 111\nadd-birthday Alice 15.03.1990\nall\nchange Alice\nfoo\nexit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains(
            "Contact name: Alice, phones: 111, birthday: 15.03.1990",
        ))
        .stdout(predicate::str::contains(
            "Usage: change [name] [old_number] [new_number]",
        ))
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains("Good bye!"));

    // The session was saved
    contacts(&dir)
        .args(["birthday", "show", "Alice"])
        .assert()
        .success()
        .stdout("Alice's birthday is on 15.03.1990.\n");
}

#[test]
fn test_init_twice() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));
    assert!(dir.path().join("config.json").exists());

    contacts(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
}

#[test]
fn test_history_before_any_change() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout("No history recorded yet.\n");
}

#[test]
fn test_padded_name_round_trip() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .args(["contact", "add", " Alice", "111"])
        .assert()
        .success();

    contacts(&dir)
        .args(["contact", "phone", " Alice"])
        .assert()
        .success()
        .stdout("Alice's phone numbers: 111\n");

    contacts(&dir)
        .args(["birthday", "set", "Alice ", "15.03.1990"])
        .assert()
        .success();

    contacts(&dir)
        .args(["birthday", "show", " Alice "])
        .assert()
        .success()
        .stdout("Alice's birthday is on 15.03.1990.\n");
}
