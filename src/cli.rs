pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::MenuCommand;
use crate::errors::AppError;
use std::io::{self, ErrorKind, Write};

// OUTPUT FUNCTIONS
pub fn show_menu() -> Result<(), AppError> {
    println!("\nPhonebook Management System");
    println!("1. Add Entry");
    println!("2. Delete Entry");
    println!("3. Search Entry");
    println!("4. Update Entry");
    println!("5. Display Phonebook");
    println!("6. Sort Phonebook");
    println!("7. Save Phonebook to File");
    println!("8. Exit");
    print!("Enter your choice: ");
    io::stdout().flush()?;
    Ok(())
}

pub fn parse_command_from_menu() -> Result<MenuCommand, AppError> {
    show_menu()?;

    let selector = get_input()?;
    MenuCommand::from_selector(&selector).ok_or(AppError::ParseCommand(selector))
}

// INPUT FUNCTIONS
/// Reads one trimmed line. A closed stdin surfaces as `UnexpectedEof`.
pub fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;

    if read == 0 {
        return Err(AppError::Io(io::Error::new(
            ErrorKind::UnexpectedEof,
            "standard input closed",
        )));
    }
    Ok(input.trim().to_string())
}

pub fn prompt(message: &str) -> Result<String, AppError> {
    print!("{}", message);
    io::stdout().flush()?;
    get_input()
}

/// Like [`prompt`], but an empty answer is a validation error.
pub fn prompt_required(message: &str, field: &str) -> Result<String, AppError> {
    let input = prompt(message)?;

    if input.is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(input)
}

pub fn is_end_of_input(err: &AppError) -> bool {
    matches!(err, AppError::Io(e) if e.kind() == ErrorKind::UnexpectedEof)
}
