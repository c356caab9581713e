use crate::{
    cli::{self, command::Cli},
    domain::{Directory, Entry, MenuCommand},
    errors::AppError,
    logger,
};
use clap::Parser;
use dotenv::dotenv;
use tracing::{debug, warn};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let args = Cli::parse();

    logger::init_logger(args.verbose);
    debug!(save_path = %args.save_path, "starting phonebook shell");

    let mut directory = Directory::new();

    loop {
        let command = match cli::parse_command_from_menu() {
            Ok(command) => command,
            Err(e) if cli::is_end_of_input(&e) => break,
            Err(AppError::ParseCommand(selector)) => {
                warn!(%selector, "invalid menu choice");
                println!("Invalid choice. Please try again.");
                continue;
            }
            Err(e) => {
                report_error(&e);
                continue;
            }
        };

        if command == MenuCommand::Exit {
            break;
        }

        match execute(&mut directory, command, &args.save_path) {
            Ok(()) => {}
            Err(e) if cli::is_end_of_input(&e) => break,
            Err(AppError::NotFound(item)) => {
                debug!(%item, "lookup missed");
                println!("Entry not found.");
            }
            Err(e) => report_error(&e),
        }
    }

    println!("Exiting...");
    Ok(())
}

/// Reported once; a bad input line is already consumed by `read_line`.
fn report_error(err: &AppError) {
    warn!(error = %err, "operation failed");
    println!("{}", err);
}

fn warn_if_not_round_trip_safe(name: &str, phone: &str) {
    if name.contains(char::is_whitespace) || phone.contains(char::is_whitespace) {
        warn!(name, phone, "entry contains whitespace");
        println!("Warning: spaces are saved as-is and will not read back as separate fields.");
    }
}

fn execute(
    directory: &mut Directory,
    command: MenuCommand,
    default_path: &str,
) -> Result<(), AppError> {
    match command {
        MenuCommand::AddEntry => {
            let name = cli::prompt_required("Enter name: ", "Name")?;
            let phone = cli::prompt_required("Enter phone number: ", "Phone number")?;
            warn_if_not_round_trip_safe(&name, &phone);

            directory.insert(Entry::new(name, phone));
            println!("Entry added successfully.");
        }
        MenuCommand::DeleteEntry => {
            let name = cli::prompt_required("Enter name to delete: ", "Name")?;

            directory
                .delete(&name)
                .ok_or_else(|| AppError::NotFound(format!("Entry '{}'", name)))?;
            println!("Entry deleted successfully.");
        }
        MenuCommand::SearchEntry => {
            let name = cli::prompt_required("Enter name to search: ", "Name")?;

            let entry = directory
                .find(&name)
                .ok_or_else(|| AppError::NotFound(format!("Entry '{}'", name)))?;
            println!("Found: {}", entry);
        }
        MenuCommand::UpdateEntry => {
            let name = cli::prompt_required("Enter name to update: ", "Name")?;
            let phone = cli::prompt_required("Enter new phone number: ", "Phone number")?;
            warn_if_not_round_trip_safe(&name, &phone);

            directory.update(&name, &phone)?;
            println!("Entry updated successfully.");
        }
        MenuCommand::DisplayPhonebook => {
            println!("Phonebook:");
            if directory.is_empty() {
                println!("Phonebook is empty.");
            }
            for entry in directory.iter() {
                println!("{}", entry);
            }
        }
        MenuCommand::SortPhonebook => {
            directory.sort_by_name();
            println!("Phonebook sorted successfully.");
        }
        MenuCommand::SaveToFile => {
            let mut filename = cli::prompt("Enter filename to save: ")?;
            if filename.is_empty() {
                filename = default_path.to_string();
            }

            match directory.save_to_file(&filename) {
                Ok(()) => println!("Phonebook saved to {} successfully.", filename),
                Err(AppError::Io(e)) => {
                    warn!(%filename, error = %e, "save failed");
                    println!("Could not open file for writing: {}", e);
                }
                Err(e) => return Err(e),
            }
        }
        MenuCommand::Exit => {}
    }

    Ok(())
}
