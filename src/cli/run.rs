use crate::{
    cli::{self, command::{Cli, Commands}},
    config::Settings,
    helper::results_line,
    prelude::{AppError, CancelToken, PhoneBook},
    validation::Field,
};
use clap::Parser;
use tracing::debug;

pub async fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli)?;

    let mut book = settings.build_phonebook()?;
    let cancel = CancelToken::new();

    let outcome = book.load(&cancel).await;
    debug!(?outcome, medium = book.store().storage_medium(), "contacts ready");

    if let Some(msg) = book.load_error() {
        println!("Note: {msg}");
    }

    match cli.command {
        // Listing contacts
        Commands::List { query } => {
            book.set_query(query.unwrap_or_default());
            let filtered = book.filtered_contacts();

            println!("{}", results_line(filtered.len()));
            for (mut i, c) in filtered.iter().enumerate() {
                i += 1;
                println!("{}", cli::listing_line(i, c));
            }
            Ok(())
        }

        // One contact of the results
        Commands::Show { query, page } => {
            book.set_query(query.unwrap_or_default());

            book.go_to_page(page.unwrap_or(1).saturating_sub(1));

            print_current(&book);
            Ok(())
        }

        Commands::Add { name, phone, email } => {
            book.update_draft_field(Field::Name, name);
            book.update_draft_field(Field::Phone, phone);
            book.update_draft_field(Field::Email, email.unwrap_or_default());

            match book.submit() {
                Ok(contact) => {
                    println!("Contact added successfully");
                    println!("{}", cli::display_contact(&contact, ""));
                    Ok(())
                }
                Err(errors) => {
                    for (field, msg) in errors.iter() {
                        eprintln!("{field}: {msg}");
                    }
                    Err(AppError::Validation("Contact was not added".to_string()))
                }
            }
        }

        Commands::Browse { query } => {
            if let Some(query) = query {
                book.set_query(query);
            }
            browse(&mut book)
        }
    }
}

fn print_current(book: &PhoneBook) {
    println!("{}", results_line(book.filtered_contacts().len()));

    if let Some(contact) = book.current_contact() {
        println!();
        println!("{}", cli::display_contact(contact, book.query()));
        println!();
    }
    println!("{}", cli::pager_line(book));
}

fn browse(book: &mut PhoneBook) -> Result<(), AppError> {
    'outerloop: loop {
        print_current(book);
        cli::show_browse_menu()?;

        let Some(action) = cli::get_input()? else {
            break 'outerloop;
        };

        match action.trim() {
            "n" => book.next_page(),
            "p" => book.prev_page(),
            "q" => break 'outerloop,
            "a" => add_from_prompts(book)?,
            other => {
                if let Some(query) = other.strip_prefix('/') {
                    book.set_query(query);
                } else {
                    println!("Unrecognized command: '{other}'");
                }
            }
        }
    }

    println!("\nBye!");
    Ok(())
}

fn add_from_prompts(book: &mut PhoneBook) -> Result<(), AppError> {
    'add_contact: loop {
        for field in [Field::Name, Field::Phone, Field::Email] {
            let label = match book.form_errors().get(field) {
                Some(msg) => format!("{field} ({msg})"),
                None => field.to_string(),
            };

            match cli::prompt(&label)? {
                Some(value) if value.trim() == "*" => break 'add_contact,
                Some(value) => book.update_draft_field(field, value),
                None => break 'add_contact,
            }
        }

        match book.submit() {
            Ok(contact) => {
                println!("Added {}", contact.name);
                break 'add_contact;
            }
            Err(errors) => {
                println!("\n{errors}\n* to go back");
                continue 'add_contact;
            }
        }
    }
    Ok(())
}
