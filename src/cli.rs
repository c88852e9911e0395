pub mod command;
pub mod run;

use crate::helper::highlight;
use crate::prelude::{AppError, Contact, PhoneBook};
use std::io::{self, Write};

// OUTPUT FUNCTIONS
pub fn display_contact(contact: &Contact, query: &str) -> String {
    let output = format!(
        "Name:  {}\n\
        Phone: {}\n\
        Email: {}",
        highlight(&contact.name, query, "[", "]"),
        highlight(&contact.phone, query, "[", "]"),
        contact.email
    );
    output
}

pub fn listing_line(i: usize, contact: &Contact) -> String {
    format!(
        "{i:>3}. {:<20} {:16} {}",
        contact.name, contact.phone, contact.email
    )
}

pub fn pager_line(book: &PhoneBook) -> String {
    let prev = if book.pager().has_prev() { "< Prev" } else { "      " };
    let next = if book.pager().has_next() { "Next >" } else { "" };
    format!("{prev}  {}  {next}", book.page_label())
        .trim_end()
        .to_string()
}

pub fn show_browse_menu() -> Result<(), AppError> {
    println!("\n[n] next  [p] prev  [/text] search  [a] add  [q] quit");
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

// INPUT FUNCTIONS
/// `None` once stdin is closed.
pub fn get_input() -> Result<Option<String>, AppError> {
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}

pub fn prompt(label: &str) -> Result<Option<String>, AppError> {
    print!("{label}: ");
    io::stdout().flush()?;
    get_input()
}
