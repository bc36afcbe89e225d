//! CLI command implementations

mod add;
mod delete;
mod edit;
mod fields;
mod list;
mod show;
mod summary;

pub use add::add;
pub use delete::delete;
pub use edit::edit;
pub use fields::BookFields;
pub use list::{list, ListOptions};
pub use show::show;
pub use summary::{genres, stats};

use bookshelf_core::types::{current_year, is_known_genre, is_known_language};
use bookshelf_core::{Book, BookDraft};

/// Warn about values outside the lists the entry form offers
fn warn_unusual(draft: &BookDraft) {
    if !is_known_genre(&draft.genre) {
        tracing::warn!("'{}' is not one of the usual genres", draft.genre);
    }
    if let Some(language) = draft.language.as_deref().filter(|l| !is_known_language(l)) {
        tracing::warn!("'{}' is not one of the usual languages", language);
    }
}

/// Cut a cell to `width` characters
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

/// Print books as an aligned table
fn print_table(books: &[Book]) {
    println!(
        "{:<38} {:<28} {:<20} {:<16} {:>4}  {}",
        "ID", "Title", "Author", "Genre", "Year", "Status"
    );
    for book in books {
        println!(
            "{:<38} {:<28} {:<20} {:<16} {:>4}  {}",
            fit(book.id.as_str(), 38),
            fit(&book.details.title, 28),
            fit(&book.details.author, 20),
            fit(&book.details.genre, 16),
            book.details.published_year,
            book.details.status
        );
    }
}

/// Print every field of a book
fn print_book(book: &Book) {
    println!("ID:          {}", book.id);
    println!("Title:       {}", book.details.title);
    println!("Author:      {}", book.details.author);
    println!("Genre:       {}", book.details.genre);
    println!("Year:        {}", book.details.published_year);
    println!("Status:      {}", book.details.status);
    if let Some(pages) = book.details.pages {
        println!("Pages:       {}", pages);
    }
    if let Some(language) = &book.details.language {
        println!("Language:    {}", language);
    }
    if let Some(publisher) = &book.details.publisher {
        println!("Publisher:   {}", publisher);
    }
    if let Some(isbn) = &book.details.isbn {
        println!("ISBN:        {}", isbn);
    }
    if let Some(description) = &book.details.description {
        println!("Description: {}", description);
    }
}
