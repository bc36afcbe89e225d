//! List command implementation

use super::print_table;
use anyhow::Result;
use bookshelf_core::{BookStatus, BookStore};

/// Criteria and page requested on the command line
#[derive(Debug, Default)]
pub struct ListOptions {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub status: Option<BookStatus>,
    pub page: usize,
    pub json: bool,
}

/// Print one page of the filtered catalog
pub fn list(store: &BookStore, options: ListOptions) -> Result<()> {
    // Filters reset the page, so they go first
    store.set_search_term(options.search.unwrap_or_default());
    store.set_genre_filter(options.genre.unwrap_or_default());
    store.set_status_filter(options.status);
    store.set_current_page(options.page);

    let books = store.paginated_books();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    let total_pages = store.total_pages();
    if total_pages == 0 {
        println!("No books match.");
        return Ok(());
    }

    if books.is_empty() {
        println!("Page {} is empty.", store.current_page());
    } else {
        print_table(&books);
    }
    println!();
    println!(
        "Page {} of {} ({} books)",
        store.current_page(),
        total_pages,
        store.filtered_books().len()
    );

    Ok(())
}
