//! Show command implementation

use super::print_book;
use anyhow::{Context, Result};
use bookshelf_core::{BookId, BookStore};

/// Display a single book
pub fn show(store: &BookStore, id: &BookId, json: bool) -> Result<()> {
    let book = store
        .book_by_id(id)
        .with_context(|| format!("No book with id {}", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        print_book(&book);
    }

    Ok(())
}
