//! Add command implementation

use super::{current_year, warn_unusual, BookFields};
use anyhow::{Context, Result};
use bookshelf_core::{BookStore, StoreError};

/// Validate the given fields and add the book
pub async fn add(store: &BookStore, fields: BookFields) -> Result<()> {
    let draft = fields.into_new_draft(current_year());
    draft.validate(current_year()).map_err(StoreError::from)?;

    warn_unusual(&draft);

    let book = store
        .add_book(draft)
        .await
        .context("Failed to add book")?;

    tracing::info!("Book added successfully");
    println!("Added {} ({})", book.details.title, book.id);
    Ok(())
}
