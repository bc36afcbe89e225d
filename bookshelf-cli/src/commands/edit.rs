//! Edit command implementation

use super::{current_year, warn_unusual, BookFields};
use anyhow::{bail, Context, Result};
use bookshelf_core::{BookId, BookStore, StoreError};

/// Merge the given fields into an existing book and save it
pub async fn edit(store: &BookStore, id: &BookId, fields: BookFields) -> Result<()> {
    if fields.is_empty() {
        bail!("Nothing to change, pass at least one field");
    }

    let existing = store
        .book_by_id(id)
        .with_context(|| format!("No book with id {}", id))?;

    let draft = fields.apply_to(existing.to_draft());
    draft.validate(current_year()).map_err(StoreError::from)?;
    warn_unusual(&draft);

    match store
        .update_book(id, draft)
        .await
        .context("Failed to update book")?
    {
        Some(book) => {
            tracing::info!("Book updated successfully");
            println!("Updated {} ({})", book.details.title, book.id);
            Ok(())
        }
        None => bail!("No book with id {}", id),
    }
}
