//! Delete command implementation

use anyhow::{bail, Context, Result};
use bookshelf_core::{BookId, BookStore};

/// Delete a book by id
pub async fn delete(store: &BookStore, id: &BookId) -> Result<()> {
    let title = store
        .book_by_id(id)
        .map(|book| book.details.title)
        .unwrap_or_default();

    let removed = store
        .delete_book(id)
        .await
        .context("Failed to delete book")?;
    if !removed {
        bail!("No book with id {}", id);
    }

    tracing::info!("Book deleted successfully");
    println!("Deleted {} ({})", title, id);
    Ok(())
}
