//! Genres and stats command implementations

use anyhow::Result;
use bookshelf_core::BookStore;

/// Print the distinct genres in the catalog
pub fn genres(store: &BookStore) -> Result<()> {
    for genre in store.genres() {
        println!("{}", genre);
    }
    Ok(())
}

/// Print catalog counters
pub fn stats(store: &BookStore, json: bool) -> Result<()> {
    let stats = store.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Total books: {}", stats.total);
        println!("Available:   {}", stats.available);
        println!("Issued:      {}", stats.issued);
        println!("Genres:      {}", stats.genres);
    }

    Ok(())
}
