//! Core types for the book catalog

mod book;
mod catalog;
mod filter;

pub use book::{current_year, Book, BookDraft, BookId, BookStatus, MIN_PUBLISHED_YEAR};
pub use catalog::{
    is_known_genre, is_known_language, sample_books, DEFAULT_LANGUAGE, GENRES, LANGUAGES,
};
pub use filter::FilterCriteria;
