//! Search and filter criteria applied to the collection

use super::{Book, BookStatus};
use serde::{Deserialize, Serialize};

/// Current search/genre/status constraints. Empty values match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title or author
    pub search_term: String,

    /// Exact genre to keep
    pub genre: String,

    /// Exact status to keep
    pub status: Option<BookStatus>,
}

impl FilterCriteria {
    /// Whether no constraint is active
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.genre.is_empty() && self.status.is_none()
    }

    /// Whether a book satisfies all active constraints
    pub fn matches(&self, book: &Book) -> bool {
        self.matches_search(book) && self.matches_genre(book) && self.matches_status(book)
    }

    fn matches_search(&self, book: &Book) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        book.details.title.to_lowercase().contains(&needle)
            || book.details.author.to_lowercase().contains(&needle)
    }

    fn matches_genre(&self, book: &Book) -> bool {
        self.genre.is_empty() || book.details.genre == self.genre
    }

    fn matches_status(&self, book: &Book) -> bool {
        self.status.map_or(true, |status| book.details.status == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BookDraft, BookId};

    fn book(title: &str, author: &str, genre: &str, status: BookStatus) -> Book {
        Book::from_draft(
            BookId::new(title),
            BookDraft::new(title, author, genre, 2000).with_status(status),
        )
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert!(criteria.matches(&book("Dune", "Frank Herbert", "Science Fiction", BookStatus::Issued)));
    }

    #[test]
    fn test_search_checks_title_and_author() {
        let criteria = FilterCriteria {
            search_term: "HERB".to_string(),
            ..Default::default()
        };
        assert!(criteria.matches(&book("Dune", "Frank Herbert", "Science Fiction", BookStatus::Available)));
        assert!(criteria.matches(&book("Herbarium", "Someone", "Science", BookStatus::Available)));
        assert!(!criteria.matches(&book("Emma", "Jane Austen", "Romance", BookStatus::Available)));
    }

    #[test]
    fn test_genre_and_status_are_exact() {
        let criteria = FilterCriteria {
            genre: "Fantasy".to_string(),
            status: Some(BookStatus::Available),
            ..Default::default()
        };
        assert!(criteria.matches(&book("The Hobbit", "Tolkien", "Fantasy", BookStatus::Available)));
        assert!(!criteria.matches(&book("The Hobbit", "Tolkien", "fantasy", BookStatus::Available)));
        assert!(!criteria.matches(&book("The Hobbit", "Tolkien", "Fantasy", BookStatus::Issued)));
    }
}
