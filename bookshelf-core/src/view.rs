//! Read-only projections derived from the store state

use crate::state::StoreState;
use crate::types::Book;
use serde::Serialize;
use std::collections::BTreeSet;

/// Books matching the active criteria, in canonical order
pub fn filtered_books(state: &StoreState) -> Vec<Book> {
    state
        .books
        .iter()
        .filter(|book| state.criteria.matches(book))
        .cloned()
        .collect()
}

/// The current page of the filtered view.
///
/// Pages are 1-based; page 0 and pages past the end yield an empty slice.
pub fn paginated_books(state: &StoreState) -> Vec<Book> {
    page_of(
        &filtered_books(state),
        state.current_page,
        state.books_per_page,
    )
    .to_vec()
}

/// Slice `items` into 1-based pages of `per_page` and return page `page`
pub fn page_of<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Number of pages needed for the filtered view, 0 when nothing matches
pub fn total_pages(state: &StoreState) -> usize {
    let count = state
        .books
        .iter()
        .filter(|book| state.criteria.matches(book))
        .count();
    count.div_ceil(state.books_per_page.max(1))
}

/// Distinct genres across the whole collection, sorted
pub fn genres(state: &StoreState) -> Vec<String> {
    state
        .books
        .iter()
        .map(|book| book.details.genre.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Dashboard counters over a set of books
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub available: usize,
    pub issued: usize,
    pub genres: usize,
}

impl CatalogStats {
    pub fn from_books(books: &[Book]) -> Self {
        let available = books.iter().filter(|b| b.is_available()).count();
        Self {
            total: books.len(),
            available,
            issued: books.len() - available,
            genres: books
                .iter()
                .map(|b| b.details.genre.as_str())
                .collect::<BTreeSet<_>>()
                .len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{reduce, Action};
    use crate::types::{sample_books, BookDraft, BookId, BookStatus};

    fn state_with(books: Vec<Book>) -> StoreState {
        reduce(StoreState::default(), Action::SetBooks(books))
    }

    fn numbered(count: usize) -> Vec<Book> {
        (0..count)
            .map(|i| {
                Book::from_draft(
                    BookId::new(i.to_string()),
                    BookDraft::new(format!("Book {i}"), "Author", "Fiction", 2000),
                )
            })
            .collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let books = vec![
            Book::from_draft(BookId::new("1"), BookDraft::new("Dune", "Frank Herbert", "Science Fiction", 1965)),
            Book::from_draft(BookId::new("2"), BookDraft::new("Foundation", "Isaac Asimov", "Science Fiction", 1951)),
        ];
        let state = reduce(state_with(books), Action::SetSearchTerm("dune".to_string()));
        let filtered = filtered_books(&state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].details.title, "Dune");
    }

    #[test]
    fn test_filters_combine() {
        let state = state_with(sample_books());
        let state = reduce(state, Action::SetGenreFilter("Science Fiction".to_string()));
        assert_eq!(filtered_books(&state).len(), 2);

        let state = reduce(state, Action::SetStatusFilter(Some(BookStatus::Issued)));
        let filtered = filtered_books(&state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].details.title, "1984");

        let state = reduce(state, Action::SetSearchTerm("herbert".to_string()));
        assert!(filtered_books(&state).is_empty());
        assert_eq!(total_pages(&state), 0);
    }

    #[test]
    fn test_pagination() {
        let state = state_with(numbered(25));
        assert_eq!(total_pages(&state), 3);
        assert_eq!(paginated_books(&state).len(), 10);

        let state = reduce(state, Action::SetCurrentPage(3));
        let page = paginated_books(&state);
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].details.title, "Book 20");

        let state = reduce(state, Action::SetCurrentPage(4));
        assert!(paginated_books(&state).is_empty());

        let state = reduce(state, Action::SetCurrentPage(0));
        assert!(paginated_books(&state).is_empty());
    }

    #[test]
    fn test_page_of_handles_huge_pages() {
        let items = [1, 2, 3];
        assert!(page_of(&items, usize::MAX, 10).is_empty());
        assert_eq!(page_of(&items, 1, 2), &[1, 2]);
        assert_eq!(page_of(&items, 2, 2), &[3]);
    }

    #[test]
    fn test_genres_ignore_filters() {
        let state = state_with(sample_books());
        let all = genres(&state);
        let mut sorted = all.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(all, sorted);
        assert!(all.contains(&"Science Fiction".to_string()));

        let state = reduce(state, Action::SetGenreFilter("Fantasy".to_string()));
        assert_eq!(genres(&state), all);
    }

    #[test]
    fn test_stats() {
        let stats = CatalogStats::from_books(&sample_books());
        assert_eq!(stats.total, 12);
        assert_eq!(stats.available + stats.issued, stats.total);
        assert_eq!(stats.issued, 4);
        assert_eq!(stats.genres, 11);
        assert_eq!(CatalogStats::from_books(&[]), CatalogStats::default());
    }
}
