//! Store state and the transition function that evolves it

use crate::config::DEFAULT_BOOKS_PER_PAGE;
use crate::types::{Book, BookId, BookStatus, FilterCriteria};

/// Everything the store knows at a point in time
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    /// Canonical collection in insertion order
    pub books: Vec<Book>,

    /// True while at least one mutating command is in flight
    pub loading: bool,

    /// Message of the last failed command
    pub error: Option<String>,

    /// Active page of the paginated view, 1-based and unclamped
    pub current_page: usize,

    pub books_per_page: usize,

    pub criteria: FilterCriteria,

    pending: usize,
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new(DEFAULT_BOOKS_PER_PAGE)
    }
}

impl StoreState {
    /// Empty state on page 1
    pub fn new(books_per_page: usize) -> Self {
        Self {
            books: Vec::new(),
            loading: false,
            error: None,
            current_page: 1,
            books_per_page: books_per_page.max(1),
            criteria: FilterCriteria::default(),
            pending: 0,
        }
    }

    /// Number of commands currently in flight
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn find(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|book| &book.id == id)
    }

    pub fn contains(&self, id: &BookId) -> bool {
        self.find(id).is_some()
    }
}

/// The closed set of state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the whole collection (hydration)
    SetBooks(Vec<Book>),
    /// A mutating command started
    BeginCommand,
    /// A mutating command finished, successfully or not
    EndCommand,
    AddBook(Book),
    /// Replace the book with the same id; no-op if absent
    UpdateBook(Book),
    /// Remove the book with this id; no-op if absent
    DeleteBook(BookId),
    SetError(String),
    ClearError,
    SetCurrentPage(usize),
    SetSearchTerm(String),
    SetGenreFilter(String),
    SetStatusFilter(Option<BookStatus>),
}

/// Apply an action to a state, producing the next state
pub fn reduce(mut state: StoreState, action: Action) -> StoreState {
    match action {
        Action::SetBooks(books) => {
            state.books = books;
            state.loading = false;
        }
        Action::BeginCommand => {
            state.pending += 1;
            state.loading = true;
        }
        Action::EndCommand => {
            state.pending = state.pending.saturating_sub(1);
            state.loading = state.pending > 0;
        }
        Action::AddBook(book) => state.books.push(book),
        Action::UpdateBook(book) => {
            if let Some(slot) = state.books.iter_mut().find(|b| b.id == book.id) {
                *slot = book;
            }
        }
        Action::DeleteBook(id) => state.books.retain(|book| book.id != id),
        Action::SetError(message) => {
            state.error = Some(message);
            state.loading = false;
        }
        Action::ClearError => state.error = None,
        Action::SetCurrentPage(page) => state.current_page = page,
        Action::SetSearchTerm(term) => {
            state.criteria.search_term = term;
            state.current_page = 1;
        }
        Action::SetGenreFilter(genre) => {
            state.criteria.genre = genre;
            state.current_page = 1;
        }
        Action::SetStatusFilter(status) => {
            state.criteria.status = status;
            state.current_page = 1;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{sample_books, BookDraft};

    fn seeded() -> StoreState {
        reduce(StoreState::default(), Action::SetBooks(sample_books()))
    }

    #[test]
    fn test_initial_state() {
        let state = StoreState::default();
        assert!(state.books.is_empty());
        assert!(!state.loading);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.books_per_page, 10);
        assert!(state.criteria.is_empty());
    }

    #[test]
    fn test_add_appends() {
        let state = seeded();
        let count = state.books.len();
        let book = Book::from_draft(BookId::new("new"), BookDraft::new("T", "A", "G", 2000));
        let state = reduce(state, Action::AddBook(book.clone()));
        assert_eq!(state.books.len(), count + 1);
        assert_eq!(state.books.last(), Some(&book));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let state = seeded();
        let mut replacement = state.books[2].clone();
        replacement.details.title = "Changed".to_string();
        let state = reduce(state, Action::UpdateBook(replacement.clone()));
        assert_eq!(state.books[2], replacement);
        assert_eq!(state.books.len(), sample_books().len());
    }

    #[test]
    fn test_update_and_delete_of_missing_id_are_no_ops() {
        let before = seeded();
        let ghost = Book::from_draft(BookId::new("ghost"), BookDraft::new("T", "A", "G", 2000));
        let after = reduce(before.clone(), Action::UpdateBook(ghost));
        assert_eq!(after, before);
        let after = reduce(after, Action::DeleteBook(BookId::new("ghost")));
        assert_eq!(after, before);
    }

    #[test]
    fn test_delete_keeps_current_page() {
        let state = reduce(seeded(), Action::SetCurrentPage(2));
        let state = reduce(state, Action::DeleteBook(BookId::new("11")));
        assert_eq!(state.current_page, 2);
        assert!(!state.contains(&BookId::new("11")));
    }

    #[test]
    fn test_filter_setters_reset_page() {
        let actions = [
            Action::SetSearchTerm("dune".to_string()),
            Action::SetGenreFilter("Fantasy".to_string()),
            Action::SetStatusFilter(Some(BookStatus::Issued)),
        ];
        for action in actions {
            let state = reduce(seeded(), Action::SetCurrentPage(4));
            let state = reduce(state, action);
            assert_eq!(state.current_page, 1);
        }
    }

    #[test]
    fn test_set_page_is_unclamped() {
        let state = reduce(seeded(), Action::SetCurrentPage(99));
        assert_eq!(state.current_page, 99);
    }

    #[test]
    fn test_loading_tracks_overlapping_commands() {
        let state = reduce(StoreState::default(), Action::BeginCommand);
        let state = reduce(state, Action::BeginCommand);
        assert!(state.loading);
        assert_eq!(state.pending(), 2);

        let state = reduce(state, Action::EndCommand);
        assert!(state.loading);
        let state = reduce(state, Action::EndCommand);
        assert!(!state.loading);

        // Unbalanced ends never underflow
        let state = reduce(state, Action::EndCommand);
        assert_eq!(state.pending(), 0);
    }

    #[test]
    fn test_error_round_trip() {
        let state = reduce(StoreState::default(), Action::BeginCommand);
        let state = reduce(state, Action::SetError("boom".to_string()));
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.loading);

        let state = reduce(state, Action::ClearError);
        assert!(state.error.is_none());
    }
}
