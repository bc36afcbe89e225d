//! Property tests for the derived views

use bookshelf_core::view::{filtered_books, genres, paginated_books, total_pages};
use bookshelf_core::{reduce, Action, Book, BookDraft, BookId, BookStatus, StoreState};
use proptest::prelude::*;

const GENRE_POOL: &[&str] = &["Fantasy", "Fiction", "History", "Mystery"];

fn arb_book() -> impl Strategy<Value = Book> {
    (
        "[A-Za-z ]{1,12}",
        "[A-Za-z ]{1,12}",
        0..GENRE_POOL.len(),
        1000i32..2024,
        any::<bool>(),
    )
        .prop_map(|(title, author, genre, year, issued)| {
            let status = if issued {
                BookStatus::Issued
            } else {
                BookStatus::Available
            };
            (title, author, GENRE_POOL[genre], year, status)
        })
        .prop_map(|(title, author, genre, year, status)| {
            BookDraft::new(title, author, genre, year).with_status(status)
        })
        .prop_map(|draft| Book::from_draft(BookId::generate(), draft))
}

fn state_with(books: Vec<Book>, per_page: usize) -> StoreState {
    reduce(StoreState::new(per_page), Action::SetBooks(books))
}

proptest! {
    #[test]
    fn pages_partition_the_filtered_view(
        books in prop::collection::vec(arb_book(), 0..60),
        per_page in 1usize..15,
        term in "[a-z]{0,2}",
    ) {
        let state = reduce(state_with(books, per_page), Action::SetSearchTerm(term));
        let filtered = filtered_books(&state);
        let pages = total_pages(&state);

        prop_assert_eq!(pages, filtered.len().div_ceil(per_page));

        let mut joined = Vec::new();
        let mut state = state;
        for page in 1..=pages + 1 {
            state = reduce(state, Action::SetCurrentPage(page));
            let slice = paginated_books(&state);
            prop_assert!(slice.len() <= per_page);
            if page > pages {
                prop_assert!(slice.is_empty());
            }
            joined.extend(slice);
        }
        prop_assert_eq!(joined, filtered);
    }

    #[test]
    fn filtered_books_satisfy_every_criterion(
        books in prop::collection::vec(arb_book(), 0..40),
        term in "[a-z]{0,2}",
        genre in 0..GENRE_POOL.len(),
        issued in any::<bool>(),
    ) {
        let status = if issued { BookStatus::Issued } else { BookStatus::Available };
        let state = state_with(books.clone(), 10);
        let state = reduce(state, Action::SetSearchTerm(term.clone()));
        let state = reduce(state, Action::SetGenreFilter(GENRE_POOL[genre].to_string()));
        let state = reduce(state, Action::SetStatusFilter(Some(status)));

        let filtered = filtered_books(&state);
        for book in &filtered {
            prop_assert!(
                book.details.title.to_lowercase().contains(&term)
                    || book.details.author.to_lowercase().contains(&term)
            );
            prop_assert_eq!(book.details.genre.as_str(), GENRE_POOL[genre]);
            prop_assert_eq!(book.details.status, status);
        }

        let expected = books
            .iter()
            .filter(|b| b.details.genre == GENRE_POOL[genre] && b.details.status == status)
            .filter(|b| b.details.title.to_lowercase().contains(&term) || b.details.author.to_lowercase().contains(&term))
            .count();
        prop_assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn genres_are_distinct_and_sorted(books in prop::collection::vec(arb_book(), 0..40)) {
        let state = state_with(books.clone(), 10);
        let listed = genres(&state);
        prop_assert!(listed.windows(2).all(|w| w[0] < w[1]));
        for book in &books {
            prop_assert!(listed.contains(&book.details.genre));
        }
    }
}
